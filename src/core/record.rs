//! 日志记录定义
//!
//! 每次被接受的日志调用都会生成一条 `LogRecord`，交给 sink 之后即被丢弃。

use crate::core::level::LogLevel;
use std::collections::HashMap;
use std::fmt;

/// 组件标签的键名
pub const COMPONENT_LABEL: &str = "component";

/// 日志记录
///
/// 构造后不可变，由级别、组件标签（可为空）和已格式化的消息组成。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: LogLevel,
    component: String,
    message: String,
}

impl LogRecord {
    /// 创建新的日志记录
    pub fn new(level: LogLevel, component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 提取标签，供附带结构化元数据的 sink 使用
    ///
    /// 组件为空时返回 `None`，而不是空映射。
    pub fn labels(&self) -> Option<HashMap<String, String>> {
        if self.component.is_empty() {
            return None;
        }

        Some(HashMap::from([(
            COMPONENT_LABEL.to_string(),
            self.component.clone(),
        )]))
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.component.is_empty() {
            write!(f, "[{}]: {}", self.level, self.message)
        } else {
            write!(f, "[{}] [{}]: {}", self.level, self.component, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let cases = [
            (
                LogRecord::new(LogLevel::Info, "TestComponent", "Test message"),
                "[inf] [TestComponent]: Test message",
            ),
            (
                LogRecord::new(LogLevel::Error, "", "Error occurred"),
                "[err]: Error occurred",
            ),
            (
                LogRecord::new(LogLevel::Debug, "DebugComponent", ""),
                "[dbg] [DebugComponent]: ",
            ),
            (LogRecord::new(LogLevel::Debug, "X", "m"), "[dbg] [X]: m"),
        ];

        for (record, expected) in cases {
            assert_eq!(record.to_string(), expected);
        }
    }

    #[test]
    fn test_record_labels_with_component() {
        let record = LogRecord::new(LogLevel::Info, "C", "m");
        let labels = record.labels().expect("labels should be present");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get(COMPONENT_LABEL).map(String::as_str), Some("C"));
    }

    #[test]
    fn test_record_labels_without_component() {
        let record = LogRecord::new(LogLevel::Error, "", "e");
        assert_eq!(record.labels(), None);
        assert_ne!(record.labels(), Some(HashMap::new()));
    }

    #[test]
    fn test_record_accessors() {
        let record = LogRecord::new(LogLevel::Debug, "svc", "hello");
        assert_eq!(record.level(), LogLevel::Debug);
        assert_eq!(record.component(), "svc");
        assert_eq!(record.message(), "hello");
    }
}
