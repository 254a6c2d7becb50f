//! 日志级别定义
//!
//! 级别本身同时充当阈值：配置中的级别决定哪些调用级别可以被分发。

use crate::error::TaglogError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// 日志级别枚举
///
/// 详细程度递增：`Error` < `Info` < `Debug`。`Off` 只作为阈值使用，
/// 同时也是未设置时的默认值。
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Info,
    Debug,
}

impl LogLevel {
    /// 以 `self` 作为阈值，判断 `level` 级别的调用是否允许输出
    ///
    /// - `Error` 只放行 `Error`
    /// - `Info` 放行 `Error` 和 `Info`
    /// - `Debug` 全部放行
    /// - `Off` 全部拒绝
    pub fn can_log(self, level: LogLevel) -> bool {
        match self {
            LogLevel::Error => level == LogLevel::Error,
            LogLevel::Info => matches!(level, LogLevel::Error | LogLevel::Info),
            LogLevel::Debug => true,
            LogLevel::Off => false,
        }
    }

    /// 完整的级别名称，与配置中使用的写法一致
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbrev = match self {
            LogLevel::Error => "err",
            LogLevel::Info => "inf",
            LogLevel::Debug => "dbg",
            LogLevel::Off => self.as_str(),
        };
        f.write_str(abbrev)
    }
}

impl FromStr for LogLevel {
    type Err = TaglogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(TaglogError::invalid_level(s)),
        }
    }
}
