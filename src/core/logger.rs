//! 分级日志门面
//!
//! 每次调用按以下步骤处理：
//! 1. 解析有效阈值：无组件时用全局阈值，否则优先使用组件覆盖值
//! 2. 阈值不允许时立即返回，不做格式化也不调用 sink
//! 3. 没有参数时模板原样作为消息，有参数时按 printf 规则代入
//! 4. 构造 `LogRecord` 交给 sink
//!
//! 日志调用从不返回错误。sink 的失败通过 `tracing` 报告后被吞掉。

use crate::config::{ConfigUpdate, LoggerConfig, SharedConfig};
use crate::core::format::sprintf;
use crate::core::level::LogLevel;
use crate::core::record::LogRecord;
use crate::sinks::traits::LogSink;
use std::fmt::{self, Display};
use std::sync::Arc;

/// 对外暴露的日志接口
pub trait Logger: Send + Sync {
    /// 派生一个作用于其他组件的日志器，共享配置和 sink
    fn with_component(&self, component: &str) -> Box<dyn Logger>;

    fn info(&self, pattern: &str, args: &[&dyn Display]);

    fn error(&self, pattern: &str, args: &[&dyn Display]);

    fn debug(&self, pattern: &str, args: &[&dyn Display]);
}

/// 分级日志门面实现
///
/// 克隆或 [`with_component`](LeveledLogger::with_component) 派生出的实例
/// 与原实例共享同一份配置和同一个 sink。
#[derive(Clone)]
pub struct LeveledLogger {
    config: SharedConfig,
    component: String,
    sink: Arc<dyn LogSink>,
}

impl LeveledLogger {
    /// 创建新的日志门面
    ///
    /// `config` 为 `None` 时使用默认配置（全局 `error`，无组件覆盖）。
    pub fn new(
        sink: Arc<dyn LogSink>,
        component: impl Into<String>,
        config: Option<LoggerConfig>,
    ) -> Self {
        Self::with_shared_config(sink, component, SharedConfig::new(config.unwrap_or_default()))
    }

    /// 使用已有的共享配置创建日志门面
    pub fn with_shared_config(
        sink: Arc<dyn LogSink>,
        component: impl Into<String>,
        config: SharedConfig,
    ) -> Self {
        Self {
            config,
            component: component.into(),
            sink,
        }
    }

    /// 派生作用于 `component` 的新实例，不修改当前实例
    pub fn with_component(&self, component: impl Into<String>) -> Self {
        Self {
            config: self.config.clone(),
            component: component.into(),
            sink: Arc::clone(&self.sink),
        }
    }

    /// 更新共享配置，所有共享该配置的实例立即可见
    pub fn set_config(&self, candidate: Option<ConfigUpdate>) {
        self.config.apply(candidate);
    }

    /// 当前配置的快照
    pub fn config(&self) -> LoggerConfig {
        self.config.snapshot()
    }

    pub fn shared_config(&self) -> &SharedConfig {
        &self.config
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// 当前组件是否允许输出 `level` 级别的日志
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.config.threshold_for(&self.component).can_log(level)
    }

    pub fn info(&self, pattern: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Info, pattern, args);
    }

    pub fn error(&self, pattern: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Error, pattern, args);
    }

    pub fn debug(&self, pattern: &str, args: &[&dyn Display]) {
        self.log(LogLevel::Debug, pattern, args);
    }

    fn log(&self, level: LogLevel, pattern: &str, args: &[&dyn Display]) {
        if !self.is_enabled(level) {
            return;
        }

        // 无参数时模板按字面量处理，不扫描占位符
        let message = if args.is_empty() {
            pattern.to_string()
        } else {
            sprintf(pattern, args)
        };

        let record = LogRecord::new(level, self.component.clone(), message);
        if let Err(e) = self.sink.print(&record) {
            tracing::warn!(
                sink = self.sink.name(),
                component = %self.component,
                error = %e,
                "Failed to deliver log record"
            );
        }
    }
}

impl fmt::Debug for LeveledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledLogger")
            .field("component", &self.component)
            .field("sink", &self.sink.name())
            .field("config", &self.config.snapshot())
            .finish()
    }
}

impl Logger for LeveledLogger {
    fn with_component(&self, component: &str) -> Box<dyn Logger> {
        Box::new(LeveledLogger::with_component(self, component))
    }

    fn info(&self, pattern: &str, args: &[&dyn Display]) {
        LeveledLogger::info(self, pattern, args);
    }

    fn error(&self, pattern: &str, args: &[&dyn Display]) {
        LeveledLogger::error(self, pattern, args);
    }

    fn debug(&self, pattern: &str, args: &[&dyn Display]) {
        LeveledLogger::debug(self, pattern, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::traits::{SinkError, SinkResult};
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    #[derive(Debug, Default)]
    struct MockSink {
        print_calls: Mutex<Vec<LogRecord>>,
    }

    impl MockSink {
        fn calls(&self) -> Vec<LogRecord> {
            self.print_calls.lock().unwrap().clone()
        }
    }

    impl LogSink for MockSink {
        fn print(&self, record: &LogRecord) -> SinkResult<()> {
            self.print_calls.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn config(level: LogLevel, overrides: &[(&str, LogLevel)]) -> Option<LoggerConfig> {
        Some(LoggerConfig {
            level,
            component_level: overrides
                .iter()
                .map(|(name, level)| (name.to_string(), *level))
                .collect(),
        })
    }

    fn make_logger(
        component: &str,
        config: Option<LoggerConfig>,
    ) -> (Arc<MockSink>, LeveledLogger) {
        let sink = Arc::new(MockSink::default());
        let logger = LeveledLogger::new(sink.clone(), component, config);
        (sink, logger)
    }

    #[test]
    fn test_new_with_none_uses_default_config() {
        let (_, logger) = make_logger("test-component", None);
        assert_eq!(logger.component(), "test-component");
        assert_eq!(logger.config(), LoggerConfig::default());
    }

    #[test]
    fn test_new_with_custom_config() {
        let (_, logger) = make_logger(
            "test-component",
            config(LogLevel::Info, &[("test-component", LogLevel::Debug)]),
        );
        assert_eq!(logger.config().level, LogLevel::Info);
    }

    #[test]
    fn test_with_component_shares_config_and_sink() {
        let (_, original) = make_logger("original", config(LogLevel::Info, &[]));
        let derived = original.with_component("new-component");

        assert_eq!(derived.component(), "new-component");
        assert_eq!(original.component(), "original");
        assert!(derived.shared_config().ptr_eq(original.shared_config()));
        assert!(Arc::ptr_eq(derived.sink(), original.sink()));
    }

    #[test]
    fn test_info_cases() {
        let cases: Vec<(&str, Option<LoggerConfig>, &str, &str, Vec<String>, Option<&str>)> = vec![
            (
                "info enabled globally",
                config(LogLevel::Info, &[]),
                "",
                "test message",
                vec![],
                Some("test message"),
            ),
            (
                "info disabled globally",
                config(LogLevel::Error, &[]),
                "",
                "test message",
                vec![],
                None,
            ),
            (
                "component specific level allows info",
                config(LogLevel::Error, &[("test", LogLevel::Info)]),
                "test",
                "test message",
                vec![],
                Some("test message"),
            ),
            (
                "component specific level blocks info",
                config(LogLevel::Debug, &[("test", LogLevel::Error)]),
                "test",
                "test message",
                vec![],
                None,
            ),
            (
                "no info with default config",
                None,
                "test",
                "test message",
                vec![],
                None,
            ),
            (
                "info with formatting",
                config(LogLevel::Info, &[]),
                "test",
                "user %s has %s items",
                vec!["john".to_string(), "5".to_string()],
                Some("user john has 5 items"),
            ),
        ];

        for (name, cfg, component, pattern, args, expected) in cases {
            let (sink, logger) = make_logger(component, cfg);
            let args: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();

            logger.info(pattern, &args);

            let calls = sink.calls();
            match expected {
                Some(message) => {
                    assert_eq!(calls.len(), 1, "case {}", name);
                    assert_eq!(calls[0].level(), LogLevel::Info, "case {}", name);
                    assert_eq!(calls[0].message(), message, "case {}", name);
                    assert_eq!(calls[0].component(), component, "case {}", name);
                }
                None => assert!(calls.is_empty(), "case {}", name),
            }
        }
    }

    #[test]
    fn test_info_with_mixed_arguments() {
        let (sink, logger) = make_logger("", config(LogLevel::Info, &[]));
        logger.info("user %s has %d items", &[&"john", &5]);
        assert_eq!(sink.calls()[0].message(), "user john has 5 items");

        // 调试级别被过滤
        logger.debug("user %s has %d items", &[&"john", &5]);
        assert_eq!(sink.calls().len(), 1);
    }

    #[test]
    fn test_debug_cases() {
        let (sink, logger) = make_logger("", config(LogLevel::Debug, &[]));
        logger.debug("debug message", &[]);
        logger.debug("value is %v", &[&42]);
        let calls = sink.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|r| r.level() == LogLevel::Debug));
        assert_eq!(calls[1].message(), "value is 42");

        let (sink, logger) = make_logger("debugger", None);
        logger.debug("debug message", &[]);
        assert!(sink.calls().is_empty());
    }

    #[test]
    fn test_error_cases() {
        let (sink, logger) = make_logger("", config(LogLevel::Error, &[]));
        logger.error("error occurred", &[]);
        assert_eq!(sink.calls()[0].message(), "error occurred");
        assert_eq!(sink.calls()[0].level(), LogLevel::Error);

        let (sink, logger) = make_logger("", config(LogLevel::Off, &[]));
        logger.error("error occurred", &[]);
        assert!(sink.calls().is_empty());

        let (sink, logger) = make_logger("error-handler", None);
        logger.error(
            "failed to process %s: %v",
            &[&"file.txt", &"permission denied"],
        );
        assert_eq!(
            sink.calls()[0].message(),
            "failed to process file.txt: permission denied"
        );
    }

    #[test]
    fn test_pattern_without_args_is_literal() {
        let (sink, logger) = make_logger("", config(LogLevel::Info, &[]));
        logger.info("100%% sure %s %d", &[]);
        assert_eq!(sink.calls()[0].message(), "100%% sure %s %d");
    }

    #[test]
    fn test_component_override_precedes_global() {
        let (sink, root) = make_logger("", config(LogLevel::Error, &[("svc", LogLevel::Debug)]));
        let svc = root.with_component("svc");

        svc.debug("x", &[]);
        root.debug("x", &[]);

        let calls = sink.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].component(), "svc");
    }

    #[test]
    fn test_is_enabled() {
        let cases = [
            ("", LogLevel::Info, true),
            ("missing", LogLevel::Error, true),
            ("test", LogLevel::Info, true),
            ("blocked", LogLevel::Info, false),
        ];
        let shared = SharedConfig::new(LoggerConfig {
            level: LogLevel::Info,
            component_level: HashMap::from([
                ("test".to_string(), LogLevel::Debug),
                ("blocked".to_string(), LogLevel::Error),
            ]),
        });

        for (component, level, expected) in cases {
            let logger = LeveledLogger::with_shared_config(
                Arc::new(MockSink::default()),
                component,
                shared.clone(),
            );
            assert_eq!(logger.is_enabled(level), expected, "component {:?}", component);
        }
    }

    #[test]
    fn test_set_config_visible_through_derived() {
        let (sink, parent) = make_logger("", None);
        let child = parent.with_component("child");

        child.set_config(Some(ConfigUpdate::level(LogLevel::Info)));

        assert_eq!(parent.config().level, LogLevel::Info);
        parent.info("now visible", &[]);
        assert_eq!(sink.calls().len(), 1);
    }

    #[test]
    fn test_set_config_cases() {
        let (_, logger) = make_logger("test", config(LogLevel::Error, &[("test", LogLevel::Info)]));

        logger.set_config(None);
        assert_eq!(logger.config().level, LogLevel::Error);
        assert_eq!(logger.config().component_level.len(), 1);

        logger.set_config(Some(ConfigUpdate::level(LogLevel::Debug)));
        assert_eq!(logger.config().level, LogLevel::Debug);
        assert_eq!(logger.config().component_level.len(), 1);

        logger.set_config(Some(
            ConfigUpdate::level(LogLevel::Info).with_component_levels(HashMap::new()),
        ));
        assert_eq!(logger.config().level, LogLevel::Info);
        assert!(logger.config().component_level.is_empty());
    }

    #[test]
    fn test_trait_object_usage() {
        let sink = Arc::new(MockSink::default());
        let root: Box<dyn Logger> = Box::new(LeveledLogger::new(
            sink.clone(),
            "",
            config(LogLevel::Debug, &[]),
        ));
        let scoped = root.with_component("scoped");

        scoped.info("hello %s", &[&"world"]);
        scoped.error("bad", &[]);
        scoped.debug("detail", &[]);

        let calls = sink.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].to_string(), "[inf] [scoped]: hello world");
        assert_eq!(calls[1].to_string(), "[err] [scoped]: bad");
        assert_eq!(calls[2].to_string(), "[dbg] [scoped]: detail");
    }

    #[test]
    #[traced_test]
    fn test_sink_failure_is_swallowed() {
        #[derive(Debug)]
        struct Failing;
        impl LogSink for Failing {
            fn print(&self, _record: &LogRecord) -> SinkResult<()> {
                Err(SinkError::Closed)
            }
        }

        let logger = LeveledLogger::new(Arc::new(Failing), "auth", config(LogLevel::Error, &[]));
        logger.error("still returns", &[]);

        assert!(logs_contain("Failed to deliver log record"));
        assert!(logs_contain("Sink is closed"));
        assert!(logs_contain("component=auth"));
    }

    #[test]
    #[traced_test]
    fn test_filtered_call_emits_no_diagnostics() {
        #[derive(Debug)]
        struct Failing;
        impl LogSink for Failing {
            fn print(&self, _record: &LogRecord) -> SinkResult<()> {
                Err(SinkError::Closed)
            }
        }

        let logger = LeveledLogger::new(Arc::new(Failing), "", config(LogLevel::Error, &[]));
        logger.debug("never reaches the sink", &[]);

        assert!(!logs_contain("Failed to deliver log record"));
    }

    proptest! {
        #[test]
        fn prop_no_args_keeps_pattern_verbatim(pattern in ".*") {
            let (sink, logger) = make_logger("", config(LogLevel::Info, &[]));
            logger.info(&pattern, &[]);
            let calls = sink.calls();
            prop_assert_eq!(calls.len(), 1);
            prop_assert_eq!(calls[0].message(), pattern.as_str());
        }
    }
}
