//! tracing 桥接 Sink
//!
//! 把记录重新作为 `tracing` 事件发出，记录的标签作为结构化字段附加，
//! 这样门面的输出可以汇入已有的 tracing subscriber。

use crate::core::level::LogLevel;
use crate::core::record::{LogRecord, COMPONENT_LABEL};
use crate::sinks::traits::{LogSink, SinkResult};

/// 以 `tracing` 事件形式输出记录的 Sink
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn print(&self, record: &LogRecord) -> SinkResult<()> {
        let labels = record.labels();
        let component = labels
            .as_ref()
            .and_then(|labels| labels.get(COMPONENT_LABEL))
            .map(String::as_str);
        let message = record.message();

        match (record.level(), component) {
            (LogLevel::Error, Some(c)) => tracing::error!(component = c, "{}", message),
            (LogLevel::Error, None) => tracing::error!("{}", message),
            (LogLevel::Info, Some(c)) => tracing::info!(component = c, "{}", message),
            (LogLevel::Info, None) => tracing::info!("{}", message),
            (LogLevel::Debug, Some(c)) => tracing::debug!(component = c, "{}", message),
            (LogLevel::Debug, None) => tracing::debug!("{}", message),
            // Off 只是阈值，不对应任何事件
            (LogLevel::Off, _) => {}
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
