//! 控制台输出 Sink 实现
//!
//! 提供将日志记录输出到标准输出或标准错误的功能，支持彩色输出和时间戳前缀。

use crate::core::level::LogLevel;
use crate::core::record::LogRecord;
use crate::sinks::traits::{LogSink, SinkResult};
use colored::{ColoredString, Colorize};
use std::fmt::Write as _;
use std::io::{self, Write};

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S%.3f".to_string()
}

/// 控制台输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// 控制台 Sink 配置
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub target: ConsoleTarget,
    /// 是否按级别着色
    pub colored: bool,
    /// 是否在每行前加本地时间戳
    pub timestamp: bool,
    pub timestamp_format: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            colored: true,
            timestamp: false,
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// 控制台输出 Sink
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    config: ConsoleConfig,
}

impl ConsoleSink {
    /// 创建新的控制台 Sink
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    /// 输出到标准错误的 Sink
    pub fn stderr() -> Self {
        Self::new(ConsoleConfig {
            target: ConsoleTarget::Stderr,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// 格式化一行输出（包含换行符）
    fn format_line(&self, record: &LogRecord) -> String {
        let mut line = String::new();

        if self.config.timestamp {
            let now = chrono::Local::now();
            // 非法的时间格式会使写入失败，此时省略时间戳
            if write!(line, "{} ", now.format(&self.config.timestamp_format)).is_err() {
                line.clear();
            }
        }

        let rendered = record.to_string();
        if self.config.colored {
            line.push_str(&colorize(record.level(), &rendered).to_string());
        } else {
            line.push_str(&rendered);
        }

        line.push('\n');
        line
    }
}

fn colorize(level: LogLevel, text: &str) -> ColoredString {
    match level {
        LogLevel::Error => text.red(),
        LogLevel::Info => text.green(),
        LogLevel::Debug => text.cyan(),
        LogLevel::Off => text.normal(),
    }
}

impl LogSink for ConsoleSink {
    fn print(&self, record: &LogRecord) -> SinkResult<()> {
        let line = self.format_line(record);

        match self.config.target {
            ConsoleTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()?;
            }
            ConsoleTarget::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(line.as_bytes())?;
                err.flush()?;
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        match self.config.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}
