//! taglog Sink Traits
//!
//! 定义了统一的 Sink trait 接口，日志门面把每条被接受的记录交给它输出。
//!
//! # 使用示例
//!
//! ```rust
//! use taglog::sinks::traits::{LogSink, SinkResult};
//! use taglog::LogRecord;
//!
//! #[derive(Debug)]
//! struct MyCustomSink;
//!
//! impl LogSink for MyCustomSink {
//!     fn print(&self, record: &LogRecord) -> SinkResult<()> {
//!         println!("custom: {}", record);
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "my_custom_sink"
//!     }
//! }
//! ```

use crate::core::record::LogRecord;
use std::fmt::Debug;
use std::sync::Arc;

/// 基础 Sink trait
///
/// 所有日志输出目标都必须实现此 trait。门面每次只传入一条记录。
pub trait LogSink: Send + Sync + Debug {
    /// 输出一条日志记录
    ///
    /// 失败时返回具体的错误；门面和扇出 sink 只记录该错误，不会向调用方传播。
    fn print(&self, record: &LogRecord) -> SinkResult<()>;

    /// 获取 sink 的名称，用于诊断日志
    fn name(&self) -> &str {
        "sink"
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn print(&self, record: &LogRecord) -> SinkResult<()> {
        (**self).print(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn print(&self, record: &LogRecord) -> SinkResult<()> {
        (**self).print(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// 通用 Sink 错误类型
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// I/O 错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 通用错误
    #[error("Generic error: {0}")]
    Generic(String),

    /// Sink 已关闭
    #[error("Sink is closed")]
    Closed,
}

/// Sink 结果类型
pub type SinkResult<T> = Result<T, SinkError>;
