//! taglog Sinks 模块
//!
//! 提供日志输出目标的统一接口和几种具体实现：
//!
//! - 控制台输出（标准输出 / 标准错误）
//! - 任意 `Write` 目标（文件、缓冲区）
//! - tracing 桥接
//! - 扇出：把一条记录同时分发给多个 sink

pub mod console;
pub mod fanout;
pub mod traits;
pub mod tracing_sink;
pub mod writer;

// 重新导出主要类型
pub use console::{ConsoleConfig, ConsoleSink, ConsoleTarget};
pub use fanout::FanOutSink;
pub use tracing_sink::TracingSink;
pub use traits::{LogSink, SinkError, SinkResult};
pub use writer::WriterSink;
