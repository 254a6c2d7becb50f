//! taglog 核心模块
//!
//! 本模块包含日志门面的核心组件：级别、记录、格式化以及门面本身。

pub mod format;
pub mod level;
pub mod logger;
pub mod record;

// 重新导出核心类型
pub use format::sprintf;
pub use level::LogLevel;
pub use logger::{LeveledLogger, Logger};
pub use record::LogRecord;
