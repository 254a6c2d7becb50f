//! taglog - 带组件标签的分级日志门面
//!
//! taglog 为每条消息附加级别和可选的组件标签，按全局或组件阈值过滤，
//! 再把被接受的记录交给一个或多个 sink 输出。
//!
//! # 快速开始
//!
//! ```rust
//! use std::sync::Arc;
//! use taglog::{ConfigUpdate, LeveledLogger, LogLevel, LoggerConfig};
//! use taglog::sinks::{ConsoleSink, FanOutSink, LogSink, TracingSink};
//!
//! let sinks: Vec<Arc<dyn LogSink>> = vec![
//!     Arc::new(ConsoleSink::default()),
//!     Arc::new(TracingSink::new()),
//! ];
//! let logger = LeveledLogger::new(Arc::new(FanOutSink::new(sinks)), "", None);
//!
//! logger.error("disk %s is full", &[&"/dev/sda1"]);
//!
//! // 派生的实例共享配置和 sink
//! let db = logger.with_component("db");
//! db.set_config(Some(ConfigUpdate::from(LoggerConfig {
//!     level: LogLevel::Error,
//!     component_level: [("db".to_string(), LogLevel::Debug)].into(),
//! })));
//! db.debug("query took %dms", &[&3]);
//! assert!(!logger.is_enabled(LogLevel::Debug));
//! ```
//!
//! # 并发约定
//!
//! 配置通过 [`SharedConfig`] 在实例之间共享，内部带读写锁，可以在日志调用
//! 进行中安全地更新。[`FanOutSink`](sinks::FanOutSink) 并发调用所有子 sink，
//! 并在全部完成后才返回。

pub mod config;
pub mod core;
pub mod env_config;
pub mod error;
pub mod sinks;

// 重新导出主要类型
pub use config::{
    load_config_from_file, load_config_from_str, ConfigUpdate, LoggerConfig, SharedConfig,
};
pub use crate::core::{LeveledLogger, LogLevel, LogRecord, Logger};
pub use env_config::EnvConfig;
pub use error::{Result, TaglogError};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
