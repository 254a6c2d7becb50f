//! 通用写入 Sink
//!
//! 把渲染后的记录逐行写入任意 `Write` 实现（文件、缓冲区、管道等）。
//! 打开文件等构造工作由调用方完成。

use crate::core::record::LogRecord;
use crate::sinks::traits::{LogSink, SinkResult};
use std::fmt;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Writes one rendered record per line to the wrapped writer.
pub struct WriterSink<W: Write + Send> {
    name: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_name("writer", writer)
    }

    pub fn with_name(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn print(&self, record: &LogRecord) -> SinkResult<()> {
        let mut writer = self.lock();
        writeln!(writer, "{}", record)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
