//! 扇出 Sink
//!
//! 把同一条记录同时分发给多个子 sink：
//! - 子 sink 在扇出自带的 rayon 线程池中并发执行，`print` 等待全部完成后才返回
//! - 子 sink 的错误或 panic 只记录日志，不影响其他子 sink，也不会传给调用方
//! - 不去重，也不保证子 sink 之间的完成顺序
//!
//! 线程池的线程数等于子 sink 数量，构造后复用，不会每条记录都创建线程。
//! 线程池创建失败时退化为在调用线程上依次分发。
//!
//! # 使用示例
//!
//! ```rust
//! use std::sync::Arc;
//! use taglog::sinks::{ConsoleSink, FanOutSink, LogSink, TracingSink};
//!
//! let console: Arc<dyn LogSink> = Arc::new(ConsoleSink::default());
//! let tracing: Arc<dyn LogSink> = Arc::new(TracingSink::new());
//! let fanout = FanOutSink::new(vec![console, tracing]);
//! assert_eq!(fanout.len(), 2);
//! ```

use crate::core::record::LogRecord;
use crate::sinks::traits::{LogSink, SinkResult};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{error, warn, Span};

/// 扇出 Sink 实现
///
/// 持有子 sink 的共享引用，但不管理它们的生命周期。克隆共享同一个线程池。
#[derive(Debug, Clone, Default)]
pub struct FanOutSink {
    sinks: Vec<Arc<dyn LogSink>>,
    pool: Option<Arc<ThreadPool>>,
}

impl FanOutSink {
    /// 创建新的扇出 sink
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        let pool = build_pool(sinks.len());
        Self { sinks, pool }
    }

    /// 追加一个子 sink
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sinks.push(sink);
        self.pool = build_pool(self.sinks.len());
        self
    }

    pub fn sinks(&self) -> &[Arc<dyn LogSink>] {
        &self.sinks
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// 调用单个子 sink，错误和 panic 只记录不传播
    fn deliver(sink: &dyn LogSink, record: &LogRecord) {
        match panic::catch_unwind(AssertUnwindSafe(|| sink.print(record))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!(sink = sink.name(), error = %e, "Sink error in fan-out dispatch");
            }
            Err(_) => {
                error!(sink = sink.name(), "Sink panicked in fan-out dispatch");
            }
        }
    }
}

/// 只有两个以上子 sink 时才需要线程池
fn build_pool(children: usize) -> Option<Arc<ThreadPool>> {
    if children < 2 {
        return None;
    }

    match ThreadPoolBuilder::new()
        .num_threads(children)
        .thread_name(|i| format!("taglog-fanout-{}", i))
        .build()
    {
        Ok(pool) => Some(Arc::new(pool)),
        Err(e) => {
            warn!(
                children,
                error = %e,
                "Failed to build fan-out thread pool, delivering sequentially"
            );
            None
        }
    }
}

impl LogSink for FanOutSink {
    fn print(&self, record: &LogRecord) -> SinkResult<()> {
        match &self.pool {
            Some(pool) if self.sinks.len() > 1 => {
                // 工作线程继承调用方的 span
                let span = Span::current();
                let span = &span;
                pool.scope(|scope| {
                    for sink in &self.sinks {
                        scope.spawn(move |_| {
                            let _entered = span.enter();
                            Self::deliver(sink.as_ref(), record);
                        });
                    }
                });
            }
            _ => {
                for sink in &self.sinks {
                    Self::deliver(sink.as_ref(), record);
                }
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "fanout"
    }
}
