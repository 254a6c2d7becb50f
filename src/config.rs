//! 定义 taglog 日志门面的配置结构体。
//!
//! `LoggerConfig` 是生效中的配置：全局阈值加上按组件覆盖的阈值。
//! `ConfigUpdate` 是一次更新的候选值，`SharedConfig` 是门面之间共享的句柄。

use crate::core::level::LogLevel;
use crate::error::{Result, TaglogError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

// --- 辅助函数，用于提供配置项的默认值 ---
fn default_level() -> LogLevel {
    LogLevel::Error
}

/// 生效中的日志配置
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default = "default_level")]
    pub level: LogLevel,
    #[serde(default)]
    pub component_level: HashMap<String, LogLevel>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            component_level: HashMap::new(),
        }
    }
}

impl LoggerConfig {
    /// 解析某个组件的有效阈值
    ///
    /// 空组件直接使用全局阈值；有覆盖时使用覆盖值，否则回退到全局阈值。
    pub fn threshold_for(&self, component: &str) -> LogLevel {
        if component.is_empty() {
            return self.level;
        }

        self.component_level
            .get(component)
            .copied()
            .unwrap_or(self.level)
    }
}

/// 配置更新的候选值
///
/// `level` 总是覆盖全局阈值，即使是未设置的默认值 (`Off`)。
/// `component_level` 为 `None` 时保留现有映射；为 `Some` 时整体替换，空映射也一样。
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub component_level: Option<HashMap<String, LogLevel>>,
}

impl ConfigUpdate {
    /// 只更新全局阈值
    pub fn level(level: LogLevel) -> Self {
        Self {
            level,
            component_level: None,
        }
    }

    /// 同时更新全局阈值并替换组件映射
    pub fn with_component_levels(mut self, component_level: HashMap<String, LogLevel>) -> Self {
        self.component_level = Some(component_level);
        self
    }
}

impl From<LoggerConfig> for ConfigUpdate {
    fn from(config: LoggerConfig) -> Self {
        Self {
            level: config.level,
            component_level: Some(config.component_level),
        }
    }
}

/// 多个门面之间共享的配置句柄
///
/// 克隆得到的是同一份配置。内部使用 `RwLock`，日志调用与配置更新可以并发进行；
/// 一次更新在同一个写锁内完成，读者只会看到更新前或更新后的完整配置。
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<LoggerConfig>>,
}

impl SharedConfig {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// 应用一次配置更新，`None` 不做任何修改
    pub fn apply(&self, candidate: Option<ConfigUpdate>) {
        let Some(candidate) = candidate else {
            return;
        };

        let mut config = self.write();
        config.level = candidate.level;

        if let Some(component_level) = candidate.component_level {
            config.component_level = component_level;
        }

        tracing::debug!(
            level = candidate.level.as_str(),
            overrides = config.component_level.len(),
            "Logger configuration updated"
        );
    }

    /// 解析某个组件的有效阈值
    pub fn threshold_for(&self, component: &str) -> LogLevel {
        self.read().threshold_for(component)
    }

    /// 当前配置的快照
    pub fn snapshot(&self) -> LoggerConfig {
        self.read().clone()
    }

    /// 判断两个句柄是否指向同一份配置
    pub fn ptr_eq(&self, other: &SharedConfig) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // 锁中毒时配置本身仍然完整，直接继续使用
    fn read(&self) -> RwLockReadGuard<'_, LoggerConfig> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LoggerConfig> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl From<LoggerConfig> for SharedConfig {
    fn from(config: LoggerConfig) -> Self {
        Self::new(config)
    }
}

/// 用于从 TOML 字符串加载 `ConfigUpdate` 的辅助函数。
pub fn load_config_from_str(config_str: &str) -> Result<ConfigUpdate> {
    let config: ConfigUpdate = toml::from_str(config_str)?;

    validate_config(&config)?;
    Ok(config)
}

/// 从 TOML 文件加载 `ConfigUpdate`
pub fn load_config_from_file(path: &Path) -> Result<ConfigUpdate> {
    if !path.exists() {
        return Err(TaglogError::config(format!(
            "配置文件不存在: {}",
            path.display()
        )));
    }

    let config_str = fs::read_to_string(path)?;
    load_config_from_str(&config_str)
}

/// 验证配置的有效性。
pub fn validate_config(config: &ConfigUpdate) -> Result<()> {
    if let Some(ref component_level) = config.component_level {
        // 空组件名永远不会被查询到
        if component_level.keys().any(|name| name.trim().is_empty()) {
            return Err(TaglogError::config(
                "Component level overrides must use a non-empty component name",
            ));
        }
    }

    Ok(())
}
