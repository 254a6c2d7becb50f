//! 环境变量配置模块
//!
//! 从环境变量读取日志阈值：
//!
//! - `TAGLOG_LEVEL`：全局阈值，例如 `info`
//! - `TAGLOG_COMPONENT_LEVELS`：组件覆盖，例如 `svc=debug,db=info`

use crate::config::{validate_config, ConfigUpdate};
use crate::core::level::LogLevel;
use crate::error::{Result, TaglogError};
use std::collections::HashMap;
use std::env;

pub const LEVEL_VAR: &str = "TAGLOG_LEVEL";
pub const COMPONENT_LEVELS_VAR: &str = "TAGLOG_COMPONENT_LEVELS";

/// 环境变量配置管理器
pub struct EnvConfig;

impl EnvConfig {
    /// 从进程环境构建配置更新
    ///
    /// 两个变量都未设置时返回 `Ok(None)`。
    pub fn load() -> Result<Option<ConfigUpdate>> {
        Self::from_values(
            env::var(LEVEL_VAR).ok().filter(|s| !s.trim().is_empty()),
            env::var(COMPONENT_LEVELS_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty()),
        )
    }

    /// 从给定的变量值构建配置更新
    ///
    /// 只设置了组件覆盖时，全局阈值取默认的 `error`，避免把全局输出整体关闭。
    pub fn from_values(
        level: Option<String>,
        component_levels: Option<String>,
    ) -> Result<Option<ConfigUpdate>> {
        if level.is_none() && component_levels.is_none() {
            return Ok(None);
        }

        let level = match level {
            Some(raw) => raw.parse::<LogLevel>()?,
            None => LogLevel::Error,
        };

        let component_level = component_levels
            .as_deref()
            .map(parse_component_levels)
            .transpose()?;

        let update = ConfigUpdate {
            level,
            component_level,
        };
        validate_config(&update)?;
        Ok(Some(update))
    }
}

/// 解析 `name=level` 形式的逗号分隔列表
pub fn parse_component_levels(raw: &str) -> Result<HashMap<String, LogLevel>> {
    let mut levels = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (name, level) = entry.split_once('=').ok_or_else(|| {
            TaglogError::config(format!(
                "Invalid component level entry '{}', expected name=level",
                entry
            ))
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(TaglogError::config(format!(
                "Missing component name in entry '{}'",
                entry
            )));
        }

        levels.insert(name.to_string(), level.parse::<LogLevel>()?);
    }

    Ok(levels)
}
