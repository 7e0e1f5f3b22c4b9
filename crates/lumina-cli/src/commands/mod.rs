//! CLI command implementations

pub mod config;
pub mod play;
pub mod shape;

use anyhow::{Context, Result};
use lumina_core::{DeviceClass, SceneConfig};

/// Where a command gets its scene configuration from
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    pub path: Option<String>,
    pub mobile: bool,
    pub user_agent: Option<String>,
}

impl ConfigSource {
    pub fn device(&self) -> DeviceClass {
        if self.mobile {
            return DeviceClass::Mobile;
        }
        self.user_agent
            .as_deref()
            .map(DeviceClass::from_user_agent)
            .unwrap_or_default()
    }

    /// Resolve the preset and apply the override file, if any
    pub fn load(&self) -> Result<SceneConfig> {
        let device = self.device();
        match &self.path {
            Some(path) => SceneConfig::load(path, device)
                .with_context(|| format!("Failed to load config from {}", path)),
            None => Ok(SceneConfig::for_device(device)),
        }
    }
}
