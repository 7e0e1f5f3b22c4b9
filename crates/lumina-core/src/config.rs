//! Scene configuration, selected once at startup and read-only afterwards

use crate::error::{LuminaError, Result};
use crate::types::Palette;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hardware class used to pick a configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classify a browser-style user agent string
    pub fn from_user_agent(agent: &str) -> Self {
        const MOBILE_MARKERS: [&str; 8] = [
            "Android",
            "webOS",
            "iPhone",
            "iPad",
            "iPod",
            "BlackBerry",
            "IEMobile",
            "Opera Mini",
        ];
        let lower = agent.to_ascii_lowercase();
        if MOBILE_MARKERS
            .iter()
            .any(|m| lower.contains(&m.to_ascii_lowercase()))
        {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// How explosion velocity is integrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMode {
    /// `position += velocity` and `velocity *= drag` once per frame.
    /// Total travel depends on the display framerate.
    PerFrame,
    /// Velocity is treated as units per reference frame and rescaled by
    /// `dt * reference_fps`; drag becomes `drag^(dt * reference_fps)`.
    #[default]
    FrameIndependent,
}

/// Text revealed in the final phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardText {
    /// Decorative line above the title; empty means none
    pub headline: String,
    pub title: String,
    pub subtitle: String,
}

impl Default for CardText {
    fn default() -> Self {
        Self {
            headline: String::new(),
            title: "Oun Chhan".to_string(),
            subtitle: "May all your dreams come true, you truly deserve them.".to_string(),
        }
    }
}

/// Immutable scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub tree_height: f32,
    pub tree_radius: f32,
    /// Peak explosion speed, in units per reference frame
    pub explosion_force: f32,
    pub camera_position: [f32; 3],
    /// Convergence rate of the tree morph, per second
    pub morph_speed: f32,
    /// Velocity retained per reference frame during the explosion
    pub drag: f32,
    /// Explosion time after which the message is revealed
    pub settle_seconds: f64,
    pub reference_fps: f32,
    pub integration: IntegrationMode,
    pub star_count: u32,
    pub sparkles: bool,
    pub antialias: bool,
    pub max_pixel_ratio: f32,
    pub seed: u32,
    pub palette: Palette,
    pub text: CardText,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl SceneConfig {
    pub fn desktop() -> Self {
        Self {
            particle_count: 2500,
            tree_height: 8.0,
            tree_radius: 3.5,
            explosion_force: 0.15,
            camera_position: [0.0, 0.0, 12.0],
            morph_speed: 3.0,
            drag: 0.98,
            settle_seconds: 1.5,
            reference_fps: 60.0,
            integration: IntegrationMode::FrameIndependent,
            star_count: 5000,
            sparkles: true,
            antialias: true,
            max_pixel_ratio: 2.0,
            seed: 0x00C0_FFEE,
            palette: Palette::default(),
            text: CardText::default(),
        }
    }

    /// Lighter preset: fewer particles and stars, no sparkles or antialiasing
    pub fn mobile() -> Self {
        Self {
            particle_count: 800,
            star_count: 1000,
            sparkles: false,
            antialias: false,
            max_pixel_ratio: 1.0,
            ..Self::desktop()
        }
    }

    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Desktop => Self::desktop(),
            DeviceClass::Mobile => Self::mobile(),
        }
    }

    /// Parse TOML overrides on top of the preset for `device`.
    ///
    /// Keys missing from `source` keep the preset's value, including keys
    /// inside nested tables such as `[palette]`.
    pub fn from_toml_str(source: &str, device: DeviceClass) -> Result<Self> {
        let overrides: toml::Table = toml::from_str(source)?;
        let mut merged = toml::Value::try_from(Self::for_device(device))?;
        if let toml::Value::Table(base) = &mut merged {
            merge_tables(base, overrides);
        }
        let config: SceneConfig = merged.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Load overrides from a TOML file on top of the preset for `device`.
    pub fn load(path: impl AsRef<Path>, device: DeviceClass) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source, device)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(LuminaError::invalid_config("particle_count", "must be at least 1"));
        }
        positive("tree_height", self.tree_height)?;
        positive("tree_radius", self.tree_radius)?;
        positive("explosion_force", self.explosion_force)?;
        positive("morph_speed", self.morph_speed)?;
        positive("reference_fps", self.reference_fps)?;
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(LuminaError::invalid_config(
                "drag",
                format!("must be in (0, 1], got {}", self.drag),
            ));
        }
        if !(self.settle_seconds.is_finite() && self.settle_seconds > 0.0) {
            return Err(LuminaError::invalid_config(
                "settle_seconds",
                format!("must be positive, got {}", self.settle_seconds),
            ));
        }
        if self.camera_position.iter().any(|c| !c.is_finite()) {
            return Err(LuminaError::invalid_config("camera_position", "must be finite"));
        }
        Ok(())
    }
}

fn positive(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LuminaError::invalid_config(
            field,
            format!("must be positive, got {value}"),
        ))
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(nested) if matches!(base.get(&key), Some(toml::Value::Table(_))) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, nested);
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
