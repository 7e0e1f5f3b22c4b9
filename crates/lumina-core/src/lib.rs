//! Lumina Core - Foundational types for the Lumina greeting card
//!
//! This crate provides the types every other Lumina crate depends on:
//! - `Phase`, `Trigger`, `PhaseChange` - the four-state experience lifecycle
//! - `SceneConfig`, `DeviceClass` - immutable scene configuration and presets
//! - `Color`, `Palette`, `CardText` - look and content of the card
//! - Error types and Result alias

mod config;
mod error;
mod phase;
mod types;

pub use config::{CardText, DeviceClass, IntegrationMode, SceneConfig};
pub use error::{LuminaError, Result};
pub use phase::{Phase, PhaseChange, Trigger};
pub use types::{Color, Palette};
