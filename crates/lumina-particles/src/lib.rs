//! Lumina Particles - the tree-and-explosion particle system
//!
//! Provides a fixed-size particle cloud with:
//! - Fibonacci-spiral cone target generation (`ShapeGenerator`)
//! - Seedable, injectable randomness (`RandomSource`, `ParticleRng`)
//! - Phase-driven integration: exponential morph, then Euler + drag (`ParticleSimulator`)
//! - GPU instance packing for point-cloud draw calls

pub mod curves;
pub mod particle;
pub mod rand;
pub mod shape;
pub mod simulator;

pub use particle::{ParticleSet, PointInstance};
pub use rand::{ParticleRng, RandomSource};
pub use shape::{golden_angle, ShapeGenerator, ShapeParams};
pub use simulator::{ParticleSimulator, SimulationParams, SimulationSignal};

use lumina_core::SceneConfig;
use tracing::info;

/// Generate the cloud described by `config` and wrap it in a simulator.
///
/// Randomness comes from `config.seed`, so the same config always yields the
/// same cloud.
pub fn mount_cloud(config: &SceneConfig) -> ParticleSimulator {
    let generator = ShapeGenerator::new(ShapeParams::from_config(config));
    let mut rng = ParticleRng::new(config.seed);
    let set = generator.generate(config.particle_count, &mut rng);
    info!(particles = set.len(), seed = config.seed, "particle cloud mounted");
    ParticleSimulator::new(set, SimulationParams::from_config(config))
}
