//! Shape command - dump the generated tree as JSON

use super::ConfigSource;
use anyhow::{Context, Result};
use lumina_core::SceneConfig;
use lumina_particles::{golden_angle, ParticleRng, ShapeGenerator, ShapeParams};
use serde::Serialize;
use std::fs;

#[derive(Serialize)]
struct ShapeDump {
    seed: u32,
    count: usize,
    golden_angle: f64,
    params: ShapeParams,
    targets: Vec<[f32; 3]>,
    velocities: Vec<[f32; 3]>,
}

pub fn run(source: ConfigSource, output: Option<&str>) -> Result<()> {
    let config = source.load()?;
    let json = serde_json::to_string_pretty(&build(&config)).context("Failed to serialize shape")?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
            println!("Wrote {} particles to {}", config.particle_count, path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn build(config: &SceneConfig) -> ShapeDump {
    let params = ShapeParams::from_config(config);
    let set = ShapeGenerator::new(params).generate(config.particle_count, &mut ParticleRng::new(config.seed));
    ShapeDump {
        seed: config.seed,
        count: set.len(),
        golden_angle: golden_angle(),
        params,
        targets: (0..set.len()).map(|i| set.target_of(i)).collect(),
        velocities: (0..set.len()).map(|i| set.velocity_of(i)).collect(),
    }
}
