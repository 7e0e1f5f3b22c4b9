//! Fibonacci-spiral cone: the tree the particles converge into

use crate::particle::ParticleSet;
use crate::rand::RandomSource;
use lumina_core::SceneConfig;
use serde::Serialize;

/// Side of the cube the collapsed starting cloud is scattered in
pub const INITIAL_JITTER: f32 = 0.5;

/// `π·(3 − √5)`, about 2.399963 rad
pub fn golden_angle() -> f64 {
    std::f64::consts::PI * (3.0 - 5.0_f64.sqrt())
}

/// Geometry and launch parameters for the tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeParams {
    pub height: f32,
    pub radius: f32,
    pub explosion_force: f32,
}

impl ShapeParams {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            height: config.tree_height,
            radius: config.tree_radius,
            explosion_force: config.explosion_force,
        }
    }
}

/// Spiral angle of particle `i`, unreduced
pub fn angle_for(i: usize) -> f64 {
    i as f64 * golden_angle()
}

/// Resting position of particle `i` of `n`: apex at `+H/2`, base radius `R` at the bottom.
pub fn target_for(i: usize, n: usize, params: &ShapeParams) -> [f32; 3] {
    let u = i as f32 / n as f32;
    let r = u * params.radius;
    let y = (1.0 - u) * params.height - params.height / 2.0;
    let theta = angle_for(i);
    [
        r * theta.cos() as f32,
        y,
        r * theta.sin() as f32,
    ]
}

/// Builds the particle buffers once, at scene mount.
pub struct ShapeGenerator {
    params: ShapeParams,
}

impl ShapeGenerator {
    pub fn new(params: ShapeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    /// Generate `n` particles. The only random draws are the starting jitter
    /// (three per particle) and the launch speed (one per particle).
    pub fn generate(&self, n: usize, rng: &mut impl RandomSource) -> ParticleSet {
        let mut position = Vec::with_capacity(n * 3);
        let mut target = Vec::with_capacity(n * 3);
        let mut velocity = Vec::with_capacity(n * 3);

        for i in 0..n {
            let t = target_for(i, n, &self.params);

            for _ in 0..3 {
                position.push(rng.centered(INITIAL_JITTER));
            }
            target.extend_from_slice(&t);

            // Launch along the particle's own position vector, not from a common centre
            let len = (t[0] * t[0] + t[1] * t[1] + t[2] * t[2]).sqrt();
            let len = if len > 0.0 { len } else { 1.0 };
            let speed = self.params.explosion_force * (0.5 + rng.next_f32() * 0.5);
            velocity.extend(t.iter().map(|c| c / len * speed));
        }

        ParticleSet {
            position,
            target,
            velocity,
        }
    }
}
