//! Particle buffers: CPU simulation state and GPU instance data

use bytemuck::{Pod, Zeroable};
use lumina_core::{LuminaError, Result};

/// Fixed-size particle state stored as three parallel `xyz` arrays.
///
/// Index `i` occupies `[3i, 3i + 3)` in every array. `target` is fixed once
/// generated; `position` and `velocity` are only mutated by the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSet {
    pub(crate) position: Vec<f32>,
    pub(crate) target: Vec<f32>,
    pub(crate) velocity: Vec<f32>,
}

impl ParticleSet {
    /// Build from raw parallel arrays. All three must have the same length,
    /// a multiple of three.
    pub fn from_parts(position: Vec<f32>, target: Vec<f32>, velocity: Vec<f32>) -> Result<Self> {
        if position.len() != target.len() || position.len() != velocity.len() {
            return Err(LuminaError::Runtime(format!(
                "particle arrays differ in length: position {}, target {}, velocity {}",
                position.len(),
                target.len(),
                velocity.len()
            )));
        }
        if position.len() % 3 != 0 {
            return Err(LuminaError::Runtime(format!(
                "particle array length {} is not a multiple of 3",
                position.len()
            )));
        }
        Ok(Self {
            position,
            target,
            velocity,
        })
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.position.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.position
    }

    pub fn targets(&self) -> &[f32] {
        &self.target
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocity
    }

    pub fn position_of(&self, i: usize) -> [f32; 3] {
        read3(&self.position, i)
    }

    pub fn target_of(&self, i: usize) -> [f32; 3] {
        read3(&self.target, i)
    }

    pub fn velocity_of(&self, i: usize) -> [f32; 3] {
        read3(&self.velocity, i)
    }

    /// Largest distance between any particle and its target
    pub fn max_target_error(&self) -> f32 {
        (0..self.len())
            .map(|i| length(sub(self.position_of(i), self.target_of(i))))
            .fold(0.0, f32::max)
    }

    /// Mean distance of the particles from the origin
    pub fn mean_radius(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let total: f32 = (0..self.len()).map(|i| length(self.position_of(i))).sum();
        total / self.len() as f32
    }

    /// Largest particle speed
    pub fn max_speed(&self) -> f32 {
        (0..self.len())
            .map(|i| length(self.velocity_of(i)))
            .fold(0.0, f32::max)
    }
}

/// GPU instance data for one point, laid out as a WGSL `vec4<f32>`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    /// xyz = position, w = point size
    pub pos_size: [f32; 4],
}

impl PointInstance {
    pub fn new(position: [f32; 3], size: f32) -> Self {
        Self {
            pos_size: [position[0], position[1], position[2], size],
        }
    }
}

fn read3(buf: &[f32], i: usize) -> [f32; 3] {
    let idx = i * 3;
    [buf[idx], buf[idx + 1], buf[idx + 2]]
}

pub(crate) fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub(crate) fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}
