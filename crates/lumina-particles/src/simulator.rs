//! Per-frame particle integration driven by the current phase

use crate::curves::lerp_vec3;
use crate::particle::{ParticleSet, PointInstance};
use lumina_core::{IntegrationMode, Phase, SceneConfig};
use tracing::info;

/// Whole-cloud spin while the tree is forming, rad/s
pub const TREE_SPIN_RATE: f32 = 0.1;
/// Whole-cloud spin once the particles are flying, rad/s
pub const DISPERSED_SPIN_RATE: f32 = 0.02;

/// Something the simulation wants the phase machine to know
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationSignal {
    /// The explosion has run past the settle window
    ExplosionSettled,
}

/// Tuning for the integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub morph_speed: f32,
    pub drag: f32,
    pub settle_seconds: f64,
    pub reference_fps: f32,
    pub integration: IntegrationMode,
    pub point_size: f32,
}

impl SimulationParams {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            morph_speed: config.morph_speed,
            drag: config.drag,
            settle_seconds: config.settle_seconds,
            reference_fps: config.reference_fps,
            integration: config.integration,
            ..Self::default()
        }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            morph_speed: 3.0,
            drag: 0.98,
            settle_seconds: 1.5,
            reference_fps: 60.0,
            integration: IntegrationMode::FrameIndependent,
            point_size: 0.08,
        }
    }
}

/// Sole owner and writer of the particle buffers.
pub struct ParticleSimulator {
    set: ParticleSet,
    params: SimulationParams,
    /// Time spent dispersing, starts at zero when the explosion begins
    explosion_time: f64,
    settle_signalled: bool,
    /// Cosmetic rotation of the whole cloud, not part of particle state
    spin: f32,
    instances: Vec<PointInstance>,
}

impl ParticleSimulator {
    pub fn new(set: ParticleSet, params: SimulationParams) -> Self {
        let instances = Vec::with_capacity(set.len());
        Self {
            set,
            params,
            explosion_time: 0.0,
            settle_signalled: false,
            spin: 0.0,
            instances,
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.set
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn explosion_time(&self) -> f64 {
        self.explosion_time
    }

    /// Advance one frame. Returns a signal when the explosion first settles.
    pub fn step(&mut self, dt: f64, phase: Phase) -> Option<SimulationSignal> {
        let dt_f32 = dt as f32;

        match phase {
            Phase::Offering => {}
            Phase::Tree => {
                self.spin += dt_f32 * TREE_SPIN_RATE;
                self.morph(dt_f32);
            }
            Phase::Explosion | Phase::Message => {
                self.spin += dt_f32 * DISPERSED_SPIN_RATE;
                self.explosion_time += dt;
                self.disperse(dt_f32);
            }
        }

        if phase == Phase::Explosion
            && !self.settle_signalled
            && self.explosion_time > self.params.settle_seconds
        {
            self.settle_signalled = true;
            info!(elapsed = self.explosion_time, "explosion settled");
            return Some(SimulationSignal::ExplosionSettled);
        }
        None
    }

    /// First-order approach toward the tree shape
    fn morph(&mut self, dt: f32) {
        // A long frame lands on the target instead of overshooting it
        let blend = (self.params.morph_speed * dt).min(1.0);
        let positions = self.set.position.chunks_exact_mut(3);
        for (p, t) in positions.zip(self.set.target.chunks_exact(3)) {
            let next = lerp_vec3([p[0], p[1], p[2]], [t[0], t[1], t[2]], blend);
            p.copy_from_slice(&next);
        }
    }

    /// Euler step followed by uniform drag.
    ///
    /// In `FrameIndependent` mode drag is applied per unit of time, so a
    /// zero-length frame moves nothing and keeps every velocity as is.
    /// `PerFrame` always applies one full step.
    fn disperse(&mut self, dt: f32) {
        let (step, decay) = match self.params.integration {
            IntegrationMode::PerFrame => (1.0, self.params.drag),
            IntegrationMode::FrameIndependent => {
                let frames = dt * self.params.reference_fps;
                (frames, self.params.drag.powf(frames))
            }
        };
        for (p, v) in self.set.position.iter_mut().zip(self.set.velocity.iter_mut()) {
            *p += *v * step;
            *v *= decay;
        }
    }

    /// Pack current positions for upload. Call after `step()`.
    pub fn pack_instances(&mut self) -> &[PointInstance] {
        self.instances.clear();
        let size = self.params.point_size;
        self.instances.extend(
            self.set
                .position
                .chunks_exact(3)
                .map(|p| PointInstance::new([p[0], p[1], p[2]], size)),
        );
        &self.instances
    }

    /// The most recently packed instances
    pub fn instances(&self) -> &[PointInstance] {
        &self.instances
    }
}
