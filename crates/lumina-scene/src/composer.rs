//! Scene composition: which primitives are on screen, and what clicking them does

use crate::camera::CameraController;
use crate::gift_box::GiftBox;
use crate::renderer::{HitRegion, PointCloudDraw, PointMaterial, Renderer};
use crate::rig::SceneRig;
use glam::Vec3;
use lumina_core::{Phase, SceneConfig, Trigger};
use lumina_particles::ParticleSimulator;
use lumina_runtime::{CursorStyle, HitTarget};

/// Which primitives are drawn in a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub gift_box: bool,
    pub particle_cloud: bool,
}

impl Visibility {
    pub fn for_phase(phase: Phase) -> Self {
        let offering = phase == Phase::Offering;
        Self {
            gift_box: offering,
            particle_cloud: !offering,
        }
    }

    pub fn shows(&self, target: HitTarget) -> bool {
        match target {
            HitTarget::GiftBox => self.gift_box,
            HitTarget::ParticleCloud => self.particle_cloud,
        }
    }
}

/// Trigger produced by clicking `target` in `phase`, if any
pub fn route_click(target: HitTarget, phase: Phase) -> Option<Trigger> {
    match (target, phase) {
        (HitTarget::GiftBox, Phase::Offering) => Some(Trigger::GiftOpened),
        (HitTarget::ParticleCloud, Phase::Tree) => Some(Trigger::TreeIgnited),
        _ => None,
    }
}

/// Owns the presentation-side state of the scene and submits it each frame
pub struct SceneComposer {
    rig: SceneRig,
    gift: GiftBox,
    camera: CameraController,
    cloud_material: PointMaterial,
    tree_height: f32,
    tree_radius: f32,
}

impl SceneComposer {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            rig: SceneRig::from_config(config),
            gift: GiftBox::new(&config.palette),
            camera: CameraController::new(config.camera_position),
            cloud_material: PointMaterial::gold(&config.palette),
            tree_height: config.tree_height,
            tree_radius: config.tree_radius,
        }
    }

    pub fn rig(&self) -> &SceneRig {
        &self.rig
    }

    pub fn gift_box(&self) -> &GiftBox {
        &self.gift
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn cloud_material(&self) -> &PointMaterial {
        &self.cloud_material
    }

    /// Regions the host should report pointer events for in `phase`
    pub fn hit_regions(&self, phase: Phase) -> Vec<HitRegion> {
        let visible = Visibility::for_phase(phase);
        let mut regions = Vec::with_capacity(1);
        if visible.gift_box {
            // Covers the lid, the bow and the idle bob
            regions.push(HitRegion {
                target: HitTarget::GiftBox,
                center: Vec3::new(0.0, 0.3, 0.0),
                half_extents: Vec3::new(1.5, 1.5, 1.5),
            });
        }
        if visible.particle_cloud {
            regions.push(HitRegion {
                target: HitTarget::ParticleCloud,
                center: Vec3::ZERO,
                half_extents: Vec3::new(
                    self.tree_radius,
                    self.tree_height / 2.0,
                    self.tree_radius,
                ),
            });
        }
        regions
    }

    pub fn cursor(&self, phase: Phase) -> CursorStyle {
        if Visibility::for_phase(phase).gift_box && self.gift.is_hovered() {
            CursorStyle::Pointer
        } else {
            CursorStyle::Auto
        }
    }

    /// Advance camera and gift box animation
    pub fn animate(&mut self, dt: f32, phase: Phase, gift_hovered: bool) {
        self.camera.update(dt, phase);
        if Visibility::for_phase(phase).gift_box {
            self.gift.update(dt, gift_hovered);
        }
    }

    /// Submit camera and visible primitives for this frame
    pub fn draw(
        &self,
        renderer: &mut dyn Renderer,
        phase: Phase,
        cloud: Option<&mut ParticleSimulator>,
    ) {
        renderer.set_camera(&self.camera.pose());

        let visible = Visibility::for_phase(phase);
        if visible.gift_box {
            renderer.draw_gift_box(&self.gift.draw());
        }
        if visible.particle_cloud {
            if let Some(sim) = cloud {
                let spin = sim.spin();
                sim.pack_instances();
                renderer.draw_point_cloud(&PointCloudDraw {
                    positions: sim.particles().positions(),
                    instances: sim.instances(),
                    material: &self.cloud_material,
                    spin,
                });
            }
        }
        renderer.set_cursor(self.cursor(phase));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_per_phase() {
        assert_eq!(
            Visibility::for_phase(Phase::Offering),
            Visibility {
                gift_box: true,
                particle_cloud: false
            }
        );
        for phase in [Phase::Tree, Phase::Explosion, Phase::Message] {
            let v = Visibility::for_phase(phase);
            assert!(!v.gift_box);
            assert!(v.particle_cloud);
        }
    }

    #[test]
    fn click_routing_table() {
        let targets = [HitTarget::GiftBox, HitTarget::ParticleCloud];
        for phase in Phase::ALL {
            for target in targets {
                let expected = match (target, phase) {
                    (HitTarget::GiftBox, Phase::Offering) => Some(Trigger::GiftOpened),
                    (HitTarget::ParticleCloud, Phase::Tree) => Some(Trigger::TreeIgnited),
                    _ => None,
                };
                assert_eq!(route_click(target, phase), expected, "{target:?} in {phase}");
            }
        }
    }

    #[test]
    fn hit_regions_follow_visibility() {
        let composer = SceneComposer::new(&SceneConfig::desktop());
        let offering = composer.hit_regions(Phase::Offering);
        assert_eq!(offering.len(), 1);
        assert_eq!(offering[0].target, HitTarget::GiftBox);

        let tree = composer.hit_regions(Phase::Tree);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].target, HitTarget::ParticleCloud);
        assert!(tree[0].contains(Vec3::new(0.0, 4.0, 0.0)));
        assert!(tree[0].contains(Vec3::new(3.5, -4.0, 0.0)));
    }

    #[test]
    fn cursor_only_points_at_hovered_box() {
        let mut composer = SceneComposer::new(&SceneConfig::desktop());
        assert_eq!(composer.cursor(Phase::Offering), CursorStyle::Auto);
        composer.animate(0.016, Phase::Offering, true);
        assert_eq!(composer.cursor(Phase::Offering), CursorStyle::Pointer);
        assert_eq!(composer.cursor(Phase::Tree), CursorStyle::Auto);
    }

    #[test]
    fn gift_box_frozen_once_hidden() {
        let mut composer = SceneComposer::new(&SceneConfig::desktop());
        composer.animate(1.0, Phase::Offering, false);
        let yaw = composer.gift_box().yaw();
        composer.animate(1.0, Phase::Tree, false);
        assert_eq!(composer.gift_box().yaw(), yaw);
    }
}
