//! The boundary to the host rendering engine

use crate::overlay::OverlayContent;
use crate::rig::SceneRig;
use glam::{Mat4, Vec3};
use lumina_core::{Color, Palette, PhaseChange};
use lumina_particles::PointInstance;
use lumina_runtime::{CursorStyle, HitTarget};

/// Blend mode for point rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Additive,
}

/// Look of the particle cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMaterial {
    pub size: f32,
    pub color: Color,
    pub opacity: f32,
    pub blending: BlendMode,
    pub size_attenuation: bool,
    pub depth_write: bool,
}

impl PointMaterial {
    /// Glowing gold points, additively blended
    pub fn gold(palette: &Palette) -> Self {
        Self {
            size: 0.08,
            color: palette.gold,
            opacity: 0.9,
            blending: BlendMode::Additive,
            size_attenuation: true,
            depth_write: false,
        }
    }
}

/// Per-frame point cloud submission
pub struct PointCloudDraw<'a> {
    /// Flat `xyz` positions, three floats per particle
    pub positions: &'a [f32],
    /// The same positions packed for instanced upload
    pub instances: &'a [PointInstance],
    pub material: &'a PointMaterial,
    /// Rotation of the whole cloud about the vertical axis
    pub spin: f32,
}

/// Physically based surface parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMaterial {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: Color,
    pub emissive_intensity: f32,
}

/// Geometry of one mesh part
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    RoundedBox {
        size: [f32; 3],
        radius: f32,
        smoothness: u32,
    },
    Box {
        size: [f32; 3],
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

/// A named mesh with its transform relative to the owning group
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPart {
    pub name: &'static str,
    pub shape: MeshShape,
    pub material: SurfaceMaterial,
    pub local: Mat4,
}

/// Per-frame gift box submission
pub struct GiftBoxDraw<'a> {
    pub parts: &'a [MeshPart],
    /// Group transform applied on top of every part's local transform
    pub transform: Mat4,
    pub hovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov_degrees: f32,
}

/// Axis-aligned region the host hit-tests pointer input against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub target: HitTarget,
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl HitRegion {
    pub fn contains(&self, point: Vec3) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y && d.z <= self.half_extents.z
    }
}

/// What the card needs from the host renderer.
///
/// Calls arrive in frame order: phase notifications first, then camera, then
/// the visible primitives.
pub trait Renderer {
    /// False until the host has its drawables; frames are skipped meanwhile.
    fn is_ready(&self) -> bool {
        true
    }

    /// One-time scene setup: background, lights, atmosphere, post effects
    fn configure(&mut self, rig: &SceneRig);

    fn set_camera(&mut self, pose: &CameraPose);

    fn draw_gift_box(&mut self, gift: &GiftBoxDraw<'_>);

    fn draw_point_cloud(&mut self, cloud: &PointCloudDraw<'_>);

    /// Replace the set of regions that produce pointer events
    fn set_hit_regions(&mut self, regions: &[HitRegion]);

    fn set_cursor(&mut self, cursor: CursorStyle);

    /// Replace the text overlay
    fn show_overlay(&mut self, overlay: &OverlayContent);

    fn phase_changed(&mut self, change: PhaseChange);
}
