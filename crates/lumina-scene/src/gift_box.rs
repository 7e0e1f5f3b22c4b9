//! The wrapped gift shown before the tree appears

use crate::renderer::{GiftBoxDraw, MeshPart, MeshShape, SurfaceMaterial};
use glam::{EulerRot, Mat4, Quat, Vec3};
use lumina_core::{Color, Palette};
use lumina_particles::curves::approach;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

const BOB_FREQUENCY: f32 = 1.5;
const BOB_AMPLITUDE: f32 = 0.2;
const YAW_RATE: f32 = 0.3;
const PITCH_FREQUENCY: f32 = 0.5;
const PITCH_AMPLITUDE: f32 = 0.05;
const HOVER_SCALE: f32 = 1.05;
const HOVER_RATE: f32 = 5.0;

/// Slow drifting float applied around the box, on top of its own idle motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.5,
            float_intensity: 0.5,
        }
    }
}

impl FloatMotion {
    /// Transform of the float group at time `t`
    pub fn transform(&self, t: f32) -> Mat4 {
        let phase = t / 4.0 * self.speed;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            phase.cos() / 8.0 * self.rotation_intensity,
            phase.sin() / 8.0 * self.rotation_intensity,
            phase.sin() / 20.0 * self.rotation_intensity,
        );
        let y = phase.sin() / 10.0 * self.float_intensity;
        Mat4::from_rotation_translation(rotation, Vec3::new(0.0, y, 0.0))
    }
}

/// Mesh parts and idle animation state of the gift box
pub struct GiftBox {
    parts: Vec<MeshPart>,
    float: FloatMotion,
    time: f32,
    yaw: f32,
    scale: f32,
    hovered: bool,
}

impl GiftBox {
    pub fn new(palette: &Palette) -> Self {
        Self {
            parts: build_parts(palette),
            float: FloatMotion::default(),
            time: 0.0,
            yaw: 0.0,
            scale: 1.0,
            hovered: false,
        }
    }

    pub fn parts(&self) -> &[MeshPart] {
        &self.parts
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Vertical bob of the box itself, excluding the float wrapper
    pub fn bob(&self) -> f32 {
        (self.time * BOB_FREQUENCY).sin() * BOB_AMPLITUDE
    }

    pub fn pitch(&self) -> f32 {
        (self.time * PITCH_FREQUENCY).sin() * PITCH_AMPLITUDE
    }

    pub fn update(&mut self, dt: f32, hovered: bool) {
        self.time += dt;
        self.yaw += dt * YAW_RATE;
        self.hovered = hovered;
        let target = if hovered { HOVER_SCALE } else { 1.0 };
        self.scale = approach(self.scale, target, HOVER_RATE, dt);
    }

    /// World transform: float wrapper, then bob, then pitch and yaw, then scale
    pub fn transform(&self) -> Mat4 {
        let own = Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, self.pitch(), self.yaw, 0.0),
            Vec3::new(0.0, self.bob(), 0.0),
        );
        self.float.transform(self.time) * own
    }

    pub fn draw(&self) -> GiftBoxDraw<'_> {
        GiftBoxDraw {
            parts: &self.parts,
            transform: self.transform(),
            hovered: self.hovered,
        }
    }
}

fn build_parts(palette: &Palette) -> Vec<MeshPart> {
    let body = SurfaceMaterial {
        color: palette.box_red,
        roughness: 0.4,
        metalness: 0.1,
        emissive: Color::BLACK,
        emissive_intensity: 0.0,
    };
    let satin = SurfaceMaterial {
        color: palette.ribbon,
        roughness: 0.4,
        metalness: 0.3,
        emissive: Color::from_hex(0xCCCCCC),
        emissive_intensity: 0.1,
    };
    let lid_at = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0));
    let cross = Mat4::from_rotation_y(FRAC_PI_2);

    vec![
        MeshPart {
            name: "base",
            shape: MeshShape::RoundedBox {
                size: [2.0, 1.8, 2.0],
                radius: 0.05,
                smoothness: 4,
            },
            material: body,
            local: Mat4::IDENTITY,
        },
        MeshPart {
            name: "lid",
            shape: MeshShape::RoundedBox {
                size: [2.1, 0.4, 2.1],
                radius: 0.05,
                smoothness: 4,
            },
            material: body,
            local: lid_at,
        },
        MeshPart {
            name: "ribbon_body",
            shape: MeshShape::Box {
                size: [2.02, 1.8, 0.35],
            },
            material: satin,
            local: Mat4::IDENTITY,
        },
        MeshPart {
            name: "ribbon_lid",
            shape: MeshShape::Box {
                size: [2.12, 0.4, 0.35],
            },
            material: satin,
            local: lid_at,
        },
        MeshPart {
            name: "ribbon_body_cross",
            shape: MeshShape::Box {
                size: [2.02, 1.8, 0.35],
            },
            material: satin,
            local: cross,
        },
        MeshPart {
            name: "ribbon_lid_cross",
            shape: MeshShape::Box {
                size: [2.12, 0.4, 0.35],
            },
            material: satin,
            local: cross * lid_at,
        },
        MeshPart {
            name: "bow",
            shape: MeshShape::TorusKnot {
                radius: 0.35,
                tube: 0.12,
                tubular_segments: 64,
                radial_segments: 8,
                p: 2,
                q: 3,
            },
            material: satin,
            local: Mat4::from_scale_rotation_translation(
                Vec3::new(1.0, 1.0, 1.5),
                Quat::from_euler(EulerRot::XYZ, FRAC_PI_2, 0.0, FRAC_PI_4),
                Vec3::new(0.0, 1.35, 0.0),
            ),
        },
    ]
}
