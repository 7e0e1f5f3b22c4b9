//! Lumina Scene - composition and presentation of the greeting card
//!
//! Sits between the simulation and whatever actually draws pixels:
//! - `Renderer` - the trait a host rendering engine implements
//! - `SceneComposer` - per-phase visibility, click routing, hit regions
//! - `GiftBox`, `CameraController`, `SceneRig` - the animated set dressing
//! - `OverlayContent` - phase-dependent text over the scene
//! - `Experience` - the per-frame driver that owns all of the above

pub mod camera;
pub mod composer;
pub mod experience;
pub mod gift_box;
pub mod overlay;
pub mod renderer;
pub mod rig;

pub use camera::CameraController;
pub use composer::{route_click, SceneComposer, Visibility};
pub use experience::Experience;
pub use gift_box::{FloatMotion, GiftBox};
pub use overlay::{MessageLine, OverlayContent, Reveal};
pub use renderer::{
    BlendMode, CameraPose, GiftBoxDraw, HitRegion, MeshPart, MeshShape, PointCloudDraw,
    PointMaterial, Renderer, SurfaceMaterial,
};
pub use rig::SceneRig;
