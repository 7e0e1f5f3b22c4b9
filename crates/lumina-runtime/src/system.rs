//! Frame system trait

use lumina_core::Result;

/// A system that can be ticked by the frame loop
///
/// `Ctx` is whatever the host hands every frame; for the card, the renderer.
pub trait FrameSystem<Ctx: ?Sized> {
    /// Called once before the first frame
    fn initialize(&mut self, ctx: &mut Ctx) -> Result<()>;

    /// Called once per display frame with the elapsed time in seconds
    fn update(&mut self, ctx: &mut Ctx, dt: f64) -> Result<()>;

    /// Called when the host tears the scene down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
