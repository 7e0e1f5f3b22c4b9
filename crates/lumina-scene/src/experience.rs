//! The per-frame driver that ties input, phase machine, simulation and presentation together

use crate::composer::{route_click, SceneComposer, Visibility};
use crate::overlay::OverlayContent;
use crate::renderer::Renderer;
use lumina_core::{LuminaError, Phase, Result, SceneConfig, Trigger};
use lumina_particles::{mount_cloud, ParticleSimulator, SimulationSignal};
use lumina_runtime::{FrameSystem, HitTarget, PhaseMachine, PointerEvent, PointerState, SceneEvent};
use tracing::{debug, info, trace};

/// A running greeting card.
///
/// Input is queued by [`Experience::pointer`] and applied at the start of the
/// next [`Experience::frame`], before the simulation steps. Every mutation
/// happens inside `frame`, on the caller's thread.
pub struct Experience {
    config: SceneConfig,
    machine: PhaseMachine,
    pointer: PointerState,
    composer: SceneComposer,
    /// Mounted when the tree first appears
    cloud: Option<ParticleSimulator>,
    frames: u64,
    skipped_frames: u64,
}

impl Experience {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let composer = SceneComposer::new(&config);
        Ok(Self {
            config,
            machine: PhaseMachine::new(),
            pointer: PointerState::new(),
            composer,
            cloud: None,
            frames: 0,
            skipped_frames: 0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Phases visited so far
    pub fn history(&self) -> &[Phase] {
        self.machine.history()
    }

    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    pub fn cloud(&self) -> Option<&ParticleSimulator> {
        self.cloud.as_ref()
    }

    /// Frames fully processed
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames dropped because the renderer was not ready
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }

    /// Queue a pointer callback from the host
    pub fn pointer(&mut self, event: PointerEvent) {
        self.pointer.process(event);
    }

    /// Hand the renderer its one-time setup and the opening overlay
    pub fn start(&mut self, renderer: &mut dyn Renderer) {
        let phase = self.machine.phase();
        renderer.configure(self.composer.rig());
        renderer.set_hit_regions(&self.composer.hit_regions(phase));
        renderer.show_overlay(&OverlayContent::for_phase(phase, &self.config.text));
        info!(
            particles = self.config.particle_count,
            %phase,
            "experience started"
        );
    }

    /// Run one display frame of `dt` seconds
    pub fn frame(&mut self, renderer: &mut dyn Renderer, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(LuminaError::Runtime(format!("invalid frame delta {dt}")));
        }
        if !renderer.is_ready() {
            self.skipped_frames += 1;
            debug!(frame = self.frames, "renderer not ready, frame skipped");
            return Ok(());
        }

        // Clicks are routed against what was on screen when they happened
        let shown = self.machine.phase();
        for target in self.pointer.take_clicks() {
            if let Some(trigger) = route_click(target, shown) {
                self.machine.advance(trigger);
            }
        }
        self.dispatch(renderer);

        let phase = self.machine.phase();
        let gift_hovered = self.pointer.is_hovered(HitTarget::GiftBox);
        self.composer.animate(dt as f32, phase, gift_hovered);

        if let Some(cloud) = self.cloud.as_mut() {
            if let Some(SimulationSignal::ExplosionSettled) = cloud.step(dt, phase) {
                self.machine.advance(Trigger::ExplosionSettled);
                self.dispatch(renderer);
            }
        }

        let phase = self.machine.phase();
        self.composer.draw(renderer, phase, self.cloud.as_mut());
        self.frames += 1;
        Ok(())
    }

    /// Release the particle buffers
    pub fn teardown(&mut self) {
        if self.cloud.take().is_some() {
            info!("particle cloud released");
        }
    }

    /// Forward drained events to the renderer and react to phase changes
    fn dispatch(&mut self, renderer: &mut dyn Renderer) {
        for event in self.machine.drain_events() {
            let SceneEvent::PhaseChanged(change) = event else {
                trace!(?event, "scene event");
                continue;
            };
            if change.to == Phase::Tree && self.cloud.is_none() {
                self.cloud = Some(mount_cloud(&self.config));
            }
            if !Visibility::for_phase(change.to).gift_box {
                self.pointer.release(HitTarget::GiftBox);
            }
            renderer.phase_changed(change);
            renderer.set_hit_regions(&self.composer.hit_regions(change.to));
            renderer.show_overlay(&OverlayContent::for_phase(change.to, &self.config.text));
        }
        for event in self.pointer.drain_events() {
            trace!(?event, "pointer event");
        }
    }
}

impl FrameSystem<dyn Renderer> for Experience {
    fn initialize(&mut self, renderer: &mut (dyn Renderer + 'static)) -> Result<()> {
        self.start(renderer);
        Ok(())
    }

    fn update(&mut self, renderer: &mut (dyn Renderer + 'static), dt: f64) -> Result<()> {
        self.frame(renderer, dt)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.teardown();
        Ok(())
    }

    fn name(&self) -> &str {
        "experience"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CameraPose, GiftBoxDraw, HitRegion, PointCloudDraw};
    use crate::rig::SceneRig;
    use lumina_core::PhaseChange;
    use lumina_runtime::CursorStyle;

    #[derive(Default)]
    struct Recorder {
        not_ready: bool,
        configured: usize,
        cameras: usize,
        gift_draws: usize,
        cloud_draws: Vec<usize>,
        regions: Vec<HitTarget>,
        cursor: CursorStyle,
        overlays: Vec<OverlayContent>,
        changes: Vec<PhaseChange>,
    }

    impl Renderer for Recorder {
        fn is_ready(&self) -> bool {
            !self.not_ready
        }

        fn configure(&mut self, _rig: &SceneRig) {
            self.configured += 1;
        }

        fn set_camera(&mut self, _pose: &CameraPose) {
            self.cameras += 1;
        }

        fn draw_gift_box(&mut self, _gift: &GiftBoxDraw<'_>) {
            self.gift_draws += 1;
        }

        fn draw_point_cloud(&mut self, cloud: &PointCloudDraw<'_>) {
            assert_eq!(cloud.positions.len(), cloud.instances.len() * 3);
            self.cloud_draws.push(cloud.instances.len());
        }

        fn set_hit_regions(&mut self, regions: &[HitRegion]) {
            self.regions = regions.iter().map(|r| r.target).collect();
        }

        fn set_cursor(&mut self, cursor: CursorStyle) {
            self.cursor = cursor;
        }

        fn show_overlay(&mut self, overlay: &OverlayContent) {
            self.overlays.push(overlay.clone());
        }

        fn phase_changed(&mut self, change: PhaseChange) {
            self.changes.push(change);
        }
    }

    fn small() -> SceneConfig {
        SceneConfig {
            particle_count: 40,
            ..SceneConfig::desktop()
        }
    }

    fn started() -> (Experience, Recorder) {
        let mut exp = Experience::new(small()).unwrap();
        let mut renderer = Recorder::default();
        exp.start(&mut renderer);
        (exp, renderer)
    }

    fn click(exp: &mut Experience, renderer: &mut Recorder, target: HitTarget) {
        exp.pointer(PointerEvent::Click(target));
        exp.frame(renderer, 0.0).unwrap();
    }

    #[test]
    fn starts_offering_with_gift_box() {
        let (mut exp, mut renderer) = started();
        assert_eq!(renderer.configured, 1);
        assert_eq!(renderer.regions, [HitTarget::GiftBox]);
        assert!(matches!(
            renderer.overlays[0],
            OverlayContent::Prompt { text: "Tap to Open", .. }
        ));

        exp.frame(&mut renderer, 1.0 / 60.0).unwrap();
        assert_eq!(exp.phase(), Phase::Offering);
        assert_eq!(renderer.gift_draws, 1);
        assert!(renderer.cloud_draws.is_empty());
        assert!(exp.cloud().is_none());
    }

    #[test]
    fn opening_the_gift_mounts_the_cloud() {
        let (mut exp, mut renderer) = started();
        click(&mut exp, &mut renderer, HitTarget::GiftBox);

        assert_eq!(exp.phase(), Phase::Tree);
        assert_eq!(exp.cloud().map(|c| c.particles().len()), Some(40));
        assert_eq!(renderer.changes.len(), 1);
        assert_eq!(renderer.changes[0].trigger, Trigger::GiftOpened);
        assert_eq!(renderer.regions, [HitTarget::ParticleCloud]);
        assert_eq!(renderer.cloud_draws, [40]);
        assert_eq!(renderer.gift_draws, 0);
        assert!(matches!(
            renderer.overlays.last(),
            Some(OverlayContent::Prompt {
                text: "Ignite the Light",
                ..
            })
        ));
    }

    #[test]
    fn clicks_on_hidden_or_wrong_targets_are_inert() {
        let (mut exp, mut renderer) = started();
        click(&mut exp, &mut renderer, HitTarget::ParticleCloud);
        assert_eq!(exp.phase(), Phase::Offering);

        click(&mut exp, &mut renderer, HitTarget::GiftBox);
        click(&mut exp, &mut renderer, HitTarget::GiftBox);
        assert_eq!(exp.phase(), Phase::Tree);
        assert_eq!(renderer.changes.len(), 1);
    }

    #[test]
    fn same_frame_clicks_use_the_phase_on_screen() {
        let (mut exp, mut renderer) = started();
        exp.pointer(PointerEvent::Click(HitTarget::GiftBox));
        exp.pointer(PointerEvent::Click(HitTarget::GiftBox));
        exp.pointer(PointerEvent::Click(HitTarget::ParticleCloud));
        exp.frame(&mut renderer, 0.016).unwrap();
        assert_eq!(exp.phase(), Phase::Tree);
        assert_eq!(exp.history(), &[Phase::Offering, Phase::Tree]);
    }

    #[test]
    fn unready_renderer_skips_frames_and_keeps_input() {
        let (mut exp, mut renderer) = started();
        renderer.not_ready = true;
        exp.pointer(PointerEvent::Click(HitTarget::GiftBox));
        exp.frame(&mut renderer, 0.016).unwrap();
        assert_eq!(exp.phase(), Phase::Offering);
        assert_eq!(exp.skipped_frames(), 1);
        assert_eq!(renderer.cameras, 0);

        renderer.not_ready = false;
        exp.frame(&mut renderer, 0.016).unwrap();
        assert_eq!(exp.phase(), Phase::Tree);
        assert_eq!(exp.frames(), 1);
    }

    #[test]
    fn explosion_settles_into_message_after_fifteen_frames() {
        let (mut exp, mut renderer) = started();
        click(&mut exp, &mut renderer, HitTarget::GiftBox);
        for _ in 0..30 {
            exp.frame(&mut renderer, 1.0 / 60.0).unwrap();
        }
        click(&mut exp, &mut renderer, HitTarget::ParticleCloud);
        assert_eq!(exp.phase(), Phase::Explosion);

        let mut reached_at = None;
        for frame in 1..=20 {
            exp.frame(&mut renderer, 0.1).unwrap();
            if exp.phase() == Phase::Message {
                reached_at = Some(frame);
                break;
            }
        }
        let reached_at = reached_at.expect("message never shown");
        assert!((15..=16).contains(&reached_at), "reached at {reached_at}");
        assert_eq!(exp.history(), &Phase::ALL);
        assert!(matches!(
            renderer.overlays.last(),
            Some(OverlayContent::Message { .. })
        ));
    }

    #[test]
    fn gift_hover_released_when_box_unmounts() {
        let (mut exp, mut renderer) = started();
        exp.pointer(PointerEvent::Enter(HitTarget::GiftBox));
        exp.frame(&mut renderer, 0.016).unwrap();
        assert_eq!(renderer.cursor, CursorStyle::Pointer);

        click(&mut exp, &mut renderer, HitTarget::GiftBox);
        assert_eq!(renderer.cursor, CursorStyle::Auto);
    }

    #[test]
    fn rejects_invalid_delta() {
        let (mut exp, mut renderer) = started();
        assert!(exp.frame(&mut renderer, f64::NAN).is_err());
        assert!(exp.frame(&mut renderer, -0.1).is_err());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SceneConfig {
            drag: 1.5,
            ..SceneConfig::desktop()
        };
        assert!(Experience::new(config).is_err());
    }

    #[test]
    fn drives_through_frame_system() {
        let mut exp = Experience::new(small()).unwrap();
        let mut renderer = Recorder::default();
        let system: &mut dyn FrameSystem<dyn Renderer> = &mut exp;
        assert_eq!(system.name(), "experience");
        system.initialize(&mut renderer).unwrap();

        exp.pointer(PointerEvent::Click(HitTarget::GiftBox));
        let system: &mut dyn FrameSystem<dyn Renderer> = &mut exp;
        system.update(&mut renderer, 0.016).unwrap();
        assert!(exp.cloud().is_some());

        let system: &mut dyn FrameSystem<dyn Renderer> = &mut exp;
        system.shutdown().unwrap();
        assert!(exp.cloud().is_none());
        assert_eq!(renderer.configured, 1);
    }
}
