//! Play command - runs the card headless with scripted taps

use super::ConfigSource;
use anyhow::{bail, Context, Result};
use lumina_core::{Phase, PhaseChange};
use lumina_runtime::{CursorStyle, FrameClock, HitTarget, PointerEvent};
use lumina_scene::{
    CameraPose, Experience, GiftBoxDraw, HitRegion, MessageLine, OverlayContent, PointCloudDraw,
    Renderer, SceneRig,
};
use std::thread;
use std::time::Duration;
use tracing::debug;

pub struct PlayArgs {
    pub source: ConfigSource,
    pub fps: f64,
    pub open_at: f64,
    pub ignite_at: f64,
    pub duration: f64,
    pub seed: Option<u32>,
    /// Sleep one frame interval per frame and read deltas from the wall clock
    pub realtime: bool,
}

/// Renderer that prints what a real one would show
#[derive(Default)]
struct ConsoleRenderer {
    /// Simulated time of the frame being drawn
    now: f64,
    transitions: Vec<(f64, PhaseChange)>,
    gift_frames: u64,
    cloud_frames: u64,
    points: usize,
    camera: Option<CameraPose>,
    cursor: CursorStyle,
}

impl Renderer for ConsoleRenderer {
    fn configure(&mut self, rig: &SceneRig) {
        println!(
            "Scene: background {}, {} stars, sparkles {}, antialias {}",
            rig.background,
            rig.stars.count,
            if rig.sparkles.is_some() { "on" } else { "off" },
            rig.antialias
        );
    }

    fn set_camera(&mut self, pose: &CameraPose) {
        self.camera = Some(*pose);
    }

    fn draw_gift_box(&mut self, _gift: &GiftBoxDraw<'_>) {
        self.gift_frames += 1;
    }

    fn draw_point_cloud(&mut self, cloud: &PointCloudDraw<'_>) {
        self.cloud_frames += 1;
        self.points = cloud.instances.len();
    }

    fn set_hit_regions(&mut self, regions: &[HitRegion]) {
        debug!(regions = regions.len(), "hit regions updated");
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        if cursor != self.cursor {
            debug!(?cursor, "cursor changed");
            self.cursor = cursor;
        }
    }

    fn show_overlay(&mut self, overlay: &OverlayContent) {
        match overlay {
            OverlayContent::Empty => {}
            OverlayContent::Prompt { text, reveal } => {
                println!("[{:>6.2}s]   \"{}\" (after {}s)", self.now, text, reveal.delay);
            }
            OverlayContent::Message { lines } => {
                for (line, reveal) in lines {
                    let text = match line {
                        MessageLine::Headline(s) | MessageLine::Title(s) | MessageLine::Subtitle(s) => {
                            s.as_str()
                        }
                        MessageLine::Divider => "----",
                    };
                    println!("[{:>6.2}s]   {} (after {}s)", self.now, text, reveal.delay);
                }
            }
        }
    }

    fn phase_changed(&mut self, change: PhaseChange) {
        println!(
            "[{:>6.2}s] {} -> {} ({})",
            self.now, change.from, change.to, change.trigger
        );
        self.transitions.push((self.now, change));
    }
}

pub fn run(args: PlayArgs) -> Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be positive, got {}", args.fps);
    }
    if !(args.duration.is_finite() && args.duration >= 0.0) {
        bail!("--duration must not be negative, got {}", args.duration);
    }

    let mut config = args.source.load()?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut experience = Experience::new(config).context("Invalid scene configuration")?;
    let mut renderer = ConsoleRenderer::default();
    let mut clock = FrameClock::new();
    let step = 1.0 / args.fps;

    experience.start(&mut renderer);

    let mut opened = false;
    let mut ignited = false;
    while clock.total_time < args.duration {
        let now = clock.total_time;
        if !opened && now >= args.open_at {
            experience.pointer(PointerEvent::Enter(HitTarget::GiftBox));
            experience.pointer(PointerEvent::Click(HitTarget::GiftBox));
            opened = true;
        }
        if !ignited && now >= args.ignite_at {
            experience.pointer(PointerEvent::Click(HitTarget::ParticleCloud));
            ignited = true;
        }

        let dt = if args.realtime {
            thread::sleep(Duration::from_secs_f64(step));
            clock.tick()
        } else {
            clock.advance(step)
        };
        renderer.now = clock.total_time;
        experience.frame(&mut renderer, dt)?;
    }

    print_summary(&experience, &renderer, &clock);
    experience.teardown();
    Ok(())
}

fn print_summary(experience: &Experience, renderer: &ConsoleRenderer, clock: &FrameClock) {
    println!();
    println!("Frames:        {}", clock.frame);
    println!("Final phase:   {}", experience.phase());
    println!(
        "Path:          {}",
        experience
            .history()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    );
    println!("Gift frames:   {}", renderer.gift_frames);
    println!("Cloud frames:  {} ({} points)", renderer.cloud_frames, renderer.points);
    if let Some(cloud) = experience.cloud() {
        let particles = cloud.particles();
        println!("Mean radius:   {:.3}", particles.mean_radius());
        println!("Max speed:     {:.5}", particles.max_speed());
        if cloud.explosion_time() > 0.0 {
            println!("Dispersing:    {:.2}s", cloud.explosion_time());
        }
    }
    if let Some(pose) = renderer.camera {
        println!(
            "Camera:        ({:.2}, {:.2}, {:.2})",
            pose.position.x, pose.position.y, pose.position.z
        );
    }
}
