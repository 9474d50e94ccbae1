//! Globe command - spin a globe and report which region faces the viewer.

use std::f64::consts::TAU;
use std::thread;
use std::time::Duration;

use worldstats::classifier::{FacingRegion, GlobeSpin, RegionTracker, DEFAULT_SPIN_SPEED};

use crate::error::CliError;
use crate::output::{ConsoleOutput, Output};
use crate::runner::CliRunner;

/// Default animation rate.
pub const DEFAULT_FPS: f64 = 60.0;

/// Slowest accepted animation rate.
pub const MIN_FPS: f64 = 1e-3;

/// Upper bound on the frames of a default full-turn run.
pub const MAX_TURN_FRAMES: u64 = 10_000_000;

/// Arguments for the globe command.
#[derive(Debug, Clone)]
pub struct GlobeArgs {
    /// Frames to simulate; one full turn when unset.
    pub frames: Option<u64>,
    pub fps: f64,
    /// Radians per second.
    pub speed: f64,
    /// Sleep between frames instead of running as fast as possible.
    pub realtime: bool,
}

impl Default for GlobeArgs {
    fn default() -> Self {
        Self {
            frames: None,
            fps: DEFAULT_FPS,
            speed: DEFAULT_SPIN_SPEED,
            realtime: false,
        }
    }
}

/// A facing-region change at a point in the animation.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionChange {
    pub elapsed_secs: f64,
    pub longitude: f64,
    pub region: FacingRegion,
}

/// Run the globe command.
pub fn run(args: GlobeArgs, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup("globe");

    execute(&args, &ConsoleOutput::new())
}

pub fn execute(args: &GlobeArgs, out: &dyn Output) -> Result<(), CliError> {
    if !(args.fps.is_finite() && args.fps >= MIN_FPS) {
        return Err(CliError::Config(format!(
            "--fps must be a number of at least {}, got {}",
            MIN_FPS, args.fps
        )));
    }
    if !args.speed.is_finite() {
        return Err(CliError::Config(format!(
            "--speed must be a finite number, got {}",
            args.speed
        )));
    }

    let frames = match args.frames {
        Some(frames) => frames,
        None => frames_per_turn(args.fps, args.speed).ok_or_else(|| {
            CliError::Config(format!(
                "a full turn at --speed {} and --fps {} exceeds {} frames; pass --frames",
                args.speed, args.fps, MAX_TURN_FRAMES
            ))
        })?,
    };
    let frame_delay = Duration::from_secs_f64(1.0 / args.fps);

    out.header("Facing Region");
    let mut changes = 0;
    simulate(frames, args.fps, args.speed, |change| {
        changes += 1;
        out.println(&format!(
            "{:>8.2}s  {:>6.1}°  {}",
            change.elapsed_secs, change.longitude, change.region
        ));
    }, |_| {
        if args.realtime {
            thread::sleep(frame_delay);
        }
    });

    out.newline();
    out.println(&format!("{} frames, {} region changes", frames, changes));
    Ok(())
}

/// Frames needed for one full revolution, at least one.
///
/// `None` when the turn would take more than [`MAX_TURN_FRAMES`].
pub fn frames_per_turn(fps: f64, speed: f64) -> Option<u64> {
    if speed == 0.0 {
        return Some(1);
    }
    let frames = (TAU / speed.abs() * fps).ceil().max(1.0);
    if frames.is_finite() && frames <= MAX_TURN_FRAMES as f64 {
        Some(frames as u64)
    } else {
        None
    }
}

/// Advance a globe `frames` times, calling `on_change` for every facing
/// region change and `on_frame` after every frame.
pub fn simulate<C, F>(frames: u64, fps: f64, speed: f64, mut on_change: C, mut on_frame: F)
where
    C: FnMut(RegionChange),
    F: FnMut(u64),
{
    let mut spin = GlobeSpin::new(speed);
    let mut tracker = RegionTracker::new();
    let delta = 1.0 / fps;

    for frame in 1..=frames {
        let longitude = spin.advance(delta);
        tracker.observe_with(longitude, |region| {
            on_change(RegionChange {
                elapsed_secs: frame as f64 * delta,
                longitude,
                region,
            })
        });
        on_frame(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::BufferOutput;

    fn collect(frames: u64, fps: f64, speed: f64) -> Vec<RegionChange> {
        let mut changes = Vec::new();
        simulate(frames, fps, speed, |c| changes.push(c), |_| {});
        changes
    }

    #[test]
    fn test_frames_per_turn() {
        assert_eq!(frames_per_turn(60.0, TAU), Some(60));
        assert_eq!(frames_per_turn(10.0, 0.1), Some(629));
        assert_eq!(frames_per_turn(60.0, 0.0), Some(1));
        assert_eq!(frames_per_turn(60.0, 1e-300), None);
    }

    #[test]
    fn test_full_turn_visits_every_region() {
        let changes = collect(frames_per_turn(60.0, 1.0).unwrap(), 60.0, 1.0);
        let regions: Vec<FacingRegion> = changes.iter().map(|c| c.region).collect();

        assert_eq!(
            regions,
            vec![
                FacingRegion::Asia,
                FacingRegion::Africa,
                FacingRegion::America,
                FacingRegion::Oceania,
                FacingRegion::Asia,
            ]
        );
    }

    #[test]
    fn test_reverse_spin() {
        let changes = collect(frames_per_turn(60.0, 1.0).unwrap(), 60.0, -1.0);
        assert_eq!(changes[0].region, FacingRegion::Asia);
        assert_eq!(changes[1].region, FacingRegion::Oceania);
    }

    #[test]
    fn test_execute_prints_changes() {
        let out = BufferOutput::new();
        let args = GlobeArgs {
            frames: Some(120),
            fps: 60.0,
            speed: 1.0,
            realtime: false,
        };
        execute(&args, &out).unwrap();
        let text = out.contents();

        assert!(text.contains("Asia"));
        assert!(text.contains("Africa"));
        assert!(text.ends_with("120 frames, 2 region changes\n"));
    }

    #[test]
    fn test_invalid_fps() {
        let out = BufferOutput::new();
        let args = GlobeArgs {
            fps: 0.0,
            ..Default::default()
        };
        assert!(matches!(execute(&args, &out), Err(CliError::Config(_))));
    }

    #[test]
    fn test_tiny_fps_is_rejected() {
        let out = BufferOutput::new();
        let args = GlobeArgs {
            fps: 1e-300,
            ..Default::default()
        };
        assert!(matches!(execute(&args, &out), Err(CliError::Config(_))));
    }

    #[test]
    fn test_endless_turn_is_rejected() {
        let out = BufferOutput::new();
        let args = GlobeArgs {
            speed: 1e-300,
            ..Default::default()
        };
        assert!(matches!(execute(&args, &out), Err(CliError::Config(_))));

        let bounded = GlobeArgs {
            frames: Some(3),
            speed: 1e-300,
            ..Default::default()
        };
        assert!(execute(&bounded, &out).is_ok());
    }
}
