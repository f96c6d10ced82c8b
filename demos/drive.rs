use anyhow::{Context, Result};
use clap::Parser;
use kinematic_ackermann::{
    AutopilotInit, ControlInput, FrameInput, Session, SessionConfig, Target,
};
use rand::prelude::*;
use std::path::PathBuf;

/// Drives a single car headlessly and logs its pose once per simulated second.
#[derive(Parser)]
struct Opts {
    /// TOML file with `[start]` and `[vehicle]` tables.
    #[clap(long)]
    pub config: Option<PathBuf>,
    #[clap(long, default_value = "1200")]
    pub frames: u32,
    #[clap(long, default_value = "60")]
    pub fps: u32,
    /// Relative random jitter applied to every frame delta.
    #[clap(long, default_value = "0.1")]
    pub jitter: f64,
    #[clap(long)]
    pub seed: Option<u64>,
    /// Hand the wheel to the autopilot with this target speed.
    #[clap(long)]
    pub target_speed: Option<f64>,
    #[clap(long, default_value = "0")]
    pub target_heading: f64,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let opts = Opts::parse();

    let config = match &opts.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("unable to load {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let mut session = Session::from_config(&config)?;

    let mut rng: StdRng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut autopilot = match opts.target_speed {
        Some(speed) => {
            let mut autopilot =
                AutopilotInit::from_config(&config.vehicle).build(&config.vehicle)?;
            autopilot.set_target(Target {
                speed,
                heading: opts.target_heading,
            });
            Some(autopilot)
        }
        None => None,
    };

    let frame_secs = 1.0 / f64::from(opts.fps.max(1));
    let mut controls = ControlInput::idle();

    for frame in 0..opts.frames {
        // Without an autopilot, hold a random set of keys for a second at a time.
        controls = match autopilot.as_mut() {
            Some(autopilot) => autopilot.step(&session.vehicle().pose()),
            None if frame % opts.fps.max(1) == 0 => random_controls(&mut rng),
            None => controls,
        };

        let jitter = if opts.jitter > 0.0 {
            rng.gen_range(-opts.jitter..opts.jitter)
        } else {
            0.0
        };
        let dt = frame_secs * (1.0 + jitter);

        let pose = session.frame(&FrameInput { dt, controls });

        if (frame + 1) % opts.fps.max(1) == 0 {
            tracing::info!(
                frame = frame + 1,
                fps = session.fps(),
                x = pose.center.x,
                y = pose.center.y,
                heading = pose.heading,
                steer = pose.steer_angle,
                wheels = pose.front_wheel_heading(),
                speed = pose.speed,
                "pose"
            );
        }
    }

    Ok(())
}

fn random_controls(rng: &mut StdRng) -> ControlInput {
    let steer = rng.gen_range(-1..=1);
    ControlInput {
        accelerate: rng.gen_bool(0.6),
        brake: rng.gen_bool(0.2),
        steer_left: steer < 0,
        steer_right: steer > 0,
    }
}
