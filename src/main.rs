use solsim::{bench_gravity, bench_step_curve, frame_report};
use solsim::{Scenario, SimulationConfig, TimeSpeed, TimestepLevel};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Timestep {
    FullDay,
    HalfDay,
    Paused,
}

impl From<Timestep> for TimestepLevel {
    fn from(t: Timestep) -> Self {
        match t {
            Timestep::FullDay => TimestepLevel::FullDay,
            Timestep::HalfDay => TimestepLevel::HalfDay,
            Timestep::Paused => TimestepLevel::Paused,
        }
    }
}

/// Headless solar system run: step the simulation and log the distance overlay
#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML; the built-in solar system when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to simulate at 60 frames per real second; each frame runs
    /// `time_speed / 60` integrator steps
    #[arg(short, long, default_value_t = 365)]
    frames: u64,

    /// Override the integrator steps per real second (60, 600, ...)
    #[arg(long)]
    time_speed: Option<u32>,

    /// Override the asteroid seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the asteroid count
    #[arg(long)]
    asteroids: Option<usize>,

    /// Override the timestep level
    #[arg(long, value_enum)]
    timestep: Option<Timestep>,

    /// Log the overlay every N frames (0 = only at the end)
    #[arg(long, default_value_t = 30)]
    report_every: u64,

    /// Run the force and step benchmarks instead
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            SimulationConfig::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to load scenario {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(seed) = args.seed {
        cfg.asteroids.seed = seed;
    }
    if let Some(count) = args.asteroids {
        cfg.asteroids.count = count;
    }
    if let Some(timestep) = args.timestep {
        cfg.engine.timestep = timestep.into();
    }
    if let Some(speed) = args.time_speed {
        cfg.engine.time_speed = TimeSpeed::new(speed);
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_step_curve()?;
        return Ok(());
    }

    let cfg = load_config(&args)?;
    let mut scenario = Scenario::initialize(&cfg).context("failed to build scenario")?;

    let frame_secs = 1.0 / f64::from(TimeSpeed::BASE);
    for frame in 1..=args.frames {
        scenario
            .advance(frame_secs)
            .with_context(|| format!("simulation failed at frame {frame}"))?;

        if args.report_every > 0 && frame % args.report_every == 0 {
            info!("{}", frame_report(&scenario));
        }
    }

    info!("{}", frame_report(&scenario));
    Ok(())
}
