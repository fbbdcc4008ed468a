//! Headless frame driver for the plasma tube visualization.
//!
//! Steps the simulation a fixed number of frames and prints the phase angle
//! and spawn position at a configurable interval.

use clap::Parser;
use plasma_tube_core::{SimConfig, Simulation, TraceRenderer};

/// Plasma tube demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "plasma-tube-demo")]
#[command(about = "Plasma tube visualization, headless", long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 360)]
    frames: u64,

    /// Frames per full phase sweep
    #[arg(short = 'c', long, default_value_t = 360, value_parser = clap::value_parser!(u32).range(1..))]
    frame_cycles: u32,

    /// Print every Nth frame (0 = quiet)
    #[arg(short, long, default_value_t = 30)]
    report_interval: u64,

    /// Activate the background particle field
    #[arg(short, long)]
    background: bool,

    /// Mirror every draw call into the log at debug level
    #[arg(short, long)]
    trace_draws: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = SimConfig {
        frame_cycles: args.frame_cycles,
        background_active: args.background,
        ..SimConfig::default()
    };

    println!("=== Plasma Tube Demo ===\n");

    let mut sim = Simulation::new(config);
    let mut renderer = TraceRenderer;

    for frame in 0..args.frames {
        sim.update();
        if args.trace_draws {
            sim.render(&mut renderer);
        }
        if args.report_interval > 0 && frame % args.report_interval == 0 {
            let position = sim.spawner().spawn_position();
            println!(
                "frame {:>5}  angle: {:.4}  position: ({:.2}, {:.2}, {:.2})",
                frame,
                sim.spawner().phase_angle(),
                position.x,
                position.y,
                position.z
            );
        }
    }

    let position = sim.spawner().spawn_position();
    println!(
        "\nDone after {} frames. Final position: ({:.2}, {:.2}, {:.2})",
        sim.frame_count(),
        position.x,
        position.y,
        position.z
    );
}
