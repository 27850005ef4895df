//! Headless driver: pours material into a fresh world and prints the result.

mod ascii;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sandfall::{
    config::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    parse_dimension, Command, Material, SimConfig, Simulation, USAGE_EXIT_CODE,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::ascii::AsciiSink;

#[derive(Debug, Parser)]
#[command(version, about = "Falling sand simulation (headless)")]
struct Args {
    /// Width of the surface in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = dimension, allow_negative_numbers = true)]
    width: u32,

    /// Height of the surface in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = dimension, allow_negative_numbers = true)]
    height: u32,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 240)]
    ticks: u32,

    /// Material poured from the top centre each tick
    #[arg(long, default_value = "sand", value_parser = ["sand", "water", "iron"])]
    pour: String,

    /// Stop pouring after this many ticks
    #[arg(long, default_value_t = 60)]
    pour_ticks: u32,
}

fn dimension(s: &str) -> Result<u32, String> {
    parse_dimension(s).map_err(|e| e.to_string())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn usage_exit() -> ExitCode {
    ExitCode::from(USAGE_EXIT_CODE as u8)
}

/// `--help` and `--version` are not failures; anything else clap rejects is.
fn parse_failure_exit(e: &clap::Error) -> ExitCode {
    if e.use_stderr() {
        usage_exit()
    } else {
        ExitCode::SUCCESS
    }
}

fn configure(args: &Args) -> Result<SimConfig, ExitCode> {
    let config = SimConfig::new(args.width, args.height);
    config.validate().map_err(|e| {
        error!("invalid configuration: {e}");
        usage_exit()
    })?;
    Ok(config)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if let Err(io) = e.print() {
                eprintln!("failed to print usage: {io}");
            }
            return parse_failure_exit(&e);
        }
    };

    init_logging();

    let config = match configure(&args) {
        Ok(config) => config,
        Err(code) => return code,
    };

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &SimConfig) -> Result<()> {
    let (width, height) = config.grid_dimensions();
    info!(
        pixels = %format!("{}x{}", config.width, config.height),
        cells = %format!("{width}x{height}"),
        ticks = args.ticks,
        pour = %args.pour,
        "starting simulation"
    );

    let mut sim = Simulation::new(config);
    sim.select_material(&args.pour);

    let spout = (width / 2) as i32;
    for tick in 0..args.ticks {
        if tick < args.pour_ticks {
            sim.apply(Command::Paint { x: spout, y: 0 });
        }
        sim.update();
    }

    let counts = sim.grid().counts();
    for material in Material::ALL {
        info!(%material, count = counts[material as usize], "final count");
    }

    let mut sink = AsciiSink::new(width, height);
    sim.render(&mut sink);
    let mut out = std::io::stdout().lock();
    out.write_all(sink.frame().as_bytes())?;
    out.flush()?;
    Ok(())
}
