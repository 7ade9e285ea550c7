//! Command-line entry point: animate in the terminal or simulate headless.

use anyhow::{Context, Result};
use bouncebox::surface::TranscriptCanvas;
use bouncebox::{BounceRule, Config, Dispatcher, Exit, Simulation, TerminalSurface};
use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Bouncing rectangles, each moved by its own thread and drawn by one renderer.
///
/// Press any key to quit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of rectangles, each moved by its own thread.
    #[arg(short = 'n', long, default_value_t = 1000)]
    rectangles: usize,

    /// Logical surface width.
    #[arg(long, default_value_t = 2048)]
    width: u16,

    /// Logical surface height.
    #[arg(long, default_value_t = 1400)]
    height: u16,

    /// Seed for rectangle placement and motion.
    #[arg(long)]
    seed: Option<u64>,

    /// Use the classic edge reflection and zero-velocity rules.
    #[arg(long)]
    classic_bounce: bool,

    /// Stop each rectangle after this many frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Write log records to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run this many lockstep rounds headless and print every draw call.
    #[arg(long, value_name = "ROUNDS")]
    simulate: Option<u64>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            rectangle_count: self.rectangles,
            surface_width: self.width,
            surface_height: self.height,
            seed: self.seed,
            bounce: if self.classic_bounce {
                BounceRule::Classic
            } else {
                BounceRule::Symmetric
            },
            max_frames: self.frames,
            ..Config::default()
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn simulate(config: &Config, rounds: u64) -> Result<()> {
    let canvas = TranscriptCanvas::new(BufWriter::new(io::stdout()));
    let mut sim = Simulation::new(config, canvas)?;
    let stats = sim.run(rounds)?;
    info!(
        "simulated {rounds} rounds: {} requests, {} draw calls",
        stats.requests, stats.draw_calls
    );
    Ok(())
}

fn animate(config: Config) -> Result<Exit> {
    // Reject bad input before touching the terminal.
    config.validate()?;
    let surface = TerminalSurface::connect()?;
    let cells = surface.cells();
    debug!("terminal is {}x{} cells", cells.width, cells.height);
    let canvas = surface.canvas(config.surface(), config.palette);
    let mut dispatcher = Dispatcher::start(config, canvas, surface.events())?;

    let exit = dispatcher.run();
    let stats = dispatcher.shutdown();
    surface.close();

    let exit = exit?;
    let stats = stats?;
    info!(
        "{exit:?}: {} requests, {} draw calls, {} presents",
        stats.requests, stats.draw_calls, stats.presents
    );
    Ok(exit)
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logging(args.log_file.as_ref()) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    let config = args.config();
    let result = match args.simulate {
        Some(rounds) => simulate(&config, rounds),
        None => animate(config).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
