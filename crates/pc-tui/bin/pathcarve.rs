//! Random corridor path carver
//!
//! Main entry point: carve one grid and print it, or browse seeds
//! interactively.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use pc_core::{CarveConfig, CarveSink, PathCarver};
use pc_rng::CarveRng;
use pc_tui::{AsciiSink, JsonSink, Theme, Viewer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Summary line and the grid with S/E markers
    Ascii,
    /// Pretty-printed JSON
    Json,
    /// Interactive terminal viewer
    Tui,
}

/// Carve a random corridor between two border cells of a grid
#[derive(Parser, Debug)]
#[command(name = "pathcarve")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width (overrides the config file)
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height (overrides the config file)
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Attempts before giving up
    #[arg(short, long)]
    attempts: Option<u32>,

    /// Endpoint redraws per attempt when start and end coincide
    #[arg(long)]
    resamples: Option<u32>,

    /// Step placements per attempt before it is abandoned
    #[arg(long)]
    budget: Option<u64>,

    /// RNG seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Log each attempt
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = build_config(&args)?;
    let seed = args
        .seed
        .unwrap_or_else(|| CarveRng::from_entropy().seed());
    info!(
        "carving {}x{} with seed {} ({} attempts)",
        config.width, config.height, seed, config.max_attempts
    );

    match args.format {
        OutputFormat::Ascii => {
            let sink = carve_once(config, seed, AsciiSink::new(io::stdout().lock()))?;
            sink.finish().context("failed to write output")?;
        }
        OutputFormat::Json => {
            let sink = carve_once(config, seed, JsonSink::new(io::stdout().lock()))?;
            sink.finish().context("failed to write output")?;
        }
        OutputFormat::Tui => run_viewer(config, seed)?,
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
fn build_config(args: &Args) -> Result<CarveConfig> {
    let mut config = match &args.config {
        Some(path) => CarveConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CarveConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(attempts) = args.attempts {
        config.max_attempts = attempts;
    }
    if let Some(resamples) = args.resamples {
        config.max_resamples = resamples;
    }
    if args.budget.is_some() {
        config.step_budget = args.budget;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn carve_once<S: CarveSink>(config: CarveConfig, seed: u64, mut sink: S) -> Result<S> {
    let mut carver = PathCarver::new(config, CarveRng::new(seed))?;
    carver
        .generate_into(&mut sink)
        .with_context(|| format!("seed {seed}"))?;
    Ok(sink)
}

fn run_viewer(config: CarveConfig, seed: u64) -> Result<()> {
    // Build before touching the terminal so errors print normally
    let mut viewer = Viewer::new(config, seed, Theme::detect())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = (|| -> io::Result<()> {
        while !viewer.should_quit() {
            terminal.draw(|frame| viewer.render(frame))?;
            if event::poll(Duration::from_millis(100))? {
                viewer.handle_event(event::read()?);
            }
        }
        Ok(())
    })();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    io::stdout().flush()?;

    result.context("terminal error")
}
