use std::{
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Simulated frame time for headless playback.
const FRAME_DT: f64 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "sortstep", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a run to completion and print a summary.
    Run(RunArgs),
    /// Play a run and print a JSON snapshot line every few frames.
    Frames(FramesArgs),
    /// Generate the step sequence without playing it.
    Inspect(SessionArgs),
}

#[derive(Parser, Debug)]
struct SessionArgs {
    /// Session config JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Algorithm: bubble, selection, insertion, merge, quick or heap.
    #[arg(long)]
    algorithm: Option<sortstep::Algorithm>,

    /// Array size: tiny, small, medium, large or huge.
    #[arg(long)]
    size: Option<sortstep::SizeOption>,

    /// Speed level (1..=10).
    #[arg(long)]
    speed: Option<u8>,

    /// Seed for the permutation; omit for a random one.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Print the final snapshot as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Emit one snapshot every N frames (the final frame is always emitted).
    #[arg(long, default_value_t = 1)]
    every: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn build_config(args: &SessionArgs) -> anyhow::Result<sortstep::VisualizerConfig> {
    let mut cfg = match &args.config {
        Some(path) => sortstep::VisualizerConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => sortstep::VisualizerConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        cfg.algorithm = algorithm;
    }
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if let Some(speed) = args.speed {
        cfg.speed = sortstep::SpeedLevel::new(speed)?;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args.session)?;
    let mut vis = sortstep::Visualizer::new(cfg)?;

    vis.play();
    let mut frames = 0u64;
    while !vis.is_sorted() {
        vis.advance(FRAME_DT);
        frames += 1;
    }

    let snap = vis.snapshot();
    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &snap).context("write snapshot JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "algorithm:   {} ({})", snap.algorithm, snap.algorithm.complexity())?;
    writeln!(out, "size:        {}", snap.size)?;
    writeln!(out, "speed:       {}", snap.speed)?;
    writeln!(out, "steps:       {}", snap.sequence_len)?;
    writeln!(out, "frames:      {frames}")?;
    writeln!(out, "comparisons: {}", snap.comparisons)?;
    writeln!(out, "swaps:       {}", snap.swaps)?;
    writeln!(out, "status:      {}", snap.status.label())?;
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.every == 0 {
        anyhow::bail!("--every must be > 0");
    }
    let cfg = build_config(&args.session)?;
    let mut vis = sortstep::Visualizer::new(cfg)?;
    let mut out = io::stdout().lock();

    vis.play();
    let mut frame = 0u64;
    while !vis.is_sorted() {
        vis.advance(FRAME_DT);
        frame += 1;
        if vis.is_sorted() || frame % u64::from(args.every) == 0 {
            serde_json::to_writer(&mut out, &vis.snapshot())
                .with_context(|| format!("write snapshot for frame {frame}"))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_inspect(args: SessionArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args)?;
    let vis = sortstep::Visualizer::new(cfg)?;
    let seq = sortstep::generate(vis.algorithm(), vis.values());

    let mut out = io::stdout().lock();
    writeln!(out, "algorithm: {}", seq.algorithm())?;
    writeln!(out, "size:      {}", seq.size())?;
    writeln!(out, "steps:     {}", seq.len())?;
    writeln!(out, "per tick:  {}", vis.player().steps_per_tick())?;
    for (kind, count) in seq.histogram() {
        writeln!(out, "  {kind:<16}{count}")?;
    }
    Ok(())
}
