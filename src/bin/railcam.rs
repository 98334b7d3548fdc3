use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "railcam", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one frame and print its state as JSON.
    Frame(FrameArgs),
    /// Evaluate every frame into a JSON-lines file.
    Frames(FramesArgs),
    /// Print the tile URLs needed for one frame.
    Tiles(TilesArgs),
    /// Fill missing segment routes and write the journey back.
    Routes(RoutesArgs),
}

#[derive(Parser, Debug)]
struct ViewportArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input journey JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based); out-of-range values are clamped.
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input journey JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Evaluate chunks on a worker pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads (defaults to the number of CPUs).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct TilesArgs {
    /// Input journey JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based); out-of-range values are clamped.
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Tile provider access token.
    #[arg(long)]
    token: Option<String>,
}

#[derive(Parser, Debug)]
struct RoutesArgs {
    /// Input journey JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Routing method for segments without a route.
    #[arg(long, default_value = "curved")]
    method: railcam::RouteMethod,

    /// Output journey JSON.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Tiles(args) => cmd_tiles(args),
        Command::Routes(args) => cmd_routes(args),
    }
}

fn read_journey_json(path: &Path) -> anyhow::Result<railcam::Journey> {
    let f = File::open(path).with_context(|| format!("open journey '{}'", path.display()))?;
    let r = BufReader::new(f);
    let journey: railcam::Journey =
        serde_json::from_reader(r).with_context(|| "parse journey JSON")?;
    journey.validate()?;
    Ok(journey)
}

fn canvas(v: &ViewportArgs) -> railcam::Canvas {
    railcam::Canvas {
        width: v.width,
        height: v.height,
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let journey = read_journey_json(&args.in_path)?;
    let frame = journey.timeline().clamp_frame(args.frame);
    let state = railcam::Evaluator::eval_frame(&journey, frame, canvas(&args.viewport))?;
    let json = serde_json::to_string_pretty(&state).context("serialize frame state")?;

    match args.out {
        Some(out) => std::fs::write(&out, json)
            .with_context(|| format!("write frame state '{}'", out.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let journey = read_journey_json(&args.in_path)?;
    let range = railcam::FrameRange::new(
        railcam::FrameIndex(0),
        railcam::FrameIndex(journey.total_frames),
    )?;
    let threading = railcam::EvalThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let (states, stats) =
        railcam::eval_frames(&journey, range, canvas(&args.viewport), &threading)?;

    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    for state in &states {
        serde_json::to_writer(&mut w, state).context("serialize frame state")?;
        w.write_all(b"\n")?;
    }
    w.flush()?;

    eprintln!(
        "frames_total={} frames_distinct={}",
        stats.frames_total, stats.frames_distinct
    );
    Ok(())
}

fn cmd_tiles(args: TilesArgs) -> anyhow::Result<()> {
    let journey = read_journey_json(&args.in_path)?;
    let frame = journey.timeline().clamp_frame(args.frame);
    let state = railcam::Evaluator::eval_frame(&journey, frame, canvas(&args.viewport))?;
    let resolver = railcam::TileUrlResolver::new(journey.tile_style, args.token);
    for tile in &state.tiles {
        println!(
            "{} {} {}",
            tile.position.x,
            tile.position.y,
            resolver.url(tile)
        );
    }
    Ok(())
}

fn cmd_routes(args: RoutesArgs) -> anyhow::Result<()> {
    let journey = read_journey_json(&args.in_path)?;
    let resolved =
        railcam::resolve_routes(&journey, &railcam::SyntheticRouteSource, args.method)?;
    let json = serde_json::to_string_pretty(&resolved).context("serialize journey")?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write journey '{}'", args.out.display()))?;
    eprintln!(
        "segments={} distance_km={:.1}",
        resolved.num_segments(),
        resolved.total_distance_km()
    );
    Ok(())
}
