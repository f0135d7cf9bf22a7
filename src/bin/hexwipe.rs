use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;

use hexwipe::{
    Backdrop, ClockSignal, CpuSurface, FrameParams, FrameRGBA, ManualClock, RunDirection,
    Transition, TransitionConfig, Viewport, WaveOrigin, build_tile_field, global_progress,
    render_frame,
};

#[derive(Parser, Debug)]
#[command(name = "hexwipe", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single compositor frame as a PNG.
    Frame(FrameArgs),
    /// Drive a full transition run and write every frame as a PNG.
    Sequence(SequenceArgs),
    /// Print the tile field (centers and delays) as JSON.
    Tiles(TilesArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PhaseChoice {
    /// Reveal: tiles shrink away.
    Enter,
    /// Hide: tiles grow to cover.
    Exit,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackdropChoice {
    Dark,
    Paper,
}

impl From<BackdropChoice> for Backdrop {
    fn from(v: BackdropChoice) -> Self {
        match v {
            BackdropChoice::Dark => Backdrop::Dark,
            BackdropChoice::Paper => Backdrop::Paper,
        }
    }
}

#[derive(Parser, Debug)]
struct SurfaceArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Optional transition config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wave used for the reveal: `center`, `directional`, or `X,Y` (normalized origin).
    #[arg(long, default_value = "center")]
    wave: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Phase to render.
    #[arg(long, value_enum, default_value_t = PhaseChoice::Enter)]
    phase: PhaseChoice,

    /// Elapsed run time in milliseconds.
    #[arg(long)]
    at_ms: f64,

    /// Under-layer shown where tiles do not cover.
    #[arg(long, value_enum, default_value_t = BackdropChoice::Paper)]
    backdrop: BackdropChoice,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Phase to run.
    #[arg(long, value_enum, default_value_t = PhaseChoice::Enter)]
    phase: PhaseChoice,

    /// Simulated display rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Navigation target used for exit runs.
    #[arg(long, default_value = "/next")]
    target: String,

    /// Simulate the reduced-motion preference.
    #[arg(long, default_value_t = false)]
    reduced_motion: bool,

    /// Under-layer shown where tiles do not cover.
    #[arg(long, value_enum, default_value_t = BackdropChoice::Paper)]
    backdrop: BackdropChoice,

    /// Override rayon worker threads used for PNG encoding.
    #[arg(long)]
    threads: Option<usize>,

    /// Output directory for `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct TilesArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Phase whose delay field to print.
    #[arg(long, value_enum, default_value_t = PhaseChoice::Enter)]
    phase: PhaseChoice,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Tiles(args) => cmd_tiles(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<TransitionConfig> {
    match path {
        Some(p) => TransitionConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(TransitionConfig::default()),
    }
}

fn parse_wave(s: &str) -> anyhow::Result<WaveOrigin> {
    match s.trim().to_ascii_lowercase().as_str() {
        "center" => Ok(WaveOrigin::center()),
        "directional" | "ltr" => Ok(WaveOrigin::Directional),
        other => {
            let (x, y) = other
                .split_once(',')
                .with_context(|| format!("unknown wave '{other}'"))?;
            let x: f64 = x.trim().parse().context("wave x")?;
            let y: f64 = y.trim().parse().context("wave y")?;
            Ok(WaveOrigin::Radial { x, y })
        }
    }
}

fn viewport_of(args: &SurfaceArgs) -> Viewport {
    Viewport::new(f64::from(args.width), f64::from(args.height))
}

fn direction_and_wave(
    phase: PhaseChoice,
    args: &SurfaceArgs,
    cfg: &TransitionConfig,
) -> anyhow::Result<(RunDirection, WaveOrigin)> {
    Ok(match phase {
        PhaseChoice::Enter => (RunDirection::Reveal, parse_wave(&args.wave)?),
        PhaseChoice::Exit => (RunDirection::Hide, cfg.exit_wave),
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.surface.config.as_deref())?;
    let (direction, wave) = direction_and_wave(args.phase, &args.surface, &cfg)?;
    let viewport = viewport_of(&args.surface);
    let tiles = build_tile_field(
        viewport,
        &cfg.grid_params(),
        wave,
        direction,
        &cfg.delay_params(cfg.seed),
    );

    let mut surface = CpuSurface::new(
        args.surface.width,
        args.surface.height,
        Backdrop::from(args.backdrop).premul(),
    )?;
    let params = FrameParams {
        global_progress: global_progress(args.at_ms, cfg.duration_ms),
        direction,
        spread: cfg.spread,
        draw_radius: cfg.draw_radius(),
        color: cfg.tile_premul(),
    };
    let stats = render_frame(&mut surface, &tiles, &params)?;

    write_png(&args.out, &surface.frame())?;
    eprintln!(
        "wrote {} ({} tiles drawn, {} skipped)",
        args.out.display(),
        stats.drawn,
        stats.skipped
    );
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be finite and > 0");
    }
    let cfg = load_config(args.surface.config.as_deref())?;
    let viewport = viewport_of(&args.surface);
    let wave = parse_wave(&args.surface.wave)?;

    let frame_no = Rc::new(RefCell::new(0usize));
    let events: Rc<RefCell<Vec<String>>> = Rc::default();
    let (f1, e1) = (frame_no.clone(), events.clone());
    let (f2, e2) = (frame_no.clone(), events.clone());
    let (f3, e3) = (frame_no.clone(), events.clone());
    let mut transition = Transition::new(cfg)?
        .on_partial_reveal(move || {
            e1.borrow_mut()
                .push(format!("partial-reveal at frame {}", f1.borrow()))
        })
        .on_complete(move || {
            e2.borrow_mut()
                .push(format!("complete at frame {}", f2.borrow()))
        })
        .on_navigate(move |to| {
            e3.borrow_mut()
                .push(format!("navigate to '{to}' at frame {}", f3.borrow()))
        });

    let mut clock = ManualClock::new().with_reduced_motion(args.reduced_motion);
    let mut surface = CpuSurface::new(
        args.surface.width,
        args.surface.height,
        Backdrop::from(args.backdrop).premul(),
    )?;

    match args.phase {
        PhaseChoice::Enter => transition.begin_entering(&mut clock, viewport, wave),
        PhaseChoice::Exit => {
            transition.resize(viewport);
            transition.request_exit(&mut clock, args.target.clone());
        }
    }

    let dt = 1000.0 / args.fps;
    let mut frames: Vec<FrameRGBA> = Vec::new();
    while !clock.is_idle() {
        for signal in clock.advance(dt) {
            let drew = matches!(signal, ClockSignal::Frame { .. });
            transition.handle_signal(&mut clock, signal, &mut surface);
            if drew {
                frames.push(surface.frame());
                *frame_no.borrow_mut() = frames.len();
            }
        }
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let pool = build_thread_pool(args.threads)?;
    pool.install(|| {
        frames.par_iter().enumerate().try_for_each(|(i, frame)| {
            write_png(&args.out_dir.join(format!("frame_{i:05}.png")), frame)
        })
    })?;

    for line in events.borrow().iter() {
        println!("{line}");
    }
    eprintln!(
        "wrote {} frames to {}",
        frames.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_tiles(args: TilesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.surface.config.as_deref())?;
    let (direction, wave) = direction_and_wave(args.phase, &args.surface, &cfg)?;
    let tiles = build_tile_field(
        viewport_of(&args.surface),
        &cfg.grid_params(),
        wave,
        direction,
        &cfg.delay_params(cfg.seed),
    );
    println!("{}", serde_json::to_string_pretty(&tiles)?);
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> anyhow::Result<rayon::ThreadPool> {
    if threads == Some(0) {
        anyhow::bail!("--threads must be >= 1 when set");
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().context("failed to build rayon thread pool")
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
