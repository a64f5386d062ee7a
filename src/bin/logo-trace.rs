use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "logo-trace", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the frame table of a paired (inner/outer/anim) drawing and write it as JSON.
    Frames(FramesArgs),
    /// Write an SVG document with the filled outline of one frame.
    Outline(OutlineArgs),
    /// Summarize a segment (segment/start/end/mask) drawing.
    Segments(SegmentsArgs),
}

#[derive(Args, Debug)]
struct TraceArgs {
    /// Input Inkscape SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra samples per curve when flattening.
    #[arg(long)]
    iterations: Option<usize>,

    /// Number of animation frames (at least 2).
    #[arg(long)]
    num_frames: Option<usize>,

    /// Measure boundary progress on samples re-projected onto the animation path.
    #[arg(long)]
    project: bool,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    trace: TraceArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct OutlineArgs {
    #[command(flatten)]
    trace: TraceArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: usize,

    /// Output SVG path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SegmentsArgs {
    /// Input Inkscape SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the parsed segments as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Outline(args) => cmd_outline(args),
        Command::Segments(args) => cmd_segments(args),
    }
}

fn read_svg(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read drawing '{}'", path.display()))
}

fn load_config(args: &TraceArgs) -> anyhow::Result<logo_trace::TraceConfig> {
    let mut cfg = match &args.config {
        Some(path) => logo_trace::TraceConfig::from_path(path)?,
        None => logo_trace::TraceConfig::default(),
    };
    if let Some(iterations) = args.iterations {
        cfg.iterations = iterations;
    }
    if let Some(num_frames) = args.num_frames {
        cfg.num_frames = num_frames;
    }
    if args.project {
        cfg.project_onto_animation = true;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn load_pipeline(args: &TraceArgs) -> anyhow::Result<logo_trace::LogoPipeline> {
    let cfg = load_config(args)?;
    let text = read_svg(&args.in_path)?;
    let geometry = logo_trace::LogoGeometry::from_svg_str(&text)
        .with_context(|| format!("parse drawing '{}'", args.in_path.display()))?;
    Ok(logo_trace::LogoPipeline::new(geometry, cfg)?)
}

/// Writer for `out`, or stdout.
fn output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    let Some(path) = out else {
        return Ok(Box::new(std::io::stdout().lock()));
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(Box::new(BufWriter::new(f)))
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let pipeline = load_pipeline(&args.trace)?;
    let table = pipeline.frame_table()?;

    let mut w = output(args.out.as_deref())?;
    serde_json::to_writer_pretty(&mut w, &*table).context("write frame table JSON")?;
    writeln!(w)?;
    w.flush()?;

    if let Some(out) = &args.out {
        eprintln!("wrote {} frames to {}", table.len(), out.display());
    }
    Ok(())
}

fn cmd_outline(args: OutlineArgs) -> anyhow::Result<()> {
    let mut pipeline = load_pipeline(&args.trace)?;
    pipeline.set_frame(args.frame)?;
    let outline = pipeline.outline()?;
    let page = pipeline.geometry()?.page;

    let mut w = output(args.out.as_deref())?;
    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
        width = page.width,
        height = page.height,
    )?;
    writeln!(w, r##"  <path d="{}" fill="#000000" />"##, outline.to_svg())?;
    writeln!(w, "</svg>")?;
    w.flush()?;

    if let Some(out) = &args.out {
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_segments(args: SegmentsArgs) -> anyhow::Result<()> {
    let text = read_svg(&args.in_path)?;
    let params = logo_trace::AnimationParams::from_svg_str(&text)
        .with_context(|| format!("parse drawing '{}'", args.in_path.display()))?;

    let mut w = output(None)?;
    if args.json {
        serde_json::to_writer_pretty(&mut w, &params).context("write segments JSON")?;
        writeln!(w)?;
        return Ok(w.flush()?);
    }

    writeln!(
        w,
        "page {}x{}, {} segments, mask {} bytes",
        params.page.width,
        params.page.height,
        params.segments.len(),
        params.mask_markup.len()
    )?;
    for (i, seg) in params.segments.iter().enumerate() {
        let start = seg.start.unit_direction()?;
        let end = seg.end.unit_direction()?;
        writeln!(
            w,
            "segment{}: ({}, {}) -> ({}, {})  start dir ({:.3}, {:.3})  end dir ({:.3}, {:.3})",
            i + 1,
            seg.curve.p0.x,
            seg.curve.p0.y,
            seg.curve.p3.x,
            seg.curve.p3.y,
            start.x,
            start.y,
            end.x,
            end.y
        )?;
    }
    w.flush()?;
    Ok(())
}
