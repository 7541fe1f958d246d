use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "footprint", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the pressure map of one foot scan as a PNG.
    Render(RenderArgs),
    /// Render left and right foot scans concurrently.
    Pair(PairArgs),
    /// Write the report legend strip as a PNG.
    Legend(LegendArgs),
}

#[derive(Args, Debug)]
struct PrepArgs {
    /// JSON file overriding pipeline settings.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Longest side, in pixels, of the image fed to the pipeline.
    #[arg(long, default_value_t = 1000)]
    max_dimension: u32,

    /// JPEG quality used to requantize the source before processing.
    #[arg(long, default_value_t = 70)]
    jpeg_quality: u8,

    /// Skip the JPEG requantization step.
    #[arg(long)]
    no_requantize: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input foot scan (any common image format).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    prep: PrepArgs,
}

#[derive(Args, Debug)]
struct PairArgs {
    /// Left foot scan.
    #[arg(long)]
    left: PathBuf,

    /// Right foot scan.
    #[arg(long)]
    right: PathBuf,

    /// Directory receiving `left.png` and `right.png`.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    prep: PrepArgs,
}

#[derive(Args, Debug)]
struct LegendArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = 500)]
    width: u32,

    #[arg(long, default_value_t = 25)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Pair(args) => cmd_pair(args),
        Command::Legend(args) => cmd_legend(args),
    }
}

fn load_config(
    args: &PrepArgs,
) -> anyhow::Result<(footprint::SourcePrep, footprint::PressureSettings)> {
    let settings = match &args.settings {
        Some(path) => footprint::PressureSettings::from_path(path)?,
        None => footprint::PressureSettings::default(),
    };
    let prep = footprint::SourcePrep {
        max_dimension: args.max_dimension,
        jpeg_quality: (!args.no_requantize).then_some(args.jpeg_quality),
    };
    prep.validate()?;
    Ok((prep, settings))
}

fn load_source(path: &Path, prep: &footprint::SourcePrep) -> anyhow::Result<footprint::Bitmap> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    footprint::prepare_source(&bytes, prep)
        .with_context(|| format!("prepare image '{}'", path.display()))
}

fn write_png(path: &Path, bitmap: &footprint::Bitmap) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = footprint::encode_png(bitmap)?;
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn report(name: &str, map: &footprint::PressureMap) {
    match map.outcome {
        footprint::RenderOutcome::EmptyMask => {
            eprintln!("{name}: no foot detected, output is fully transparent");
        }
        footprint::RenderOutcome::DegenerateRange { value } => {
            eprintln!("{name}: uniform pressure {value:.4}, contrast stretch skipped");
        }
        footprint::RenderOutcome::Rendered { min, max } => {
            eprintln!(
                "{name}: {} of {} pixels mapped, pressure {min:.4}..{max:.4}",
                map.stats.mask_pixels, map.stats.pixels
            );
        }
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (prep, settings) = load_config(&args.prep)?;
    let source = load_source(&args.in_path, &prep)?;
    let map = footprint::render_pressure_map(source, &settings, &footprint::CancelToken::new())?;
    report("foot", &map);
    write_png(&args.out, &map.bitmap)
}

fn cmd_pair(args: PairArgs) -> anyhow::Result<()> {
    let (prep, settings) = load_config(&args.prep)?;
    let left = load_source(&args.left, &prep)?;
    let right = load_source(&args.right, &prep)?;
    let pair =
        footprint::render_foot_pair(left, right, &settings, &footprint::CancelToken::new())?;
    report("left", &pair.left);
    report("right", &pair.right);
    write_png(&args.out_dir.join("left.png"), &pair.left.bitmap)?;
    write_png(&args.out_dir.join("right.png"), &pair.right.bitmap)
}

fn cmd_legend(args: LegendArgs) -> anyhow::Result<()> {
    let strip = footprint::render_legend_strip(args.width, args.height)?;
    for entry in footprint::legend_entries() {
        let c = entry.color;
        eprintln!(
            "  {:<12} {:.2}  rgb({}, {}, {})",
            entry.label, entry.value, c.r, c.g, c.b
        );
    }
    write_png(&args.out, &strip)
}
