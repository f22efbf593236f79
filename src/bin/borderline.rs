use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "borderline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Partition a text into styled runs for a given scroll progress.
    Segment(SegmentArgs),
    /// Resolve or extract a magazine color palette.
    Palette(PaletteArgs),
}

#[derive(Parser, Debug)]
struct SegmentArgs {
    /// The text block to partition.
    #[arg(long)]
    text: String,

    /// Phrase to highlight, in zone order (repeatable).
    #[arg(long = "phrase")]
    phrases: Vec<String>,

    /// Normalized scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Relative width of each highlight zone.
    #[arg(long, default_value_t = 0.25)]
    highlight_ratio: f64,

    /// Relative width of each pause zone.
    #[arg(long, default_value_t = 0.08)]
    pause_ratio: f64,
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Predefined theme name (literary, modern, artistic, minimalist, vibrant).
    #[arg(long, conflicts_with = "image")]
    theme: Option<String>,

    /// Content tag used for theme inference (repeatable).
    #[arg(long = "tag", conflicts_with = "image")]
    tags: Vec<String>,

    /// Extract the palette from a cover image instead.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Emit CSS custom properties instead of JSON.
    #[arg(long, default_value_t = false)]
    css: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Segment(args) => cmd_segment(args),
        Command::Palette(args) => cmd_palette(args),
    }
}

fn cmd_segment(args: SegmentArgs) -> anyhow::Result<()> {
    let timing = borderline::ZoneTiming::new(args.highlight_ratio, args.pause_ratio)?;
    let active = if args.phrases.is_empty() {
        None
    } else {
        let layout = borderline::ZoneLayout::new(args.phrases.len(), timing)?;
        layout.active_index(args.progress)
    };
    let runs = borderline::segment(&args.text, &args.phrases, active);

    let out = serde_json::json!({
        "active": active,
        "runs": runs,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let palette = if let Some(path) = &args.image {
        let img = image::open(path)
            .with_context(|| format!("open cover image '{}'", path.display()))?;
        borderline::extract_palette(img.to_rgba8().as_raw())
    } else {
        let tags: Vec<&str> = args.tags.iter().map(String::as_str).collect();
        borderline::resolve_palette(args.theme.as_deref(), &tags)
    };

    if args.css {
        println!("{}", palette.css_variables());
    } else {
        println!("{}", serde_json::to_string_pretty(&palette)?);
    }
    Ok(())
}
