use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "qrstyle", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a styled QR code as a PNG.
    Render(RenderArgs),
    /// Print the default style file as JSON.
    Style,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Text or URL to encode.
    #[arg(long)]
    text: String,

    /// Style JSON; flags below override its fields.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Output side length in pixels (200..=1000).
    #[arg(long)]
    size: Option<u32>,

    /// Error correction level.
    #[arg(long, value_enum)]
    ec: Option<EcChoice>,

    /// Module shape.
    #[arg(long, value_enum)]
    shape: Option<ShapeChoice>,

    /// Fill mode.
    #[arg(long, value_enum)]
    fill: Option<FillChoice>,

    /// Primary module color (#RRGGBB).
    #[arg(long)]
    color: Option<String>,

    /// Secondary gradient color (#RRGGBB).
    #[arg(long)]
    secondary: Option<String>,

    /// Background mode. Defaults to `image` when --bg-image is given.
    #[arg(long, value_enum)]
    background: Option<BackgroundChoice>,

    /// Background color (#RRGGBB).
    #[arg(long)]
    bg_color: Option<String>,

    /// Background image (PNG/JPEG).
    #[arg(long)]
    bg_image: Option<PathBuf>,

    /// Logo image (PNG/JPEG).
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Logo side as a percentage of the code width (10..=30).
    #[arg(long)]
    logo_percent: Option<u32>,

    /// Light border around the symbol, in modules.
    #[arg(long)]
    quiet_zone: Option<u32>,

    /// Output PNG path.
    #[arg(long, default_value = qrstyle::DOWNLOAD_FILE_NAME)]
    out: PathBuf,

    /// Print the rendered module matrix to stderr.
    #[arg(long)]
    preview: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EcChoice {
    Low,
    Medium,
    Quartile,
    High,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Square,
    GappedSquare,
    Circle,
    Rounded,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FillChoice {
    Solid,
    Gradient,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackgroundChoice {
    Color,
    Image,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Style => cmd_style(),
    }
}

fn read_style_json(path: &Path) -> anyhow::Result<qrstyle::StyleSelections> {
    let f = File::open(path).with_context(|| format!("open style '{}'", path.display()))?;
    let r = BufReader::new(f);
    let style: qrstyle::StyleSelections =
        serde_json::from_reader(r).with_context(|| "parse style JSON")?;
    Ok(style)
}

fn apply_overrides(sel: &mut qrstyle::StyleSelections, args: &RenderArgs) {
    if let Some(size) = args.size {
        sel.canvas = size;
    }
    if let Some(ec) = args.ec {
        sel.ec_level = match ec {
            EcChoice::Low => qrstyle::EcLevel::Low,
            EcChoice::Medium => qrstyle::EcLevel::Medium,
            EcChoice::Quartile => qrstyle::EcLevel::Quartile,
            EcChoice::High => qrstyle::EcLevel::High,
        };
    }
    if let Some(shape) = args.shape {
        sel.shape = match shape {
            ShapeChoice::Square => qrstyle::ModuleShape::Square,
            ShapeChoice::GappedSquare => qrstyle::ModuleShape::GappedSquare,
            ShapeChoice::Circle => qrstyle::ModuleShape::Circle,
            ShapeChoice::Rounded => qrstyle::ModuleShape::Rounded,
        };
    }
    if let Some(fill) = args.fill {
        sel.fill_mode = match fill {
            FillChoice::Solid => qrstyle::FillMode::Solid,
            FillChoice::Gradient => qrstyle::FillMode::Gradient,
        };
    }
    if let Some(color) = &args.color {
        sel.primary_color.clone_from(color);
    }
    if let Some(color) = &args.secondary {
        sel.secondary_color.clone_from(color);
    }
    match (args.background, &args.bg_image) {
        (Some(BackgroundChoice::Color), _) => sel.background_mode = qrstyle::BackgroundMode::Color,
        (Some(BackgroundChoice::Image), _) | (None, Some(_)) => {
            sel.background_mode = qrstyle::BackgroundMode::Image
        }
        (None, None) => {}
    }
    if let Some(color) = &args.bg_color {
        sel.background_color.clone_from(color);
    }
    if let Some(pct) = args.logo_percent {
        sel.logo_percent = pct;
    }
    if let Some(qz) = args.quiet_zone {
        sel.quiet_zone = qz;
    }
}

/// Read an upload. An unreadable file is reported and treated as no upload.
fn read_upload(path: Option<&Path>, what: &str) -> Option<Vec<u8>> {
    let path = path?;
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            eprintln!("warning: cannot read {what} '{}': {err}", path.display());
            None
        }
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<ExitCode> {
    let mut selections = match &args.style {
        Some(path) => read_style_json(path)?,
        None => qrstyle::StyleSelections::default(),
    };
    apply_overrides(&mut selections, &args);

    let uploads = qrstyle::Uploads {
        background: read_upload(args.bg_image.as_deref(), "background image"),
        logo: read_upload(args.logo.as_deref(), "logo"),
    };

    let preview = qrstyle::generate(&args.text, &selections, uploads);
    for msg in preview.messages() {
        eprintln!("warning: {msg}");
    }

    match preview {
        qrstyle::Preview::Prompt(_) => Ok(ExitCode::SUCCESS),
        qrstyle::Preview::Rejected(_) => Ok(ExitCode::from(2)),
        qrstyle::Preview::Ready(rendered) => {
            if args.preview {
                eprint!("{}", rendered.matrix.to_unicode(rendered.quiet_zone));
            }
            qrstyle::write_png_bytes(&rendered.png, &args.out)
                .with_context(|| format!("save '{}'", args.out.display()))?;
            eprintln!("wrote {}", args.out.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_style() -> anyhow::Result<ExitCode> {
    let json = serde_json::to_string_pretty(&qrstyle::StyleSelections::default())
        .context("serialize default style")?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}
