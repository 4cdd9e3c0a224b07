mod logger;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use logger::CliLogger;
use pdf_numbering::{ImageAsset, ItemSizing, NumberingOptions, Orientation, PageSize, Position};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfn", about = "Numbered ticket and raffle PDF generator", version)]
struct Cli {
    /// Log debug detail (per-page placement)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a numbered PDF from an item image
    Generate(GenerateArgs),

    /// Write a JSON options file with default settings
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Item image (PNG, JPEG, GIF or WebP)
    #[arg(short, long)]
    image: PathBuf,

    /// JSON options file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// First number
    #[arg(long)]
    start: Option<i64>,

    /// Last number (inclusive)
    #[arg(long)]
    end: Option<i64>,

    /// Output PDF file
    #[arg(short, long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Directory for an automatically named PDF
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Page size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Custom page width in mm (with --paper custom)
    #[arg(long)]
    custom_width: Option<f32>,

    /// Custom page height in mm (with --paper custom)
    #[arg(long)]
    custom_height: Option<f32>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Gap between items in mm
    #[arg(long)]
    spacing: Option<f32>,

    /// Draw crop marks around the grid
    #[arg(long)]
    crop_marks: bool,

    /// Number pages in reading order instead of grouping for cutting
    #[arg(long)]
    natural_order: bool,

    /// Label font size in points (scaled with the item size)
    #[arg(long)]
    font_size: Option<f32>,

    /// Label font family (Arial, Times New Roman, Courier New, ...)
    #[arg(long)]
    font_family: Option<String>,

    /// Bold labels
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    bold: Option<bool>,

    /// Italic labels
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    italic: Option<bool>,

    /// Label color as #rrggbb
    #[arg(long)]
    color: Option<String>,

    /// Label X in image pixels (default: image center)
    #[arg(long, requires = "primary_y")]
    primary_x: Option<f32>,

    /// Label Y in image pixels (default: image center)
    #[arg(long, requires = "primary_x")]
    primary_y: Option<f32>,

    /// Stub label X in image pixels
    #[arg(long, requires = "secondary_y")]
    secondary_x: Option<f32>,

    /// Stub label Y in image pixels
    #[arg(long, requires = "secondary_x")]
    secondary_y: Option<f32>,

    /// Image resolution used to derive the item size
    #[arg(long, conflicts_with_all = ["width_mm", "height_mm"])]
    dpi: Option<f32>,

    /// Item width in mm (height follows the image unless --height-mm is set)
    #[arg(long)]
    width_mm: Option<f32>,

    /// Item height in mm (width follows the image unless --width-mm is set)
    #[arg(long)]
    height_mm: Option<f32>,

    /// Pad numbers with zeros to this many digits
    #[arg(long)]
    zero_padding: Option<usize>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for PageSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::a3(),
            PaperArg::A4 => Self::a4(),
            PaperArg::A5 => Self::a5(),
            PaperArg::Letter => Self::letter(),
            PaperArg::Legal => Self::legal(),
            PaperArg::Tabloid => Self::tabloid(),
            PaperArg::Custom => Self::custom(),
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl GenerateArgs {
    /// Apply command line overrides on top of `options`
    fn apply(&self, options: &mut NumberingOptions) {
        if let Some(start) = self.start {
            options.range.start = start;
        }
        if let Some(end) = self.end {
            options.range.end = end;
        }
        if let Some(padding) = self.zero_padding {
            options.number_format.zero_padding = padding;
        }

        let layout = &mut options.page_layout;
        if let Some(paper) = self.paper {
            layout.page_size = paper.into();
        }
        if self.custom_width.is_some() {
            layout.custom_width_mm = self.custom_width;
        }
        if self.custom_height.is_some() {
            layout.custom_height_mm = self.custom_height;
        }
        if let Some(orientation) = self.orientation {
            layout.orientation = orientation.into();
        }
        if let Some(spacing) = self.spacing {
            layout.spacing_mm = spacing;
        }
        if self.crop_marks {
            layout.crop_marks = true;
        }
        if self.natural_order {
            layout.group_for_cutting = false;
        }

        let style = &mut options.text_style;
        if let Some(size) = self.font_size {
            style.font_size_pt = size;
        }
        if let Some(family) = &self.font_family {
            style.font_family = family.clone();
        }
        if let Some(bold) = self.bold {
            style.bold = bold;
        }
        if let Some(italic) = self.italic {
            style.italic = italic;
        }
        if let Some(color) = &self.color {
            style.color_hex = color.clone();
        }

        options.item_sizing = match (self.dpi, self.width_mm, self.height_mm) {
            (Some(dpi), _, _) => ItemSizing::Auto { dpi },
            (None, Some(width_mm), Some(height_mm)) => ItemSizing::Manual {
                width_mm,
                height_mm,
            },
            (None, Some(width_mm), None) => ItemSizing::FixedWidth { width_mm },
            (None, None, Some(height_mm)) => ItemSizing::FixedHeight { height_mm },
            (None, None, None) => options.item_sizing,
        };
    }

    /// Apply label flags on top of the configured (or centered) positions
    fn apply_labels(&self, options: &mut NumberingOptions, image: &ImageAsset) {
        let primary = self.primary_x.zip(self.primary_y);
        let secondary = self.secondary_x.zip(self.secondary_y);
        if primary.is_none() && secondary.is_none() {
            return;
        }

        let mut labels = options.label_position(image.width_px, image.height_px);
        if let Some((x, y)) = primary {
            labels.primary = Position::new(x, y);
        }
        if let Some((x, y)) = secondary {
            labels.secondary = Some(Position::new(x, y));
        }
        options.dual_position = Some(labels);
    }
}

async fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut options = match &args.config {
        Some(path) => NumberingOptions::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => NumberingOptions::default(),
    };
    args.apply(&mut options);

    // Range and layout problems are reported before touching the image
    options.validate()?;

    let image = pdf_numbering::load_image(&args.image)
        .await
        .with_context(|| format!("Failed to load image {}", args.image.display()))?;

    args.apply_labels(&mut options, &image);

    let stats = pdf_numbering::calculate_statistics(&options, image.width_px, image.height_px)?;
    println!("Numbering Statistics:");
    println!(
        "  Numbers: {} ({} to {})",
        stats.total_numbers, options.range.start, options.range.end
    );
    println!(
        "  Item size: {:.1} x {:.1} mm",
        stats.item_width_mm, stats.item_height_mm
    );
    println!(
        "  Grid: {} x {} ({} per page)",
        stats.items_per_column, stats.items_per_row, stats.items_per_page
    );
    println!("  Pages: {}", stats.total_pages);
    println!("  Items on last page: {}", stats.filled_slots_last_page);
    println!("  Page coverage: {:.0}%", stats.used_area_ratio * 100.0);

    if stats_overflow(&stats) {
        log::warn!("Item is larger than the page and will be clipped");
    }

    if args.stats_only {
        return Ok(());
    }

    let generated = pdf_numbering::generate(&options, &image).await?;
    let output = match (&args.output, &args.out_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join(&generated.file_name),
        (None, None) => PathBuf::from(&generated.file_name),
    };
    if output.is_dir() {
        bail!("Output {} is a directory, use --out-dir", output.display());
    }

    let page_count = generated.page_count;
    pdf_numbering::save_pdf(generated.document, &output).await?;
    println!("Generated {} pages → {}", page_count, output.display());

    Ok(())
}

fn stats_overflow(stats: &pdf_numbering::NumberingStatistics) -> bool {
    stats.grid_width_mm > stats.page_width_mm || stats.grid_height_mm > stats.page_height_mm
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Generate(args) => run_generate(args).await?,

        Commands::InitConfig { output } => {
            NumberingOptions::default().save(&output).await?;
            println!("Wrote default options → {}", output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_numbering::DualPosition;

    fn parse(args: &[&str]) -> GenerateArgs {
        let mut full = vec!["pdfn", "generate", "--image", "item.png"];
        full.extend_from_slice(args);
        match Cli::parse_from(full).command {
            Commands::Generate(args) => args,
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "--start", "5", "--end", "60", "--paper", "custom", "--custom-width", "100",
            "--orientation", "landscape", "--crop-marks", "--natural-order", "--bold", "false",
            "--italic", "--width-mm", "40",
        ]);
        let mut options = NumberingOptions::default();
        args.apply(&mut options);

        assert_eq!((options.range.start, options.range.end), (5, 60));
        assert!(options.page_layout.page_size.is_custom());
        assert_eq!(options.page_layout.custom_width_mm, Some(100.0));
        assert_eq!(options.page_layout.orientation, Orientation::Landscape);
        assert!(options.page_layout.crop_marks);
        assert!(!options.page_layout.group_for_cutting);
        assert!(!options.text_style.bold);
        assert!(options.text_style.italic);
        assert_eq!(options.item_sizing, ItemSizing::FixedWidth { width_mm: 40.0 });
        assert_eq!(options.dual_position, None);
    }

    #[test]
    fn test_both_dimensions_are_manual() {
        let args = parse(&["--width-mm", "40", "--height-mm", "25"]);
        let mut options = NumberingOptions::default();
        args.apply(&mut options);
        assert_eq!(
            options.item_sizing,
            ItemSizing::Manual {
                width_mm: 40.0,
                height_mm: 25.0
            }
        );
    }

    fn image(width_px: u32, height_px: u32) -> ImageAsset {
        ImageAsset {
            width_px,
            height_px,
            jpeg: Vec::new(),
        }
    }

    #[test]
    fn test_label_positions() {
        let args = parse(&[
            "--primary-x",
            "10",
            "--primary-y",
            "20",
            "--secondary-x",
            "1",
            "--secondary-y",
            "2",
        ]);
        let mut options = NumberingOptions::default();
        args.apply(&mut options);
        args.apply_labels(&mut options, &image(300, 100));

        assert_eq!(
            options.dual_position,
            Some(DualPosition::with_stub(
                Position::new(10.0, 20.0),
                Position::new(1.0, 2.0)
            ))
        );
    }

    #[test]
    fn test_stub_only_keeps_centered_label() {
        let args = parse(&["--secondary-x", "5", "--secondary-y", "5"]);
        let mut options = NumberingOptions::default();
        args.apply_labels(&mut options, &image(300, 100));

        assert_eq!(
            options.dual_position,
            Some(DualPosition::with_stub(
                Position::new(150.0, 50.0),
                Position::new(5.0, 5.0)
            ))
        );
    }

    #[test]
    fn test_config_without_labels_stays_centered() {
        // A config file only overriding the range
        let args = parse(&["--config", "options.json"]);
        let mut options = NumberingOptions {
            range: pdf_numbering::NumberRange::new(1, 10),
            ..Default::default()
        };
        args.apply(&mut options);
        args.apply_labels(&mut options, &image(300, 100));

        assert_eq!(options.dual_position, None);
        assert_eq!(
            options.label_position(300, 100).primary,
            Position::new(150.0, 50.0)
        );
    }

    #[test]
    fn test_primary_flag_keeps_configured_stub() {
        let args = parse(&["--primary-x", "7", "--primary-y", "8"]);
        let mut options = NumberingOptions {
            dual_position: Some(DualPosition::with_stub(
                Position::new(1.0, 1.0),
                Position::new(2.0, 2.0),
            )),
            ..Default::default()
        };
        args.apply_labels(&mut options, &image(300, 100));

        let labels = options.dual_position.unwrap();
        assert_eq!(labels.primary, Position::new(7.0, 8.0));
        assert_eq!(labels.secondary, Some(Position::new(2.0, 2.0)));
    }

    #[test]
    fn test_dpi_conflicts_with_dimensions() {
        let result = Cli::try_parse_from([
            "pdfn", "generate", "--image", "a.png", "--dpi", "300", "--width-mm", "20",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
