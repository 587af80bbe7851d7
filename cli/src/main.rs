//! visionpage CLI - Google Cloud Vision to PAGE XML

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use visionpage::convert::{convert_document, ConvertOptions, OutputFormat};
use visionpage::{
    parse_response_file, ClientConfig, Document, JsonFormat, LayoutStats, Mode,
    Result, VisionClient, VisionPage,
};

#[derive(Parser)]
#[command(name = "visionpage")]
#[command(version)]
#[command(about = "Run Google Cloud Vision OCR and save the layout as PAGE XML", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send an image to the service and write the mapped layout
    Ocr {
        /// Input image
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Language hint, e.g. "en"
        #[arg(short, long)]
        lang: Option<String>,

        /// What to recognize
        #[arg(short, long, value_enum, default_value = "ocr")]
        mode: ModeArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "page-xml")]
        format: FormatArg,

        /// API key
        #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// OAuth2 access token
        #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<String>,

        /// Annotate endpoint URL
        #[arg(long, env = "VISIONPAGE_ENDPOINT")]
        endpoint: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value = "60")]
        timeout: u64,
    },

    /// Map a saved service response offline
    Map {
        /// Saved images:annotate response
        #[arg(value_name = "RESPONSE")]
        response: PathBuf,

        /// Source image (file name and pixel size)
        #[arg(short, long, value_name = "IMAGE")]
        image: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Which annotations to map
        #[arg(short, long, value_enum, default_value = "ocr")]
        mode: ModeArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "page-xml")]
        format: FormatArg,
    },

    /// Show layout statistics of a saved service response
    Info {
        /// Saved images:annotate response
        #[arg(value_name = "RESPONSE")]
        response: PathBuf,

        /// Source image (file name and pixel size)
        #[arg(short, long, value_name = "IMAGE")]
        image: Option<PathBuf>,

        /// Which annotations to map
        #[arg(short, long, value_enum, default_value = "ocr")]
        mode: ModeArg,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Document text (regions, lines, words, glyphs)
    Ocr,
    /// Localized objects as labeled image regions
    Object,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Ocr => Mode::Ocr,
            ModeArg::Object => Mode::Object,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// PAGE XML 2019-07-15
    PageXml,
    /// Layout tree as JSON
    Json,
    /// Layout tree as compact JSON
    JsonCompact,
    /// Plain text
    Text,
}

impl FormatArg {
    fn convert_options(self) -> ConvertOptions {
        match self {
            FormatArg::PageXml => ConvertOptions::new().with_format(OutputFormat::PageXml),
            FormatArg::Json => ConvertOptions::new().with_format(OutputFormat::Json),
            FormatArg::JsonCompact => ConvertOptions::new()
                .with_format(OutputFormat::Json)
                .with_json_format(JsonFormat::Compact),
            FormatArg::Text => ConvertOptions::new().with_format(OutputFormat::Text),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Ocr {
            image,
            output,
            lang,
            mode,
            format,
            api_key,
            access_token,
            endpoint,
            timeout,
        } => {
            let mut config = ClientConfig::new().with_timeout(Duration::from_secs(timeout));
            if let Some(key) = api_key {
                config = config.with_api_key(key);
            } else if let Some(token) = access_token {
                config = config.with_access_token(token);
            }
            if let Some(endpoint) = endpoint {
                config = config.with_endpoint(endpoint);
            }
            cmd_ocr(
                &image,
                output.as_deref(),
                lang,
                mode.into(),
                format,
                config,
            )
        }
        Commands::Map {
            response,
            image,
            output,
            mode,
            format,
        } => cmd_map(&response, image.as_deref(), output.as_deref(), mode.into(), format),
        Commands::Info {
            response,
            image,
            mode,
        } => cmd_info(&response, image.as_deref(), mode.into()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn cmd_ocr(
    image: &Path,
    output: Option<&Path>,
    lang: Option<String>,
    mode: Mode,
    format: FormatArg,
    config: ClientConfig,
) -> Result<()> {
    let source = visionpage::load_image(image)?;
    let client = VisionClient::new(config)?;

    let mut builder = VisionPage::new().with_mode(mode);
    if let Some(lang) = lang {
        builder = builder.with_language(lang);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Recognizing {}...", source.filename));

    let result = builder.recognize_image(&source, &client);
    spinner.finish_and_clear();

    write_output(result?.document(), format, output)
}

fn cmd_map(
    response: &Path,
    image: Option<&Path>,
    output: Option<&Path>,
    mode: Mode,
    format: FormatArg,
) -> Result<()> {
    let batch = parse_response_file(response)?;
    let doc = map_saved(&batch, image, mode)?;
    write_output(&doc, format, output)
}

fn cmd_info(response: &Path, image: Option<&Path>, mode: Mode) -> Result<()> {
    let batch = parse_response_file(response)?;
    let doc = map_saved(&batch, image, mode)?;
    let stats = LayoutStats::collect(&doc);

    println!("{}", "Layout Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Response".bold(), response.display());
    println!("{}: {}", "Mode".bold(), mode);
    if !doc.image_filename.is_empty() {
        println!("{}: {}", "Image".bold(), doc.image_filename);
    }
    println!("{}: {}x{}", "Size".bold(), doc.width, doc.height);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Regions".bold(), stats.region_count);
    for (kind, count) in &stats.regions_by_kind {
        println!("  {} {}: {}", "├─".dimmed(), kind, count);
    }
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Glyphs".bold(), stats.glyph_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    if let Some(conf) = stats.mean_word_confidence {
        println!("{}: {:.3}", "Mean word confidence".bold(), conf);
    }

    Ok(())
}

fn map_saved(
    batch: &visionpage::BatchAnnotateImagesResponse,
    image: Option<&Path>,
    mode: Mode,
) -> Result<Document> {
    let mut builder = VisionPage::new().with_mode(mode);
    if let Some(image) = image {
        builder = builder.with_image(image);
    }
    Ok(builder.map_batch(batch)?.into_document())
}

fn write_output(doc: &Document, format: FormatArg, output: Option<&Path>) -> Result<()> {
    let result = convert_document(doc, &format.convert_options())?;

    if let Some(path) = output {
        fs::write(path, &result.content)?;
        println!(
            "{} {} ({} regions)",
            "Saved to".green(),
            path.display(),
            result.stats.region_count
        );
    } else {
        println!("{}", result.content);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "visionpage".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Google Cloud Vision to PAGE XML converter");
    println!();
    println!("License: Apache-2.0");
}
