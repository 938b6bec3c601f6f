use anyhow::{Context, Result, bail};
use blog_formatter_config::Config;
use blog_formatter_engine::{
    ArticleMedia, FormattedArticle, PhotoLibrary, PhotoLink, RenderOptions, VideoAsset,
    format_article, io, parse_photo_links, render_html,
};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;

/// Format a plain-text article into HTML with automatically placed media
#[derive(Parser, Debug)]
#[command(name = "blog-formatter", version)]
#[command(about = "Format a plain-text article into HTML with automatically placed media", long_about = None)]
struct Args {
    /// Article text: title line, subtitle line, one paragraph per line (`-` reads stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    input: PathBuf,

    /// Uploaded photo file name, in article order
    #[arg(long = "photo", value_name = "NAME")]
    photos: Vec<String>,

    /// Folder whose images are added as uploads, sorted by name
    #[arg(long, value_name = "DIR")]
    photos_dir: Option<PathBuf>,

    /// Full photo URL; the folder also becomes the media base URL when none is set
    #[arg(long = "photo-link", value_name = "URL")]
    photo_links: Vec<String>,

    /// Video URL (YouTube, Vimeo, direct file or any embeddable page)
    #[arg(long = "video", value_name = "URL")]
    videos: Vec<String>,

    /// Keyword marking the paragraphs to render as quotes
    #[arg(long, value_name = "KEYWORD")]
    quote: Option<String>,

    /// Folder URL photo file names are resolved against
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Write here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let raw = read_input(&args.input)?;

    let links = parse_photo_links(&args.photo_links.join("\n"));
    let library = build_library(&args, &config, &links)?;
    let base_url = args
        .base_url
        .clone()
        .filter(|url| !url.is_empty())
        .or_else(|| Some(config.media_base_url.clone()).filter(|url| !url.is_empty()))
        .or_else(|| links.first().map(|link| link.path.clone()))
        .unwrap_or_default();

    let videos = args
        .videos
        .iter()
        .map(|url| VideoAsset::from_url(url))
        .collect();
    let media = ArticleMedia::new(library.photos().to_vec(), videos)
        .with_overrides(config.placements.clone());
    let keyword = args.quote.as_deref().unwrap_or(&config.quote_keyword);

    let Some(article) = format_article(&raw, &media, keyword) else {
        bail!("Nothing to format: the article text is empty");
    };
    log::info!(
        "Formatted '{}': {} media units, {} gallery photos",
        article.document.title,
        article.plan.units.len(),
        article.plan.overflow.len()
    );

    let options = RenderOptions {
        base_url,
        gallery_title: config.gallery_title.clone(),
        alts: config.alts.clone(),
        captions: config.captions.clone(),
    };
    let rendered = render(&article, &options, args.format)?;

    match &args.output {
        Some(path) => {
            io::write_output(path, &rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config file at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read stdin");
    }
    io::read_article(input).with_context(|| format!("Failed to read {}", input.display()))
}

/// Uploads from the photo folder first, then `--photo` names, then pasted links.
fn build_library(args: &Args, config: &Config, links: &[PhotoLink]) -> Result<PhotoLibrary> {
    let mut library = PhotoLibrary::new();

    if let Some(dir) = args.photos_dir.as_ref().or(config.photos_dir.as_ref()) {
        library.add_uploads(io::scan_photo_dir(dir)?);
    }
    library.add_uploads(args.photos.iter().cloned());
    library.replace_links(links.iter().cloned());

    Ok(library)
}

fn render(
    article: &FormattedArticle,
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(render_html(&article.document, options)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(article)?;
            json.push('\n');
            Ok(json)
        }
    }
}
