use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use heyuan_guide::page::DEFAULT_TEMPLATE;
use heyuan_guide::{
    GuideConfig, GuideError, HotelView, Origin, PageContext, fallback_dataset, logging, resolve, source_for,
    web,
};

#[derive(Debug, Parser)]
#[command(
    name = "heyuan-guide",
    version,
    about = "Renders the Heyuan family travel guide from a JSON dataset"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve the dataset and write the composed page
    Render {
        /// Travel data file path or http(s) URL
        #[arg(long, value_parser = non_blank)]
        data: Option<String>,
        /// Page template containing the region containers
        #[arg(long)]
        template: Option<PathBuf>,
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Hotel view visible in the written page
        #[arg(long, default_value = "cards")]
        view: HotelView,
    },
    /// Resolve the dataset once and serve the page over HTTP
    Serve {
        /// Travel data file path or http(s) URL
        #[arg(long, value_parser = non_blank)]
        data: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the built-in fallback dataset as JSON
    Fallback,
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("data location cannot be blank".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.chain().find_map(|cause| cause.downcast_ref::<GuideError>()) {
                Some(guide_err) => eprintln!("Error: {}", guide_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            tracing::debug!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = GuideConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose)?;

    if let Some(path) = &cli.config {
        tracing::debug!("Using config from: {}", path.display());
    }

    match cli.command {
        Command::Render {
            data,
            template,
            output,
            view,
        } => {
            if let Some(data) = data {
                config.source.location = data;
            }
            let template = template.or_else(|| config.output.template.as_ref().map(PathBuf::from));
            let output = output.unwrap_or_else(|| PathBuf::from(&config.output.path));
            render(&config, template.as_deref(), &output, view).await
        }
        Command::Serve { data, port } => {
            if let Some(data) = data {
                config.source.location = data;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;
            serve(&config).await
        }
        Command::Fallback => {
            println!("{}", fallback_dataset().to_json_pretty()?);
            Ok(())
        }
    }
}

async fn build_context(config: &GuideConfig) -> Result<PageContext> {
    let source = source_for(&config.source.location, config.source_timeout())?;
    let resolution = resolve(source.as_ref()).await;
    Ok(PageContext::new(resolution))
}

fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display())),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

async fn render(
    config: &GuideConfig,
    template: Option<&Path>,
    output: &Path,
    view: HotelView,
) -> Result<()> {
    let template = load_template(template)?;
    let mut context = build_context(config).await?;
    context.set_hotel_view(view);
    let html = context.compose(&template);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    std::fs::write(output, html)
        .with_context(|| format!("Failed to write page: {}", output.display()))?;

    let resolution = context.resolution();
    match &resolution.origin {
        Origin::Fetched { location } => println!("Rendered travel data from {location}"),
        Origin::Fallback { reason, .. } => {
            println!("Rendered fallback travel data ({reason})")
        }
    }
    println!(
        "{} hotels, {} days, {} attractions -> {}",
        resolution.dataset.hotels.len(),
        resolution.dataset.itinerary.len(),
        resolution.dataset.attractions.len(),
        output.display()
    );
    Ok(())
}

async fn serve(config: &GuideConfig) -> Result<()> {
    let template = load_template(config.output.template.as_deref().map(Path::new))?;
    let context = build_context(config).await?;
    let state = web::AppState::new(context, template);
    web::run(state, &config.server.static_dir, config.server.port).await
}
