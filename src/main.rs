use clap::Parser;
use photokit::config;
use photokit::controller::Controller;
use photokit::source::HttpFetcher;
use photokit::viewer::{NoViewer, SystemViewer};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "photokit")]
#[command(about = "Interactive image utility for social media")]
#[command(long_about = "\
Interactive image utility for social media

Choose an operation from the menu, then give an image URL or local path:

  1. Resize for a social network   (Youtube, Instagram, Twitter, Facebook)
  2. Adjust contrast               (histogram equalization)
  3. Apply a filter                (blur, contour, emboss, sharpen, ...)
  4. Create an artistic sketch     (requires an image with a person)
  5. Exit

Results are written to the current directory and opened in an image viewer.
Settings are read from photokit.toml when present.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "photokit.toml")]
    config: PathBuf,

    /// Write results without opening a viewer
    #[arg(long)]
    no_display: bool,

    /// Log at debug level (overrides the config file)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config)?;

    let level = if cli.verbose {
        "debug"
    } else {
        app_config.log.level.as_str()
    };
    init_logging(level);
    tracing::debug!(config = %cli.config.display(), "Configuration loaded");

    let fetcher = HttpFetcher::new(&app_config.download)?;
    let output_dir = std::env::current_dir()?;
    let normalization = app_config.contrast.normalization;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if app_config.display.enabled && !cli.no_display {
        let viewer = SystemViewer::new(app_config.display.viewer.as_deref());
        tracing::debug!(program = viewer.program(), "Using system viewer");
        Controller::new(fetcher, viewer, output_dir)
            .with_normalization(normalization)
            .run(stdin.lock(), stdout.lock())?;
    } else {
        Controller::new(fetcher, NoViewer, output_dir)
            .with_normalization(normalization)
            .run(stdin.lock(), stdout.lock())?;
    }

    Ok(())
}
