use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use facets::{FaceColor, PathResolution, PipelineBuilder, Surface, encode_runs, load_image};
use facets_cli::{Overrides, config_schema, load_config, viewer};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

/// Find triangular faces in an image and show them outlined
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image to scan (defaults to the configured input path)
    image: Option<PathBuf>,
    /// Path to a .toml or .json configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Base directory for a relative image path
    #[arg(long, value_name = "working-directory|executable-directory")]
    resolve: Option<PathResolution>,
    /// Use a fixed 600x600 resizable window instead of fitting the image
    #[arg(long)]
    fixed_window: bool,
    /// Classify the colour of every detected face
    #[arg(long)]
    colors: bool,
    /// Run detection and log the results without opening a window
    #[arg(long)]
    no_window: bool,
    /// Print the configuration JSON schema and exit
    #[arg(long)]
    print_schema: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", config_schema()?);
        return Ok(());
    }

    let overrides = Overrides {
        image: cli.image.clone(),
        resolution: cli.resolve,
        fixed_window: cli.fixed_window,
        sample_colors: cli.colors,
    };
    let config = load_config(cli.config.as_ref(), &overrides)?;

    let path = config.resolved_input()?;
    info!("Loading image {}", path.display());
    let image = load_image(&path)?;

    let pipeline = PipelineBuilder::from_config(&config)?;
    info!("{}", pipeline.info());

    let (report, annotated) = pipeline.run(&image)?;
    info!(
        contours = report.contours.len(),
        triangles = report.detections.len(),
        "Detection finished"
    );

    // Hole borders repeat the face of their outer border
    let colors: Vec<FaceColor> = report
        .outer_detections()
        .filter_map(|d| d.color)
        .collect();
    if !colors.is_empty() {
        info!("Face colours: {}", encode_runs(&colors));
    }
    if let Ok(surface) = Surface::from_colors(&colors) {
        info!(solved = surface.is_solved(), "Surface {}", surface);
    }
    if report.detections.is_empty() {
        warn!("No triangular faces found in {}", path.display());
    }

    if cli.no_window {
        return Ok(());
    }

    viewer::show(annotated, &config.display)?;
    Ok(())
}
