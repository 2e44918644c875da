use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use facedet::cascade::Feature;
use facedet::{annotate, config, report, window, Detector};
use log::{debug, info};

/// Title of the result window.
const WINDOW_TITLE: &str = "result";

#[derive(Parser)]
#[command(name = "facedet")]
#[command(
    version,
    about = "Detect faces and facial features in an image using a cascade classifier"
)]
struct Cli {
    /// Input image file
    input: PathBuf,

    /// Feature to detect (frontalface, lefteye, nose, righteye, profileface, mouth)
    #[arg(short, long, default_value_t = Feature::default(), value_parser = Feature::from_str)]
    feature: Feature,

    /// Report file path (defaults to the configured output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory containing the cascade model files
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Save the annotated image to this path
    #[arg(long)]
    save: Option<PathBuf>,

    /// Do not open the result window
    #[arg(long)]
    no_window: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(None)?;

    let models_dir = cli.models_dir.unwrap_or(cfg.models_dir);
    let output = cli.output.unwrap_or(cfg.output);

    let model_path = models_dir.join(cli.feature.model_file());
    info!("cascade: {}", model_path.display());

    let mut detector = Detector::open(&model_path).context("loading cascade model")?;

    let img = image::open(&cli.input)
        .with_context(|| format!("loading image {}", cli.input.display()))?;

    let regions = detector.detect(&img);
    info!("found {} {} region(s)", regions.len(), cli.feature);
    for region in &regions {
        let (x1, y1) = region.top_left();
        let (x2, y2) = region.bottom_right();
        debug!("region ({x1}, {y1})..({x2}, {y2}) score {:.2}", region.score);
    }

    report::write_report(&output, &regions)?;

    let mut annotated = img.to_rgb8();
    annotate::draw_regions(&mut annotated, &regions);

    if let Some(path) = &cli.save {
        annotated
            .save(path)
            .with_context(|| format!("saving annotated image {}", path.display()))?;
    }

    if !cli.no_window {
        window::show(WINDOW_TITLE, &annotated).context("showing result window")?;
    }

    Ok(())
}
