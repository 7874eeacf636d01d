use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropcircle_core::geometry::compute_bounds;
use cropcircle_core::intake::{decode, ImageFile};

use super::load_config;
use crate::summary::print_image_info;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image (JPEG or PNG)
    pub file: PathBuf,

    /// Editor config (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let file = ImageFile::from_path(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let image = decode(&file, &config.intake)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let bounds = compute_bounds(image.width(), image.height(), config.output.viewport_size)?;

    print_image_info(&args.file, &file, &image, &bounds, config.output.viewport_size);
    Ok(())
}
