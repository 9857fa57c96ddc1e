use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use image_ops::MergeMode;

use image_converter::commands::{TileSource, run_merge, run_split, run_tile};
use image_converter::config::DEFAULT_LOG_LEVEL;
use image_converter::{AppConfig, init_tracing};

#[derive(Parser)]
#[command(name = "image-converter", version)]
#[command(about = "Merge, split, and tile images")]
struct Cli {
    /// Replace output files that already exist.
    #[arg(long, global = true)]
    overwrite: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge two images of the same size.
    #[command(visible_alias = "m")]
    Merge {
        /// First image; wins alpha ties.
        first: PathBuf,
        /// Second image.
        second: PathBuf,
        /// Destination PNG file.
        output: PathBuf,
        /// Merge mode (see `modes`).
        #[arg(default_value_t = 0)]
        mode: u32,
    },

    /// Split an image into equally-sized slices.
    #[command(visible_alias = "s")]
    Split {
        /// Image to split.
        image: PathBuf,
        /// Slice width in pixels; must divide the image width.
        slice_width: u32,
        /// Slice height in pixels; must divide the image height.
        slice_height: u32,
        /// Directory for the slices (defaults to the image's directory).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Combine images into a square tile map.
    #[command(visible_alias = "t")]
    Tile {
        /// Use every supported image in this directory.
        #[arg(short, long, conflicts_with = "images")]
        directory: Option<PathBuf>,
        /// Destination PNG file.
        #[arg(short, long)]
        output: PathBuf,
        /// Images to tile, in placement order.
        #[arg(required_unless_present = "directory")]
        images: Vec<PathBuf>,
    },

    /// List the available merge modes.
    Modes,
}

fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let config = if cli.overwrite {
        config.with_overwrite(true)
    } else {
        config
    };

    match cli.command {
        Commands::Merge {
            first,
            second,
            output,
            mode,
        } => run_merge(&first, &second, &output, mode, &config).with_context(|| {
            format!("Could not merge {} and {}", first.display(), second.display())
        })?,
        Commands::Split {
            image,
            slice_width,
            slice_height,
            out_dir,
        } => run_split(
            &image,
            slice_width,
            slice_height,
            out_dir.as_deref(),
            &config,
        )
        .map(|_| ())
        .with_context(|| format!("Could not split {}", image.display()))?,
        Commands::Tile {
            directory,
            output,
            images,
        } => {
            let source = match directory {
                Some(dir) => TileSource::Directory(dir),
                None => TileSource::Files(images),
            };
            run_tile(&source, &output, &config)
                .map(|_| ())
                .with_context(|| format!("Could not tile into {}", output.display()))?
        }
        Commands::Modes => {
            for mode in MergeMode::ALL {
                println!("{}: {}", mode.code(), mode.description());
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load();
    init_tracing(
        config
            .as_ref()
            .map(|c| c.log_level.as_str())
            .unwrap_or(DEFAULT_LOG_LEVEL),
    );

    let result = config
        .context("Invalid configuration")
        .and_then(|config| run(cli, config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
