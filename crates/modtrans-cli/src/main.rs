use std::path::PathBuf;

use clap::Parser;
use modtrans_pipeline::{transpile, TranspilerConfig};
use tracing::{error, info};

/// Convert a source-edition mod jar into a target-edition addon.
#[derive(Debug, Parser)]
#[command(name = "modtrans", version)]
struct Args {
    /// Path to the input mod archive (.jar).
    input_archive_path: PathBuf,

    /// Directory the .mcaddon is written into.
    output_directory_path: PathBuf,

    /// Optional TOML config overriding synthesis/target/language defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    let config = match &args.config {
        Some(path) => match TranspilerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => TranspilerConfig::default(),
    };

    info!(
        input = %args.input_archive_path.display(),
        output = %args.output_directory_path.display(),
        "starting transpile"
    );

    match transpile(&args.input_archive_path, &args.output_directory_path, &config) {
        Ok(outcome) => {
            println!("wrote {}", outcome.output_path.display());
            println!(
                "mod_id={} items={} blocks={} recipes={} unsupported_recipes={} assets_extracted={} skipped_entries={} corrupt_textures={} corrupt_recipes={} errors={} duration_ms={}",
                outcome.mod_id,
                outcome.stats.items,
                outcome.stats.blocks,
                outcome.stats.recipes,
                outcome.stats.unsupported_recipes,
                outcome.stats.assets_extracted,
                outcome.stats.skipped_archive_entries,
                outcome.stats.corrupt_textures,
                outcome.stats.corrupt_recipes,
                outcome.stats.errors,
                outcome.stats.duration.as_millis(),
            );
        }
        Err(e) => {
            error!(stage = e.stage().tag(), "{e}");
            eprintln!("transpile failed at stage '{}': {e}", e.stage().tag());
            std::process::exit(1);
        }
    }
}
