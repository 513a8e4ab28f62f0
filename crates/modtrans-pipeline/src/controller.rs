//! Controller (spec.md §4.10).
//!
//! Sequences every stage in the fixed order spec.md §2 requires:
//! read -> (scan / parse recipes / index assets) -> synthesize -> lower ->
//! build atlases -> assemble. Cooperative-linear, no threads, no async
//! runtime (spec.md §5 — there are no suspension points worth one).

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{info, warn};

use crate::archive::{self, EntryClass};
use crate::assemble;
use crate::assets;
use crate::atlas_builder;
use crate::config::TranspilerConfig;
use crate::error::TranspileError;
use crate::lower;
use crate::modid;
use crate::recipe_parser;
use crate::scanner;

/// Counters surfaced in the final summary line (spec.md §6).
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub items: usize,
    pub blocks: usize,
    pub recipes: usize,
    pub unsupported_recipes: usize,
    pub assets_extracted: usize,
    pub skipped_archive_entries: usize,
    pub corrupt_textures: usize,
    pub corrupt_recipes: usize,
    /// Unified total of every non-fatal corruption counter above
    /// (spec.md §7/§8). `unsupported_recipes` is deliberately excluded:
    /// an unsupported recipe shape is not an error, spec.md §7.
    pub errors: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct TranspileOutcome {
    pub mod_id: String,
    pub output_path: PathBuf,
    pub stats: Stats,
}

fn class_stem(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
        .to_string()
}

/// Run the full pipeline once: `input_archive_path` -> `.mcaddon` under
/// `output_directory_path`.
pub fn transpile(
    input_archive_path: &Path,
    output_directory_path: &Path,
    config: &TranspilerConfig,
) -> Result<TranspileOutcome, TranspileError> {
    let started = Instant::now();
    let mut stats = Stats::default();

    let file_name = input_archive_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("mod.jar");
    let mod_id = modid::derive(file_name);

    let (entries, skipped) = archive::read_archive(input_archive_path)?;
    stats.skipped_archive_entries += skipped;
    info!(mod_id = mod_id.as_str(), entries = entries.len(), "archive read");

    let (assets_index, corrupt_textures) = assets::build(&entries);
    stats.corrupt_textures = corrupt_textures;
    stats.assets_extracted = assets_index.item_textures.len()
        + assets_index.block_textures.len()
        + assets_index.armor_textures.len();

    let mut scanned_items = Vec::new();
    for entry in entries.iter().filter(|e| e.class == EntryClass::ItemClass) {
        let class_name = class_stem(&entry.path);
        let scanned = scanner::scan(&class_name, &entry.bytes);
        let id = scanned
            .id
            .clone()
            .unwrap_or_else(|| scanner::camel_to_snake(&class_name));
        scanned_items.push(scanned.into_item(&id));
    }

    let mut recipes = Vec::new();
    for entry in entries.iter().filter(|e| e.class == EntryClass::Recipe) {
        match serde_json::from_slice::<Value>(&entry.bytes) {
            Ok(value) => recipes.push(recipe_parser::parse(&value, mod_id.as_str())),
            Err(e) => {
                warn!("skipping malformed recipe {}: {e}", entry.path);
                stats.corrupt_recipes += 1;
            }
        }
    }

    let (items, blocks) = crate::synth::synthesize(scanned_items, &assets_index, &config.synthesis);
    stats.items = items.len();
    stats.blocks = blocks.len();

    let lowered = lower::lower(mod_id.as_str(), &items, &blocks, &recipes, config);
    stats.recipes = lowered.recipes.len();
    stats.unsupported_recipes = lowered.unsupported_recipes;

    let (atlases, dangling_textures) = atlas_builder::build(
        mod_id.as_str(),
        &items,
        &blocks,
        &config.languages.locales,
        &assets_index,
    );
    stats.corrupt_textures += dangling_textures;

    let output_path = assemble::assemble(
        output_directory_path,
        mod_id.as_str(),
        &lowered,
        &atlases,
        &assets_index,
    )?;

    stats.errors = stats.skipped_archive_entries + stats.corrupt_textures + stats.corrupt_recipes;
    stats.duration = started.elapsed();

    info!(
        mod_id = mod_id.as_str(),
        items = stats.items,
        blocks = stats.blocks,
        recipes = stats.recipes,
        unsupported_recipes = stats.unsupported_recipes,
        assets_extracted = stats.assets_extracted,
        skipped_entries = stats.skipped_archive_entries,
        corrupt_textures = stats.corrupt_textures,
        corrupt_recipes = stats.corrupt_recipes,
        errors = stats.errors,
        duration_ms = stats.duration.as_millis() as u64,
        "transpile complete"
    );

    Ok(TranspileOutcome {
        mod_id: mod_id.as_str().to_string(),
        output_path,
        stats,
    })
}
