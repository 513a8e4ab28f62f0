//! Atlas & Registry Builder (spec.md §4.8).
//!
//! Assembles the resource-pack-wide texture atlases, the behavior-pack
//! block registry, and the `.lang` file from the already-lowered item and
//! block lists. Runs after lowering, but lowering never cross-checks a
//! scanned item's `texture_key` against the asset index (see `synth.rs`),
//! so this is the stage that enforces spec.md §8 invariant 5: an atlas or
//! registry entry is never emitted for a texture key with no backing
//! asset. An item or block hitting that case is dropped from the atlas
//! and counted as a dangling reference, not written with a broken path.

use tracing::warn;

use modtrans_ir::{language, BlockRegistry, Item, ItemTextureAtlas, LanguagesIndex, TerrainTextureAtlas};
use modtrans_ir::Block;

use crate::assets::AssetIndex;

pub struct AtlasBundle {
    pub item_textures: ItemTextureAtlas,
    pub terrain_textures: TerrainTextureAtlas,
    pub block_registry: BlockRegistry,
    pub languages: LanguagesIndex,
    pub lang_lines: Vec<String>,
}

/// Builds the atlas bundle, validating every texture key against `assets`
/// first. Returns the bundle plus the count of dangling references
/// dropped (spec.md §8 invariant 5).
pub fn build(
    mod_id: &str,
    items: &[Item],
    blocks: &[Block],
    locales: &[String],
    assets: &AssetIndex,
) -> (AtlasBundle, usize) {
    let mut dangling = 0usize;

    let mut item_textures = ItemTextureAtlas::new(mod_id);
    let mut lang_item_ids = Vec::with_capacity(items.len());
    for item in items {
        if assets.item_textures.contains_key(&item.texture_key) {
            item_textures.insert(&item.texture_key);
            lang_item_ids.push(item.id.clone());
        } else {
            warn!(item = item.id.as_str(), texture_key = item.texture_key.as_str(), "dropping item with no backing texture asset");
            dangling += 1;
        }
    }

    let mut terrain_textures = TerrainTextureAtlas::new(mod_id);
    let mut block_registry = BlockRegistry::default();
    let mut lang_block_ids = Vec::with_capacity(blocks.len());
    for block in blocks {
        if assets.block_textures.contains_key(&block.texture_key) {
            terrain_textures.insert(&block.texture_key);
            block_registry.insert(format!("{mod_id}:{}", block.id), &block.texture_key);
            lang_block_ids.push(block.id.clone());
        } else {
            warn!(block = block.id.as_str(), texture_key = block.texture_key.as_str(), "dropping block with no backing texture asset");
            dangling += 1;
        }
    }

    let locale_refs: Vec<&str> = locales.iter().map(String::as_str).collect();
    let languages = LanguagesIndex::new(&locale_refs);

    let lang_lines = language::lang_lines(mod_id, &lang_item_ids, &lang_block_ids);

    let bundle = AtlasBundle {
        item_textures,
        terrain_textures,
        block_registry,
        languages,
        lang_lines,
    };
    (bundle, dangling)
}
