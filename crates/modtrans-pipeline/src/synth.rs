//! Entity Synthesizer (spec.md §4.6).

use std::collections::BTreeMap;

use modtrans_ir::{ArmorSlot, Block, Item};

use crate::assets::AssetIndex;
use crate::config::SynthesisSection;

const TOOL_SUBSTRINGS: &[&str] = &["sword", "axe", "pickaxe", "shovel", "hoe"];

fn armor_slot_for(id: &str) -> ArmorSlot {
    if id.contains("helmet") {
        ArmorSlot::Helmet
    } else if id.contains("chestplate") {
        ArmorSlot::Chestplate
    } else if id.contains("leggings") {
        ArmorSlot::Leggings
    } else if id.contains("boots") {
        ArmorSlot::Boots
    } else {
        ArmorSlot::None
    }
}

/// Apply the case-insensitive substring heuristics from spec.md §4.6 to
/// one item, in place.
fn apply_role_heuristics(item: &mut Item, config: &SynthesisSection) {
    let lower = item.id.to_ascii_lowercase();

    if TOOL_SUBSTRINGS.iter().any(|s| lower.contains(s)) {
        item.tool = true;
        item.stack_max = 1;
        if item.durability == 0 {
            item.durability = config.default_tool_durability;
        }
    }

    let slot = armor_slot_for(&lower);
    if slot != ArmorSlot::None {
        item.armor_slot = slot;
        item.stack_max = 1;
        if item.durability == 0 {
            item.durability = config.default_armor_durability;
        }
    }
}

/// Synthesize the final item and block lists from bytecode-scanned items
/// (keyed by their own id, texture key assumed equal to id — the
/// convention most source-edition mods follow) plus the asset index.
/// Returns `(items, blocks)` sorted by id for deterministic output.
pub fn synthesize(
    scanned_items: Vec<Item>,
    assets: &AssetIndex,
    config: &SynthesisSection,
) -> (Vec<Item>, Vec<Block>) {
    let mut items: BTreeMap<String, Item> = scanned_items
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect();

    let mut block_stems: Vec<&String> = assets.block_textures.keys().collect();
    block_stems.sort();

    let mut blocks = Vec::with_capacity(block_stems.len());
    for stem in block_stems {
        let mut block = Block::bare(stem.clone(), stem.clone());
        if stem.to_ascii_lowercase().contains("ore") {
            block.hardness = config.ore_hardness;
            block.resistance = config.ore_resistance;
            block.is_ore = true;
        }

        match items.get_mut(stem) {
            Some(existing) => existing.is_block_item = true,
            None => {
                let mut induced = Item::bare(stem.clone(), stem.clone());
                induced.stack_max = 64;
                induced.is_block_item = true;
                items.insert(stem.clone(), induced);
            }
        }

        blocks.push(block);
    }

    let mut texture_stems: Vec<&String> = assets.item_textures.keys().collect();
    texture_stems.sort();
    for stem in texture_stems {
        items.entry(stem.clone()).or_insert_with(|| {
            let mut item = Item::bare(stem.clone(), stem.clone());
            item.stack_max = 64;
            item
        });
    }

    for item in items.values_mut() {
        apply_role_heuristics(item, config);
    }

    (items.into_values().collect(), blocks)
}
