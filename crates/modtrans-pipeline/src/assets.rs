//! Asset Indexer (spec.md §4.5).

use std::collections::HashMap;

use modtrans_ir::{TextureAsset, TextureKind};

use crate::archive::{ClassifiedEntry, EntryClass};

/// The three texture maps, keyed by file stem. Built in the order
/// spec.md §5 requires: block textures before item textures, so the
/// item pass can detect block-item overlap.
#[derive(Debug, Default)]
pub struct AssetIndex {
    pub block_textures: HashMap<String, TextureAsset>,
    pub item_textures: HashMap<String, TextureAsset>,
    pub armor_textures: HashMap<String, TextureAsset>,
}

impl AssetIndex {
    /// A stem present in both maps implies a block-item (spec.md §4.5).
    pub fn is_block_item_texture(&self, stem: &str) -> bool {
        self.block_textures.contains_key(stem) && self.item_textures.contains_key(stem)
    }
}

fn file_stem(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
        .to_string()
}

/// Build the asset index from classified archive entries; returns the
/// count of entries dropped as `EntryCorrupt` (non-PNG bytes despite a
/// `.png` path).
pub fn build(entries: &[ClassifiedEntry]) -> (AssetIndex, usize) {
    let mut index = AssetIndex::default();
    let mut corrupt = 0usize;

    // Block textures first (spec.md §5 ordering guarantee).
    for entry in entries.iter().filter(|e| e.class == EntryClass::BlockTexture) {
        let key = file_stem(&entry.path);
        match TextureAsset::new(key.clone(), entry.bytes.clone(), TextureKind::BlockFace) {
            Some(asset) => {
                index.block_textures.insert(key, asset);
            }
            None => corrupt += 1,
        }
    }

    for entry in entries.iter().filter(|e| e.class == EntryClass::ItemTexture) {
        let key = file_stem(&entry.path);
        match TextureAsset::new(key.clone(), entry.bytes.clone(), TextureKind::ItemIcon) {
            Some(asset) => {
                index.item_textures.insert(key, asset);
            }
            None => corrupt += 1,
        }
    }

    for entry in entries.iter().filter(|e| e.class == EntryClass::ArmorTexture) {
        let key = file_stem(&entry.path);
        let kind = if key.ends_with("layer_2") {
            TextureKind::ArmorLayer2
        } else {
            TextureKind::ArmorLayer1
        };
        match TextureAsset::new(key.clone(), entry.bytes.clone(), kind) {
            Some(asset) => {
                index.armor_textures.insert(key, asset);
            }
            None => corrupt += 1,
        }
    }

    (index, corrupt)
}
