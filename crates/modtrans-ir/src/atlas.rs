//! Target-schema texture atlases and block registry (spec.md §4.8).

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct AtlasEntry {
    pub textures: String,
}

/// `textures/item_texture.json`.
#[derive(Debug, Clone, Serialize)]
pub struct ItemTextureAtlas {
    pub resource_pack_name: String,
    pub texture_name: &'static str,
    pub texture_data: BTreeMap<String, AtlasEntry>,
}

impl ItemTextureAtlas {
    pub fn new(mod_id: &str) -> Self {
        Self {
            resource_pack_name: mod_id.to_string(),
            texture_name: "atlas.items",
            texture_data: BTreeMap::new(),
        }
    }

    /// No file-extension suffix, spec.md §4.8: "the key naming must be
    /// exactly consistent with the referencing `icon` string".
    pub fn insert(&mut self, texture_key: &str) {
        self.texture_data.insert(
            texture_key.to_string(),
            AtlasEntry {
                textures: format!("textures/items/{texture_key}"),
            },
        );
    }
}

/// `textures/terrain_texture.json`, analogous over blocks.
#[derive(Debug, Clone, Serialize)]
pub struct TerrainTextureAtlas {
    pub resource_pack_name: String,
    pub texture_name: &'static str,
    pub texture_data: BTreeMap<String, AtlasEntry>,
}

impl TerrainTextureAtlas {
    pub fn new(mod_id: &str) -> Self {
        Self {
            resource_pack_name: mod_id.to_string(),
            texture_name: "atlas.terrain",
            texture_data: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, texture_key: &str) {
        self.texture_data.insert(
            texture_key.to_string(),
            AtlasEntry {
                textures: format!("textures/blocks/{texture_key}"),
            },
        );
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockRegistryEntry {
    pub textures: String,
    pub sound: &'static str,
}

/// `blocks.json` at the resource pack root, spec.md §4.8/§8 invariant 8.
#[derive(Debug, Clone, Serialize, Default)]
pub struct BlockRegistry(pub BTreeMap<String, BlockRegistryEntry>);

impl BlockRegistry {
    pub fn insert(&mut self, identifier: String, texture_key: &str) {
        self.0.insert(
            identifier,
            BlockRegistryEntry {
                textures: texture_key.to_string(),
                sound: "stone",
            },
        );
    }
}
