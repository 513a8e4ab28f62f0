//! Target-schema attachable documents (spec.md §4.7 "Attachable", armor
//! only).

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct AttachableDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:attachable")]
    pub attachable: AttachableBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttachableBody {
    pub description: AttachableDescription,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttachableDescription {
    pub identifier: String,
    pub materials: BTreeMap<&'static str, &'static str>,
    pub textures: BTreeMap<&'static str, String>,
    pub geometry: BTreeMap<&'static str, String>,
    pub render_controllers: Vec<&'static str>,
}

impl AttachableDocument {
    /// `geometry_suffix` is `helmet` / `chestplate` / `leggings` / `boots`
    /// (spec.md §4.7); `texture_path` is the already-resolved
    /// `textures/models/armor/{material}_{layer}` path.
    pub fn build(
        identifier: String,
        geometry_suffix: &str,
        texture_path: String,
        format_version: impl Into<String>,
    ) -> Self {
        let mut materials = BTreeMap::new();
        materials.insert("default", "armor");
        materials.insert("enchanted", "armor_enchanted");

        let mut textures = BTreeMap::new();
        textures.insert("default", texture_path);

        let mut geometry = BTreeMap::new();
        geometry.insert("default", format!("geometry.player.armor.{geometry_suffix}"));

        Self {
            format_version: format_version.into(),
            attachable: AttachableBody {
                description: AttachableDescription {
                    identifier,
                    materials,
                    textures,
                    geometry,
                    render_controllers: vec!["controller.render.armor"],
                },
            },
        }
    }
}
