//! Target-schema block documents (spec.md §4.7 "Block").

use serde::Serialize;
use serde_json::{json, Value};

/// `behavior_pack/blocks/{id}.json`.
#[derive(Debug, Clone, Serialize)]
pub struct BehaviorBlockDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:block")]
    pub block: BehaviorBlockBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct BehaviorBlockBody {
    pub description: BlockDescription,
    pub components: Value,
    pub menu_category: MenuCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockDescription {
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuCategory {
    pub category: &'static str,
    pub group: &'static str,
}

impl BehaviorBlockDocument {
    pub fn build(
        identifier: String,
        texture_key: &str,
        hardness: f32,
        resistance: f32,
        light_emission: u8,
        is_ore: bool,
        format_version: impl Into<String>,
    ) -> Self {
        let group = if is_ore {
            "itemGroup.name.ore"
        } else {
            "itemGroup.name.stone"
        };

        let mut components = serde_json::Map::new();
        components.insert(
            "minecraft:destructible_by_mining".into(),
            json!({ "seconds_to_destroy": hardness / 1.5 }),
        );
        components.insert(
            "minecraft:destructible_by_explosion".into(),
            json!({ "explosion_resistance": resistance }),
        );
        components.insert(
            "minecraft:geometry".into(),
            json!("minecraft:geometry.full_block"),
        );
        components.insert(
            "minecraft:material_instances".into(),
            json!({
                "*": { "texture": texture_key, "render_method": "opaque" }
            }),
        );
        if light_emission > 0 {
            components.insert("minecraft:light_emission".into(), json!(light_emission));
        }

        Self {
            format_version: format_version.into(),
            block: BehaviorBlockBody {
                description: BlockDescription { identifier },
                components: Value::Object(components),
                menu_category: MenuCategory {
                    category: "construction",
                    group,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ore_blocks_use_ore_group() {
        let doc = BehaviorBlockDocument::build(
            "x:ruby_ore".into(),
            "ruby_ore",
            3.0,
            6.0,
            0,
            true,
            "1.20.80",
        );
        assert_eq!(doc.block.menu_category.group, "itemGroup.name.ore");
        let seconds = doc.block.components["minecraft:destructible_by_mining"]
            ["seconds_to_destroy"]
            .as_f64()
            .unwrap();
        assert!((seconds - 2.0).abs() < 1e-6);
    }

    #[test]
    fn light_emission_omitted_when_zero() {
        let doc = BehaviorBlockDocument::build(
            "x:marble".into(),
            "marble",
            1.5,
            3.0,
            0,
            false,
            "1.20.80",
        );
        assert!(doc.block.components.get("minecraft:light_emission").is_none());
    }
}
