//! Target-schema item documents (spec.md §4.7 "Item").
//!
//! Mirrors the shape the teacher's `item.rs` used to *read*
//! (`format_version` / `minecraft:item` / `description` / `components`)
//! but as a writer: components that are always present are typed fields,
//! components that are conditional are `Option`s skipped on `None`.

use serde::Serialize;
use serde_json::{json, Value};

use crate::model::ArmorSlot;

/// `behavior_pack/items/{id}.json`.
#[derive(Debug, Clone, Serialize)]
pub struct BehaviorItemDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:item")]
    pub item: BehaviorItemBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct BehaviorItemBody {
    pub description: ItemDescription,
    pub components: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemDescription {
    pub identifier: String,
    pub category: &'static str,
}

/// Parameters needed to build the behavior-side item component bag,
/// collected up front so `build_components` stays a pure function of
/// its arguments rather than reaching back into the neutral `Item`.
pub struct ItemComponentInputs<'a> {
    pub texture_key: &'a str,
    pub stack_max: u8,
    pub durability: u16,
    pub attack_damage: u32,
    pub tool: bool,
    pub armor_slot: ArmorSlot,
    pub edible: bool,
    pub nutrition: u32,
    pub saturation: f32,
    pub is_block_item: bool,
    pub block_placer_target: Option<&'a str>,
    pub ignores_damage: bool,
}

impl BehaviorItemDocument {
    pub fn build(identifier: String, inputs: &ItemComponentInputs<'_>, format_version: impl Into<String>) -> Self {
        let category = if inputs.tool || inputs.armor_slot != ArmorSlot::None {
            "equipment"
        } else {
            "items"
        };

        let mut components = serde_json::Map::new();
        components.insert("minecraft:icon".into(), json!(inputs.texture_key));
        components.insert(
            "minecraft:max_stack_size".into(),
            json!(inputs.stack_max),
        );

        if inputs.durability > 0 {
            components.insert(
                "minecraft:durability".into(),
                json!({ "max_durability": inputs.durability }),
            );
        }
        if inputs.attack_damage > 0 {
            components.insert("minecraft:damage".into(), json!(inputs.attack_damage));
        }
        if inputs.edible {
            components.insert(
                "minecraft:food".into(),
                json!({
                    "nutrition": inputs.nutrition,
                    "saturation_modifier": inputs.saturation,
                }),
            );
        }
        if let Some(slot) = inputs.armor_slot.wearable_slot() {
            components.insert("minecraft:wearable".into(), json!({ "slot": slot }));
            components.insert("minecraft:render_offsets".into(), json!("armor"));
        }
        if let Some(block) = inputs.block_placer_target {
            components.insert(
                "minecraft:block_placer".into(),
                json!({ "block": block }),
            );
        }
        if inputs.ignores_damage {
            components.insert("minecraft:ignores_damage".into(), json!(true));
        }

        Self {
            format_version: format_version.into(),
            item: BehaviorItemBody {
                description: ItemDescription {
                    identifier,
                    category,
                },
                components: Value::Object(components),
            },
        }
    }
}

/// `resource_pack/items/{id}.json` — identifier + icon only, spec.md §4.7:
/// "Item (resource side): a parallel document with `identifier` and
/// `icon` only."
#[derive(Debug, Clone, Serialize)]
pub struct ResourceItemDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:item")]
    pub item: ResourceItemBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceItemBody {
    pub description: ResourceItemDescription,
    pub components: ResourceItemComponents,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceItemDescription {
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceItemComponents {
    #[serde(rename = "minecraft:icon")]
    pub icon: String,
}

impl ResourceItemDocument {
    pub fn build(identifier: String, texture_key: String, format_version: impl Into<String>) -> Self {
        Self {
            format_version: format_version.into(),
            item: ResourceItemBody {
                description: ResourceItemDescription { identifier },
                components: ResourceItemComponents { icon: texture_key },
            },
        }
    }
}
