//! Component Lowerer (spec.md §4.7).
//!
//! Pure translation from the neutral IR (`Item`, `Block`, `Recipe`) to the
//! write-only target-schema documents in `modtrans_ir`. Takes no archive or
//! filesystem input — everything it needs is already resolved by the
//! earlier stages.

use modtrans_ir::{
    ArmorSlot, AttachableDocument, BehaviorBlockDocument, BehaviorItemDocument, Block, Ingredient,
    Item, ItemComponentInputs, Recipe, RecipeDescription, RecipeDocument, RecipeKeyItem,
    RecipeResult, ResourceItemDocument, ShapedRecipeBody, ShapedRecipeDocument,
    ShapelessRecipeBody, ShapelessRecipeDocument,
};
use std::collections::{BTreeMap, HashMap};

use crate::config::TranspilerConfig;

pub struct LoweredItem {
    pub id: String,
    pub behavior: BehaviorItemDocument,
    pub resource: ResourceItemDocument,
    pub attachable: Option<AttachableDocument>,
}

pub struct LoweredBlock {
    pub id: String,
    pub document: BehaviorBlockDocument,
}

pub struct LoweredRecipe {
    pub id: String,
    pub document: RecipeDocument,
}

#[derive(Default)]
pub struct LoweredOutput {
    pub items: Vec<LoweredItem>,
    pub blocks: Vec<LoweredBlock>,
    pub recipes: Vec<LoweredRecipe>,
    pub unsupported_recipes: usize,
}

/// Resolve the armor texture path for an item's attachable document
/// (spec.md §4.7): `material` is the item id with the slot suffix
/// stripped, `layer` is `layer_2` for leggings and `layer_1` for every
/// other slot.
fn armor_texture_path(item: &Item) -> String {
    let material = match item.armor_slot.geometry_suffix() {
        Some(suffix) => item
            .id
            .strip_suffix(&format!("_{suffix}"))
            .unwrap_or(item.id.as_str()),
        None => item.id.as_str(),
    };
    let layer = if item.armor_slot == ArmorSlot::Leggings {
        "layer_2"
    } else {
        "layer_1"
    };
    format!("textures/models/armor/{material}_{layer}")
}

fn lower_item(
    item: &Item,
    mod_id: &str,
    block_identifiers: &HashMap<&str, String>,
    config: &TranspilerConfig,
) -> LoweredItem {
    let identifier = format!("{mod_id}:{}", item.id);

    let block_placer_target = if item.is_block_item {
        block_identifiers.get(item.id.as_str()).map(String::as_str)
    } else {
        None
    };

    let inputs = ItemComponentInputs {
        texture_key: &item.texture_key,
        stack_max: item.stack_max,
        durability: item.clamped_durability(),
        attack_damage: item.attack_damage,
        tool: item.tool,
        armor_slot: item.armor_slot,
        edible: item.edible,
        nutrition: item.nutrition,
        saturation: item.saturation,
        is_block_item: item.is_block_item,
        block_placer_target,
        ignores_damage: item.ignores_damage,
    };

    let behavior = BehaviorItemDocument::build(
        identifier.clone(),
        &inputs,
        config.target.entity_format_version.clone(),
    );
    let resource = ResourceItemDocument::build(
        identifier.clone(),
        item.texture_key.clone(),
        config.target.entity_format_version.clone(),
    );

    let attachable = item.armor_slot.geometry_suffix().map(|suffix| {
        AttachableDocument::build(
            identifier.clone(),
            suffix,
            armor_texture_path(item),
            config.target.attachable_format_version.clone(),
        )
    });

    LoweredItem {
        id: item.id.clone(),
        behavior,
        resource,
        attachable,
    }
}

fn lower_block(block: &Block, mod_id: &str, config: &TranspilerConfig) -> LoweredBlock {
    let identifier = format!("{mod_id}:{}", block.id);
    let document = BehaviorBlockDocument::build(
        identifier,
        &block.texture_key,
        block.hardness,
        block.resistance,
        block.light_emission,
        block.is_ore,
        config.target.entity_format_version.clone(),
    );
    LoweredBlock {
        id: block.id.clone(),
        document,
    }
}

fn ingredient_key_item(ingredient: &Ingredient) -> RecipeKeyItem {
    let item_ref = ingredient.lower();
    RecipeKeyItem {
        item: item_ref.identifier(),
        count: None,
    }
}

fn lower_recipe(
    recipe: &Recipe,
    mod_id: &str,
    index: usize,
    crafting_table_tag: String,
    format_version: String,
) -> Option<LoweredRecipe> {
    match recipe {
        Recipe::Shaped { pattern, key, result } => {
            let identifier = format!("{mod_id}:{}_recipe_{index}", result.path);
            let key_map: BTreeMap<String, RecipeKeyItem> = key
                .iter()
                .map(|(symbol, ingredient)| (symbol.clone(), ingredient_key_item(ingredient)))
                .collect();
            let document = RecipeDocument::Shaped(ShapedRecipeDocument {
                format_version,
                recipe: ShapedRecipeBody {
                    description: RecipeDescription {
                        identifier: identifier.clone(),
                    },
                    tags: vec![crafting_table_tag],
                    pattern: pattern.clone(),
                    key: key_map,
                    result: RecipeResult {
                        item: result.identifier(),
                        count: result.count.max(1),
                    },
                },
            });
            Some(LoweredRecipe {
                id: identifier,
                document,
            })
        }
        Recipe::Shapeless { ingredients, result } => {
            let identifier = format!("{mod_id}:{}_recipe_{index}", result.path);
            let document = RecipeDocument::Shapeless(ShapelessRecipeDocument {
                format_version,
                recipe: ShapelessRecipeBody {
                    description: RecipeDescription {
                        identifier: identifier.clone(),
                    },
                    tags: vec![crafting_table_tag],
                    ingredients: ingredients.iter().map(ingredient_key_item).collect(),
                    result: RecipeResult {
                        item: result.identifier(),
                        count: result.count.max(1),
                    },
                },
            });
            Some(LoweredRecipe {
                id: identifier,
                document,
            })
        }
        Recipe::Unsupported { .. } => None,
    }
}

pub fn lower(
    mod_id: &str,
    items: &[Item],
    blocks: &[Block],
    recipes: &[Recipe],
    config: &TranspilerConfig,
) -> LoweredOutput {
    let block_identifiers: HashMap<&str, String> = blocks
        .iter()
        .map(|block| (block.id.as_str(), format!("{mod_id}:{}", block.id)))
        .collect();

    let items = items
        .iter()
        .map(|item| lower_item(item, mod_id, &block_identifiers, config))
        .collect();

    let blocks = blocks
        .iter()
        .map(|block| lower_block(block, mod_id, config))
        .collect();

    let mut lowered_recipes = Vec::new();
    let mut unsupported_recipes = 0usize;
    for (index, recipe) in recipes.iter().enumerate() {
        match lower_recipe(
            recipe,
            mod_id,
            index,
            config.target.crafting_table_tag.clone(),
            config.target.entity_format_version.clone(),
        ) {
            Some(lowered) => lowered_recipes.push(lowered),
            None => unsupported_recipes += 1,
        }
    }

    LoweredOutput {
        items,
        blocks,
        recipes: lowered_recipes,
        unsupported_recipes,
    }
}
