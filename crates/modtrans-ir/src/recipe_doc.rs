//! Target-schema recipe documents (spec.md §4.7 "Recipe").
//!
//! Field layout mirrors the teacher's (read-side) `recipe.rs`
//! (`minecraft:recipe_shaped` / `minecraft:recipe_shapeless`,
//! `description.identifier`, `pattern`/`key` vs. `ingredients`) but as a
//! writer, and split into two document types rather than one struct with
//! two `Option` fields, since a lowered recipe is always exactly one kind.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecipeKeyItem {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeResult {
    pub item: String,
    pub count: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapedRecipeDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:recipe_shaped")]
    pub recipe: ShapedRecipeBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapedRecipeBody {
    pub description: RecipeDescription,
    pub tags: Vec<String>,
    pub pattern: Vec<String>,
    pub key: BTreeMap<String, RecipeKeyItem>,
    pub result: RecipeResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapelessRecipeDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:recipe_shapeless")]
    pub recipe: ShapelessRecipeBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapelessRecipeBody {
    pub description: RecipeDescription,
    pub tags: Vec<String>,
    pub ingredients: Vec<RecipeKeyItem>,
    pub result: RecipeResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeDescription {
    pub identifier: String,
}

/// Either recipe kind, as written to a single `.json` file under
/// `behavior_pack/recipes/`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecipeDocument {
    Shaped(ShapedRecipeDocument),
    Shapeless(ShapelessRecipeDocument),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shaped_document_serializes_with_recipe_shaped_key() {
        let doc = ShapedRecipeDocument {
            format_version: "1.20.80".to_string(),
            recipe: ShapedRecipeBody {
                description: RecipeDescription {
                    identifier: "x:ruby_pickaxe".into(),
                },
                tags: vec!["crafting_table".to_string()],
                pattern: vec!["AAA".into(), " B ".into(), " B ".into()],
                key: BTreeMap::from([(
                    "A".into(),
                    RecipeKeyItem {
                        item: "x:ruby".into(),
                        count: None,
                    },
                )]),
                result: RecipeResult {
                    item: "x:ruby_pickaxe".into(),
                    count: 1,
                },
            },
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("minecraft:recipe_shaped").is_some());
        assert_eq!(value["minecraft:recipe_shaped"]["pattern"][0], "AAA");
    }
}
