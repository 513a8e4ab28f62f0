//! Recipe Parser (spec.md §4.4).
//!
//! Operates on untyped `serde_json::Value` rather than a `Deserialize`
//! struct, the way `mc-rs-behavior-pack::block::BlockFile::extract` reads
//! its `components` bag loosely — the input shapes here are genuinely a
//! union of incompatible schemas (shaped / shapeless / the `primary`+
//! `secondary` custom variant), which a single typed struct cannot model
//! without becoming a bag of `Option`s anyway.

use modtrans_ir::{Ingredient, ItemRef, Recipe};
use serde_json::Value;

/// Parse one recipe JSON document into the neutral `Recipe` IR.
/// `mod_id` is needed to normalize bare/foreign-namespace item refs.
pub fn parse(value: &Value, mod_id: &str) -> Recipe {
    if let Some(pattern) = value.get("pattern").and_then(Value::as_array) {
        let rows: Vec<String> = pattern
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();

        if rows.len() > 3 || rows.iter().any(|row| row.chars().count() > 3) {
            return Recipe::Unsupported {
                reason: "extreme_crafting",
            };
        }

        let key: Vec<(String, Ingredient)> = value
            .get("key")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(symbol, ingredient)| {
                        parse_ingredient(ingredient, mod_id).map(|ing| (symbol.clone(), ing))
                    })
                    .collect()
            })
            .unwrap_or_default();

        return Recipe::Shaped {
            pattern: rows,
            key,
            result: parse_result(value.get("result"), mod_id),
        };
    }

    if let Some(ingredients) = value.get("ingredients").and_then(Value::as_array) {
        let ingredients = ingredients
            .iter()
            .filter_map(|v| parse_ingredient(v, mod_id))
            .collect();
        return Recipe::Shapeless {
            ingredients,
            result: parse_result(value.get("result"), mod_id),
        };
    }

    if value.get("primary").is_some() || value.get("secondary").is_some() {
        let mut ingredients = Vec::new();
        if let Some(primary) = value.get("primary").and_then(|v| parse_ingredient(v, mod_id)) {
            ingredients.push(primary);
        }
        if let Some(secondary) = value.get("secondary").and_then(|v| parse_ingredient(v, mod_id)) {
            ingredients.push(secondary);
        }
        const KNOWN: &[&str] = &["primary", "secondary", "result", "type"];
        if let Some(obj) = value.as_object() {
            for (key, val) in obj {
                if KNOWN.contains(&key.as_str()) {
                    continue;
                }
                if let Some(ingredient) = parse_ingredient(val, mod_id) {
                    ingredients.push(ingredient);
                }
            }
        }
        return Recipe::Shapeless {
            ingredients,
            result: parse_result(value.get("result"), mod_id),
        };
    }

    Recipe::Unsupported {
        reason: "unknown_shape",
    }
}

/// `{"item": ..}`, `{"tag": ..}`, or a bare string (treated as an item
/// reference).
fn parse_ingredient(value: &Value, mod_id: &str) -> Option<Ingredient> {
    match value {
        Value::String(raw) => Some(Ingredient::Item(ItemRef::normalize(raw, mod_id, 1))),
        Value::Object(map) => {
            if let Some(tag) = map.get("tag").and_then(Value::as_str) {
                Some(Ingredient::Tag(tag.to_string()))
            } else if let Some(item) = map.get("item").and_then(Value::as_str) {
                Some(Ingredient::Item(ItemRef::normalize(item, mod_id, 1)))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// `{"item":…,"count":…}`, `{"id":…,"count":…}`, or a bare string.
/// Count defaults to 1; a missing/unrecognized result yields
/// `minecraft:air`, count 1 (spec.md §4.4: "never drop the recipe just
/// for a missing result").
fn parse_result(value: Option<&Value>, mod_id: &str) -> ItemRef {
    let Some(value) = value else {
        return ItemRef::air();
    };

    match value {
        Value::String(raw) => ItemRef::normalize(raw, mod_id, 1),
        Value::Object(map) => {
            let count = map.get("count").and_then(Value::as_u64).unwrap_or(1) as u8;
            let raw = map
                .get("item")
                .or_else(|| map.get("id"))
                .and_then(Value::as_str);
            match raw {
                Some(raw) => ItemRef::normalize(raw, mod_id, count.max(1)),
                None => ItemRef::air(),
            }
        }
        _ => ItemRef::air(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn three_by_three_pattern_is_shaped() {
        let value = json!({
            "pattern": ["AAA", "AAA", "AAA"],
            "key": { "A": { "item": "x:ruby" } },
            "result": { "item": "x:ruby_block", "count": 1 }
        });
        let recipe = parse(&value, "x");
        assert!(matches!(recipe, Recipe::Shaped { .. }));
    }

    #[test]
    fn four_row_pattern_is_unsupported() {
        let value = json!({
            "pattern": ["AAAA", "AAAA", "AAAA", "AAAA"],
            "key": {},
            "result": { "item": "x:nope" }
        });
        let recipe = parse(&value, "x");
        assert!(matches!(
            recipe,
            Recipe::Unsupported {
                reason: "extreme_crafting"
            }
        ));
    }

    #[test]
    fn ingredients_field_is_shapeless() {
        let value = json!({
            "ingredients": [{ "item": "x:ruby_block" }],
            "result": { "item": "x:ruby", "count": 9 }
        });
        let recipe = parse(&value, "x");
        match recipe {
            Recipe::Shapeless { ingredients, result } => {
                assert_eq!(ingredients.len(), 1);
                assert_eq!(result.count, 9);
            }
            _ => panic!("expected Shapeless"),
        }
    }

    #[test]
    fn primary_secondary_custom_variant_is_shapeless() {
        let value = json!({
            "primary": { "item": "x:ruby" },
            "secondary": { "item": "x:stick" },
            "result": { "item": "x:ruby_sword" }
        });
        let recipe = parse(&value, "x");
        match recipe {
            Recipe::Shapeless { ingredients, .. } => assert_eq!(ingredients.len(), 2),
            _ => panic!("expected Shapeless"),
        }
    }

    #[test]
    fn unrecognized_shape_is_unsupported() {
        let value = json!({ "weird_field": true });
        let recipe = parse(&value, "x");
        assert!(matches!(
            recipe,
            Recipe::Unsupported {
                reason: "unknown_shape"
            }
        ));
    }

    #[test]
    fn missing_result_yields_air() {
        let value = json!({ "ingredients": [{ "item": "x:ruby" }] });
        let recipe = parse(&value, "x");
        match recipe {
            Recipe::Shapeless { result, .. } => assert_eq!(result.identifier(), "minecraft:air"),
            _ => panic!("expected Shapeless"),
        }
    }

    #[test]
    fn tag_ingredient_normalizes_to_minecraft_on_lowering() {
        let value = json!({
            "pattern": ["A"],
            "key": { "A": { "tag": "forge:ingots/copper" } },
            "result": { "item": "x:thing" }
        });
        let recipe = parse(&value, "x");
        match recipe {
            Recipe::Shaped { key, .. } => {
                let (_, ingredient) = &key[0];
                assert_eq!(ingredient.lower().identifier(), "minecraft:copper");
            }
            _ => panic!("expected Shaped"),
        }
    }
}
