//! Target-schema language tables (spec.md §4.8).

use serde::Serialize;

pub const DEFAULT_LOCALES: &[&str] = &["en_US", "pt_BR"];

/// `texts/languages.json` — just the list of locale codes shipped.
#[derive(Debug, Clone, Serialize)]
pub struct LanguagesIndex(pub Vec<String>);

impl LanguagesIndex {
    pub fn new(locales: &[&str]) -> Self {
        Self(locales.iter().map(|s| s.to_string()).collect())
    }
}

/// Title-case a snake_case id: underscores become spaces, each word is
/// capitalized. `ruby_pickaxe` -> `Ruby Pickaxe`.
pub fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `.lang` file's worth of lines for a mod's items and blocks.
pub fn lang_lines(mod_id: &str, item_ids: &[String], block_ids: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(item_ids.len() + block_ids.len());
    for id in item_ids {
        lines.push(format!("item.{mod_id}:{id}.name={}", title_case(id)));
    }
    for id in block_ids {
        lines.push(format!("tile.{mod_id}:{id}.name={}", title_case(id)));
    }
    lines
}
