//! Transpiler configuration, styled after
//! `mc-rs-server::config::ServerConfig` (TOML + `serde::Deserialize`,
//! `Default` per optional section) — see SPEC_FULL.md "Configuration".

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranspilerConfig {
    pub target: TargetSection,
    pub synthesis: SynthesisSection,
    pub languages: LanguagesSection,
}

impl Default for TranspilerConfig {
    fn default() -> Self {
        Self {
            target: TargetSection::default(),
            synthesis: SynthesisSection::default(),
            languages: LanguagesSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetSection {
    pub entity_format_version: String,
    pub attachable_format_version: String,
    pub crafting_table_tag: String,
}

impl Default for TargetSection {
    fn default() -> Self {
        Self {
            entity_format_version: "1.20.80".to_string(),
            attachable_format_version: "1.10.0".to_string(),
            crafting_table_tag: "crafting_table".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthesisSection {
    pub default_tool_durability: u16,
    pub default_armor_durability: u16,
    pub ore_hardness: f32,
    pub ore_resistance: f32,
}

impl Default for SynthesisSection {
    fn default() -> Self {
        Self {
            default_tool_durability: 250,
            default_armor_durability: 250,
            ore_hardness: 3.0,
            ore_resistance: 6.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguagesSection {
    pub locales: Vec<String>,
}

impl Default for LanguagesSection {
    fn default() -> Self {
        Self {
            locales: vec!["en_US".to_string(), "pt_BR".to_string()],
        }
    }
}

impl TranspilerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_constants() {
        let config = TranspilerConfig::default();
        assert_eq!(config.synthesis.default_tool_durability, 250);
        assert_eq!(config.synthesis.ore_hardness, 3.0);
        assert_eq!(config.synthesis.ore_resistance, 6.0);
        assert_eq!(config.languages.locales, vec!["en_US", "pt_BR"]);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
            [target]
            crafting_table_tag = "custom_bench"
        "#;
        let config: TranspilerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.target.crafting_table_tag, "custom_bench");
        assert_eq!(config.target.entity_format_version, "1.20.80");
        assert_eq!(config.synthesis.default_tool_durability, 250);
    }
}
