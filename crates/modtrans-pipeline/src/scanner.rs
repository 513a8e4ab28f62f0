//! Bytecode Scanner (spec.md §4.3).
//!
//! Matches a fixed set of byte-level patterns against a classfile's
//! constant-pool strings and method bodies — no real bytecode
//! disassembly, exactly as spec.md §4.3/§9 specifies the source behaves.
//! Regex patterns are compiled once via `OnceLock`, the same
//! compile-once-reuse shape `gw2-arbitrage` gets from `lazy_static!` for
//! its lookup tables; `regex` itself is the dependency `valence` and
//! `rust-game-template`'s `util` crate already carry for pattern work.

use std::sync::OnceLock;

use modtrans_ir::{Item, Rarity};
use regex::Regex;

struct Patterns {
    register: Regex,
    stacks_to: Regex,
    durability: Regex,
    fire_resistant: Regex,
    tool_ctor: Regex,
    rarity: Regex,
    nutrition: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        register: Regex::new(r#"register\(\s*"([A-Za-z0-9_]+)"\s*\)"#).unwrap(),
        stacks_to: Regex::new(r"stacksTo\(\s*(\d+)\s*\)").unwrap(),
        durability: Regex::new(r"durability\(\s*(\d+)\s*\)").unwrap(),
        fire_resistant: Regex::new(r"fireResistant\(\s*\)").unwrap(),
        tool_ctor: Regex::new(r"new\s+(?:Sword|Axe)Item\(([^)]*)\)").unwrap(),
        rarity: Regex::new(r"rarity\(\s*Rarity\.([A-Za-z]+)\s*\)").unwrap(),
        nutrition: Regex::new(r"nutrition\(\s*(\d+)\s*\)\s*\.\s*saturationMod\(\s*([0-9.]+)\s*\)")
            .unwrap(),
    })
}

/// Scanner output before the texture key (not known until the asset
/// indexer runs) is merged in.
#[derive(Debug, Clone, Default)]
pub struct ScannedItem {
    pub id: Option<String>,
    pub stack_max: Option<u8>,
    pub durability: Option<u16>,
    pub tool: bool,
    pub attack_damage: Option<u32>,
    pub rarity: Option<Rarity>,
    pub fire_resistant: bool,
    pub edible: bool,
    pub nutrition: Option<u32>,
    pub saturation: Option<f32>,
}

impl ScannedItem {
    /// Merge onto a bare item built from `id`/`texture_key`; an
    /// attribute absent from the bytecode leaves the bare default
    /// (spec.md §4.3: "The scanner never fails on unknown content").
    pub fn into_item(self, texture_key: &str) -> Item {
        let id = self.id.unwrap_or_else(|| texture_key.to_string());
        let mut item = Item::bare(id, texture_key);
        if let Some(stack_max) = self.stack_max {
            item.stack_max = stack_max;
        }
        if let Some(durability) = self.durability {
            item.durability = durability;
        }
        item.tool = self.tool;
        if let Some(attack_damage) = self.attack_damage {
            item.attack_damage = attack_damage;
        }
        if let Some(rarity) = self.rarity {
            item.rarity = if self.fire_resistant { rarity.bump() } else { rarity };
        } else if self.fire_resistant {
            item.rarity = Rarity::default().bump();
        }
        item.ignores_damage = self.fire_resistant;
        item.edible = self.edible;
        if let Some(nutrition) = self.nutrition {
            item.nutrition = nutrition;
        }
        if let Some(saturation) = self.saturation {
            item.saturation = saturation;
        }
        item
    }
}

/// Split `SomeCamelCaseClass` into `some_camel_case_class` — the
/// identifier fallback used when no `register(...)` literal is found
/// (spec.md §4.3).
pub fn camel_to_snake(class_name: &str) -> String {
    let mut out = String::with_capacity(class_name.len() + 4);
    for (i, ch) in class_name.chars().enumerate() {
        if ch.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Scan one classfile's raw bytes, given the class's simple name (the
/// file stem of its path) for the identifier fallback.
pub fn scan(class_name: &str, bytes: &[u8]) -> ScannedItem {
    let text = String::from_utf8_lossy(bytes);
    let patterns = patterns();

    let mut item = ScannedItem::default();

    item.id = patterns
        .register
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .or_else(|| Some(camel_to_snake(class_name)));

    item.stack_max = patterns
        .stacks_to
        .captures(&text)
        .and_then(|caps| caps[1].parse().ok());

    item.durability = patterns
        .durability
        .captures(&text)
        .and_then(|caps| caps[1].parse().ok());

    item.fire_resistant = patterns.fire_resistant.is_match(&text);

    if let Some(caps) = patterns.tool_ctor.captures(&text) {
        item.tool = true;
        item.attack_damage = first_int(&caps[1]);
    }

    item.rarity = patterns
        .rarity
        .captures(&text)
        .map(|caps| Rarity::from_str_loose(&caps[1]));

    if let Some(caps) = patterns.nutrition.captures(&text) {
        item.edible = true;
        item.nutrition = caps[1].parse().ok();
        item.saturation = caps[2].parse().ok();
    }

    item
}

/// The first integer literal found in a constructor argument list, used
/// for the `new SwordItem(..., N, ...)` / `new AxeItem(..., N, ...)`
/// heuristic (spec.md §4.3 gives the pattern's shape, not its exact
/// argument position — the source regex-scans raw bytes and is itself
/// only a best-effort heuristic, see spec.md §9).
fn first_int(args: &str) -> Option<u32> {
    static INT: OnceLock<Regex> = OnceLock::new();
    let int_re = INT.get_or_init(|| Regex::new(r"-?\d+").unwrap());
    int_re.find(args).and_then(|m| m.as_str().parse().ok())
}
