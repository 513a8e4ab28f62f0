//! Neutral `Item` / `Block` entities (spec.md §3).
//!
//! These are mutated in place by the synthesizer (gap-filling defaults)
//! and are otherwise read-only once the lowerer consumes them — see
//! spec.md §3 "Lifecycles".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorSlot {
    None,
    Helmet,
    Chestplate,
    Leggings,
    Boots,
}

impl ArmorSlot {
    /// Wearable slot path, spec.md §4.7 "Armor-slot-to-wearable mapping".
    pub fn wearable_slot(self) -> Option<&'static str> {
        match self {
            ArmorSlot::None => None,
            ArmorSlot::Helmet => Some("slot.armor.head"),
            ArmorSlot::Chestplate => Some("slot.armor.chest"),
            ArmorSlot::Leggings => Some("slot.armor.legs"),
            ArmorSlot::Boots => Some("slot.armor.feet"),
        }
    }

    /// Attachable geometry suffix, spec.md §4.7 "Attachable".
    pub fn geometry_suffix(self) -> Option<&'static str> {
        match self {
            ArmorSlot::None => None,
            ArmorSlot::Helmet => Some("helmet"),
            ArmorSlot::Chestplate => Some("chestplate"),
            ArmorSlot::Leggings => Some("leggings"),
            ArmorSlot::Boots => Some("boots"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
}

impl Default for Rarity {
    fn default() -> Self {
        Rarity::Common
    }
}

impl Rarity {
    pub fn lower(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
        }
    }

    pub fn from_str_loose(s: &str) -> Rarity {
        match s.to_ascii_lowercase().as_str() {
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            _ => Rarity::Common,
        }
    }

    /// One rarity step up, used by the fire-resistance bump (§4.3).
    pub fn bump(self) -> Rarity {
        match self {
            Rarity::Common => Rarity::Uncommon,
            Rarity::Uncommon => Rarity::Rare,
            Rarity::Rare | Rarity::Epic => Rarity::Epic,
        }
    }
}

/// Neutral item entity, spec.md §3 `Item`.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: String,
    pub texture_key: String,
    pub stack_max: u8,
    pub durability: u16,
    pub attack_damage: u32,
    pub tool: bool,
    pub armor_slot: ArmorSlot,
    pub edible: bool,
    pub nutrition: u32,
    pub saturation: f32,
    pub is_block_item: bool,
    pub rarity: Rarity,
    pub ignores_damage: bool,
}

impl Item {
    /// A bare item with only an id and texture key; every other field
    /// takes the default a freshly extracted or synthesized item gets
    /// before synthesis/lowering fills in specifics.
    pub fn bare(id: impl Into<String>, texture_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            texture_key: texture_key.into(),
            stack_max: 64,
            durability: 0,
            attack_damage: 0,
            tool: false,
            armor_slot: ArmorSlot::None,
            edible: false,
            nutrition: 0,
            saturation: 0.0,
            is_block_item: false,
            rarity: Rarity::Common,
            ignores_damage: false,
        }
    }

    /// spec.md §3 invariant: durability is clamped to i16::MAX on lowering.
    pub fn clamped_durability(&self) -> u16 {
        self.durability.min(32767)
    }
}

/// Neutral block entity, spec.md §3 `Block`.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: String,
    pub texture_key: String,
    pub hardness: f32,
    pub resistance: f32,
    pub is_ore: bool,
    pub light_emission: u8,
}

impl Block {
    pub fn bare(id: impl Into<String>, texture_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            texture_key: texture_key.into(),
            hardness: 1.0,
            resistance: 1.0,
            is_ore: false,
            light_emission: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_slot_mapping() {
        assert_eq!(ArmorSlot::Helmet.wearable_slot(), Some("slot.armor.head"));
        assert_eq!(ArmorSlot::Leggings.geometry_suffix(), Some("leggings"));
        assert_eq!(ArmorSlot::None.wearable_slot(), None);
    }

    #[test]
    fn durability_clamp() {
        let mut item = Item::bare("x:ruby_sword", "ruby_sword");
        item.durability = 40000;
        assert_eq!(item.clamped_durability(), 32767);
    }

    #[test]
    fn rarity_bump_saturates_at_epic() {
        assert_eq!(Rarity::Epic.bump().lower(), "epic");
        assert_eq!(Rarity::Common.bump().lower(), "uncommon");
    }
}
