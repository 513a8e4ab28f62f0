//! Neutral intermediate representation and target-schema document types
//! shared by every transpilation stage.
//!
//! `model`, `recipe`, and `texture` hold the *neutral* forest built during
//! extraction and synthesis (spec.md §3). `item_doc`, `block_doc`,
//! `recipe_doc`, `attachable`, `manifest`, `atlas`, and `language` hold the
//! *target*-schema documents the lowering and assembly stages produce —
//! these are write-only (`Serialize`), since this crate never reads an
//! existing target-edition pack back in.

pub mod atlas;
pub mod attachable;
pub mod block_doc;
pub mod item_doc;
pub mod language;
pub mod manifest;
pub mod model;
pub mod modid;
pub mod recipe;
pub mod recipe_doc;
pub mod texture;

pub use atlas::{AtlasEntry, BlockRegistry, ItemTextureAtlas, TerrainTextureAtlas};
pub use attachable::AttachableDocument;
pub use block_doc::BehaviorBlockDocument;
pub use language::LanguagesIndex;
pub use item_doc::{BehaviorItemDocument, ItemComponentInputs, ResourceItemDocument};
pub use manifest::Manifest;
pub use model::{ArmorSlot, Block, Item, Rarity};
pub use modid::ModId;
pub use recipe::{Ingredient, ItemRef, Recipe};
pub use recipe_doc::{
    RecipeDescription, RecipeDocument, RecipeKeyItem, ShapedRecipeBody, ShapedRecipeDocument,
    ShapelessRecipeBody, ShapelessRecipeDocument, RecipeResult,
};
pub use texture::{TextureAsset, TextureKind};
