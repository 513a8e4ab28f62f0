//! Neutral recipe IR (spec.md §3 `Recipe`, `Ingredient`, `ItemRef`).

/// `(namespace, path, count)`, spec.md §3 `ItemRef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub namespace: String,
    pub path: String,
    pub count: u8,
}

impl ItemRef {
    /// Namespace normalization (spec.md §3): `minecraft:*` preserved,
    /// any other namespace rewritten to `{mod_id}:{path}`, bare paths get
    /// `{mod_id}:` prefixed.
    pub fn normalize(raw: &str, mod_id: &str, count: u8) -> Self {
        let (namespace, path) = match raw.split_once(':') {
            Some(("minecraft", path)) => ("minecraft".to_string(), path.to_string()),
            Some((_, path)) => (mod_id.to_string(), path.to_string()),
            None => (mod_id.to_string(), raw.to_string()),
        };
        Self {
            namespace,
            path,
            count,
        }
    }

    pub fn air() -> Self {
        Self {
            namespace: "minecraft".to_string(),
            path: "air".to_string(),
            count: 1,
        }
    }

    pub fn identifier(&self) -> String {
        format!("{}:{}", self.namespace, self.path)
    }
}

/// spec.md §3 `Ingredient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingredient {
    Item(ItemRef),
    Tag(String),
}

impl Ingredient {
    /// Lower a tag to an `Item` by stripping its path and prefixing
    /// `minecraft:` (spec.md §3: "the target edition has no runtime tag
    /// resolution in recipes"). Item ingredients pass through unchanged.
    pub fn lower(&self) -> ItemRef {
        match self {
            Ingredient::Item(item_ref) => item_ref.clone(),
            Ingredient::Tag(name) => {
                let last_segment = name.rsplit(['/', ':']).next().unwrap_or(name);
                ItemRef {
                    namespace: "minecraft".to_string(),
                    path: last_segment.to_string(),
                    count: 1,
                }
            }
        }
    }
}

/// spec.md §3 `Recipe` sum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipe {
    Shaped {
        pattern: Vec<String>,
        key: Vec<(String, Ingredient)>,
        result: ItemRef,
    },
    Shapeless {
        ingredients: Vec<Ingredient>,
        result: ItemRef,
    },
    Unsupported {
        reason: &'static str,
    },
}
