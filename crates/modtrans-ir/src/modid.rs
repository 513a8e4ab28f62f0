//! Mod namespace identifier (spec.md §3 `ModId`).

use std::fmt;

/// Lowercase ASCII alphanumeric token, `[a-z0-9]+`, length >= 1.
///
/// Constructed only by [`crate::modid`]-deriving code (see
/// `modtrans-pipeline::modid::derive`); this type enforces the invariant
/// at the boundary rather than trusting callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModId(String);

impl ModId {
    /// Wrap an already-normalized string. Returns `None` if it does not
    /// match `[a-z0-9]+`.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
