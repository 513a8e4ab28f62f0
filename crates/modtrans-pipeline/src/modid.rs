//! Mod-ID Deriver (spec.md §4.2).

use modtrans_ir::ModId;

const LOADER_SUFFIXES: &[&str] = &["forge", "fabric", "neoforge"];

/// Strips loader suffixes, version fragments, and all non-alphanumerics
/// from a filename, lowercases the rest, and falls back to `mod` if the
/// result is empty. Deterministic, locale-independent, idempotent.
pub fn derive(filename: &str) -> ModId {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(filename);

    let mut normalized = String::with_capacity(stem.len());
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() {
            normalized.push(ch.to_ascii_lowercase());
        } else {
            normalized.push(' ');
        }
    }

    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|token| !is_loader_suffix(token) && !is_version_fragment(token))
        .collect();

    let joined: String = tokens.concat();

    ModId::new(joined).unwrap_or_else(|| ModId::new("mod").expect("'mod' is a valid ModId"))
}

fn is_loader_suffix(token: &str) -> bool {
    LOADER_SUFFIXES.contains(&token)
}

/// A version fragment is a token that starts with `mc` followed by
/// digits/dots (`mc1`, `mc1201`...) or is made entirely of digits and at
/// most one embedded separator pattern already stripped by the caller —
/// in practice, after non-alphanumeric stripping, version fragments
/// collapse to runs of digits (`1`, `20`, `1201`) or `mc`-prefixed runs.
fn is_version_fragment(token: &str) -> bool {
    if token.starts_with("mc") && token[2..].chars().all(|c| c.is_ascii_digit()) && token.len() > 2
    {
        return true;
    }
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
