//! Archive Reader (spec.md §4.1).
//!
//! Opens the input as a ZIP container and classifies each entry by path.
//! Grounded in `zip::ZipArchive` usage from the modpack-import code in
//! `other_examples/.../atlas__apps-cli-src-commands-pack-mrpack.rs`.

use std::io::Read;
use std::path::Path;

use tracing::warn;
use zip::ZipArchive;

use crate::error::TranspileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryClass {
    BlockTexture,
    ItemTexture,
    ArmorTexture,
    Recipe,
    ItemClass,
}

#[derive(Debug, Clone)]
pub struct ClassifiedEntry {
    pub path: String,
    pub class: EntryClass,
    pub bytes: Vec<u8>,
}

/// Classify a path per spec.md §4.1's first-match-wins glob rules.
/// Returns `None` for anything the pipeline ignores.
pub fn classify(path: &str) -> Option<EntryClass> {
    let lower = path.to_ascii_lowercase();
    if lower.contains("/textures/block/") && lower.ends_with(".png") {
        Some(EntryClass::BlockTexture)
    } else if lower.contains("/textures/item/") && lower.ends_with(".png") {
        Some(EntryClass::ItemTexture)
    } else if lower.contains("/textures/models/armor/") && lower.ends_with(".png") {
        Some(EntryClass::ArmorTexture)
    } else if lower.contains("/recipes/") && lower.ends_with(".json") {
        Some(EntryClass::Recipe)
    } else if lower.contains("/item/") && lower.ends_with(".class") {
        Some(EntryClass::ItemClass)
    } else {
        None
    }
}

/// Open the archive and read every classified entry into memory.
///
/// Individual unreadable entries are skipped with at most one `warn!`
/// each (spec.md §4.1) and counted via the returned `skipped` total; only
/// a container that cannot be opened at all is fatal.
pub fn read_archive(path: &Path) -> Result<(Vec<ClassifiedEntry>, usize), TranspileError> {
    let file = std::fs::File::open(path)
        .map_err(|e| TranspileError::ArchiveMalformed(format!("cannot open {}: {e}", path.display())))?;
    let mut zip = ZipArchive::new(file)
        .map_err(|e| TranspileError::ArchiveMalformed(format!("not a valid zip: {e}")))?;

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for index in 0..zip.len() {
        let mut entry = match zip.by_index(index) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable archive entry #{index}: {e}");
                skipped += 1;
                continue;
            }
        };

        if entry.is_dir() {
            continue;
        }

        let name = entry.name().replace('\\', "/");
        let Some(class) = classify(&name) else {
            continue;
        };

        let mut bytes = Vec::new();
        if let Err(e) = entry.read_to_end(&mut bytes) {
            warn!("skipping unreadable archive entry {name}: {e}");
            skipped += 1;
            continue;
        }

        entries.push(ClassifiedEntry {
            path: name,
            class,
            bytes,
        });
    }

    Ok((entries, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_first_match_wins() {
        assert_eq!(
            classify("assets/x/textures/item/copper_ingot.png"),
            Some(EntryClass::ItemTexture)
        );
        assert_eq!(
            classify("assets/x/textures/block/ruby_ore.png"),
            Some(EntryClass::BlockTexture)
        );
        assert_eq!(
            classify("assets/x/textures/models/armor/ruby_layer_1.png"),
            Some(EntryClass::ArmorTexture)
        );
        assert_eq!(classify("data/x/recipes/ruby_pickaxe.json"), Some(EntryClass::Recipe));
        assert_eq!(
            classify("com/x/item/RubySwordItem.class"),
            Some(EntryClass::ItemClass)
        );
        assert_eq!(classify("META-INF/mods.toml"), None);
    }

    #[test]
    fn malformed_archive_is_fatal() {
        let dir = std::env::temp_dir().join("modtrans_archive_test_malformed");
        std::fs::write(&dir, b"not a zip file").unwrap();
        let result = read_archive(&dir);
        assert!(result.is_err());
        let _ = std::fs::remove_file(&dir);
    }
}
