//! `TextureAsset` (spec.md §3, §4.1, §4.5).

/// The four texture roles the archive reader can classify a PNG entry
/// into. The asset indexer (§4.5) further distinguishes block/item
/// membership; armor layers are split later by filename suffix during
/// lowering (§4.7 "Attachable").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    ItemIcon,
    BlockFace,
    ArmorLayer1,
    ArmorLayer2,
}

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// A single classified texture entry read from the source archive.
///
/// `key` is the file stem (no directory, no extension) — the join point
/// between the asset indexer, the item/block it backs, and the atlas
/// entry that must reference it (spec.md invariant 4/5).
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pub key: String,
    pub bytes: Vec<u8>,
    pub kind: TextureKind,
}

impl TextureAsset {
    /// `None` if `bytes` does not start with the PNG magic number — the
    /// archive reader drops such entries as `EntryCorrupt` rather than
    /// constructing an asset that would violate the data-model invariant.
    pub fn new(key: String, bytes: Vec<u8>, kind: TextureKind) -> Option<Self> {
        if bytes.starts_with(&PNG_MAGIC) {
            Some(Self { key, bytes, kind })
        } else {
            None
        }
    }
}
