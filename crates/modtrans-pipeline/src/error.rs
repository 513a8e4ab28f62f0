//! Transpilation error taxonomy (spec.md §7).
//!
//! Styled after `mc-rs-nbt::error::NbtError` — one `thiserror` variant per
//! fatal category. `NoContent` and `EntryCorrupt` from spec.md §7 are
//! deliberately *not* variants here: the former is a successful
//! `TranspileOutcome` with zero counters, the latter is only ever a
//! `tracing::warn!` plus an `errors` counter increment, never a
//! propagated error (spec.md §7 "Propagation policy").

use thiserror::Error;

/// The stage tag surfaced alongside a fatal error (spec.md §6, §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Index,
    Synth,
    Lower,
    Assemble,
    Pack,
}

impl Stage {
    pub fn tag(self) -> &'static str {
        match self {
            Stage::Read => "read",
            Stage::Index => "index",
            Stage::Synth => "synth",
            Stage::Lower => "lower",
            Stage::Assemble => "assemble",
            Stage::Pack => "pack",
        }
    }
}

#[derive(Debug, Error)]
pub enum TranspileError {
    #[error("archive is malformed: {0}")]
    ArchiveMalformed(String),

    #[error("manifest identifier collision could not be resolved after regeneration")]
    IdentifierCollision,

    #[error("output I/O error: {0}")]
    OutputIoError(#[from] std::io::Error),

    #[error("archive packing error: {0}")]
    PackError(#[from] zip::result::ZipError),
}

impl TranspileError {
    /// The stage a given error variant is attributed to, per spec.md §7's
    /// `read | index | synth | lower | assemble | pack` tags.
    pub fn stage(&self) -> Stage {
        match self {
            TranspileError::ArchiveMalformed(_) => Stage::Read,
            TranspileError::IdentifierCollision => Stage::Assemble,
            TranspileError::OutputIoError(_) => Stage::Pack,
            TranspileError::PackError(_) => Stage::Pack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_tags_match_spec_vocabulary() {
        assert_eq!(Stage::Read.tag(), "read");
        assert_eq!(Stage::Pack.tag(), "pack");
        assert_eq!(TranspileError::IdentifierCollision.stage(), Stage::Assemble);
    }
}
