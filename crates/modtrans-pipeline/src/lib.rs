//! The single-shot transpile pipeline: archive in, `.mcaddon` out.
//!
//! Stage order is fixed by spec.md §2 and enforced structurally by
//! [`controller::transpile`] — nothing here runs concurrently with
//! anything else (spec.md §5).

pub mod archive;
pub mod assemble;
pub mod assets;
pub mod atlas_builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod lower;
pub mod modid;
pub mod recipe_parser;
pub mod scanner;
pub mod synth;

pub use config::TranspilerConfig;
pub use controller::{transpile, Stats, TranspileOutcome};
pub use error::{Stage, TranspileError};
