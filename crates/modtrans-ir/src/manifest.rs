//! Target-schema manifest.json (spec.md §4.9).
//!
//! Field layout mirrors the teacher's (read-side)
//! `BehaviorPackManifest`/`ManifestHeader`/`ManifestModule`/
//! `ManifestDependency` almost exactly, but as a writer producing one of
//! the two pack manifests rather than parsing an existing one — this
//! crate only ever emits target-edition packs, it never loads one back.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ManifestDependency>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: String,
    pub version: [u32; 3],
    pub min_engine_version: [u32; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub module_type: &'static str,
    pub uuid: String,
    pub version: [u32; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestDependency {
    pub uuid: String,
    pub version: [u32; 3],
}

pub const MIN_ENGINE_VERSION: [u32; 3] = [1, 20, 80];

impl Manifest {
    /// Behavior-pack manifest, spec.md §4.9: `format_version = 2`, a
    /// single `data` module, one dependency on the resource pack's
    /// header uuid.
    pub fn behavior_pack(name: &str, header_uuid: String, module_uuid: String, rp_header_uuid: String) -> Self {
        Self {
            format_version: 2,
            header: ManifestHeader {
                name: name.to_string(),
                description: format!("{name} (converted)"),
                uuid: header_uuid,
                version: [1, 0, 0],
                min_engine_version: MIN_ENGINE_VERSION,
            },
            modules: vec![ManifestModule {
                module_type: "data",
                uuid: module_uuid,
                version: [1, 0, 0],
            }],
            dependencies: vec![ManifestDependency {
                uuid: rp_header_uuid,
                version: [1, 0, 0],
            }],
        }
    }

    /// Resource-pack manifest, spec.md §4.9: one `resources` module, no
    /// declared dependency (the behavior pack depends on it, not the
    /// reverse).
    pub fn resource_pack(name: &str, header_uuid: String, module_uuid: String) -> Self {
        Self {
            format_version: 2,
            header: ManifestHeader {
                name: name.to_string(),
                description: format!("{name} (converted)"),
                uuid: header_uuid,
                version: [1, 0, 0],
                min_engine_version: MIN_ENGINE_VERSION,
            },
            modules: vec![ManifestModule {
                module_type: "resources",
                uuid: module_uuid,
                version: [1, 0, 0],
            }],
            dependencies: Vec::new(),
        }
    }
}
