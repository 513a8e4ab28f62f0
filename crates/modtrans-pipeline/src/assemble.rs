//! Addon Assembler (spec.md §4.9).
//!
//! Writes every lowered document straight into a `.mcaddon` zip container
//! at `output_directory_path/{mod_id}.mcaddon` — no intermediate directory
//! tree is written to disk, the way `mrpack.rs` streams a modpack export
//! directly through a `zip::ZipWriter`.

use std::io::Write;
use std::path::{Path, PathBuf};

use modtrans_ir::Manifest;
use uuid::Uuid;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::assets::AssetIndex;
use crate::atlas_builder::AtlasBundle;
use crate::error::TranspileError;
use crate::lower::LoweredOutput;

/// The four manifest uuids, regenerated once as a whole set on collision
/// (spec.md §8 invariant 1: "all four identifiers are pairwise distinct").
struct ManifestUuids {
    bp_header: String,
    bp_module: String,
    rp_header: String,
    rp_module: String,
}

impl ManifestUuids {
    fn generate() -> Self {
        Self {
            bp_header: Uuid::new_v4().to_string(),
            bp_module: Uuid::new_v4().to_string(),
            rp_header: Uuid::new_v4().to_string(),
            rp_module: Uuid::new_v4().to_string(),
        }
    }

    fn all_distinct(&self) -> bool {
        let ids = [&self.bp_header, &self.bp_module, &self.rp_header, &self.rp_module];
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                if ids[i] == ids[j] {
                    return false;
                }
            }
        }
        true
    }
}

fn resolve_uuids() -> Result<ManifestUuids, TranspileError> {
    let first = ManifestUuids::generate();
    if first.all_distinct() {
        return Ok(first);
    }
    let second = ManifestUuids::generate();
    if second.all_distinct() {
        return Ok(second);
    }
    Err(TranspileError::IdentifierCollision)
}

fn write_json<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    path: &str,
    value: &impl serde::Serialize,
) -> Result<(), TranspileError> {
    zip.start_file(path, FileOptions::default())?;
    let bytes = serde_json::to_vec_pretty(value).expect("document types are always serializable");
    zip.write_all(&bytes)?;
    Ok(())
}

fn write_bytes<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    path: &str,
    bytes: &[u8],
) -> Result<(), TranspileError> {
    zip.start_file(path, FileOptions::default())?;
    zip.write_all(bytes)?;
    Ok(())
}

pub fn assemble(
    output_dir: &Path,
    mod_id: &str,
    lowered: &LoweredOutput,
    atlases: &AtlasBundle,
    textures: &AssetIndex,
) -> Result<PathBuf, TranspileError> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{mod_id}.mcaddon"));
    let file = std::fs::File::create(&output_path)?;
    let mut zip = ZipWriter::new(file);

    let uuids = resolve_uuids()?;
    let bp_manifest = Manifest::behavior_pack(
        mod_id,
        uuids.bp_header.clone(),
        uuids.bp_module.clone(),
        uuids.rp_header.clone(),
    );
    let rp_manifest = Manifest::resource_pack(mod_id, uuids.rp_header.clone(), uuids.rp_module.clone());

    write_json(&mut zip, "behavior_pack/manifest.json", &bp_manifest)?;
    write_json(&mut zip, "resource_pack/manifest.json", &rp_manifest)?;

    // Pack icon: one PNG duplicated into both packs (spec.md §4.8). The
    // source map has no inherent order, so "first encountered" is taken
    // as the lexicographically first texture key — see DESIGN.md.
    if let Some((_, asset)) = textures.item_textures.iter().min_by_key(|(key, _)| key.as_str()) {
        write_bytes(&mut zip, "behavior_pack/pack_icon.png", &asset.bytes)?;
        write_bytes(&mut zip, "resource_pack/pack_icon.png", &asset.bytes)?;
    }

    for item in &lowered.items {
        write_json(
            &mut zip,
            &format!("behavior_pack/items/{}.json", item.id),
            &item.behavior,
        )?;
        write_json(
            &mut zip,
            &format!("resource_pack/items/{}.json", item.id),
            &item.resource,
        )?;
        if let Some(attachable) = &item.attachable {
            write_json(
                &mut zip,
                &format!("resource_pack/attachables/{}.json", item.id),
                attachable,
            )?;
        }
    }

    for block in &lowered.blocks {
        write_json(
            &mut zip,
            &format!("behavior_pack/blocks/{}.json", block.id),
            &block.document,
        )?;
    }
    write_json(&mut zip, "resource_pack/blocks.json", &atlases.block_registry)?;

    for recipe in &lowered.recipes {
        write_json(
            &mut zip,
            &format!("behavior_pack/recipes/{}.json", recipe.id.replace(':', "_")),
            &recipe.document,
        )?;
    }

    write_json(
        &mut zip,
        "resource_pack/textures/item_texture.json",
        &atlases.item_textures,
    )?;
    write_json(
        &mut zip,
        "resource_pack/textures/terrain_texture.json",
        &atlases.terrain_textures,
    )?;

    for asset in textures.item_textures.values() {
        write_bytes(
            &mut zip,
            &format!("resource_pack/textures/items/{}.png", asset.key),
            &asset.bytes,
        )?;
    }
    for asset in textures.block_textures.values() {
        write_bytes(
            &mut zip,
            &format!("resource_pack/textures/blocks/{}.png", asset.key),
            &asset.bytes,
        )?;
    }
    for asset in textures.armor_textures.values() {
        write_bytes(
            &mut zip,
            &format!("resource_pack/textures/models/armor/{}.png", asset.key),
            &asset.bytes,
        )?;
    }

    write_json(&mut zip, "resource_pack/texts/languages.json", &atlases.languages)?;
    let lang_body = atlases.lang_lines.join("\n");
    for locale in &atlases.languages.0 {
        write_bytes(
            &mut zip,
            &format!("resource_pack/texts/{locale}.lang"),
            lang_body.as_bytes(),
        )?;
    }

    zip.finish()?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_uuid_set_is_pairwise_distinct() {
        let uuids = resolve_uuids().unwrap();
        assert!(uuids.all_distinct());
    }

    #[test]
    fn assembles_minimal_addon_without_error() {
        let lowered = LoweredOutput::default();
        let textures = AssetIndex::default();
        let (atlases, _) = crate::atlas_builder::build("x", &[], &[], &["en_US".to_string()], &textures);
        let dir = std::env::temp_dir().join("modtrans_assemble_test_minimal");
        let output = assemble(&dir, "x", &lowered, &atlases, &textures).unwrap();
        assert!(output.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn pack_icon_is_duplicated_into_both_packs() {
        use modtrans_ir::{Item, TextureKind};

        let lowered = LoweredOutput::default();
        let mut textures = AssetIndex::default();
        textures.item_textures.insert(
            "copper_ingot".to_string(),
            modtrans_ir::TextureAsset::new("copper_ingot".to_string(), vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], TextureKind::ItemIcon)
                .unwrap(),
        );
        let (atlases, _) = crate::atlas_builder::build(
            "x",
            &[Item::bare("copper_ingot", "copper_ingot")],
            &[],
            &["en_US".to_string()],
            &textures,
        );
        let dir = std::env::temp_dir().join("modtrans_assemble_test_icon");
        let output = assemble(&dir, "x", &lowered, &atlases, &textures).unwrap();

        let file = std::fs::File::open(&output).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        assert!(archive.by_name("behavior_pack/pack_icon.png").is_ok());
        assert!(archive.by_name("resource_pack/pack_icon.png").is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
