//! End-to-end invariant checks over small synthetic archives (spec.md §8).

use std::io::Write as _;
use std::path::{Path, PathBuf};

use modtrans_pipeline::TranspilerConfig;
use zip::write::FileOptions;
use zip::ZipWriter;

fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(b"fake-png-body");
    bytes
}

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("modtrans_pipeline_test_{name}"))
}

/// Builds a small jar covering: one scanned tool item (S1-ish), one ore
/// block without a scanned item, one bare item texture, one armor
/// texture, and one shaped recipe.
fn write_sample_jar(path: &Path) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default();

    let png = png_bytes();

    zip.start_file("assets/x/textures/item/ruby_pickaxe.png", options).unwrap();
    zip.write_all(&png).unwrap();

    zip.start_file("assets/x/textures/item/copper_ingot.png", options).unwrap();
    zip.write_all(&png).unwrap();

    zip.start_file("assets/x/textures/block/ruby_ore.png", options).unwrap();
    zip.write_all(&png).unwrap();

    zip.start_file("assets/x/textures/models/armor/ruby_layer_1.png", options)
        .unwrap();
    zip.write_all(&png).unwrap();

    zip.start_file("com/x/item/RubyPickaxeItem.class", options).unwrap();
    zip.write_all(br#"register("ruby_pickaxe"); new PickaxeItem(RubyTier.INSTANCE, 4, props)"#)
        .unwrap();

    zip.start_file("com/x/item/RubyHelmetItem.class", options).unwrap();
    zip.write_all(br#"register("ruby_helmet");"#).unwrap();

    zip.start_file("data/x/recipes/ruby_pickaxe.json", options).unwrap();
    zip.write_all(
        br#"{
            "pattern": ["AAA", " B ", " B "],
            "key": { "A": { "item": "x:ruby" }, "B": { "item": "minecraft:stick" } },
            "result": { "item": "x:ruby_pickaxe", "count": 1 }
        }"#,
    )
    .unwrap();

    zip.finish().unwrap();
}

#[test]
fn manifest_identifiers_are_distinct_and_cross_linked() {
    let dir = scratch_dir("manifest");
    let _ = std::fs::create_dir_all(&dir);
    let input = dir.join("rubytools-forge-mc1.20.1.jar");
    write_sample_jar(&input);

    let output_dir = dir.join("out");
    let outcome = modtrans_pipeline::transpile(&input, &output_dir, &TranspilerConfig::default()).unwrap();

    let file = std::fs::File::open(&outcome.output_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let bp_manifest: serde_json::Value =
        serde_json::from_reader(archive.by_name("behavior_pack/manifest.json").unwrap()).unwrap();
    let rp_manifest: serde_json::Value =
        serde_json::from_reader(archive.by_name("resource_pack/manifest.json").unwrap()).unwrap();

    let bp_header = bp_manifest["header"]["uuid"].as_str().unwrap();
    let bp_module = bp_manifest["modules"][0]["uuid"].as_str().unwrap();
    let rp_header = rp_manifest["header"]["uuid"].as_str().unwrap();
    let rp_module = rp_manifest["modules"][0]["uuid"].as_str().unwrap();

    let ids = [bp_header, bp_module, rp_header, rp_module];
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            assert_ne!(ids[i], ids[j], "manifest identifiers must be pairwise distinct");
        }
    }
    assert_eq!(bp_manifest["dependencies"][0]["uuid"].as_str().unwrap(), rp_header);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn item_and_resource_documents_pair_by_identifier() {
    let dir = scratch_dir("pairing");
    let _ = std::fs::create_dir_all(&dir);
    let input = dir.join("rubytools-forge-mc1.20.1.jar");
    write_sample_jar(&input);

    let output_dir = dir.join("out");
    let outcome = modtrans_pipeline::transpile(&input, &output_dir, &TranspilerConfig::default()).unwrap();

    let file = std::fs::File::open(&outcome.output_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let behavior: serde_json::Value =
        serde_json::from_reader(archive.by_name("behavior_pack/items/ruby_pickaxe.json").unwrap()).unwrap();
    let resource: serde_json::Value =
        serde_json::from_reader(archive.by_name("resource_pack/items/ruby_pickaxe.json").unwrap()).unwrap();

    assert_eq!(
        behavior["minecraft:item"]["description"]["identifier"],
        resource["minecraft:item"]["description"]["identifier"]
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn block_without_scanned_item_gets_a_block_placer_item() {
    let dir = scratch_dir("block_placer");
    let _ = std::fs::create_dir_all(&dir);
    let input = dir.join("rubytools-forge-mc1.20.1.jar");
    write_sample_jar(&input);

    let output_dir = dir.join("out");
    let outcome = modtrans_pipeline::transpile(&input, &output_dir, &TranspilerConfig::default()).unwrap();

    let file = std::fs::File::open(&outcome.output_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let block_item: serde_json::Value =
        serde_json::from_reader(archive.by_name("behavior_pack/items/ruby_ore.json").unwrap()).unwrap();
    assert_eq!(
        block_item["minecraft:item"]["components"]["minecraft:block_placer"]["block"],
        "rubytools:ruby_ore"
    );

    let block: serde_json::Value =
        serde_json::from_reader(archive.by_name("behavior_pack/blocks/ruby_ore.json").unwrap()).unwrap();
    assert_eq!(block["minecraft:block"]["menu_category"]["group"], "itemGroup.name.ore");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn atlas_keys_are_consistent_with_item_icons() {
    let dir = scratch_dir("atlas");
    let _ = std::fs::create_dir_all(&dir);
    let input = dir.join("rubytools-forge-mc1.20.1.jar");
    write_sample_jar(&input);

    let output_dir = dir.join("out");
    let outcome = modtrans_pipeline::transpile(&input, &output_dir, &TranspilerConfig::default()).unwrap();

    let file = std::fs::File::open(&outcome.output_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let resource_item: serde_json::Value =
        serde_json::from_reader(archive.by_name("resource_pack/items/copper_ingot.json").unwrap()).unwrap();
    let icon = resource_item["minecraft:item"]["components"]["minecraft:icon"]
        .as_str()
        .unwrap()
        .to_string();

    let atlas: serde_json::Value =
        serde_json::from_reader(archive.by_name("resource_pack/textures/item_texture.json").unwrap()).unwrap();
    assert!(atlas["texture_data"].get(&icon).is_some());

    assert!(archive
        .by_name(&format!("resource_pack/textures/items/{icon}.png"))
        .is_ok());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn armored_item_gets_matching_attachable_geometry() {
    let dir = scratch_dir("attachable");
    let _ = std::fs::create_dir_all(&dir);
    let input = dir.join("rubytools-forge-mc1.20.1.jar");
    write_sample_jar(&input);

    let output_dir = dir.join("out");
    let outcome = modtrans_pipeline::transpile(&input, &output_dir, &TranspilerConfig::default()).unwrap();

    let file = std::fs::File::open(&outcome.output_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let attachable: serde_json::Value = serde_json::from_reader(
        archive.by_name("resource_pack/attachables/ruby_helmet.json").unwrap(),
    )
    .unwrap();
    assert_eq!(
        attachable["minecraft:attachable"]["description"]["geometry"]["default"],
        "geometry.player.armor.helmet"
    );
    assert_eq!(
        attachable["minecraft:attachable"]["description"]["textures"]["default"],
        "textures/models/armor/ruby_layer_1"
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn recipe_pattern_stays_within_three_by_three_bound() {
    let dir = scratch_dir("recipe_bound");
    let _ = std::fs::create_dir_all(&dir);
    let input = dir.join("rubytools-forge-mc1.20.1.jar");
    write_sample_jar(&input);

    let output_dir = dir.join("out");
    let outcome = modtrans_pipeline::transpile(&input, &output_dir, &TranspilerConfig::default()).unwrap();
    assert_eq!(outcome.stats.recipes, 1);
    assert_eq!(outcome.stats.unsupported_recipes, 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mod_id_is_derived_from_archive_filename_once() {
    let dir = scratch_dir("modid");
    let _ = std::fs::create_dir_all(&dir);
    let input = dir.join("rubytools-forge-mc1.20.1.jar");
    write_sample_jar(&input);

    let output_dir = dir.join("out");
    let outcome = modtrans_pipeline::transpile(&input, &output_dir, &TranspilerConfig::default()).unwrap();
    assert_eq!(outcome.mod_id, "rubytools");

    let _ = std::fs::remove_dir_all(&dir);
}
