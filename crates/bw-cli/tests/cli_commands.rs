//! Integration tests for the `bw` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use bw_core::building::BuildingCategory;
use bw_core::codec::{decode_block, decode_flat, encode_block, encode_flat};
use bw_core::record::{BuildingData, DungeonBody, Footprint};
use bw_core::{Block, ExteriorBody, convert_a_to_b};
use predicates::prelude::*;
use tempfile::TempDir;

fn town_block() -> Block {
    let mut body = ExteriorBody::default();
    body.buildings.push(BuildingData {
        name_seed: 3,
        faction_id: 12,
        sector: 1,
        location_id: 8,
        building_type: BuildingCategory::Bank,
        quality: 10,
    });
    body.footprints.push(Footprint {
        x_pos: 100,
        z_pos: 200,
        y_rotation: 0,
    });
    Block::exterior("GEN0AA00", body)
}

/// Write a block document into `dir` and return its path.
fn write_block(dir: &TempDir, file: &str, block: &Block) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, encode_block(block).unwrap()).unwrap();
    path
}

fn bw() -> Command {
    Command::cargo_bin("bw").unwrap()
}

// ---------------------------------------------------------------------------
// rotate
// ---------------------------------------------------------------------------

#[test]
fn rotate_prints_renamed_block() {
    let dir = TempDir::new().unwrap();
    let input = write_block(&dir, "town.json", &town_block());

    bw().args(["rotate", input.to_str().unwrap(), "--step", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"GEN1AA00\"")
                .and(predicate::str::contains("3896"))
                .and(predicate::str::contains("-512")),
        );
}

#[test]
fn rotate_writes_into_out_dir() {
    let dir = TempDir::new().unwrap();
    let input = write_block(&dir, "town.json", &town_block());
    let out = dir.path().join("rotated");

    bw().args([
        "rotate",
        input.to_str().unwrap(),
        "-s",
        "1",
        "--out-dir",
        out.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("GEN2AA00.json"));

    let text = fs::read_to_string(out.join("GEN2AA00.json")).unwrap();
    let block = decode_block(&text).unwrap();
    let footprint = block.exterior.unwrap().footprints[0];
    assert_eq!((footprint.x_pos, footprint.z_pos), (3996, 3896));
}

#[test]
fn rotate_rejects_invalid_step() {
    let dir = TempDir::new().unwrap();
    let input = write_block(&dir, "town.json", &town_block());

    bw().args(["rotate", input.to_str().unwrap(), "--step", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid rotation step"));
}

#[test]
fn rotate_rejects_dungeon_blocks() {
    let dir = TempDir::new().unwrap();
    let input = write_block(&dir, "crypt.json", &Block::dungeon("N0000001", DungeonBody::default()));

    bw().args(["rotate", input.to_str().unwrap(), "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported block kind: dungeon"));
}

#[test]
fn rotate_batch_keeps_going_past_failures() {
    let dir = TempDir::new().unwrap();
    let town = write_block(&dir, "town.json", &town_block());
    let crypt = write_block(&dir, "crypt.json", &Block::dungeon("N0000001", DungeonBody::default()));
    let out = dir.path().join("out");

    bw().args([
        "rotate",
        town.to_str().unwrap(),
        crypt.to_str().unwrap(),
        "--step",
        "2",
        "--out-dir",
        out.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("1 block could not be rotated"));

    assert!(out.join("GEN3AA00.json").exists());
}

#[test]
fn rotate_refuses_names_that_escape_out_dir() {
    let dir = TempDir::new().unwrap();
    let mut block = town_block();
    block.name = "GEN0../../evil".to_string();
    let input = write_block(&dir, "town.json", &block);
    let out = dir.path().join("a").join("b");

    bw().args([
        "rotate",
        input.to_str().unwrap(),
        "--step",
        "0",
        "--out-dir",
        out.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("malformed block name"));

    assert!(!dir.path().join("evil.json").exists());
    assert!(fs::read_dir(&out).unwrap().next().is_none());
}

#[test]
fn rotate_many_needs_out_dir() {
    let dir = TempDir::new().unwrap();
    let a = write_block(&dir, "a.json", &town_block());
    let b = write_block(&dir, "b.json", &town_block());

    bw().args(["rotate", a.to_str().unwrap(), b.to_str().unwrap(), "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out-dir"));
}

// ---------------------------------------------------------------------------
// convert
// ---------------------------------------------------------------------------

#[test]
fn convert_to_flat_applies_merchant_faction() {
    let dir = TempDir::new().unwrap();
    let input = write_block(&dir, "town.json", &town_block());
    let output = dir.path().join("flat.json");

    bw().args([
        "convert",
        input.to_str().unwrap(),
        "--to",
        "flat",
        "-o",
        output.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stderr(predicate::str::contains("merchant faction override"));

    let flat = decode_flat(&fs::read_to_string(&output).unwrap()).unwrap();
    let rmb = flat.rmb.unwrap();
    assert_eq!(rmb.buildings[0].faction_id, 510);
    assert_eq!(rmb.ground_tiles.len(), 256);
}

#[test]
fn convert_warns_about_synthesized_digit() {
    let dir = TempDir::new().unwrap();
    let mut block = town_block();
    block.name = "GENAA00".to_string();
    let input = write_block(&dir, "town.json", &block);

    bw().args(["convert", input.to_str().unwrap(), "--to", "flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"GEN0AA00\""))
        .stderr(predicate::str::contains("synthesized orientation digit"));
}

#[test]
fn convert_flat_back_to_nested() {
    let dir = TempDir::new().unwrap();
    let flat_path = dir.path().join("flat.json");
    fs::write(&flat_path, encode_flat(&convert_a_to_b(&town_block())).unwrap()).unwrap();

    bw().args(["convert", flat_path.to_str().unwrap(), "--to", "nested"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ground\"").and(predicate::str::contains("\"rmb\"").not()));
}

#[test]
fn convert_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_block(&dir, "town.json", &town_block());
    let config = dir.path().join("merchants.json");
    fs::write(&config, r#"{ "merchant_faction_id": 42 }"#).unwrap();

    bw().args([
        "convert",
        input.to_str().unwrap(),
        "--to",
        "flat",
        "--config",
        config.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"faction_id\": 42"));
}

#[test]
fn convert_reports_wrong_schema() {
    let dir = TempDir::new().unwrap();
    let input = write_block(&dir, "town.json", &town_block());

    bw().args(["convert", input.to_str().unwrap(), "--to", "nested"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("town.json"));
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_shows_name_fields_and_counts() {
    let dir = TempDir::new().unwrap();
    let input = write_block(&dir, "town.json", &town_block());

    bw().args(["inspect", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("GEN0AA00")
                .and(predicate::str::contains("category"))
                .and(predicate::str::contains("nested"))
                .and(predicate::str::contains("footprints")),
        );
}

#[test]
fn inspect_reads_flat_documents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flat.json");
    fs::write(&path, encode_flat(&convert_a_to_b(&town_block())).unwrap()).unwrap();

    bw().args(["inspect", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("flat").and(predicate::str::contains("exterior")));
}

#[test]
fn inspect_missing_file() {
    bw().args(["inspect", "/nonexistent/block.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
