// tests/load_tests.rs

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tiled_support::{Gid, Map, MapError};

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("tiled_support_{tag}_{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

const INLINE_MAP: &str = r#"
{
    "width": 1,
    "height": 1,
    "tilewidth": 4,
    "tileheight": 4,
    "layers": [ { "name": "L", "data": [0] } ]
}
"#;

#[test]
fn integration_load_from_file_and_str() {
    let map = Map::load_from_str(INLINE_MAP).expect("should parse inline JSON");
    assert_eq!(map.width, 1);

    let dir = temp_dir("roundtrip");
    let path = dir.join("map.json");
    fs::write(&path, INLINE_MAP).unwrap();
    let map2 = Map::load_from_file(&path).unwrap();
    assert_eq!(map2.tile_width, 4);
    fs::remove_file(&path).unwrap();
}

#[test]
fn integration_unsupported_format() {
    let err = Map::load_from_file("foo.tmx").unwrap_err();
    match err {
        MapError::UnsupportedFormat(path) => assert_eq!(path, "foo.tmx"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

const MAP_WITH_EXTERNAL_TILESET: &str = r#"
{
  "orientation": "orthogonal",
  "width": 2, "height": 1,
  "tilewidth": 8, "tileheight": 8,
  "layers": [ { "name": "ground", "data": [1, 2] } ],
  "tilesets": [ { "firstgid": 1, "source": "tileset.json" } ]
}
"#;

const EXTERNAL_TILESET: &str = r#"
{
  "name": "terrain",
  "tilecount": 4,
  "image": "tiles.png",
  "tiles": [
    { "id": 0, "properties": [ {"name":"solid","type":"string","value":"true"} ] }
  ]
}
"#;

#[test]
fn resolves_external_tilesets_next_to_the_map() {
    let dir = temp_dir("external");
    let map_path = dir.join("map.json");
    fs::write(&map_path, MAP_WITH_EXTERNAL_TILESET).unwrap();
    fs::write(dir.join("tileset.json"), EXTERNAL_TILESET).unwrap();

    let map = Map::load_from_file(&map_path).expect("load with external tileset");
    assert_eq!(map.tilesets.len(), 1);
    assert_eq!(map.tilesets[0].name, "terrain");
    assert_eq!(map.tilesets[0].source, "tileset.json");
    assert_eq!(map.tilesets[0].image, "tiles.png");
    assert_eq!(map.tile_property(Gid(1), "solid", "false"), "true");
}

#[test]
fn error_on_missing_external_tileset_file() {
    let dir = temp_dir("missing_ts");
    let map_path = dir.join("map.json");
    fs::write(&map_path, MAP_WITH_EXTERNAL_TILESET).unwrap();

    let err = Map::load_from_file(&map_path).unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
}

#[test]
fn external_tilesets_are_rejected_for_string_loads() {
    let err = Map::load_from_str(MAP_WITH_EXTERNAL_TILESET).unwrap_err();
    assert!(matches!(err, MapError::InvalidMap(_)));
}
