// tests/object_tests.rs

use tiled_support::Map;

const MAP_WITH_OBJECTS: &str = r#"
{
  "width": 1, "height": 1,
  "tilewidth": 8, "tileheight": 8,
  "layers": [
    { "type": "tilelayer", "name": "ground", "data": [0] },
    {
      "type": "objectgroup",
      "name": "spawns",
      "objects": [
        {
          "id": 7, "name": "spawn_1", "type": "spawn",
          "x": 16.0, "y": 24.0,
          "properties": [ {"name":"kind","type":"string","value":"player"} ]
        },
        { "id": 8, "name": "spawn_2", "type": "spawn", "x": 40.0, "y": 24.0 }
      ]
    },
    {
      "type": "objectgroup",
      "name": "triggers",
      "objects": [
        {
          "id": 9, "name": "door", "type": "trigger",
          "width": 8.0, "height": 16.0,
          "properties": [ {"name":"target","type":"string","value":"cave_1"} ]
        }
      ]
    }
  ]
}
"#;

#[test]
fn groups_index_into_the_flat_object_list() {
    let map = Map::load_from_str(MAP_WITH_OBJECTS).unwrap();
    assert_eq!(map.objects.len(), 3);
    assert_eq!(map.object_groups.len(), 2);

    let spawns = map.object_group("spawns").expect("spawns group");
    assert_eq!(spawns.objects, vec![0, 1]);

    let names: Vec<&str> = map
        .group_objects(spawns)
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(names, vec!["spawn_1", "spawn_2"]);

    let triggers = map.object_group("triggers").expect("triggers group");
    assert_eq!(triggers.objects, vec![2]);
}

#[test]
fn object_property_lookup_matches_the_tile_contract() {
    let map = Map::load_from_str(MAP_WITH_OBJECTS).unwrap();
    let spawn = &map.objects[0];
    assert_eq!(spawn.property("kind", "none"), "player");
    assert_eq!(spawn.property("missing", "none"), "none");

    let door = &map.objects[2];
    assert_eq!(door.property("target", ""), "cave_1");
    assert_eq!(door.kind, "trigger");
    assert_eq!(door.width, 8.0);
}

#[test]
fn unsupported_layer_kinds_are_skipped() {
    let json = r#"
    {
      "width": 1, "height": 1, "tilewidth": 8, "tileheight": 8,
      "layers": [
        { "type": "tilelayer", "name": "ground", "data": [0] },
        { "type": "imagelayer", "name": "backdrop" }
      ]
    }
    "#;
    let map = Map::load_from_str(json).unwrap();
    assert_eq!(map.layers.len(), 1);
    assert!(map.object_groups.is_empty());
}
