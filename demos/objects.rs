// demos/objects.rs
//
// Walk object groups and read designer-authored metadata.

use anyhow::Result;
use tiled_support::Map;

const MAP_JSON: &str = r#"
{
  "width": 4, "height": 4, "tilewidth": 16, "tileheight": 16,
  "layers": [
    { "type": "tilelayer", "name": "ground", "data": [0,0,0,0, 0,0,0,0, 0,0,0,0, 0,0,0,0] },
    {
      "type": "objectgroup",
      "name": "triggers",
      "objects": [
        {
          "id": 1, "name": "exit", "type": "trigger",
          "x": 48.0, "y": 0.0, "width": 16.0, "height": 16.0,
          "properties": [ {"name":"target","type":"string","value":"overworld"} ]
        },
        {
          "id": 2, "name": "chest", "type": "loot",
          "x": 16.0, "y": 32.0,
          "properties": [ {"name":"contents","type":"string","value":"silver_key"} ]
        }
      ]
    }
  ]
}
"#;

fn main() -> Result<()> {
    let map = Map::load_from_str(MAP_JSON)?;

    for group in &map.object_groups {
        println!("group '{}':", group.name);
        for obj in map.group_objects(group) {
            println!(
                "  #{} '{}' ({}) at ({}, {}) target={} contents={}",
                obj.id,
                obj.name,
                obj.kind,
                obj.x,
                obj.y,
                obj.property("target", "-"),
                obj.property("contents", "-")
            );
        }
    }
    Ok(())
}
