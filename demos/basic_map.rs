// demos/basic_map.rs
//
// Load a small inline map, then answer the queries a renderer and game
// logic would ask every frame.

use anyhow::Result;
use image::RgbaImage;
use tiled_support::{Gid, Map};

const MAP_JSON: &str = r#"
{
  "orientation": "orthogonal",
  "width": 3, "height": 2,
  "tilewidth": 16, "tileheight": 16,
  "layers": [
    { "type": "tilelayer", "name": "ground", "data": [1, 1, 2, 1, 2147483650, 0] },
    { "type": "tilelayer", "name": "deco",   "data": [0, 3, 0, 0, 0, 3] }
  ],
  "tilesets": [
    {
      "firstgid": 1, "name": "terrain", "tilecount": 4,
      "tiles": [
        { "id": 1, "properties": [ {"name":"solid","type":"string","value":"true"} ] }
      ]
    }
  ]
}
"#;

fn main() -> Result<()> {
    let mut map = Map::load_from_str(MAP_JSON)?;

    // The host owns image loading; here a blank atlas stands in.
    map.tilesets[0].attach_bitmap(RgbaImage::new(64, 16));

    println!(
        "{} map, {}x{} tiles of {}x{} px",
        map.orientation, map.width, map.height, map.tile_width, map.tile_height
    );

    for y in 0..map.height {
        for x in 0..map.width {
            let stack = map.gids_at(x, y);
            let solid = map.tile_property(stack[0], "solid", "false");
            println!("({x},{y}) stack {stack:?} solid={solid}");
        }
    }

    let ground = map.layer("ground").expect("ground layer");
    let cell = ground.cell_at(1, 1);
    println!(
        "cell (1,1): id {:?}, flip_h={}, flip_v={}, flip_d={}",
        cell.id, cell.flip_h, cell.flip_v, cell.flip_d
    );

    assert!(map.tile_by_id(Gid(0)).is_none());
    Ok(())
}
