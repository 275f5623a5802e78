// src/loader/json_loader.rs
use crate::error::MapError;
use crate::gid::{Gid, FLIP_D, FLIP_H, FLIP_V, GID_MASK};
use crate::layer::TileLayer;
use crate::map::Map;
use crate::object::{Object, ObjectGroup};
use crate::property::Properties;
use crate::tileset::{Tile, Tileset};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;

// Tiled JSON stores 32-bit gids with the flip flags at the top.
const JSON_FLIP_H: u32 = 0x8000_0000; // bit 31
const JSON_FLIP_V: u32 = 0x4000_0000; // bit 30
const JSON_FLIP_D: u32 = 0x2000_0000; // bit 29
const JSON_GID_MASK: u32 = 0x1FFF_FFFF;

#[derive(Deserialize)]
struct JsonMap {
    #[serde(default = "orthogonal")]
    orientation: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    tilewidth: u32,
    tileheight: u32,
    layers: Vec<JsonLayer>,
    #[serde(default)]
    tilesets: Vec<JsonTilesetRef>,
    #[serde(default)]
    properties: Vec<JsonProperty>,
}

fn orthogonal() -> String {
    "orthogonal".to_owned()
}
fn default_true() -> bool {
    true
}
fn one() -> f32 {
    1.0
}

#[derive(Deserialize)]
struct JsonLayer {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>, // "tilelayer" or "objectgroup" expected here
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    data: Vec<u32>,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default = "one")]
    opacity: f32,
    #[serde(default)]
    properties: Vec<JsonProperty>,
    #[serde(default)]
    objects: Vec<JsonObject>,
}

/// A tileset entry in the map document: either an external reference
/// (`source` set) or a fully inline definition.
#[derive(Deserialize)]
struct JsonTilesetRef {
    firstgid: u32,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    tilecount: u32,
    #[serde(default)]
    image: String,
    #[serde(default)]
    tiles: Vec<JsonTile>,
}

#[derive(Deserialize)]
struct ExternalTileset {
    #[serde(default)]
    name: String,
    tilecount: u32,
    #[serde(default)]
    image: String,
    #[serde(default)]
    tiles: Vec<JsonTile>,
}

#[derive(Deserialize)]
struct JsonTile {
    id: u32,
    #[serde(default)]
    properties: Vec<JsonProperty>,
}

#[derive(Deserialize)]
struct JsonProperty {
    name: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    value: JsonValue,
}

#[derive(Deserialize)]
struct JsonObject {
    #[serde(default)]
    id: u32,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    properties: Vec<JsonProperty>,
}

fn json_property_to_pair(prop: JsonProperty) -> Result<(String, String), MapError> {
    let JsonProperty { name, kind, value } = prop;

    match kind.as_deref() {
        Some("bool") | Some("int") | Some("float") | Some("object") | Some("string")
        | Some("file") | Some("color") | Some("class") | None => {}
        Some(other) => {
            return Err(MapError::UnsupportedPropertyType {
                name,
                kind: other.to_owned(),
            });
        }
    }

    // Values are carried as strings; only JSON scalars can be rendered.
    let rendered = match &value {
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => s.clone(),
        _ => {
            return Err(MapError::UnsupportedPropertyType {
                name,
                kind: kind.unwrap_or_default(),
            });
        }
    };

    Ok((name, rendered))
}

fn properties_from_json(props: Vec<JsonProperty>) -> Result<Properties, MapError> {
    let mut out = Properties::new();
    for p in props {
        let (name, value) = json_property_to_pair(p)?;
        out.push(name, value);
    }
    Ok(out)
}

/// Re-packs one 32-bit document gid into the byte encoding: flag bits
/// 31/30/29 move to 7/6/5, and the masked id must fit the byte mask
/// and the registered id range.
fn pack_raw_gid(raw: u32, layer: &str, max_gid: u32) -> Result<u8, MapError> {
    let id = raw & JSON_GID_MASK;
    if id > u32::from(GID_MASK) || id > max_gid {
        return Err(MapError::InvalidTileGid {
            layer: layer.to_owned(),
            gid: id,
            max_gid,
        });
    }

    let mut byte = id as u8;
    if raw & JSON_FLIP_H != 0 {
        byte |= FLIP_H;
    }
    if raw & JSON_FLIP_V != 0 {
        byte |= FLIP_V;
    }
    if raw & JSON_FLIP_D != 0 {
        byte |= FLIP_D;
    }
    Ok(byte)
}

fn tileset_from_parts(
    name: String,
    source: String,
    image: String,
    firstgid: u32,
    tilecount: u32,
    tiles: Vec<JsonTile>,
) -> Result<Tileset, MapError> {
    let last = firstgid + tilecount.saturating_sub(1);
    if firstgid == 0 || last > u32::from(GID_MASK) {
        return Err(MapError::InvalidMap(format!(
            "tileset '{}' spans ids {}..={}, outside the byte id range 1..={}",
            name, firstgid, last, GID_MASK
        )));
    }

    let mut tileset = Tileset::new(name, Gid(firstgid as u8), tilecount);
    tileset.source = source;
    tileset.image = image;

    for t in tiles {
        let global = firstgid + t.id;
        if global > u32::from(GID_MASK) {
            return Err(MapError::InvalidMap(format!(
                "tile id {} in tileset '{}' exceeds the byte id range",
                global, tileset.name
            )));
        }
        let mut tile = Tile::new(Gid(global as u8));
        tile.properties = properties_from_json(t.properties)?;
        tileset.tiles.push(tile);
    }

    Ok(tileset)
}

fn resolve_tileset(ts: JsonTilesetRef, base_dir: Option<&Path>) -> Result<Tileset, MapError> {
    let Some(source) = ts.source else {
        return tileset_from_parts(
            ts.name,
            String::new(),
            ts.image,
            ts.firstgid,
            ts.tilecount,
            ts.tiles,
        );
    };

    let Some(base_dir) = base_dir else {
        return Err(MapError::InvalidMap(format!(
            "external tileset {} requires loading the map from a file",
            source
        )));
    };
    if !source.ends_with(".json") {
        return Err(MapError::InvalidMap(format!(
            "External tileset must be JSON: {}",
            source
        )));
    }

    let ts_path = base_dir.join(&source);
    let ext_txt = std::fs::read_to_string(&ts_path).map_err(|err| MapError::Io {
        path: ts_path,
        source: err,
    })?;
    let ext: ExternalTileset = serde_json::from_str(&ext_txt)?;

    tileset_from_parts(
        ext.name,
        source,
        ext.image,
        ts.firstgid,
        ext.tilecount,
        ext.tiles,
    )
}

/// Decodes a Tiled JSON document into a [`Map`]. `base_dir` is where
/// external tileset references resolve from; without one they are
/// rejected.
pub fn decode_map_str(json: &str, base_dir: Option<&Path>) -> Result<Map, MapError> {
    let j: JsonMap = serde_json::from_str(json)?;

    if j.layers.is_empty() {
        return Err(MapError::NoLayer);
    }

    let mut tilesets = Vec::with_capacity(j.tilesets.len());
    for ts in j.tilesets {
        tilesets.push(resolve_tileset(ts, base_dir)?);
    }
    // Sort by first gid so registry rebuilds see a stable order.
    tilesets.sort_by_key(|t| t.first_gid.raw());

    let max_gid = tilesets
        .iter()
        .map(|t| u32::from(t.first_gid.raw()) + t.tile_count.saturating_sub(1))
        .max()
        .unwrap_or(0);

    let mut map = Map::new(j.orientation, j.width, j.height, j.tilewidth, j.tileheight);
    map.properties = properties_from_json(j.properties)?;
    map.tilesets = tilesets;

    for l in j.layers {
        match l.kind.as_deref().unwrap_or("tilelayer") {
            "tilelayer" => {
                // Layers may omit their own dimensions; fall back to the map's.
                let width = if l.width == 0 { j.width } else { l.width };
                let height = if l.height == 0 { j.height } else { l.height };
                if l.data.len() as u64 != u64::from(width) * u64::from(height) {
                    return Err(MapError::InvalidLayerSize(l.name));
                }

                let mut data = Vec::with_capacity(l.data.len());
                for &raw in &l.data {
                    data.push(pack_raw_gid(raw, &l.name, max_gid)?);
                }

                let mut layer = TileLayer::new(l.name, width, height, data);
                layer.visible = l.visible;
                layer.opacity = l.opacity;
                layer.properties = properties_from_json(l.properties)?;
                map.layers.push(layer);
            }
            "objectgroup" => {
                let start = map.objects.len();
                for obj in l.objects {
                    map.objects.push(Object {
                        id: obj.id,
                        name: obj.name,
                        kind: obj.kind,
                        x: obj.x,
                        y: obj.y,
                        width: obj.width,
                        height: obj.height,
                        visible: obj.visible,
                        properties: properties_from_json(obj.properties)?,
                    });
                }
                map.object_groups.push(ObjectGroup {
                    name: l.name,
                    objects: (start..map.objects.len()).collect(),
                });
            }
            other => {
                warn!("skipping unsupported layer '{}' of type '{}'", l.name, other);
            }
        }
    }

    map.rebuild_registry();

    debug!(
        "decoded {} map: {} tile layers, {} object groups, {} tilesets",
        map.orientation,
        map.layers.len(),
        map.object_groups.len(),
        map.tilesets.len()
    );

    Ok(map)
}

/// Reads and decodes a Tiled JSON map file. Only `.json` is accepted.
pub fn decode_map_file(path: &Path) -> Result<Map, MapError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(MapError::UnsupportedFormat(path.display().to_string()));
    }

    let txt = std::fs::read_to_string(path).map_err(|err| MapError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;

    let map_dir = path.parent().unwrap_or_else(|| Path::new("./"));
    decode_map_str(&txt, Some(map_dir))
}
