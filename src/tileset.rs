//! Tilesets and the tile records they own.

use crate::gid::Gid;
use crate::property::Properties;
use image::RgbaImage;

/// One tile record: global id, optional pixel data, authored properties.
///
/// A tile is owned by exactly one [`Tileset`]; the map's registry only
/// points at it by index.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Global tile id, flag bits clear.
    pub id: Gid,
    /// Per-tile pixel data, attached by the host; the loader leaves
    /// this `None`.
    pub bitmap: Option<RgbaImage>,
    /// Tile-level properties.
    pub properties: Properties,
}

impl Tile {
    /// Tile record with no bitmap and no properties yet.
    pub fn new(id: Gid) -> Self {
        Tile {
            id,
            bitmap: None,
            properties: Properties::new(),
        }
    }

    /// Value of the first property named `name`, or `default` when the
    /// tile has no such property.
    pub fn property<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.properties.get_or(name, default)
    }

    /// Hands this tile its pixel data.
    pub fn attach_bitmap(&mut self, bitmap: RgbaImage) {
        self.bitmap = Some(bitmap);
    }
}

/// A named collection of tile records plus a shared atlas image.
#[derive(Debug, Clone)]
pub struct Tileset {
    /// Tileset name as authored.
    pub name: String,
    /// Document the tileset came from ("" when defined inline).
    pub source: String,
    /// Path of the atlas image as written in the document. The crate
    /// never reads it; the host resolves and loads it.
    pub image: String,
    /// Global id of this tileset's first tile.
    pub first_gid: Gid,
    /// How many ids this tileset spans, counting tiles without records.
    pub tile_count: u32,
    /// Tiles that carry records (properties or pixel data). Tiles
    /// without metadata occupy ids but have no entry here.
    pub tiles: Vec<Tile>,
    /// Shared atlas image, attached by the host; the loader leaves
    /// this `None`.
    pub bitmap: Option<RgbaImage>,
}

impl Tileset {
    /// Empty tileset starting at `first_gid`.
    pub fn new(name: impl Into<String>, first_gid: Gid, tile_count: u32) -> Self {
        Tileset {
            name: name.into(),
            source: String::new(),
            image: String::new(),
            first_gid,
            tile_count,
            tiles: Vec::new(),
            bitmap: None,
        }
    }

    /// Hands this tileset its atlas image.
    pub fn attach_bitmap(&mut self, bitmap: RgbaImage) {
        self.bitmap = Some(bitmap);
    }
}
