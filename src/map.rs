//! The map aggregate: owner of the whole graph, plus the tile registry.

use std::collections::HashMap;
use std::path::Path;

use image::RgbaImage;
use log::warn;

use crate::error::MapError;
use crate::gid::{Cell, Gid};
use crate::layer::TileLayer;
use crate::loader::json_loader::{decode_map_file, decode_map_str};
use crate::object::{Object, ObjectGroup};
use crate::property::Properties;
use crate::tileset::{Tile, Tileset};

/// Non-owning pointer into `Map::tilesets`: which tileset, which tile.
///
/// The registry stores these instead of tiles; each tile keeps its
/// tileset as sole owner, and dropping the registry releases nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileHandle {
    /// Index into [`Map::tilesets`].
    pub tileset: usize,
    /// Index into that tileset's `tiles`.
    pub tile: usize,
}

/// A parsed Tiled map: root owner of tilesets, layers, objects and
/// object groups.
///
/// Ownership is strictly tree-shaped. Tiles live in their tileset's
/// `tiles` vector; the id registry and object groups hold plain
/// indices. Dropping a `Map` releases every owned resource exactly
/// once.
#[derive(Debug)]
pub struct Map {
    /// Map orientation string ("orthogonal", "isometric", ...).
    pub orientation: String,
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Tile width in pixels.
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
    /// Map-level properties.
    pub properties: Properties,
    /// Tilesets in document order. Each owns its tiles.
    pub tilesets: Vec<Tileset>,
    /// Tile layers in draw order.
    pub layers: Vec<TileLayer>,
    /// All objects across all groups, in document order.
    pub objects: Vec<Object>,
    /// Object groups, each indexing into `objects`.
    pub object_groups: Vec<ObjectGroup>,
    /// Host-rendered target image, if the host attached one.
    pub backbuffer: Option<RgbaImage>,
    registry: HashMap<Gid, TileHandle>,
}

impl Map {
    /// Empty map with the given header fields; the caller fills in the
    /// collections and then calls [`rebuild_registry`](Self::rebuild_registry).
    pub fn new(
        orientation: impl Into<String>,
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Self {
        Map {
            orientation: orientation.into(),
            width,
            height,
            tile_width,
            tile_height,
            properties: Properties::new(),
            tilesets: Vec::new(),
            layers: Vec::new(),
            objects: Vec::new(),
            object_groups: Vec::new(),
            backbuffer: None,
            registry: HashMap::new(),
        }
    }

    /// Loads a map from a Tiled JSON string. External tileset
    /// references are rejected here; use
    /// [`load_from_file`](Self::load_from_file) for those.
    pub fn load_from_str(json: &str) -> Result<Self, MapError> {
        decode_map_str(json, None)
    }

    /// Loads a map from a Tiled JSON file. Only `.json` is accepted;
    /// external tilesets are resolved relative to the map's directory.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        decode_map_file(path.as_ref())
    }

    /// Re-derives the id registry from the current tilesets.
    ///
    /// Iterates tilesets in order and registers every tile record under
    /// its global id. A later tileset registering an already-bound id
    /// replaces the earlier binding.
    pub fn rebuild_registry(&mut self) {
        self.registry.clear();
        for (ts_idx, tileset) in self.tilesets.iter().enumerate() {
            for (t_idx, tile) in tileset.tiles.iter().enumerate() {
                let id = tile.id.clean();
                if id.is_empty() {
                    continue;
                }
                let handle = TileHandle {
                    tileset: ts_idx,
                    tile: t_idx,
                };
                if let Some(prev) = self.registry.insert(id, handle) {
                    warn!(
                        "tile id {} in tileset '{}' replaces the binding from tileset '{}'",
                        id.raw(),
                        tileset.name,
                        self.tilesets[prev.tileset].name
                    );
                }
            }
        }
    }

    /// Looks up a tile record by id.
    ///
    /// Flag bits on `id` are ignored. Id 0 is the reserved "no tile"
    /// value and never resolves; unknown ids resolve to `None`.
    pub fn tile_by_id(&self, id: Gid) -> Option<&Tile> {
        let clean = id.clean();
        if clean.is_empty() {
            return None;
        }
        let handle = self.registry.get(&clean)?;
        self.tilesets
            .get(handle.tileset)
            .and_then(|ts| ts.tiles.get(handle.tile))
    }

    /// Property lookup that tolerates an absent tile: resolves `id` and
    /// falls through to `default` when the tile or the property is
    /// missing.
    pub fn tile_property<'a>(&'a self, id: Gid, name: &str, default: &'a str) -> &'a str {
        match self.tile_by_id(id) {
            Some(tile) => tile.property(name, default),
            None => default,
        }
    }

    /// Masked tile ids at `(x, y)`, one per layer in draw order.
    ///
    /// The vector's length is exactly the layer count; a layer with no
    /// tile at that cell contributes id 0. The caller owns the result.
    pub fn gids_at(&self, x: u32, y: u32) -> Vec<Gid> {
        self.layers.iter().map(|layer| layer.gid_at(x, y)).collect()
    }

    /// Decoded cells at `(x, y)`, one per layer in draw order.
    pub fn cells_at(&self, x: u32, y: u32) -> Vec<Cell> {
        self.layers
            .iter()
            .map(|layer| layer.cell_at(x, y))
            .collect()
    }

    /// First layer with the given name.
    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// First object group with the given name.
    pub fn object_group(&self, name: &str) -> Option<&ObjectGroup> {
        self.object_groups.iter().find(|g| g.name == name)
    }

    /// Resolves a group's indices to the objects themselves.
    pub fn group_objects<'a>(
        &'a self,
        group: &'a ObjectGroup,
    ) -> impl Iterator<Item = &'a Object> {
        group.objects.iter().filter_map(|&i| self.objects.get(i))
    }

    /// Hands the map a host-rendered target image.
    pub fn attach_backbuffer(&mut self, backbuffer: RgbaImage) {
        self.backbuffer = Some(backbuffer);
    }
}
