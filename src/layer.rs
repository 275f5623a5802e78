//! Tile layers: one byte grid per layer, queried per cell.

use crate::gid::{Cell, Gid};
use crate::property::Properties;

/// One grid layer of tile bytes covering the map.
///
/// `data` is row-major: the byte for `(x, y)` lives at
/// `x + y * width`. Coordinates are a trusted-caller contract:
/// callers must keep `x < width` and `y < height`; indexing past
/// the grid panics.
#[derive(Debug, Clone)]
pub struct TileLayer {
    /// Layer name as authored.
    pub name: String,
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// Whether the host should draw this layer.
    pub visible: bool,
    /// Layer opacity, 0.0..=1.0.
    pub opacity: f32,
    /// Layer-level properties.
    pub properties: Properties,
    /// Raw tile bytes, flags included.
    pub data: Vec<u8>,
}

impl TileLayer {
    /// Builds a layer over an existing byte grid.
    pub fn new(name: impl Into<String>, width: u32, height: u32, data: Vec<u8>) -> Self {
        TileLayer {
            name: name.into(),
            width,
            height,
            visible: true,
            opacity: 1.0,
            properties: Properties::new(),
            data,
        }
    }

    /// Raw stored byte at `(x, y)`, flag bits included.
    #[inline]
    pub fn raw_at(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[(x + y * self.width) as usize]
    }

    /// Tile id at `(x, y)` with the flag bits cleared.
    #[inline]
    pub fn gid_at(&self, x: u32, y: u32) -> Gid {
        Gid(self.raw_at(x, y)).clean()
    }

    /// True when the tile at `(x, y)` carries the horizontal-flip flag.
    #[inline]
    pub fn is_flipped_horizontally(&self, x: u32, y: u32) -> bool {
        Gid(self.raw_at(x, y)).flip_h()
    }

    /// True when the tile at `(x, y)` carries the vertical-flip flag.
    #[inline]
    pub fn is_flipped_vertically(&self, x: u32, y: u32) -> bool {
        Gid(self.raw_at(x, y)).flip_v()
    }

    /// Decoded cell at `(x, y)`: masked id plus all three flip flags.
    #[inline]
    pub fn cell_at(&self, x: u32, y: u32) -> Cell {
        Cell::decode(self.raw_at(x, y))
    }
}
