#![warn(missing_docs)]

//! Tiled tile-map support: data model, read-only query layer, and a
//! JSON construction path, for consumption by a host game engine.
//!
//! Rendering, image loading and TMX/XML parsing stay on the host side;
//! this crate owns the parsed graph and answers per-cell and per-id
//! queries over it.

mod error;
mod gid;
mod layer;
mod loader {
    pub mod json_loader;
}
mod map;
mod object;
mod property;
mod tileset;

pub use error::MapError;
pub use gid::{Cell, Gid, FLIP_D, FLIP_H, FLIP_V, GID_MASK};
pub use layer::TileLayer;
pub use map::{Map, TileHandle};
pub use object::{Object, ObjectGroup};
pub use property::{Properties, Property};
pub use tileset::{Tile, Tileset};
