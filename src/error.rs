use serde_json::Error as SerdeError;
use std::path::PathBuf;
use std::{error, fmt, io};

/// Error type for map construction.
///
/// Queries never produce errors; absence is `Option` or default
/// passthrough. Everything here comes from the loader.
#[derive(Debug)]
pub enum MapError {
    /// JSON parse error
    Parse(SerdeError),
    /// File I/O error, with the path that failed
    Io {
        /// Path being read when the error occurred
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// Structurally invalid map document
    InvalidMap(String),
    /// No layers were found in the map JSON
    NoLayer,
    /// A layer's data length does not match width * height
    InvalidLayerSize(String),
    /// A layer references a gid outside the registered id range
    InvalidTileGid {
        /// Layer the bad gid was found in
        layer: String,
        /// The masked gid value
        gid: u32,
        /// Highest id any tileset registers
        max_gid: u32,
    },
    /// A property value was not a JSON scalar
    UnsupportedPropertyType {
        /// Property name
        name: String,
        /// Declared property type, or "" when undeclared
        kind: String,
    },
    /// Unsupported file format (non-JSON)
    UnsupportedFormat(String),
}

impl From<SerdeError> for MapError {
    fn from(err: SerdeError) -> Self {
        MapError::Parse(err)
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Parse(e) => write!(f, "JSON parse error: {}", e),
            MapError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            MapError::InvalidMap(msg) => write!(f, "Invalid map: {}", msg),
            MapError::NoLayer => write!(f, "No layers found in map JSON"),
            MapError::InvalidLayerSize(name) => write!(
                f,
                "Invalid layer size for layer '{}': data length does not match map dimensions",
                name
            ),
            MapError::InvalidTileGid {
                layer,
                gid,
                max_gid,
            } => write!(
                f,
                "Layer '{}' references gid {} but the highest registered id is {}",
                layer, gid, max_gid
            ),
            MapError::UnsupportedPropertyType { name, kind } => {
                write!(f, "Property '{}' has unsupported value type '{}'", name, kind)
            }
            MapError::UnsupportedFormat(path) => write!(f, "Unsupported file format: {}", path),
        }
    }
}

impl error::Error for MapError {}
