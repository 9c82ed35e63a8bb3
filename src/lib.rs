//! SimCity 2000 save-file reader
//!
//! Decodes the legacy `.sc2` tagged-chunk container into an in-memory grid
//! of per-tile terrain attributes: altitude, corner slope, surface-water
//! shape, and submersion state.
//!
//! ```no_run
//! use sc2k_reader::CityModel;
//!
//! let city = CityModel::open("iskarton.sc2")?;
//! println!("{} tiles, {}x{} grid", city.tile_count(), city.side(), city.side());
//! # Ok::<(), sc2k_reader::Error>(())
//! ```

pub mod city;
pub mod codec;
pub mod error;
pub mod render;

pub use city::{CityModel, Corners, Edges, Submersion, Tile};
pub use codec::{BinaryReader, Chunk, ChunkReader, ChunkTag, FileHeader};
pub use error::{Error, Result};
