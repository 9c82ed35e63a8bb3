//! City model: orchestrates the chunk walk and owns the decoded tile grid.

pub mod decoders;
pub mod tile;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::codec::{ChunkReader, ChunkTag};
use crate::error::Result;

pub use tile::{Corners, Edges, Submersion, Tile};

/// Decoder signature: mutate the shared tile arena from one chunk payload.
type DecodeFn = fn(&mut Vec<Tile>, &[u8]);

/// Tag-to-decoder dispatch. Recognized-but-undecoded tags get explicit stub
/// entries so wiring up a real decoder later is a one-line change here.
/// Tags absent from this table are skipped by design.
const DISPATCH: [(ChunkTag, DecodeFn); 6] = [
    (ChunkTag::ALTM, decoders::decode_altitude_map),
    (ChunkTag::XTER, decoders::decode_terrain_map),
    (ChunkTag::XBLD, decoders::decode_building_map),
    (ChunkTag::XLAB, decoders::decode_labels),
    (ChunkTag::MISC, decoders::decode_misc),
    (ChunkTag::XUND, decoders::decode_underground_map),
];

fn decoder_for(tag: ChunkTag) -> Option<DecodeFn> {
    DISPATCH
        .iter()
        .find(|(entry, _)| *entry == tag)
        .map(|(_, decode)| *decode)
}

/// A fully decoded city: a read-only, row-major square grid of tiles.
#[derive(Debug, Clone)]
pub struct CityModel {
    tiles: Vec<Tile>,
}

impl CityModel {
    /// Read and decode a city file. Either the whole file decodes or the
    /// first error aborts the call; no partial city is returned. The file
    /// handle is released before this returns, on every path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Decode a city file already held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut reader = ChunkReader::new(data)?;
        let mut tiles = Vec::new();

        while let Some(chunk) = reader.next_chunk()? {
            match decoder_for(chunk.tag) {
                Some(decode) => decode(&mut tiles, &chunk.data),
                None => debug!(tag = %chunk.tag, "skipping unrecognized chunk"),
            }
        }

        Ok(Self { tiles })
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Side length of the square grid.
    pub fn side(&self) -> usize {
        self.tiles.len().isqrt()
    }

    /// Tile at (x, y), x running east and y running south.
    pub fn tile_at(&self, x: usize, y: usize) -> Option<&Tile> {
        let side = self.side();
        if x >= side || y >= side {
            return None;
        }
        self.tiles.get(y * side + x)
    }
}
