//! Per-chunk tile-attribute decoders.
//!
//! Each routine takes the shared tile arena and one (already decompressed)
//! chunk payload. Chunks contribute orthogonal attributes to the same grid,
//! so every routine grows the arena to the size its payload implies and
//! never shrinks it or resets attributes written by an earlier chunk.

use tracing::{debug, trace};

use crate::city::tile::{slope_for, water_for, Tile};

/// Grow the arena to at least `count` tiles.
fn grow(tiles: &mut Vec<Tile>, count: usize) {
    if tiles.len() < count {
        tiles.resize(count, Tile::default());
    }
}

/// ALTM: altitude map, nominally two bytes per tile.
///
/// Only `payload[i]` for the first `len / 2` indices is consulted: a
/// sequential walk over the first half of the buffer, not an
/// every-other-byte walk over packed pairs. Known-good saves decode
/// correctly with this indexing, so it is kept byte-for-byte.
pub(crate) fn decode_altitude_map(tiles: &mut Vec<Tile>, payload: &[u8]) {
    let count = payload.len() / 2;
    grow(tiles, count);
    for i in 0..count {
        tiles[i].altitude = (payload[i] & 0xF0) >> 4;
    }
    debug!(tiles = count, "decoded altitude map");
}

/// XTER: terrain map, one byte per tile.
///
/// The low nibble selects a slope-table entry; the full byte doubles as a
/// sparse water-surface key. The same byte also carries submersion and
/// canal-corner bits whose positions are unspecified; those stay at their
/// defaults and can be added here as further independent extractions.
pub(crate) fn decode_terrain_map(tiles: &mut Vec<Tile>, payload: &[u8]) {
    grow(tiles, payload.len());
    for (i, &byte) in payload.iter().enumerate() {
        tiles[i].slope = slope_for(byte & 0x0F);
        tiles[i].water = water_for(byte);
    }
    debug!(tiles = payload.len(), "decoded terrain map");
}

/// XBLD: building map. Recognized but not decoded yet.
pub(crate) fn decode_building_map(_tiles: &mut Vec<Tile>, payload: &[u8]) {
    trace!(len = payload.len(), "building map not decoded yet");
}

/// XLAB: labels. Recognized but not decoded yet.
pub(crate) fn decode_labels(_tiles: &mut Vec<Tile>, payload: &[u8]) {
    trace!(len = payload.len(), "labels not decoded yet");
}

/// MISC: miscellaneous city stats. Recognized but not decoded yet.
pub(crate) fn decode_misc(_tiles: &mut Vec<Tile>, payload: &[u8]) {
    trace!(len = payload.len(), "misc chunk not decoded yet");
}

/// XUND: underground map. Recognized but not decoded yet.
pub(crate) fn decode_underground_map(_tiles: &mut Vec<Tile>, payload: &[u8]) {
    trace!(len = payload.len(), "underground map not decoded yet");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::tile::{Corners, Edges};

    #[test]
    fn test_altitude_high_nibble() {
        let mut tiles = Vec::new();
        decode_altitude_map(&mut tiles, &[0xF0, 0x80, 0x00, 0x00]);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].altitude, 15);
        assert_eq!(tiles[1].altitude, 8);
    }

    #[test]
    fn test_altitude_reads_first_half_sequentially() {
        // Six payload bytes mean three tiles, fed from payload[0..3].
        let mut tiles = Vec::new();
        decode_altitude_map(&mut tiles, &[0x10, 0x20, 0x30, 0xAA, 0xBB, 0xCC]);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].altitude, 1);
        assert_eq!(tiles[1].altitude, 2);
        assert_eq!(tiles[2].altitude, 3);
    }

    #[test]
    fn test_terrain_slope_and_water() {
        let mut tiles = Vec::new();
        decode_terrain_map(&mut tiles, &[0x0D, 0x40, 0x09]);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].slope, Corners::all());
        assert_eq!(tiles[0].water, Edges::empty());
        // 0x40: flat slope nibble, canal running west-east.
        assert_eq!(tiles[1].slope, Corners::empty());
        assert_eq!(tiles[1].water, Edges::E | Edges::W);
        // 0x09: NE slope, not a water key.
        assert_eq!(tiles[2].slope, Corners::NE);
        assert_eq!(tiles[2].water, Edges::empty());
    }

    #[test]
    fn test_grow_never_shrink() {
        let mut tiles = Vec::new();
        decode_altitude_map(&mut tiles, &[0x50, 0x60, 0x70, 0x00, 0x00, 0x00]);
        assert_eq!(tiles.len(), 3);

        // A shorter terrain chunk must not drop tiles or altitudes.
        decode_terrain_map(&mut tiles, &[0x0D]);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].slope, Corners::all());
        assert_eq!(tiles[0].altitude, 5);
        assert_eq!(tiles[2].altitude, 7);

        // A longer one grows the arena without touching earlier attributes.
        decode_terrain_map(&mut tiles, &[0x00, 0x00, 0x00, 0x41]);
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].altitude, 5);
        assert_eq!(tiles[3].water, Edges::N | Edges::S);
    }

    #[test]
    fn test_stub_decoders_change_nothing() {
        let mut tiles = vec![Tile { altitude: 9, ..Tile::default() }];
        decode_building_map(&mut tiles, &[1, 2, 3]);
        decode_labels(&mut tiles, &[4]);
        decode_misc(&mut tiles, &[5, 6]);
        decode_underground_map(&mut tiles, &[7]);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].altitude, 9);
    }
}
