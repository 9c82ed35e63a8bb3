//! Per-tile terrain attributes and the static lookup tables that map raw
//! terrain bytes onto them.

use bitflags::bitflags;

bitflags! {
    /// Which corners of a tile are raised above its base altitude.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        const NW = 0b0001;
        const NE = 0b0010;
        const SW = 0b0100;
        const SE = 0b1000;
    }
}

bitflags! {
    /// Which edges of a tile carry surface water (canal or bay shape).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const N = 0b0001;
        const E = 0b0010;
        const S = 0b0100;
        const W = 0b1000;
    }
}

/// Water-depth classification of a tile, independent of the canal/bay shape
/// carried by [`Edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submersion {
    #[default]
    Dry,
    Submerged,
    PartiallySubmerged,
    SurfaceWater,
}

/// One grid cell of the city terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    /// 0..=15, from the high nibble of the altitude-map byte. Consumers
    /// conventionally scale this to game units.
    pub altitude: u8,
    /// Raised-corner flags from the terrain byte's slope nibble.
    pub slope: Corners,
    /// Canal/bay edge flags; empty for dry land.
    pub water: Edges,
    /// Canal corner flags. No chunk decodes these yet; always empty.
    pub canal: Corners,
    /// Always `Dry` until the submersion bitfield is wired up.
    pub submerged: Submersion,
}

/// Slope nibble (0x0..=0xD) to raised corners. Nibbles 0xE and 0xF fall
/// outside the table and decode as flat.
const SLOPE_TABLE: [Corners; 14] = [
    Corners::empty(),                                     // 0x0
    Corners::NW.union(Corners::NE),                       // 0x1
    Corners::NE.union(Corners::SE),                       // 0x2
    Corners::SW.union(Corners::SE),                       // 0x3
    Corners::NW.union(Corners::SW),                       // 0x4
    Corners::NW.union(Corners::NE).union(Corners::SE),    // 0x5
    Corners::NE.union(Corners::SW).union(Corners::SE),    // 0x6
    Corners::NW.union(Corners::SW).union(Corners::SE),    // 0x7
    Corners::NW.union(Corners::NE).union(Corners::SW),    // 0x8
    Corners::NE,                                          // 0x9
    Corners::SE,                                          // 0xA
    Corners::SW,                                          // 0xB
    Corners::NW,                                          // 0xC
    Corners::all(),                                       // 0xD
];

/// Sparse map from the full terrain byte to a surface-water shape. Keys lie
/// outside the slope-nibble range, so a water tile still decodes a slope.
const WATER_SURFACE_TABLE: [(u8, Edges); 6] = [
    (0x40, Edges::E.union(Edges::W)), // canal running west-east
    (0x41, Edges::N.union(Edges::S)), // canal running north-south
    (0x42, Edges::S),                 // bay open to the south
    (0x43, Edges::W),                 // bay open to the west
    (0x44, Edges::N),                 // bay open to the north
    (0x45, Edges::S),                 // bay open to the south
];

/// Raised corners for a terrain byte's low nibble.
pub fn slope_for(nibble: u8) -> Corners {
    SLOPE_TABLE
        .get(nibble as usize)
        .copied()
        .unwrap_or_default()
}

/// Surface-water shape for a full terrain byte, or empty when the byte is
/// not a water-surface key.
pub fn water_for(byte: u8) -> Edges {
    WATER_SURFACE_TABLE
        .iter()
        .find(|(key, _)| *key == byte)
        .map(|(_, edges)| *edges)
        .unwrap_or_default()
}
