//! Plain-text rendering of a decoded city grid.
//!
//! One character per tile, one line per grid row. Water-bearing tiles draw
//! as `~`, dry tiles as a density ramp over altitude so coastlines and
//! ridgelines read at a glance.

use std::fs;
use std::path::Path;

use crate::city::CityModel;
use crate::error::Result;

/// Altitude 0..=15 mapped onto a 16-step density ramp.
const ALTITUDE_RAMP: [char; 16] = [
    ' ', '.', '.', ':', ':', '-', '-', '=', '=', '+', '*', '*', '#', '#', '%', '@',
];

fn tile_char(altitude: u8, has_water: bool) -> char {
    if has_water {
        '~'
    } else {
        ALTITUDE_RAMP[(altitude & 0x0F) as usize]
    }
}

/// Render the altitude/water map as text, row-major, one line per row.
pub fn render_altitude(city: &CityModel) -> String {
    let side = city.side();
    let mut out = String::with_capacity(side * (side + 1));
    for y in 0..side {
        for x in 0..side {
            let tile = &city.tiles()[y * side + x];
            out.push(tile_char(tile.altitude, !tile.water.is_empty()));
        }
        out.push('\n');
    }
    out
}

/// Render to a text file.
pub fn render_to_file(city: &CityModel, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, render_altitude(city))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_city_file(chunks: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
        let body_len: usize = chunks.iter().map(|(_, p)| 8 + p.len()).sum();
        let declared = (4 + body_len) as u32;
        let mut out = Vec::new();
        out.extend_from_slice(b"FORM");
        out.extend_from_slice(&declared.to_be_bytes());
        out.extend_from_slice(b"SCDH");
        for (tag, payload) in chunks {
            out.extend_from_slice(*tag);
            out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
            out.extend_from_slice(payload);
        }
        out
    }

    #[test]
    fn test_render_ramp_and_water() {
        // 2x2 grid: altitudes 0, 15, 9, 0; last tile is a canal.
        let file = build_city_file(&[
            (b"ALTM", &[0x00, 0xF0, 0x90, 0x00, 0, 0, 0, 0]),
            (b"XTER", &[0x04, 0x00, 0x00, 0x00, 0x40]),
        ]);
        let city = CityModel::from_bytes(&file).unwrap();

        assert_eq!(render_altitude(&city), " @\n+~\n");
    }

    #[test]
    fn test_render_empty_city() {
        let file = build_city_file(&[]);
        let city = CityModel::from_bytes(&file).unwrap();
        assert_eq!(render_altitude(&city), "");
    }

    #[test]
    fn test_render_to_file() {
        let file = build_city_file(&[(b"ALTM", &[0xF0, 0x00])]);
        let city = CityModel::from_bytes(&file).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        render_to_file(&city, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "@\n");
    }
}
