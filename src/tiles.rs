use std::f64::consts::PI;

use crate::config::{ORIGIN_LAT, ORIGIN_LON, TILE_URL_TEMPLATE};
use crate::data::model::HousingTable;

// ---------------------------------------------------------------------------
// Web-Mercator projection
// ---------------------------------------------------------------------------
//
// Map plot space: x is longitude in degrees, y is the Mercator ordinate
// scaled to degrees, so both axes span [-180, 180] over the whole world
// and every slippy-map tile is a square.

/// Edge length of an OSM raster tile in screen pixels.
pub const TILE_SIZE_PX: f64 = 256.0;

/// Mercator stops being useful past this latitude.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Latitude (degrees) → Mercator ordinate (degrees).
pub fn mercator_y(lat: f64) -> f64 {
    let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    (PI / 4.0 + phi / 2.0).tan().ln().to_degrees()
}

/// Width of one tile in plot units at `zoom`.
pub fn tile_span(zoom: u8) -> f64 {
    360.0 / f64::from(1u32 << zoom)
}

// ---------------------------------------------------------------------------
// Tiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    /// Tile under a plot-space point, clamped to the world.
    pub fn containing(x: f64, y: f64, zoom: u8) -> Self {
        let span = tile_span(zoom);
        let last = f64::from((1u32 << zoom) - 1);
        TileId {
            zoom,
            x: ((x + 180.0) / span).floor().clamp(0.0, last) as u32,
            y: ((180.0 - y) / span).floor().clamp(0.0, last) as u32,
        }
    }

    pub fn url(&self) -> String {
        TILE_URL_TEMPLATE
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }

    /// Center of the tile in plot space.
    pub fn center(&self) -> [f64; 2] {
        let span = tile_span(self.zoom);
        [
            -180.0 + (f64::from(self.x) + 0.5) * span,
            180.0 - (f64::from(self.y) + 0.5) * span,
        ]
    }
}

/// Tiles overlapping the plot-space rectangle `[min, max]`, at most
/// `limit` of them (row-major from the top-left).
pub fn visible_tiles(min: [f64; 2], max: [f64; 2], zoom: u8, limit: usize) -> Vec<TileId> {
    let top_left = TileId::containing(min[0], max[1], zoom);
    let bottom_right = TileId::containing(max[0], min[1], zoom);
    (top_left.y..=bottom_right.y)
        .flat_map(|y| (top_left.x..=bottom_right.x).map(move |x| TileId { zoom, x, y }))
        .take(limit)
        .collect()
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Mean coordinate of the table's rows, or the derived-coordinate origin
/// when there are none. Returned as `(lat, lon)`.
pub fn map_center(table: &HousingTable) -> (f64, f64) {
    if table.is_empty() {
        return (ORIGIN_LAT, ORIGIN_LON);
    }
    let n = table.len() as f64;
    let (lat_sum, lon_sum) = table
        .records()
        .iter()
        .fold((0.0, 0.0), |(la, lo), r| (la + r.latitude, lo + r.longitude));
    (lat_sum / n, lon_sum / n)
}

/// Plot-space bounds `(min, max)` that show `size_px` screen pixels around
/// `(lat, lon)` at `zoom`, one tile pixel per screen pixel.
pub fn viewport(lat: f64, lon: f64, size_px: [f32; 2], zoom: u8) -> ([f64; 2], [f64; 2]) {
    let units_per_px = tile_span(zoom) / TILE_SIZE_PX;
    let half_w = f64::from(size_px[0]) * units_per_px / 2.0;
    let half_h = f64::from(size_px[1]) * units_per_px / 2.0;
    let y = mercator_y(lat);
    ([lon - half_w, y - half_h], [lon + half_w, y + half_h])
}
