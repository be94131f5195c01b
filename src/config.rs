use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Compile-time settings
// ---------------------------------------------------------------------------

/// Remote CSV with the fourteen Boston Housing columns and a header row.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/selva86/datasets/master/BostonHousing.csv";

/// Origin of the placeholder coordinates derived from the crime rate.
pub const ORIGIN_LAT: f64 = 42.3601;
pub const ORIGIN_LON: f64 = -71.0589;

/// Slippy-map zoom level of the property map. Fixed; the map only pans.
pub const MAP_ZOOM: u8 = 10;

/// `{z}`, `{x}` and `{y}` are substituted per tile.
pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

pub const MAP_POINT_COLOR: Color32 = Color32::from_rgb(255, 0, 255);

pub const SCATTER_POINT_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

pub const SCATTER_HEIGHT: f32 = 320.0;
pub const MAP_HEIGHT: f32 = 420.0;

pub const WINDOW_SIZE: [f32; 2] = [1200.0, 900.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];
