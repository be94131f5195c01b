/// Data layer: record types, loading, and filtering.
///
/// Architecture:
/// ```text
///  BostonHousing.csv (URL or local copy)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → HousingTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ HousingTable  │  Vec<HousingRecord>, derived lat/lon
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  rooms > r, crime < c, chas == v → new HousingTable
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
