use eframe::egui::load::{SizeHint, TexturePoll};
use eframe::egui::{RichText, TextureOptions, Ui};
use egui_plot::{MarkerShape, Plot, PlotBounds, PlotImage, PlotPoint, Points};

use crate::config::{
    MAP_HEIGHT, MAP_POINT_COLOR, MAP_ZOOM, SCATTER_HEIGHT, SCATTER_POINT_COLOR, TILE_ATTRIBUTION,
};
use crate::data::model::{Column, HousingRecord, HousingTable};
use crate::tiles::{self, TileId};

/// Upper bound on tiles requested per frame; a wide window at zoom 10 needs
/// well under this.
const MAX_TILES: usize = 48;

// ---------------------------------------------------------------------------
// Scatter plots
// ---------------------------------------------------------------------------

/// `(x, y)` pairs of two columns, in row order.
pub fn scatter_series(table: &HousingTable, x: Column, y: Column) -> Vec<[f64; 2]> {
    table
        .records()
        .iter()
        .map(|r| [r.value(x), r.value(y)])
        .collect()
}

/// Bivariate scatter of `x` against `y`. An empty table gives an empty plot.
pub fn scatter_plot(ui: &mut Ui, id: &str, title: &str, table: &HousingTable, x: Column, y: Column) {
    ui.label(RichText::new(title).strong());

    let points = Points::new(scatter_series(table, x, y))
        .name(format!("{} vs {}", x.name(), y.name()))
        .color(SCATTER_POINT_COLOR)
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(3.0);

    Plot::new(id)
        .height(SCATTER_HEIGHT)
        .x_axis_label(x.name())
        .y_axis_label(y.name())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .label_formatter(move |name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{} = {:.3}\n{} = {:.3}", x.name(), value.x, y.name(), value.y)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.points(points);
        });
}

// ---------------------------------------------------------------------------
// Property map
// ---------------------------------------------------------------------------

/// Plot-space position of a record on the map.
pub fn map_position(record: &HousingRecord) -> [f64; 2] {
    [record.longitude, tiles::mercator_y(record.latitude)]
}

/// Hover text for the map point at `(x, y)`: crime rate as the heading,
/// then rooms and median value.
pub fn map_hover_text(records: &[HousingRecord], x: f64, y: f64) -> Option<String> {
    const EPS: f64 = 1e-9;
    let record = records.iter().find(|r| {
        let [px, py] = map_position(r);
        (px - x).abs() < EPS && (py - y).abs() < EPS
    })?;
    Some(format!(
        "{}\nrm = {}\nmedv = {}",
        record.crim(),
        record.rm(),
        record.medv()
    ))
}

/// The `(lat, lon)` the map view was last framed on. egui_plot keeps its
/// own bounds between frames, so the view is pushed explicitly whenever the
/// center of the visible rows moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapFraming {
    center: Option<(f64, f64)>,
}

impl MapFraming {
    /// Record `center`; true when the view has to be reframed on it.
    pub fn reframe(&mut self, center: (f64, f64)) -> bool {
        if self.center == Some(center) {
            return false;
        }
        self.center = Some(center);
        true
    }
}

/// Point map over OpenStreetMap tiles at a fixed zoom, centered on the mean
/// coordinate of `table`. The view pans but never zooms; it jumps back to
/// the center whenever the filtered rows change it.
pub fn property_map(ui: &mut Ui, table: &HousingTable) {
    ui.label(RichText::new("Map of Property Locations").strong());

    let ctx = ui.ctx().clone();
    let (lat, lon) = tiles::map_center(table);
    let (min, max) = tiles::viewport(lat, lon, [ui.available_width(), MAP_HEIGHT], MAP_ZOOM);
    let framing_id = ui.id().with("property_map_framing");
    let reframe = ui.data_mut(|d| {
        d.get_temp_mut_or_default::<MapFraming>(framing_id)
            .reframe((lat, lon))
    });
    let records = table.records();
    let positions: Vec<[f64; 2]> = records.iter().map(map_position).collect();
    let tile_size = tiles::tile_span(MAP_ZOOM) as f32;

    Plot::new("property_map")
        .height(MAP_HEIGHT)
        .default_x_bounds(min[0], max[0])
        .default_y_bounds(min[1], max[1])
        .allow_drag(true)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_axes(false)
        .show_grid(false)
        .label_formatter(move |_name, value| {
            map_hover_text(records, value.x, value.y).unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            let (lo, hi) = if reframe {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
                (min, max)
            } else {
                let bounds = plot_ui.plot_bounds();
                (bounds.min(), bounds.max())
            };
            for tile in tiles::visible_tiles(lo, hi, MAP_ZOOM, MAX_TILES) {
                if let Some(texture) = tile_texture(&ctx, &tile) {
                    plot_ui.image(PlotImage::new(
                        texture,
                        PlotPoint::from(tile.center()),
                        [tile_size, tile_size],
                    ));
                }
            }
            plot_ui.points(
                Points::new(positions)
                    .name("properties")
                    .color(MAP_POINT_COLOR)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0),
            );
        });

    ui.label(RichText::new(TILE_ATTRIBUTION).small().weak());
}

/// Texture for a tile once the HTTP image loader has it; `None` while the
/// download is pending or after it failed (the tile is just left blank).
fn tile_texture(ctx: &eframe::egui::Context, tile: &TileId) -> Option<eframe::egui::TextureId> {
    match ctx.try_load_texture(&tile.url(), TextureOptions::LINEAR, SizeHint::default()) {
        Ok(TexturePoll::Ready { texture }) => Some(texture.id),
        Ok(TexturePoll::Pending { .. }) => None,
        Err(e) => {
            log::trace!("tile {tile:?} unavailable: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::row;

    #[test]
    fn scatter_series_projects_columns() {
        let table = HousingTable::from_records(vec![row(0.5, 0, 6.0, 20.0), row(1.5, 1, 7.0, 30.0)]);
        assert_eq!(
            scatter_series(&table, Column::Rm, Column::Medv),
            vec![[6.0, 20.0], [7.0, 30.0]]
        );
        assert_eq!(
            scatter_series(&table, Column::Crim, Column::Medv),
            vec![[0.5, 20.0], [1.5, 30.0]]
        );
    }

    #[test]
    fn empty_table_renders_nothing_without_panicking() {
        let empty = HousingTable::default();
        assert!(scatter_series(&empty, Column::Rm, Column::Medv).is_empty());
        assert_eq!(map_hover_text(empty.records(), 0.0, 0.0), None);

        let (lat, lon) = tiles::map_center(&empty);
        let (min, max) = tiles::viewport(lat, lon, [800.0, MAP_HEIGHT], MAP_ZOOM);
        assert!(!tiles::visible_tiles(min, max, MAP_ZOOM, MAX_TILES).is_empty());
    }

    #[test]
    fn hover_text_names_crime_rooms_and_value() {
        let table = HousingTable::from_records(vec![row(0.5, 0, 6.0, 20.0), row(1.5, 1, 7.25, 30.5)]);
        let [x, y] = map_position(&table.records()[1]);
        assert_eq!(
            map_hover_text(table.records(), x, y).as_deref(),
            Some("1.5\nrm = 7.25\nmedv = 30.5")
        );
        assert_eq!(map_hover_text(table.records(), x + 1.0, y), None);
    }

    #[test]
    fn map_reframes_only_when_center_moves() {
        let mut framing = MapFraming::default();
        let empty = tiles::map_center(&HousingTable::default());
        assert!(framing.reframe(empty));
        assert!(!framing.reframe(empty));

        let table = HousingTable::from_records(vec![row(0.5, 0, 6.0, 20.0), row(1.5, 1, 7.0, 30.0)]);
        let moved = tiles::map_center(&table);
        assert!(framing.reframe(moved));
        assert!(!framing.reframe(moved));
        assert!(framing.reframe(empty));
    }

    #[test]
    fn map_position_uses_derived_coordinates() {
        let r = row(3.0, 0, 6.0, 20.0);
        let [x, y] = map_position(&r);
        assert_eq!(x, -71.0589 - 0.03);
        assert_eq!(y, tiles::mercator_y(42.3601 + 0.03));
    }
}
