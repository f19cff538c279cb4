use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, Points};

use crate::color::ColorMap;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Map view: filtered meteorite locations
// ---------------------------------------------------------------------------

/// Scatter of all records with a present latitude and longitude, one point
/// group per category so the legend doubles as a category key.
pub fn location_map(ui: &mut Ui, dataset: &Dataset, color_map: &ColorMap) {
    ui.strong("Filtered meteorite locations");
    ui.label("Drag to pan, scroll to zoom. Colours follow the category legend.");

    let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for record in &dataset.records {
        let (Some(lat), Some(lon)) = (record.latitude, record.longitude) else {
            continue;
        };
        groups
            .entry(record.category.as_deref().unwrap_or("Unknown"))
            .or_default()
            .push([lon, lat]);
    }

    Plot::new("location_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .height(320.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (category, coords) in groups {
                let color = if category == "Unknown" {
                    color_map.color_for(None)
                } else {
                    color_map.color_for(Some(category))
                };
                plot_ui.points(
                    Points::new(coords)
                        .name(category)
                        .color(color)
                        .radius(2.0),
                );
            }
        });
}
