use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::classify;
use crate::data::loader;
use crate::state::{AppState, YEAR_SLIDER_MAX, YEAR_SLIDER_MIN};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            category_filter(ui, state);
            ui.separator();
            year_filter(ui, state);
            ui.separator();
            mass_filter(ui, state);
            ui.separator();
            color_settings(ui, state);
            ui.separator();
            mapping_blurb(ui);
        });
}

fn category_filter(ui: &mut Ui, state: &mut AppState) {
    let n_selected = state.selection.categories.len();
    let n_total = state.available_categories.len();
    let header_text = format!("Meteorite Types  ({n_selected}/{n_total})");

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("category_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_categories();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_categories();
                }
            });

            let categories = state.available_categories.clone();
            for category in &categories {
                let mut checked = state.selection.categories.contains(category);
                let swatch = state.color_map.color_for(Some(category));
                let label = RichText::new(category).color(swatch);
                if ui.checkbox(&mut checked, label).changed() {
                    state.toggle_category(category);
                }
            }
        });
}

fn year_filter(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Filter by Year");

    let (mut ymin, mut ymax) = state.selection.year_range;
    let mut changed = false;
    changed |= ui
        .add(Slider::new(&mut ymin, YEAR_SLIDER_MIN..=YEAR_SLIDER_MAX).text("From"))
        .changed();
    changed |= ui
        .add(Slider::new(&mut ymax, YEAR_SLIDER_MIN..=YEAR_SLIDER_MAX).text("To"))
        .changed();

    if changed {
        // Keep the interval well-formed whichever end moved.
        state.selection.year_range = (ymin.min(ymax), ymax.max(ymin));
        state.refilter();
    }
}

fn mass_filter(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Filter by Mass (g)");

    let (lo, hi) = state.mass_bounds;
    let (mut mmin, mut mmax) = state.selection.mass_range;
    let mut changed = false;
    changed |= ui
        .add(Slider::new(&mut mmin, lo..=hi).step_by(1000.0).text("Min"))
        .changed();
    changed |= ui
        .add(Slider::new(&mut mmax, lo..=hi).step_by(1000.0).text("Max"))
        .changed();

    if changed {
        state.selection.mass_range = (mmin.min(mmax), mmax.max(mmin));
        state.refilter();
    }
}

fn color_settings(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Chart Color Settings");

    ui.horizontal(|ui: &mut Ui| {
        ui.color_edit_button_srgba(&mut state.colors.found_line);
        ui.label("Landings over time: Found line");
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.color_edit_button_srgba(&mut state.colors.category_bars);
        ui.label("Type distribution: bars");
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.color_edit_button_srgba(&mut state.colors.mass_bars);
        ui.label("Top heaviest: bars");
    });
}

fn mapping_blurb(ui: &mut Ui) {
    ui.strong("Classification Mapping");
    ui.label(format!(
        "Aggregated from {} raw classifications.",
        classify::lookup_size()
    ));
    ui.label("First 5 mappings:");
    for (code, category) in classify::lookup_preview(5) {
        ui.monospace(format!("{category}: [{code}]"));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} of {} records match the current filters",
            state.filtered.len(),
            state.total_records
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Open another landings export. A failed load keeps the current dataset
/// and reports through the status message.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open meteorite landings data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok((dataset, total_records)) => {
                log::info!(
                    "Loaded {total_records} records from {}",
                    path.display()
                );
                state.set_dataset(dataset, total_records);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
