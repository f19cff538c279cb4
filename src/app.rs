use eframe::egui::{self, Color32, RichText, ScrollArea};

use crate::state::AppState;
use crate::ui::{charts, map_view, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState,
}

impl ExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: map, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &self.state;

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Meteorite Landings Explorer");
                    ui.separator();

                    map_view::location_map(ui, &state.filtered, &state.color_map);
                    ui.separator();

                    if state.filtered.is_empty() {
                        // Zero matches is a valid terminal state, not an error.
                        ui.label(
                            RichText::new(
                                "No data matches the current filter settings. \
                                 Adjust your selections in the sidebar.",
                            )
                            .color(Color32::YELLOW),
                        );
                    } else {
                        charts::landings_over_time(ui, &state.filtered, &state.colors);
                        ui.separator();

                        ui.columns(2, |cols| {
                            charts::category_distribution(
                                &mut cols[0],
                                &state.filtered,
                                &state.colors,
                            );
                            // Fed the canonical dataset: only the year window
                            // narrows this view.
                            charts::top_mass(
                                &mut cols[1],
                                &state.dataset,
                                state.selection.year_range,
                                &state.colors,
                            );
                        });
                    }

                    ui.separator();
                    ui.strong("Filtered meteorite data");
                    table::filtered_table(ui, &state.filtered);
                });
        });
    }
}
