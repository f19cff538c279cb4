use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::ChartColors;
use crate::data::aggregate;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Chart 1: landings over time (Found vs. Fell)
// ---------------------------------------------------------------------------

/// Line chart of the yearly landing counts, one line per discovery type.
/// The "Fell" line is fixed red; the "Found" colour comes from the config.
pub fn landings_over_time(ui: &mut Ui, dataset: &Dataset, colors: &ChartColors) {
    ui.strong("Landings over time (Found vs. Fell)");
    ui.label("Time-series distribution of discovered meteorites.");

    let series = aggregate::landings_over_time(dataset);

    let fell: PlotPoints = series
        .iter()
        .map(|yc| [yc.year as f64, yc.fell as f64])
        .collect();
    let found: PlotPoints = series
        .iter()
        .map(|yc| [yc.year as f64, yc.found as f64])
        .collect();

    Plot::new("landings_over_time")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Number of meteorites")
        .height(240.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(fell).name("Fell").color(Color32::RED).width(1.5));
            plot_ui.line(
                Line::new(found)
                    .name("Found")
                    .color(colors.found_line)
                    .width(1.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Chart 2: distribution of major meteorite categories
// ---------------------------------------------------------------------------

/// Bar chart of record counts per category, largest first.
pub fn category_distribution(ui: &mut Ui, dataset: &Dataset, colors: &ChartColors) {
    ui.strong("Distribution of major meteorite types");
    ui.label("Total count per category in the filtered dataset.");

    let totals = aggregate::category_totals(dataset);
    if totals.is_empty() {
        ui.label("No categorised meteorites in the filtered data.");
        return;
    }

    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(i, cc)| {
            Bar::new(i as f64, cc.count as f64)
                .name(&cc.category)
                .width(0.8)
        })
        .collect();

    let chart = BarChart::new(bars)
        .color(colors.category_bars)
        .element_formatter(Box::new(|bar, _chart| {
            format!("{}: {}", bar.name, bar.value as u64)
        }));

    Plot::new("category_distribution")
        .y_axis_label("Total count")
        .show_axes([false, true])
        .height(260.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Chart 3: top ten heaviest meteorites in the selected year window
// ---------------------------------------------------------------------------

/// Horizontal bar chart of the heaviest meteorites within `year_range`,
/// smallest of the top ten first. Fed the canonical dataset so the category
/// and mass filters do not narrow it; only the year window applies.
pub fn top_mass(ui: &mut Ui, dataset: &Dataset, year_range: (i32, i32), colors: &ChartColors) {
    ui.strong(format!(
        "Top {} heaviest meteorites ({}–{})",
        aggregate::TOP_MASS_LIMIT,
        year_range.0,
        year_range.1
    ));
    ui.label("Most massive meteorites discovered or fallen in the year window.");

    let top = aggregate::top_by_mass(dataset, year_range);
    if top.is_empty() {
        ui.label("No meteorites with a known mass in this year window.");
        return;
    }

    let bars: Vec<Bar> = top
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::new(i as f64, entry.mass_kg)
                .name(&entry.name)
                .width(0.8)
        })
        .collect();

    let chart = BarChart::new(bars)
        .horizontal()
        .color(colors.mass_bars)
        .element_formatter(Box::new(|bar, _chart| {
            format!("{}: {:.1} kg", bar.name, bar.value)
        }));

    Plot::new("top_mass")
        .x_axis_label("Mass (kg)")
        .show_axes([true, false])
        .height(260.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
