use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Dataset, Record, display_name};

// ---------------------------------------------------------------------------
// Filtered data table
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 18.0;

/// Virtualised table of the filtered view, using the display column names
/// from the rename table plus the derived "Type" column.
pub fn filtered_table(ui: &mut Ui, dataset: &Dataset) {
    let headers = [
        display_name("name"),
        display_name("recclass"),
        "Type",
        display_name("mass (g)"),
        display_name("fall"),
        display_name("year"),
        display_name("reclat"),
        display_name("reclong"),
    ];

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(80.0), headers.len() - 1)
        .header(20.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, dataset.len(), |mut row| {
                let record = &dataset.records[row.index()];
                for cell in row_cells(record) {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

fn row_cells(record: &Record) -> [String; 8] {
    fn opt_num<T: std::fmt::Display>(v: Option<T>) -> String {
        v.map(|v| v.to_string()).unwrap_or_default()
    }

    [
        record.name.clone(),
        record.classification.clone(),
        record.category.clone().unwrap_or_else(|| "Unknown".into()),
        record
            .mass_g
            .map(|m| format!("{m:.2}"))
            .unwrap_or_default(),
        record.discovery.to_string(),
        opt_num(record.year),
        opt_num(record.latitude),
        opt_num(record.longitude),
    ]
}
