use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::classify;
use super::model::{DROPPED_COLUMNS, Dataset, DiscoveryType, Record};

// ---------------------------------------------------------------------------
// Structural load errors
// ---------------------------------------------------------------------------

/// Failures that make the whole file unusable. Per-field problems (bad year,
/// bad mass) are never errors; they coerce to missing values instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a meteorite landings dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – the NASA export with an `id` column plus the raw columns
///             listed in [`super::model::COLUMN_RENAMES`]
/// * `.json` – records-oriented export of the same table
///             (`df.to_json(orient='records')`)
///
/// Returns the canonical dataset (category column already assigned) and the
/// total record count observed before any filtering.
pub fn load_file(path: &Path) -> Result<(Dataset, usize)> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let mut dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    };

    let total_records = dataset.len();
    classify::assign_categories(&mut dataset);
    Ok((dataset, total_records))
}

// ---------------------------------------------------------------------------
// Field cleaning
// ---------------------------------------------------------------------------

/// Strip embedded digit runs and surrounding whitespace from a raw
/// classification code: `"L6"` → `"L"`, `"H4/5"` → `"H/"`. The digits are
/// petrologic-grade suffixes irrelevant to category mapping.
pub fn clean_classification(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_ascii_digit()).collect();
    stripped.trim().to_string()
}

/// Lenient numeric coercion: malformed values become missing, never errors.
fn coerce_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Years arrive as floats in the export (`"1880.0"`); coerce through f64.
fn coerce_year(raw: &str) -> Option<i32> {
    coerce_f64(raw)
        .filter(|y| (i32::MIN as f64..=i32::MAX as f64).contains(y))
        .map(|y| y as i32)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv_records(reader)
}

/// Parse an open CSV reader into a [`Dataset`]. Rows are kept in file order;
/// no row is dropped during cleaning.
fn read_csv_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let id_idx = col("id")?;
    let name_idx = col("name")?;
    let class_idx = col("recclass")?;
    let mass_idx = col("mass (g)")?;
    let fall_idx = col("fall")?;
    let year_idx = col("year")?;
    let lat_idx = col("reclat")?;
    let lon_idx = col("reclong")?;

    // Dropped columns are simply never looked up.
    let dropped: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|h| DROPPED_COLUMNS.contains(h))
        .collect();
    if !dropped.is_empty() {
        log::debug!("dropping columns {dropped:?}");
    }

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let id: u64 = field(id_idx)
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: invalid id '{}'", field(id_idx)))?;

        records.push(Record {
            id,
            name: field(name_idx).to_string(),
            classification: clean_classification(field(class_idx)),
            category: None,
            mass_g: coerce_f64(field(mass_idx)),
            discovery: DiscoveryType::parse(field(fall_idx)),
            year: coerce_year(field(year_idx)),
            latitude: coerce_f64(field(lat_idx)),
            longitude: coerce_f64(field(lon_idx)),
        });
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Aachen",
///     "recclass": "L5",
///     "mass (g)": 21.0,
///     "fall": "Fell",
///     "year": 1880.0,
///     "reclat": 50.775,
///     "reclong": 6.08333
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let id = obj
            .get("id")
            .and_then(JsonValue::as_u64)
            .with_context(|| format!("Row {i}: missing or invalid 'id'"))?;

        let text_field = |key: &str| -> String {
            match obj.get(key) {
                Some(JsonValue::String(s)) => s.clone(),
                Some(JsonValue::Null) | None => String::new(),
                Some(other) => other.to_string(),
            }
        };

        // Numbers may arrive as JSON numbers or as strings; coerce both,
        // falling back to missing like the CSV path does.
        let numeric_field = |key: &str| -> Option<f64> {
            match obj.get(key) {
                Some(JsonValue::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
                Some(JsonValue::String(s)) => coerce_f64(s),
                _ => None,
            }
        };

        records.push(Record {
            id,
            name: text_field("name"),
            classification: clean_classification(&text_field("recclass")),
            category: None,
            mass_g: numeric_field("mass (g)"),
            discovery: DiscoveryType::parse(&text_field("fall")),
            year: numeric_field("year")
                .filter(|y| (i32::MIN as f64..=i32::MAX as f64).contains(y))
                .map(|y| y as i32),
            latitude: numeric_field("reclat"),
            longitude: numeric_field("reclong"),
        });
    }

    Ok(Dataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DiscoveryType;

    const SAMPLE_CSV: &str = "\
name,id,nametype,recclass,mass (g),fall,year,reclat,reclong,GeoLocation
Aachen,1,Valid,L5,21,Fell,1880.0,50.775,6.08333,\"(50.775, 6.08333)\"
Aarhus,2,Valid,H6,720,Fell,1951.0,56.18333,10.23333,\"(56.18333, 10.23333)\"
Abee,6,Valid,EH4,107000,Fell,unknown,54.21667,-113.0,\"(54.21667, -113.0)\"
Acapulco,10,Valid,Acapulcoite,,Fell,1976.0,16.88333,-99.9,\"(16.88333, -99.9)\"
";

    fn load_sample() -> Dataset {
        let reader = csv::Reader::from_reader(SAMPLE_CSV.as_bytes());
        read_csv_records(reader).expect("sample CSV parses")
    }

    #[test]
    fn cleaning_strips_digits_and_whitespace() {
        assert_eq!(clean_classification("L6"), "L");
        assert_eq!(clean_classification("H4/5"), "H/");
        assert_eq!(clean_classification("  LL3.4  "), "LL.");
        assert_eq!(clean_classification("Acapulcoite"), "Acapulcoite");

        for raw in ["L6", "H4/5", " EH4 ", "CV3", "Iron, IAB-MG"] {
            let cleaned = clean_classification(raw);
            assert!(!cleaned.chars().any(|c| c.is_ascii_digit()), "{cleaned}");
            assert_eq!(cleaned, cleaned.trim());
        }
    }

    #[test]
    fn year_coercion_is_lenient() {
        assert_eq!(coerce_year("1880.0"), Some(1880));
        assert_eq!(coerce_year("2000"), Some(2000));
        assert_eq!(coerce_year("unknown"), None);
        assert_eq!(coerce_year(""), None);
        assert_eq!(coerce_year("NaN"), None);
    }

    #[test]
    fn csv_rows_are_cleaned_but_never_dropped() {
        let ds = load_sample();
        assert_eq!(ds.len(), 4);

        let aachen = &ds.records[0];
        assert_eq!(aachen.id, 1);
        assert_eq!(aachen.name, "Aachen");
        assert_eq!(aachen.classification, "L");
        assert_eq!(aachen.mass_g, Some(21.0));
        assert_eq!(aachen.discovery, DiscoveryType::Fell);
        assert_eq!(aachen.year, Some(1880));
        assert_eq!(aachen.latitude, Some(50.775));

        // Malformed year and absent mass coerce to missing, row retained.
        assert_eq!(ds.records[2].year, None);
        assert_eq!(ds.records[3].mass_g, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv_text = "id,name\n1,Aachen\n";
        let reader = csv::Reader::from_reader(csv_text.as_bytes());
        let err = read_csv_records(reader).unwrap_err();
        assert!(err.to_string().contains("recclass"), "{err}");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("landings.parquet")).unwrap_err();
        assert!(err.to_string().contains("parquet"), "{err}");
    }

    #[test]
    fn json_rows_match_the_csv_semantics() {
        let json_text = r#"[
            {"id": 1, "name": "Aachen", "nametype": "Valid", "recclass": "L5",
             "mass (g)": 21.0, "fall": "Fell", "year": 1880.0,
             "reclat": 50.775, "reclong": 6.08333},
            {"id": 6, "name": "Abee", "recclass": "EH4", "mass (g)": "107000",
             "fall": "Fell", "year": "unknown", "reclat": null, "reclong": null}
        ]"#;
        let tmp = std::env::temp_dir().join("meteorite_loader_test.json");
        std::fs::write(&tmp, json_text).unwrap();

        let (ds, total) = load_file(&tmp).unwrap();
        std::fs::remove_file(&tmp).ok();

        assert_eq!(total, 2);
        assert_eq!(ds.records[0].classification, "L");
        assert_eq!(ds.records[0].category.as_deref(), Some("Ordinary Chondrite"));
        assert_eq!(ds.records[1].mass_g, Some(107000.0));
        assert_eq!(ds.records[1].year, None);
        assert_eq!(ds.records[1].latitude, None);
    }
}
