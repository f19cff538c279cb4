use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Column naming
// ---------------------------------------------------------------------------

/// Declarative rename table: raw source column → display name.
/// Loading locates columns by the raw name; the table view and the charts
/// use the display name. Renaming never alters values.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("name", "Meteorite Name"),
    ("recclass", "Classification"),
    ("mass (g)", "Mass (g)"),
    ("fall", "Discovery Type"),
    ("year", "Year"),
    ("reclat", "Latitude"),
    ("reclong", "Longitude"),
];

/// Raw columns dropped on load; they duplicate information already present
/// in other fields (`nametype` qualifies `recclass`, `GeoLocation` combines
/// `reclat`/`reclong`).
pub const DROPPED_COLUMNS: &[&str] = &["nametype", "GeoLocation"];

/// Look up the display name for a raw column.
pub fn display_name(raw: &str) -> &str {
    COLUMN_RENAMES
        .iter()
        .find(|(r, _)| *r == raw)
        .map(|(_, d)| *d)
        .unwrap_or(raw)
}

// ---------------------------------------------------------------------------
// DiscoveryType – whether a meteorite was seen falling or found later
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryType {
    Fell,
    Found,
    /// Anything else in a malformed export. Never produced by the reference
    /// data; excluded from the time-series pivot.
    Unknown,
}

impl DiscoveryType {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Fell" => DiscoveryType::Fell,
            "Found" => DiscoveryType::Found,
            _ => DiscoveryType::Unknown,
        }
    }
}

impl fmt::Display for DiscoveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryType::Fell => write!(f, "Fell"),
            DiscoveryType::Found => write!(f, "Found"),
            DiscoveryType::Unknown => write!(f, "Unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A single meteorite observation. Numeric fields that failed lenient
/// coercion are `None`; view-specific consumers decide how to treat them.
#[derive(Debug, Clone)]
pub struct Record {
    /// Stable unique key assigned by the source dataset.
    pub id: u64,
    pub name: String,
    /// Cleaned classification code (digits stripped, trimmed).
    pub classification: String,
    /// Coarse category derived from the static lookup; `None` if unmapped.
    pub category: Option<String>,
    pub mass_g: Option<f64>,
    pub discovery: DiscoveryType,
    pub year: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The cleaned record set, insertion-ordered, ids unique. The canonical
/// dataset is built once at load time and never mutated afterwards; every
/// filter pass produces a fresh derived `Dataset`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted unique categories present in the data (unmapped codes excluded).
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.category.as_deref())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Observed (min, max) of the present masses, if any record has one.
    pub fn mass_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for m in self.records.iter().filter_map(|r| r.mass_g) {
            bounds = Some(match bounds {
                None => (m, m),
                Some((lo, hi)) => (lo.min(m), hi.max(m)),
            });
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u64, category: Option<&str>, mass_g: Option<f64>) -> Record {
        Record {
            id,
            name: format!("m{id}"),
            classification: "L".into(),
            category: category.map(str::to_string),
            mass_g,
            discovery: DiscoveryType::Found,
            year: Some(2000),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn categories_are_sorted_and_deduplicated() {
        let ds = Dataset::from_records(vec![
            rec(1, Some("Ordinary Chondrite"), None),
            rec(2, Some("Carbonaceous Chondrite"), None),
            rec(3, Some("Ordinary Chondrite"), None),
            rec(4, None, None),
        ]);
        assert_eq!(
            ds.categories(),
            vec!["Carbonaceous Chondrite", "Ordinary Chondrite"]
        );
    }

    #[test]
    fn mass_bounds_skip_absent_masses() {
        let ds = Dataset::from_records(vec![
            rec(1, None, Some(500.0)),
            rec(2, None, None),
            rec(3, None, Some(3000.0)),
        ]);
        assert_eq!(ds.mass_bounds(), Some((500.0, 3000.0)));

        let empty = Dataset::from_records(vec![rec(1, None, None)]);
        assert_eq!(empty.mass_bounds(), None);
    }

    #[test]
    fn display_names_follow_the_rename_table() {
        assert_eq!(display_name("recclass"), "Classification");
        assert_eq!(display_name("mass (g)"), "Mass (g)");
        assert_eq!(display_name("unmapped"), "unmapped");
    }

    #[test]
    fn discovery_type_parses_the_two_known_values() {
        assert_eq!(DiscoveryType::parse("Fell"), DiscoveryType::Fell);
        assert_eq!(DiscoveryType::parse(" Found "), DiscoveryType::Found);
        assert_eq!(DiscoveryType::parse("fell?"), DiscoveryType::Unknown);
    }
}
