use std::collections::BTreeSet;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Filter selection: the transient, user-controlled predicate tuple
// ---------------------------------------------------------------------------

/// The sidebar selection: category set plus inclusive year and mass
/// intervals. Rebuilt on every interaction; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    /// Selected categories. An empty set selects *nothing*: every record
    /// fails the category predicate. This matches the reference behavior
    /// and is a deliberate, tested policy (see the unit tests below).
    pub categories: BTreeSet<String>,
    /// Inclusive [min, max] year interval.
    pub year_range: (i32, i32),
    /// Inclusive [min, max] mass interval in grams.
    pub mass_range: (f64, f64),
}

impl FilterSelection {
    /// Selection that passes everything the predicates can pass: all known
    /// categories, the full year slider span, the observed mass bounds.
    pub fn all(categories: &[String], year_range: (i32, i32), mass_range: (f64, f64)) -> Self {
        FilterSelection {
            categories: categories.iter().cloned().collect(),
            year_range,
            mass_range,
        }
    }

    fn matches(&self, record: &Record) -> bool {
        // Category: must be mapped and selected. Records with no category
        // never pass, even with every category ticked.
        match record.category.as_deref() {
            Some(cat) if self.categories.contains(cat) => {}
            _ => return false,
        }

        // Mass: absent mass is excluded by this predicate. Callers needing
        // absent-mass records must union them back explicitly.
        match record.mass_g {
            Some(m) if self.mass_range.0 <= m && m <= self.mass_range.1 => {}
            _ => return false,
        }

        // Year: absent year is excluded.
        match record.year {
            Some(y) if self.year_range.0 <= y && y <= self.year_range.1 => {}
            _ => return false,
        }

        true
    }
}

/// Apply the selection to a dataset, returning a fresh derived view holding
/// exactly the matching records in their original order. The input dataset
/// is untouched.
pub fn apply(dataset: &Dataset, selection: &FilterSelection) -> Dataset {
    let records: Vec<Record> = dataset
        .records
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect();
    Dataset::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::assign_categories;
    use crate::data::model::DiscoveryType;

    fn rec(id: u64, code: &str, mass_g: Option<f64>, year: Option<i32>) -> Record {
        Record {
            id,
            name: format!("m{id}"),
            classification: code.to_string(),
            category: None,
            mass_g,
            discovery: DiscoveryType::Found,
            year,
            latitude: None,
            longitude: None,
        }
    }

    /// The three-record scenario used across the data-layer tests:
    /// (500 g, 2000, "L"), (1500 g, 2000, "H"), (3000 g, 1999, "CM").
    fn scenario() -> Dataset {
        let mut ds = Dataset::from_records(vec![
            rec(1, "L", Some(500.0), Some(2000)),
            rec(2, "H", Some(1500.0), Some(2000)),
            rec(3, "CM", Some(3000.0), Some(1999)),
        ]);
        assign_categories(&mut ds);
        ds
    }

    fn wide_open(ds: &Dataset) -> FilterSelection {
        FilterSelection::all(&ds.categories(), (1399, 2025), (0.0, 1e9))
    }

    #[test]
    fn year_interval_is_inclusive() {
        let ds = scenario();
        let mut sel = wide_open(&ds);
        sel.year_range = (2000, 2000);
        let out = apply(&ds, &sel);
        assert_eq!(out.len(), 2);
        assert_eq!(out.records[0].id, 1);
        assert_eq!(out.records[1].id, 2);
    }

    #[test]
    fn empty_category_selection_yields_empty_result() {
        let ds = scenario();
        let mut sel = wide_open(&ds);
        sel.categories.clear();
        assert!(apply(&ds, &sel).is_empty());
    }

    #[test]
    fn unmapped_category_never_passes() {
        let mut ds = scenario();
        ds.records.push(rec(4, "Iron, ungrouped", Some(100.0), Some(2000)));
        assign_categories(&mut ds);
        let sel = wide_open(&ds);
        let out = apply(&ds, &sel);
        assert!(out.records.iter().all(|r| r.id != 4));
    }

    #[test]
    fn absent_mass_is_excluded_by_the_mass_predicate() {
        // Documented side effect of the range check, flagged here on purpose.
        let mut ds = scenario();
        ds.records.push(rec(4, "L", None, Some(2000)));
        assign_categories(&mut ds);
        let out = apply(&ds, &wide_open(&ds));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn absent_year_is_excluded() {
        let mut ds = scenario();
        ds.records.push(rec(4, "L", Some(100.0), None));
        assign_categories(&mut ds);
        let out = apply(&ds, &wide_open(&ds));
        assert_eq!(out.len(), 3);
        // ...but the record still counts toward the canonical total.
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn filtering_is_pure_and_stable() {
        let ds = scenario();
        let mut sel = wide_open(&ds);
        sel.mass_range = (400.0, 2000.0);

        let a = apply(&ds, &sel);
        let b = apply(&ds, &sel);
        let ids_a: Vec<u64> = a.records.iter().map(|r| r.id).collect();
        let ids_b: Vec<u64> = b.records.iter().map(|r| r.id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(ids_a, vec![1, 2]); // insertion order preserved

        // The canonical dataset is untouched and never smaller than the view.
        assert_eq!(ds.len(), 3);
        assert!(a.len() <= ds.len());
    }
}
