use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Static classification → category lookup
// ---------------------------------------------------------------------------

/// Cleaned classification code → coarse category. Many-to-one; codes absent
/// from this table yield no category. Keys are matched against the *cleaned*
/// code (digits stripped, trimmed).
const CLASS_CATEGORIES: &[(&str, &str)] = &[
    // Chondrites: carbonaceous
    ("CB", "Carbonaceous Chondrite"),
    ("CH", "Carbonaceous Chondrite"),
    ("CK", "Carbonaceous Chondrite"),
    ("CM", "Carbonaceous Chondrite"),
    ("CR", "Carbonaceous Chondrite"),
    ("CV", "Carbonaceous Chondrite"),
    ("CO", "Carbonaceous Chondrite"),
    ("CI", "Carbonaceous Chondrite"),
    // Chondrites: ordinary
    ("H", "Ordinary Chondrite"),
    ("L", "Ordinary Chondrite"),
    ("LL", "Ordinary Chondrite"),
    // Chondrites: Rumuruti
    ("R", "Rumuruti Chondrite"),
    // Chondrites: enstatite
    ("EH", "Enstatite Chondrite"),
    ("EL", "Enstatite Chondrite"),
    // Achondrites: primitive
    ("Lodranite", "Primitive Achondrite"),
    ("Acapulcoite", "Primitive Achondrite"),
    ("Winonaite", "Primitive Achondrite"),
    // Achondrites: Martian
    ("Shergottite", "Martian"),
    ("Nakhlite", "Martian"),
    ("Chassignite", "Martian"),
    // Achondrites: aubrites
    ("Aubrite", "Aubrite"),
    // Achondrites: ureilites
    ("Ureilite", "Ureilite"),
    // Achondrites: HED
    ("Howardite", "HED"),
    ("Eucrite", "HED"),
    ("Diogenite", "HED"),
    // Achondrites: angrites
    ("Angrite", "Angrite"),
    // Achondrites: brachinites
    ("Brachinite", "Brachinite"),
    // Achondrites: lunar
    ("Feldspathic Breccia", "Lunar"),
    ("Basaltic", "Lunar"),
    ("Polymict", "Lunar"),
    // Iron meteorites
    ("IAB", "Iron Meteorite"),
    ("IIAB", "Iron Meteorite"),
    ("IIIAB", "Iron Meteorite"),
    ("IVAB", "Iron Meteorite"),
    // Stony-iron meteorites
    ("Pallasite", "Stony-Iron"),
    ("Mesosiderite", "Stony-Iron"),
];

/// The lookup, materialised once and read-only for the life of the process.
pub fn class_lookup() -> &'static BTreeMap<&'static str, &'static str> {
    static LOOKUP: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    LOOKUP.get_or_init(|| CLASS_CATEGORIES.iter().copied().collect())
}

/// Category for a cleaned classification code, or `None` if unmapped.
pub fn category_for(cleaned_code: &str) -> Option<&'static str> {
    class_lookup().get(cleaned_code).copied()
}

/// Number of raw codes in the lookup (shown in the sidebar blurb).
pub fn lookup_size() -> usize {
    class_lookup().len()
}

/// The first `n` (code, category) pairs, in key order, for the sidebar blurb.
pub fn lookup_preview(n: usize) -> Vec<(&'static str, &'static str)> {
    class_lookup().iter().take(n).map(|(k, v)| (*k, *v)).collect()
}

/// Derive the category column for every record. Deterministic and
/// idempotent; unmapped codes get `None` rather than an error.
pub fn assign_categories(dataset: &mut Dataset) {
    for record in &mut dataset.records {
        record.category = category_for(&record.classification).map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DiscoveryType, Record};

    fn rec(id: u64, classification: &str) -> Record {
        Record {
            id,
            name: format!("m{id}"),
            classification: classification.to_string(),
            category: None,
            mass_g: None,
            discovery: DiscoveryType::Found,
            year: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn known_codes_map_to_their_category() {
        assert_eq!(category_for("L"), Some("Ordinary Chondrite"));
        assert_eq!(category_for("CM"), Some("Carbonaceous Chondrite"));
        assert_eq!(category_for("Pallasite"), Some("Stony-Iron"));
    }

    #[test]
    fn unmapped_codes_yield_no_category() {
        assert_eq!(category_for("Iron, ungrouped"), None);
        assert_eq!(category_for(""), None);
    }

    #[test]
    fn assignment_is_idempotent() {
        let mut ds = Dataset::from_records(vec![rec(1, "L"), rec(2, "H/"), rec(3, "CM")]);
        assign_categories(&mut ds);
        let first: Vec<Option<String>> =
            ds.records.iter().map(|r| r.category.clone()).collect();
        assign_categories(&mut ds);
        let second: Vec<Option<String>> =
            ds.records.iter().map(|r| r.category.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0].as_deref(), Some("Ordinary Chondrite"));
        // "H/" (cleaned "H4/5") is not a key in the lookup
        assert_eq!(first[1], None);
        assert_eq!(first[2].as_deref(), Some("Carbonaceous Chondrite"));
    }

    #[test]
    fn lookup_is_complete() {
        assert_eq!(lookup_size(), 36);
        assert_eq!(lookup_preview(2).len(), 2);
    }
}
