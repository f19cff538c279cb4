use std::collections::BTreeMap;

use super::model::{Dataset, DiscoveryType};

/// How many records the heaviest-meteorites view keeps.
pub const TOP_MASS_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Time series: landings per year, split by discovery type
// ---------------------------------------------------------------------------

/// Counts for a single year, zero-filled for the missing discovery type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCounts {
    pub year: i32,
    pub fell: u64,
    pub found: u64,
}

/// Group records with a present year by (year, discovery type) and pivot to
/// one row per year. Only years with at least one record appear; rows come
/// out sorted by year.
pub fn landings_over_time(dataset: &Dataset) -> Vec<YearCounts> {
    let mut by_year: BTreeMap<i32, (u64, u64)> = BTreeMap::new();

    for record in &dataset.records {
        let Some(year) = record.year else { continue };
        let entry = by_year.entry(year).or_default();
        match record.discovery {
            DiscoveryType::Fell => entry.0 += 1,
            DiscoveryType::Found => entry.1 += 1,
            DiscoveryType::Unknown => {}
        }
    }

    by_year
        .into_iter()
        .map(|(year, (fell, found))| YearCounts { year, fell, found })
        .collect()
}

// ---------------------------------------------------------------------------
// Category totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Count records per present category, sorted descending by count. Ties keep
/// first-encountered order (the sort is stable). Records without a category
/// contribute nothing.
pub fn category_totals(dataset: &Dataset) -> Vec<CategoryCount> {
    let mut order: Vec<CategoryCount> = Vec::new();

    for record in &dataset.records {
        let Some(cat) = record.category.as_deref() else {
            continue;
        };
        match order.iter_mut().find(|c| c.category == cat) {
            Some(entry) => entry.count += 1,
            None => order.push(CategoryCount {
                category: cat.to_string(),
                count: 1,
            }),
        }
    }

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order
}

// ---------------------------------------------------------------------------
// Top-N heaviest meteorites within a year window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TopMassEntry {
    pub name: String,
    pub mass_kg: f64,
}

/// The heaviest qualifying meteorites: present mass, present year inside the
/// inclusive interval. Sorted descending by mass, capped at
/// [`TOP_MASS_LIMIT`], converted to kilograms, then re-sorted ascending so
/// the smallest of the top ten renders first. An empty qualifying set yields
/// an empty view.
pub fn top_by_mass(dataset: &Dataset, year_range: (i32, i32)) -> Vec<TopMassEntry> {
    let mut qualifying: Vec<(&str, f64)> = dataset
        .records
        .iter()
        .filter_map(|r| match (r.mass_g, r.year) {
            (Some(mass), Some(year))
                if year_range.0 <= year && year <= year_range.1 =>
            {
                Some((r.name.as_str(), mass))
            }
            _ => None,
        })
        .collect();

    qualifying.sort_by(|a, b| b.1.total_cmp(&a.1));
    qualifying.truncate(TOP_MASS_LIMIT);

    let mut top: Vec<TopMassEntry> = qualifying
        .into_iter()
        .map(|(name, mass_g)| TopMassEntry {
            name: name.to_string(),
            mass_kg: mass_g / 1000.0,
        })
        .collect();

    top.sort_by(|a, b| a.mass_kg.total_cmp(&b.mass_kg));
    top
}
