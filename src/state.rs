use crate::color::{ChartColors, ColorMap};
use crate::data::filter::{self, FilterSelection};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Fixed bounds of the year slider (the source data spans 1399–present).
pub const YEAR_SLIDER_MIN: i32 = 1399;
pub const YEAR_SLIDER_MAX: i32 = 2025;

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Canonical dataset: cleaned and classified once, never mutated.
    pub dataset: Dataset,

    /// Record count observed before any filtering.
    pub total_records: usize,

    /// Current sidebar selection.
    pub selection: FilterSelection,

    /// Derived view matching the selection (recomputed on interaction).
    pub filtered: Dataset,

    /// Categories present in the data, sorted, for the multiselect.
    pub available_categories: Vec<String>,

    /// Observed (min, max) mass in grams, bounds of the mass sliders.
    pub mass_bounds: (f64, f64),

    /// Adjustable chart colors.
    pub colors: ChartColors,

    /// Category → colour for the map view.
    pub color_map: ColorMap,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state around a freshly loaded canonical dataset.
    pub fn new(dataset: Dataset, total_records: usize) -> Self {
        let available_categories = dataset.categories();
        let mass_bounds = dataset.mass_bounds().unwrap_or((0.0, 0.0));
        let selection = FilterSelection::all(
            &available_categories,
            (YEAR_SLIDER_MIN, YEAR_SLIDER_MAX),
            mass_bounds,
        );
        let filtered = filter::apply(&dataset, &selection);
        let color_map = ColorMap::new(&available_categories);

        AppState {
            dataset,
            total_records,
            selection,
            filtered,
            available_categories,
            mass_bounds,
            colors: ChartColors::default(),
            color_map,
            status_message: None,
        }
    }

    /// Swap in a newly opened dataset, resetting the selection.
    pub fn set_dataset(&mut self, dataset: Dataset, total_records: usize) {
        let colors = self.colors;
        *self = AppState::new(dataset, total_records);
        self.colors = colors;
    }

    /// Recompute the filtered view after a selection change.
    pub fn refilter(&mut self) {
        self.filtered = filter::apply(&self.dataset, &self.selection);
    }

    /// Toggle a single category in the multiselect.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.selection.categories.remove(category) {
            self.selection.categories.insert(category.to_string());
        }
        self.refilter();
    }

    /// Select every available category.
    pub fn select_all_categories(&mut self) {
        self.selection.categories = self.available_categories.iter().cloned().collect();
        self.refilter();
    }

    /// Clear the category selection. With nothing selected, no record
    /// passes the category predicate and the view is empty.
    pub fn select_no_categories(&mut self) {
        self.selection.categories.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::assign_categories;
    use crate::data::model::{DiscoveryType, Record};

    fn sample_state() -> AppState {
        let mut ds = Dataset::from_records(vec![
            Record {
                id: 1,
                name: "a".into(),
                classification: "L".into(),
                category: None,
                mass_g: Some(500.0),
                discovery: DiscoveryType::Found,
                year: Some(2000),
                latitude: None,
                longitude: None,
            },
            Record {
                id: 2,
                name: "b".into(),
                classification: "CM".into(),
                category: None,
                mass_g: Some(3000.0),
                discovery: DiscoveryType::Fell,
                year: Some(1999),
                latitude: None,
                longitude: None,
            },
        ]);
        assign_categories(&mut ds);
        let total = ds.len();
        AppState::new(ds, total)
    }

    #[test]
    fn fresh_state_selects_everything() {
        let state = sample_state();
        assert_eq!(state.total_records, 2);
        assert_eq!(state.filtered.len(), 2);
        assert_eq!(state.mass_bounds, (500.0, 3000.0));
        assert_eq!(state.available_categories.len(), 2);
    }

    #[test]
    fn toggling_a_category_refilters() {
        let mut state = sample_state();
        state.toggle_category("Carbonaceous Chondrite");
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered.records[0].id, 1);

        state.select_no_categories();
        assert!(state.filtered.is_empty());

        state.select_all_categories();
        assert_eq!(state.filtered.len(), 2);
    }
}
