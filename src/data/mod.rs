/// Data layer: core types, loading/cleaning, classification, filtering,
/// and the derived aggregate views.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean → Dataset, total count
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  static code→category lookup (applied once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  category/year/mass predicates → derived Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  time series, category totals, top-N by mass
///   └──────────┘
/// ```

pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod loader;
pub mod model;
