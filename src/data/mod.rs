/// Data layer: core types, loading, filtering, and chart projection.
///
/// Architecture:
/// ```text
///  remote .csv
///       │
///       ▼
///  ┌──────────┐
///  │  loader   │  fetch + parse → Dataset, FilterDomains
///  └──────────┘
///       │
///       ▼
///  ┌──────────┐
///  │  Dataset  │  Vec<Record>, control domains
///  └──────────┘
///       │
///       ▼
///  ┌──────────┐
///  │  filter   │  FilterState predicates → ChartSpec
///  └──────────┘
/// ```

pub mod chart;
pub mod filter;
pub mod loader;
pub mod model;
