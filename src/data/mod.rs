/// Data layer: core types, loading, filtering and ranking.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<Record>, distinct values per column
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  four equality constraints → filtered Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   rank   │  group by column, count → top-N entries
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod rank;
