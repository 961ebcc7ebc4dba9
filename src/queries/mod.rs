//! Pure derivations over catalog collections: text filtering, partitioning,
//! calendar-day bucketing and ordering.

pub mod partition;
pub mod schedule;
pub mod search;
pub mod sort;

pub use partition::{partition_by, Category, Partition};
pub use schedule::{on_day, upcoming, Dated};
pub use search::{filter_by_query, search_catalog, SearchHit, Searchable};
