//! Pure derivation services over the alert collection.

pub mod pagination;
pub mod summary;

pub use summary::SummaryCounts;
