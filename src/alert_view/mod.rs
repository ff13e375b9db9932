//! Alert-view domain: records, severity classification, and the pure
//! derivations (pagination, summary counts) the dashboard renders from.

pub mod domain;
pub mod services;
