//! Application use cases.

pub mod dashboard;
pub mod request_sequence;

pub use dashboard::DashboardController;
pub use request_sequence::RequestSequence;
