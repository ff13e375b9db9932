//! Application layer: session state, intents, DTOs, and the dashboard
//! controller use case.

pub mod dto;
pub mod state;
pub mod use_cases;
