pub mod traits;

// API provider implementations
pub mod carbon_api;
