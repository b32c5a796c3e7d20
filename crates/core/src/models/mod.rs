pub mod activity;
pub mod date_range;
pub mod indicator;
pub mod pagination;
pub mod query;
pub mod settings;
pub mod token;
