// crosscheck-core/src/infrastructure/config/mod.rs

pub mod connections;
pub mod validations;

pub use connections::{ConnectionProfile, load_connections};
pub use validations::load_validations;
