// crosscheck-core/src/application/mod.rs

pub mod runner;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use crosscheck_core::application::{run_validations, RunReport};`
// sans avoir à connaître la structure interne des fichiers.

pub use runner::{RunReport, run_validations};
