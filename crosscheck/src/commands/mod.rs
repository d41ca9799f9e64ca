// crosscheck/src/commands/mod.rs

pub mod run;
pub mod test_connections;
