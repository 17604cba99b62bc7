//! Planner service implementations

pub mod importer;
pub mod memory_store;
pub mod sqlite_store;

#[cfg(test)]
pub mod tests;

pub use importer::*;
pub use memory_store::*;
pub use sqlite_store::*;
