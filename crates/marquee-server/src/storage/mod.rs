//! Storage layer
//!
//! Everything lives in process memory; a restart resets the catalog to its
//! seed state.

pub mod memory;
pub mod seed;

pub use memory::CatalogStore;
