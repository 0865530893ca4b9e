//! Marquee Types - Pure type definitions for the movie catalog
//!
//! This crate contains only serde data types with no async runtime
//! dependencies, shared between the server and any future clients.

pub mod director;
pub mod movie;

pub use director::*;
pub use movie::*;
