//! Domain primitives shared by the persistence and HTTP layers.

pub mod employee;
pub mod error;
pub mod types;
