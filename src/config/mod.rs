// src/config/mod.rs

//! Configuration layer.
//!
//! - [`model`] holds the serde structs mapping `Runrelay.toml`.
//! - [`loader`] reads and deserializes the file.
//! - [`validate`] performs semantic checks after deserialization.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_or_default};
pub use model::{ConfigFile, RuntimeSection};
