// src/config/mod.rs

//! Configuration loading and validation for mazewalk.
//!
//! - `model.rs` defines the TOML-backed data model.
//! - `loader.rs` reads a config file from disk or a string.
//! - `validate.rs` turns a raw file into a checked [`ConfigFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_config};
pub use model::{ConfigFile, LoggingSection, RawConfigFile, SolverConfig, SolverSection};
