//! Configuration loader implementations

pub(crate) mod file;

pub use file::{FileLoader, load_config};
