//! Token store: a single JSON file on local disk.

pub mod file;

pub use file::TokenFile;
