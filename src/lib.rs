//! dentry - Tag note viewer
//!
//! Reads plain-text notes that start with a `!Tagnotes` header line and
//! splits them into entries, each a block of text with a list of tags.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DentryError;
