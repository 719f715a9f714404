//! JSON file storage for both tools.
//!
//! Each process owns its storage file for the whole run. There is no locking:
//! two processes pointed at the same file race and the last save wins, so run
//! a single instance per file.

mod json_file;
mod repository;

pub use json_file::*;
pub use repository::*;
