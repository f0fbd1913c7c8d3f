//! Filesystem helpers for the CLI.
//!
//! - [`file_list`] — recursive directory expansion (`walkdir`)
//! - [`file_stat`] — regular-file checks and mtime copying (`filetime`)

pub mod file_list;
pub mod file_stat;

pub use file_list::create_file_list;
pub use file_stat::{copy_mtime, is_directory, is_reg_file};
