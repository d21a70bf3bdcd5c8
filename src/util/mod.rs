//! Filesystem helpers for the benchmark harness.
//!
//! - [`file_list`]: directory enumeration ([`create_file_list`])

pub mod file_list;

pub use file_list::create_file_list;
