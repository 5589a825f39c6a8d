//! Utility functions for the dotdeck shell.

mod formatting;

pub use formatting::{format_count, format_memory_mb, format_source_size, get_current_memory_mb};
