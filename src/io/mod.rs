//! File input/output for the dotdeck shell.

mod dot_file;

pub use dot_file::{load_dot_file, save_dot_file, MAX_DOT_FILE_BYTES};
