//! Word lists for the simulation
//!
//! Dictionaries are plain text files with one word per line.

pub mod loader;

pub use loader::{load_from_file, words_from_slice};

/// Dictionary path used when none is given
pub const DEFAULT_DICTIONARY: &str = "dictionary.txt";
