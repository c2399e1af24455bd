//! Word list loading utilities

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Load every `length`-letter word from a file
///
/// Lines are trimmed; only lines of exactly `length` alphabetic characters
/// are kept, lowercased. Everything else is skipped silently.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_simulator::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let start = Instant::now();
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_words(&content, length);

    log::debug!(
        "loaded {} words of length {length} from {} in {:.3}ms",
        words.len(),
        path.as_ref().display(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(words)
}

/// Parse newline-separated text, keeping `length`-letter words
#[must_use]
pub fn parse_words(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() == length)
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_simulator::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "sl4te", "tool"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
