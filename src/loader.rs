use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{CrosswordError, Result};

/// Names laid out when no word file is given
pub const DEFAULT_WORDS: [&str; 19] = [
    "David", "Debbie", "Beth", "Steve", "Sam", "Lila", "Wes", "Hannah", "Dave", "Paige",
    "Natalie", "Ben", "Kate", "Lena", "June", "Abby", "Rich", "William", "Sienna",
];

/// Parses a word list. Blank lines and `#` comments are skipped, numbered lines such as
/// `3: Hannah` keep only the text after the first colon, and every word is uppercased
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once(':') {
            Some((_, name)) => name.trim(),
            None => line,
        })
        .filter(|name| !name.is_empty())
        .map(str::to_uppercase)
        .collect()
}

pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CrosswordError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&text);
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
