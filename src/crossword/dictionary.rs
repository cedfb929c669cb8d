use std::collections::HashSet;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};

use crate::error::Result;

/// Word list used to validate every perpendicular word formed on the board.
///
/// Membership is an exact, case-insensitive whole-word match. A sorted `fst` set is kept
/// next to the hash set so prefix queries are available without changing the lookup path.
pub struct Dictionary {
    words: HashSet<String>,
    prefixes: Set<Vec<u8>>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect::<HashSet<_>>();

        // fst needs its keys in lexicographic order
        let mut sorted = words.iter().map(String::as_str).collect::<Vec<_>>();
        sorted.sort_unstable();
        let prefixes = Set::from_iter(sorted)?;

        Ok(Self { words, prefixes })
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.chars().all(|c| !c.is_lowercase()) {
            return self.words.contains(word);
        }
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks if any word in the dictionary starts with `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_uppercase();
        let matcher = Str::new(&prefix).starts_with();
        let mut stream = self.prefixes.search(matcher).into_stream();
        stream.next().is_some()
    }

    /// All words starting with `prefix`, in lexicographic order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_uppercase();
        let matcher = Str::new(&prefix).starts_with();
        let mut stream = self.prefixes.search(matcher).into_stream();
        let mut found = Vec::new();
        while let Some(key) = stream.next() {
            found.push(String::from_utf8_lossy(key).into_owned());
        }
        found
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.words.len())
            .finish()
    }
}
