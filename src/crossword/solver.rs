use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::board::Board;
use super::dictionary::Dictionary;
use super::ranker::{Candidate, CandidateRanker};
use super::trail::Trail;
use super::word::Word;

/// Why a search ended without laying out every word. Neither case is an error in the
/// engine, both just mean no layout was found
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    #[error("every placement combination was exhausted")]
    Exhausted,
    #[error("no layout found within {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Times the search stepped onto a word index
    pub states: usize,
    /// Placements written to the board
    pub placements_tried: usize,
    /// Placements undone after their branch failed
    pub backtracks: usize,
    pub elapsed: Duration,
}

/// Sorts words longest first and shuffles each group of equal length
pub fn order_words<R: Rng>(words: &[Word], rng: &mut R) -> Vec<Word> {
    let mut ordered = words.to_vec();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut start = 0;
    while start < ordered.len() {
        let len = ordered[start].len();
        let end = ordered[start..]
            .iter()
            .position(|w| w.len() != len)
            .map_or(ordered.len(), |offset| start + offset);
        ordered[start..end].shuffle(rng);
        start = end;
    }
    ordered
}

/// One level of the search: the ranked candidates for a word and how far through them we are
struct Frame {
    candidates: Vec<Candidate>,
    cursor: usize,
    /// Whether the candidate at `cursor - 1` is currently on the board
    applied: bool,
}

pub struct BacktrackingSolver<'a> {
    dictionary: &'a Dictionary,
    ranker: CandidateRanker,
    timeout: Duration,
}

impl<'a> BacktrackingSolver<'a> {
    pub fn new(dictionary: &'a Dictionary, ranker: CandidateRanker, timeout: Duration) -> Self {
        Self {
            dictionary,
            ranker,
            timeout,
        }
    }

    /// Places `words` on `board` in the given order with a depth-first search.
    ///
    /// The search keeps an explicit stack of frames, one per word already being tried, so
    /// its depth does not depend on the call stack. The clock is checked every time the
    /// search moves on to the next word. On success the board holds every word; after a
    /// failure its contents are consistent but meaningless.
    pub fn solve<R: Rng>(
        &self,
        words: &[Word],
        board: &mut Board,
        rng: &mut R,
    ) -> Result<SearchStats, SearchFailure> {
        let start = Instant::now();
        let mut stats = SearchStats::default();
        let mut trail = Trail::new();
        let mut frames: Vec<Frame> = Vec::with_capacity(words.len());
        let mut descend = true;

        loop {
            if descend {
                stats.states += 1;
                if start.elapsed() >= self.timeout {
                    warn!("Timeout after {:?}, stopping search", self.timeout);
                    return Err(SearchFailure::Timeout(self.timeout));
                }

                let index = frames.len();
                if index == words.len() {
                    stats.elapsed = start.elapsed();
                    return Ok(stats);
                }

                let word = &words[index];
                debug!("Trying to place word {}/{}: {}", index + 1, words.len(), word);
                let candidates = self.ranker.rank(word, board, self.dictionary, rng);
                debug!("Found {} valid placements for {}", candidates.len(), word);

                frames.push(Frame {
                    candidates,
                    cursor: 0,
                    applied: false,
                });
            }

            let index = match frames.len().checked_sub(1) {
                Some(index) => index,
                None => return Err(SearchFailure::Exhausted),
            };
            let frame = &mut frames[index];

            if frame.applied {
                trail.rewind(board);
                frame.applied = false;
                stats.backtracks += 1;
            }

            match frame.candidates.get(frame.cursor).copied() {
                Some(candidate) => {
                    frame.cursor += 1;
                    frame.applied = true;
                    let written = board.place_word(&words[index], candidate.pos, candidate.dir);
                    trail.record(written);
                    stats.placements_tried += 1;
                    descend = true;
                }
                None => {
                    trace!("Could not place {}, backtracking", words[index]);
                    frames.pop();
                    if frames.is_empty() {
                        stats.elapsed = start.elapsed();
                        debug!("Search exhausted after {:?}", stats.elapsed);
                        return Err(SearchFailure::Exhausted);
                    }
                    descend = false;
                }
            }
        }
    }
}
