use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::board::Board;
use super::dictionary::Dictionary;
use super::ranker::CandidateRanker;
use super::solver::{order_words, BacktrackingSolver, SearchFailure, SearchStats};
use super::word::Word;
use crate::config::GeneratorConfig;
use crate::error::Result;

/// A finished puzzle: the board with every word on it, plus what produced it
#[derive(Debug, Clone)]
pub struct Layout {
    pub board: Board,
    pub seed: u64,
    pub stats: SearchStats,
}

pub struct CrosswordGenerator {
    words: Vec<Word>,
    dictionary: Dictionary,
    config: GeneratorConfig,
}

impl CrosswordGenerator {
    /// Normalizes the input words and builds the dictionary from them plus any extra
    /// words in the config
    pub fn new<S: AsRef<str>>(words: &[S], config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let words = words
            .iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Vec<_>>();
        let dictionary = Dictionary::new(
            words
                .iter()
                .map(Word::as_str)
                .chain(config.extra_words.iter().map(String::as_str)),
        )?;

        Ok(Self {
            words,
            dictionary,
            config,
        })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs one search. The same words, board size, timeout and seed always give the
    /// same layout, as long as the search finishes inside the time budget
    pub fn generate(&self) -> std::result::Result<Layout, SearchFailure> {
        let seed = self.config.resolve_seed();
        let mut rng = StdRng::seed_from_u64(seed);
        let ordered = order_words(&self.words, &mut rng);

        info!(
            "Starting backtracking with {} words on a {}x{} board (seed {})",
            ordered.len(),
            self.config.board_size,
            self.config.board_size,
            seed
        );

        let solver = BacktrackingSolver::new(
            &self.dictionary,
            CandidateRanker::new(self.config.ranking),
            self.config.timeout(),
        );
        let mut board = Board::new(self.config.board_size);
        let stats = solver.solve(&ordered, &mut board, &mut rng)?;

        info!(
            "Backtracking completed in {:.2} seconds ({} placements tried, {} backtracks)",
            stats.elapsed.as_secs_f64(),
            stats.placements_tried,
            stats.backtracks
        );

        Ok(Layout { board, seed, stats })
    }
}
