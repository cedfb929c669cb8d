use std::cmp::Reverse;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::constraint::{ConnectivityRule, PlacementValidator};
use super::dictionary::Dictionary;
use super::util::{Direction, Position};
use super::word::Word;

/// How legal candidates are ordered before the solver tries them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingStrategy {
    /// Most shared letters first, ties broken at random
    #[default]
    Intersections,
    /// Most shared letters first, then closest to the centre of the board, then random
    IntersectionsThenCenter,
}

impl std::str::FromStr for RankingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intersections" => Ok(Self::Intersections),
            "intersections-then-center" => Ok(Self::IntersectionsThenCenter),
            other => Err(format!(
                "unknown ranking strategy '{other}' \
                 (expected intersections or intersections-then-center)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Position,
    pub dir: Direction,
    /// Letters of the word that land on an identical letter already on the board
    pub intersections: usize,
    /// Manhattan distance from the middle of the word to the centre of the board
    pub center_distance: usize,
    tie_break: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateRanker {
    strategy: RankingStrategy,
}

impl CandidateRanker {
    pub fn new(strategy: RankingStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> RankingStrategy {
        self.strategy
    }

    /// Enumerates every (row, col, direction) on the board, keeps the placements that are
    /// both legal and connected, and returns them best first.
    ///
    /// One random draw is taken per kept candidate, in enumeration order, so the result
    /// depends only on the board and the generator state.
    pub fn rank<R: Rng>(
        &self,
        word: &Word,
        board: &Board,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Vec<Candidate> {
        let validator = PlacementValidator::new(board, dictionary);
        let connectivity = ConnectivityRule::new(board);
        let placed = board.placements().len();
        let size = board.size();

        let mut candidates = Vec::new();
        for row in 0..size {
            for col in 0..size {
                for &dir in Direction::iter() {
                    let pos = Position { row, col };
                    if !validator.can_place(word, pos, dir)
                        || !connectivity.connects(word, pos, dir, placed)
                    {
                        continue;
                    }
                    candidates.push(Candidate {
                        pos,
                        dir,
                        intersections: count_intersections(board, word, pos, dir),
                        center_distance: center_distance(size, word, pos, dir),
                        tie_break: rng.gen(),
                    });
                }
            }
        }

        match self.strategy {
            RankingStrategy::Intersections => {
                candidates.sort_by_key(|c| (Reverse(c.intersections), c.tie_break))
            }
            RankingStrategy::IntersectionsThenCenter => candidates
                .sort_by_key(|c| (Reverse(c.intersections), c.center_distance, c.tie_break)),
        }
        candidates
    }
}

pub fn count_intersections(board: &Board, word: &Word, pos: Position, dir: Direction) -> usize {
    word.letters()
        .iter()
        .enumerate()
        .filter(|&(i, &c)| board.letter_at(pos.step_n(i, dir)) == Some(c))
        .count()
}

pub fn center_distance(size: usize, word: &Word, pos: Position, dir: Direction) -> usize {
    let center = Position {
        row: size / 2,
        col: size / 2,
    };
    pos.step_n(word.len() / 2, dir).manhattan(center)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{center_distance, CandidateRanker, RankingStrategy};
    use crate::crossword::board::Board;
    use crate::crossword::dictionary::Dictionary;
    use crate::crossword::util::{Direction, Position};
    use crate::crossword::word::Word;

    #[test]
    fn test_first_word_candidates_cover_board() {
        let dict = Dictionary::new(["CAT"]).unwrap();
        let board = Board::new(5);
        let ranker = CandidateRanker::default();
        let mut rng = StdRng::seed_from_u64(1);
        let cands = ranker.rank(&Word::new("CAT"), &board, &dict, &mut rng);
        // 5 rows x 3 starting columns across, and the same down
        assert_eq!(cands.len(), 30);
        assert!(cands.iter().all(|c| c.intersections == 0));
    }

    #[test]
    fn test_intersections_rank_first() {
        let dict = Dictionary::new(["CAT", "ARC"]).unwrap();
        let mut board = Board::new(10);
        board.place_word(&Word::new("CAT"), Position::new(4, 3), Direction::Across);
        let ranker = CandidateRanker::new(RankingStrategy::Intersections);
        let mut rng = StdRng::seed_from_u64(7);
        let cands = ranker.rank(&Word::new("ARC"), &board, &dict, &mut rng);

        assert!(!cands.is_empty());
        assert_eq!(cands[0].intersections, 1);
        assert!(cands
            .windows(2)
            .all(|w| w[0].intersections >= w[1].intersections));
    }

    #[test]
    fn test_same_seed_same_order() {
        let dict = Dictionary::new(["CAT", "ARC"]).unwrap();
        let mut board = Board::new(10);
        board.place_word(&Word::new("CAT"), Position::new(4, 3), Direction::Across);
        let ranker = CandidateRanker::default();
        let a = ranker.rank(&Word::new("ARC"), &board, &dict, &mut StdRng::seed_from_u64(3));
        let b = ranker.rank(&Word::new("ARC"), &board, &dict, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_center_strategy_prefers_middle() {
        let dict = Dictionary::new(["CAT"]).unwrap();
        let board = Board::new(9);
        let ranker = CandidateRanker::new(RankingStrategy::IntersectionsThenCenter);
        let mut rng = StdRng::seed_from_u64(11);
        let cands = ranker.rank(&Word::new("CAT"), &board, &dict, &mut rng);
        assert_eq!(cands[0].center_distance, 0);
        assert!(cands
            .windows(2)
            .all(|w| w[0].center_distance <= w[1].center_distance));
    }

    #[test]
    fn test_center_distance_uses_word_midpoint() {
        let word = Word::new("CAT");
        assert_eq!(center_distance(9, &word, Position::new(4, 3), Direction::Across), 0);
        assert_eq!(center_distance(9, &word, Position::new(0, 0), Direction::Down), 7);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!(
            "intersections".parse::<RankingStrategy>().unwrap(),
            RankingStrategy::Intersections
        );
        assert_eq!(
            "intersections-then-center".parse::<RankingStrategy>().unwrap(),
            RankingStrategy::IntersectionsThenCenter
        );
        assert!("best".parse::<RankingStrategy>().is_err());
        assert!("center".parse::<RankingStrategy>().is_err());
    }
}
