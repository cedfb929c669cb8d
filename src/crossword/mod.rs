pub mod board;
pub mod constraint;
pub mod dictionary;
pub mod generator;
pub mod ranker;
pub mod solver;
pub mod trail;
pub mod util;
pub mod word;

/// Board edge length used when nothing else is configured
pub const DEFAULT_BOARD_SIZE: usize = 20;
/// Wall-clock budget for one search, in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

pub use self::board::{Board, Placement, Tile};
pub use self::dictionary::Dictionary;
pub use self::generator::{CrosswordGenerator, Layout};
pub use self::ranker::RankingStrategy;
pub use self::solver::{SearchFailure, SearchStats};
pub use self::util::{Direction, Position};
pub use self::word::Word;
