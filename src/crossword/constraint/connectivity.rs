use crate::crossword::board::Board;
use crate::crossword::util::{Direction, Position};
use crate::crossword::word::Word;

/// Requires every word after the first to touch the cluster already on the board,
/// either by sharing a letter or by sitting orthogonally next to one
pub struct ConnectivityRule<'a> {
    board: &'a Board,
}

impl<'a> ConnectivityRule<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn connects(
        &self,
        word: &Word,
        pos: Position,
        dir: Direction,
        placed_count: usize,
    ) -> bool {
        if placed_count == 0 {
            return true;
        }

        word.letters().iter().enumerate().any(|(i, &c)| {
            let curr = pos.step_n(i, dir);
            if self.board.letter_at(curr) == Some(c) {
                return true;
            }
            // Diagonal contact does not count
            curr.adjacent(self.board.size())
                .into_iter()
                .any(|n| self.board.is_letter(n))
        })
    }
}
