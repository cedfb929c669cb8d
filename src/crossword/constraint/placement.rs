use crate::crossword::board::{Board, Tile};
use crate::crossword::dictionary::Dictionary;
use crate::crossword::util::{Direction, Position};
use crate::crossword::word::Word;

/// Decides whether a word may legally be written at a position. All checks are pure reads
pub struct PlacementValidator<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(board: &'a Board, dictionary: &'a Dictionary) -> Self {
        Self { board, dictionary }
    }

    pub fn can_place(&self, word: &Word, pos: Position, dir: Direction) -> bool {
        self.fits(word, pos, dir)
            && self.letters_agree(word, pos, dir)
            && self.cross_words_valid(word, pos, dir)
            && self.ends_isolated(word, pos, dir)
    }

    /// The whole span lies on the board. Empty words have no span and never fit
    pub fn fits(&self, word: &Word, pos: Position, dir: Direction) -> bool {
        let size = self.board.size();
        !word.is_empty() && pos[dir.flip()] < size && pos[dir] + word.len() <= size
    }

    /// Every filled cell under the word already holds the word's letter there
    fn letters_agree(&self, word: &Word, pos: Position, dir: Direction) -> bool {
        word.letters().iter().enumerate().all(|(i, &c)| {
            match self.board[pos.step_n(i, dir)] {
                Tile::Letter(l) => l == c,
                Tile::Empty => true,
            }
        })
    }

    /// Each newly written letter forms a dictionary word along the perpendicular axis,
    /// unless it touches nothing on that axis
    fn cross_words_valid(&self, word: &Word, pos: Position, dir: Direction) -> bool {
        word.letters().iter().enumerate().all(|(i, &c)| {
            let curr = pos.step_n(i, dir);
            if self.board.is_letter(curr) {
                return true;
            }
            let cross = self.board.perpendicular_word(curr, dir);
            cross.is_single() || self.dictionary.contains(&cross.with_letter(c))
        })
    }

    /// The cells just before the start and just after the end are empty or off the board
    fn ends_isolated(&self, word: &Word, pos: Position, dir: Direction) -> bool {
        let before_clear = match pos.prev(dir) {
            Some(p) => !self.board.is_letter(p),
            None => true,
        };
        before_clear && !self.board.is_letter(pos.step_n(word.len(), dir))
    }
}
