use std::fmt;
use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::util::{Direction, Position};
use super::word::Word;
use crate::error::{CrosswordError, Result};
use crate::utils::serialization;

/// Marks the scanned cell inside a [`CrossWord`] while its letter is still unknown
pub const PLACEHOLDER: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Letter(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub pos: Position,
    pub dir: Direction,
}

impl Placement {
    /// Cells covered by the placement together with the letter written to each
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(move |(i, c)| (self.pos.step_n(i, self.dir), c))
    }

    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.word, self.dir, self.pos)
    }
}

/// The run of letters crossing a cell, perpendicular to the axis of a placement.
/// The crossed cell itself is left open until a candidate letter is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossWord {
    before: Vec<char>,
    after: Vec<char>,
}

impl CrossWord {
    /// Total length including the open cell
    pub(crate) fn len(&self) -> usize {
        self.before.len() + 1 + self.after.len()
    }

    /// True when no letters touch the cell along the perpendicular axis
    pub fn is_single(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    /// The cross word with the open cell filled by `letter`
    pub fn with_letter(&self, letter: char) -> String {
        let mut word = String::with_capacity(self.len());
        word.extend(self.before.iter());
        word.push(letter);
        word.extend(self.after.iter());
        word
    }
}

impl fmt::Display for CrossWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.with_letter(PLACEHOLDER))
    }
}

/// Smallest rectangle holding every occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl BoundingBox {
    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }
}

/// The part of a layout file needed to rebuild a board. `report::LayoutDocument` writes
/// these fields alongside the seed and rendered grid, which are ignored on load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLayout {
    pub size: usize,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Actual letters on the board
    state: Array2<Tile>,
    /// Words placed on the board, in commit order
    placements: Vec<Placement>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            state: Array2::from_elem((size, size), Tile::Empty),
            placements: Vec::new(),
        }
    }

    /// Rebuilds a board by replaying placements in order. Every write is checked so a
    /// sequence that overwrites a letter is rejected instead of silently applied
    pub fn from_placements(size: usize, placements: &[Placement]) -> Result<Self> {
        let mut board = Self::new(size);
        for p in placements {
            board.try_place_word(&Word::new(&p.word), p.pos, p.dir)?;
        }
        Ok(board)
    }

    /// Loads a layout written by `report::LayoutDocument` and replays its placements
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let saved: SavedLayout = serialization::load_from_disk(path)?;
        Self::from_placements(saved.size, &saved.placements)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Tile> {
        self.tile(Position { row, col })
            .ok_or(CrosswordError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
    }

    /// Overwrites a cell without recording a [`Placement`], so afterwards the grid no
    /// longer matches [`Board::placements`]. Use [`Board::try_place_word`] to add words
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> Result<()> {
        let pos = Position { row, col };
        if !self.contains(pos) {
            return Err(CrosswordError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        self[pos] = Tile::Letter(letter);
        Ok(())
    }

    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.state.get([pos.row, pos.col]).copied()
    }

    /// Letter at the position, `None` for empty or off-board cells
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        match self.tile(pos) {
            Some(Tile::Letter(l)) => Some(l),
            _ => None,
        }
    }

    /// Checks if the tile at the given position holds a letter
    pub fn is_letter(&self, pos: Position) -> bool {
        self.letter_at(pos).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.state.iter().all(|t| *t == Tile::Empty)
    }

    /// Builds the word crossing `pos` along the axis orthogonal to `dir`. Scans outward in
    /// both directions until an empty cell or the edge of the board is hit
    pub fn perpendicular_word(&self, pos: Position, dir: Direction) -> CrossWord {
        let axis = dir.flip();

        let mut before = Vec::new();
        let mut curr = pos.prev(axis);
        while let Some(p) = curr {
            match self.letter_at(p) {
                Some(l) => before.push(l),
                None => break,
            }
            curr = p.prev(axis);
        }
        before.reverse();

        let mut after = Vec::new();
        let mut p = pos.next(axis);
        while let Some(l) = self.letter_at(p) {
            after.push(l);
            p = p.next(axis);
        }

        CrossWord { before, after }
    }

    /// Places the word on the board. Assumes that the word is a valid placement.
    /// Returns the cells that were empty before and now hold a letter
    pub fn place_word(&mut self, word: &Word, pos: Position, dir: Direction) -> Vec<Position> {
        let mut written = Vec::with_capacity(word.len());
        for (i, &c) in word.letters().iter().enumerate() {
            let curr_pos = pos.step_n(i, dir);
            match self[curr_pos] {
                // Letter should have already existed so just make sure we dont change it
                Tile::Letter(l) => {
                    assert!(l == c, "Placement would overwrite the current letter")
                }
                Tile::Empty => {
                    self[curr_pos] = Tile::Letter(c);
                    written.push(curr_pos);
                }
            }
        }
        self.placements.push(Placement {
            word: word.as_str().to_string(),
            pos,
            dir,
        });
        written
    }

    /// Checked version of [`Board::place_word`]. Leaves the board untouched on error
    pub fn try_place_word(
        &mut self,
        word: &Word,
        pos: Position,
        dir: Direction,
    ) -> Result<Vec<Position>> {
        for (i, &c) in word.letters().iter().enumerate() {
            let p = pos.step_n(i, dir);
            match self.tile(p) {
                None => {
                    return Err(CrosswordError::OutOfBounds {
                        row: p.row,
                        col: p.col,
                        size: self.size,
                    })
                }
                Some(Tile::Letter(existing)) if existing != c => {
                    return Err(CrosswordError::Conflict {
                        row: p.row,
                        col: p.col,
                        existing,
                        letter: c,
                    })
                }
                _ => {}
            }
        }
        Ok(self.place_word(word, pos, dir))
    }

    /// Reverses the most recent [`Board::place_word`], given the cells it wrote
    pub fn undo_placement(&mut self, written: &[Position]) {
        for &p in written {
            self[p] = Tile::Empty;
        }
        self.placements.pop();
    }

    /// Iterates over every occupied cell in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.state
            .indexed_iter()
            .filter_map(|((row, col), tile)| match tile {
                Tile::Letter(l) => Some((Position { row, col }, *l)),
                Tile::Empty => None,
            })
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.occupied().fold(None, |bbox, (p, _)| {
            Some(match bbox {
                None => BoundingBox {
                    min_row: p.row,
                    max_row: p.row,
                    min_col: p.col,
                    max_col: p.col,
                },
                Some(b) => BoundingBox {
                    min_row: b.min_row.min(p.row),
                    max_row: b.max_row.max(p.row),
                    min_col: b.min_col.min(p.col),
                    max_col: b.max_col.max(p.col),
                },
            })
        })
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.state == other.state
    }
}

impl std::ops::Index<Position> for Board {
    type Output = Tile;

    fn index(&self, index: Position) -> &Self::Output {
        &self.state[[index.row, index.col]]
    }
}

impl std::ops::IndexMut<Position> for Board {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self.state[[index.row, index.col]]
    }
}
