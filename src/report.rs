use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::crossword::board::{Board, Placement, Tile};
use crate::crossword::generator::Layout;

/// Grid cropped to the occupied area, one line per row, `.` for empty cells
pub fn render_grid(board: &Board) -> Vec<String> {
    let bbox = match board.bounding_box() {
        Some(bbox) => bbox,
        None => return Vec::new(),
    };
    (bbox.min_row..=bbox.max_row)
        .map(|row| {
            (bbox.min_col..=bbox.max_col)
                .map(|col| match board.get(row, col) {
                    Ok(Tile::Letter(l)) => l,
                    _ => '.',
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn write_report<W: Write>(layout: &Layout, out: &mut W) -> io::Result<()> {
    let placements = layout.board.placements();
    writeln!(out, "SCRABBLE CROSSWORD LAYOUT")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "Seed: {}", layout.seed)?;
    writeln!(out, "Board: {0}x{0}", layout.board.size())?;
    writeln!(out)?;

    writeln!(out, "Placed words ({}):", placements.len())?;
    writeln!(out, "{}", "-".repeat(30))?;
    for (i, p) in placements.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, p)?;
    }
    writeln!(out)?;

    writeln!(out, "Grid:")?;
    let grid = render_grid(&layout.board);
    if grid.is_empty() {
        writeln!(out, "No words placed")?;
    }
    for line in grid {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Placed {} words in {:.2} seconds ({} backtracks)",
        placements.len(),
        layout.stats.elapsed.as_secs_f64(),
        layout.stats.backtracks
    )
}

/// JSON form of a layout. `Board::from_file` reads it back by replaying `placements`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub size: usize,
    pub seed: u64,
    pub placements: Vec<Placement>,
    pub grid: Vec<String>,
}

impl From<&Layout> for LayoutDocument {
    fn from(layout: &Layout) -> Self {
        Self {
            size: layout.board.size(),
            seed: layout.seed,
            placements: layout.board.placements().to_vec(),
            grid: render_grid(&layout.board),
        }
    }
}
