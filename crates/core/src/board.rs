//! Board module - the occupancy grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that landed there. Coordinates: (x, y) where x ranges 0..9 (left to
//! right) and y ranges 0..19 (top to bottom).
//!
//! A board value is never edited in place by the game: [`Board::merge`] and
//! [`Board::clear_lines`] both return a new board and leave `self` untouched.

use crate::pieces::{Position, Shape};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One row of cells
pub type Row = [Cell; WIDTH];

/// The game board - 10 columns x 20 rows, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; WIDTH]; HEIGHT],
        }
    }

    /// Create a board with the given contents
    pub fn from_cells(rows: [Row; HEIGHT]) -> Self {
        Self { rows }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Whether (x, y) is inside the board and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[Row; HEIGHT] {
        &self.rows
    }

    /// Whether row `y` has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Number of rows with no empty cell
    pub fn full_row_count(&self) -> u32 {
        (0..HEIGHT).filter(|&y| self.is_row_full(y)).count() as u32
    }

    /// Whether placing `shape` with its anchor at `pos` is illegal
    ///
    /// A filled shape cell collides when its board column is outside
    /// `0..WIDTH`, its board row is at or below the floor, or it lands on an
    /// occupied cell. Cells above the top edge (`y < 0`) only face the
    /// horizontal check, which lets pieces spawn partly above the board.
    pub fn collides(&self, shape: &Shape, pos: Position) -> bool {
        shape.filled().any(|(dx, dy)| {
            let x = pos.x as i16 + dx as i16;
            let y = pos.y as i16 + dy as i16;
            x < 0
                || x >= WIDTH as i16
                || y >= HEIGHT as i16
                || (y >= 0 && self.rows[y as usize][x as usize].is_some())
        })
    }

    /// New board with every filled cell of `shape` at `pos` set to `kind`
    ///
    /// Cells above the top edge are dropped, as are any outside the side walls
    /// or the floor (callers check [`Board::collides`] first).
    pub fn merge(&self, shape: &Shape, pos: Position, kind: PieceKind) -> Board {
        let mut next = *self;
        for (dx, dy) in shape.filled() {
            let x = pos.x as i16 + dx as i16;
            let y = pos.y as i16 + dy as i16;
            if (0..WIDTH as i16).contains(&x) && (0..HEIGHT as i16).contains(&y) {
                next.rows[y as usize][x as usize] = Some(kind);
            }
        }
        next
    }

    /// Remove every full row, pad with empty rows on top, and report how many went
    ///
    /// Surviving rows keep their top-to-bottom order.
    pub fn clear_lines(&self) -> (Board, u32) {
        let mut next = Board::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top, compacting surviving rows downward.
        for row in self.rows.iter().rev() {
            if row.iter().all(|cell| cell.is_some()) {
                continue;
            }
            write_y -= 1;
            next.rows[write_y] = *row;
        }

        (next, write_y as u32)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
