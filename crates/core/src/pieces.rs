//! Pieces module - tetromino catalog and in-place rotation
//!
//! Every piece kind has a canonical occupancy grid padded to a square
//! (4x4 for I, 2x2 for O, 3x3 for the rest). Rotation is a pure transform of
//! that grid; there are no wall kicks, a rotation either fits where the piece
//! stands or it is discarded.

use crate::rng::PieceSource;
use crate::types::{PieceKind, Rgb, SPAWN_X, SPAWN_Y};

/// Largest side length of any shape grid
pub const MAX_SHAPE_SIZE: usize = 4;

/// Top-left anchor of a shape grid in board coordinates
///
/// `y` may be negative while a piece is entering from above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Standard spawn anchor for new pieces
    pub const fn spawn() -> Self {
        Self::new(SPAWN_X, SPAWN_Y)
    }

    /// Same position shifted by `(dx, dy)`
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Square boolean occupancy grid of side `size`
///
/// Storage is fixed at 4x4 so shapes stay `Copy`; cells outside
/// `size x size` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of `'#'` (filled) and `'.'` (empty)
    ///
    /// Returns `None` unless the rows form a square of side at most 4 with at
    /// least one filled cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::Shape;
    ///
    /// let shape = Shape::from_rows(&["#.", "##"]).unwrap();
    /// assert_eq!(shape.size(), 2);
    /// assert!(shape.is_filled(1, 1));
    /// assert!(!shape.is_filled(1, 0));
    ///
    /// assert!(Shape::from_rows(&["###", "#"]).is_none());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_SHAPE_SIZE {
            return None;
        }
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                cells[y][x] = ch == '#';
            }
        }
        if !cells.iter().flatten().any(|filled| *filled) {
            return None;
        }
        Some(Self {
            size: size as u8,
            cells,
        })
    }

    /// Canonical spawn-orientation shape of a piece kind
    pub fn of(kind: PieceKind) -> Self {
        CATALOG[catalog_index(kind)].0
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at column `x`, row `y` of the grid is filled
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.cells[y][x]
    }

    /// Offsets `(x, y)` of all filled cells, row-major
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// The grid turned 90° clockwise: `new[x][n-1-y] = old[y][x]`
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                cells[x][n - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

/// An active piece instance
///
/// The shape is the instance's own copy, so rotating it never touches the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl Piece {
    /// Spawn a piece of the given kind with its canonical shape
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
            position,
        }
    }

    /// Spawn a piece whose kind is drawn from `source`
    pub fn random<S: PieceSource + ?Sized>(source: &mut S, position: Position) -> Self {
        Self::new(source.next_kind(), position)
    }

    /// Same piece moved to `position`
    pub fn at(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Same piece with a different shape
    pub fn with_shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }
}

/// Clockwise rotation of a piece's current shape
pub fn rotate(piece: &Piece) -> Shape {
    piece.shape.rotate_cw()
}

/// Display color of a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    CATALOG[catalog_index(kind)].1
}

fn catalog_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    }
}

const fn grid<const N: usize>(rows: [[bool; N]; N]) -> Shape {
    let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    let mut y = 0;
    while y < N {
        let mut x = 0;
        while x < N {
            cells[y][x] = rows[y][x];
            x += 1;
        }
        y += 1;
    }
    Shape {
        size: N as u8,
        cells,
    }
}

const X: bool = true;
const O: bool = false;

/// Shapes and colors, indexed in `PieceKind::ALL` order
static CATALOG: [(Shape, Rgb); 7] = [
    (
        grid([[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]]),
        Rgb::new(0x00, 0xf0, 0xf0),
    ),
    (grid([[X, X], [X, X]]), Rgb::new(0xf0, 0xf0, 0x00)),
    (
        grid([[O, X, O], [X, X, X], [O, O, O]]),
        Rgb::new(0xa0, 0x00, 0xf0),
    ),
    (
        grid([[O, X, X], [X, X, O], [O, O, O]]),
        Rgb::new(0x00, 0xf0, 0x00),
    ),
    (
        grid([[X, X, O], [O, X, X], [O, O, O]]),
        Rgb::new(0xf0, 0x00, 0x00),
    ),
    (
        grid([[X, O, O], [X, X, X], [O, O, O]]),
        Rgb::new(0x00, 0x00, 0xf0),
    ),
    (
        grid([[O, O, X], [X, X, X], [O, O, O]]),
        Rgb::new(0xf0, 0xa0, 0x00),
    ),
];
