use crate::game::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELLS: usize = ROWS * COLS;

/// Number of contiguous same-colored markers that wins the game.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Blue,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Blue => Some(Player::Blue),
        }
    }
}

/// A 6x7 grid stored as a flat row-major array. Boards are value
/// objects: there is no in-place mutation, only [`Board::with_cell`],
/// so a snapshot holding a board can never be altered behind its back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Linear index of (row, col). Row 0 is the top row.
    pub fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < ROWS && col < COLS);
        row * COLS + col
    }

    /// Inverse of [`Board::index`]: (row, col) of a linear index.
    pub fn coordinates(index: usize) -> (usize, usize) {
        debug_assert!(index < CELLS);
        (index / COLS, index % COLS)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    /// Get the cell at a linear index
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Copy of this board with one cell changed
    pub fn with_cell(&self, index: usize, cell: Cell) -> Board {
        let mut cells = self.cells;
        cells[index] = cell;
        Board { cells }
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
