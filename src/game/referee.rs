//! Pure win/draw detection over a board. Stateless: the same board
//! always yields the same verdict, regardless of how it was reached.

use super::board::{Board, COLS, ROWS, WIN_LENGTH};
use super::Player;

/// Outcome of a decided game. `None` from [`evaluate`] means the game
/// is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win {
        player: Player,
        cells: [usize; WIN_LENGTH],
    },
    Draw,
}

impl Verdict {
    /// The four linear indices of the winning run, if this is a win
    pub fn winning_cells(&self) -> Option<[usize; WIN_LENGTH]> {
        match *self {
            Verdict::Win { cells, .. } => Some(cells),
            Verdict::Draw => None,
        }
    }
}

/// Run directions checked from each start cell, in order:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Scan the board for a winning run of [`WIN_LENGTH`] same-colored
/// markers. Cells are visited in row-major order and directions in
/// declaration order; the first complete run found is returned. A
/// full board with no run is a draw.
pub fn evaluate(board: &Board) -> Option<Verdict> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let Some(player) = board.get(row, col).player() else {
                continue;
            };

            for (d_row, d_col) in DIRECTIONS {
                if let Some(cells) = run_from(board, row, col, d_row, d_col, player) {
                    return Some(Verdict::Win { player, cells });
                }
            }
        }
    }

    if board.is_full() {
        Some(Verdict::Draw)
    } else {
        None
    }
}

/// Check the run of `WIN_LENGTH` cells starting at (row, col) and
/// stepping by (d_row, d_col). Any step that leaves the grid makes
/// the whole run a non-match; runs never wrap across a board edge.
fn run_from(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    player: Player,
) -> Option<[usize; WIN_LENGTH]> {
    let mut cells = [0; WIN_LENGTH];

    for (i, slot) in cells.iter_mut().enumerate() {
        let r = row as isize + d_row * i as isize;
        let c = col as isize + d_col * i as isize;

        if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
            return None;
        }

        let (r, c) = (r as usize, c as usize);
        if board.get(r, c).player() != Some(player) {
            return None;
        }
        *slot = Board::index(r, c);
    }

    Some(cells)
}
