//! Game engine: turn order, move validation, and the append-only
//! history of board snapshots that makes time travel possible.

use super::board::{Board, CELLS, WIN_LENGTH};
use super::referee::{self, Verdict};
use super::Player;
use crate::error::{JumpError, MoveError};

/// Where a marker was placed, recorded in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// The game state after some number of moves: the board plus every
/// move that produced it. Snapshots are immutable once appended to
/// the history; a new move always builds a fresh snapshot from a
/// copy of the previous board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    board: Board,
    moves: Vec<Move>,
}

impl Snapshot {
    /// Snapshot 0: the empty board with no moves
    fn start() -> Self {
        Snapshot {
            board: Board::new(),
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves that led to this snapshot, oldest first. The length is
    /// also the snapshot's position in the history.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The move that produced this snapshot, if any
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }
}

/// Game status as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress(Player),
    Won(Player),
    Draw,
}

/// Render-ready view of the active snapshot.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub board: &'a Board,
    pub moves: &'a [Move],
    pub winning_cells: Option<[usize; WIN_LENGTH]>,
    pub status: Status,
}

/// A game in progress, including its entire navigable past.
///
/// The engine owns the history exclusively. `step` selects the active
/// snapshot; applying a move from a past step discards the abandoned
/// future before appending, so the history is always a single line
/// from the empty board to the latest move.
#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Snapshot>,
    step: usize,
}

impl Game {
    /// Start a fresh game: one empty snapshot, Red to move
    pub fn new() -> Self {
        Game {
            history: vec![Snapshot::start()],
            step: 0,
        }
    }

    /// The active step (index into the history)
    pub fn step(&self) -> usize {
        self.step
    }

    /// Every snapshot from game start to the latest move
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// The active snapshot
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Player to move at the active step
    pub fn player_to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Place the active player's marker at a linear board index.
    ///
    /// Rejected without any state change when the index is out of
    /// bounds, the game at the active step is already decided, or the
    /// target cell is occupied. On success the history is truncated
    /// to the active step, the new snapshot is appended, and the step
    /// advances to it.
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= CELLS {
            return Err(MoveError::OutOfBounds { index });
        }

        let current = self.current();
        if referee::evaluate(current.board()).is_some() {
            return Err(MoveError::GameOver);
        }
        if current.board().cell(index).player().is_some() {
            return Err(MoveError::OccupiedCell { index });
        }

        let marker = self.player_to_move().to_cell();
        let board = current.board().with_cell(index, marker);

        let (row, col) = Board::coordinates(index);
        let mut moves = current.moves().to_vec();
        moves.push(Move { row, col });

        self.history.truncate(self.step + 1);
        self.history.push(Snapshot { board, moves });
        self.step = self.history.len() - 1;
        Ok(())
    }

    /// Select a historical snapshot. History contents are untouched;
    /// only the step pointer moves.
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        Ok(())
    }

    /// View of the active snapshot for rendering
    pub fn current_view(&self) -> GameView<'_> {
        let snapshot = self.current();
        let verdict = referee::evaluate(snapshot.board());

        let (status, winning_cells) = match verdict {
            Some(Verdict::Win { player, cells }) => (Status::Won(player), Some(cells)),
            Some(Verdict::Draw) => (Status::Draw, None),
            None => (Status::InProgress(self.player_to_move()), None),
        };

        GameView {
            board: snapshot.board(),
            moves: snapshot.moves(),
            winning_cells,
            status,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{COLS, ROWS};
    use crate::game::Cell;

    /// Apply a sequence of moves, panicking on any rejection
    fn play(game: &mut Game, indices: &[usize]) {
        for &index in indices {
            game.apply_move(index).expect("legal move rejected");
        }
    }

    #[test]
    fn test_new_game_view() {
        let game = Game::new();
        let view = game.current_view();

        assert_eq!(view.status, Status::InProgress(Player::Red));
        assert_eq!(view.winning_cells, None);
        assert!(view.moves.is_empty());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_moves_alternate_markers() {
        let mut game = Game::new();
        play(&mut game, &[0, 10]);

        let board = game.current().board();
        assert_eq!(board.cell(0), Cell::Red);
        assert_eq!(board.cell(10), Cell::Blue);
        assert_eq!(game.player_to_move(), Player::Red);
    }

    #[test]
    fn test_move_is_recorded_with_board_coordinates() {
        let mut game = Game::new();
        play(&mut game, &[9]); // row 1, col 2

        let moves = game.current().moves();
        assert_eq!(moves.len(), 1);
        assert_eq!((moves[0].row(), moves[0].col()), (1, 2));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_state_change() {
        let mut game = Game::new();
        play(&mut game, &[5]);

        let before = game.current().clone();
        assert_eq!(
            game.apply_move(5),
            Err(MoveError::OccupiedCell { index: 5 })
        );
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(game.current(), &before);
    }

    #[test]
    fn test_out_of_bounds_index_is_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.apply_move(ROWS * COLS),
            Err(MoveError::OutOfBounds { index: 42 })
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_red_wins_bottom_row_scenario() {
        // Red claims indices 0..=3 of row 0 while Blue plays
        // elsewhere and never blocks
        let mut game = Game::new();
        play(&mut game, &[0, 14, 1, 15, 2, 16, 3]);

        let view = game.current_view();
        assert_eq!(view.status, Status::Won(Player::Red));
        assert_eq!(view.winning_cells, Some([0, 1, 2, 3]));
    }

    #[test]
    fn test_no_moves_after_game_is_decided() {
        let mut game = Game::new();
        play(&mut game, &[0, 14, 1, 15, 2, 16, 3]);

        let len = game.history().len();
        let step = game.step();
        assert_eq!(game.apply_move(20), Err(MoveError::GameOver));
        assert_eq!(game.history().len(), len);
        assert_eq!(game.step(), step);
    }

    #[test]
    fn test_jump_to_selects_exactly_that_snapshot() {
        let mut game = Game::new();
        play(&mut game, &[0, 14, 1]);

        game.jump_to(1).unwrap();
        let view = game.current_view();

        assert_eq!(view.moves.len(), 1);
        assert_eq!(view.board.cell(0), Cell::Red);
        assert_eq!(view.board.cell(14), Cell::Empty);
        assert_eq!(view.status, Status::InProgress(Player::Blue));

        // Jumping never touches the history itself
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut game = Game::new();
        play(&mut game, &[0]);

        assert_eq!(
            game.jump_to(2),
            Err(JumpError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_moving_from_the_past_discards_the_future() {
        let mut game = Game::new();
        play(&mut game, &[0, 14, 1, 15]);
        assert_eq!(game.history().len(), 5);

        game.jump_to(2).unwrap();
        play(&mut game, &[30]);

        // Steps 3 and 4 are gone; the new move is step 3
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.step(), 3);

        let board = game.current().board();
        assert_eq!(board.cell(30), Cell::Red);
        assert_eq!(board.cell(1), Cell::Empty); // old step 3 move
        assert_eq!(board.cell(15), Cell::Empty); // old step 4 move
    }

    #[test]
    fn test_jump_behind_a_win_reopens_the_game() {
        let mut game = Game::new();
        play(&mut game, &[0, 14, 1, 15, 2, 16, 3]);
        assert_eq!(game.current_view().status, Status::Won(Player::Red));

        game.jump_to(6).unwrap();
        assert_eq!(
            game.current_view().status,
            Status::InProgress(Player::Red)
        );

        // Red plays a non-winning cell instead; the winning future is gone
        play(&mut game, &[20]);
        assert_eq!(game.history().len(), 8);
        assert!(matches!(
            game.current_view().status,
            Status::InProgress(_)
        ));
    }

    #[test]
    fn test_replaying_a_sequence_is_deterministic() {
        let script = [3, 10, 0, 41, 7, 22, 38, 19];

        let mut first = Game::new();
        let mut second = Game::new();
        play(&mut first, &script);
        play(&mut second, &script);

        assert_eq!(first.current(), second.current());
        assert_eq!(
            first.current_view().status,
            second.current_view().status
        );
    }

    /// Marker of the balanced draw pattern: runs of at most two in
    /// every direction, with (0, 0) flipped to Blue so both players
    /// place exactly 21 markers.
    fn draw_pattern(row: usize, col: usize) -> Cell {
        if (row + 2 * col) % 4 < 2 && !(row == 0 && col == 0) {
            Cell::Red
        } else {
            Cell::Blue
        }
    }

    #[test]
    fn test_alternating_fill_without_alignment_ends_in_draw() {
        let mut red_targets = Vec::new();
        let mut blue_targets = Vec::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let index = Board::index(row, col);
                match draw_pattern(row, col) {
                    Cell::Red => red_targets.push(index),
                    Cell::Blue => blue_targets.push(index),
                    Cell::Empty => unreachable!(),
                }
            }
        }
        assert_eq!(red_targets.len(), 21);
        assert_eq!(blue_targets.len(), 21);

        // Interleave so Red lands on even steps. No prefix can form a
        // run: every placed marker set is a subset of the final
        // run-free board.
        let mut game = Game::new();
        for (red, blue) in red_targets.iter().zip(&blue_targets) {
            play(&mut game, &[*red, *blue]);
        }

        let view = game.current_view();
        assert_eq!(view.status, Status::Draw);
        assert_eq!(view.winning_cells, None);
        assert_eq!(game.history().len(), 43);

        // The board is decided, so no further move is accepted
        assert_eq!(game.apply_move(0), Err(MoveError::GameOver));
    }
}
