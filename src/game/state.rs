use super::board::AXES;
use super::{Board, MoveError, Player};

/// One node of the game tree: a board snapshot, the player whose turn it
/// is, and the maximizing player's accumulated chip positions.
///
/// States are value types. `apply_move` copies the board and history into a
/// fresh child instead of mutating in place, so sibling branches of a
/// search never alias storage. `max_moves` accumulates across the whole
/// game, not per search; the heuristic scores MAX's connectivity from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Player,
    max_moves: Vec<(usize, usize)>,
    last_move: Option<(usize, usize)>,
}

impl GameState {
    /// Root state with `first` to move: empty board, empty history.
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            to_move: first,
            max_moves: Vec::new(),
            last_move: None,
        }
    }

    /// Root state with the human (MIN) to move.
    pub fn initial() -> Self {
        Self::new(Player::Min)
    }

    /// Player whose turn it is in this state.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of the most recently placed chip, `None` at the root.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Positions where MAX has placed chips, in move order.
    pub fn max_moves(&self) -> &[(usize, usize)] {
        &self.max_moves
    }

    /// Columns that can still accept a chip, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.legal_columns()
    }

    /// Build the child state reached by the current player dropping a chip
    /// in `column`. The board and history are copied, the landing
    /// coordinate becomes the child's `last_move`, and the turn flips.
    /// Callers validate `column` against `legal_moves()` first.
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut board = self.board;
        let landed = board.drop_chip(column, self.to_move.to_cell())?;

        let mut max_moves = self.max_moves.clone();
        if self.to_move == Player::Max {
            max_moves.push(landed);
        }

        Ok(GameState {
            board,
            to_move: self.to_move.other(),
            max_moves,
            last_move: Some(landed),
        })
    }

    /// True iff the last move completed a run of four or more through its
    /// own cell, in any direction family. The root has no last move and is
    /// never terminal. A full board is not terminal by this rule; it shows
    /// up as an empty `legal_moves()` instead.
    pub fn is_terminal(&self) -> bool {
        let Some((row, col)) = self.last_move else {
            return false;
        };
        let cell = self.board.chip_at(row as i32, col as i32);
        AXES.iter()
            .any(|&axis| self.board.run_length(row, col, axis, cell) >= 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.to_move(), Player::Min);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_moves().len(), 7);
        assert!(state.max_moves().is_empty());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_move_flips_player() {
        let state = GameState::new(Player::Max);
        let child = state.apply_move(3).unwrap();

        assert_eq!(child.to_move(), Player::Min);
        assert_eq!(child.board().chip_at(5, 3), Cell::Max);
        assert_eq!(child.last_move(), Some((5, 3)));
    }

    #[test]
    fn test_parent_board_untouched() {
        let state = GameState::new(Player::Max);
        let _child = state.apply_move(0).unwrap();
        assert_eq!(state.board().chip_at(5, 0), Cell::Empty);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_history_extends_only_on_max_moves() {
        let root = GameState::new(Player::Max);
        let after_max = root.apply_move(2).unwrap();
        assert_eq!(after_max.max_moves(), &[(5, 2)]);

        let after_min = after_max.apply_move(4).unwrap();
        assert_eq!(after_min.max_moves(), &[(5, 2)]);

        let after_max2 = after_min.apply_move(2).unwrap();
        assert_eq!(after_max2.max_moves(), &[(5, 2), (4, 2)]);
    }

    #[test]
    fn test_apply_move_illegal_column() {
        let state = GameState::initial();
        assert_eq!(state.apply_move(7), Err(MoveError::InvalidColumn));

        let mut state = GameState::new(Player::Max);
        for _ in 0..3 {
            state = state.apply_move(0).unwrap(); // Max
            state = state.apply_move(0).unwrap(); // Min
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
        assert!(!state.legal_moves().contains(&0));
    }

    #[test]
    fn test_vertical_win_is_terminal() {
        // Max stacks column 3 four times, Min plays elsewhere
        let mut state = GameState::new(Player::Max);
        for i in 0..4 {
            state = state.apply_move(3).unwrap(); // Max
            if i < 3 {
                state = state.apply_move(6).unwrap(); // Min
            }
        }
        assert!(state.is_terminal());
    }

    #[test]
    fn test_horizontal_win_is_terminal() {
        // Max fills (5,0)..(5,2), Min stacks column 6; Max's move at 3 wins
        let mut state = GameState::new(Player::Max);
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Max
            state = state.apply_move(6).unwrap(); // Min
        }
        assert!(!state.is_terminal());
        let finished = state.apply_move(3).unwrap();
        assert!(finished.is_terminal());
    }

    #[test]
    fn test_diagonal_win_is_terminal() {
        // Build a / diagonal for Max: (5,0),(4,1),(3,2),(2,3)
        let mut state = GameState::new(Player::Max);
        state = state.apply_move(0).unwrap(); // Max (5,0)
        state = state.apply_move(1).unwrap(); // Min (5,1)
        state = state.apply_move(1).unwrap(); // Max (4,1)
        state = state.apply_move(2).unwrap(); // Min (5,2)
        state = state.apply_move(2).unwrap(); // Max (4,2)... needs one more
        state = state.apply_move(3).unwrap(); // Min (5,3)
        state = state.apply_move(2).unwrap(); // Max (3,2)
        state = state.apply_move(3).unwrap(); // Min (4,3)
        state = state.apply_move(3).unwrap(); // Max (3,3)... needs (2,3)
        state = state.apply_move(0).unwrap(); // Min (4,0)
        assert!(!state.is_terminal());
        state = state.apply_move(3).unwrap(); // Max (2,3) completes the diagonal
        assert!(state.is_terminal());
    }

    #[test]
    fn test_three_in_a_row_not_terminal() {
        let mut state = GameState::new(Player::Max);
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Max
            state = state.apply_move(col).unwrap(); // Min
        }
        assert!(!state.is_terminal());
    }
}
