use tracing::debug;

use crate::board::{Board, Player, Pos, Stone};
use crate::error::{MoveError, UndoError};
use crate::rules;

/// A placed stone, as recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: Player,
}

/// Result of an accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play goes on with `next` to move
    Continue { next: Player },
    /// The stone completed a run; `line` is the whole run, ordered along it
    Won { winner: Player, line: Vec<Pos> },
}

/// Single owner of the board, history and turn.
///
/// Illegal requests to `apply_move` and `undo_last` are ignored, the
/// state is left untouched. Use `check_move` / `try_undo` when the reason
/// matters.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    history: Vec<Move>,
    current_player: Player,
    game_over: bool,
    winning_line: Option<Vec<Pos>>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::with_capacity(crate::board::TOTAL_CELLS),
            current_player: Player::Black,
            game_over: false,
            winning_line: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Stone at `(row, col)`, `None` when off the board
    pub fn stone_at(&self, row: usize, col: usize) -> Option<Stone> {
        Pos::checked(row, col).map(|pos| self.board.get(pos))
    }

    /// Side to move, or the winner once the game is over
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Player> {
        self.game_over.then_some(self.current_player)
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Moves in play order
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Whether `(row, col)` would be accepted by `apply_move` right now
    pub fn check_move(&self, row: usize, col: usize) -> Result<Pos, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        rules::check_placement(&self.board, row, col)
    }

    /// Place a stone for the side to move.
    ///
    /// Returns `None` and changes nothing if the game is over, the
    /// coordinates are off the board or the cell is taken.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Option<MoveOutcome> {
        match self.check_move(row, col) {
            Ok(pos) => Some(self.execute_move(pos)),
            Err(err) => {
                debug!(row, col, %err, "move ignored");
                None
            }
        }
    }

    fn execute_move(&mut self, pos: Pos) -> MoveOutcome {
        let player = self.current_player;

        self.history.push(Move { pos, player });
        self.board.place_stone(pos, player.stone());

        if let Some(line) = rules::find_five_line_at_pos(&self.board, pos) {
            // current_player stays on the winner
            self.game_over = true;
            self.winning_line = Some(line.clone());
            return MoveOutcome::Won { winner: player, line };
        }

        self.current_player = player.opponent();
        MoveOutcome::Continue {
            next: self.current_player,
        }
    }

    /// Five-in-a-row check through the stone at `(row, col)`. Pure.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        Pos::checked(row, col).is_some_and(|pos| rules::has_five_at_pos(&self.board, pos))
    }

    /// Take back the most recent move; `None` when there is none.
    ///
    /// Always leaves the game active, even when the undone move had won.
    pub fn undo_last(&mut self) -> Option<Move> {
        match self.try_undo() {
            Ok(mv) => Some(mv),
            Err(err) => {
                debug!(%err, "undo ignored");
                None
            }
        }
    }

    /// Fallible form of `undo_last`
    pub fn try_undo(&mut self) -> Result<Move, UndoError> {
        let mv = self.history.pop().ok_or(UndoError::NothingToUndo)?;
        self.board.remove_stone(mv.pos);
        self.current_player = mv.player;
        self.game_over = false;
        self.winning_line = None;
        Ok(mv)
    }

    /// Empty board, Black to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.current_player = Player::Black;
        self.game_over = false;
        self.winning_line = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};

    /// Play every coordinate pair for the side to move
    fn play(state: &mut GameState, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            assert!(state.apply_move(r, c).is_some(), "move ({r}, {c}) rejected");
        }
    }

    /// Place stones for Black only, forcing the turn back before each move
    fn play_black_only(state: &mut GameState, moves: &[(usize, usize)]) -> Option<MoveOutcome> {
        let mut last = None;
        for &(r, c) in moves {
            state.current_player = Player::Black;
            last = state.apply_move(r, c);
        }
        last
    }

    fn assert_history_matches_board(state: &GameState) {
        assert_eq!(state.history().len(), state.board().stone_count());
        for mv in state.history() {
            assert_eq!(state.board().get(mv.pos), mv.player.stone());
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::Black);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
        assert!(state.history().is_empty());
        assert!(state.board().is_board_empty());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::new();
        let outcome = state.apply_move(7, 7);

        assert_eq!(outcome, Some(MoveOutcome::Continue { next: Player::White }));
        assert_eq!(state.current_player(), Player::White);
        assert_eq!(state.stone_at(7, 7), Some(Stone::Black));
        assert_eq!(
            state.last_move(),
            Some(Move { pos: Pos::new(7, 7), player: Player::Black })
        );
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (0, 1), (0, 2)]);
        let players: Vec<_> = state.history().iter().map(|m| m.player).collect();
        assert_eq!(players, vec![Player::Black, Player::White, Player::Black]);
        assert_eq!(state.current_player(), Player::White);
        assert_history_matches_board(&state);
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[(3, 3)]);
        let before = state.clone();

        assert_eq!(state.apply_move(3, 3), None);
        assert_eq!(state.board(), before.board());
        assert_eq!(state.history(), before.history());
        assert_eq!(state.current_player(), Player::White);
        assert_eq!(state.stone_at(3, 3), Some(Stone::Black));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(BOARD_SIZE, 0), None);
        assert_eq!(state.apply_move(0, BOARD_SIZE), None);
        assert_eq!(state.apply_move(usize::MAX, usize::MAX), None);
        assert!(state.history().is_empty());
        assert_eq!(state.current_player(), Player::Black);
    }

    #[test]
    fn test_check_move_reasons() {
        let mut state = GameState::new();
        play(&mut state, &[(1, 1)]);
        assert_eq!(state.check_move(1, 2), Ok(Pos::new(1, 2)));
        assert_eq!(state.check_move(1, 1), Err(MoveError::Occupied { row: 1, col: 1 }));
        assert_eq!(
            state.check_move(20, 1),
            Err(MoveError::OutOfBounds { row: 20, col: 1 })
        );
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new();
        // Black on row 7, White on row 8
        play(
            &mut state,
            &[(7, 0), (8, 0), (7, 1), (8, 1), (7, 2), (8, 2), (7, 3), (8, 3)],
        );
        let outcome = state.apply_move(7, 4);

        let expected_line: Vec<_> = (0..5).map(|c| Pos::new(7, c)).collect();
        assert_eq!(
            outcome,
            Some(MoveOutcome::Won { winner: Player::Black, line: expected_line.clone() })
        );
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Player::Black));
        assert_eq!(state.current_player(), Player::Black);
        assert_eq!(state.winning_line(), Some(expected_line.as_slice()));
    }

    #[test]
    fn test_moves_blocked_after_win() {
        let mut state = GameState::new();
        play_black_only(&mut state, &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)]);
        assert!(state.is_game_over());

        assert_eq!(state.check_move(0, 0), Err(MoveError::GameOver));
        assert_eq!(state.apply_move(0, 0), None);
        assert_eq!(state.stone_at(0, 0), Some(Stone::Empty));
        assert_eq!(state.move_count(), 5);
        assert_eq!(state.current_player(), Player::Black);
    }

    #[test]
    fn test_scenario_forced_black_row_wins() {
        let mut state = GameState::new();
        let last = play_black_only(&mut state, &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)]);

        assert!(matches!(last, Some(MoveOutcome::Won { winner: Player::Black, .. })));
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Player::Black));
        assert!(state.check_win(7, 9));
    }

    #[test]
    fn test_scenario_four_in_corner_row() {
        let mut state = GameState::new();
        play_black_only(&mut state, &[(0, 0), (0, 1), (0, 2), (0, 3)]);

        assert!(!state.is_game_over());
        assert_eq!(state.current_player(), Player::White);
        assert!(!state.check_win(0, 3));
    }

    #[test]
    fn test_scenario_undo_winning_move() {
        let mut state = GameState::new();
        play_black_only(&mut state, &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)]);

        let undone = state.undo_last();
        assert_eq!(undone, Some(Move { pos: Pos::new(7, 11), player: Player::Black }));
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.stone_at(7, 11), Some(Stone::Empty));
        assert_eq!(state.current_player(), Player::Black);
        assert_history_matches_board(&state);

        // Game is live again
        assert!(state.apply_move(0, 0).is_some());
    }

    #[test]
    fn test_undo_restores_mover() {
        let mut state = GameState::new();
        play(&mut state, &[(5, 5), (6, 6)]);
        assert_eq!(state.current_player(), Player::Black);

        let mv = state.undo_last().unwrap();
        assert_eq!(mv.player, Player::White);
        assert_eq!(state.current_player(), Player::White);
        assert_eq!(state.stone_at(6, 6), Some(Stone::Empty));
        assert_eq!(state.stone_at(5, 5), Some(Stone::Black));
    }

    #[test]
    fn test_undo_empty_history_ignored() {
        let mut state = GameState::new();
        assert_eq!(state.undo_last(), None);
        assert_eq!(state.try_undo(), Err(UndoError::NothingToUndo));
        assert_eq!(state.current_player(), Player::Black);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_apply_then_undo_all_restores_initial() {
        let mut state = GameState::new();
        let moves: Vec<_> = (0..15).map(|i| ((i * 7) % 15, (i * 4 + 1) % 15)).collect();
        play(&mut state, &moves);
        assert_history_matches_board(&state);

        for _ in 0..moves.len() {
            assert!(state.undo_last().is_some());
            assert_history_matches_board(&state);
        }
        assert!(state.board().is_board_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.current_player(), Player::Black);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new();
        play_black_only(&mut state, &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)]);
        state.reset();

        assert!(state.board().is_board_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.current_player(), Player::Black);
        assert!(!state.is_game_over());
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = GameState::new();
        play(&mut once, &[(1, 1), (2, 2), (3, 3)]);
        once.reset();

        let mut twice = once.clone();
        twice.reset();

        assert_eq!(once.board(), twice.board());
        assert_eq!(once.history(), twice.history());
        assert_eq!(once.current_player(), twice.current_player());
        assert_eq!(once.is_game_over(), twice.is_game_over());
    }

    #[test]
    fn test_check_win_is_pure() {
        let mut state = GameState::new();
        play_black_only(&mut state, &[(0, 0), (1, 1), (2, 2), (3, 3)]);
        let before = state.clone();

        assert!(!state.check_win(3, 3));
        assert!(!state.check_win(14, 14));
        assert!(!state.check_win(99, 0));
        assert_eq!(state.board(), before.board());
        assert_eq!(state.history(), before.history());
    }

    #[test]
    fn test_fill_board_without_win() {
        // Columns in pairs: rows alternate colour, so no vertical or
        // diagonal run gets past two and rows hold at most two in a row.
        let mut state = GameState::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let black = ((c / 2) + r) % 2 == 0;
                state.current_player = if black { Player::Black } else { Player::White };
                assert!(matches!(
                    state.apply_move(r, c),
                    Some(MoveOutcome::Continue { .. })
                ));
            }
        }
        assert_eq!(state.move_count(), TOTAL_CELLS);
        assert!(!state.is_game_over());
    }
}
