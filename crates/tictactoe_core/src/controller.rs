//! The game state machine.
//!
//! [`GameController`] owns the board, the two players and the winner slot.
//! Two facts make up its state: the board contents and whether a winner has
//! been decided. Everything else (whose turn it is, whether the game is tied)
//! is recomputed from those two facts on every call.

use super::invariants::assert_invariants;
use super::{Board, GameStatus, Player, Position, RejectedRound, SharedToken, Token, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One of the two fixed, ordered seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum Seat {
    First,
    Second,
}

/// An accepted round: which cell was filled, with what, and whether it won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Cell that was filled.
    pub position: Position,
    /// Mark written into the cell.
    pub token: Token,
    /// Whether this placement completed a line for its player.
    pub won: bool,
}

/// Two-player tic-tac-toe controller.
///
/// Turn order is derived from board occupancy: an even number of occupied
/// cells means the first player moves, odd means the second. It is never
/// tracked as separate state, so it cannot drift from the board.
///
/// The controller can be serialized for inspection but not rebuilt from
/// serialized data, since that would skip the checks made by [`new`](Self::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameController {
    pub(crate) players: [Player; 2],
    pub(crate) board: Board,
    pub(crate) winner: Option<Seat>,
}

impl GameController {
    /// Creates a controller with an empty board for the two given players.
    ///
    /// `first` always moves first after a reset. Either seat may hold either
    /// mark, but the two marks must differ.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: Player, second: Player) -> Result<Self, SharedToken> {
        if first.token() == second.token() {
            warn!(token = %first.token(), "Both seats hold the same mark");
            return Err(SharedToken(first.token()));
        }
        info!("Creating game controller");
        Ok(Self {
            players: [first, second],
            board: Board::new(),
            winner: None,
        })
    }

    /// Places the current player's mark at `position` (0-8).
    ///
    /// Rejected without touching any state when a winner already exists,
    /// when `position` is off the board, or when the cell is occupied,
    /// checked in that order. On success the mover is checked for a
    /// completed line and recorded as the winner if they have one.
    #[instrument(skip(self), fields(occupied = self.board.occupied_count()))]
    pub fn play_round(&mut self, position: i64) -> Result<Placement, RejectedRound> {
        let pos = self
            .check_round(position)
            .inspect_err(|reason| debug!(%reason, "Round rejected"))?;

        let seat = self.current_seat();
        let token = self.player(seat).token();
        self.board.set(pos, Some(token));

        let won = rules::has_won(&self.board, token);
        if won {
            self.winner = Some(seat);
            info!(winner = %self.player(seat), position = %pos, "Round decided");
        } else {
            debug!(%token, position = %pos, "Mark placed");
        }

        assert_invariants(self);

        Ok(Placement {
            position: pos,
            token,
            won,
        })
    }

    /// Same as [`play_round`](Self::play_round) for an already-named cell.
    pub fn play_at(&mut self, pos: Position) -> Result<Placement, RejectedRound> {
        self.play_round(pos.to_index() as i64)
    }

    /// Validates a round without applying it.
    fn check_round(&self, position: i64) -> Result<Position, RejectedRound> {
        if self.winner.is_some() {
            return Err(RejectedRound::GameDecided);
        }

        let pos = Position::from_index(position).ok_or(RejectedRound::OutOfRange(position))?;

        if !self.board.is_empty(pos) {
            return Err(RejectedRound::Occupied(pos));
        }

        Ok(pos)
    }

    /// Seat whose turn it is, derived from the number of occupied cells.
    pub(crate) fn current_seat(&self) -> Seat {
        if self.board.occupied_count() % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        }
    }

    pub(crate) fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.players[0],
            Seat::Second => &self.players[1],
        }
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current_seat())
    }

    /// Returns both players in seat order.
    pub fn players(&self) -> (&Player, &Player) {
        (&self.players[0], &self.players[1])
    }

    /// Renames both players. Board and winner are untouched.
    #[instrument(skip(self, name_one, name_two), fields(name_one = %name_one.as_ref(), name_two = %name_two.as_ref()))]
    pub fn set_players_names(&mut self, name_one: impl AsRef<str>, name_two: impl AsRef<str>) {
        let [first, second] = &mut self.players;
        first.set_name(name_one);
        second.set_name(name_two);
    }

    /// Clears every cell and the winner. Players keep their names.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.winner = None;
        info!("Game reset");
    }

    /// Returns a snapshot of the board.
    ///
    /// The snapshot is an owned copy; changing it does not affect the game.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the winner, or `None` while undecided or tied.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| self.player(seat))
    }

    /// Checks whether at least one cell is still empty.
    ///
    /// This does not look at the winner: a won game with empty cells still
    /// reports `true`. Use [`status`](Self::status) to tell a win, a tie and
    /// a playable board apart.
    pub fn is_game_ongoing(&self) -> bool {
        !rules::is_full(&self.board)
    }

    /// Returns the combined status.
    ///
    /// Equivalent to checking [`winner`](Self::winner) first and then
    /// [`is_game_ongoing`](Self::is_game_ongoing).
    pub fn status(&self) -> GameStatus<'_> {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if rules::is_draw(&self.board) => GameStatus::Tied,
            None => GameStatus::InProgress,
        }
    }

    /// The line that decided the game, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.status()
            .winner()
            .and_then(|player| rules::winning_line(&self.board, player.token()))
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self {
            players: [
                Player::new("Player One", Token::X),
                Player::new("Player Two", Token::O),
            ],
            board: Board::new(),
            winner: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut GameController, moves: &[i64]) {
        for &pos in moves {
            game.play_round(pos).expect("valid round");
        }
    }

    #[test]
    fn test_first_player_opens() {
        let game = GameController::default();
        assert_eq!(game.current_player().token(), Token::X);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_turn_derived_from_occupancy() {
        let mut game = GameController::default();
        game.play_round(4).unwrap();
        assert_eq!(game.current_seat(), Seat::Second);

        // Filling a cell behind the controller's back still flips the turn.
        game.board.set(Position::TopLeft, Some(Token::O));
        assert_eq!(game.current_seat(), Seat::First);
    }

    #[test]
    fn test_placement_reports_token_and_win() {
        let mut game = GameController::default();
        play_all(&mut game, &[0, 3, 1, 4]);

        let placement = game.play_round(2).unwrap();
        assert_eq!(placement.position, Position::TopRight);
        assert_eq!(placement.token, Token::X);
        assert!(placement.won);
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_rejection_order() {
        let mut game = GameController::default();
        play_all(&mut game, &[0, 3, 1, 4, 2]);

        // Decided takes precedence over range and occupancy.
        assert_eq!(game.play_round(42), Err(RejectedRound::GameDecided));
        assert_eq!(game.play_round(0), Err(RejectedRound::GameDecided));

        game.reset_game();
        game.play_round(0).unwrap();
        assert_eq!(game.play_round(-3), Err(RejectedRound::OutOfRange(-3)));
        assert_eq!(
            game.play_round(0),
            Err(RejectedRound::Occupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_second_player_can_win() {
        let mut game = GameController::default();
        play_all(&mut game, &[0, 2, 1, 4, 8, 6]);
        assert_eq!(game.winner().map(Player::token), Some(Token::O));
        assert!(game.is_game_ongoing());
        assert!(game.status().is_over());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        let mut game = GameController::default();
        // X O X / O X O / O X X: X completes the main diagonal with the ninth mark.
        play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert!(!game.is_game_ongoing());
        assert_eq!(game.winner().map(Player::token), Some(Token::X));
        assert!(matches!(game.status(), GameStatus::Won(_)));
    }

    #[test]
    fn test_first_seat_may_hold_o() {
        let mut game = GameController::new(
            Player::new("Alice", Token::O),
            Player::new("Bob", Token::X),
        )
        .unwrap();

        let placement = game.play_round(4).unwrap();
        assert_eq!(placement.token, Token::O);
        assert_eq!(game.current_seat(), Seat::Second);
        assert_eq!(game.current_player().token(), Token::X);

        play_all(&mut game, &[0, 3, 1, 5]);
        assert_eq!(game.winner().map(Player::name), Some("Alice"));
        assert_eq!(
            game.winning_line(),
            Some([Position::MiddleLeft, Position::Center, Position::MiddleRight])
        );
    }

    #[test]
    fn test_shared_token_is_rejected() {
        let result = GameController::new(
            Player::new("Alice", Token::X),
            Player::new("Bob", Token::X),
        );
        assert_eq!(result, Err(SharedToken(Token::X)));
    }
}
