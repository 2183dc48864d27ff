//! Tests for the game controller's public contract.

use tictactoe_core::{
    Board, GameController, GameStatus, Player, Position, RejectedRound, SharedToken, Token,
};

fn new_game() -> GameController {
    GameController::new(
        Player::new("Player One", Token::X),
        Player::new("Player Two", Token::O),
    )
    .expect("Distinct marks")
}

#[test]
fn test_first_player_moves_on_fresh_board() {
    let game = new_game();
    assert_eq!(game.current_player().name(), "Player One");
    assert_eq!(game.current_player().token(), Token::X);
    assert_eq!(game.board(), Board::new());
    assert!(game.winner().is_none());
    assert!(game.is_game_ongoing());
}

#[test]
fn test_every_opening_cell_is_played_by_first_player() {
    for pos in 0..9 {
        let mut game = new_game();
        let placement = game.play_round(pos).expect("Valid opening");
        assert_eq!(placement.token, Token::X);
        assert_eq!(game.board().occupied_count(), 1);
        assert_eq!(game.current_player().token(), Token::O);
    }
}

#[test]
fn test_turns_alternate_and_occupancy_grows() {
    let mut game = new_game();
    let moves = [4, 0, 8, 2, 1, 7, 6, 5];

    for (count, pos) in moves.into_iter().enumerate() {
        let mover = game.current_player().token();
        let expected_next = if count % 2 == 0 { Token::O } else { Token::X };
        assert_eq!(game.board().occupied_count(), count);

        let placement = game.play_round(pos).expect("Valid round");
        assert_eq!(placement.token, mover);
        assert_eq!(game.board().occupied_count(), count + 1);
        assert_eq!(game.current_player().token(), expected_next);
    }
}

#[test]
fn test_first_seat_holding_o_plays_to_a_win() {
    let mut game = GameController::new(
        Player::new("Alice", Token::O),
        Player::new("Bob", Token::X),
    )
    .expect("Distinct marks");

    assert_eq!(game.current_player().name(), "Alice");
    for pos in [0, 3, 4, 5, 8] {
        game.play_round(pos).expect("Valid round");
    }

    assert_eq!(game.winner().map(Player::name), Some("Alice"));
    assert_eq!(game.winner().map(Player::token), Some(Token::O));
    assert_eq!(game.board().count(Token::O), 3);
    assert_eq!(game.board().count(Token::X), 2);
    assert!(matches!(game.status(), GameStatus::Won(p) if p.name() == "Alice"));

    game.reset_game();
    assert_eq!(game.current_player().token(), Token::O);
}

#[test]
fn test_players_sharing_a_mark_are_refused() {
    let result = GameController::new(
        Player::new("Alice", Token::O),
        Player::new("Bob", Token::O),
    );
    assert_eq!(result, Err(SharedToken(Token::O)));
}

#[test]
fn test_same_cell_twice_is_rejected() {
    let mut game = new_game();
    game.play_round(4).expect("Valid round");
    let after_first = game.board();

    assert_eq!(
        game.play_round(4),
        Err(RejectedRound::Occupied(Position::Center))
    );
    assert_eq!(game.board(), after_first);
    assert_eq!(game.current_player().token(), Token::O);
}

#[test]
fn test_off_board_positions_are_rejected() {
    let mut game = new_game();
    for pos in [-1, 9, 100, i64::MIN, i64::MAX] {
        assert_eq!(game.play_round(pos), Err(RejectedRound::OutOfRange(pos)));
    }
    assert_eq!(game.board(), Board::new());
    assert_eq!(game.current_player().token(), Token::X);
}

#[test]
fn test_x_wins_top_row() {
    let mut game = new_game();
    for pos in [0, 3, 1, 4, 2] {
        game.play_round(pos).expect("Valid round");
    }

    assert_eq!(game.winner().map(Player::name), Some("Player One"));
    assert_eq!(
        game.board().cells(),
        [
            Some(Token::X),
            Some(Token::X),
            Some(Token::X),
            Some(Token::O),
            Some(Token::O),
            None,
            None,
            None,
            None,
        ]
    );

    // Empty cells remain, but the game is decided.
    assert!(game.is_game_ongoing());
    assert_eq!(game.play_round(5), Err(RejectedRound::GameDecided));
    assert_eq!(game.board().occupied_count(), 5);
    assert!(matches!(game.status(), GameStatus::Won(p) if p.token() == Token::X));
}

#[test]
fn test_full_board_without_winner_is_tie() {
    let mut game = new_game();
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        let placement = game.play_round(pos).expect("Valid round");
        assert!(!placement.won);
    }

    assert!(!game.board().has_empty());
    assert!(game.winner().is_none());
    assert!(!game.is_game_ongoing());
    assert_eq!(game.status(), GameStatus::Tied);
    assert_eq!(game.status().winner(), None);
}

#[test]
fn test_reset_mid_game() {
    let mut game = new_game();
    for pos in [4, 0, 8] {
        game.play_round(pos).expect("Valid round");
    }

    game.reset_game();

    assert_eq!(game.board(), Board::new());
    assert!(game.winner().is_none());
    assert_eq!(game.current_player().token(), Token::X);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_reset_after_win_reopens_play() {
    let mut game = new_game();
    for pos in [0, 3, 1, 4, 2] {
        game.play_round(pos).expect("Valid round");
    }
    game.set_players_names("Alice", "Bob");

    game.reset_game();

    assert!(game.winner().is_none());
    assert!(game.play_round(0).is_ok());
    let (one, two) = game.players();
    assert_eq!(one.name(), "Alice");
    assert_eq!(two.name(), "Bob");
}

#[test]
fn test_renaming_leaves_game_state_alone() {
    let mut game = new_game();
    for pos in [0, 3, 1, 4, 2] {
        game.play_round(pos).expect("Valid round");
    }
    let board = game.board();

    game.set_players_names("Alice", "Bob");

    let (one, two) = game.players();
    assert_eq!((one.name(), one.token()), ("Alice", Token::X));
    assert_eq!((two.name(), two.token()), ("Bob", Token::O));
    assert_eq!(game.board(), board);
    assert_eq!(game.winner().map(Player::name), Some("Alice"));
}

#[test]
fn test_empty_names_are_accepted() {
    let mut game = new_game();
    game.set_players_names("", "");
    let (one, two) = game.players();
    assert_eq!(one.name(), "");
    assert_eq!(two.name(), "");
}

#[test]
fn test_board_snapshots_are_independent() {
    let mut game = new_game();
    game.play_round(4).expect("Valid round");

    let first = game.board();
    let mut second = game.board();
    assert_eq!(first, second);

    second.set(Position::TopLeft, Some(Token::O));
    second.clear();

    assert_ne!(first, second);
    assert_eq!(game.board(), first);
    assert_eq!(game.board().get(Position::Center), Some(Token::X));
}

#[test]
fn test_status_matches_two_flag_reading() {
    let mut game = new_game();
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        let expected = match (game.winner(), game.is_game_ongoing()) {
            (Some(_), _) => "won",
            (None, false) => "tied",
            (None, true) => "in progress",
        };
        let status = match game.status() {
            GameStatus::Won(_) => "won",
            GameStatus::Tied => "tied",
            GameStatus::InProgress => "in progress",
        };
        assert_eq!(status, expected);
        game.play_round(pos).expect("Valid round");
    }
    assert_eq!(game.status(), GameStatus::Tied);
}

#[test]
fn test_board_serializes_as_cells() {
    let mut game = new_game();
    game.play_round(0).expect("Valid round");
    game.play_round(8).expect("Valid round");

    let json = serde_json::to_value(game.board()).expect("Serializable board");
    assert_eq!(
        json,
        serde_json::json!({
            "cells": ["X", null, null, null, null, null, null, null, "O"]
        })
    );
}
