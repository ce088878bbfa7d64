//! Game flow tests - driving the turn machine through whole games

use term_tictactoe::core::{GameState, MoveError};
use term_tictactoe::types::{Coord, GameStatus, Player};

fn play(game: &mut GameState, moves: &[(usize, usize)]) -> GameStatus {
    let mut status = game.status;
    for &(row, col) in moves {
        status = game.apply(Coord::new(row, col)).expect("legal move");
    }
    status
}

#[test]
fn test_players_alternate() {
    let mut game = GameState::new(3);
    assert_eq!(game.to_move, Player::One);

    game.apply(Coord::new(0, 0)).unwrap();
    assert_eq!(game.to_move, Player::Two);

    game.apply(Coord::new(1, 1)).unwrap();
    assert_eq!(game.to_move, Player::One);
}

#[test]
fn test_move_touches_only_target_cell() {
    let mut game = GameState::new(3);
    game.apply(Coord::new(0, 0)).unwrap();

    let before: Vec<_> = game.board.cells().to_vec();
    game.apply(Coord::new(1, 2)).unwrap();

    for (i, (old, new)) in before.iter().zip(game.board.cells()).enumerate() {
        if i == 3 + 2 {
            assert_eq!(*new, Some(Player::Two));
        } else {
            assert_eq!(old, new, "cell {} changed unexpectedly", i);
        }
    }
}

#[test]
fn test_occupied_cell_rejected_without_side_effects() {
    let mut game = GameState::new(3);
    game.apply(Coord::new(0, 0)).unwrap();

    let board_before = game.board.clone();
    let result = game.apply(Coord::new(0, 0));

    assert_eq!(result, Err(MoveError::Occupied { row: 0, col: 0 }));
    assert_eq!(game.board, board_before);
    // Same player stays on the move after a rejection
    assert_eq!(game.to_move, Player::Two);
    assert_eq!(game.status, GameStatus::InProgress);
}

#[test]
fn test_out_of_bounds_rejected_without_side_effects() {
    let mut game = GameState::new(3);
    let board_before = game.board.clone();

    let result = game.apply(Coord::new(9, 0));
    assert_eq!(
        result,
        Err(MoveError::OutOfBounds {
            row: 9,
            col: 0,
            size: 3
        })
    );
    assert_eq!(game.board, board_before);
    assert_eq!(game.to_move, Player::One);
}

#[test]
fn test_row_win_scenario() {
    // Reference scenario: (0,0)=1 (1,1)=2 (0,1)=1 (2,2)=2 (0,2)=1
    let mut game = GameState::new(3);
    let status = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(status, GameStatus::Won(Player::One));
    assert_eq!(game.status, GameStatus::Won(Player::One));
    // The winner stays recorded as the mover; the turn does not pass.
    assert_eq!(game.to_move, Player::One);
}

#[test]
fn test_column_win_for_player_two() {
    let mut game = GameState::new(3);
    // Player 2 assembles column 2 while player 1 scatters
    let status = play(&mut game, &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(status, GameStatus::Won(Player::Two));
}

#[test]
fn test_full_board_draw() {
    let mut game = GameState::new(3);
    let status = play(
        &mut game,
        &[
            (0, 0),
            (1, 1),
            (0, 2),
            (0, 1),
            (2, 1),
            (2, 0),
            (1, 2),
            (2, 2),
            (1, 0),
        ],
    );

    assert_eq!(status, GameStatus::Drawn);
    assert!(game.board.is_full());
    assert_eq!(game.board.winner(), None);
}

#[test]
fn test_winning_final_move_beats_draw() {
    // The ninth move fills the board and completes the main diagonal at the
    // same time. The win must be reported, not the draw.
    let mut game = GameState::new(3);
    let status = play(
        &mut game,
        &[
            (0, 0),
            (0, 2),
            (0, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
            (1, 1),
        ],
    );

    assert!(game.board.is_full());
    assert_eq!(status, GameStatus::Won(Player::One));
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = GameState::new(3);
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(game.status, GameStatus::Won(Player::One));

    let board_before = game.board.clone();
    assert_eq!(game.apply(Coord::new(1, 0)), Err(MoveError::Finished));
    assert_eq!(game.board, board_before);
}

#[test]
fn test_larger_board_row_win() {
    let mut game = GameState::new(5);
    // Player 1 fills row 3, player 2 scatters elsewhere
    let status = play(
        &mut game,
        &[
            (3, 0),
            (0, 0),
            (3, 1),
            (0, 1),
            (3, 2),
            (1, 0),
            (3, 3),
            (1, 1),
            (3, 4),
        ],
    );
    assert_eq!(status, GameStatus::Won(Player::One));
}
