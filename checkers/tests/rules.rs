use checkers::*;

const FIRST: Cell = Cell::OccupiedBy(Player::First);
const SECOND: Cell = Cell::OccupiedBy(Player::Second);

/// Play a list of moves that must all be accepted.
fn play(game: &mut GameState, moves: &[(Coord, Coord)]) {
    for &(from, to) in moves {
        let result = attempt_move(game, from, to);
        assert!(result.is_applied(), "{from:?} -> {to:?} was {result:?}");
    }
}

/// Reach a position with First on (2,1), Second on (3,2) and (4,3) empty,
/// First to move.
fn capture_setup(config: GameConfig) -> GameState {
    let mut game = new_game_with(config).unwrap();
    play(
        &mut game,
        &[
            ((2, 5), (3, 6)),
            ((5, 2), (4, 3)),
            ((3, 6), (4, 7)),
            ((4, 3), (3, 2)),
        ],
    );
    assert_eq!(current_player(&game), Player::First);
    game
}

mod initialization {
    use super::*;

    #[test]
    fn parity_and_starting_rows() {
        let cells = snapshot(&new_game());
        assert_eq!(cells.len(), 8);
        for (r, row) in cells.iter().enumerate() {
            assert_eq!(row.len(), 8);
            for (c, &cell) in row.iter().enumerate() {
                assert_eq!(cell == Cell::Illegal, (r + c) % 2 == 0, "({r},{c})");
                if cell == Cell::Illegal {
                    continue;
                }
                let expected = match r {
                    0..=2 => FIRST,
                    5..=7 => SECOND,
                    _ => Cell::Empty,
                };
                assert_eq!(cell, expected, "({r},{c})");
            }
        }
    }

    #[test]
    fn new_board_matches_new_game() {
        assert_eq!(new_board().to_rows(), snapshot(&new_game()));
    }

    #[test]
    fn variant_board_size() {
        let game = new_game_with(GameConfig {
            board_size: 10,
            starting_rows: 4,
            ..GameConfig::default()
        })
        .unwrap();
        assert_eq!(game.board().piece_count(Player::First), 20);
        assert_eq!(game.board().piece_count(Player::Second), 20);
        assert_eq!(game.board().get((4, 1)), Some(Cell::Empty));
    }
}

mod turns {
    use super::*;

    #[test]
    fn simple_step_hands_over_turn() {
        let mut game = new_game();
        let result = attempt_move(&mut game, (2, 1), (3, 0));
        assert_eq!(
            result,
            MoveResult::Applied(MoveOutcome::Step {
                from: (2, 1),
                to: (3, 0)
            })
        );
        assert_eq!(game.board().get((2, 1)), Some(Cell::Empty));
        assert_eq!(game.board().get((3, 0)), Some(FIRST));
        assert_eq!(current_player(&game), Player::Second);
    }

    #[test]
    fn rejection_keeps_turn() {
        let mut game = new_game();
        let result = attempt_move(&mut game, (2, 1), (4, 1));
        assert!(!result.is_applied());
        assert_eq!(current_player(&game), Player::First);
    }

    #[test]
    fn alternating_play() {
        let mut game = new_game();
        play(
            &mut game,
            &[((2, 1), (3, 2)), ((5, 0), (4, 1)), ((2, 3), (3, 4))],
        );
        assert_eq!(current_player(&game), Player::Second);
        assert_eq!(game.history().len(), 3);
    }
}

mod rejections {
    use super::*;

    #[test]
    fn out_of_bounds_destination() {
        let mut game = new_game();
        for dest in [(-1, 0), (8, 1), (3, -1), (3, 8), (i32::MAX, i32::MIN)] {
            assert_eq!(
                attempt_move(&mut game, (2, 1), dest),
                MoveResult::Rejected(MoveRejection::OutOfBoundsOrOccupiedDestination)
            );
        }
    }

    #[test]
    fn illegal_cell_destination() {
        let mut game = new_game();
        assert_eq!(
            attempt_move(&mut game, (2, 1), (3, 1)),
            MoveResult::Rejected(MoveRejection::OutOfBoundsOrOccupiedDestination)
        );
    }

    #[test]
    fn foreign_or_empty_origin() {
        let mut game = new_game();
        assert_eq!(
            attempt_move(&mut game, (5, 0), (4, 1)),
            MoveResult::Rejected(MoveRejection::NotOwnPiece)
        );
        assert_eq!(
            attempt_move(&mut game, (3, 2), (4, 3)),
            MoveResult::Rejected(MoveRejection::NotOwnPiece)
        );
    }

    #[test]
    fn first_cannot_move_backward() {
        let mut game = new_game();
        play(&mut game, &[((2, 1), (3, 2)), ((5, 0), (4, 1))]);
        // (2,1) is free again; stepping back onto it is a backward move.
        assert_eq!(
            attempt_move(&mut game, (3, 2), (2, 1)),
            MoveResult::Rejected(MoveRejection::BackwardMove)
        );
    }

    #[test]
    fn second_cannot_move_backward() {
        let mut game = new_game();
        play(
            &mut game,
            &[((2, 1), (3, 2)), ((5, 0), (4, 1)), ((2, 3), (3, 4))],
        );
        assert_eq!(
            attempt_move(&mut game, (4, 1), (5, 0)),
            MoveResult::Rejected(MoveRejection::BackwardMove)
        );
    }

    #[test]
    fn rejection_does_not_mutate() {
        let mut game = new_game();
        let before = snapshot(&game);
        for (from, to) in [((2, 1), (4, 3)), ((5, 0), (4, 1)), ((2, 1), (9, 9))] {
            attempt_move(&mut game, from, to);
        }
        assert_eq!(snapshot(&game), before);
        assert!(game.history().is_empty());
    }
}

mod captures {
    use super::*;

    #[test]
    fn capture_removes_jumped_piece() {
        let mut game = capture_setup(GameConfig::default());
        let result = attempt_move(&mut game, (2, 1), (4, 3));
        assert_eq!(
            result,
            MoveResult::Applied(MoveOutcome::Capture {
                from: (2, 1),
                captured: (3, 2),
                to: (4, 3)
            })
        );
        let board = game.board();
        assert_eq!(board.get((2, 1)), Some(Cell::Empty));
        assert_eq!(board.get((3, 2)), Some(Cell::Empty));
        assert_eq!(board.get((4, 3)), Some(FIRST));
        assert_eq!(board.piece_count(Player::Second), 11);
        assert_eq!(current_player(&game), Player::Second);
    }

    #[test]
    fn occupied_overshoot_square_is_an_illegal_destination() {
        let mut game = capture_setup(GameConfig::default());
        let before = snapshot(&game);
        // (5,4) still holds a Second piece, so the destination check fires first.
        assert_eq!(
            attempt_move(&mut game, (2, 1), (5, 4)),
            MoveResult::Rejected(MoveRejection::OutOfBoundsOrOccupiedDestination)
        );
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn legacy_ignores_destination_distance() {
        let mut game = capture_setup(GameConfig {
            capture_policy: CapturePolicy::Legacy,
            ..GameConfig::default()
        });
        // Any empty square further down-right selects the same jump.
        assert_eq!(game.board().get((4, 5)), Some(Cell::Empty));
        let result = attempt_move(&mut game, (2, 1), (4, 5));
        assert_eq!(
            result,
            MoveResult::Applied(MoveOutcome::Capture {
                from: (2, 1),
                captured: (3, 2),
                to: (4, 3)
            })
        );
        assert_eq!(game.board().get((4, 5)), Some(Cell::Empty));
        assert_eq!(game.board().get((4, 3)), Some(FIRST));
    }

    #[test]
    fn strict_treats_same_direction_as_plain_move() {
        let mut game = capture_setup(GameConfig::default());
        assert_eq!(
            attempt_move(&mut game, (2, 1), (4, 5)),
            MoveResult::Rejected(MoveRejection::InvalidShape)
        );
    }

    #[test]
    fn resumed_position_captures() {
        let mut rows = new_board().to_rows();
        for row in rows.iter_mut() {
            for cell in row.iter_mut().filter(|c| c.is_playable()) {
                *cell = Cell::Empty;
            }
        }
        rows[2][1] = FIRST;
        rows[3][2] = SECOND;
        let board = Board::from_rows(rows).unwrap();
        let mut game = GameState::from_board(board, Player::First, GameConfig::default());

        assert!(attempt_move(&mut game, (2, 1), (4, 3)).is_applied());
        assert_eq!(game.board().piece_count(Player::Second), 0);
    }
}

#[test]
fn snapshot_serializes_to_json() {
    let json = serde_json::to_string(&snapshot(&new_game())).unwrap();
    let rows: Vec<Vec<Cell>> = serde_json::from_str(&json).unwrap();
    assert_eq!(rows, snapshot(&new_game()));
    assert!(json.starts_with(r#"[["Illegal",{"OccupiedBy":"First"}"#));
}
