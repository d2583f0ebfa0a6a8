//! End-to-end engine checks: invariants over random play, AI self-play,
//! and the JSON shapes the host UI consumes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gobblers_engine::{search, GameState, Move, Piece, Player, Pos};

/// Every piece id 0-11 lives in exactly one place: one cell's stack or its
/// owner's unused pool.
fn assert_conserved(state: &GameState) {
    for piece in Piece::all() {
        let on_board: usize = Pos::all()
            .map(|pos| {
                state
                    .board
                    .cell(pos)
                    .pieces()
                    .iter()
                    .filter(|&&p| p == piece)
                    .count()
            })
            .sum();
        let in_pools = state
            .players
            .iter()
            .filter(|ps| ps.is_unused(piece))
            .count();
        assert_eq!(
            on_board + in_pools,
            1,
            "piece {:?} appears {} times on board and {} times in pools",
            piece,
            on_board,
            in_pools
        );
    }
}

#[test]
fn random_playouts_conserve_pieces() {
    let mut rng = StdRng::seed_from_u64(0x60bb1e7);

    for _ in 0..200 {
        let mut state = GameState::initial();
        let mut mover = Player::One;

        for _ in 0..60 {
            let moves = state.legal_moves(mover);
            if moves.is_empty() {
                assert!(state.is_terminal());
                break;
            }
            let mov = moves[rng.random_range(0..moves.len())];

            // Monotonic coverage: the destination was empty or strictly
            // weaker than the moved piece.
            if let Some(top) = state.board.top(mov.to) {
                assert!(mov.piece.power() > top.power());
            }

            let before = state.clone();
            let next = state.apply(mover, &mov);
            assert_eq!(state, before, "apply must not mutate its input");
            state = next;
            assert_conserved(&state);
            assert_eq!(state.board.top(mov.to), Some(mov.piece));

            mover = mover.opponent();
        }
    }
}

#[test]
fn random_playouts_keep_rosters_fixed() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = GameState::initial();
    let rosters = [
        state.player(Player::One).pieces,
        state.player(Player::Two).pieces,
    ];
    let mut mover = Player::One;

    for _ in 0..80 {
        let moves = state.legal_moves(mover);
        if moves.is_empty() {
            break;
        }
        state = state.apply(mover, &moves[rng.random_range(0..moves.len())]);
        assert_eq!(state.player(Player::One).pieces, rosters[0]);
        assert_eq!(state.player(Player::Two).pieces, rosters[1]);
        // Pools only shrink.
        mover = mover.opponent();
    }
}

#[test]
fn search_finds_moves_until_game_ends() {
    // AI self-play at shallow depth: every position with legal moves must
    // produce a move, and applying it must keep the state valid.
    let mut state = GameState::initial();
    let mut mover = Player::One;

    for _ in 0..40 {
        let (mov, score) = search::select_move(&state, mover, 2);
        match mov {
            None => {
                assert!(state.is_terminal());
                assert_eq!(score, state.utility_simple(mover));
                return;
            }
            Some(mov) => {
                assert!(state.legal_moves(mover).contains(&mov));
                state = state.apply(mover, &mov);
                assert_conserved(&state);
            }
        }
        mover = mover.opponent();
    }
    // Shallow self-play may shuffle forever; invariants held throughout.
}

#[test]
fn search_score_is_simple_utility_at_depth_zero() {
    let state = GameState::initial()
        .apply(Player::One, &Move {
            piece: Piece(0),
            from: None,
            to: Pos(0),
        })
        .apply(Player::One, &Move {
            piece: Piece(2),
            from: None,
            to: Pos(1),
        });
    let (mov, score) = search::select_move(&state, Player::One, 0);
    assert_eq!(mov, None);
    // The simple evaluator ignores the two-in-a-row.
    assert_eq!(score, 0);
    assert_eq!(state.utility(Player::One), 100);
}

#[test]
fn move_serializes_to_stable_json() {
    let placement = Move {
        piece: Piece(8),
        from: None,
        to: Pos::from_row_col(1, 2),
    };
    let json = serde_json::to_value(&placement).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "piece": 8, "from": null, "to": 5 })
    );

    let relocation = Move {
        piece: Piece(3),
        from: Some(Pos(0)),
        to: Pos(4),
    };
    let round_tripped: Move =
        serde_json::from_str(&serde_json::to_string(&relocation).unwrap()).unwrap();
    assert_eq!(round_tripped, relocation);
}

#[test]
fn state_serializes_and_restores() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = GameState::initial();
    let mut mover = Player::One;
    for _ in 0..10 {
        let moves = state.legal_moves(mover);
        if moves.is_empty() {
            break;
        }
        state = state.apply(mover, &moves[rng.random_range(0..moves.len())]);
        mover = mover.opponent();
    }

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    // A restored state is fully playable.
    assert_eq!(restored.legal_moves(mover), state.legal_moves(mover));
}
