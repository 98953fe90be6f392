//! Search integration tests using the default evaluator.

use ostle::core::{Board, Direction, GameState, Move, Side};
use ostle::rules::{apply, is_legal};
use ostle::search::{best_move, Evaluator, SearchConfig, Searcher};

fn position(diagram: &str, to_move: Side) -> GameState {
    GameState::from_board(Board::from_interior(diagram).unwrap(), to_move).unwrap()
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_search_returns_legal_move_for_both_sides() {
    let state = GameState::new_game();
    let mut searcher = Searcher::new(SearchConfig::default().with_depth(2));

    let first = searcher.best_move(&state).unwrap();
    assert!(is_legal(&state, first));

    let next = apply(&state, first);
    let second = searcher.best_move(&next).unwrap();
    assert!(is_legal(&next, second));
    assert_eq!(next.cell(second.index).side().unwrap_or(Side::Second), Side::Second);
}

#[test]
fn test_search_avoids_self_drop() {
    // from the start only downward steps and hole moves keep every piece
    let state = GameState::new_game();
    let mut searcher = Searcher::new(SearchConfig::default().with_depth(1));

    let mv = searcher.best_move(&state).unwrap();
    let next = apply(&state, mv);
    assert_eq!(next.captured(Side::Second), 0);
}

#[test]
fn test_depth_zero_scores_children_only() {
    let state = GameState::new_game();
    let mut searcher = Searcher::new(SearchConfig::default().with_depth(0));

    assert!(searcher.best_move(&state).is_some());
    assert_eq!(searcher.stats().nodes, 24);
    assert_eq!(searcher.stats().evaluations, 24);
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_second_takes_capture() {
    // o can push x off the bottom edge
    let state = position(
        "x....
         .....
         .....
         ...o.
         H..x.",
        Side::Second,
    );

    for depth in 1..=3 {
        let mv = best_move(&state, depth, 3).unwrap();
        assert_eq!(mv, Move::new(32, Direction::Down), "depth {depth}");
    }
}

#[test]
fn test_first_takes_capture_too() {
    let state = position(
        "o....
         .....
         .....
         ...x.
         H..o.",
        Side::First,
    );

    let mv = best_move(&state, 2, 3).unwrap();
    assert_eq!(mv, Move::new(32, Direction::Down));
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_same_seed_same_moves() {
    let config = SearchConfig::default().with_depth(2).with_seed(12345);
    let mut a = Searcher::new(config.clone());
    let mut b = Searcher::new(config);

    let mut state = GameState::new_game();
    for _ in 0..6 {
        let ma = a.best_move(&state);
        let mb = b.best_move(&state);
        assert_eq!(ma, mb);
        match ma {
            Some(mv) => state = apply(&state, mv),
            None => break,
        }
    }
}

#[test]
fn test_unshuffled_search_is_stable() {
    let config = SearchConfig::default().with_depth(2).with_shuffle(false);
    let state = GameState::new_game();

    let first = Searcher::new(config.clone().with_seed(1)).best_move(&state);
    let second = Searcher::new(config.with_seed(2)).best_move(&state);
    assert_eq!(first, second);
}

#[test]
fn test_play_advances_state() {
    let mut searcher = Searcher::new(SearchConfig::default().with_depth(1));
    let state = GameState::new_game();

    let next = searcher.play(&state);
    assert_eq!(next.to_move(), Side::Second);
    assert_eq!(next.prev_board(), Some(state.board()));
}

#[test]
fn test_custom_evaluator() {
    struct HoleNearTop;

    impl Evaluator for HoleNearTop {
        fn evaluate(&self, state: &GameState) -> f64 {
            // indices grow downward; First wants the hole near the top
            state.hole() as f64
        }
    }

    let config = SearchConfig::default().with_depth(1).with_shuffle(false);
    let mut searcher = Searcher::with_evaluator(config, HoleNearTop);
    let state = GameState::new_game();

    assert_eq!(searcher.best_move(&state), Some(Move::new(24, Direction::Up)));
}
