//! Property tests over random legal playouts.

use proptest::{collection::vec, prelude::*};

use ostle::core::board::step;
use ostle::core::{Board, Cell, Direction, GameState, Move, Side, CELL_COUNT};
use ostle::rules::{
    apply, legal_move_list, scan_chain, try_apply, MoveError, Replay, Terminator,
};

/// Play a game choosing each move by index from `choices`.
///
/// Returns every (state, move) pair along the way.
fn playout(choices: &[u16]) -> Vec<(GameState, Move)> {
    let mut state = GameState::new_game();
    let mut out = Vec::new();
    for &choice in choices {
        if state.is_terminal() {
            break;
        }
        let moves = legal_move_list(&state, state.to_move());
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice as usize % moves.len()];
        let next = apply(&state, mv);
        out.push((state, mv));
        state = next;
    }
    out
}

fn pieces_and_captures(state: &GameState) -> usize {
    Side::ALL
        .into_iter()
        .map(|side| state.pieces(side).len() + usize::from(state.captured(side)))
        .sum()
}

/// Cells after `mv`, computed straight from the chain scan: a capturing
/// push drops the tail, and every other chain member moves one cell on.
fn shifted_cells(state: &GameState, mv: Move) -> Vec<Cell> {
    let scan = scan_chain(state, mv.index, mv.direction);
    let before = state.board().cells().to_vec();
    let mut cells = before.clone();

    let moved = if scan.terminator.captures() {
        cells[scan.tail()] = Cell::Empty;
        &scan.chain[..scan.chain.len() - 1]
    } else {
        &scan.chain[..]
    };
    for &from in moved {
        cells[from] = Cell::Empty;
    }
    for &from in moved {
        let to = step(from, mv.direction).expect("chain member steps onto the board");
        cells[to] = before[from];
    }
    cells
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_captures_account_for_every_lost_piece(choices in vec(any::<u16>(), 0..60)) {
        for (state, mv) in playout(&choices) {
            let next = try_apply(&state, mv).unwrap();

            let lost = state.pieces(Side::First).len() + state.pieces(Side::Second).len()
                - next.pieces(Side::First).len() - next.pieces(Side::Second).len();
            prop_assert!(lost <= 1);
            prop_assert_eq!(pieces_and_captures(&next), pieces_and_captures(&state));
        }
    }

    #[test]
    fn prop_hole_only_steps_into_empty(choices in vec(any::<u16>(), 0..40), dir in direction()) {
        let states = playout(&choices);
        let state = states.last().map(|(s, mv)| apply(s, *mv)).unwrap_or_default();

        let scan = scan_chain(&state, state.hole(), dir);
        let result = try_apply(&state, Move::new(state.hole(), dir));
        match scan.terminator {
            Terminator::Empty { .. } if scan.chain.len() == 1 => {
                prop_assert!(matches!(result, Ok(_) | Err(MoveError::Repetition)));
            }
            _ => prop_assert!(result.is_err()),
        }
    }

    #[test]
    fn prop_replay_matches_apply(choices in vec(any::<u16>(), 1..60)) {
        for (state, mv) in playout(&choices) {
            let mut replay = Replay::new(&state, mv).unwrap();
            while replay.advance().is_some() {}
            prop_assert!(replay.is_done());

            let direct = apply(&state, mv);
            let expected = shifted_cells(&state, mv);
            prop_assert_eq!(replay.current().board().cells(), expected.as_slice());
            prop_assert_eq!(direct.board().cells(), expected.as_slice());

            let replayed = replay.finish();
            prop_assert_eq!(replayed.board(), direct.board());
        }
    }

    #[test]
    fn prop_caches_match_board(choices in vec(any::<u16>(), 0..80)) {
        for (state, mv) in playout(&choices) {
            let next = apply(&state, mv);
            prop_assert!(next.check_invariants().is_ok());
            prop_assert_eq!(next.to_move(), state.to_move().opponent());
            prop_assert_eq!(next.prev_board(), Some(state.board()));

            let holes = next.board().cells().iter().filter(|c| **c == Cell::Hole).count();
            prop_assert_eq!(holes, 1);
        }
    }

    #[test]
    fn prop_illegal_moves_leave_state_unchanged(
        choices in vec(any::<u16>(), 0..30),
        index in 0..CELL_COUNT + 4,
        dir in direction(),
    ) {
        let states = playout(&choices);
        let state = states.last().map(|(s, mv)| apply(s, *mv)).unwrap_or_default();
        let mv = Move::new(index, dir);

        if try_apply(&state, mv).is_err() {
            prop_assert_eq!(apply(&state, mv), state);
        }
    }

    #[test]
    fn prop_self_push_credits_opponent(row in 0usize..5, dir in prop::sample::select(vec![Direction::Left, Direction::Right])) {
        // a full row of one side pushed sideways drops its own end piece
        let mut lines: Vec<String> = vec![".....".into(); 5];
        lines[row] = "xxxxx".into();
        let hole_row = if row == 2 { 0 } else { 2 };
        lines[hole_row] = "..H..".into();
        let board = Board::from_interior(&lines.join("\n")).unwrap();
        let state = GameState::from_board(board, Side::First).unwrap();

        let start = state.pieces(Side::First)[if dir == Direction::Right { 0 } else { 4 }];
        let next = apply(&state, Move::new(start, dir));

        prop_assert_eq!(next.captured(Side::Second), 1);
        prop_assert_eq!(next.captured(Side::First), 0);
        prop_assert_eq!(next.pieces(Side::First).len(), 4);
    }
}
