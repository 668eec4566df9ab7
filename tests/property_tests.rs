//! Property tests for the board state machine.

use std::sync::Arc;

use proptest::prelude::*;
use syllable_memory::board::{Board, CellKind, SELECTION_SIZE};
use syllable_memory::round::{RoundFactory, CELLS_PER_ROUND};
use syllable_memory::words::Word;

const TOKENS: [&str; 6] = ["Ap-fel", "Son-ne", "Kat-ze", "Hund", "Schmet-ter-ling", "Ball"];

fn round(seed: u64, picks: [usize; 3]) -> Board {
    let words = picks.map(|i| Arc::new(Word::from_token(TOKENS[i], "v")));
    RoundFactory::with_seed(seed).create_round(words)
}

fn distinct_picks() -> impl Strategy<Value = [usize; 3]> {
    Just((0..TOKENS.len()).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|v| [v[0], v[1], v[2]])
}

proptest! {
    #[test]
    fn matches_is_symmetric(seed in any::<u64>(), picks in distinct_picks()) {
        let board = round(seed, picks);
        for a in board.cells() {
            for b in board.cells() {
                prop_assert_eq!(a.matches(b), b.matches(a));
            }
        }
    }

    #[test]
    fn count_cells_never_match(seed in any::<u64>(), picks in distinct_picks()) {
        let board = round(seed, picks);
        let counts: Vec<_> = board.cells().iter().filter(|c| c.kind() == CellKind::SyllableCount).collect();
        for a in &counts {
            for b in &counts {
                prop_assert!(!a.matches(b));
            }
        }
    }

    #[test]
    fn rounds_have_one_cell_per_word_and_face(seed in any::<u64>(), picks in distinct_picks()) {
        let board = round(seed, picks);
        prop_assert_eq!(board.cells().len(), CELLS_PER_ROUND);
        for i in picks {
            let spelling = Word::from_token(TOKENS[i], "v").spelling().to_string();
            for kind in CellKind::FACES {
                let n = board
                    .cells()
                    .iter()
                    .filter(|c| c.kind() == kind && c.word().is_some_and(|w| w.spelling() == spelling))
                    .count();
                prop_assert_eq!(n, 1);
            }
        }
    }

    #[test]
    fn selection_tracks_last_three(
        seed in any::<u64>(),
        picks in distinct_picks(),
        clicks in prop::collection::vec(0..CELLS_PER_ROUND, 0..30),
    ) {
        let mut board = round(seed, picks);
        let mut model: Vec<usize> = Vec::new();

        for click in clicks {
            let id = board.cells()[click].id();
            let before = board.selected().to_vec();
            board.toggle_select(id);

            if let Some(pos) = model.iter().position(|&m| m == click) {
                model.remove(pos);
            } else {
                model.push(click);
                if model.len() > SELECTION_SIZE {
                    model.remove(0);
                }
            }
            let expected: Vec<_> = model.iter().map(|&i| board.cells()[i].id()).collect();
            prop_assert_eq!(board.selected(), expected.as_slice());

            // A fresh select without eviction is undone by a second toggle
            if before.len() < SELECTION_SIZE && !before.contains(&id) {
                let mut copy = board.clone();
                copy.toggle_select(id);
                prop_assert_eq!(copy.selected(), before.as_slice());
            }
        }
    }

    #[test]
    fn complete_match_requires_three(
        seed in any::<u64>(),
        picks in distinct_picks(),
        clicks in prop::collection::vec(0..CELLS_PER_ROUND, 0..3),
    ) {
        let mut board = round(seed, picks);
        for click in clicks {
            let id = board.cells()[click].id();
            board.toggle_select(id);
        }
        if board.selected().len() < SELECTION_SIZE {
            prop_assert!(!board.selection_is_complete_match());
        }
    }

    #[test]
    fn solved_iff_all_empty(seed in any::<u64>(), picks in distinct_picks(), order in Just(vec![0usize, 1, 2]).prop_shuffle()) {
        let mut board = round(seed, picks);
        for (step, &w) in order.iter().enumerate() {
            let spelling = Word::from_token(TOKENS[picks[w]], "v").spelling().to_string();
            let ids: Vec<_> = board
                .cells()
                .iter()
                .filter(|c| c.word().is_some_and(|x| x.spelling() == spelling))
                .map(|c| c.id())
                .collect();
            for id in ids {
                board.toggle_select(id);
            }
            board.resolve_selection().unwrap();

            let all_empty = board.cells().iter().all(|c| c.kind() == CellKind::Empty);
            prop_assert_eq!(board.is_solved(), all_empty);
            prop_assert_eq!(board.is_solved(), step == 2);
        }
    }
}
