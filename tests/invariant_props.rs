//! Property tests for partitioning and the board/tile invariant.

use proptest::prelude::*;

use rust_2048::board::{partition, Board, Cell};
use rust_2048::core::{Coordinate, Direction, GameOptions, TileId};
use rust_2048::game::{GameAction, GameSession, GameState, GameStatus};

/// Cell content before building a state: 0 empty, 1 obstacle, n >= 2 a tile
/// of value 2^(n - 2).
fn layout(size: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            4 => Just(0u8),
            1 => Just(1u8),
            5 => 2u8..8,
        ],
        size * size,
    )
}

fn board_and_layout() -> impl Strategy<Value = (usize, Vec<u8>)> {
    (2usize..=6).prop_flat_map(|size| (Just(size), layout(size)))
}

fn build(size: usize, cells: &[u8]) -> Option<GameState> {
    let obstacles: Vec<_> = cells
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == 1)
        .map(|(i, _)| Coordinate::new(i % size, i / size))
        .collect();
    let board = Board::with_obstacles(size, &obstacles).ok()?;

    let mut state = GameState::from_board(board).ok()?;
    for (i, &c) in cells.iter().enumerate() {
        if c >= 2 {
            let value = 1u32 << (c - 2);
            state = state.with_tile(Coordinate::new(i % size, i / size), value).ok()?;
        }
    }
    Some(state)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn line() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(
        prop_oneof![
            Just(Cell::Empty),
            Just(Cell::Obstacle),
            (1u32..5).prop_map(|id| Cell::Tile(TileId(id))),
        ],
        0..12,
    )
}

proptest! {
    /// Ranges exclude obstacles, are ordered and disjoint, and together with
    /// the obstacles cover the line exactly once.
    #[test]
    fn prop_partition_covers_line(cells in line()) {
        let ranges = partition(&cells);
        let mut covered = vec![0u8; cells.len()];

        for pair in ranges.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
        for range in &ranges {
            prop_assert!(range.start <= range.end);
            for i in range.indices() {
                prop_assert!(!cells[i].is_obstacle());
                covered[i] += 1;
            }
            // Maximal: bounded by an obstacle or the line end on each side.
            prop_assert!(range.start == 0 || cells[range.start - 1].is_obstacle());
            prop_assert!(range.end + 1 == cells.len() || cells[range.end + 1].is_obstacle());
        }
        for (i, cell) in cells.iter().enumerate() {
            let expected = u8::from(!cell.is_obstacle());
            prop_assert_eq!(covered[i], expected);
        }
    }

    /// Moves keep board and tile map in 1:1 correspondence, never touch
    /// obstacles, and conserve the sum of tile values.
    #[test]
    fn prop_moves_preserve_invariants(
        (size, cells) in board_and_layout(),
        moves in prop::collection::vec(direction(), 1..12),
    ) {
        let Some(mut state) = build(size, &cells) else {
            return Ok(());
        };
        let obstacles = state.board().obstacles();
        let total: u32 = state.tiles().values().map(|t| t.value).sum();

        for direction in moves {
            let before = state.clone();
            state = state.apply(&GameAction::Move(direction)).unwrap();

            prop_assert!(state.validate().is_ok());
            prop_assert_eq!(state.board().tile_count(), state.tiles().len());
            prop_assert_eq!(state.board().obstacles(), obstacles.clone());
            prop_assert_eq!(state.tiles().values().map(|t| t.value).sum::<u32>(), total);
            prop_assert!(state.tiles().len() <= before.tiles().len());

            if !state.has_changed() {
                prop_assert_eq!(state.board(), before.board());
                prop_assert_eq!(state.tiles(), before.tiles());
            }
        }
    }

    /// Repeating one direction reaches a fixpoint.
    #[test]
    fn prop_move_reaches_fixpoint((size, cells) in board_and_layout(), direction in direction()) {
        let Some(mut state) = build(size, &cells) else {
            return Ok(());
        };

        // A changed move either merges (one tile fewer at least) or only
        // slides, and a slide-only move leaves nothing to change.
        for _ in 0..=(size * size) {
            state = state.apply(&GameAction::Move(direction)).unwrap();
        }
        let again = state.apply(&GameAction::Move(direction)).unwrap();
        prop_assert!(!again.has_changed());
    }

    /// Full sessions keep the invariant after every move and spawn.
    #[test]
    fn prop_session_invariant(
        seed in any::<u64>(),
        size in prop::sample::select(vec![4usize, 6, 8]),
        obstacles in 0usize..=4,
        moves in prop::collection::vec(direction(), 1..40),
    ) {
        let mut session = GameSession::new(seed);
        session.start_game(GameOptions::new(size, obstacles)).unwrap();

        for direction in moves {
            let before = session.tiles().len();
            session.move_tiles(direction).unwrap();

            let state = session.state().unwrap();
            prop_assert!(state.validate().is_ok());
            prop_assert_eq!(state.board().obstacles().len(), obstacles);
            // At most one tile appears per turn.
            prop_assert!(session.tiles().len() <= before + 1);

            if session.status() != GameStatus::Playing {
                break;
            }
        }
    }
}
