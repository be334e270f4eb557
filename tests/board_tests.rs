//! Board invariant tests.
//!
//! Random sequences of builds, placements, and moves are applied to a board;
//! after every step the heights stay in range, the occupancy grid agrees with
//! worker positions, and rejected operations change nothing.

use proptest::prelude::*;
use santorini_rules::{Board, Coord, PlayerId, DOME};

#[derive(Clone, Debug)]
enum Op {
    Build(Coord),
    Dome(Coord),
    Place(Coord, PlayerId),
    Move(Coord, Coord),
    Force(Coord, Coord),
}

fn coord() -> impl Strategy<Value = Coord> {
    (-1..6i32, -1..6i32).prop_map(|(x, y)| Coord::new(x, y))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => coord().prop_map(Op::Build),
        1 => coord().prop_map(Op::Dome),
        2 => (coord(), prop::bool::ANY).prop_map(|(c, b)| Op::Place(c, if b { PlayerId::A } else { PlayerId::B })),
        4 => (coord(), coord()).prop_map(|(a, b)| Op::Move(a, b)),
        1 => (coord(), coord()).prop_map(|(a, b)| Op::Force(a, b)),
    ]
}

fn apply(board: &mut Board, op: &Op) -> bool {
    match *op {
        Op::Build(c) => board.build(c).is_ok(),
        Op::Dome(c) => board.build_dome(c).is_ok(),
        Op::Place(c, p) => board.place_worker(c, p).is_ok(),
        Op::Move(a, b) => board.move_worker(a, b).is_ok(),
        Op::Force(a, b) => board.force_move_worker(a, b).is_ok(),
    }
}

fn assert_consistent(board: &Board) {
    for (at, height, worker) in board.cells() {
        assert!(height <= DOME);
        if let Some(worker) = worker {
            assert_eq!(worker.position(), at);
            assert!(height < DOME, "worker standing on a dome at {at}");
        }
    }
    for worker in board.workers() {
        assert_eq!(board.occupant(worker.position()), Some(worker.id()));
    }
}

proptest! {
    /// Every reachable board keeps heights, occupancy, and positions in step.
    #[test]
    fn prop_board_stays_consistent(ops in prop::collection::vec(op(), 1..60)) {
        let mut board = Board::new();
        for op in &ops {
            let before = board.clone();
            if !apply(&mut board, op) {
                prop_assert_eq!(&board, &before);
            }
            assert_consistent(&board);
        }
    }

    /// A valid move is always to an adjacent, vacant cell at most one level up.
    #[test]
    fn prop_valid_move_geometry(ops in prop::collection::vec(op(), 1..40), from in coord(), to in coord()) {
        let mut board = Board::new();
        for op in &ops {
            apply(&mut board, op);
        }
        if board.is_valid_move(from, to) {
            prop_assert!(from.is_adjacent(to));
            prop_assert!(!board.is_occupied(to));
            let climb = i32::from(board.height_at(to).unwrap()) - i32::from(board.height_at(from).unwrap());
            prop_assert!(climb <= 1);
        }
    }

    /// Heights only ever go up.
    #[test]
    fn prop_heights_monotonic(ops in prop::collection::vec(op(), 1..60)) {
        let mut board = Board::new();
        for op in &ops {
            let before: Vec<u8> = board.cells().map(|(_, h, _)| h).collect();
            apply(&mut board, op);
            let after: Vec<u8> = board.cells().map(|(_, h, _)| h).collect();
            prop_assert!(before.iter().zip(&after).all(|(b, a)| a >= b));
        }
    }
}

/// Four builds on one cell reach a dome; a fifth is refused.
#[test]
fn test_build_to_dome() {
    let mut board = Board::new();
    let at = Coord::new(3, 1);
    let heights: Vec<u8> = (0..4).map(|_| board.build(at).unwrap()).collect();
    assert_eq!(heights, vec![1, 2, 3, DOME]);
    assert!(board.build(at).is_err());
    assert!(board.place_worker(at, PlayerId::A).is_err());
}

/// Board snapshots survive a binary round trip unchanged.
#[test]
fn test_board_binary_snapshot() {
    let mut board = Board::new();
    board.build(Coord::new(1, 1)).unwrap();
    board.build_dome(Coord::new(4, 4)).unwrap();
    board.place_worker(Coord::new(2, 2), PlayerId::A).unwrap();
    board.place_worker(Coord::new(0, 3), PlayerId::B).unwrap();
    board.move_worker(Coord::new(2, 2), Coord::new(1, 1)).unwrap();

    let bytes = bincode::serialize(&board).unwrap();
    let restored: Board = bincode::deserialize(&bytes).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.occupant(Coord::new(1, 1)), board.occupant(Coord::new(1, 1)));
}
