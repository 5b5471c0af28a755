use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_2048::core::{Direction, GameOptions};
use rust_2048::game::{GameAction, GameSession, GameState};

/// A mid-game 8x8 state with obstacles, reached by scripted play.
fn midgame_state() -> GameState {
    let mut session = GameSession::new(2024);
    session
        .start_game(GameOptions::new(8, 4))
        .expect("valid options");

    let cycle = [Direction::Left, Direction::Down, Direction::Right, Direction::Down];
    for direction in cycle.iter().cycle().take(120) {
        session.move_tiles(*direction).expect("move");
    }
    session.state().expect("started").clone()
}

fn bench_moves(c: &mut Criterion) {
    let state = midgame_state();

    for direction in Direction::ALL {
        c.bench_function(&format!("move_{}_8x8", direction), |b| {
            b.iter(|| black_box(&state).apply(&GameAction::Move(direction)))
        });
    }

    c.bench_function("session_turn_6x6", |b| {
        b.iter(|| {
            let mut session = GameSession::new(black_box(7));
            session.start_game(GameOptions::new(6, 2)).expect("valid options");
            for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
                let _ = session.move_tiles(direction);
            }
            session
        })
    });
}

criterion_group!(benches, bench_moves);
criterion_main!(benches);
