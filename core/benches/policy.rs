use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;
use tictactoe_core::*;

fn policies(c: &mut Criterion) {
    let empty = Board::new();
    let midgame = Board::from_rows(["X.O", ".X.", "..."]).expect("valid board");
    let mut rng = SmallRng::seed_from_u64(42);

    c.bench_function("heuristic/empty", |b| {
        b.iter(|| HeuristicPolicy.choose_move(black_box(&empty), Player::O, &mut rng))
    });
    c.bench_function("heuristic/midgame", |b| {
        b.iter(|| HeuristicPolicy.choose_move(black_box(&midgame), Player::O, &mut rng))
    });
    c.bench_function("random/midgame", |b| {
        b.iter(|| RandomPolicy.choose_move(black_box(&midgame), Player::O, &mut rng))
    });
}

fn full_game(c: &mut Criterion) {
    let config = GameConfig::new(Player::X, Player::O, Difficulty::Hard);
    c.bench_function("session/full_game", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut session = GameSession::with_seed(config, seed);
            let mut human = SmallRng::seed_from_u64(seed);
            session.command(Command::Start);
            while !session.phase().is_finished() {
                let Some(coords) = RandomPolicy.choose_move(session.board(), Player::X, &mut human)
                else {
                    break;
                };
                let _ = session.pointer_down(coords);
            }
            black_box(session.outcome())
        })
    });
}

criterion_group!(benches, policies, full_game);
criterion_main!(benches);
