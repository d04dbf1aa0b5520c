use checkers::game::Game;
use checkers::searcher::AlphaBetaSearcher;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta opening depth 4", |b| {
        b.iter(search_opening)
    });
    c.bench_function("alpha beta self-play 10 turns", |b| b.iter(self_play));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_opening() {
    let mut game = Game::new();
    let mut searcher = AlphaBetaSearcher::new(4);
    searcher.search(&mut game).unwrap();
}

fn self_play() {
    let mut game = Game::new();
    for _ in 0..10 {
        if game.is_game_over() {
            break;
        }
        let path = game.search_move(game.current_player(), 3).unwrap();
        game.make_move(&path).unwrap();
        game.advance_turn(false);
    }
}
