use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_game_shell::input::resolve_key;
use tui_game_shell::{Direction, GameController, InputRenderLoop, TerminalView};

struct NullController;

impl GameController for NullController {
    type Frame = ();

    fn start_new_game(&mut self) {}

    fn action(&mut self, _direction: Direction) {}

    fn advance_turn(&mut self) -> bool {
        true
    }

    fn render(&self) {}
}

struct NullView;

impl TerminalView for NullView {
    type Frame = ();

    fn subscribe(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn unsubscribe(&mut self) {}

    fn next_key(&mut self) -> anyhow::Result<Option<u16>> {
        Ok(None)
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn write(&mut self, _frame: &()) -> anyhow::Result<()> {
        Ok(())
    }
}

fn bench_resolve_bound(c: &mut Criterion) {
    c.bench_function("resolve_bound_key", |b| {
        b.iter(|| resolve_key(black_box(37)))
    });
}

fn bench_resolve_unbound(c: &mut Criterion) {
    c.bench_function("resolve_unbound_key", |b| {
        b.iter(|| resolve_key(black_box(65)))
    });
}

fn bench_on_key_move(c: &mut Criterion) {
    let mut engine = NullController;
    let mut view = NullView;
    let mut app = InputRenderLoop::new(&mut engine, &mut view).unwrap();

    c.bench_function("on_key_move", |b| {
        b.iter(|| app.on_key(black_box(37)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_resolve_bound,
    bench_resolve_unbound,
    bench_on_key_move
);
criterion_main!(benches);
