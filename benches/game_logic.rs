use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blocks::core::{GridState, Layout, PieceCatalog, PieceSet, Shape, SimpleRng};
use tui_blocks::engine::GameEngine;
use tui_blocks::types::{GameConfig, InputEvent, Point, Size};

const SURFACE: Size = Size::new(80.0, 24.0);
const CELL: Size = Size::new(2.0, 1.0);

fn bench_can_place_all_anchors(c: &mut Criterion) {
    let grid = GridState::from_pattern(&[
        "#.#.#.#.",
        "........",
        "##....##",
        "........",
        "...##...",
        "........",
        "#......#",
        "........",
    ]);
    let shape = Shape::parse(&["###", "#..", "#.."]);

    c.bench_function("can_place_all_anchors", |b| {
        b.iter(|| {
            let mut legal = 0u32;
            for row in 0..8 {
                for col in 0..8 {
                    if grid.can_place(black_box(&shape), row, col) {
                        legal += 1;
                    }
                }
            }
            legal
        })
    });
}

fn bench_clear_cross(c: &mut Criterion) {
    c.bench_function("clear_row_and_column", |b| {
        b.iter(|| {
            let mut grid = GridState::new(8);
            grid.commit(&Shape::parse(&["########"]), 3, 0);
            for row in [0, 1, 2, 4, 5, 6, 7] {
                grid.commit(&Shape::parse(&["#"]), row, 5);
            }
            grid.clear_full_lines()
        })
    });
}

fn bench_legal_move_scan(c: &mut Criterion) {
    let layout = Layout::new(SURFACE, CELL, 8, 3);
    let catalog = PieceCatalog::standard();
    let mut rng = SimpleRng::new(12345);
    let mut pieces = PieceSet::new(3);
    pieces.regenerate_all(&catalog, &mut rng, &layout);
    let grid = GridState::from_pattern(&[
        "#.#.#.#.",
        ".#.#.#.#",
        "#.#.#.#.",
        ".#.#.#.#",
        "#.#.#.#.",
        ".#.#.#.#",
        "#.#.#.#.",
        ".#.#.#.#",
    ]);

    c.bench_function("any_has_legal_move", |b| {
        b.iter(|| black_box(&pieces).any_has_legal_move(black_box(&grid)))
    });
}

fn bench_drag_placement(c: &mut Criterion) {
    let mut engine = GameEngine::new(GameConfig::default(), 12345, SURFACE, CELL).unwrap();
    let mono = Shape::parse(&["#"]);

    c.bench_function("drag_and_place", |b| {
        b.iter(|| {
            engine.set_position(GridState::new(8), &[Some(mono), None, None]);
            let home = engine.pieces().get(0).unwrap().position;
            let grab = Point::new(home.x + 0.5, home.y + 0.5);
            let target = engine.layout().anchor_position(3, 3);
            engine.handle(InputEvent::SelectAt(grab));
            engine.handle(InputEvent::DragTo(Point::new(target.x + 0.5, target.y + 0.5)));
            engine.handle(InputEvent::Release)
        })
    });
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut engine = GameEngine::new(GameConfig::default(), 12345, SURFACE, CELL).unwrap();

    c.bench_function("engine_tick_16ms", |b| b.iter(|| engine.tick(black_box(16))));
}

criterion_group!(
    benches,
    bench_can_place_all_anchors,
    bench_clear_cross,
    bench_legal_move_scan,
    bench_drag_placement,
    bench_idle_tick
);
criterion_main!(benches);
