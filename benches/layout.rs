use criterion::{criterion_group, criterion_main, Criterion};
use mazeball::generators;
use mazeball::layout::{CellSize, LayoutOptions, SceneLayout};
use mazeball::renderers;

fn bench_layout_200(c: &mut Criterion) {
    let maze = generators::generate(200, 200, Some(200)).unwrap();
    let cell_size = CellSize::new(8.0, 8.0).unwrap();
    c.bench_function("layout_200", move |b| {
        b.iter(|| SceneLayout::build(&maze, cell_size, &LayoutOptions::default()))
    });
}

fn bench_render_layout_200(c: &mut Criterion) {
    let maze = generators::generate(200, 200, Some(200)).unwrap();
    let layout = SceneLayout::build(&maze,
                                    CellSize::new(8.0, 8.0).unwrap(),
                                    &LayoutOptions { wall_thickness: 2.0, boundary_thickness: 2.0 });
    let render_options = renderers::RenderOptionsBuilder::new().build();
    c.bench_function("render_layout_200", move |b| {
        b.iter(|| renderers::render_layout(&layout, &render_options).unwrap())
    });
}

criterion_group!(benches, bench_layout_200, bench_render_layout_200);
criterion_main!(benches);
