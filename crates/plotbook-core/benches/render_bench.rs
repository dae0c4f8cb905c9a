use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plotbook_core::{Chart, RenderOptions, Series, SeriesKind};

fn build_chart_xy(n: usize) -> Chart {
    let mut ch = Chart::new();
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        data.push((x, y));
    }
    ch.add_series(Series::with_points(SeriesKind::Line, data));
    ch.autoscale_axes(0.02);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let ch = build_chart_xy(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = ch.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
