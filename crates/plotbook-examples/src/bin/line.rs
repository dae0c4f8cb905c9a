// File: crates/plotbook-examples/src/bin/line.rs
// Summary: Renders a basic line plot with point markers to Output/basicPractice.png.

use anyhow::Result;
use plotbook_core::{output_path, Chart, RenderOptions, Series, SeriesKind};

fn main() -> Result<()> {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [10.0, 20.0, 25.0, 30.0, 40.0];
    let data: Vec<(f64, f64)> = x.into_iter().zip(y).collect();

    let mut chart = Chart::with_title("Basic Line Plot");
    chart.x_axis.label = "X-Axis".into();
    chart.y_axis.label = "Y-Axis".into();
    chart.add_series(Series::with_points(SeriesKind::Line, data));
    chart.autoscale_axes(0.05);

    let out = output_path(env!("CARGO_MANIFEST_DIR"), "basicPractice.png")?;
    chart.render_to_png(&RenderOptions::default(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
