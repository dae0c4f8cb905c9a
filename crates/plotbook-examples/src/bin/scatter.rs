// File: crates/plotbook-examples/src/bin/scatter.rs
// Summary: Renders a scatter plot to Output/scatterPlot.png.

use anyhow::Result;
use plotbook_core::{output_path, Chart, RenderOptions, Series, SeriesKind};

fn main() -> Result<()> {
    let x = [5.0, 7.0, 8.0, 7.0, 2.0, 17.0, 2.0, 9.0, 4.0, 11.0, 12.0, 9.0, 6.0];
    let y = [99.0, 86.0, 87.0, 88.0, 111.0, 86.0, 103.0, 87.0, 94.0, 78.0, 77.0, 85.0, 86.0];
    let data: Vec<(f64, f64)> = x.into_iter().zip(y).collect();

    let mut chart = Chart::with_title("Scatter Plot Example");
    chart.x_axis.label = "X-Axis".into();
    chart.y_axis.label = "Y-Axis".into();
    chart.add_series(Series::with_points(SeriesKind::Scatter, data));
    chart.autoscale_axes(0.05);

    let out = output_path(env!("CARGO_MANIFEST_DIR"), "scatterPlot.png")?;
    chart.render_to_png(&RenderOptions::default(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
