// File: crates/plotbook-examples/src/bin/bar.rs
// Summary: Renders a bar chart over four categories to Output/barChart.png.

use anyhow::Result;
use plotbook_core::{output_path, Chart, RenderOptions, Series, SeriesKind};

fn main() -> Result<()> {
    let categories = ["A", "B", "C", "D"];
    let values = [3.0, 7.0, 1.0, 8.0];

    let mut chart = Chart::with_title("Bar Chart Example");
    chart.x_axis.label = "Categories".into();
    chart.y_axis.label = "Values".into();
    chart.add_series(Series::categorical(
        SeriesKind::Bar,
        categories.iter().map(|c| c.to_string()).collect(),
        values.to_vec(),
    )?);
    chart.autoscale_axes(0.05);

    let out = output_path(env!("CARGO_MANIFEST_DIR"), "barChart.png")?;
    chart.render_to_png(&RenderOptions::default(), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
