// File: crates/plotbook-examples/src/bin/pie.rs
// Summary: Renders a pie chart with percentage labels to Output/pieChart.png.

use anyhow::Result;
use plotbook_core::{output_path, Chart, RenderOptions, Series, SeriesKind};

fn main() -> Result<()> {
    let categories = ["A", "B", "C", "D"];
    let values = [3.0, 7.0, 1.0, 8.0];

    let mut chart = Chart::with_title("Pie Chart Example");
    chart.add_series(Series::categorical(
        SeriesKind::Pie,
        categories.iter().map(|c| c.to_string()).collect(),
        values.to_vec(),
    )?);

    let out = output_path(env!("CARGO_MANIFEST_DIR"), "pieChart.png")?;
    chart.render_to_png(&RenderOptions::square(640), &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
