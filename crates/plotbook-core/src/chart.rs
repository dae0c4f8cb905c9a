// File: crates/plotbook-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::grid::{linspace, tick_label};
use crate::series::{Series, SeriesKind};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to skip title/axis/tick text, e.g. in pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Square surface, as used by the pie chart.
    pub fn square(side: i32) -> Self {
        Self { width: side, height: side, ..Self::default() }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        let mut chart = Self::new();
        chart.title = title.into();
        chart
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the union of series data ranges.
    ///
    /// XY series contribute their points; bar series contribute one slot per
    /// category on X and `0..=max(value)` on Y; pie series are ignored. The
    /// resulting range is widened by `margin` (relative) and never degenerate.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for s in &self.series {
            match s.kind {
                SeriesKind::Line | SeriesKind::Scatter => {
                    for &(x, y) in &s.data_xy {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                SeriesKind::Bar => {
                    if s.values.is_empty() {
                        continue;
                    }
                    x_min = x_min.min(-0.5);
                    x_max = x_max.max(s.values.len() as f64 - 0.5);
                    for &v in &s.values {
                        y_min = y_min.min(v.min(0.0));
                        y_max = y_max.max(v.max(0.0));
                    }
                }
                SeriesKind::Pie => {}
            }
        }

        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }

        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        self.x_axis.min = x_min - xm;
        self.x_axis.max = x_max + xm;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    /// Missing parent directories are created first.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &data)?;
        log::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = make_surface(opts)?;
        self.draw(surface.canvas(), opts);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = make_surface(opts)?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Surface { width: opts.width, height: opts.height });
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let shaper = TextShaper::new();

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        let cartesian = self.series.iter().any(|s| s.kind != SeriesKind::Pie);
        let has_xy = self.series.iter().any(|s| matches!(s.kind, SeriesKind::Line | SeriesKind::Scatter));

        if cartesian {
            draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom, theme);
            draw_axes(
                canvas,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis,
                theme, &shaper, opts.draw_labels,
            );
            if opts.draw_labels {
                draw_ticks(
                    canvas,
                    plot_left, plot_top, plot_right, plot_bottom,
                    &self.x_axis, &self.y_axis,
                    has_xy, theme, &shaper,
                );
            }
        }

        for (i, s) in self.series.iter().enumerate() {
            match s.kind {
                SeriesKind::Line => draw_line_series(
                    canvas,
                    plot_left, plot_top, plot_right, plot_bottom,
                    &self.x_axis, &self.y_axis, s, theme,
                ),
                SeriesKind::Scatter => draw_scatter_series(
                    canvas,
                    plot_left, plot_top, plot_right, plot_bottom,
                    &self.x_axis, &self.y_axis, s, theme,
                ),
                SeriesKind::Bar => draw_bar_series(
                    canvas,
                    plot_left, plot_top, plot_right, plot_bottom,
                    &self.x_axis, &self.y_axis, s,
                    theme, &shaper, opts.draw_labels,
                ),
                SeriesKind::Pie => draw_pie_series(
                    canvas,
                    opts.width, opts.height, s,
                    theme, &shaper, opts.draw_labels, i,
                ),
            }
        }

        if opts.draw_labels && !self.title.is_empty() {
            shaper.draw_centered(
                canvas,
                &self.title,
                opts.width as f32 * 0.5,
                30.0,
                20.0,
                theme.title,
                false,
            );
        }
    }
}

fn make_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(ChartError::Surface { width: opts.width, height: opts.height })
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(l as f64, r as f64, 6) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
    shaper: &TextShaper,
    draw_labels: bool,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);

    if !draw_labels {
        return;
    }

    shaper.draw_centered(
        canvas,
        &x.label,
        (l + r) as f32 * 0.5,
        b as f32 + 44.0,
        14.0,
        theme.axis_label,
        false,
    );
    shaper.draw_left(
        canvas,
        &y.label,
        (l as f32 - 56.0).max(8.0),
        t as f32 - 12.0,
        14.0,
        theme.axis_label,
        false,
    );
}

fn draw_ticks(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    numeric_x: bool,
    theme: &Theme,
    shaper: &TextShaper,
) {
    // Y tick labels, right-aligned against the plot edge
    for v in linspace(y_axis.min, y_axis.max, 6) {
        let span = y_axis.span().max(1e-9);
        let py = b as f32 - ((v - y_axis.min) / span) as f32 * (b - t) as f32;
        let label = tick_label(v);
        let w = shaper.measure_width(&label, 12.0, true);
        shaper.draw_left(canvas, &label, l as f32 - 10.0 - w, py + 4.0, 12.0, theme.tick, true);
    }

    // X tick labels only make sense for numeric axes; bar charts label slots instead.
    if !numeric_x {
        return;
    }
    for v in linspace(x_axis.min, x_axis.max, 6) {
        let span = x_axis.span().max(1e-9);
        let px = l as f32 + ((v - x_axis.min) / span) as f32 * (r - l) as f32;
        shaper.draw_centered(canvas, &tick_label(v), px, b as f32 + 18.0, 12.0, theme.tick, true);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    // Scale helpers
    let xspan = x_axis.span().max(1e-9);
    let yspan = y_axis.span().max(1e-9);
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx(x0), sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx(x), sy(y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(theme.line_stroke);

        canvas.draw_path(&path, &stroke);
    }

    // point markers on top of the stroke
    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(theme.marker_fill);
    for &(x, y) in data {
        canvas.draw_circle((sx(x), sy(y)), 3.5, &marker);
    }
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    if series.data_xy.is_empty() {
        return;
    }

    let xspan = x_axis.span().max(1e-9);
    let yspan = y_axis.span().max(1e-9);
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(theme.marker_fill);

    for &(x, y) in &series.data_xy {
        canvas.draw_circle((sx(x), sy(y)), 4.0, &marker);
    }
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
    shaper: &TextShaper,
    draw_labels: bool,
) {
    if series.values.is_empty() {
        return;
    }

    let xspan = x_axis.span().max(1e-9);
    let yspan = y_axis.span().max(1e-9);
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.bar_fill);

    // bar width as a fraction of one category slot
    let slot_px = (r - l) as f32 / series.values.len() as f32;
    let half = (slot_px * 0.6 * 0.5).max(1.0);
    let base = sy(0.0).clamp(t as f32, b as f32);

    for (i, &v) in series.values.iter().enumerate() {
        let cx = sx(i as f64);
        let top = sy(v).min(base);
        let bot = sy(v).max(base);
        let rect = skia::Rect::from_ltrb(cx - half, top, cx + half, bot.max(top + 1.0));
        canvas.draw_rect(rect, &fill);

        if draw_labels {
            if let Some(label) = series.labels.get(i) {
                shaper.draw_centered(canvas, label, cx, b as f32 + 18.0, 13.0, theme.tick, false);
            }
        }
    }
}

fn draw_pie_series(
    canvas: &skia::Canvas,
    width: i32,
    height: i32,
    series: &Series,
    theme: &Theme,
    shaper: &TextShaper,
    draw_labels: bool,
    palette_offset: usize,
) {
    let total = series.value_total();
    if total <= 0.0 {
        return;
    }

    let cx = width as f32 * 0.5;
    let cy = height as f32 * 0.5 + 10.0;
    let radius = (width.min(height) as f32) * 0.35;
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut separator = skia::Paint::default();
    separator.set_anti_alias(true);
    separator.set_style(skia::paint::Style::Stroke);
    separator.set_stroke_width(2.0);
    separator.set_color(theme.background);

    // wedges run clockwise from 12 o'clock
    let mut start = -90.0f32;
    for (i, &v) in series.values.iter().enumerate() {
        if v <= 0.0 {
            continue;
        }
        let sweep = (v / total * 360.0) as f32;

        let mut path = skia::Path::new();
        path.move_to((cx, cy));
        path.arc_to(oval, start, sweep, false);
        path.close();

        fill.set_color(theme.palette_color(palette_offset + i));
        canvas.draw_path(&path, &fill);
        canvas.draw_path(&path, &separator);

        if draw_labels {
            let mid = (start + sweep * 0.5).to_radians();
            let (sin, cos) = mid.sin_cos();

            let pct = format!("{:.1}%", v / total * 100.0);
            shaper.draw_centered(canvas, &pct, cx + cos * radius * 0.6, cy + sin * radius * 0.6, 13.0, theme.axis_label, true);

            if let Some(label) = series.labels.get(i) {
                shaper.draw_centered(canvas, label, cx + cos * radius * 1.15, cy + sin * radius * 1.15, 14.0, theme.axis_label, false);
            }
        }

        start += sweep;
    }
}
