// File: crates/plotbook-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
    pub marker_fill: skia::Color,
    pub bar_fill: skia::Color,
    /// Fills for categorical marks (pie wedges), cycled by index.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 31, 119, 180),
            marker_fill: skia::Color::from_argb(255, 31, 119, 180),
            bar_fill: skia::Color::from_argb(255, 135, 206, 235),
            palette: [
                skia::Color::from_argb(255, 135, 206, 235), // sky blue
                skia::Color::from_argb(255, 240, 128, 128), // light coral
                skia::Color::from_argb(255, 144, 238, 144), // light green
                skia::Color::from_argb(255, 255, 215, 0),   // gold
                skia::Color::from_argb(255, 221, 160, 221), // plum
                skia::Color::from_argb(255, 255, 160, 122), // light salmon
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker_fill: skia::Color::from_argb(255, 64, 160, 255),
            bar_fill: skia::Color::from_argb(255, 64, 160, 255),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 200, 60),
                skia::Color::from_argb(255, 180, 120, 255),
                skia::Color::from_argb(255, 255, 140, 90),
            ],
        }
    }

    /// Fill for the `i`-th categorical mark, cycling through the palette.
    pub fn palette_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
