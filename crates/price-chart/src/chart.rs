// File: crates/price-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA, PNG) using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::info;

use crate::axis::Axis;
use crate::geometry::{clamp, RectI32};
use crate::grid::linspace;
use crate::scale::LinearScale;
use crate::series::{Marker, Series, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (axis captions, ticks, marker label). Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn plot_rect(&self) -> RectI32 {
        self.insets.plot_rect(self.width, self.height)
    }
}

/// Raw RGBA8 pixels: (buffer, width, height, row stride in bytes).
pub type RgbaFrame = (Vec<u8>, u32, u32, usize);

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub marker: Option<Marker>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Headline drawn above the plot area.
    pub title: Option<String>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            marker: None,
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_marker(&mut self, marker: Option<Marker>) {
        self.marker = marker;
    }

    /// Fit both axes to the data with `margin` (fraction of the Y span) of headroom.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Map a pixel column back to an X value (e.g. pointer position to group size).
    pub fn x_at_pixel(&self, opts: &RenderOptions, px: f64) -> f64 {
        let rect = opts.plot_rect();
        let px = clamp(px, rect.left as f64, rect.right as f64);
        LinearScale::horizontal(&rect, &self.x_axis).from_px(px as f32)
    }

    /// Render into a tightly packed RGBA8 (unpremultiplied) buffer.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<RgbaFrame> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} surface");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &data).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = data.len(), "wrote chart");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = opts.plot_rect();
        let sx = LinearScale::horizontal(&rect, &self.x_axis);
        let sy = LinearScale::vertical(&rect, &self.y_axis);

        draw_grid(canvas, &rect, theme);
        draw_axes(canvas, &rect, theme);

        for s in &self.series {
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &sx, &sy, s, theme),
            }
        }

        if let Some(m) = &self.marker {
            draw_marker(canvas, &rect, &sx, &sy, m, theme);
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(canvas, &shaper, &rect, &sx, &sy, self, theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, rect: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (rect.left as f64, rect.top as f64, rect.right as f64, rect.bottom as f64);
    // verticals
    for x in linspace(l, r, 9) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t, b, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, rect: &RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, theme: &Theme) {
    let data = &series.data_xy;
    // a single sample has no segment to stroke
    if data.len() < 2 {
        return draw_point_series(canvas, sx, sy, series, theme);
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path, &stroke);
}

fn draw_point_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.line_stroke);
    for &(x, y) in &series.data_xy {
        canvas.draw_circle((sx.to_px(x), sy.to_px(y)), 2.5, &fill);
    }
}

fn draw_marker(canvas: &skia::Canvas, rect: &RectI32, sx: &LinearScale, sy: &LinearScale, m: &Marker, theme: &Theme) {
    let (px, py) = (sx.to_px(m.x), sy.to_px(m.y));

    if m.guides {
        let mut guide = skia::Paint::default();
        guide.set_anti_alias(true);
        guide.set_style(skia::paint::Style::Stroke);
        guide.set_stroke_width(1.0);
        guide.set_color(theme.guide);
        guide.set_path_effect(skia::PathEffect::dash(&[5.0, 4.0], 0.0));
        canvas.draw_line((px, py), (px, rect.bottom as f32), &guide);
        canvas.draw_line((rect.left as f32, py), (px, py), &guide);
    }

    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Fill);
    ring.set_color(theme.marker_ring);
    canvas.draw_circle((px, py), 8.0, &ring);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(theme.marker);
    canvas.draw_circle((px, py), 6.0, &dot);
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    rect: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    chart: &Chart,
    theme: &Theme,
) {
    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);

    for (v, text) in chart.x_axis.tick_labels(8) {
        shaper.draw(canvas, &text, sx.to_px(v), b + 18.0, Anchor::Center, 12.0, theme.tick, true);
    }
    for (v, text) in chart.y_axis.tick_labels(5) {
        shaper.draw(canvas, &text, l - 8.0, sy.to_px(v) + 4.0, Anchor::Right, 12.0, theme.tick, true);
    }

    shaper.draw(canvas, &chart.x_axis.label, (l + r) * 0.5, b + 44.0, Anchor::Center, 14.0, theme.axis_label, false);
    shaper.draw(canvas, &chart.y_axis.label, l, t - 10.0, Anchor::Left, 14.0, theme.axis_label, false);

    if let Some(title) = &chart.title {
        shaper.draw(canvas, title, r, t - 10.0, Anchor::Right, 15.0, theme.axis_label, false);
    }

    if let Some(Marker { x, y, label: Some(text), .. }) = &chart.marker {
        let (px, py) = (sx.to_px(*x), sy.to_px(*y));
        // keep the caption inside the plot horizontally
        let w = shaper.measure_width(text, 13.0, false);
        let left = clamp(px + 12.0, l + 4.0, (r - w - 4.0).max(l + 4.0));
        let baseline = clamp(py - 12.0, t + 16.0, b - 4.0);
        shaper.draw(canvas, text, left, baseline, Anchor::Left, 13.0, theme.marker, false);
    }
}
