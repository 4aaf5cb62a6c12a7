// File: crates/price-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use price_chart::{Axis, Chart, Marker, RenderOptions, Series, SeriesType, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel lies in the margin and carries the background color
    let bg = Theme::dark().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn marker_pixels_use_marker_color() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 10.0);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    chart.set_marker(Some(Marker::new(5.0, 5.0)));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let rect = opts.plot_rect();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    let cx = ((rect.left + rect.right) / 2) as usize;
    let cy = ((rect.top + rect.bottom) / 2) as usize;
    let i = cy * stride + cx * 4;
    let m = Theme::dark().marker;
    assert_eq!(&px[i..i + 3], &[m.r(), m.g(), m.b()]);
}
