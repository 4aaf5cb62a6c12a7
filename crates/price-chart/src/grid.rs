// File: crates/price-chart/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round tick step (1, 2 or 5 times a power of ten) giving about `target` ticks over the span.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) || target == 0 { return 1.0; }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    mult * mag
}

/// Upper bound on ticks from one call, whatever the inputs.
const MAX_TICKS: usize = 256;

/// Tick values that are multiples of a nice step and lie inside `[min, max]`.
///
/// Empty when the span is not positive or the step vanishes at this magnitude.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        return Vec::new();
    }
    let step = nice_step(span, target);
    let first = (min / step).ceil() * step;
    if !first.is_finite() || first + step == first {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < MAX_TICKS {
        let v = first + step * i as f64;
        if v > max + step * 1e-9 { break; }
        out.push(v);
        i += 1;
    }
    out
}
