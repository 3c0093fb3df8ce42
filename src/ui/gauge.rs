use crate::simulation::config::Limits;

const FILL: char = '#';
const EMPTY: char = '.';
const MARKER: char = '|';

/// Fraction of `limits` covered by `value`, in `[0, 1]`.
fn fraction(value: f64, limits: Limits) -> f64 {
    ((value - limits.lo) / (limits.hi - limits.lo)).clamp(0.0, 1.0)
}

/// Renders `value` as a fixed-width bar over `limits`, with an optional
/// marker (e.g. the set-point) drawn on top.
#[must_use]
pub fn gauge_bar(value: f64, marker: Option<f64>, limits: Limits, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    // NaN casts to 0, so a broken value renders as an empty bar.
    let filled = (fraction(value, limits) * width as f64).round() as usize;
    let mark = marker.map(|m| {
        let idx = (fraction(m, limits) * (width - 1) as f64).round() as usize;
        idx.min(width - 1)
    });

    (0..width)
        .map(|i| {
            if Some(i) == mark {
                MARKER
            } else if i < filled {
                FILL
            } else {
                EMPTY
            }
        })
        .collect()
}

/// `label [bar] value`, one row of the plant panel.
#[must_use]
pub fn gauge_line(
    label: &str,
    value: f64,
    marker: Option<f64>,
    limits: Limits,
    width: usize,
) -> String {
    format!(
        "{label:<14}[{}] {value:>6.3}",
        gauge_bar(value, marker, limits, width)
    )
}
