/// Side of the square SVG viewport the chart is drawn in.
pub const VIEWPORT_SIZE: f64 = 100.0;

const PLOT_HEIGHT: f64 = 80.0;
const PLOT_MARGIN: f64 = 10.0;

/// SVG path data (`M x,y L x,y ...`) for `data`, min-max normalised into
/// the middle 80% of the viewport height. A flat series sits on the
/// mid-line. Returns `None` for an empty series.
pub fn waveform_path(data: &[f64]) -> Option<String> {
    if data.is_empty() {
        return None;
    }

    let (min, max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    let range = max - min;
    let last_index = (data.len() - 1).max(1) as f64;

    let points: Vec<String> = data
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let x = index as f64 / last_index * VIEWPORT_SIZE;
            let normalized = if range > 0.0 {
                (value - min) / range * PLOT_HEIGHT + PLOT_MARGIN
            } else {
                VIEWPORT_SIZE / 2.0
            };
            format!("{},{}", format_coord(x), format_coord(VIEWPORT_SIZE - normalized))
        })
        .collect();

    Some(format!("M {}", points.join(" L ")))
}

fn format_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}
