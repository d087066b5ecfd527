//! Color constants and auto-scaling helpers for the dashboard.

use ratatui::style::Color;

/// Panel output line color.
pub const PANEL_COLOR: Color = Color::Yellow;
/// Charging level line color.
pub const CHARGING_COLOR: Color = Color::Green;
/// Consumption line color.
pub const CONSUMPTION_COLOR: Color = Color::Cyan;
/// Discharge level line color.
pub const DISCHARGE_COLOR: Color = Color::Magenta;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Highlighted control color.
pub const SELECTED_FG: Color = Color::Yellow;

/// Returns the gauge color for a remaining-charge percentage.
///
/// Bands follow the reference gauge: red below 25, orange to 50, yellow to
/// 75, green above.
pub fn gauge_color(pct: f32) -> Color {
    if pct < 25.0 {
        Color::Red
    } else if pct < 50.0 {
        Color::LightRed
    } else if pct < 75.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Computes Y-axis bounds for a data series with 10% padding.
pub fn auto_bounds_y(data: &[(f64, f64)]) -> [f64; 2] {
    let min = data.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let max = data
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [-1.0, 1.0];
    }
    let range = (max - min).max(0.1);
    let pad = range * 0.1;
    [min - pad, max + pad]
}
