//! Dashboard layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, List, ListItem, Paragraph};

use super::runtime::{App, CONTROLS};
use super::style;
use crate::sim::types::HourlySeries;

/// Renders the full dashboard frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(16),   // charts + controls
            Constraint::Length(3), // gauge
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_body(frame, app, chunks[1]);
    render_gauge(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: preset, lux readout, losses, brightness model.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " STREETLIGHT ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ lux={:.2}/m² │ temp_loss={:.2}% soiling={:.4}% │ model={} ",
            app.outputs.lux_per_m2,
            app.outputs.temp_loss_pct,
            app.outputs.soiling_loss_pct,
            app.model_name(),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Control list on the left, the four series charts in a 2×2 grid.
fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(40)])
        .split(area);

    render_controls(frame, app, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_series_chart(
        frame,
        " Panel Output (W) ",
        &app.outputs.panel_output_w,
        style::PANEL_COLOR,
        top[0],
    );
    render_series_chart(
        frame,
        " Charging Level (%) ",
        &app.outputs.charging_level_pct,
        style::CHARGING_COLOR,
        top[1],
    );
    render_series_chart(
        frame,
        " Consumption (W) ",
        &app.outputs.consumption_w,
        style::CONSUMPTION_COLOR,
        bottom[0],
    );
    render_series_chart(
        frame,
        " Discharge Level (%) ",
        &app.outputs.discharge_level_pct,
        style::DISCHARGE_COLOR,
        bottom[1],
    );
}

/// The adjustable-control list with the highlight.
fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = CONTROLS
        .iter()
        .enumerate()
        .map(|(i, &control)| {
            let text = format!("{:<17}{:>7}", control.label(), app.control_value(control));
            let item = ListItem::new(text);
            if i == app.selected {
                item.style(
                    Style::default()
                        .fg(style::SELECTED_FG)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let list =
        List::new(items).block(Block::default().title(" Controls ").borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// One hourly series as a line chart with slot-index X axis.
fn render_series_chart(
    frame: &mut Frame,
    title: &str,
    series: &HourlySeries,
    color: ratatui::style::Color,
    area: Rect,
) {
    let data: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, f64::from(v)))
        .collect();

    let y_bounds = style::auto_bounds_y(&data);
    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(color))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([0.0, 12.0])
                .labels(vec![
                    series.labels[0].to_string(),
                    series.labels[12].to_string(),
                ]),
        )
        .y_axis(
            Axis::default()
                .bounds(y_bounds)
                .labels(vec![format!("{:.1}", y_bounds[0]), format!("{:.1}", y_bounds[1])]),
        );

    frame.render_widget(chart, area);
}

/// Remaining-charge gauge at the selected hour.
fn render_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let pct = app.outputs.gauge_pct;
    let label_idx = app.inputs.time_index;
    let hour = app.outputs.discharge_level_pct.labels[label_idx];

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Battery Charge at {hour} "))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(style::gauge_color(pct)))
        .ratio(f64::from(pct / 100.0).clamp(0.0, 1.0))
        .label(format!("{pct:.1}%"));
    frame.render_widget(gauge, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Select  +/-:Adjust  m:Model  1/2/3:Preset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
