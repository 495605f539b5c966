use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::chart::ChartData;
use crate::domain::{StatAxis, STAT_AXIS_MAX};

const AXIS_COUNT: usize = 6;
const GRID_STEPS: usize = 3;

/// Angle of axis `index`, starting at twelve o'clock and running clockwise.
fn axis_angle(index: usize) -> f64 {
    let step = 2.0 * std::f64::consts::PI / AXIS_COUNT as f64;
    std::f64::consts::FRAC_PI_2 - (index as f64 * step)
}

/// Overlaid radar chart: one polygon per compared creature across the six
/// canonical stat axes, scaled to the fixed 255 maximum.
pub fn render_stat_radar(chart: &ChartData, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Base Stats")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 10 || inner.height < 8 {
        let paragraph = Paragraph::new("Window too small")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let size = inner.width.min(inner.height * 2);
    let square = Rect {
        x: inner.x + (inner.width - size.min(inner.width)) / 2,
        y: inner.y,
        width: size.min(inner.width),
        height: inner.height,
    };

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                let width = f64::from(square.width);
                let height = f64::from(square.height);
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                // Terminal cells are taller than wide; widen x to keep the
                // hexagon roughly regular on screen.
                let max_radius_y = height / 2.0 * 0.82;
                let max_radius_x = (width / 2.0 * 0.82).min(max_radius_y * 2.2);

                let point_at = |index: usize, fraction: f64| {
                    let angle = axis_angle(index);
                    let x = angle.cos().mul_add(max_radius_x * fraction, center_x);
                    let y = angle.sin().mul_add(max_radius_y * fraction, center_y);
                    (x, y)
                };

                // Concentric grid rings, drawn as hexagon outlines.
                for step in 1..=GRID_STEPS {
                    let fraction = step as f64 / GRID_STEPS as f64;
                    for index in 0..AXIS_COUNT {
                        let (x1, y1) = point_at(index, fraction);
                        let (x2, y2) = point_at((index + 1) % AXIS_COUNT, fraction);
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color: Color::DarkGray,
                        });
                    }
                }

                // Spokes from the center to the rim.
                for index in 0..AXIS_COUNT {
                    let (x, y) = point_at(index, 1.0);
                    ctx.draw(&CanvasLine {
                        x1: center_x,
                        y1: center_y,
                        x2: x,
                        y2: y,
                        color: Color::DarkGray,
                    });
                }

                // One closed polygon per series, in selection order so later
                // selections draw on top.
                for series in &chart.series {
                    for index in 0..AXIS_COUNT {
                        let next = (index + 1) % AXIS_COUNT;
                        let from = series.values[index] / STAT_AXIS_MAX;
                        let to = series.values[next] / STAT_AXIS_MAX;
                        let (x1, y1) = point_at(index, from.clamp(0.0, 1.0));
                        let (x2, y2) = point_at(next, to.clamp(0.0, 1.0));
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color: series.color,
                        });
                    }
                }

                // Axis labels just past the rim.
                for (index, axis) in StatAxis::ALL.iter().enumerate() {
                    let (x, y) = point_at(index, 1.08);
                    let x = x.clamp(0.0, width - 3.0);
                    let y = y.clamp(0.0, height - 1.0);
                    ctx.print(
                        x,
                        y,
                        Span::styled(axis.label(), Style::default().fg(Color::Gray)),
                    );
                }
            })
            .x_bounds([0.0, f64::from(square.width)])
            .y_bounds([0.0, f64::from(square.height)]),
        square,
    );
}
