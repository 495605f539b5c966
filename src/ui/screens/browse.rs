use crate::app::state::RenderPhase;
use crate::app::App;
use crate::chart::series_color;
use crate::ui::widgets::popup::render_capacity_warning;
use crate::ui::widgets::radar::render_stat_radar;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse};

pub fn render_browse(app: &mut App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(10),   // Content area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title(f, main_layout[0]);

    let content_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(main_layout[1]);

    let left_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(5),    // Catalog list
            Constraint::Length(10), // Selection panel
        ])
        .split(content_split[0]);

    render_search_box(app, f, left_split[0]);
    render_catalog_list(app, f, left_split[1]);
    render_selection_panel(app, f, left_split[2]);
    render_chart_panel(app, f, content_split[1]);

    render_status(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);

    if app.capacity_warning {
        render_capacity_warning(f, f.area());
    }
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Dex ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Comparator",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  -  overlay up to 6 creatures on one radar",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(title_block)
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}

fn render_search_box(app: &App, f: &mut Frame<'_>, area: Rect) {
    let blink = (app.animation_counter * 2.0).sin() > 0.0;
    let cursor = if blink { "█" } else { " " };

    let search_text = Span::styled(
        format!("> {}{}", app.search_input, cursor),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let block = Block::default()
        .title(" Search ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    f.render_widget(Paragraph::new(TextLine::from(search_text)).block(block), area);
}

fn render_catalog_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(
            " Catalog ({} of {}) ",
            if app.filtered.is_empty() {
                0
            } else {
                app.list_index + 1
            },
            app.filtered.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.filtered.is_empty() {
        let message = if app.catalog.is_empty() {
            "Catalog unavailable"
        } else {
            "No creature matches the search"
        };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let total_rows = app.filtered.len();
    let max_visible_rows = inner.height as usize;
    let scroll_offset = scroll_offset(app.list_index, total_rows, max_visible_rows);

    let lines: Vec<TextLine<'_>> = app
        .filtered
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(max_visible_rows)
        .map(|(index, entry)| {
            let is_cursor = index == app.list_index;
            let position = app
                .selection
                .entries()
                .iter()
                .position(|held| held.id == entry.id);

            let marker = position.map_or_else(
                || Span::raw("  "),
                |slot| Span::styled("● ", Style::default().fg(series_color(slot))),
            );

            let row_style = if is_cursor {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            TextLine::from(vec![
                marker,
                Span::styled(format!("#{:<4}", entry.id), row_style),
                Span::styled(entry.name.clone(), row_style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

/// First visible row of the catalog list, chosen so the cursor row stays
/// on screen.
fn scroll_offset(cursor: usize, total_rows: usize, visible_rows: usize) -> usize {
    if total_rows > visible_rows && cursor >= visible_rows {
        cursor.saturating_sub(visible_rows) + 1
    } else {
        0
    }
}

fn render_selection_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(
            " Comparison ({} of {}) ",
            app.selection.len(),
            crate::domain::MAX_COMPARE
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<TextLine<'_>> = if app.selection.is_empty() {
        vec![TextLine::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        app.selection
            .entries()
            .iter()
            .enumerate()
            .map(|(slot, entry)| {
                TextLine::from(vec![
                    Span::styled("■ ", Style::default().fg(series_color(slot))),
                    Span::raw(entry.name.clone()),
                ])
            })
            .collect()
    };

    // Thumbnail address for the highlighted catalog entry, display only.
    if let Some(entry) = app.entry_under_cursor() {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            format!("sprite: {}", app.actions.client.config().sprite_url(entry.id)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_chart_panel(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    match app.phase {
        RenderPhase::Loading => render_loading(app, f, area),
        RenderPhase::Idle => render_placeholder(
            f,
            area,
            "Select up to 6 creatures to overlay their base stats",
            Color::Gray,
        ),
        RenderPhase::Failed => render_placeholder(
            f,
            area,
            "Stat fetch failed - chart cleared, toggle again to retry",
            Color::Red,
        ),
        RenderPhase::Populated => {
            if let Some(chart) = &app.chart {
                let chart_split = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(8),
                        Constraint::Length(u16::try_from(chart.series.len()).unwrap_or(6) + 2),
                    ])
                    .split(area);

                render_stat_radar(chart, f, chart_split[0]);
                render_legend(app, f, chart_split[1]);
            } else {
                render_placeholder(
                    f,
                    area,
                    "Select up to 6 creatures to overlay their base stats",
                    Color::Gray,
                );
            }
        }
    }
}

fn render_loading(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Base Stats")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let throbber_area = Rect {
        x: inner.x + inner.width / 3,
        y: inner.y + inner.height / 2,
        width: inner.width.saturating_sub(inner.width / 3).max(1),
        height: 1,
    };

    let throbber = Throbber::default()
        .label(loading_label(!app.catalog.is_empty()))
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    f.render_stateful_widget(throbber, throbber_area, &mut app.throbber);
}

/// Startup loads the catalog; every later `Loading` phase is a stat fetch.
const fn loading_label(catalog_loaded: bool) -> &'static str {
    if catalog_loaded {
        "Fetching stats..."
    } else {
        "Loading catalog..."
    }
}

fn render_placeholder(f: &mut Frame<'_>, area: Rect, message: &str, color: Color) {
    let block = Block::default()
        .title("Base Stats")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(message)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_legend(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(chart) = &app.chart else {
        return;
    };

    let lines: Vec<TextLine<'_>> = chart
        .series
        .iter()
        .map(|series| {
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(series.color)),
                Span::styled(
                    series.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  {}",
                        series
                            .values
                            .iter()
                            .map(|value| format!("{value:>3.0}"))
                            .collect::<Vec<_>>()
                            .join(" ")
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Legend (HP Atk Def SpA SpD Spe) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from("")
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Text::from(Span::styled(&app.status_message, style))
    };

    let paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("↑/↓", key_style),
        Span::styled(": Navigate | ", hint_style),
        Span::styled("Enter", key_style),
        Span::styled(": Toggle compare | ", hint_style),
        Span::styled("type", key_style),
        Span::styled(": Search | ", hint_style),
        Span::styled("F1", key_style),
        Span::styled(": Help | ", hint_style),
        Span::styled("Esc", key_style),
        Span::styled(": Clear search / Quit", hint_style),
    ]);

    f.render_widget(Paragraph::new(shortcuts).alignment(Alignment::Center), area);
}
