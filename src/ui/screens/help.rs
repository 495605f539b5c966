use ratatui::layout::Margin;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help(f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(2, 1));

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key = |name: &'static str, description: &'static str| {
        TextLine::from(vec![
            Span::styled(
                format!("  {name}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" - {description}"), Style::default()),
        ])
    };

    let help_text = vec![
        TextLine::from(vec![Span::styled(
            "Dex Comparator",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from(
            "Browse the catalog, pick up to six creatures, and overlay their base stats on a radar chart.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key("type", "Filter the catalog by name (case-insensitive substring)"),
        key("↑/↓", "Move through the filtered list"),
        key("PgUp/PgDn", "Jump 5 rows"),
        key("Home/End", "First / last entry"),
        key("Enter", "Add or remove the highlighted creature from the comparison"),
        key("F1", "Toggle this help screen"),
        key("Esc", "Clear the search; quit when the search is already empty"),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Radar axes (fixed order, scaled to 255):",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        TextLine::from("  HP, Atk, Def, SpA, SpD, Spe"),
        TextLine::from(""),
        TextLine::from(
            "Each selected creature gets one polygon; colors follow selection order. Stats are re-fetched on every toggle.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )]),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
