use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render_help(frame: &mut Frame, area: Rect) {
    let dialog_area = super::centered_rect(
        area,
        52.min(area.width.saturating_sub(4)),
        22.min(area.height.saturating_sub(4)),
    );

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let heading = Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan);
    let help_text = vec![
        Line::from(Span::styled("Gallery", heading)),
        Line::from(""),
        Line::from("  h/j/k/l, arrows  Move focus"),
        Line::from("  Enter            Open photo"),
        Line::from("  [ / PgUp         Previous page"),
        Line::from("  ] / PgDn         Next page"),
        Line::from("  1-9              Go to page"),
        Line::from("  v                Toggle grid/slider (if enabled)"),
        Line::from(""),
        Line::from(Span::styled("Lightbox", heading)),
        Line::from(""),
        Line::from("  h/Left           Previous photo (wraps)"),
        Line::from("  l/Right          Next photo (wraps)"),
        Line::from("  Esc              Close"),
        Line::from(""),
        Line::from("  Mouse: click to open, hover to preview"),
        Line::from("  q                Quit"),
        Line::from("  ?                Toggle this help"),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Gallery Help "),
    );

    frame.render_widget(paragraph, dialog_area);
}
