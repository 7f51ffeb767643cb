use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "KindFrame";
const TAGLINE: &str = "Capturing Kindness. Sharing Stories.";
const SUBTITLE: &str = "A visual tribute to Sri Lankan generosity.";

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray))),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::LEFT | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(header, area);
}

/// Header alone, centred, shown before the gallery has loaded.
pub fn render_splash(frame: &mut Frame, area: Rect) {
    let splash_area = super::centered_rect(area, TAGLINE.len() as u16 + 4, 2);
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), splash_area);
}
