use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use kindframe::ViewMode;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // If there's a status message, show it prominently
    if let Some(ref message) = app.status_message {
        let line = Line::from(vec![Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        )]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let gallery = &app.gallery;
    let state = gallery.state();

    let position = match state.mode {
        ViewMode::Grid => format!("Page {}/{}", state.current_page, gallery.page_count()),
        ViewMode::Slider => format!("{}/{}", app.focus + 1, gallery.catalog().len()),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.mode.label()),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {} photos | {} ", gallery.catalog().len(), position),
            Style::default().fg(Color::Gray),
        ),
    ];

    let help_text = if state.is_lightbox_open() {
        " ←/→:prev/next Esc:close q:quit "
    } else {
        " Enter:open [/]:page ?:help q:quit "
    };

    let content_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let help_len = help_text.chars().count();
    let available = area.width as usize;
    if available > content_len + help_len {
        spans.push(Span::raw(" ".repeat(available - content_len - help_len)));
    }

    spans.push(Span::styled(
        help_text,
        Style::default().fg(Color::White).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
