//! Full-screen viewer for the selected photo.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use kindframe::Photo;

const BUTTON_WIDTH: u16 = 8;

pub struct LightboxLayout {
    pub info: Rect,
    pub main: Rect,
    /// Thumbnail strip slots, left to right.
    pub thumbs: Vec<Rect>,
    pub prev: Rect,
    pub close: Rect,
    pub next: Rect,
}

/// What a click inside the lightbox landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    /// Position in the thumbnail strip.
    Thumb(usize),
    Prev,
    Close,
    Next,
}

impl LightboxLayout {
    pub fn target_at(&self, column: u16, row: u16) -> Option<LightboxTarget> {
        if super::hit(self.prev, column, row) {
            return Some(LightboxTarget::Prev);
        }
        if super::hit(self.close, column, row) {
            return Some(LightboxTarget::Close);
        }
        if super::hit(self.next, column, row) {
            return Some(LightboxTarget::Next);
        }
        self.thumbs
            .iter()
            .position(|thumb| super::hit(*thumb, column, row))
            .map(LightboxTarget::Thumb)
    }
}

pub fn layout(area: Rect, strip_len: usize) -> LightboxLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Min(0)])
        .split(rows[0]);

    let info_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(columns[0]);

    let strip_len = strip_len.max(1) as u32;
    let thumbs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..strip_len).map(|_| Constraint::Ratio(1, strip_len)))
        .split(info_chunks[1])
        .to_vec();

    // Prev | Close | Next, centred along the bottom
    let bar = super::centered_rect(rows[1], BUTTON_WIDTH * 3, 3);
    let prev = Rect::new(bar.x, bar.y, BUTTON_WIDTH, bar.height);
    let close = Rect::new(bar.x + BUTTON_WIDTH, bar.y, BUTTON_WIDTH, bar.height);
    let next = Rect::new(bar.x + BUTTON_WIDTH * 2, bar.y, BUTTON_WIDTH, bar.height);

    LightboxLayout {
        info: info_chunks[0],
        main: columns[1],
        thumbs,
        prev: prev.intersection(area),
        close: close.intersection(area),
        next: next.intersection(area),
    }
}

pub fn layout_for(app: &App, area: Rect) -> LightboxLayout {
    layout(area, app.gallery.neighborhood_radius() * 2 + 1)
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let gallery = &app.gallery;
    let state = gallery.state();
    let Some(photo) = state.selected_photo.as_ref() else {
        return;
    };

    frame.render_widget(Clear, area);
    let lightbox = layout_for(app, area);

    // Info panel
    let info = vec![
        Line::from(Span::styled(
            photo.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Year taken {}", photo.year),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}/{}", state.current_index + 1, gallery.catalog().len()),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let info_panel = Paragraph::new(info).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(info_panel, lightbox.info);

    let strip = gallery.neighborhood(gallery.neighborhood_radius());
    for (thumb, rect) in strip.iter().zip(lightbox.thumbs.iter()) {
        render_thumb(frame, thumb, *rect, thumb.id == photo.id);
    }

    render_main(frame, photo, lightbox.main);

    render_button(frame, "Prev", lightbox.prev);
    render_button(frame, "✕", lightbox.close);
    render_button(frame, "Next", lightbox.next);
}

fn render_thumb(frame: &mut Frame, photo: &Photo, area: Rect, current: bool) {
    let (border, text) = if current {
        (Color::Blue, Color::White)
    } else {
        (Color::DarkGray, Color::Gray)
    };
    let thumb = Paragraph::new(photo.id.to_string())
        .style(Style::default().fg(text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(thumb, area);
}

fn render_main(frame: &mut Frame, photo: &Photo, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", photo.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let asset = Paragraph::new(photo.src.as_str())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(asset, super::centered_rect(inner, inner.width, 1));
}

fn render_button(frame: &mut Frame, label: &str, area: Rect) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::draw;
    use kindframe::config::Config;

    #[test]
    fn test_layout_targets() {
        let area = Rect::new(0, 0, 120, 40);
        let lightbox = layout(area, 5);
        assert_eq!(lightbox.thumbs.len(), 5);

        let thumb = lightbox.thumbs[3];
        assert_eq!(
            lightbox.target_at(thumb.x + 1, thumb.y + 1),
            Some(LightboxTarget::Thumb(3))
        );
        assert_eq!(
            lightbox.target_at(lightbox.next.x, lightbox.next.y),
            Some(LightboxTarget::Next)
        );
        assert_eq!(
            lightbox.target_at(lightbox.close.x + 1, lightbox.close.y + 1),
            Some(LightboxTarget::Close)
        );
        assert_eq!(lightbox.target_at(lightbox.main.x + 5, lightbox.main.y + 5), None);
    }

    #[test]
    fn test_render_strip_wraps() {
        let mut app = App::new(Config::default());
        app.gallery.mark_loaded();
        app.gallery.open_index(0).unwrap();

        let text = draw(&app, 120, 40);
        assert!(text.contains("kind frame 001"));
        assert!(text.contains("Year taken 2025"));
        assert!(text.contains("/images/1.jpeg"));
        assert!(text.contains("52"));
        assert!(text.contains("53"));
        assert!(text.contains("1/53"));
    }
}
