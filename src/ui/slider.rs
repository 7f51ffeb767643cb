//! Slider layout: every photo as a card, scrolled a row at a time.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use kindframe::Photo;

pub const CARD_HEIGHT: u16 = 4;

pub struct SliderLayout {
    /// Catalog index and rect of each visible card.
    pub cards: Vec<(usize, Rect)>,
    pub visible_rows: usize,
}

impl SliderLayout {
    /// Catalog index of the card under the pointer.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cards
            .iter()
            .find(|(_, rect)| super::hit(*rect, column, row))
            .map(|(index, _)| *index)
    }
}

/// Number of card rows that fit in `height`.
pub fn visible_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

pub fn layout(area: Rect, columns: u16, len: usize, scroll_row: usize) -> SliderLayout {
    let columns = columns.max(1);
    let rows = visible_rows(area.height);
    let card_width = area.width / columns;

    let mut cards = Vec::new();
    for row in 0..rows {
        for col in 0..columns {
            let index = (scroll_row + row) * columns as usize + col as usize;
            if index >= len {
                break;
            }
            let rect = Rect::new(
                area.x + col * card_width,
                area.y + row as u16 * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            );
            cards.push((index, rect.intersection(area)));
        }
    }

    SliderLayout {
        cards,
        visible_rows: rows,
    }
}

pub fn layout_for(app: &App, area: Rect) -> SliderLayout {
    layout(
        area,
        app.ui.grid_columns,
        app.gallery.catalog().len(),
        app.slider_scroll,
    )
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let catalog = app.gallery.catalog();
    let slider = layout_for(app, area);

    for (index, rect) in slider.cards {
        let focused = index == app.focus;
        render_card(frame, &catalog[index], rect, focused);
    }
}

fn render_card(frame: &mut Frame, photo: &Photo, area: Rect, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let lines = vec![
        Line::from(Span::styled(
            photo.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(photo.year.clone(), Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
