//! Grid layout: one page of photos, a pagination bar and a hover preview.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use kindframe::{Catalog, Photo};

const PAGE_BUTTON_WIDTH: u16 = 5;

/// Where everything in the grid layout sits on screen.
pub struct GridLayout {
    /// One rect per photo on the current page, in page order.
    pub cells: Vec<Rect>,
    /// One rect per page button, page 1 first.
    pub pages: Vec<Rect>,
    pub preview: Rect,
}

impl GridLayout {
    /// Position on the page of the cell under the pointer.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cells.iter().position(|cell| super::hit(*cell, column, row))
    }

    /// 1-based page number of the button under the pointer.
    pub fn page_at(&self, column: u16, row: u16) -> Option<usize> {
        self.pages
            .iter()
            .position(|button| super::hit(*button, column, row))
            .map(|i| i + 1)
    }
}

pub fn layout(
    area: Rect,
    columns: u16,
    photos_on_page: usize,
    page_size: usize,
    page_count: usize,
) -> GridLayout {
    // Grid on the left two thirds, hover preview on the right
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(halves[0]);

    // Size rows for a full page so the last page keeps the same cell size
    let columns = columns.max(1) as usize;
    let rows = page_size.div_ceil(columns).max(1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows as u32)))
        .split(chunks[0]);

    let mut cells = Vec::with_capacity(photos_on_page);
    'rows: for row_area in row_areas.iter() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(*row_area);
        for cell in col_areas.iter() {
            if cells.len() == photos_on_page {
                break 'rows;
            }
            cells.push(*cell);
        }
    }

    let bar = chunks[1];
    let page_count = page_count.min(u16::MAX as usize) as u16;
    let total_width = PAGE_BUTTON_WIDTH.saturating_mul(page_count);
    let start_x = bar.x + bar.width.saturating_sub(total_width) / 2;
    let pages = (0..page_count)
        .map(|i| {
            let x = start_x.saturating_add(i.saturating_mul(PAGE_BUTTON_WIDTH));
            Rect::new(x, bar.y + 1, PAGE_BUTTON_WIDTH, 1)
        })
        .filter(|button| button.right() <= bar.right())
        .collect();

    GridLayout {
        cells,
        pages,
        preview: halves[1],
    }
}

/// Layout for the app's current page.
pub fn layout_for(app: &App, area: Rect) -> GridLayout {
    let gallery = &app.gallery;
    layout(
        area,
        app.ui.grid_columns,
        gallery.current_page_photos().len(),
        gallery.page_size(),
        gallery.page_count(),
    )
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let gallery = &app.gallery;
    let state = gallery.state();
    let grid = layout_for(app, area);

    if gallery.catalog().is_empty() {
        let empty = Paragraph::new("No photos")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, super::centered_rect(area, 20, 1));
        return;
    }

    let hovered_id = state.hovered_photo.as_ref().map(|p| p.id);
    for (photo, cell) in gallery.current_page_photos().iter().zip(grid.cells.iter()) {
        render_cell(frame, photo, *cell, hovered_id == Some(photo.id));
    }

    for (i, button) in grid.pages.iter().enumerate() {
        let number = i + 1;
        let style = if number == state.current_page {
            Style::default().fg(Color::Black).bg(Color::Gray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = Paragraph::new(number.to_string())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(label, *button);
    }

    render_preview(frame, gallery.catalog(), state.hovered_photo.as_ref(), grid.preview);
}

fn render_cell(frame: &mut Frame, photo: &Photo, area: Rect, hovered: bool) {
    let border_color = if hovered { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", photo.id));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 2 || inner.height < 1 {
        return;
    }

    // Title shows on hover, like a caption sliding in
    let style = if hovered {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let caption = Paragraph::new(photo.title.as_str())
        .style(style)
        .wrap(Wrap { trim: true });
    frame.render_widget(caption, inner);
}

fn render_preview(frame: &mut Frame, catalog: &Catalog, hovered: Option<&Photo>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    if let Some(photo) = hovered {
        let lines = vec![
            Line::from(Span::styled(
                photo.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Year taken {}", photo.year)),
            Line::from(""),
            Line::from(Span::styled(photo.src.clone(), Style::default().fg(Color::DarkGray))),
        ];
        let preview = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Preview "),
            );
        frame.render_widget(preview, chunks[0]);
    }

    if let Some((first, last)) = catalog.year_range() {
        let marker = if first == last {
            format!("──── {}", last)
        } else {
            format!("{} ──── {}", first, last)
        };
        let years = Paragraph::new(marker)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right);
        frame.render_widget(years, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::draw;
    use kindframe::config::Config;

    #[test]
    fn test_layout_cells_and_pages() {
        let area = Rect::new(0, 0, 120, 40);
        let grid = layout(area, 4, 16, 16, 4);
        assert_eq!(grid.cells.len(), 16);
        assert_eq!(grid.pages.len(), 4);

        let last = layout(area, 4, 5, 16, 4);
        assert_eq!(last.cells.len(), 5);
        // Last page keeps full-page cell sizes
        assert_eq!(last.cells[0], grid.cells[0]);
    }

    #[test]
    fn test_hit_testing() {
        let area = Rect::new(0, 0, 120, 40);
        let grid = layout(area, 4, 16, 16, 4);

        let cell = grid.cells[5];
        assert_eq!(grid.cell_at(cell.x + 1, cell.y + 1), Some(5));

        let button = grid.pages[2];
        assert_eq!(grid.page_at(button.x, button.y), Some(3));

        assert_eq!(grid.cell_at(grid.preview.x + 1, grid.preview.y + 1), None);
    }

    #[test]
    fn test_render_page_and_preview() {
        let mut app = App::new(Config::default());
        app.gallery.mark_loaded();
        app.gallery.set_page(4).unwrap();
        let photo = app.gallery.catalog()[50].clone();
        app.gallery.set_hover(Some(&photo));

        let text = draw(&app, 140, 45);
        assert!(text.contains("kind frame 049"));
        assert!(text.contains("kind frame 053"));
        assert!(!text.contains("kind frame 048"));
        assert!(text.contains("Year taken 2027"));
        assert!(text.contains("2025 ──── 2027"));
    }
}
