mod dialogs;
pub mod grid;
mod header;
pub mod lightbox;
pub mod slider;
mod status_bar;

use ratatui::prelude::*;

use crate::app::App;
use kindframe::ViewMode;

/// Screen split shared by rendering and mouse hit-testing.
pub struct Screen {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Grid / slider
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Screen {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = app.gallery.state();

    // Entrance: only the header until the load timer fires
    if !state.is_loaded {
        header::render_splash(frame, area);
        return;
    }

    let screen = screen(area);
    header::render(frame, screen.header);

    match state.mode {
        ViewMode::Grid => grid::render(frame, app, screen.body),
        ViewMode::Slider => slider::render(frame, app, screen.body),
    }

    status_bar::render(frame, app, screen.status);

    if state.is_lightbox_open() {
        lightbox::render(frame, app, area);
    }

    if app.show_help {
        dialogs::render_help(frame, area);
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub(crate) fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::app::App;

    pub fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| super::render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    pub fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::draw;
    use crate::app::App;
    use kindframe::config::Config;

    #[test]
    fn test_splash_until_loaded() {
        let mut app = App::new(Config::default());
        let text = draw(&app, 100, 40);
        assert!(text.contains("KindFrame"));
        assert!(!text.contains("kind frame 001"));

        app.gallery.mark_loaded();
        let text = draw(&app, 100, 40);
        assert!(text.contains("kind frame 001"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new(Config::default());
        app.gallery.mark_loaded();
        app.show_help = true;
        let text = draw(&app, 100, 40);
        assert!(text.contains("Gallery Help"));
    }
}
