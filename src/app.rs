use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::*;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{debug, info};

use kindframe::config::{Config, UiConfig};
use kindframe::pagination;
use kindframe::{GalleryController, ViewMode, ViewState};

use crate::ui;
use crate::ui::lightbox::LightboxTarget;

/// Terminal front end: turns input into controller intents and redraws
/// whenever the controller publishes a new state.
pub struct App {
    pub gallery: GalleryController,
    pub ui: UiConfig,
    load_delay: Duration,
    updates: mpsc::Receiver<ViewState>,
    /// Grid: position on the current page. Slider: catalog index.
    pub focus: usize,
    /// First visible card row in the slider layout.
    pub slider_scroll: usize,
    /// Last known terminal size.
    pub viewport: Rect,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    needs_redraw: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let settings = config.settings();
        let mut gallery = GalleryController::new(&settings);
        let updates = gallery.subscribe();

        Self {
            gallery,
            ui: config.ui,
            load_delay: settings.load_delay,
            updates,
            focus: 0,
            slider_scroll: 0,
            viewport: Rect::new(0, 0, 120, 40),
            show_help: false,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        self.gallery.start_load_timer(self.load_delay);
        let tick = Duration::from_millis(self.ui.tick_rate_ms.max(1));
        info!(photos = self.gallery.catalog().len(), "Gallery started");

        while !self.should_quit {
            self.gallery.poll_load_timer();

            // Redraw only when the controller or the terminal changed
            if self.updates.try_iter().count() > 0 {
                self.needs_redraw = true;
            }
            if self.needs_redraw {
                let size = terminal.size()?;
                self.viewport = Rect::new(0, 0, size.width, size.height);
                terminal.draw(|frame| ui::render(frame, self))?;
                self.needs_redraw = false;
            }

            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse, self.viewport),
                    Event::Resize(width, height) => {
                        self.viewport = Rect::new(0, 0, width, height);
                        self.ensure_visible();
                    }
                    _ => continue,
                }
                self.needs_redraw = true;
            }
        }

        info!("Gallery closed");
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.gallery.state().is_lightbox_open() {
            self.handle_lightbox_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,

            // Focus movement
            KeyCode::Char('h') | KeyCode::Left => self.move_focus(-1, 0),
            KeyCode::Char('l') | KeyCode::Right => self.move_focus(1, 0),
            KeyCode::Char('k') | KeyCode::Up => self.move_focus(0, -1),
            KeyCode::Char('j') | KeyCode::Down => self.move_focus(0, 1),

            KeyCode::Enter => self.open_focused(),

            // Pages
            KeyCode::Char('[') | KeyCode::PageUp => self.change_page(-1),
            KeyCode::Char(']') | KeyCode::PageDown => self.change_page(1),
            KeyCode::Char(c @ '1'..='9') => {
                let page = c as usize - '0' as usize;
                self.go_to_page(page);
            }

            KeyCode::Char('v') => self.toggle_mode(),
            KeyCode::Esc => self.gallery.set_hover(None),

            _ => {}
        }
    }

    fn handle_lightbox_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => self.gallery.prev_photo(),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' ') => self.gallery.next_photo(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('x') => self.close_lightbox(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if !self.gallery.state().is_loaded {
            return;
        }

        let (column, row) = (mouse.column, mouse.row);
        let left_click = mouse.kind == MouseEventKind::Down(MouseButton::Left);

        if self.show_help {
            if left_click {
                self.show_help = false;
            }
            return;
        }

        if self.gallery.state().is_lightbox_open() {
            if left_click {
                let lightbox = ui::lightbox::layout_for(self, area);
                match lightbox.target_at(column, row) {
                    Some(LightboxTarget::Thumb(slot)) => self.open_strip_slot(slot),
                    Some(LightboxTarget::Prev) => self.gallery.prev_photo(),
                    Some(LightboxTarget::Next) => self.gallery.next_photo(),
                    Some(LightboxTarget::Close) => self.close_lightbox(),
                    None => {}
                }
            }
            return;
        }

        let body = ui::screen(area).body;
        match self.gallery.state().mode {
            ViewMode::Grid => {
                let grid = ui::grid::layout_for(self, body);
                match mouse.kind {
                    MouseEventKind::Moved => match grid.cell_at(column, row) {
                        Some(cell) => {
                            self.focus = cell;
                            self.hover_focus();
                        }
                        None => self.gallery.set_hover(None),
                    },
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(cell) = grid.cell_at(column, row) {
                            self.focus = cell;
                            self.open_page_slot(cell);
                        } else if let Some(page) = grid.page_at(column, row) {
                            self.go_to_page(page);
                        }
                    }
                    MouseEventKind::ScrollDown => self.change_page(1),
                    MouseEventKind::ScrollUp => self.change_page(-1),
                    _ => {}
                }
            }
            ViewMode::Slider => {
                let slider = ui::slider::layout_for(self, body);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(index) = slider.card_at(column, row) {
                            self.focus = index;
                            self.open_index(index);
                        }
                    }
                    MouseEventKind::ScrollDown => self.scroll_slider(1, slider.visible_rows),
                    MouseEventKind::ScrollUp => self.scroll_slider(-1, slider.visible_rows),
                    _ => {}
                }
            }
        }
    }

    /// Items the focus moves over in the current layout.
    fn focus_len(&self) -> usize {
        match self.gallery.state().mode {
            ViewMode::Grid => self.gallery.current_page_photos().len(),
            ViewMode::Slider => self.gallery.catalog().len(),
        }
    }

    fn move_focus(&mut self, dx: isize, dy: isize) {
        let columns = self.ui.grid_columns.max(1) as isize;
        let len = self.focus_len() as isize;
        let target = self.focus as isize + dx + dy * columns;
        if target < 0 || target >= len {
            return;
        }
        self.focus = target as usize;
        self.hover_focus();
        self.ensure_visible();
    }

    /// In the grid, keyboard focus doubles as the hover preview.
    fn hover_focus(&mut self) {
        if self.gallery.state().mode != ViewMode::Grid {
            return;
        }
        let photo = self.gallery.current_page_photos().get(self.focus).cloned();
        self.gallery.set_hover(photo.as_ref());
    }

    fn open_focused(&mut self) {
        match self.gallery.state().mode {
            ViewMode::Grid => {
                let hovered = self.gallery.state().hovered_photo.clone();
                match hovered {
                    Some(photo) => {
                        let result = self.gallery.open_photo(&photo);
                        self.report(result);
                    }
                    None => self.open_page_slot(self.focus),
                }
            }
            ViewMode::Slider => self.open_index(self.focus),
        }
    }

    fn open_page_slot(&mut self, slot: usize) {
        if let Some(photo) = self.gallery.current_page_photos().get(slot).cloned() {
            let result = self.gallery.open_photo(&photo);
            self.report(result);
        }
    }

    fn open_strip_slot(&mut self, slot: usize) {
        let radius = self.gallery.neighborhood_radius();
        let photo = self.gallery.neighborhood(radius).get(slot).map(|p| (*p).clone());
        if let Some(photo) = photo {
            let result = self.gallery.open_photo(&photo);
            self.report(result);
        }
    }

    fn open_index(&mut self, index: usize) {
        let result = self.gallery.open_index(index);
        self.report(result);
    }

    /// Close the lightbox and bring the last viewed photo into view.
    fn close_lightbox(&mut self) {
        self.gallery.close_photo();

        let index = self.gallery.state().current_index;
        match self.gallery.state().mode {
            ViewMode::Grid => {
                let page_size = self.gallery.page_size();
                let page = pagination::page_of(index, page_size);
                if page != self.gallery.state().current_page {
                    let result = self.gallery.set_page(page);
                    self.report(result);
                }
                let page_start = (self.gallery.state().current_page - 1) * page_size;
                self.focus = index.saturating_sub(page_start);
                self.focus = self.focus.min(self.focus_len().saturating_sub(1));
                self.gallery.set_hover(None);
            }
            ViewMode::Slider => {
                self.focus = index;
                self.ensure_visible();
            }
        }
    }

    fn change_page(&mut self, delta: isize) {
        let target = self.gallery.state().current_page as isize + delta;
        self.go_to_page(target.max(0) as usize);
    }

    fn go_to_page(&mut self, page: usize) {
        if page == self.gallery.state().current_page {
            return;
        }
        let result = self.gallery.set_page(page);
        if self.report(result) {
            self.focus = 0;
            self.gallery.set_hover(None);
        }
    }

    fn toggle_mode(&mut self) {
        if !self.ui.slider_toggle {
            self.status_message = Some("Slider layout is disabled".to_string());
            return;
        }

        let mode = self.gallery.state().mode.toggle();
        self.focus = match mode {
            ViewMode::Slider => {
                (self.gallery.state().current_page - 1) * self.gallery.page_size() + self.focus
            }
            ViewMode::Grid => 0,
        };
        self.gallery.set_hover(None);
        self.gallery.set_mode(mode);
        self.ensure_visible();
    }

    fn scroll_slider(&mut self, delta: isize, visible_rows: usize) {
        let columns = self.ui.grid_columns.max(1) as usize;
        let total_rows = self.gallery.catalog().len().div_ceil(columns);
        let max_scroll = total_rows.saturating_sub(visible_rows);
        let target = (self.slider_scroll as isize + delta).clamp(0, max_scroll as isize);
        self.slider_scroll = target as usize;
    }

    /// Keep the focused slider card on screen.
    fn ensure_visible(&mut self) {
        if self.gallery.state().mode != ViewMode::Slider {
            return;
        }
        let columns = self.ui.grid_columns.max(1) as usize;
        let visible_rows = ui::slider::visible_rows(ui::screen(self.viewport).body.height);
        let focus_row = self.focus / columns;

        if focus_row < self.slider_scroll {
            self.slider_scroll = focus_row;
        }
        if focus_row >= self.slider_scroll + visible_rows {
            self.slider_scroll = focus_row + 1 - visible_rows;
        }
    }

    /// Surface a rejected intent in the status bar. Returns true on success.
    fn report(&mut self, result: kindframe::Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                debug!("Intent rejected: {}", e);
                self.status_message = Some(e.to_string());
                false
            }
        }
    }
}
