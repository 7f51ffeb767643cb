//! View-state controller for the gallery and its lightbox.
//!
//! The controller owns the [`ViewState`] and is the only thing allowed to
//! change it. Presentation code sends intents (open, close, next, prev,
//! page, hover, mode) and renders whatever snapshot comes back, either by
//! reading [`GalleryController::state`] or by listening on a channel from
//! [`GalleryController::subscribe`].
//!
//! Invalid arguments are rejected with a [`GalleryError`] and leave the
//! state untouched. Intents that make no sense in the current state, like
//! `next_photo` with the lightbox closed, are silently ignored.

pub mod timer;

use std::sync::mpsc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::catalog::{generate_catalog, Catalog, CatalogSettings, Photo};
use crate::error::{GalleryError, Result};
use crate::{navigation, pagination};

pub use timer::LoadTimer;

/// Top-level layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Paginated grid with a hover preview.
    #[default]
    Grid,
    /// Every photo on one scrolling sheet.
    Slider,
}

impl ViewMode {
    pub fn toggle(&self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Slider,
            ViewMode::Slider => ViewMode::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::Slider => "Slider",
        }
    }
}

/// Snapshot of everything the presentation layer needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    /// `Some` while the lightbox is open.
    pub selected_photo: Option<Photo>,
    /// Meaningful only while `selected_photo` is `Some`.
    pub current_index: usize,
    /// 1-based, only used by the grid.
    pub current_page: usize,
    pub hovered_photo: Option<Photo>,
    /// Set once after the startup delay; gates the entrance transition.
    pub is_loaded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: ViewMode::Grid,
            selected_photo: None,
            current_index: 0,
            current_page: 1,
            hovered_photo: None,
            is_loaded: false,
        }
    }
}

impl ViewState {
    pub fn is_lightbox_open(&self) -> bool {
        self.selected_photo.is_some()
    }
}

/// Construction parameters for a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySettings {
    pub catalog: CatalogSettings,
    pub page_size: usize,
    /// Photos shown on each side of the current one in the lightbox strip.
    pub neighborhood_radius: usize,
    pub load_delay: Duration,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            page_size: 16,
            neighborhood_radius: 2,
            load_delay: Duration::from_millis(300),
        }
    }
}

pub struct GalleryController {
    catalog: Catalog,
    page_size: usize,
    neighborhood_radius: usize,
    state: ViewState,
    subscribers: Vec<mpsc::Sender<ViewState>>,
    load_timer: Option<LoadTimer>,
}

impl GalleryController {
    /// Generate the catalog and start in the initial state. No timer is
    /// running yet; see [`GalleryController::start_load_timer`].
    pub fn new(settings: &GallerySettings) -> Self {
        let catalog = generate_catalog(&settings.catalog);
        debug!(photos = catalog.len(), page_size = settings.page_size, "Gallery controller created");
        Self::with_catalog(catalog, settings.page_size, settings.neighborhood_radius)
    }

    pub fn with_catalog(catalog: Catalog, page_size: usize, neighborhood_radius: usize) -> Self {
        Self {
            catalog,
            page_size,
            neighborhood_radius,
            state: ViewState::default(),
            subscribers: Vec::new(),
            load_timer: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn neighborhood_radius(&self) -> usize {
        self.neighborhood_radius
    }

    /// Receive a snapshot after every change to the view state.
    pub fn subscribe(&mut self) -> mpsc::Receiver<ViewState> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Open the lightbox on `photo`.
    pub fn open_photo(&mut self, photo: &Photo) -> Result<()> {
        let index = match navigation::index_of(&self.catalog, photo) {
            Some(index) if self.catalog[index] == *photo => index,
            _ => {
                warn!(id = photo.id, "Rejected open of a photo outside the catalog");
                return Err(GalleryError::PhotoNotInCatalog { id: photo.id });
            }
        };

        debug!(id = photo.id, index, "Opening photo");
        let photo = self.catalog[index].clone();
        self.update(|state| {
            state.selected_photo = Some(photo);
            state.current_index = index;
        });
        Ok(())
    }

    /// Open the lightbox on the photo at catalog `index`.
    pub fn open_index(&mut self, index: usize) -> Result<()> {
        match self.catalog.get(index).cloned() {
            Some(photo) => self.open_photo(&photo),
            None => {
                warn!(index, "Rejected open of an index outside the catalog");
                Err(GalleryError::PhotoNotInCatalog { id: index as u32 + 1 })
            }
        }
    }

    /// Close the lightbox. `current_index` is left as it was.
    pub fn close_photo(&mut self) {
        debug!("Closing photo");
        self.update(|state| state.selected_photo = None);
    }

    pub fn next_photo(&mut self) {
        self.step(navigation::next);
    }

    pub fn prev_photo(&mut self) {
        self.step(navigation::prev);
    }

    fn step(&mut self, advance: fn(usize, usize) -> Option<usize>) {
        if !self.state.is_lightbox_open() {
            return;
        }
        let Some(index) = advance(self.state.current_index, self.catalog.len()) else {
            return;
        };
        debug!(from = self.state.current_index, to = index, "Stepping lightbox");
        let photo = self.catalog[index].clone();
        self.update(|state| {
            state.current_index = index;
            state.selected_photo = Some(photo);
        });
    }

    /// Switch the grid to page `page` (1-based).
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            warn!(page, page_count, "Rejected out-of-range page");
            return Err(GalleryError::PageOutOfRange { page, page_count });
        }
        debug!(page, "Changing page");
        self.update(|state| state.current_page = page);
        Ok(())
    }

    pub fn set_hover(&mut self, photo: Option<&Photo>) {
        let photo = photo.cloned();
        self.update(|state| state.hovered_photo = photo);
    }

    /// Switch layouts. Selection and page are kept.
    pub fn set_mode(&mut self, mode: ViewMode) {
        debug!(mode = mode.label(), "Changing view mode");
        self.update(|state| state.mode = mode);
    }

    pub fn mark_loaded(&mut self) {
        if self.state.is_loaded {
            return;
        }
        debug!("Gallery loaded");
        self.update(|state| state.is_loaded = true);
        self.load_timer = None;
    }

    /// Schedule `mark_loaded` after `delay`. Must run inside a tokio
    /// runtime. The timer lives as long as the controller; dropping the
    /// controller cancels it.
    pub fn start_load_timer(&mut self, delay: Duration) {
        if self.state.is_loaded {
            return;
        }
        self.load_timer = Some(LoadTimer::schedule(delay));
    }

    /// Apply the load timer if it has fired. Returns true when it did.
    pub fn poll_load_timer(&mut self) -> bool {
        let fired = self.load_timer.as_ref().is_some_and(|timer| timer.fired());
        if fired {
            self.mark_loaded();
        }
        fired
    }

    pub fn cancel_load_timer(&mut self) {
        if let Some(timer) = self.load_timer.take() {
            timer.cancel();
        }
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.catalog.len(), self.page_size)
    }

    /// Photos on the current grid page.
    pub fn current_page_photos(&self) -> &[Photo] {
        pagination::page(self.catalog.as_slice(), self.state.current_page, self.page_size)
    }

    /// Photos within `radius` of the current index, wrapping around.
    pub fn neighborhood(&self, radius: usize) -> Vec<&Photo> {
        navigation::neighborhood(self.state.current_index, radius, self.catalog.len())
            .into_iter()
            .map(|index| &self.catalog[index])
            .collect()
    }

    fn update(&mut self, mutate: impl FnOnce(&mut ViewState)) {
        let before = self.state.clone();
        mutate(&mut self.state);
        if self.state != before {
            self.publish();
        }
    }

    fn publish(&mut self) {
        let snapshot = self.state.clone();
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
