//! KindFrame: a paginated photo gallery with a wraparound lightbox.
//!
//! The crate is split into a pure core (catalog, pagination, navigation and
//! the view-state controller) and the ambient pieces the terminal front end
//! needs (configuration and logging).

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod pagination;

pub use catalog::{generate_catalog, Catalog, CatalogSettings, Photo};
pub use controller::{GalleryController, GallerySettings, ViewMode, ViewState};
pub use error::{GalleryError, Result};
