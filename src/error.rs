//! Error types for the gallery core.

use thiserror::Error;

/// Rejected controller calls. The state is left untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("photo {id} is not part of the catalog")]
    PhotoNotInCatalog { id: u32 },

    #[error("page {page} is out of range (1..={page_count})")]
    PageOutOfRange { page: usize, page_count: usize },
}

pub type Result<T> = std::result::Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GalleryError::PhotoNotInCatalog { id: 99 };
        assert_eq!(err.to_string(), "photo 99 is not part of the catalog");

        let err = GalleryError::PageOutOfRange { page: 5, page_count: 4 };
        assert_eq!(err.to_string(), "page 5 is out of range (1..=4)");
    }
}
