//! The photo catalog: a fixed, ordered list of photos generated once at
//! startup.

use std::sync::Arc;

/// A single photograph in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Photo {
    /// 1-based, dense, unique.
    pub id: u32,
    /// Asset reference, resolved by whoever renders the photo.
    pub src: String,
    pub title: String,
    /// Year label of the band this photo falls in.
    pub year: String,
}

/// Parameters used to derive photo records from their position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub size: usize,
    pub base_year: u32,
    /// Number of consecutive photos sharing one year label.
    pub band_size: usize,
    pub title_prefix: String,
    pub asset_dir: String,
    pub asset_extension: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            size: 53,
            base_year: 2025,
            band_size: 25,
            title_prefix: "kind frame ".to_string(),
            asset_dir: "/images".to_string(),
            asset_extension: "jpeg".to_string(),
        }
    }
}

impl CatalogSettings {
    fn photo_at(&self, index: usize) -> Photo {
        let id = index as u32 + 1;
        let band = index / self.band_size.max(1);
        Photo {
            id,
            src: format!(
                "{}/{}.{}",
                self.asset_dir.trim_end_matches('/'),
                id,
                self.asset_extension
            ),
            title: format!("{}{:03}", self.title_prefix, id),
            year: (self.base_year + band as u32).to_string(),
        }
    }
}

/// Immutable, cheaply clonable list of photos. Invariant:
/// `catalog[i].id == i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    photos: Arc<[Photo]>,
}

/// Build the catalog described by `settings`. Deterministic.
pub fn generate_catalog(settings: &CatalogSettings) -> Catalog {
    let photos: Vec<Photo> = (0..settings.size).map(|i| settings.photo_at(i)).collect();
    Catalog {
        photos: photos.into(),
    }
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }

    pub fn as_slice(&self) -> &[Photo] {
        &self.photos
    }

    /// Whether `photo` is one of this catalog's records.
    pub fn contains(&self, photo: &Photo) -> bool {
        photo.id >= 1
            && self
                .photos
                .get(photo.id as usize - 1)
                .is_some_and(|p| p == photo)
    }

    /// First and last year labels, or `None` for an empty catalog.
    pub fn year_range(&self) -> Option<(&str, &str)> {
        let first = self.photos.first()?;
        let last = self.photos.last()?;
        Some((first.year.as_str(), last.year.as_str()))
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = Photo;

    fn index(&self, index: usize) -> &Photo {
        &self.photos[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Photo;
    type IntoIter = std::slice::Iter<'a, Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.photos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(size: usize) -> CatalogSettings {
        CatalogSettings {
            size,
            ..CatalogSettings::default()
        }
    }

    #[test]
    fn test_ids_are_dense_and_one_based() {
        let catalog = generate_catalog(&settings(53));
        assert_eq!(catalog.len(), 53);
        for (i, photo) in catalog.iter().enumerate() {
            assert_eq!(photo.id as usize, i + 1);
        }
    }

    #[test]
    fn test_photo_fields() {
        let catalog = generate_catalog(&settings(53));
        let photo = &catalog[6];
        assert_eq!(photo.id, 7);
        assert_eq!(photo.title, "kind frame 007");
        assert_eq!(photo.src, "/images/7.jpeg");
        assert_eq!(catalog[52].title, "kind frame 053");
    }

    #[test]
    fn test_year_bands() {
        let catalog = generate_catalog(&settings(53));
        assert_eq!(catalog[0].year, "2025");
        assert_eq!(catalog[24].year, "2025");
        assert_eq!(catalog[25].year, "2026");
        assert_eq!(catalog[49].year, "2026");
        assert_eq!(catalog[50].year, "2027");
        assert_eq!(catalog.year_range(), Some(("2025", "2027")));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_catalog(&settings(53));
        let b = generate_catalog(&settings(53));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = generate_catalog(&settings(0));
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
        assert_eq!(catalog.year_range(), None);
    }

    #[test]
    fn test_zero_band_size_does_not_panic() {
        let catalog = generate_catalog(&CatalogSettings {
            size: 3,
            band_size: 0,
            ..CatalogSettings::default()
        });
        assert_eq!(catalog[2].year, "2027");
    }

    #[test]
    fn test_contains() {
        let catalog = generate_catalog(&settings(5));
        assert!(catalog.contains(&catalog[3]));

        let mut stranger = catalog[3].clone();
        stranger.title = "someone else".to_string();
        assert!(!catalog.contains(&stranger));

        let bigger = generate_catalog(&settings(10));
        assert!(!catalog.contains(&bigger[7]));
    }
}
