//! Circular index arithmetic over a catalog of `len` photos.
//!
//! Every function wraps with a true modulo, so stepping back from the first
//! photo lands on the last one. An empty catalog has no neighbours.

use crate::catalog::{Catalog, Photo};

/// Index after `index`, wrapping to 0 past the end.
pub fn next(index: usize, len: usize) -> Option<usize> {
    offset(index, 1, len)
}

/// Index before `index`, wrapping to `len - 1` before the start.
pub fn prev(index: usize, len: usize) -> Option<usize> {
    offset(index, -1, len)
}

/// `index + delta` wrapped into `[0, len)`.
pub fn offset(index: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i128;
    let wrapped = (index as i128 + delta as i128).rem_euclid(len);
    Some(wrapped as usize)
}

/// The `2 * radius + 1` indices centred on `index`, in ascending offset
/// order. Indices repeat when the catalog is smaller than the window.
pub fn neighborhood(index: usize, radius: usize, len: usize) -> Vec<usize> {
    let radius = radius as isize;
    (-radius..=radius)
        .filter_map(|delta| offset(index, delta, len))
        .collect()
}

/// Position of `photo` in `catalog`, matched by id.
pub fn index_of(catalog: &Catalog, photo: &Photo) -> Option<usize> {
    catalog.iter().position(|p| p.id == photo.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{generate_catalog, CatalogSettings};

    #[test]
    fn test_boundary_wraparound() {
        assert_eq!(next(52, 53), Some(0));
        assert_eq!(prev(0, 53), Some(52));
        assert_eq!(next(0, 1), Some(0));
        assert_eq!(prev(0, 1), Some(0));
    }

    #[test]
    fn test_next_prev_are_inverse() {
        for len in 1..20 {
            for i in 0..len {
                let n = next(i, len).unwrap();
                let p = prev(i, len).unwrap();
                assert_eq!(prev(n, len), Some(i));
                assert_eq!(next(p, len), Some(i));
            }
        }
    }

    #[test]
    fn test_neighborhood_wraps_low_boundary() {
        assert_eq!(neighborhood(0, 2, 53), vec![51, 52, 0, 1, 2]);
        assert_eq!(neighborhood(52, 2, 53), vec![50, 51, 52, 0, 1]);
        assert_eq!(neighborhood(10, 2, 53), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_neighborhood_small_catalog() {
        assert_eq!(neighborhood(0, 2, 2), vec![0, 1, 0, 1, 0]);
        assert_eq!(neighborhood(0, 0, 3), vec![0]);
    }

    #[test]
    fn test_empty_catalog_has_no_neighbours() {
        assert_eq!(next(0, 0), None);
        assert_eq!(prev(0, 0), None);
        assert!(neighborhood(0, 2, 0).is_empty());
    }

    #[test]
    fn test_index_of_round_trip() {
        let catalog = generate_catalog(&CatalogSettings::default());
        for k in 0..catalog.len() {
            assert_eq!(index_of(&catalog, &catalog[k]), Some(k));
        }

        let mut stranger = catalog[0].clone();
        stranger.id = 1000;
        assert_eq!(index_of(&catalog, &stranger), None);
    }
}
