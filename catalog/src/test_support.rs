//! Test-only helpers for constructing catalog fixtures.

use crate::core::paging::PAGE_SIZE;
use crate::core::types::{Artwork, ArtworkId, CatalogPage, Pagination};

/// Create a deterministic artwork with display fields derived from the id.
pub fn artwork(id: ArtworkId) -> Artwork {
    Artwork {
        id,
        title: Some(format!("Artwork {id}")),
        place_of_origin: Some("Chicago".to_string()),
        artist_display: Some(format!("Artist {id}")),
        inscriptions: None,
        date_start: Some(1900),
        date_end: Some(1910),
    }
}

/// Create artworks for each id, preserving iteration order.
pub fn artworks(ids: impl IntoIterator<Item = ArtworkId>) -> Vec<Artwork> {
    ids.into_iter().map(artwork).collect()
}

/// Create a full page with consistent pagination metadata.
pub fn page(page_number: u32, total: u64, ids: impl IntoIterator<Item = ArtworkId>) -> CatalogPage {
    let data = artworks(ids);
    CatalogPage {
        pagination: Pagination {
            total,
            limit: PAGE_SIZE,
            offset: u64::from(page_number - 1) * u64::from(PAGE_SIZE),
            total_pages: crate::core::paging::total_pages(total),
            current_page: page_number,
        },
        data,
    }
}
