//! Shared deterministic types for the catalog core.
//!
//! These types define stable contracts between core components and mirror
//! the wire format of the artwork endpoint. Identifier uniqueness within a
//! page is the only invariant the core relies on.

use serde::{Deserialize, Serialize};

/// Stable unique identifier of one catalog record.
pub type ArtworkId = i64;

/// One catalog entry. Display fields are nullable in the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

/// Page metadata returned alongside each batch of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

/// One fetched batch of records plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

impl CatalogPage {
    /// Record ids of this page, in page order.
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.data.iter().map(|artwork| artwork.id).collect()
    }
}
