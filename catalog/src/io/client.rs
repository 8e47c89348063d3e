//! HTTP client for the paginated artwork endpoint.
//!
//! The core only requires that ids within a single page are unique and
//! stable across repeated fetches of the same page number; everything else
//! about the endpoint is opaque.

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::paging::PAGE_SIZE;
use crate::core::types::CatalogPage;

/// Artwork endpoint used when no override is given.
pub const DEFAULT_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// Boundary consumed by the session: fetch one page of records.
///
/// Implemented by [`HttpCatalogClient`] in production and by stubs in tests.
pub trait FetchPage {
    fn fetch_page(&self, page_number: u32) -> Result<CatalogPage>;
}

/// `ureq`-backed catalog client.
pub struct HttpCatalogClient {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.into(),
        }
    }
}

impl FetchPage for HttpCatalogClient {
    fn fetch_page(&self, page_number: u32) -> Result<CatalogPage> {
        debug!(page = page_number, url = %self.base_url, "fetching catalog page");
        let mut response = self
            .agent
            .get(&self.base_url)
            .query("page", page_number.to_string())
            .query("limit", PAGE_SIZE.to_string())
            .call()
            .with_context(|| format!("fetch catalog page {page_number}"))?;
        let page: CatalogPage = response
            .body_mut()
            .read_json()
            .with_context(|| format!("decode catalog page {page_number}"))?;
        Ok(page)
    }
}
