//! Paginated artwork catalog browser with persistent row selection.
//!
//! This crate implements a browsing session over a remote, page-fetched
//! artwork catalog where row selections are keyed by stable record id and
//! survive pagination. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (selection store, page math,
//!   session state). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (HTTP fetches against the
//!   catalog endpoint). Isolated behind a trait to enable stubbing in tests.
//!
//! The presentation layer (the `catalog-tui` binary) drives a
//! [`core::session::CatalogSession`] from UI events and renders the derived
//! visible selection.

pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
