//! Deterministic, pure logic for the catalog browser.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod paging;
pub mod selection;
pub mod session;
pub mod types;
