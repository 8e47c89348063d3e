//! Side-effecting collaborators for the catalog browser.

pub mod client;
