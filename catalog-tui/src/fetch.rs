//! Background page fetches.
//!
//! The UI thread never blocks on the network: each fetch runs on its own
//! thread and reports back over a channel that the app drains on tick. The
//! session's token check decides whether a result is still current.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Result;
use catalog::core::session::FetchToken;
use catalog::core::types::CatalogPage;
use catalog::io::client::FetchPage;

/// Result of one background fetch, tagged with the token it answers.
pub struct FetchOutcome {
    pub token: FetchToken,
    pub result: Result<CatalogPage>,
}

/// Run `client.fetch_page` for `token` on a background thread.
///
/// The send can only fail when the app has already shut down, in which case
/// the result is moot.
pub fn spawn_fetch(
    client: Arc<dyn FetchPage + Send + Sync>,
    token: FetchToken,
    tx: Sender<FetchOutcome>,
) {
    thread::spawn(move || {
        let result = client.fetch_page(token.page_number());
        let _ = tx.send(FetchOutcome { token, result });
    });
}
