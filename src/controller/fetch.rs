//! Fetch orchestration: spawn, then hand the result back to the UI loop

use crate::model::{FetchError, FetchKind, FetchTicket, Track};
use super::AppController;

const LOAD_FAILED_MESSAGE: &str = "Couldn't load tracks. Press R to try again.";

/// Outcome of one fetch, sent from the fetch task to the UI loop
#[derive(Debug)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: Result<Vec<Track>, FetchError>,
}

impl AppController {
    /// Kick off the first load. Called once when the UI starts.
    pub fn start_initial_load(&mut self) -> FetchTicket {
        self.start_fetch(FetchKind::Initial)
    }

    /// User-initiated re-fetch; the result replaces the list wholesale.
    pub fn refresh(&mut self) -> FetchTicket {
        self.start_fetch(FetchKind::Refresh)
    }

    fn start_fetch(&mut self, kind: FetchKind) -> FetchTicket {
        let ticket = self.model.begin_fetch(kind);
        let query = self.model.ui_state().query.clone();
        tracing::debug!(seq = ticket.seq, ?kind, query = %query, "Starting fetch");

        let client = self.client.clone();
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let result = client.fetch(&query).await;
            crate::log_fetch_result!("search", result);
            if completions.send(FetchCompletion { ticket, result }).is_err() {
                tracing::debug!(seq = ticket.seq, "UI loop gone, dropping fetch result");
            }
        });
        ticket
    }

    /// Apply a completion on the UI loop. Failures become an empty list.
    pub fn apply_completion(&mut self, completion: FetchCompletion) {
        let FetchCompletion { ticket, result } = completion;

        let (tracks, failed) = match result {
            Ok(tracks) => {
                tracing::info!(seq = ticket.seq, kind = ?ticket.kind, tracks = tracks.len(), "Fetch completed");
                (tracks, false)
            }
            Err(e) => {
                tracing::error!(seq = ticket.seq, fetch = ?ticket.kind, kind = e.kind(), error = %e, "Fetch failed, showing empty list");
                (Vec::new(), true)
            }
        };

        if self.model.complete_fetch(ticket, tracks) && failed {
            self.model.set_error(LOAD_FAILED_MESSAGE.to_string());
        }
    }
}
