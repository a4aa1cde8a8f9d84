//! Transport controls shown on the detail screen
//!
//! Playback is not implemented. The controls exist so the detail screen can
//! offer them, and [`InertTransport`] is the only implementation: every call
//! is accepted and nothing changes.

/// Previous / play-pause / next as offered by the detail screen
pub trait TransportControls {
    fn previous(&mut self);
    fn toggle_play_pause(&mut self);
    fn next(&mut self);

    /// What the play/pause button should show
    fn is_playing(&self) -> bool;
}

/// Accepts every transport command and performs no state change
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InertTransport;

impl TransportControls for InertTransport {
    fn previous(&mut self) {
        tracing::trace!(control = "previous", "Transport control ignored");
    }

    fn toggle_play_pause(&mut self) {
        tracing::trace!(control = "play_pause", "Transport control ignored");
    }

    fn next(&mut self) {
        tracing::trace!(control = "next", "Transport control ignored");
    }

    fn is_playing(&self) -> bool {
        false
    }
}
