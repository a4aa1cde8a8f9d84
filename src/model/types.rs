//! Core type definitions for the application

use std::time::Instant;

use super::track::TrackId;

/// Where the track list stands with respect to fetching
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// First fetch outstanding, nothing to show yet
    Loading,
    Loaded,
    /// A user-initiated re-fetch is outstanding; the previous list stays visible
    Refreshing,
}

/// Why a fetch was started
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Refresh,
}

/// Issued when a fetch starts and handed back with its completion.
///
/// Only the most recently issued ticket may write results into the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub kind: FetchKind,
}

/// Which screen is in front
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    TrackList,
    TrackDetail(TrackId),
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub screen: Screen,
    pub query: String,
    pub selected: usize,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl UiState {
    pub fn new(query: String) -> Self {
        Self {
            screen: Screen::TrackList,
            query,
            selected: 0,
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
        }
    }
}
