//! Model module - Application state and data types
//!
//! - `types`: Core type definitions (load phase, fetch tickets, UI state)
//! - `track`: Track data and the wire shape it is decoded from
//! - `duration`: `MM:SS` formatting
//! - `search_client`: Catalog search HTTP client
//! - `transport`: Inert transport controls
//! - `app_model`: Main application model with state management methods

mod types;
mod track;
mod duration;
mod search_client;
mod transport;
mod app_model;

pub use types::{FetchKind, FetchTicket, LoadPhase, Screen, UiState};

pub use track::Track;

pub use duration::format_millis;

pub use search_client::{FetchError, SearchClient};

pub use transport::{InertTransport, TransportControls};

pub use app_model::AppModel;

#[cfg(test)]
pub(crate) use track::sample_track;
