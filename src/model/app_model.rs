//! Main application model with state management
//!
//! The model is owned by the UI loop and is only ever mutated from there.
//! Background fetches never touch it directly; their results come back over
//! a channel and are applied through [`AppModel::complete_fetch`].

use std::time::{Duration, Instant};

use super::track::Track;
use super::types::{FetchKind, FetchTicket, LoadPhase, Screen, UiState};

const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Main application model containing all state
pub struct AppModel {
    phase: LoadPhase,
    tracks: Vec<Track>,
    last_issued_seq: u64,
    in_flight: Option<FetchTicket>,
    ui_state: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new(query: String) -> Self {
        Self {
            phase: LoadPhase::Loading,
            tracks: Vec::new(),
            last_issued_seq: 0,
            in_flight: None,
            ui_state: UiState::new(query),
            should_quit: false,
        }
    }

    // ========================================================================
    // Load / refresh state machine
    // ========================================================================

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    /// Register a new fetch and return the ticket its completion must carry.
    ///
    /// Any fetch still outstanding is superseded. A refresh only enters
    /// `Refreshing` from `Loaded`; during the first load it stays `Loading`.
    pub fn begin_fetch(&mut self, kind: FetchKind) -> FetchTicket {
        self.last_issued_seq += 1;
        let ticket = FetchTicket {
            seq: self.last_issued_seq,
            kind,
        };

        self.phase = match (kind, self.phase) {
            (FetchKind::Initial, _) => LoadPhase::Loading,
            (FetchKind::Refresh, LoadPhase::Loaded) => LoadPhase::Refreshing,
            (FetchKind::Refresh, phase) => phase,
        };

        if let Some(superseded) = self.in_flight.replace(ticket) {
            tracing::debug!(
                superseded = superseded.seq,
                current = ticket.seq,
                "Outstanding fetch superseded"
            );
        }
        ticket
    }

    /// Apply the outcome of a fetch. Returns `false` when the ticket is stale
    /// and the tracks were discarded.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, tracks: Vec<Track>) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.last_issued_seq,
                "Discarding stale fetch completion"
            );
            return false;
        }

        self.in_flight = None;
        self.tracks = tracks;
        self.phase = LoadPhase::Loaded;
        self.reconcile_selection();
        true
    }

    fn reconcile_selection(&mut self) {
        let state = &mut self.ui_state;
        state.selected = state.selected.min(self.tracks.len().saturating_sub(1));

        if let Screen::TrackDetail(id) = state.screen {
            if !self.tracks.iter().any(|t| t.id == id) {
                state.screen = Screen::TrackList;
            }
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn screen(&self) -> Screen {
        self.ui_state.screen
    }

    pub fn selected_index(&self) -> usize {
        self.ui_state.selected
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.tracks.get(self.ui_state.selected)
    }

    /// Track shown by the detail screen, if it is in front
    pub fn detail_track(&self) -> Option<&Track> {
        match self.ui_state.screen {
            Screen::TrackDetail(id) => self.tracks.iter().find(|t| t.id == id),
            Screen::TrackList => None,
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.ui_state.selected > 0 {
            self.ui_state.selected -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.ui_state.selected < self.tracks.len().saturating_sub(1) {
            self.ui_state.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.ui_state.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.ui_state.selected = self.tracks.len().saturating_sub(1);
    }

    /// Open the detail screen for the selected row; no-op on an empty list
    pub fn open_selected(&mut self) -> bool {
        match self.selected_track().map(|t| t.id) {
            Some(id) => {
                self.ui_state.screen = Screen::TrackDetail(id);
                true
            }
            None => false,
        }
    }

    pub fn navigate_back(&mut self) -> bool {
        match self.ui_state.screen {
            Screen::TrackDetail(_) => {
                self.ui_state.screen = Screen::TrackList;
                true
            }
            Screen::TrackList => false,
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn set_error(&mut self, message: String) {
        self.ui_state.error_message = Some(message);
        self.ui_state.error_timestamp = Some(Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.ui_state.error_message = None;
        self.ui_state.error_timestamp = None;
    }

    pub fn has_error(&self) -> bool {
        self.ui_state.error_message.is_some()
    }

    pub fn auto_clear_old_errors(&mut self) {
        if let Some(timestamp) = self.ui_state.error_timestamp {
            if timestamp.elapsed() > ERROR_DISPLAY_DURATION {
                self.clear_error();
            }
        }
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn toggle_help_popup(&mut self) {
        self.ui_state.show_help_popup = !self.ui_state.show_help_popup;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::track::sample_track;
    use pretty_assertions::assert_eq;

    fn tracks(names: &[&str]) -> Vec<Track> {
        names.iter().map(|n| sample_track(n, 180_000)).collect()
    }

    fn names(model: &AppModel) -> Vec<&str> {
        model.tracks().iter().map(|t| t.track_name.as_str()).collect()
    }

    #[test]
    fn starts_loading_with_no_tracks() {
        let model = AppModel::new("q".to_string());
        assert_eq!(model.phase(), LoadPhase::Loading);
        assert!(model.tracks().is_empty());
        assert_eq!(model.in_flight(), None);
    }

    #[test]
    fn initial_load_success_goes_to_loaded() {
        let mut model = AppModel::new("q".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);
        assert!(model.is_loading());

        assert!(model.complete_fetch(ticket, tracks(&["Baby", "Sorry"])));
        assert_eq!(model.phase(), LoadPhase::Loaded);
        assert_eq!(names(&model), vec!["Baby", "Sorry"]);
        assert_eq!(model.in_flight(), None);
    }

    #[test]
    fn failed_load_lands_in_loaded_with_empty_list() {
        let mut model = AppModel::new("q".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);

        assert!(model.complete_fetch(ticket, Vec::new()));
        assert_eq!(model.phase(), LoadPhase::Loaded);
        assert!(!model.is_loading());
        assert!(model.tracks().is_empty());
    }

    #[test]
    fn refresh_replaces_list_wholesale() {
        let mut model = AppModel::new("q".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);
        model.complete_fetch(ticket, tracks(&["A", "B", "C"]));

        let refresh = model.begin_fetch(FetchKind::Refresh);
        assert_eq!(model.phase(), LoadPhase::Refreshing);
        assert_eq!(names(&model), vec!["A", "B", "C"]);

        assert!(model.complete_fetch(refresh, tracks(&["D"])));
        assert_eq!(model.phase(), LoadPhase::Loaded);
        assert_eq!(names(&model), vec!["D"]);
    }

    #[test]
    fn failed_refresh_empties_the_list() {
        let mut model = AppModel::new("q".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);
        model.complete_fetch(ticket, tracks(&["A", "B"]));

        let refresh = model.begin_fetch(FetchKind::Refresh);
        model.complete_fetch(refresh, Vec::new());
        assert_eq!(model.phase(), LoadPhase::Loaded);
        assert!(model.tracks().is_empty());
    }

    #[test]
    fn refresh_during_initial_load_stays_loading() {
        let mut model = AppModel::new("q".to_string());
        model.begin_fetch(FetchKind::Initial);
        let refresh = model.begin_fetch(FetchKind::Refresh);

        assert_eq!(model.phase(), LoadPhase::Loading);
        assert_eq!(model.in_flight(), Some(refresh));
    }

    #[test]
    fn racing_fetches_settle_loaded_when_stale_finishes_last() {
        let mut model = AppModel::new("q".to_string());
        let initial = model.begin_fetch(FetchKind::Initial);
        let refresh = model.begin_fetch(FetchKind::Refresh);

        assert!(model.complete_fetch(refresh, tracks(&["fresh"])));
        assert!(!model.complete_fetch(initial, tracks(&["stale"])));

        assert_eq!(model.phase(), LoadPhase::Loaded);
        assert_eq!(names(&model), vec!["fresh"]);
    }

    #[test]
    fn racing_fetches_settle_loaded_when_stale_finishes_first() {
        let mut model = AppModel::new("q".to_string());
        let initial = model.begin_fetch(FetchKind::Initial);
        let refresh = model.begin_fetch(FetchKind::Refresh);

        assert!(!model.complete_fetch(initial, tracks(&["stale"])));
        assert_eq!(model.phase(), LoadPhase::Loading);

        assert!(model.complete_fetch(refresh, tracks(&["fresh"])));
        assert_eq!(model.phase(), LoadPhase::Loaded);
        assert_eq!(names(&model), vec!["fresh"]);
    }

    #[test]
    fn completion_is_applied_once() {
        let mut model = AppModel::new("q".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);
        assert!(model.complete_fetch(ticket, tracks(&["A"])));
        assert!(!model.complete_fetch(ticket, tracks(&["B"])));
        assert_eq!(names(&model), vec!["A"]);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut model = AppModel::new("q".to_string());
        let a = model.begin_fetch(FetchKind::Initial);
        let b = model.begin_fetch(FetchKind::Refresh);
        let c = model.begin_fetch(FetchKind::Refresh);
        assert!(a.seq < b.seq && b.seq < c.seq);
    }

    #[test]
    fn selection_is_clamped_to_list_bounds() {
        let mut model = AppModel::new("q".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);
        model.complete_fetch(ticket, tracks(&["A", "B", "C"]));

        model.move_selection_up();
        assert_eq!(model.selected_index(), 0);
        model.select_last();
        model.move_selection_down();
        assert_eq!(model.selected_index(), 2);

        let refresh = model.begin_fetch(FetchKind::Refresh);
        model.complete_fetch(refresh, tracks(&["D"]));
        assert_eq!(model.selected_index(), 0);
    }

    #[test]
    fn detail_screen_follows_selected_track() {
        let mut model = AppModel::new("q".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);
        model.complete_fetch(ticket, tracks(&["A", "B"]));

        model.move_selection_down();
        assert!(model.open_selected());
        assert_eq!(model.detail_track().map(|t| t.track_name.as_str()), Some("B"));

        assert!(model.navigate_back());
        assert_eq!(model.screen(), Screen::TrackList);
        assert!(!model.navigate_back());
    }

    #[test]
    fn open_selected_on_empty_list_does_nothing() {
        let mut model = AppModel::new("q".to_string());
        assert!(!model.open_selected());
        assert_eq!(model.screen(), Screen::TrackList);
    }

    #[test]
    fn refresh_closes_detail_of_vanished_track() {
        let mut model = AppModel::new("q".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);
        model.complete_fetch(ticket, tracks(&["A"]));
        model.open_selected();

        let refresh = model.begin_fetch(FetchKind::Refresh);
        model.complete_fetch(refresh, tracks(&["A"]));
        assert_eq!(model.screen(), Screen::TrackList);
        assert!(model.detail_track().is_none());
    }

    #[test]
    fn errors_can_be_cleared() {
        let mut model = AppModel::new("q".to_string());
        model.set_error("boom".to_string());
        assert!(model.has_error());

        model.auto_clear_old_errors();
        assert!(model.has_error());

        model.clear_error();
        assert!(!model.has_error());
    }
}
