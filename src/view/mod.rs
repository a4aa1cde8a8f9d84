//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (column widths, truncation)
//! - `track_list`: Loading state and the list of tracks
//! - `track_detail`: Static detail screen with inert transport controls
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod track_list;
mod track_detail;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{AppModel, LoadPhase, Screen, TransportControls};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel, transport: &impl TransportControls) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Query + load status
                Constraint::Min(0),    // List or detail
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        render_top_bar(frame, chunks[0], model);

        match (model.screen(), model.detail_track()) {
            (Screen::TrackDetail(_), Some(track)) => {
                track_detail::render_track_detail(frame, chunks[1], track, transport);
            }
            _ => track_list::render_track_list(frame, chunks[1], model),
        }

        render_hints(frame, chunks[2], model.screen());

        if model.ui_state().error_message.is_some() {
            overlays::render_error_notification(frame, model.ui_state());
        }

        if model.ui_state().show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

fn render_top_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Query
            Constraint::Length(18), // Status
        ])
        .split(area);

    let search = Paragraph::new(model.ui_state().query.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search, chunks[0]);

    let (status, color) = match model.phase() {
        LoadPhase::Loading => ("Loading...".to_string(), Color::Yellow),
        LoadPhase::Refreshing => ("Refreshing...".to_string(), Color::Yellow),
        LoadPhase::Loaded => (format!("{} tracks", model.tracks().len()), Color::Cyan),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, chunks[1]);
}

fn render_hints(frame: &mut Frame, area: Rect, screen: Screen) {
    let hints = match screen {
        Screen::TrackList => " ↑/↓ select · Enter open · R refresh · ? help · Q quit",
        Screen::TrackDetail(_) => " Esc back · Space play/pause · ←/→ skip · Q quit",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_track, FetchKind, InertTransport, Track};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(model: &AppModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| AppView::render(f, model, &InertTransport))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn loaded(tracks: Vec<Track>) -> AppModel {
        let mut model = AppModel::new("Justin beiber".to_string());
        let ticket = model.begin_fetch(FetchKind::Initial);
        model.complete_fetch(ticket, tracks);
        model
    }

    #[test]
    fn loading_screen_shows_indicator() {
        let mut model = AppModel::new("Justin beiber".to_string());
        model.begin_fetch(FetchKind::Initial);
        let screen = draw(&model);
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("Justin beiber"));
    }

    #[test]
    fn list_shows_title_artist_and_duration() {
        let model = loaded(vec![sample_track("Baby", 214_240), sample_track("Sorry", 200_786)]);
        let screen = draw(&model);
        assert!(screen.contains("Baby"));
        assert!(screen.contains("Sorry"));
        assert!(screen.contains("Justin Bieber"));
        assert!(screen.contains("03:34"));
        assert!(screen.contains("2 tracks"));
    }

    #[test]
    fn empty_list_after_failure_is_not_loading() {
        let screen = draw(&loaded(Vec::new()));
        assert!(screen.contains("No tracks found."));
        assert!(!screen.contains("Loading..."));
    }

    #[test]
    fn broken_artwork_still_renders() {
        let mut track = sample_track("Baby", 214_240);
        track.artwork_url = "::::".to_string();
        let mut model = loaded(vec![track]);

        assert!(draw(&model).contains("□"));

        model.open_selected();
        let screen = draw(&model);
        assert!(screen.contains("Artwork unavailable"));
        assert!(screen.contains("Baby"));
    }

    #[test]
    fn detail_shows_album_duration_and_zero_progress() {
        let mut model = loaded(vec![sample_track("Boyfriend", 171_000)]);
        model.open_selected();

        let screen = draw(&model);
        assert!(screen.contains("Boyfriend"));
        assert!(screen.contains("Believe"));
        assert!(screen.contains("00:00 / 02:51"));
        assert!(screen.contains("Esc back"));
        assert!(!screen.contains("R refresh"));

        model.navigate_back();
        assert!(draw(&model).contains("R refresh"));
    }

    #[test]
    fn refreshing_keeps_previous_rows_visible() {
        let mut model = loaded(vec![sample_track("Baby", 214_240)]);
        model.begin_fetch(FetchKind::Refresh);

        let screen = draw(&model);
        assert!(screen.contains("Refreshing..."));
        assert!(screen.contains("Baby"));
    }

    #[test]
    fn help_and_error_overlays_render() {
        let mut model = loaded(Vec::new());
        model.set_error("Couldn't load tracks".to_string());
        assert!(draw(&model).contains("Couldn't load tracks"));

        model.clear_error();
        model.toggle_help_popup();
        assert!(draw(&model).contains("Toggle this help"));
    }
}
