//! Track list rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::{AppModel, Track};
use super::utils::{border_style, calculate_track_column_widths, truncate_string};

const ARTWORK_OK: &str = "▣";
const ARTWORK_MISSING: &str = "□";

pub fn render_track_list(frame: &mut Frame, area: Rect, model: &AppModel) {
    let title = format!(" Tracks ({}) ", model.tracks().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style(true));

    if model.is_loading() {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if model.tracks().is_empty() {
        let empty = Paragraph::new("No tracks found.\n\nPress R to refresh")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let content_width = area.width.saturating_sub(4) as usize;
    let items = track_items(model.tracks(), model.selected_index(), content_width);

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(model.selected_index() + 1)); // +1 for header

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn track_items(tracks: &[Track], selected_index: usize, content_width: usize) -> Vec<ListItem<'static>> {
    let (num_width, _, title_width, artist_width, _) =
        calculate_track_column_widths(content_width, tracks.len());

    let mut items = vec![
        ListItem::new(format!(
            " {:<num_width$}   {}   {:<title_width$}   {:<artist_width$}   {}",
            "#", " ", "Title", "Artist", "Duration",
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ];

    items.extend(tracks.iter().enumerate().map(|(i, track)| {
        let style = if i == selected_index {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let marker = if i == selected_index { ">" } else { " " };
        let art = if track.artwork().is_some() { ARTWORK_OK } else { ARTWORK_MISSING };
        let title = truncate_string(&track.track_name, title_width);
        let artist = truncate_string(track.artist_name.as_deref().unwrap_or("Unknown artist"), artist_width);

        ListItem::new(format!(
            "{}{:<num_width$}   {}   {}   {}   {}",
            marker,
            i + 1,
            art,
            title,
            artist,
            track.duration_label(),
        ))
        .style(style)
    }));

    items
}
