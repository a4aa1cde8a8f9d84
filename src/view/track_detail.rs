//! Static detail screen for one track

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{format_millis, Track, TransportControls};
use super::utils::border_style;

pub fn render_track_detail(
    frame: &mut Frame,
    area: Rect,
    track: &Track,
    transport: &impl TransportControls,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Artwork
            Constraint::Min(0),    // Title / artist / album
            Constraint::Length(3), // Transport bar
        ])
        .split(area);

    render_artwork(frame, chunks[0], track);
    render_info(frame, chunks[1], track);
    render_transport_bar(frame, chunks[2], track, transport);
}

fn render_artwork(frame: &mut Frame, area: Rect, track: &Track) {
    let (line, style) = match track.artwork() {
        Some(url) => (
            format!("♪  {}", url.host_str().unwrap_or("artwork")),
            Style::default().fg(Color::Cyan),
        ),
        None => (
            "Artwork unavailable".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let artwork = Paragraph::new(line)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Artwork ")
                .padding(Padding::vertical(1)),
        );
    frame.render_widget(artwork, area);
}

fn render_info(frame: &mut Frame, area: Rect, track: &Track) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            track.track_name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Artist   ", label),
            Span::raw(track.artist_name.clone().unwrap_or_else(|| "Unknown artist".to_string())),
        ]),
    ];

    if let Some(album) = &track.collection_name {
        lines.push(Line::from(vec![Span::styled("Album    ", label), Span::raw(album.clone())]));
    }

    lines.push(Line::from(vec![
        Span::styled("Duration ", label),
        Span::raw(track.duration_label()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Esc to go back", label)));

    let info = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Track ")
                .padding(Padding::horizontal(1))
                .border_style(border_style(true)),
        );
    frame.render_widget(info, area);
}

/// Progress stays at zero: nothing is ever played.
fn render_transport_bar(
    frame: &mut Frame,
    area: Rect,
    track: &Track,
    transport: &impl TransportControls,
) {
    let play_pause = if transport.is_playing() { "⏸" } else { "▶" };
    let controls = format!(" ⏮  {}  ⏭ ", play_pause);
    let time_str = format!("{} / {}", format_millis(0), track.duration_label());

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(controls)
                .title_bottom(Line::from(" Space play/pause · ←/→ skip ").right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(0.0)
        .label(time_str);

    frame.render_widget(gauge, area);
}
