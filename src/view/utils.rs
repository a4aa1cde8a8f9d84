//! Utility functions for rendering UI components

use ratatui::style::{Color, Style};

pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Column widths for the track list.
/// Returns (num_width, art_width, title_width, artist_width, duration_width)
pub fn calculate_track_column_widths(content_width: usize, item_count: usize) -> (usize, usize, usize, usize, usize) {
    // Format: " {num}   {art}   {title}   {artist}   {duration}"
    let num_width = calculate_num_width(item_count);
    let art_width = 1;
    let duration_width = 8;
    let fixed_width = 1 + num_width + 3 + art_width + 3 + 3 + 3 + duration_width;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let title_width = (remaining_width * 55) / 100;
    let artist_width = remaining_width.saturating_sub(title_width);

    (num_width, art_width, title_width, artist_width, duration_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_ellipsis_and_pads() {
        assert_eq!(truncate_string("Never Say Never", 8), "Never...");
        assert_eq!(truncate_string("Baby", 6), "Baby  ");
    }

    #[test]
    fn num_width_grows_with_digits() {
        assert_eq!(calculate_num_width(0), 2);
        assert_eq!(calculate_num_width(9), 2);
        assert_eq!(calculate_num_width(50), 3);
        assert_eq!(calculate_num_width(200), 4);
    }

    #[test]
    fn narrow_areas_do_not_underflow() {
        let (_, _, title, artist, _) = calculate_track_column_widths(5, 50);
        assert_eq!((title, artist), (0, 0));
    }
}
