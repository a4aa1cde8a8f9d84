//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Screen, TransportControls};
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.model.set_should_quit(true);
            return;
        }

        // Error notice blocks everything else until dismissed or retried
        if self.model.has_error() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.model.clear_error(),
                KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => {
                    self.model.clear_error();
                    self.refresh();
                }
                _ => {}
            }
            return;
        }

        if self.model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h')) {
                self.model.hide_help_popup();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true);
                return;
            }
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.model.toggle_help_popup();
                return;
            }
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => {
                self.refresh();
                return;
            }
            _ => {}
        }

        match self.model.screen() {
            Screen::TrackList => self.handle_list_key(key.code),
            Screen::TrackDetail(_) => self.handle_detail_key(key.code),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.model.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.model.move_selection_down(),
            KeyCode::Home | KeyCode::Char('g') => self.model.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.model.select_last(),
            KeyCode::Enter => {
                if self.model.open_selected() {
                    tracing::debug!(index = self.model.selected_index(), "Opened track detail");
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Backspace => {
                self.model.navigate_back();
            }
            KeyCode::Char(' ') | KeyCode::Char('p') => self.transport.toggle_play_pause(),
            KeyCode::Left | KeyCode::Char(',') => self.transport.previous(),
            KeyCode::Right | KeyCode::Char('.') => self.transport.next(),
            _ => {}
        }
    }
}
