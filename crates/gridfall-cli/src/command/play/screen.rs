use std::time::Instant;

use crossterm::event::{Event, KeyCode};
use gridfall_engine::{GameSession, PieceSeed, SessionState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::ui::widgets::SessionDisplay;

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    show_ghost: bool,
    last_tick: Instant,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(seed: Option<PieceSeed>, show_ghost: bool) -> Self {
        let session = match seed {
            Some(seed) => GameSession::with_seed(seed),
            None => GameSession::new(),
        };
        Self {
            session,
            show_ghost,
            last_tick: Instant::now(),
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let session_display = SessionDisplay::new(&self.session, self.show_ghost);
        let help_text = match self.session.session_state() {
            SessionState::Running => {
                "Controls: ← → (Move) | ↓ (Soft Drop) | Space (Hard Drop) | ↑ X Z (Rotate) | P (Pause) | R (Reset) | Q (Quit)"
            }
            SessionState::Paused => "Controls: P (Resume) | R (Reset) | Q (Quit)",
            SessionState::GameOver => "Controls: R (Restart) | Q (Exit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(23), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        let state = self.session.session_state();
        let is_running = state.is_running();
        let is_game_over = state.is_game_over();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_running => _ = self.session.try_move_left(),
                KeyCode::Right if is_running => _ = self.session.try_move_right(),
                KeyCode::Down if is_running => self.session.soft_drop(),
                KeyCode::Char(' ') if is_running => self.session.hard_drop(),
                KeyCode::Up | KeyCode::Char('x') if is_running => {
                    _ = self.session.try_rotate_cw();
                }
                KeyCode::Char('z') if is_running => _ = self.session.try_rotate_ccw(),
                KeyCode::Char('p') => self.session.toggle_pause(),
                KeyCode::Char('r') => self.session.reset(),
                KeyCode::Char('q') | KeyCode::Esc if is_game_over => self.is_exiting = true,
                KeyCode::Char('q') | KeyCode::Esc => self.session.quit(),
                _ => {}
            }
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.session.update(delta);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn seeded_screen() -> PlayScreen {
        let seed = "00000000000000000000000000000007".parse().unwrap();
        PlayScreen::new(Some(seed), true)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_pause_key_toggles() {
        let mut screen = seeded_screen();
        screen.handle_event(&key(KeyCode::Char('p')));
        assert!(screen.session.session_state().is_paused());
        screen.handle_event(&key(KeyCode::Char('p')));
        assert!(screen.session.session_state().is_running());
    }

    #[test]
    fn test_movement_keys_ignored_while_paused() {
        let mut screen = seeded_screen();
        screen.handle_event(&key(KeyCode::Char('p')));
        let piece = screen.session.active_piece().clone();

        screen.handle_event(&key(KeyCode::Left));
        screen.handle_event(&key(KeyCode::Down));
        screen.handle_event(&key(KeyCode::Char(' ')));
        assert_eq!(*screen.session.active_piece(), piece);
    }

    #[test]
    fn test_quit_key_ends_session_then_exits() {
        let mut screen = seeded_screen();
        screen.handle_event(&key(KeyCode::Char('q')));
        assert!(screen.session.session_state().is_game_over());
        assert!(!screen.is_exiting());

        screen.handle_event(&key(KeyCode::Esc));
        assert!(screen.is_exiting());
    }

    #[test]
    fn test_reset_key_restarts_after_game_over() {
        let mut screen = seeded_screen();
        screen.handle_event(&key(KeyCode::Char('q')));
        screen.handle_event(&key(KeyCode::Char('r')));
        assert!(screen.session.session_state().is_running());
        assert_eq!(screen.session.stats().score(), 0);
    }
}
