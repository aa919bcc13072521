//! Application state for the TUI.
//!
//! The app owns a [`Session`] value and replaces it wholesale through
//! [`Navigator::transition`]; key handling only ever produces session
//! events plus a little cursor state for the option list.

use super::theme::ColorScheme;
use crate::model::Question;
use crate::scoring::AssessmentOutcome;
use crate::session::{Navigator, Session, SessionEvent};
use crossterm::event::{KeyCode, KeyEvent};

/// Interactive assessment application
pub struct App {
    navigator: Navigator,
    session: Session,
    /// Cursor position in the option list of the current question
    pub selected_option: usize,
    /// Active color scheme
    pub theme: ColorScheme,
    /// Set when the user asks to leave
    pub should_quit: bool,
}

impl App {
    /// Create an app at the intro screen.
    #[must_use]
    pub fn new(navigator: Navigator, theme: ColorScheme) -> Self {
        Self {
            navigator,
            session: Session::new(),
            selected_option: 0,
            theme,
            should_quit: false,
        }
    }

    /// Current session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The navigator driving this app.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Outcome once the assessment has completed.
    #[must_use]
    pub fn outcome(&self) -> Option<&AssessmentOutcome> {
        self.session.outcome()
    }

    /// The question currently on screen with its position, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<(usize, &Question)> {
        match &self.session {
            Session::InProgress { current, .. } => self
                .navigator
                .scorer()
                .catalog()
                .at(*current)
                .map(|q| (*current, q)),
            _ => None,
        }
    }

    /// (answered, total) question counts for the progress gauge.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let answered = self.session.responses().map_or(0, |r| r.len());
        (answered, self.navigator.total_questions())
    }

    /// Feed a session event and resync the option cursor.
    fn apply(&mut self, event: SessionEvent) {
        let state = std::mem::take(&mut self.session);
        self.session = self.navigator.transition(state, event);
        self.sync_cursor();
    }

    /// Point the cursor at the recorded answer for the question now on
    /// screen, or the first option.
    fn sync_cursor(&mut self) {
        self.selected_option = match (&self.session, self.current_question()) {
            (Session::InProgress { responses, .. }, Some((_, question))) => {
                responses.get(question.id).unwrap_or(0)
            }
            _ => 0,
        };
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match &self.session {
            Session::Intro => self.handle_intro_key(key),
            Session::InProgress { .. } => self.handle_question_key(key),
            Session::Completed { .. } => self.handle_results_key(key),
        }
    }

    fn handle_intro_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => self.apply(SessionEvent::Start),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_question_key(&mut self, key: KeyEvent) {
        let option_count = self
            .current_question()
            .map_or(0, |(_, q)| q.options.len());

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_option > 0 {
                    self.selected_option -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if option_count > 0 && self.selected_option + 1 < option_count {
                    self.selected_option += 1;
                }
            }
            KeyCode::Enter => {
                self.apply(SessionEvent::Answer(self.selected_option));
                self.apply(SessionEvent::Next);
            }
            KeyCode::Left | KeyCode::Char('h') => self.apply(SessionEvent::Previous),
            KeyCode::Right | KeyCode::Char('l') => self.apply(SessionEvent::Next),
            KeyCode::Char('r') => self.apply(SessionEvent::Restart),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.apply(SessionEvent::Restart),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.should_quit = true,
            _ => {}
        }
    }
}
