//! Main application state and UI loop
//!
//! Contains the App struct (the form controller) and the event loop driving it

use crate::consts::form_consts::input::poll_interval;
use crate::credentials::CredentialVerifier;
use crate::events::{FormEvent, map_key, map_mouse};
use crate::ui::login::{Focus, FormLayout, FormState, HitTarget, Presence, render_login};
use crate::validation::{self, LoginOutcome};
use crossterm::event::{self, Event};
use log::{debug, info, trace};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::Backend};

/// UI configuration data grouped by concern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub mask_char: char,
}

impl UIConfig {
    pub fn new(with_background_color: bool, mask_char: char) -> Self {
        Self {
            with_background_color,
            mask_char,
        }
    }
}

/// Application state
pub struct App {
    /// Live contents of the identifier and secret fields.
    form: FormState,

    /// Control receiving keystrokes.
    focus: Focus,

    /// Presence indicator, refreshed whenever the identifier changes.
    presence: Presence,

    /// Outcome of the most recent submit. `None` until the first one.
    feedback: Option<LoginOutcome>,

    /// Decides whether a submitted pair is accepted.
    verifier: Box<dyn CredentialVerifier>,

    ui_config: UIConfig,

    /// Cleared when the user asks to quit.
    running: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(verifier: Box<dyn CredentialVerifier>, ui_config: UIConfig) -> Self {
        let form = FormState::default();
        let presence = Presence::of(&form.identifier);
        Self {
            form,
            focus: Focus::default(),
            presence,
            feedback: None,
            verifier,
            ui_config,
            running: true,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn feedback(&self) -> Option<LoginOutcome> {
        self.feedback
    }

    pub fn ui_config(&self) -> &UIConfig {
        &self.ui_config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one form event. `area` is the frame area of the last draw, used to
    /// resolve mouse clicks.
    pub fn dispatch(&mut self, event: FormEvent, area: Rect) {
        // Display names the variant only, so typed characters never reach the log.
        trace!("Form event {} with focus on {}", event, self.focus);
        match event {
            FormEvent::Quit => {
                info!("Quit requested");
                self.running = false;
            }
            FormEvent::Input(c) => match self.focus {
                Focus::Identifier => {
                    self.form.identifier.push(c);
                    self.on_identifier_changed();
                }
                Focus::Secret => self.form.secret.push(c),
                Focus::Submit if c == ' ' => self.submit(),
                Focus::Submit => {}
            },
            FormEvent::Backspace => match self.focus {
                Focus::Identifier => {
                    self.form.identifier.pop();
                    self.on_identifier_changed();
                }
                Focus::Secret => {
                    self.form.secret.pop();
                }
                Focus::Submit => {}
            },
            FormEvent::FocusNext => self.set_focus(self.focus.next()),
            FormEvent::FocusPrevious => self.set_focus(self.focus.previous()),
            FormEvent::Activate => match self.focus {
                Focus::Identifier => self.set_focus(Focus::Secret),
                Focus::Secret | Focus::Submit => self.submit(),
            },
            FormEvent::Click(position) => {
                let Some(layout) = FormLayout::compute(area) else {
                    return;
                };
                match layout.hit(position) {
                    Some(HitTarget::Button) => self.submit(),
                    Some(HitTarget::IdField) => self.set_focus(Focus::Identifier),
                    Some(HitTarget::PasswordField) => self.set_focus(Focus::Secret),
                    None => {}
                }
            }
        }
    }

    /// Validates the current fields and replaces the feedback message.
    pub fn submit(&mut self) {
        let outcome = validation::evaluate(
            self.verifier.as_ref(),
            &self.form.identifier,
            &self.form.secret,
        );
        debug!("Submit evaluated to {}", outcome);
        self.feedback = Some(outcome);
    }

    fn on_identifier_changed(&mut self) {
        let presence = Presence::of(&self.form.identifier);
        if presence != self.presence {
            debug!("Presence indicator now {}", presence);
        }
        self.presence = presence;
    }

    fn set_focus(&mut self, focus: Focus) {
        debug!("Focus moved to {}", focus);
        self.focus = focus;
    }
}

/// Runs the application UI in a loop, handling events and rendering the form.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let mut area = Rect::default();

    // UI event loop
    while app.is_running() {
        terminal.draw(|f| {
            area = f.area();
            render_login(f, &app);
        })?;

        // Poll for input events
        if event::poll(poll_interval())? {
            let form_event = match event::read()? {
                Event::Key(key) => map_key(key),
                Event::Mouse(mouse) => map_mouse(mouse),
                _ => None,
            };
            if let Some(form_event) = form_event {
                app.dispatch(form_event, area);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{MockCredentialVerifier, StaticCredentialVerifier};
    use ratatui::layout::Position;

    fn area() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    fn app() -> App {
        App::new(
            Box::new(StaticCredentialVerifier::default()),
            UIConfig::new(false, '*'),
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(FormEvent::Input(c), area());
        }
    }

    /// Fills both fields, leaving focus on the secret field.
    fn fill(app: &mut App, id: &str, secret: &str) {
        type_text(app, id);
        app.dispatch(FormEvent::FocusNext, area());
        type_text(app, secret);
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.form(), &FormState::default());
        assert_eq!(app.focus(), Focus::Identifier);
        assert_eq!(app.presence(), Presence::Empty);
        assert_eq!(app.feedback(), None);
        assert!(app.is_running());
    }

    #[test]
    fn test_typing_routes_to_focused_field() {
        let mut app = app();
        fill(&mut app, "teacher123", "password123");
        assert_eq!(app.form().identifier, "teacher123");
        assert_eq!(app.form().secret, "password123");

        app.dispatch(FormEvent::Backspace, area());
        assert_eq!(app.form().secret, "password12");
        assert_eq!(app.form().identifier, "teacher123");
    }

    #[test]
    fn test_presence_tracks_identifier_keystrokes() {
        let mut app = app();
        type_text(&mut app, " ");
        assert_eq!(app.presence(), Presence::Empty);
        type_text(&mut app, "a");
        assert_eq!(app.presence(), Presence::Filled);

        app.dispatch(FormEvent::Backspace, area());
        assert_eq!(app.presence(), Presence::Empty);
        app.dispatch(FormEvent::Backspace, area());
        assert_eq!(app.presence(), Presence::Empty);
    }

    #[test]
    // The indicator only reflects the identifier, never the secret or the outcome.
    fn test_presence_independent_of_secret_and_outcome() {
        let mut app = app();
        app.dispatch(FormEvent::FocusNext, area());
        type_text(&mut app, "password123");
        assert_eq!(app.presence(), Presence::Empty);

        app.dispatch(FormEvent::FocusPrevious, area());
        type_text(&mut app, "wrong");
        app.submit();
        assert_eq!(app.feedback(), Some(LoginOutcome::Rejected));
        assert_eq!(app.presence(), Presence::Filled);
    }

    #[test]
    fn test_submit_outcomes() {
        let mut app = app();
        app.submit();
        assert_eq!(app.feedback(), Some(LoginOutcome::NeedsInput));

        fill(&mut app, "  teacher123  ", "password123");
        app.submit();
        assert_eq!(app.feedback(), Some(LoginOutcome::Accepted));

        type_text(&mut app, "x");
        app.submit();
        assert_eq!(app.feedback(), Some(LoginOutcome::Rejected));
    }

    #[test]
    fn test_submit_is_idempotent_and_overwrites() {
        let mut app = app();
        fill(&mut app, "teacher123", "nope");
        app.submit();
        let first = app.feedback();
        app.submit();
        assert_eq!(app.feedback(), first);
        assert_eq!(app.form().secret, "nope");

        for _ in 0..4 {
            app.dispatch(FormEvent::Backspace, area());
        }
        app.submit();
        assert_eq!(app.feedback(), Some(LoginOutcome::NeedsInput));
    }

    #[test]
    // Enter in the secret field and the button give the same result.
    fn test_enter_in_secret_matches_button() {
        let layout = FormLayout::compute(area()).unwrap();
        let button = Position::new(layout.button.x + 1, layout.button.y + 1);

        for (id, secret) in [("teacher123", "password123"), ("teacher123", "x"), ("", "x")] {
            let mut by_enter = app();
            fill(&mut by_enter, id, secret);
            by_enter.dispatch(FormEvent::Activate, area());

            let mut by_click = app();
            fill(&mut by_click, id, secret);
            by_click.dispatch(FormEvent::Click(button), area());

            let mut by_button_key = app();
            fill(&mut by_button_key, id, secret);
            by_button_key.dispatch(FormEvent::FocusNext, area());
            by_button_key.dispatch(FormEvent::Activate, area());

            assert!(by_enter.feedback().is_some());
            assert_eq!(by_enter.feedback(), by_click.feedback());
            assert_eq!(by_enter.feedback(), by_button_key.feedback());
        }
    }

    #[test]
    fn test_enter_in_identifier_advances_focus() {
        let mut app = app();
        type_text(&mut app, "teacher123");
        app.dispatch(FormEvent::Activate, area());
        assert_eq!(app.focus(), Focus::Secret);
        assert_eq!(app.feedback(), None);
    }

    #[test]
    fn test_space_on_button_submits_without_editing() {
        let mut app = app();
        fill(&mut app, "teacher123", "password123");
        app.dispatch(FormEvent::FocusNext, area());
        assert_eq!(app.focus(), Focus::Submit);

        app.dispatch(FormEvent::Input('x'), area());
        assert_eq!(app.feedback(), None);
        app.dispatch(FormEvent::Input(' '), area());
        assert_eq!(app.feedback(), Some(LoginOutcome::Accepted));
        assert_eq!(app.form().secret, "password123");
    }

    #[test]
    fn test_click_focuses_fields() {
        let layout = FormLayout::compute(area()).unwrap();
        let mut app = app();

        let password = Position::new(layout.password_field.x + 2, layout.password_field.y + 1);
        app.dispatch(FormEvent::Click(password), area());
        assert_eq!(app.focus(), Focus::Secret);

        let id = Position::new(layout.id_field.x + 2, layout.id_field.y + 1);
        app.dispatch(FormEvent::Click(id), area());
        assert_eq!(app.focus(), Focus::Identifier);

        app.dispatch(FormEvent::Click(Position::new(0, 0)), area());
        assert_eq!(app.focus(), Focus::Identifier);
        assert_eq!(app.feedback(), None);
    }

    #[test]
    fn test_click_ignored_when_form_not_shown() {
        let mut app = app();
        app.dispatch(FormEvent::Click(Position::new(1, 1)), Rect::new(0, 0, 10, 5));
        assert_eq!(app.feedback(), None);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = app();
        app.dispatch(FormEvent::Quit, area());
        assert!(!app.is_running());
    }

    #[test]
    fn test_uses_injected_verifier() {
        let mut mock = MockCredentialVerifier::new();
        mock.expect_verify().times(1).return_const(true);
        let mut app = App::new(Box::new(mock), UIConfig::new(false, '*'));

        fill(&mut app, "anyone", "anything");
        app.dispatch(FormEvent::Activate, area());
        assert_eq!(app.feedback(), Some(LoginOutcome::Accepted));
    }
}
