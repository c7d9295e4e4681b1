/// Things that can happen to this app
mod action;
pub use action::Action;

/// The widgets for entering credentials
mod auth_form;
use auth_form::{AuthForm, Field};

/// Side effects and the context they run in
mod effect;
pub use effect::{Effect, EffectContext};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use layout::Flex;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use signin_core::{FormStore, LoginResult, Phase};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

/// The "functional core" of the app.
pub struct App {
    /// The form state. Only ever written from the UI task.
    form: FormStore,

    /// Text inputs and focus
    auth_form: AuthForm,

    /// Tripped when the screen goes away, so a late response doesn't touch
    /// the form
    cancel: CancellationToken,

    /// Status to display (visible at the bottom of the screen)
    status_line: Option<String>,

    /// Set when we're done and want the given exit code
    exiting: Option<ExitCode>,
}

impl App {
    /// Create a new instance of the app
    pub fn new() -> Self {
        Self {
            form: FormStore::new(),
            auth_form: AuthForm::default(),
            cancel: CancellationToken::new(),
            status_line: None,
            exiting: None,
        }
    }

    /// The store backing the form, so the shell can subscribe to changes
    pub fn form(&self) -> &FormStore {
        &self.form
    }

    /// Render the app's UI to the screen
    pub fn render(&self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [body_area, status_area] = vertical.areas(frame.area());

        let state = self.form.snapshot();

        match state.phase() {
            Phase::Idle | Phase::Loading => self.auth_form.render(&state, body_area, frame),
            Phase::SignedIn => {
                let popup_vert = Layout::vertical([Constraint::Length(4)]).flex(Flex::Center);
                let popup_horiz =
                    Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

                let [popup_area] = popup_vert.areas(body_area);
                let [popup_area] = popup_horiz.areas(popup_area);

                let success = Paragraph::new(vec![
                    Line::from(format!("Signed in as {}", state.email())),
                    Line::from("Press esc to quit").fg(Color::DarkGray),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Welcome")
                        .border_style(Style::new().fg(Color::Green)),
                );

                frame.render_widget(success, popup_area);
            }
        }

        let status = Paragraph::new(match &self.status_line {
            Some(line) => line.as_str(),
            None if state.is_loading() => "Signing in…",
            None => "tab: next field · enter: sign in · esc: quit",
        });

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => self.handle_key(key),
            Action::FormChanged => vec![],
            Action::SignInFinished(result) => {
                if self.cancel.is_cancelled() {
                    tracing::debug!("sign-in screen is gone, dropping result");
                    return vec![];
                }

                self.form.finish(&result);
                self.status_line = match result {
                    LoginResult::Success => Some("Signed in".to_owned()),
                    _ => None,
                };

                vec![]
            }
            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }
        }
    }

    /// Keyboard input: quit, submit, or edit the form.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        let quit = key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));

        if quit {
            self.cancel.cancel();
            self.exiting = Some(ExitCode::SUCCESS);

            return vec![];
        }

        let state = self.form.snapshot();

        if key.code == KeyCode::Enter {
            // Same rules as a disabled submit button: nothing happens while
            // loading, after sign-in, or with an invalid form.
            if !state.can_submit() {
                return vec![];
            }

            return match self.form.begin_submit() {
                Some(req) => {
                    self.status_line = None;

                    vec![Effect::SignIn(req)]
                }
                None => vec![],
            };
        }

        if !state.is_editable() {
            return vec![];
        }

        if self.auth_form.handle_event(key) {
            match self.auth_form.active() {
                Field::Email => self.form.set_email(self.auth_form.email()),
                Field::Password => self.form.set_password(self.auth_form.password()),
                Field::Submit => {}
            }
        }

        vec![]
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        self.exiting
    }
}
