use crate::form::FormState;
use crate::result::LoginResult;
use crate::sync::login;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared, observable `FormState`.
///
/// The presentation layer reads snapshots and subscribes to changes; the
/// sign-in task writes results back from wherever it happens to run.
/// Subscribers are only notified when a mutation actually changes something.
#[derive(Debug, Clone)]
pub struct FormStore {
    /// The current state, plus the list of subscribers
    state: Arc<watch::Sender<FormState>>,
}

impl FormStore {
    /// A store holding a blank form.
    pub fn new() -> Self {
        Self::with_state(FormState::new())
    }

    /// A store holding the given state.
    pub fn with_state(state: FormState) -> Self {
        let (tx, _) = watch::channel(state);

        Self {
            state: Arc::new(tx),
        }
    }

    /// Get notified every time the state changes.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Replace the email field (ignored unless the form is editable.)
    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.state.send_if_modified(|state| state.set_email(email));
    }

    /// Replace the password field (ignored unless the form is editable.)
    pub fn set_password(&self, password: impl Into<String>) {
        let password = password.into();
        self.state
            .send_if_modified(|state| state.set_password(password));
    }

    /// See `FormState::begin_submit`.
    pub fn begin_submit(&self) -> Option<login::Req> {
        let mut payload = None;

        self.state.send_if_modified(|state| {
            payload = state.begin_submit();
            payload.is_some()
        });

        payload
    }

    /// See `FormState::finish`.
    pub fn finish(&self, result: &LoginResult) {
        self.state.send_modify(|state| state.finish(result));
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
