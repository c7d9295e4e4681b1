use crate::result::LoginResult;
use crate::sync::login;
use crate::validate;

/// Everything the sign-in screen needs to render.
///
/// Fields are private so the invariants hold no matter who is holding the
/// state: `is_loading` and `is_signed_in` are never both set, and
/// `show_error` is only set alongside a non-empty `error_message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// What's in the email field
    email: String,

    /// What's in the password field
    password: String,

    /// Is a request in flight?
    is_loading: bool,

    /// Should the error region be visible?
    show_error: bool,

    /// What the error region says
    error_message: String,

    /// Did the last request succeed?
    is_signed_in: bool,
}

/// Where the screen is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input. There may be an error from the previous attempt.
    Idle,

    /// A request is in flight.
    Loading,

    /// We're in. Nothing else happens on this screen.
    SignedIn,
}

impl FormState {
    /// A blank form, as it looks when the screen first mounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current email field contents
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current password field contents
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Is a request in flight?
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Should the error region be visible?
    pub fn show_error(&self) -> bool {
        self.show_error
    }

    /// Text for the error region. Empty when there is no error.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Has sign-in succeeded?
    pub fn is_signed_in(&self) -> bool {
        self.is_signed_in
    }

    /// Where the screen is in its lifecycle
    pub fn phase(&self) -> Phase {
        if self.is_signed_in {
            Phase::SignedIn
        } else if self.is_loading {
            Phase::Loading
        } else {
            Phase::Idle
        }
    }

    /// Inputs are disabled while a request is in flight and after sign-in.
    pub fn is_editable(&self) -> bool {
        self.phase() == Phase::Idle
    }

    /// Does the form pass client-side validation?
    pub fn is_valid(&self) -> bool {
        validate::is_form_valid(&self.email, &self.password)
    }

    /// Should the submit button be enabled?
    pub fn can_submit(&self) -> bool {
        self.is_editable() && self.is_valid()
    }

    /// Replace the email field. Returns whether anything changed.
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        Self::edit(self.is_editable(), &mut self.email, email.into())
    }

    /// Replace the password field. Returns whether anything changed.
    pub fn set_password(&mut self, password: impl Into<String>) -> bool {
        Self::edit(self.is_editable(), &mut self.password, password.into())
    }

    /// Write a field if edits are currently allowed.
    fn edit(editable: bool, field: &mut String, value: String) -> bool {
        if !editable || *field == value {
            return false;
        }

        *field = value;
        true
    }

    /// The body for the login request, built from the current fields.
    pub fn payload(&self) -> login::Req {
        login::Req {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Move into the loading state and hand back the payload to send.
    ///
    /// Returns `None` (and changes nothing) if the form is invalid or we're
    /// already signed in. Being in the loading state already is not checked
    /// here; the submit button is disabled while loading.
    pub fn begin_submit(&mut self) -> Option<login::Req> {
        if self.is_signed_in || !self.is_valid() {
            return None;
        }

        self.is_loading = true;
        self.clear_error();

        Some(self.payload())
    }

    /// Record the outcome of a request.
    pub fn finish(&mut self, result: &LoginResult) {
        self.is_loading = false;

        match result.user_message() {
            None => {
                self.is_signed_in = true;
                self.clear_error();
            }
            Some(message) => {
                self.show_error = true;
                self.error_message = message;
            }
        }
    }

    /// Hide the error region.
    fn clear_error(&mut self) {
        self.show_error = false;
        self.error_message.clear();
    }
}
