use crossterm::event::KeyEvent;
use signin_core::LoginResult;

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// The form state changed, so we need to redraw
    FormChanged,

    /// A sign-in request came back
    SignInFinished(LoginResult),

    /// Something bad happened; display it to the user
    Problem(String),
}
