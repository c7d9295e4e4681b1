use super::Action;
use crate::config::Config;
use signin_core::{sign_in, sync};

/// Connections to external services that effects use. We keep these around to
/// have some level of connection sharing for the app as a whole.
#[derive(Debug)]
pub struct EffectContext {
    /// an HTTP client with reqwest
    http: reqwest::Client,

    /// The authentication server
    client: sync::Client,
}

impl EffectContext {
    /// Get a new `EffectContext` pointed at the configured server
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            client: sync::Client::new(config.server.clone()),
        }
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Send a login request the form has already accepted. The outcome comes
    /// back to the app as `Action::SignInFinished`.
    SignIn(sync::login::Req),
}

impl Effect {
    /// Perform the side-effectful portions of this effect, returning the next
    /// `Action` the application needs to handle
    pub async fn run(self, conn: &EffectContext) -> Option<Action> {
        match self {
            Self::SignIn(req) => {
                let result = sign_in::request(&conn.client, &conn.http, &req).await;

                Some(Action::SignInFinished(result))
            }
        }
    }
}
