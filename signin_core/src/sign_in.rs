use crate::result::LoginResult;
use crate::store::FormStore;
use crate::sync::{self, login};
use tokio_util::sync::CancellationToken;

/// Validate the form, send the login request, and record the outcome in the
/// store.
///
/// Returns `None` without touching the store or the network when the form is
/// invalid (or the token is already cancelled.) Otherwise returns how the
/// attempt turned out.
pub async fn sign_in(
    store: &FormStore,
    client: &sync::Client,
    http: &reqwest::Client,
    cancel: &CancellationToken,
) -> Option<LoginResult> {
    if cancel.is_cancelled() {
        return None;
    }

    let Some(req) = store.begin_submit() else {
        tracing::debug!("form is not valid, skipping sign-in");
        return None;
    };

    Some(send(store, client, http, cancel, &req).await)
}

/// The second half of `sign_in`: send a payload the store has already
/// accepted with `begin_submit`, then record the outcome.
///
/// If `cancel` fires while the request is in flight, the outcome is still
/// returned but the store is left alone.
pub async fn send(
    store: &FormStore,
    client: &sync::Client,
    http: &reqwest::Client,
    cancel: &CancellationToken,
    req: &login::Req,
) -> LoginResult {
    let result = request(client, http, req).await;

    if cancel.is_cancelled() {
        tracing::debug!("sign-in screen is gone, dropping result");
    } else {
        store.finish(&result);
    }

    result
}

/// Send the login request and interpret the answer, without touching any
/// form state. Callers that own the state on another task apply the result
/// themselves with `FormStore::finish`.
#[tracing::instrument(skip_all, fields(server = %client.server))]
pub async fn request(
    client: &sync::Client,
    http: &reqwest::Client,
    req: &login::Req,
) -> LoginResult {
    tracing::info!("signing in");

    let result = LoginResult::from_response(client.login(http, req).await);

    match &result {
        LoginResult::Success => tracing::info!("signed in"),
        LoginResult::AuthenticationFailed => tracing::info!("server rejected credentials"),
        LoginResult::NetworkError(problem) | LoginResult::InvalidRequest(problem) => {
            tracing::error!(?problem, "could not sign in");
        }
    }

    result
}
