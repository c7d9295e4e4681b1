use super::error::Result;
use super::login;
use reqwest::{header::CONTENT_TYPE, StatusCode};
use url::Url;

/// Client for the authentication API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://auth.your-domain.com`.
    pub server: String,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// The full URL of the login endpoint on this server.
    ///
    /// ## Errors
    ///
    /// `Error::UrlParse` if `server` is not a valid base URL.
    pub fn login_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.server)?.join(login::PATH)?)
    }

    /// Send a login request and report the status code the server answered
    /// with. The response body is not read.
    ///
    /// ## Errors
    ///
    /// - `Error::UrlParse` if the endpoint URL can't be built
    /// - `Error::Json` if the request can't be serialized
    /// - `Error::Http` if the request never got a response (DNS, connection
    ///   refused, timeout)
    pub async fn login(&self, client: &reqwest::Client, req: &login::Req) -> Result<StatusCode> {
        let url = self.login_url()?;

        // Serialize up front so a bad body is told apart from a transport
        // failure.
        let body = serde_json::to_vec(req)?;

        let resp = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(resp.status())
    }
}
