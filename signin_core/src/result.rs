use crate::sync;
use reqwest::StatusCode;

/// How a sign-in attempt turned out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    /// The server answered with a 200.
    Success,

    /// The server answered with anything other than a 200.
    AuthenticationFailed,

    /// We never got an answer, for example because DNS failed, the
    /// connection was refused, or the request timed out.
    NetworkError(String),

    /// We couldn't build the request in the first place.
    InvalidRequest(String),
}

impl LoginResult {
    /// Interpret the outcome of sending a login request. Only the status code
    /// matters: 200 is a success and everything else is a failed login.
    pub fn from_response(resp: sync::Result<StatusCode>) -> Self {
        match resp {
            Ok(StatusCode::OK) => Self::Success,
            Ok(_) => Self::AuthenticationFailed,
            Err(sync::Error::Http(err)) => Self::NetworkError(err.to_string()),
            Err(err @ (sync::Error::UrlParse(_) | sync::Error::Json(_))) => {
                Self::InvalidRequest(err.to_string())
            }
        }
    }

    /// Did we get in?
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The text to show under the form, if any.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::AuthenticationFailed => Some("Incorrect email or password.".to_string()),
            Self::NetworkError(message) => Some(format!(
                "Couldn't reach the server. Check your connection and try again. ({message})"
            )),
            Self::InvalidRequest(message) => {
                Some(format!("Couldn't build the sign-in request: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use url::Url;

    #[test]
    fn ok_is_success() {
        assert_eq!(
            LoginResult::from_response(Ok(StatusCode::OK)),
            LoginResult::Success
        );
    }

    #[test]
    fn other_success_codes_are_failures() {
        assert_eq!(
            LoginResult::from_response(Ok(StatusCode::NO_CONTENT)),
            LoginResult::AuthenticationFailed
        );
    }

    #[test]
    fn unauthorized_is_failure() {
        assert_eq!(
            LoginResult::from_response(Ok(StatusCode::UNAUTHORIZED)),
            LoginResult::AuthenticationFailed
        );
    }

    #[test]
    fn server_error_is_failure() {
        assert_eq!(
            LoginResult::from_response(Ok(StatusCode::INTERNAL_SERVER_ERROR)),
            LoginResult::AuthenticationFailed
        );
    }

    #[test]
    fn bad_url_is_invalid_request() {
        let err = Url::parse("not a url").unwrap_err();

        assert!(matches!(
            LoginResult::from_response(Err(sync::Error::UrlParse(err))),
            LoginResult::InvalidRequest(_)
        ));
    }

    #[test]
    fn every_failure_has_a_message() {
        for result in [
            LoginResult::AuthenticationFailed,
            LoginResult::NetworkError("connection refused".to_string()),
            LoginResult::InvalidRequest("bad url".to_string()),
        ] {
            let message = result.user_message().unwrap();
            assert!(!message.is_empty());
        }
    }

    #[test]
    fn network_message_mentions_the_cause() {
        let message = LoginResult::NetworkError("connection refused".to_string())
            .user_message()
            .unwrap();

        assert!(message.contains("connection refused"));
    }

    #[test]
    fn success_has_no_message() {
        assert_eq!(LoginResult::Success.user_message(), None);
    }
}
