use serde::{Deserialize, Serialize};

/// The request to log into the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Req {
    /// Email to use for login.
    pub email: String,

    /// Plaintext password to use for login.
    pub password: String,
}

/// Where the login endpoint lives.
pub const PATH: &str = "/api/v1/login";
