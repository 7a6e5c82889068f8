//! Admin account login.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Credentials for the admin login. The response carries the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub account: String,
    pub password: String,
}

impl AdminClient {
    pub fn build_login(&self, form: &LoginForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/adminWeb/account/login")
            .with_json(form)
    }
}
