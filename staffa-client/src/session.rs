use serde::{Deserialize, Serialize};

use crate::{error_from_response, ApiError};

/// Authenticated session against the Staffa backend: base URL plus the
/// bearer token every request carries. Constructed once (from a login or a
/// persisted token) and handed to [`crate::StaffaClient`], rather than read
/// from ambient storage per call.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

impl Session {
    /// Build a session from an already-issued token.
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Exchange email + password for a bearer token.
    pub async fn login(base_url: &str, email: &str, password: &str) -> Result<Session, ApiError> {
        let base_url = base_url.trim_end_matches('/');
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/api/auth/login", base_url))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }

        let body = resp
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parsing(e.to_string()))?;

        Ok(Session::new(base_url, &body.token))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_counts_as_not_logged_in() {
        let session = Session::new("http://localhost:8080", "");
        assert!(!session.has_token());

        let session = Session::new("http://localhost:8080", "tok-123");
        assert!(session.has_token());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let session = Session::new("http://localhost:8080/", "tok");
        assert_eq!(session.base_url(), "http://localhost:8080");
    }
}
