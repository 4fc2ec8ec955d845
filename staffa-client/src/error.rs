use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthorized,
    #[error("network error: {0}")]
    Transport(String),
    #[error("{0}")]
    Api(String),
    #[error("failed to parse response: {0}")]
    Parsing(String),
}

/// Error body shape the server uses for application errors.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Turn a non-2xx response into an `ApiError`, consuming the body.
///
/// The server usually answers with `{"error": "..."}`, sometimes with a
/// plain-text body, and occasionally with nothing useful at all.
pub(crate) async fn error_from_response(resp: reqwest::Response) -> ApiError {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return ApiError::Unauthorized;
    }

    let body = resp.text().await.unwrap_or_default();
    ApiError::Api(api_error_message(status.as_u16(), &body))
}

pub(crate) fn api_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!("request failed with status {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_field_is_preferred() {
        assert_eq!(
            api_error_message(400, r#"{"error": "end date before start date"}"#),
            "end date before start date"
        );
    }

    #[test]
    fn plain_text_body_is_passed_through() {
        assert_eq!(
            api_error_message(422, "insufficient vacation balance\n"),
            "insufficient vacation balance"
        );
    }

    #[test]
    fn empty_body_falls_back_to_generic_message() {
        assert_eq!(api_error_message(500, ""), "request failed with status 500");
        assert_eq!(api_error_message(404, "   "), "request failed with status 404");
    }

    #[test]
    fn malformed_json_is_treated_as_text() {
        assert_eq!(api_error_message(400, r#"{"message": "nope"}"#), r#"{"message": "nope"}"#);
    }
}
