use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::debug;

use crate::core::http::response_envelope::{ApiErrorDetail, ErrorEnvelope};

/// Largest rejection body we bother to read back.
const MAX_REJECTION_BYTES: usize = 64 * 1024;

async fn take_body(res: Response) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_REJECTION_BYTES)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

fn guess_path_from_serde_msg(msg: &str) -> Option<String> {
    ["message", "context"]
        .into_iter()
        .find(|key| msg.contains(key))
        .map(str::to_string)
}

/// Header carrying the request id, client-supplied or generated.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Returns the request id from `headers`, generating and inserting one when absent.
fn ensure_request_id(headers: &mut HeaderMap) -> String {
    if let Some(v) = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.trim().is_empty())
    {
        return v.to_string();
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    let id = format!("req-{nanos}");
    if let Ok(value) = HeaderValue::from_str(&id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    id
}

fn error_code(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::BAD_REQUEST => Some("BAD_REQUEST"),
        StatusCode::UNPROCESSABLE_ENTITY => Some("UNPROCESSABLE_ENTITY"),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => Some("UNSUPPORTED_MEDIA_TYPE"),
        _ => None,
    }
}

/// Rewrites extractor rejections (plain-text bodies) into the JSON error envelope.
///
/// Every request gets an `x-request-id` (the client's, or a generated one) that
/// handlers can log and that is echoed on the response. Only 400/415/422 bodies
/// are rewritten; every other response passes through.
pub async fn json_error_mapper(mut req: Request<Body>, next: Next) -> Response {
    let req_id = ensure_request_id(req.headers_mut());
    let mut res = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&req_id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    let status = res.status();

    let Some(code) = error_code(status) else {
        return res;
    };

    let (mut parts, bytes) = take_body(res).await;
    let original = String::from_utf8_lossy(&bytes);
    debug!(request_id = %req_id, %status, "rejected request body");

    let detail = ApiErrorDetail {
        path: guess_path_from_serde_msg(&original),
        hint: if original.contains("missing field") {
            Some("Send a JSON object like { \"message\": \"admissions\" }.".into())
        } else if original.contains("expected a string") || original.contains("invalid type") {
            Some("`message` and `context` must be strings.".into())
        } else if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
            Some("Set `Content-Type: application/json`.".into())
        } else {
            None
        },
    };

    let envelope = ErrorEnvelope::new(code, original.trim(), vec![detail]);

    let body = match serde_json::to_vec(&envelope) {
        Ok(v) => v,
        Err(_) => bytes.to_vec(),
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Response::from_parts(parts, body.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_field_from_serde_message() {
        assert_eq!(
            guess_path_from_serde_msg("missing field `message` at line 1 column 2"),
            Some("message".to_string())
        );
        assert_eq!(guess_path_from_serde_msg("EOF while parsing"), None);
    }

    #[test]
    fn client_request_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(ensure_request_id(&mut headers), "abc-123");
    }

    #[test]
    fn missing_request_id_is_generated_and_stored() {
        let mut headers = HeaderMap::new();
        let id = ensure_request_id(&mut headers);
        assert!(id.starts_with("req-"));
        assert_eq!(
            headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()),
            Some(id.as_str())
        );
    }

    #[test]
    fn only_client_errors_are_mapped() {
        assert_eq!(error_code(StatusCode::UNPROCESSABLE_ENTITY), Some("UNPROCESSABLE_ENTITY"));
        assert_eq!(error_code(StatusCode::OK), None);
        assert_eq!(error_code(StatusCode::NOT_FOUND), None);
    }
}
