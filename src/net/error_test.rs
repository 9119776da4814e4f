use super::*;
use serde_json::json;

#[test]
fn extract_prefers_detail_field() {
    let body = json!({ "detail": "Incorrect email or password", "error": "ignored" });
    assert_eq!(extract_error_message(401, &body), "Incorrect email or password");
}

#[test]
fn extract_falls_back_to_error_string() {
    let body = json!({ "error": "Validation failed" });
    assert_eq!(extract_error_message(422, &body), "Validation failed");
}

#[test]
fn extract_joins_details_array() {
    let body = json!({ "error": {}, "details": ["name is required", "age must be a number"] });
    assert_eq!(
        extract_error_message(422, &body),
        "name is required; age must be a number"
    );
}

#[test]
fn extract_falls_back_to_status_line() {
    assert_eq!(extract_error_message(502, &json!({})), "HTTP 502");
    assert_eq!(extract_error_message(404, &Value::Null), "HTTP 404");
    assert_eq!(extract_error_message(400, &json!({ "details": [] })), "HTTP 400");
}

#[test]
fn any_401_classifies_as_session_expired() {
    let body = json!({ "detail": "Could not validate credentials" });
    assert_eq!(classify_response(401, &body), ApiError::SessionExpired);
}

#[test]
fn five_xx_classifies_as_server_error() {
    assert_eq!(
        classify_response(503, &Value::Null),
        ApiError::ServerError { status: 503, message: "HTTP 503".to_owned() }
    );
}

#[test]
fn other_non_2xx_classifies_as_server_rejected_with_message() {
    let body = json!({ "detail": "Schedule conflict: overlapping visit" });
    assert_eq!(
        classify_response(409, &body),
        ApiError::ServerRejected {
            status: 409,
            message: "Schedule conflict: overlapping visit".to_owned(),
        }
    );
}

#[test]
fn login_rejection_carries_server_message_verbatim() {
    let body = json!({ "detail": "Incorrect email or password" });
    let err = classify_login_failure(401, &body);
    assert_eq!(
        err,
        ApiError::InvalidCredentials { message: "Incorrect email or password".to_owned() }
    );
    assert_eq!(err.to_string(), "Incorrect email or password");
}

#[test]
fn login_5xx_is_a_server_error_not_bad_credentials() {
    let err = classify_login_failure(500, &Value::Null);
    assert_eq!(
        err,
        ApiError::ServerError { status: 500, message: "HTTP 500".to_owned() }
    );
}

#[test]
fn status_accessor_reports_response_codes() {
    assert_eq!(ApiError::SessionExpired.status(), Some(401));
    assert_eq!(
        ApiError::ServerRejected { status: 409, message: String::new() }.status(),
        Some(409)
    );
    assert_eq!(ApiError::NetworkUnavailable.status(), None);
}
