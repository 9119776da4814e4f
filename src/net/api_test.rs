use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url("manager/clients"), "/api/manager/clients");
}

#[test]
fn endpoint_url_tolerates_leading_slash() {
    assert_eq!(endpoint_url("/manager/clients"), "/api/manager/clients");
    assert_eq!(endpoint_url("/admin/dashboard"), "/api/admin/dashboard");
}

#[test]
fn auth_header_formats_bearer_token() {
    assert_eq!(
        auth_header_value(Some("tok-123")),
        Some("Bearer tok-123".to_owned())
    );
}

#[test]
fn auth_header_omitted_when_token_absent() {
    assert_eq!(auth_header_value(None), None);
}

#[test]
fn auth_header_omitted_when_token_empty() {
    assert_eq!(auth_header_value(Some("")), None);
}

#[test]
fn decode_reports_mismatched_payload_as_rejection() {
    let result: Result<crate::net::types::LoginResponse, ApiError> =
        decode(serde_json::json!({ "unexpected": true }));
    assert_eq!(
        result,
        Err(ApiError::ServerRejected {
            status: 200,
            message: "Malformed response body".to_owned(),
        })
    );
}

#[test]
fn decode_accepts_matching_payload() {
    let result: Result<crate::net::types::LoginResponse, ApiError> =
        decode(serde_json::json!({ "access_token": "tok" }));
    assert_eq!(result.unwrap().access_token, "tok");
}
