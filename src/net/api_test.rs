use super::*;
use serde_json::json;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(asset_endpoint(7), "/objects/7");
    assert_eq!(asset_maintenance_endpoint(7), "/objects/7/maintenance");
    assert_eq!(asset_available_endpoint(7), "/objects/7/available");
    assert_eq!(rental_cancel_endpoint(12), "/rentals/12/cancel");
}

#[test]
fn auth_response_with_matching_status_and_token_succeeds() {
    let body = json!({"access_token": "jwt-token"});
    assert_eq!(
        interpret_auth_response(200, 200, &body),
        Ok("jwt-token".to_owned())
    );
    assert_eq!(
        interpret_auth_response(201, 201, &body),
        Ok("jwt-token".to_owned())
    );
}

#[test]
fn auth_response_missing_token_is_malformed_success() {
    assert_eq!(
        interpret_auth_response(200, 200, &json!({"msg": "ok"})),
        Err(AuthError::MissingToken)
    );
    assert_eq!(
        interpret_auth_response(200, 200, &json!({"access_token": ""})),
        Err(AuthError::MissingToken)
    );
}

#[test]
fn auth_response_wrong_status_surfaces_server_message() {
    let body = json!({"msg": "Invalid credentials."});
    assert_eq!(
        interpret_auth_response(401, 200, &body),
        Err(AuthError::Rejected(Some("Invalid credentials.".to_owned())))
    );
}

#[test]
fn auth_response_wrong_status_without_message() {
    assert_eq!(
        interpret_auth_response(500, 200, &serde_json::Value::Null),
        Err(AuthError::Rejected(None))
    );
}

#[test]
fn login_status_is_not_accepted_for_register() {
    // Registration expects 201; a 200 body with a token is still a failure.
    let body = json!({"access_token": "jwt-token"});
    assert_eq!(
        interpret_auth_response(200, 201, &body),
        Err(AuthError::Rejected(None))
    );
}

#[test]
fn mutation_error_prefers_server_message() {
    assert_eq!(
        mutation_error(400, Some("Asset is not available for rent.")),
        "Asset is not available for rent."
    );
}

#[test]
fn mutation_error_falls_back_to_status_text() {
    assert_eq!(mutation_error(500, None), "Запит не вдався: 500");
}
