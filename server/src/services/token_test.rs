use super::*;

fn request(username: Option<&str>, password: Option<&str>) -> TokenRequest {
    TokenRequest { username: username.map(str::to_owned), password: password.map(str::to_owned) }
}

// =============================================================================
// issue_token
// =============================================================================

#[test]
fn correct_pair_issues_literal_token() {
    assert_eq!(issue_token(&request(Some("login"), Some("password"))), Ok("some bs"));
}

#[test]
fn repeated_logins_issue_same_token() {
    let first = issue_token(&request(Some("login"), Some("password"))).unwrap();
    let second = issue_token(&request(Some("login"), Some("password"))).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bad_username_and_bad_password_are_indistinguishable() {
    let bad_user = issue_token(&request(Some("admin"), Some("password")));
    let bad_pass = issue_token(&request(Some("login"), Some("hunter2")));
    assert_eq!(bad_user, Err(GatewayError::InvalidGrant));
    assert_eq!(bad_user, bad_pass);
}

#[test]
fn mismatched_pairs_rejected() {
    let cases = [
        (Some("login"), Some("")),
        (Some(""), Some("password")),
        (Some("Login"), Some("password")),
        (Some("login"), Some("Password")),
        (Some("login "), Some("password")),
        (Some("password"), Some("login")),
        (None, Some("password")),
        (Some("login"), None),
        (None, None),
    ];
    for (username, password) in cases {
        assert_eq!(
            issue_token(&request(username, password)),
            Err(GatewayError::InvalidGrant),
            "expected rejection for {username:?}/{password:?}"
        );
    }
}

// =============================================================================
// validate_authorization
// =============================================================================

#[test]
fn exact_bearer_value_accepted() {
    assert_eq!(validate_authorization(Some("Bearer some bs")), Ok(()));
}

#[test]
fn other_header_values_rejected() {
    let cases = [
        "",
        "Bearer",
        "Bearer ",
        "bearer some bs",
        "BEARER some bs",
        "Basic some bs",
        "Bearer  some bs",
        "Bearer some bs ",
        " Bearer some bs",
        "Bearer some",
        "Bearer some bs2",
        "some bs",
    ];
    for value in cases {
        assert_eq!(
            validate_authorization(Some(value)),
            Err(GatewayError::Unauthorized),
            "expected rejection for {value:?}"
        );
    }
}

#[test]
fn missing_header_rejected() {
    assert_eq!(validate_authorization(None), Err(GatewayError::Unauthorized));
}
