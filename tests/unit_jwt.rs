use mathmaster_api::config::jwt::JwtConfig;
use mathmaster_api::modules::users::model::UserRole;
use mathmaster_api::utils::jwt::{TokenError, create_access_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 3600,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();

    let result = create_access_token(Uuid::new_v4(), UserRole::Student, &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_verify_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, UserRole::Teacher, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, UserRole::Teacher);
}

#[test]
fn test_token_contains_each_role() {
    let jwt_config = get_test_jwt_config();

    for role in [UserRole::Admin, UserRole::Teacher, UserRole::Student] {
        let token = create_access_token(Uuid::new_v4(), role, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_verify_token_wrong_secret_is_signature_error() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(Uuid::new_v4(), UserRole::Student, &jwt_config).unwrap();

    let wrong_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        token_expiry: 3600,
    };

    assert_eq!(
        verify_token(&token, &wrong_config).unwrap_err(),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = [
        "",
        "invalid.token.here",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
    ];

    for token in malformed_tokens {
        assert_eq!(
            verify_token(token, &jwt_config).unwrap_err(),
            TokenError::Malformed,
            "token: {token:?}"
        );
    }
}

#[test]
fn test_expired_token_is_expiry_error_not_signature_error() {
    // Negative lifetime puts exp in the past, beyond the default leeway.
    let expired_config = JwtConfig {
        secret: get_test_jwt_config().secret,
        token_expiry: -120,
    };

    let token = create_access_token(Uuid::new_v4(), UserRole::Admin, &expired_config).unwrap();
    let err = verify_token(&token, &expired_config).unwrap_err();

    assert_eq!(err, TokenError::Expired);
    assert_ne!(err, TokenError::InvalidSignature);
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token(Uuid::new_v4(), UserRole::Student, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, jwt_config.token_expiry as usize);
}
