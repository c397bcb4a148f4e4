use mathmaster_api::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_and_verify_roundtrip() {
    let password = "Sup3r-secret!";

    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_wrong_password_does_not_verify() {
    let hash = hash_password("correct-horse").unwrap();

    assert!(!verify_password("battery-staple", &hash).unwrap());
}

#[test]
fn test_hash_is_not_plaintext() {
    let password = "plaintext-password";

    let hash = hash_password(password).unwrap();

    assert_ne!(hash, password);
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_hashes_are_salted() {
    let password = "same-password";

    let first = hash_password(password).unwrap();
    let second = hash_password(password).unwrap();

    assert_ne!(first, second);
    assert!(verify_password(password, &first).unwrap());
    assert!(verify_password(password, &second).unwrap());
}
