use crate::service::admin::credential_matches;

/// Tests the primary secret grants access.
///
/// Expected: true
#[test]
fn primary_secret_matches() {
    assert!(credential_matches("hunter2", "hunter2", None));
}

/// Tests the secondary secret grants access when configured.
///
/// Expected: true
#[test]
fn secondary_secret_matches_when_configured() {
    assert!(credential_matches("backup", "hunter2", Some("backup")));
}

/// Tests a wrong credential is refused against both secrets.
///
/// Expected: false
#[test]
fn wrong_credential_is_refused() {
    assert!(!credential_matches("guess", "hunter2", Some("backup")));
}

/// Tests an empty submission never matches, even against an empty secret.
///
/// Guards against a blank configured secondary accidentally opening the
/// admin gate to empty form posts.
///
/// Expected: false
#[test]
fn empty_submission_is_refused() {
    assert!(!credential_matches("", "hunter2", None));
    assert!(!credential_matches("", "hunter2", Some("")));
}

/// Tests the comparison is exact, not prefix-based.
///
/// Expected: false for prefixes and different casing
#[test]
fn comparison_is_exact() {
    assert!(!credential_matches("hunter", "hunter2", None));
    assert!(!credential_matches("HUNTER2", "hunter2", None));
}
