use chrono::Utc;

use super::test_session;
use crate::{
    controller::auth::take_matching_handshake,
    error::{auth::AuthError, AppError},
    middleware::session::HandshakeSession,
    model::auth::OAuthHandshake,
};

fn handshake(state: &str) -> OAuthHandshake {
    OAuthHandshake {
        state: state.to_string(),
        verifier: "verifier".to_string(),
        created_at: Utc::now(),
    }
}

/// Tests a callback presenting the stored state consumes the handshake and
/// hands back its verifier.
///
/// Expected: Ok with the stored handshake
#[tokio::test]
async fn matching_state_yields_handshake() -> Result<(), AppError> {
    let session = test_session();
    HandshakeSession::new(&session).set(&handshake("state-1")).await?;

    let taken = take_matching_handshake(&session, Some("state-1")).await?;

    assert_eq!(taken.state, "state-1");
    assert_eq!(taken.verifier, "verifier");

    Ok(())
}

/// Tests a callback presenting the wrong state is rejected even though a
/// handshake was pending.
///
/// The handshake must be burned by the attempt, so a follow-up with the
/// right state finds nothing pending.
///
/// Expected: StateMismatch, then MissingHandshake on the retry
#[tokio::test]
async fn mismatched_state_is_rejected_and_burns_handshake() -> Result<(), AppError> {
    let session = test_session();
    HandshakeSession::new(&session).set(&handshake("state-1")).await?;

    let result = take_matching_handshake(&session, Some("state-forged")).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::StateMismatch))
    ));

    let retry = take_matching_handshake(&session, Some("state-1")).await;
    assert!(matches!(
        retry,
        Err(AppError::AuthErr(AuthError::MissingHandshake))
    ));

    Ok(())
}

/// Tests a callback that carries no state at all is rejected the same way.
///
/// Expected: StateMismatch
#[tokio::test]
async fn absent_state_is_rejected() -> Result<(), AppError> {
    let session = test_session();
    HandshakeSession::new(&session).set(&handshake("state-1")).await?;

    let result = take_matching_handshake(&session, None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::StateMismatch))
    ));

    Ok(())
}

/// Tests a callback with no pending handshake is rejected before any state
/// comparison happens.
///
/// Expected: MissingHandshake
#[tokio::test]
async fn missing_handshake_is_rejected() {
    let session = test_session();

    let result = take_matching_handshake(&session, Some("state-1")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingHandshake))
    ));
}
