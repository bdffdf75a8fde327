//! Credential minting.
//!
//! Builds time-boxed, identity-bound, room-scoped video access tokens.
//! Minting is a pure function of (signing credentials, identity, room):
//! no state, no side effects beyond the signing operation, safe to call
//! unboundedly in parallel.
//!
//! Identity and room inputs are normalized before they reach the signer:
//! absent or empty values fall back to defaults, and oversized values are
//! silently clipped. The length caps keep pathological inputs out of the
//! token claims; clipping instead of rejecting trades strict validation
//! for availability.

use crate::config::Config;
use crate::crypto::{self, AccessTokenClaims};
use crate::errors::ApiError;
use crate::models::TokenResponse;
use chrono::Utc;

/// Token time-to-live in seconds (1 hour).
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Hard cap on the identity claim, in characters.
pub const MAX_IDENTITY_LENGTH: usize = 64;

/// Hard cap on the room name, in characters.
pub const MAX_ROOM_LENGTH: usize = 128;

/// Identity used when the caller supplies none.
const DEFAULT_IDENTITY: &str = "guest";

/// Room used when the caller supplies none.
const DEFAULT_ROOM: &str = "lobby";

/// Normalize a caller-supplied identity: default when absent or empty,
/// then clip to `MAX_IDENTITY_LENGTH` characters.
pub fn normalize_identity(raw: Option<&str>) -> String {
    normalize(raw, DEFAULT_IDENTITY, MAX_IDENTITY_LENGTH)
}

/// Normalize a caller-supplied room name: default when absent or empty,
/// then clip to `MAX_ROOM_LENGTH` characters.
pub fn normalize_room(raw: Option<&str>) -> String {
    normalize(raw, DEFAULT_ROOM, MAX_ROOM_LENGTH)
}

fn normalize(raw: Option<&str>, default: &str, max_chars: usize) -> String {
    match raw {
        // Clipping is silent: oversized input is never an error
        Some(value) if !value.is_empty() => value.chars().take(max_chars).collect(),
        _ => default.to_string(),
    }
}

/// Mint a video access token bound to `identity` and scoped to `room`.
///
/// The token carries exactly one video grant and expires
/// `TOKEN_TTL_SECONDS` after mint time. Fails with
/// `ApiError::Configuration` when signing credentials are not configured.
pub fn mint(
    config: &Config,
    identity: Option<&str>,
    room: Option<&str>,
) -> Result<TokenResponse, ApiError> {
    let credentials = config.signing.as_ref().ok_or_else(|| {
        ApiError::Configuration(
            "VIDEO_ACCOUNT_SID, VIDEO_API_KEY_SID and VIDEO_API_KEY_SECRET must all be set"
                .to_string(),
        )
    })?;

    let identity = normalize_identity(identity);
    let room = normalize_room(room);

    let claims = AccessTokenClaims::new(
        credentials,
        identity.clone(),
        room.clone(),
        Utc::now(),
        TOKEN_TTL_SECONDS,
    );

    let token = crypto::sign_access_token(&claims, &credentials.api_key_secret)?;

    Ok(TokenResponse {
        token,
        identity,
        room,
    })
}
