//! Access token claims and JWT signing.
//!
//! Video access credentials are HS256 JWTs in the shape the video
//! provider's token validator expects: issuer = API key SID, subject =
//! account SID, and a `grants` object carrying the participant identity
//! and exactly one room-scoped video grant.

use crate::config::SigningCredentials;
use crate::errors::ApiError;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content type tag the video provider's validator requires in the JWT header.
pub const ACCESS_TOKEN_CTY: &str = "twilio-fv=1";

/// Claims of a video access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Unique token identifier (key SID + random suffix).
    pub jti: String,

    /// Issuer: the API key SID the token was signed with.
    pub iss: String,

    /// Subject: the account SID the key belongs to.
    pub sub: String,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,

    /// Scoped grants carried by this token.
    pub grants: TokenGrants,
}

/// Grant set embedded in an access token.
///
/// Carries the participant identity and a single video grant. No other
/// grant types are ever embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrants {
    /// Participant identity (normalized, length-capped).
    pub identity: String,

    /// The one room-scoped video grant.
    pub video: VideoGrant,
}

/// Video grant restricted to a single named room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoGrant {
    /// Room the token authorizes real-time video access to.
    pub room: String,
}

impl AccessTokenClaims {
    /// Assemble claims for a token issued at `issued_at`, valid for
    /// `ttl_seconds`, scoped to `room` and bound to `identity`.
    pub fn new(
        credentials: &SigningCredentials,
        identity: String,
        room: String,
        issued_at: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> Self {
        let iat = issued_at.timestamp();

        AccessTokenClaims {
            jti: format!("{}-{}", credentials.api_key_sid, Uuid::new_v4().simple()),
            iss: credentials.api_key_sid.clone(),
            sub: credentials.account_sid.clone(),
            iat,
            exp: iat + ttl_seconds,
            grants: TokenGrants {
                identity,
                video: VideoGrant { room },
            },
        }
    }
}

/// Sign access token claims with the API key secret (HS256).
pub fn sign_access_token(
    claims: &AccessTokenClaims,
    secret: &str,
) -> Result<String, ApiError> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".to_string());
    header.cty = Some(ACCESS_TOKEN_CTY.to_string());

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &encoding_key)
        .map_err(|e| ApiError::Signing(format!("JWT signing operation failed: {}", e)))
}

/// Decode and verify an access token signed with `secret`.
///
/// Verifies the HS256 signature and the `exp` claim. Used by tests and by
/// anything that needs to inspect a freshly minted token.
pub fn decode_access_token(
    token: &str,
    secret: &str,
) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);

    decode::<AccessTokenClaims>(token, &decoding_key, &validation).map(|data| data.claims)
}
