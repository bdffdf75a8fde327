//! Classroom service configuration.
//!
//! Configuration is loaded from environment variables. The signing key
//! secret is redacted in Debug output.

use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 4000;

/// Credentials for the video access token signer.
///
/// All three values come from the video provider's console and identify
/// the account, the API key, and the key's secret used to sign tokens.
#[derive(Clone)]
pub struct SigningCredentials {
    /// Account identifier embedded as the token `sub` claim.
    pub account_sid: String,

    /// API key identifier embedded as the token `iss` claim.
    pub api_key_sid: String,

    /// API key secret used as the HMAC signing key.
    pub api_key_secret: String,
}

/// Custom Debug implementation that redacts the signing secret.
impl fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("account_sid", &self.account_sid)
            .field("api_key_sid", &self.api_key_sid)
            .field("api_key_secret", &"[REDACTED]")
            .finish()
    }
}

/// Classroom service configuration.
///
/// Loaded from environment variables with sensible defaults. Signing
/// credentials are optional at startup: the service boots and serves every
/// endpoint without them, and only `/token` fails until they are set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:4000").
    pub bind_address: String,

    /// Video token signing credentials, when fully configured.
    pub signing: Option<SigningCredentials>,

    /// CORS origin allow-list. Empty means every origin is allowed.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid listen port: {0}")]
    InvalidPort(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = match vars.get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort(format!("{}: {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let bind_address = format!("0.0.0.0:{}", port);

        let signing = Self::signing_from_vars(vars);

        let cors_origins = vars
            .get("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            bind_address,
            signing,
            cors_origins,
        })
    }

    /// Assemble signing credentials if all three variables are set and
    /// non-blank. A partial set leaves signing unconfigured; the gap is
    /// reported when a token is first requested, not at startup.
    fn signing_from_vars(vars: &HashMap<String, String>) -> Option<SigningCredentials> {
        let account_sid = non_blank(vars.get("VIDEO_ACCOUNT_SID"))?;
        let api_key_sid = non_blank(vars.get("VIDEO_API_KEY_SID"))?;
        let api_key_secret = non_blank(vars.get("VIDEO_API_KEY_SECRET"))?;

        Some(SigningCredentials {
            account_sid,
            api_key_sid,
            api_key_secret,
        })
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
