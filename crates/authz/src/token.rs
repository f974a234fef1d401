use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Structural, signature, algorithm and expiry failures all collapse here.
    #[error("invalid token")]
    Invalid,
}

/// Source of the current time in Unix seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// HMAC algorithms accepted on verification; anything else is refused.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Issues HS256 bearer tokens and verifies any HMAC-signed token with a fixed secret.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock, mainly so expiry can be exercised in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sign a token for `username` that expires `ttl_secs` from now.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let claims = Claims {
            username: username.to_string(),
            exp: self.clock.now().saturating_add(self.ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Check signature, algorithm and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        // Expiry is checked against `self.clock` below.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|err| {
            tracing::debug!(error = %err, "token rejected");
            TokenError::Invalid
        })?;

        if self.clock.now() >= data.claims.exp {
            tracing::debug!(username = %data.claims.username, "token expired");
            return Err(TokenError::Invalid);
        }

        Ok(data.claims)
    }
}
