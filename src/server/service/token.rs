//! JWT signing/verification and single-use token material.
//!
//! `JwtKeys` wraps the HS256 keys derived from the configured secret and is
//! shared through application state. Single-use tokens (email verification,
//! password reset) are random hex strings whose sha256 digest is what gets
//! persisted; the raw value only ever travels to the user.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::server::error::auth::AuthError;

/// Claims carried by every access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for.
    pub sub: i32,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

/// HS256 key pair plus token lifetime, initialized once from configuration.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_in: Duration,
}

impl JwtKeys {
    /// Derives the signing and verification keys from the shared secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret from configuration
    /// - `expires_in_days` - Access token lifetime in days
    pub fn new(secret: &str, expires_in_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expires_in: Duration::days(expires_in_days),
        }
    }

    /// Signs a fresh access token for the given user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::InvalidToken)` - Encoding failed
    pub fn sign(&self, user_id: i32) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.expires_in).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Valid token
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }

    /// Lifetime of issued tokens in whole seconds, used for cookie Max-Age.
    pub fn max_age_seconds(&self) -> i64 {
        self.expires_in.num_seconds()
    }
}

/// A freshly issued single-use token: the raw value for the user and the
/// digest for storage.
pub struct IssuedToken {
    pub raw: String,
    pub digest: String,
}

/// Issues a random single-use token (password reset, email verification).
pub fn issue_single_use_token() -> IssuedToken {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    let raw = hex::encode(bytes);
    let digest = digest_token(&raw);

    IssuedToken { raw, digest }
}

/// Digest of a raw single-use token as stored in the database.
pub fn digest_token(raw: &str) -> String {
    hex::encode(Sha256::digest(raw.as_bytes()))
}
