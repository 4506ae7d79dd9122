use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::config::AuthConfig;
use crate::error::{AuthError, Error, Result};
use crate::utils::time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Gate for the admin surface: checks the single admin credential pair and
/// issues and verifies HS256 bearer tokens. Tokens are not stored anywhere.
#[derive(Clone)]
pub struct AuthService {
    admin_email: String,
    admin_password: String,
    token_ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
            token_ttl: config.token_ttl,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<String> {
        let email_ok = email.as_bytes().ct_eq(self.admin_email.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.admin_password.as_bytes());
        if !bool::from(email_ok & password_ok) {
            tracing::warn!("admin login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.issue_token_at(email, time::now())?;
        tracing::info!("admin logged in");
        Ok(token)
    }

    pub fn issue_token_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String> {
        let expires_at = issued_at
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| Error::Internal("token expiry out of range".to_string()))?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| Error::Internal(format!("Failed to encode token: {}", e)))
    }

    /// Checks an `Authorization` header value of the form `Bearer <token>`.
    /// Any validly signed, unexpired token is accepted regardless of subject.
    pub fn authorize(&self, header: Option<&str>) -> Result<Claims> {
        let header = header
            .filter(|h| !h.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let mut parts = header.split_whitespace();
        let token = match (parts.next(), parts.next()) {
            (Some(scheme), Some(token)) if scheme.eq_ignore_ascii_case("bearer") => token,
            _ => return Err(AuthError::InvalidToken.into()),
        };

        self.verify_token(token)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!(error = %e, "admin token rejected");
                AuthError::InvalidToken.into()
            })
    }
}
