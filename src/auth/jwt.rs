use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::User,
};

/// Longest token lifetime accepted from configuration (one year).
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

/// Issues and checks HS256 session tokens with a secret injected at startup.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> AppResult<Self> {
        let secret_bytes = secret.expose_secret().as_bytes();
        if secret_bytes.is_empty() {
            return Err(AppError::ConfigError(
                "JWT secret must not be empty".to_string(),
            ));
        }

        if !(1..=MAX_EXPIRATION_HOURS).contains(&expiration_hours) {
            return Err(AppError::ConfigError(format!(
                "JWT expiration must be between 1 and {} hours, got {}",
                MAX_EXPIRATION_HOURS, expiration_hours
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            expiration_hours,
        })
    }

    pub fn create_token(&self, user: &User) -> AppResult<String> {
        let claims = Claims::new(user, self.expiration_hours)?;

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::SigningError(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token has expired".to_string())
                }
                _ => AppError::Unauthorized(format!("Invalid token: {}", e)),
            })
    }
}
