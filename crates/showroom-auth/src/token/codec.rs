//! HS256 encoding and verification of showroom claim sets.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::de::IgnoredAny;

use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::secret::SigningSecret;

use super::claims::TokenClaims;
use super::error::TokenError;

/// Signs and verifies tokens with the process-wide secret.
///
/// Pure and stateless after construction; clone freely across tasks.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC key for signing.
    encoding_key: EncodingKey,
    /// HMAC key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Expiry-only validation, run before the signature is checked.
    expiry: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec bound to `secret`.
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let mut expiry = validation.clone();
        expiry.insecure_disable_signature_validation();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry,
        }
    }

    /// Signs `claims` into a compact token string.
    pub fn encode<C: TokenClaims>(&self, claims: &C) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Verifies expiry and signature, then checks the claim set is a `C`.
    ///
    /// A past `exp` is reported as [`TokenError::Expired`] whatever the
    /// signature.
    pub fn decode<C: TokenClaims>(&self, token: &str) -> Result<C, TokenError> {
        if let Err(e) = decode::<IgnoredAny>(token, &self.decoding_key, &self.expiry) {
            if matches!(e.kind(), JwtErrorKind::ExpiredSignature) {
                return Err(TokenError::Expired);
            }
        }

        let data = decode::<C>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        if data.claims.token_type() != C::TYPE {
            return Err(TokenError::Malformed);
        }

        Ok(data.claims)
    }
}
