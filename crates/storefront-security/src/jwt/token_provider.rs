//! JWT token provider for validating bearer tokens.

use super::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use storefront_config::SecurityConfig;
use storefront_core::{CatalogError, CatalogResult};
use tracing::{debug, warn};

/// HS256 token provider.
///
/// Issuer and audience are only checked when configured.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: Option<String>,
    audience: Option<String>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: &SecurityConfig) -> Self {
        let issuer = non_empty(&config.jwt_issuer);
        let audience = non_empty(&config.jwt_audience);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        let mut required = vec!["exp"];
        if let Some(issuer) = &issuer {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        match &audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        validation.set_required_spec_claims(&required);

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer,
            audience,
            validation,
        }
    }

    /// Generates a token for `subject` with the given scopes.
    ///
    /// Tokens are normally minted by the authorization server; this is for
    /// local tooling and tests.
    pub fn generate_token(
        &self,
        subject: &str,
        scopes: &[&str],
        ttl: Duration,
    ) -> CatalogResult<String> {
        let mut claims = Claims::new(subject, scopes, Utc::now() + ttl);
        claims.iss.clone_from(&self.issuer);
        claims.aud = self
            .audience
            .clone()
            .map(super::OneOrMany::One);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| CatalogError::Internal(format!("Failed to generate token: {}", e)))?;

        debug!("Generated token for subject {}", subject);
        Ok(token)
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> CatalogResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        CatalogError::InvalidToken("Token has expired".to_string())
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidSignature => {
                        CatalogError::InvalidToken("Invalid token signature".to_string())
                    }
                    ErrorKind::InvalidIssuer => {
                        CatalogError::InvalidToken("Invalid token issuer".to_string())
                    }
                    ErrorKind::InvalidAudience => {
                        CatalogError::InvalidToken("Invalid token audience".to_string())
                    }
                    _ => CatalogError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
