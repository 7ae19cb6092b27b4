//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{CatalogError, CatalogResult};

/// Prefix given to every scope when it becomes an authority.
const AUTHORITY_PREFIX: &str = "SCOPE_";

/// A claim that may be a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn values(&self) -> Vec<&str> {
        match self {
            Self::One(value) => value.split_whitespace().collect(),
            Self::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// JWT claims structure.
///
/// Only the registered claims and the OAuth2 scope claims are read; anything
/// else in the token is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject.
    #[serde(default)]
    pub sub: String,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issued at timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<OneOrMany>,

    /// Space-separated scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<OneOrMany>,

    /// Scopes under the alternative `scp` name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scp: Option<OneOrMany>,
}

impl Claims {
    /// Creates claims for `subject` carrying `scopes`.
    #[must_use]
    pub fn new(subject: impl Into<String>, scopes: &[&str], expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject.into(),
            exp: expires_at.timestamp(),
            iat: Some(Utc::now().timestamp()),
            iss: None,
            aud: None,
            scope: Some(OneOrMany::One(scopes.join(" "))),
            scp: None,
        }
    }

    /// Returns the granted scopes. `scope` wins over `scp` when both exist.
    #[must_use]
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_ref()
            .or(self.scp.as_ref())
            .map(OneOrMany::values)
            .unwrap_or_default()
    }

    /// Returns the scopes as authorities, e.g. `SCOPE_ADMIN`.
    #[must_use]
    pub fn authorities(&self) -> Vec<String> {
        self.scopes()
            .into_iter()
            .map(|scope| format!("{}{}", AUTHORITY_PREFIX, scope))
            .collect()
    }

    /// Checks if the token grants `authority`.
    #[must_use]
    pub fn has_authority(&self, authority: &str) -> bool {
        authority
            .strip_prefix(AUTHORITY_PREFIX)
            .is_some_and(|scope| self.scopes().contains(&scope))
    }

    /// Requires `authority`, failing with `Forbidden` otherwise.
    pub fn require_authority(&self, authority: &str) -> CatalogResult<()> {
        if self.has_authority(authority) {
            Ok(())
        } else {
            Err(CatalogError::forbidden(format!(
                "Required authority: {}",
                authority
            )))
        }
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}
