//! Route-to-authority table.

use crate::Claims;
use storefront_config::{RouteRuleConfig, SecurityConfig};
use storefront_core::{CatalogError, CatalogResult};

/// One row of the permission table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    path: String,
    methods: Vec<String>,
    authority: String,
}

impl RouteRule {
    /// Creates a rule for `path` (a router template such as
    /// `/products/:id`). An empty method list covers every method.
    #[must_use]
    pub fn new(path: impl Into<String>, methods: &[&str], authority: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: methods.iter().map(|m| m.to_ascii_uppercase()).collect(),
            authority: authority.into(),
        }
    }

    /// Returns true if the rule covers `method` on the route template.
    #[must_use]
    pub fn matches(&self, method: &str, route: &str) -> bool {
        self.path == route
            && (self.methods.is_empty() || self.methods.iter().any(|m| m.eq_ignore_ascii_case(method)))
    }

    /// Authority the rule requires.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }
}

impl From<&RouteRuleConfig> for RouteRule {
    fn from(config: &RouteRuleConfig) -> Self {
        let methods: Vec<&str> = config.methods.iter().map(String::as_str).collect();
        Self::new(config.path.clone(), &methods, config.authority.clone())
    }
}

/// Route permission table.
///
/// Rules are matched against the route template, not the concrete path, so
/// `/products/categories` is never mistaken for `/products/:id`. Routes with
/// no matching rule need no authority.
#[derive(Debug, Clone, Default)]
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
}

impl RoutePolicy {
    /// Creates a policy from explicit rules.
    #[must_use]
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Creates the policy configured under `security.route_rules`.
    #[must_use]
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(config.route_rules.iter().map(RouteRule::from).collect())
    }

    /// Policy that requires `SCOPE_ADMIN` on `/products/:id` only.
    #[must_use]
    pub fn admin_product_by_id() -> Self {
        Self::new(vec![RouteRule::new("/products/:id", &[], "SCOPE_ADMIN")])
    }

    /// Returns the authority needed for `method` on the route template.
    #[must_use]
    pub fn required_authority(&self, method: &str, route: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(method, route))
            .map(RouteRule::authority)
    }

    /// Decides whether the caller may use the route.
    ///
    /// `claims` is `None` when the request carried no valid token.
    pub fn authorize(
        &self,
        method: &str,
        route: &str,
        claims: Option<&Claims>,
    ) -> CatalogResult<()> {
        let Some(authority) = self.required_authority(method, route) else {
            return Ok(());
        };

        claims
            .ok_or_else(|| CatalogError::unauthorized("Bearer token required"))?
            .require_authority(authority)
    }

    /// Returns the rules.
    #[must_use]
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }
}
