//! Product and category entities.

use serde::{Deserialize, Serialize};

/// A catalog product as exposed by this service.
///
/// Products are never created locally: each instance is translated from a
/// single upstream record and is immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Upstream product identifier.
    pub id: i64,

    /// Product title.
    pub title: String,

    /// Long-form description.
    pub description: String,

    /// Unit price as reported upstream.
    pub price: f64,

    /// Image URL.
    pub image: String,

    /// Category the product belongs to.
    pub category: Category,
}

/// Product category.
///
/// The upstream only knows categories as flat strings, so `id` is always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    pub id: i64,
    pub description: String,
}

impl Category {
    /// Wraps an upstream category name.
    #[must_use]
    pub fn named(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_category_has_zero_id() {
        let category = Category::named("electronics");
        assert_eq!(category.id, 0);
        assert_eq!(category.description, "electronics");
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: 1,
            title: "Product 1".to_string(),
            description: "Product 1 Description".to_string(),
            price: 100.0,
            image: "https://example.com/1.png".to_string(),
            category: Category::named("jewelery"),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 100.0);
        assert_eq!(json["category"]["id"], 0);
        assert_eq!(json["category"]["description"], "jewelery");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
