//! Wire shapes exchanged with the upstream catalog API.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Decodes an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Product record as returned by the upstream.
///
/// `category` is a flat string. Missing and `null` fields decode to their
/// defaults, so a partial echo from the upstream still yields a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamProductRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

/// Request body sent to the upstream on create, replace and update.
///
/// Absent fields are left out of the JSON so a PATCH only carries what the
/// caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPayload {
    /// Product identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Product title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Long-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: UpstreamProductRecord =
            serde_json::from_str(r#"{"id":1,"title":"Product 1","price":100.0}"#).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.title, "Product 1");
        assert_eq!(record.price, 100.0);
        assert!(record.description.is_empty());
        assert!(record.category.is_empty());
    }

    #[test]
    fn test_record_treats_null_fields_as_defaults() {
        let record: UpstreamProductRecord = serde_json::from_str(
            r#"{"id":1,"title":"Product 1","description":null,"price":null,"image":null,"category":null}"#,
        )
        .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.title, "Product 1");
        assert!(record.description.is_empty());
        assert_eq!(record.price, 0.0);
        assert!(record.image.is_empty());
        assert!(record.category.is_empty());
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let record: UpstreamProductRecord = serde_json::from_str(
            r#"{"id":3,"title":"Jacket","rating":{"rate":4.7,"count":500},"category":"men's clothing"}"#,
        )
        .unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.category, "men's clothing");
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let payload = ProductPayload {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Renamed" }));
    }
}
