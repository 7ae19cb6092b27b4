//! Upstream-to-domain mappers.

use storefront_core::{Category, Product};
use storefront_upstream::UpstreamProductRecord;

/// Converts one upstream record into a domain product.
///
/// Scalars are copied as-is and the flat category string is wrapped into a
/// [`Category`] with a zero id. Nothing is validated.
#[must_use]
pub fn to_domain(record: UpstreamProductRecord) -> Product {
    Product {
        id: record.id,
        title: record.title,
        description: record.description,
        price: record.price,
        image: record.image,
        category: Category::named(record.category),
    }
}

/// Converts a list of upstream records, keeping their order.
#[must_use]
pub fn to_domain_list(records: Vec<UpstreamProductRecord>) -> Vec<Product> {
    records.into_iter().map(to_domain).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_domain_copies_fields() {
        let record = UpstreamProductRecord {
            id: 1,
            title: "Product 1".to_string(),
            description: "Product 1 Description".to_string(),
            price: 100.0,
            image: "https://fakestoreapi.com/img/1.jpg".to_string(),
            category: "electronics".to_string(),
        };

        let product = to_domain(record);
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Product 1");
        assert_eq!(product.description, "Product 1 Description");
        assert_eq!(product.price, 100.0);
        assert_eq!(product.image, "https://fakestoreapi.com/img/1.jpg");
        assert_eq!(product.category.id, 0);
        assert_eq!(product.category.description, "electronics");
    }

    #[test]
    fn test_to_domain_accepts_blank_record() {
        let product = to_domain(UpstreamProductRecord::default());
        assert_eq!(product.id, 0);
        assert_eq!(product.category, Category::named(""));
    }

    #[test]
    fn test_to_domain_list_keeps_order() {
        let records = vec![
            UpstreamProductRecord { id: 3, ..Default::default() },
            UpstreamProductRecord { id: 1, ..Default::default() },
        ];

        let ids: Vec<i64> = to_domain_list(records).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
