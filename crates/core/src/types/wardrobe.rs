//! Wardrobe ("smart closet") items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ItemId;
use super::null_as_default;
use super::status::Category;

/// A single piece of clothing owned by a profile.
///
/// Sent without an `id` when created; the backend returns stored items with
/// one. Unset numbers are omitted from the JSON body rather than sent as
/// `null` or `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardrobeItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "Category::deserialize_lenient")]
    pub category: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warmth: Option<f64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_unset_numbers_are_omitted() {
        let item = WardrobeItem {
            owner_email: "a@x.com".to_string(),
            name: "Tee".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&item).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("price"));
        assert!(!obj.contains_key("warmth"));
        assert!(!obj.contains_key("id"));
        assert_eq!(obj["category"], "top");
    }

    #[test]
    fn test_price_is_a_json_number() {
        let item = WardrobeItem {
            price: Some(Decimal::from_str("1299.5").unwrap()),
            warmth: Some(3.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["price"], json!(1299.5));
        assert_eq!(value["warmth"], json!(3.0));
    }

    #[test]
    fn test_decode_listed_item() {
        let value = json!({
            "id": 12,
            "owner_email": "a@x.com",
            "name": "Oversized tee",
            "category": "top",
            "color": "black",
            "price": 1299,
            "tags": ["street"],
            "warmth": null,
            "brand": null
        });
        let item: WardrobeItem = serde_json::from_value(value).unwrap();
        assert_eq!(item.id, Some(ItemId::new("12")));
        assert_eq!(item.price, Some(Decimal::from(1299)));
        assert_eq!(item.warmth, None);
        assert!(item.brand.is_empty());
    }

    #[test]
    fn test_odd_category_does_not_fail_the_list() {
        let raw = r#"[
            {"owner_email": "a@x.com", "name": "Tee", "category": "top"},
            {"owner_email": "a@x.com", "name": "Kurta", "category": "ethnic"},
            {"owner_email": "a@x.com", "name": "Scarf", "category": null}
        ]"#;
        let items: Vec<WardrobeItem> = serde_json::from_str(raw).unwrap();
        let categories: Vec<Category> = items.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![Category::Top, Category::Other, Category::Top]
        );
        assert_eq!(items[1].name, "Kurta");
    }
}
