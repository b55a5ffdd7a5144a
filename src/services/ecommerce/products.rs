//! Store product types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::option_timestamp;

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Field store products can be sorted by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StoreProductOrderBy {
    CreatedAt,
    UpdatedAt,
}

/// Query for listing the products of a store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreProductListQuery {
    /// Defaults to `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Defaults to `createdAt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<StoreProductOrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// At most 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Publishing state of a store product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreProductStatus {
    Created,
    Publishing,
    PublishingError,
    Active,
    /// A value this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// Whether a store variant is linked to a Gelato product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VariantConnectionStatus {
    Connected,
    NotConnected,
    Ignored,
    /// A value this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// A variant of a store product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreProductVariant {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Variant id in your store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<VariantConnectionStatus>,
}

/// An option products vary by, with its values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariantOption {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// A product of a connected store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreProduct {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Product id in your store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishing_error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StoreProductStatus>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub variants: Vec<StoreProductVariant>,
    #[serde(default)]
    pub product_variant_options: Vec<ProductVariantOption>,
}

/// Result of listing store products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreProductList {
    #[serde(default)]
    pub products: Vec<StoreProduct>,
}

/// How an image fills its placeholder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitMethod {
    /// Fill and crop.
    #[default]
    Slice,
    /// Fit inside without cropping.
    Meet,
}

/// An image to place into a template placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImagePlaceholder {
    /// Placeholder name as defined in the template.
    pub name: String,
    /// jpg, jpeg, png or pdf.
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_method: Option<FitMethod>,
}

/// Variant overrides for a product created from a template.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductVariant {
    pub template_variant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_placeholders: Vec<ProductImagePlaceholder>,
}

/// Body of a create-from-template call.
///
/// Template variants not listed in `variants` are created from the template
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductFromTemplateRequest {
    pub template_id: String,
    pub title: String,
    pub description: String,
    /// Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible_in_the_online_store: Option<bool>,
    /// `web` or `global` (Shopify only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sales_channels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<CreateProductVariant>,
    /// Up to 13 tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Result of creating a product from a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedStoreProduct {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StoreProductStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_query_serializes_enum_values() {
        let query = StoreProductListQuery {
            order: Some(SortOrder::Asc),
            order_by: Some(StoreProductOrderBy::UpdatedAt),
            limit: Some(50),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "order": "asc", "orderBy": "updatedAt", "limit": 50 })
        );
    }

    #[test]
    fn test_store_product_deserializes() {
        let product: StoreProduct = serde_json::from_value(json!({
            "id": "p-1",
            "storeId": "s-1",
            "title": "Poster",
            "description": "<p>Nice</p>",
            "status": "publishing_error",
            "publishedAt": null,
            "createdAt": "2023-06-13T11:02:14+0000",
            "variants": [{ "id": "v-1", "title": "A4", "connectionStatus": "not_connected" }],
            "productVariantOptions": [{ "name": "Size", "values": ["A4", "A3"] }]
        }))
        .unwrap();

        assert_eq!(product.status, Some(StoreProductStatus::PublishingError));
        assert!(product.published_at.is_none());
        assert!(product.created_at.is_some());
        assert_eq!(
            product.variants[0].connection_status,
            Some(VariantConnectionStatus::NotConnected)
        );
        assert_eq!(product.product_variant_options[0].values.len(), 2);
    }

    #[test]
    fn test_create_request_omits_unset_fields() {
        let request = CreateProductFromTemplateRequest {
            template_id: "t-1".to_string(),
            title: "Poster".to_string(),
            description: "desc".to_string(),
            variants: vec![CreateProductVariant {
                template_variant_id: "tv-1".to_string(),
                image_placeholders: vec![ProductImagePlaceholder {
                    name: "ImageFront".to_string(),
                    file_url: "https://example.com/a.png".to_string(),
                    fit_method: Some(FitMethod::Meet),
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["templateId"], "t-1");
        assert_eq!(value["variants"][0]["imagePlaceholders"][0]["fitMethod"], "meet");
        assert!(value.get("tags").is_none());
        assert!(value.get("isVisibleInTheOnlineStore").is_none());
    }
}
