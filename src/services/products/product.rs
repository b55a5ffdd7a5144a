//! Product types and the product search filter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A value to filter a product attribute by.
///
/// Lists match any of their elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttributeFilterValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<AttributeFilterValue>),
}

impl From<&str> for AttributeFilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeFilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttributeFilterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeFilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for AttributeFilterValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Filter for searching the products of a catalog.
///
/// # Example
///
/// ```rust
/// use gelato_api::services::products::ProductSearchFilter;
///
/// let filter = ProductSearchFilter::default()
///     .attribute("Orientation", "hor")
///     .attribute("PaperFormat", vec!["A4", "A5"])
///     .limit(3);
///
/// assert_eq!(filter.limit, Some(3));
/// assert_eq!(filter.attribute_filters.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchFilter {
    /// Attribute UID to accepted value(s).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attribute_filters: HashMap<String, AttributeFilterValue>,
    /// Defaults to 0 on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// At most 500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ProductSearchFilter {
    /// Adds an attribute filter.
    #[must_use]
    pub fn attribute(
        mut self,
        attribute_uid: impl Into<String>,
        value: impl Into<AttributeFilterValue>,
    ) -> Self {
        self.attribute_filters
            .insert(attribute_uid.into(), value.into());
        self
    }

    /// Sets the offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A quantity with its unit, e.g. `{ "value": 12.5, "measureUnit": "grams" }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeasureUnit {
    pub value: f64,
    #[serde(default)]
    pub measure_unit: String,
}

/// Per-attribute value counts of a search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterHits {
    #[serde(default)]
    pub attribute_hits: HashMap<String, serde_json::Value>,
}

/// A product as listed by a catalog search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_uid: String,
    /// Attribute UID to attribute value UID.
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<MeasureUnit>,
    /// Named dimensions such as `Width` or `Height`.
    #[serde(default)]
    pub dimensions: HashMap<String, MeasureUnit>,
    #[serde(default)]
    pub supported_countries: Vec<String>,
}

/// Result of a catalog product search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductSearchResponse {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub hits: FilterHits,
}

/// Result of `GET products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub is_stockable: bool,
    #[serde(default)]
    pub is_printable: bool,
    /// Page counts accepted for multipage products.
    #[serde(default)]
    pub valid_page_counts: Vec<u32>,
    #[serde(default)]
    pub not_supported_countries: Vec<String>,
}
