//! Catalog types.
//!
//! A catalog groups products of one kind (posters, cards, ...) and lists the
//! attributes its products vary by.

use serde::{Deserialize, Serialize};

/// A catalog as listed by `GET catalogs`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub catalog_uid: String,
    #[serde(default)]
    pub title: String,
}

/// Paging information of a list response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    pub total: u64,
    pub offset: u64,
}

/// Result of `GET catalogs`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogList {
    #[serde(default)]
    pub data: Vec<Catalog>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// One possible value of a product attribute.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProductAttributeValue {
    pub product_attribute_value_uid: String,
    #[serde(default)]
    pub title: String,
}

/// An attribute products of a catalog vary by, such as paper format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProductAttribute {
    pub product_attribute_uid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub values: Vec<CatalogProductAttributeValue>,
}

/// Result of `GET catalogs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDetail {
    pub catalog_uid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub product_attributes: Vec<CatalogProductAttribute>,
}

impl CatalogDetail {
    /// Looks up an attribute by its UID.
    #[must_use]
    pub fn attribute(&self, product_attribute_uid: &str) -> Option<&CatalogProductAttribute> {
        self.product_attributes
            .iter()
            .find(|a| a.product_attribute_uid == product_attribute_uid)
    }
}
