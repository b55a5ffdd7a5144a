//! Cover dimension types for multipage products such as photo books.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Query for cover dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoverDimensionsQuery {
    /// Total page count of the product.
    pub page_count: u32,
    /// Unit of the returned sizes, e.g. `mm` or `inch`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_unit: Option<String>,
}

impl CoverDimensionsQuery {
    /// Creates a query for `page_count` pages in the server's default unit.
    #[must_use]
    pub const fn new(page_count: u32) -> Self {
        Self {
            page_count,
            measure_unit: None,
        }
    }
}

/// Size (and optionally position) of one cover area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DimensionAttribute {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub left: Option<f64>,
    pub top: Option<f64>,
}

/// Result of `GET products/{id}/cover-dimensions`.
///
/// The set of areas depends on the product, so they are kept by name.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoverDimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_unit: Option<String>,
    /// Every other field of the response, keyed by its JSON name.
    #[serde(flatten)]
    pub areas: HashMap<String, serde_json::Value>,
}

impl CoverDimensions {
    /// Returns a named area, e.g. `"wraparoundEdgeSize"`, if it has the
    /// width/height shape.
    #[must_use]
    pub fn area(&self, name: &str) -> Option<DimensionAttribute> {
        self.areas
            .get(name)
            .filter(|value| value.is_object())
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_serializes_camel_case() {
        let query = CoverDimensionsQuery {
            page_count: 30,
            measure_unit: Some("mm".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "pageCount": 30, "measureUnit": "mm" })
        );
        assert_eq!(
            serde_json::to_value(CoverDimensionsQuery::new(24)).unwrap(),
            json!({ "pageCount": 24 })
        );
    }

    #[test]
    fn test_cover_dimensions_keeps_named_areas() {
        let dims: CoverDimensions = serde_json::from_value(json!({
            "productUid": "photobook",
            "pageCount": 30,
            "measureUnit": "mm",
            "wraparoundEdgeSize": { "width": 460.5, "height": 310.0 },
            "spineSize": { "width": 8.2, "height": 290.0, "left": 225.0, "top": 10.0 },
            "spinePositionFromLeft": 225.0
        }))
        .unwrap();

        assert_eq!(dims.page_count, Some(30));
        let edge = dims.area("wraparoundEdgeSize").unwrap();
        assert_eq!(edge.width, Some(460.5));
        assert!(edge.left.is_none());
        assert_eq!(dims.area("spineSize").unwrap().top, Some(10.0));
        assert!(dims.area("spinePositionFromLeft").is_none());
        assert!(dims.area("missing").is_none());
    }
}
