//! Template types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::option_timestamp;

/// A value a template variant is split by.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariantOption {
    pub name: String,
    pub value: String,
}

/// Print area of a template image placeholder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PrintArea {
    Front,
    Back,
    NeckInner,
    NeckOuter,
    SleeveLeft,
    SleeveRight,
    /// A value this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// An image slot of a template variant. Sizes are in millimetres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateImagePlaceholder {
    pub name: String,
    pub print_area: PrintArea,
    pub height: f64,
    pub width: f64,
}

/// A variant of a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariant {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub product_uid: String,
    #[serde(default)]
    pub variant_options: Vec<VariantOption>,
    #[serde(default)]
    pub image_placeholders: Vec<TemplateImagePlaceholder>,
}

/// Result of `GET templates/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub template_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub variants: Vec<TemplateVariant>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Looks up a variant by id.
    #[must_use]
    pub fn variant(&self, variant_id: &str) -> Option<&TemplateVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}
