//! Order resource types.
//!
//! Request types use plain fields for what the API requires and `Option` for
//! the rest. Response types are lenient: nearly every field is optional so a
//! sparse payload still decodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::{flexible_f64, option_timestamp};
use crate::services::shipment::ShipmentMethodType;

/// Whether an order goes into production or stays editable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// A regular order that is produced right away.
    #[default]
    Order,
    /// A draft that can be edited and later converted into an order.
    Draft,
    /// A value this SDK does not know yet. Received only; serializing it
    /// fails, so it is never sent to the API.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// The channel an order was placed through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderChannel {
    /// Placed from the Gelato dashboard.
    Ui,
    /// Placed through the API.
    Api,
    /// Placed by a connected Shopify store.
    Shopify,
    /// Placed by a connected Etsy store.
    Etsy,
    /// A value this SDK does not know yet. Received only; serializing it
    /// fails, so it is never sent to the API.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// The fulfillment status of an order or an order item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderFulfillmentStatus {
    /// The order was received.
    Created,
    /// The order passed validation.
    Passed,
    /// The order failed validation.
    Failed,
    /// The order was canceled.
    Canceled,
    /// The order was printed.
    Printed,
    /// The order was handed to the carrier.
    Shipped,
    /// The order is a draft.
    Draft,
    /// The order waits for manual approval.
    PendingApproval,
    /// The order's store is not connected.
    NotConnected,
    /// The order is on hold.
    OnHold,
    /// A value this SDK does not know yet. Received only; serializing it
    /// fails, so it is never sent to the API.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// The financial status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderFinancialStatus {
    /// The order is a draft.
    Draft,
    /// Payment is pending.
    Pending,
    /// An invoice was issued.
    Invoiced,
    /// An invoice will be issued.
    ToBeInvoiced,
    /// The order was paid.
    Paid,
    /// The order was canceled.
    Canceled,
    /// Part of the payment was refunded.
    PartiallyRefunded,
    /// The payment was refunded.
    Refunded,
    /// The payment was refused.
    Refused,
    /// A value this SDK does not know yet. Received only; serializing it
    /// fails, so it is never sent to the API.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Which print area a file is used for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FileType {
    /// The main print area.
    #[default]
    Default,
    /// The back side.
    Back,
    /// Inside of the neck.
    NeckInner,
    /// Outside of the neck.
    NeckOuter,
    /// The left sleeve.
    SleeveLeft,
    /// The right sleeve.
    SleeveRight,
    /// The inside of a product.
    Inside,
    /// A value this SDK does not know yet. Received only; serializing it
    /// fails, so it is never sent to the API.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// A print file attached to an order item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrintFile {
    /// Publicly reachable URL of the file.
    pub url: String,
    /// The print area this file is for.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
}

/// Kind of a generated item preview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemPreviewType {
    /// Full-size preview.
    PreviewDefault,
    /// Thumbnail preview.
    PreviewThumbnail,
    /// A value this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// A preview image of an order item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemPreview {
    /// The preview kind.
    #[serde(rename = "type")]
    pub preview_type: ItemPreviewType,
    /// URL of the preview image.
    pub url: String,
}

/// An extra product attached to an order item, such as an envelope.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemOption {
    /// Option id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Option kind, e.g. `"envelope"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub option_type: Option<String>,
    /// Product UID of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_uid: Option<String>,
    /// How many to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// A line item of an existing order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Gelato item id.
    pub id: String,
    /// Your reference for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_reference_id: Option<String>,
    /// Product UID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_uid: Option<String>,
    /// Page count for multipage products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Number of copies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Item fulfillment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<OrderFulfillmentStatus>,
    /// Print files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PrintFile>,
    /// URL of the file Gelato produced from `files`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_file_url: Option<String>,
    /// Generated previews.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previews: Vec<ItemPreview>,
    /// Extra products attached to the item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ItemOption>,
}

/// One parcel of a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPackage {
    /// Package id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Items shipped in this package.
    #[serde(default)]
    pub order_item_ids: Vec<String>,
    /// Carrier tracking code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
    /// Carrier tracking URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
}

/// Shipment details of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipment {
    /// Shipment id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the shipment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_method_name: Option<String>,
    /// UID of the shipment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_method_uid: Option<String>,
    /// Number of parcels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_count: Option<u32>,
    /// Fastest delivery estimate in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_delivery_days: Option<u32>,
    /// Slowest delivery estimate in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delivery_days: Option<u32>,
    /// Earliest delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_delivery_date: Option<String>,
    /// Latest delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delivery_date: Option<String>,
    /// Total weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,
    /// Country the order is produced in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_country: Option<String>,
    /// Parcels.
    #[serde(default)]
    pub packages: Vec<ShipmentPackage>,
}

/// The entity an order is billed to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BillingEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A recipient address.
///
/// Used as the shipping address of new orders and as the recipient of quotes.
/// Brazilian recipients additionally need the tax fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Present on addresses returned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub post_code: String,
    /// Required for US, CA and AU addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Two-letter ISO 3166-1 country code.
    pub country: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_business: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federal_tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_state_code: Option<String>,
}

/// Overrides for the sender address printed on the parcel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReturnAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One line of a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Sent as a string by the API.
    #[serde(default, with = "flexible_f64")]
    pub price_base: f64,
    /// Sent as a string by the API.
    #[serde(default, with = "flexible_f64")]
    pub amount: f64,
    #[serde(default)]
    pub price_initial: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub vat: f64,
    #[serde(default)]
    pub price_incl_vat: f64,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A price breakdown issued for an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    pub id: Option<String>,
    pub order_id: Option<String>,
    pub transaction_type: Option<String>,
    pub currency: Option<String>,
    pub items: Vec<ReceiptItem>,
    pub products_price_initial: f64,
    pub products_price_discount: f64,
    pub products_price: f64,
    pub products_price_vat: f64,
    pub products_price_incl_vat: f64,
    pub packaging_price_initial: f64,
    pub packaging_price_discount: f64,
    pub packaging_price: f64,
    pub packaging_price_vat: f64,
    pub packaging_price_incl_vat: f64,
    pub shipping_price_initial: f64,
    pub shipping_price_discount: f64,
    pub shipping_price: f64,
    pub shipping_price_vat: f64,
    pub shipping_price_incl_vat: f64,
    pub discount: f64,
    pub discount_vat: f64,
    pub discount_incl_vat: f64,
    pub total_initial: f64,
    pub total: f64,
    pub total_vat: f64,
    pub total_incl_vat: f64,
}

/// A full order as returned by get, create and patch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Gelato order id.
    pub id: String,
    /// `order` or `draft`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Your internal order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_reference_id: Option<String>,
    /// Your internal customer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<OrderFulfillmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<OrderFinancialStatus>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<OrderChannel>,
    /// Set when the order came from a connected store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<OrderShipment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_entity: Option<BillingEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<ReturnAddress>,
    #[serde(default)]
    pub receipts: Vec<Receipt>,
    /// Sibling orders when one order is produced in several locations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connected_order_ids: Vec<String>,
}

/// A line item of a new order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    /// Your reference for this item; unique within the order.
    pub item_reference_id: String,
    pub product_uid: String,
    /// Total page count, covers included. Only for multipage products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Required for printable products.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PrintFile>,
    /// At least 1.
    pub quantity: u32,
}

/// A key-value pair stored with an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderMetadata {
    pub key: String,
    pub value: String,
}

/// Body of a create-order call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Defaults to `order` on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    pub order_reference_id: String,
    pub customer_reference_id: String,
    /// ISO 4217 currency code the order is charged in.
    pub currency: String,
    pub items: Vec<CreateOrderItem>,
    /// At most 20 entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<OrderMetadata>,
    pub shipping_address: ShippingAddress,
    /// `normal`, `express` or a UID from a quote. Cheapest when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_method_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<ReturnAddress>,
}

/// Item changes sent when converting a draft.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatchOrderItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PrintFile>,
}

/// Body of a patch-draft call.
///
/// Set `order_type` to [`OrderType::Order`] to convert the draft into a
/// regular order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatchOrderRequest {
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<PatchOrderItem>,
}

/// Filters for an order search. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchOrdersRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_reference_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fulfillment_statuses: Vec<OrderFulfillmentStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub financial_statuses: Vec<OrderFinancialStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<OrderChannel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub start_date: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub end_date: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// An order as listed by a search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<OrderFulfillmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<OrderFinancialStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<OrderChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "option_timestamp", skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<DateTime<Utc>>,
}

/// Result of an order search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchOrdersResponse {
    #[serde(default)]
    pub orders: Vec<OrderSummary>,
}

/// A product to price in a quote.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteProduct {
    pub item_reference_id: String,
    pub product_uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PrintFile>,
    pub quantity: u32,
}

/// Body of a quote call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOrderRequest {
    pub order_reference_id: String,
    pub customer_reference_id: String,
    pub recipient: ShippingAddress,
    pub products: Vec<QuoteProduct>,
    pub currency: String,
    /// Let the API split the order across production sites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multiple_quotes: Option<bool>,
}

/// A priced product in a quote.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotedProduct {
    pub item_reference_id: String,
    pub product_uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PrintFile>,
    pub quantity: u32,
    pub price: f64,
    pub currency: String,
}

/// A shipment option offered by a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotedShipmentMethod {
    pub name: String,
    pub shipment_method_uid: String,
    pub price: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_delivery_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delivery_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delivery_date: Option<String>,
    #[serde(rename = "type")]
    pub method_type: ShipmentMethodType,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_business: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_parcels: Option<u32>,
}

/// One production option of a quote.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    #[serde(default)]
    pub item_reference_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_country: Option<String>,
    #[serde(default)]
    pub shipment_methods: Vec<QuotedShipmentMethod>,
    #[serde(default)]
    pub products: Vec<QuotedProduct>,
}

/// Result of a quote call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOrderResponse {
    pub order_reference_id: String,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_deserializes_from_api_payload() {
        let order: Order = serde_json::from_value(json!({
            "id": "37365096-6ba5-4d4e-a3ca-8ad01a8e8a33",
            "orderType": "order",
            "orderReferenceId": "my-order-1",
            "customerReferenceId": "customer-1",
            "fulfillmentStatus": "pending_approval",
            "financialStatus": "to_be_invoiced",
            "currency": "EUR",
            "channel": "api",
            "createdAt": "2023-06-13T11:02:14+0000",
            "updatedAt": "2023-06-13T11:02:15Z",
            "items": [{
                "id": "item-1",
                "itemReferenceId": "ref-1",
                "productUid": "cards_pf_bx_pt_110-lb-cover-uncoated_cl_4-4_hor",
                "quantity": 2,
                "fulfillmentStatus": "created",
                "files": [{ "url": "https://example.com/a.pdf", "type": "default" }],
                "previews": [{ "type": "preview_thumbnail", "url": "https://example.com/p.png" }]
            }],
            "receipts": [{
                "id": "r-1",
                "currency": "EUR",
                "items": [{ "id": "ri-1", "priceBase": "1.50", "amount": "2" }],
                "total": 11.5
            }],
            "billingEntity": { "companyName": "ACME", "postCode": "10115" }
        }))
        .unwrap();

        assert_eq!(order.order_type, Some(OrderType::Order));
        assert_eq!(
            order.fulfillment_status,
            Some(OrderFulfillmentStatus::PendingApproval)
        );
        assert_eq!(order.financial_status, Some(OrderFinancialStatus::ToBeInvoiced));
        assert_eq!(order.channel, Some(OrderChannel::Api));
        assert!(order.created_at.is_some());
        assert_eq!(order.items[0].files[0].file_type, Some(FileType::Default));
        assert_eq!(
            order.items[0].previews[0].preview_type,
            ItemPreviewType::PreviewThumbnail
        );
        assert!((order.receipts[0].items[0].price_base - 1.5).abs() < f64::EPSILON);
        assert!((order.receipts[0].total - 11.5).abs() < f64::EPSILON);
        assert_eq!(
            order.billing_entity.unwrap().post_code.as_deref(),
            Some("10115")
        );
    }

    #[test]
    fn test_unknown_status_values_do_not_fail() {
        let summary: OrderSummary = serde_json::from_value(json!({
            "id": "o-1",
            "fulfillmentStatus": "teleported",
            "financialStatus": "crypto",
            "channel": "tiktok"
        }))
        .unwrap();

        assert_eq!(summary.fulfillment_status, Some(OrderFulfillmentStatus::Unknown));
        assert_eq!(summary.financial_status, Some(OrderFinancialStatus::Unknown));
        assert_eq!(summary.channel, Some(OrderChannel::Unknown));
    }

    #[test]
    fn test_create_order_request_serializes_camel_case_and_skips_unset() {
        let request = CreateOrderRequest {
            order_reference_id: "ref".to_string(),
            customer_reference_id: "cust".to_string(),
            currency: "USD".to_string(),
            items: vec![CreateOrderItem {
                item_reference_id: "item".to_string(),
                product_uid: "uid".to_string(),
                quantity: 1,
                ..Default::default()
            }],
            shipping_address: ShippingAddress {
                first_name: "Ada".to_string(),
                country: "US".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["orderReferenceId"], "ref");
        assert_eq!(value["items"][0]["productUid"], "uid");
        assert_eq!(value["shippingAddress"]["firstName"], "Ada");
        assert!(value.get("orderType").is_none());
        assert!(value.get("metadata").is_none());
        assert!(value["items"][0].get("files").is_none());
        assert!(value["shippingAddress"].get("id").is_none());
    }

    #[test]
    fn test_empty_search_request_serializes_to_empty_object() {
        let value = serde_json::to_value(SearchOrdersRequest::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_patch_request_serializes_order_type() {
        let value = serde_json::to_value(PatchOrderRequest::default()).unwrap();
        assert_eq!(value, json!({ "orderType": "order" }));
    }

    #[test]
    fn test_unknown_statuses_decode_but_do_not_serialize() {
        let status: OrderFulfillmentStatus = serde_json::from_value(json!("teleported")).unwrap();
        assert_eq!(status, OrderFulfillmentStatus::Unknown);

        let file_type: FileType = serde_json::from_value(json!("hologram")).unwrap();
        assert!(serde_json::to_value(file_type).is_err());

        let filter = SearchOrdersRequest {
            fulfillment_statuses: vec![status],
            ..Default::default()
        };
        assert!(serde_json::to_value(&filter).is_err());
    }
}
