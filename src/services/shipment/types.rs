//! Shipment method types.

use serde::{Deserialize, Serialize};

/// The kind of shipping service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentMethodType {
    /// Standard delivery.
    Normal,
    /// Express delivery.
    Express,
    /// Pallet freight.
    Pallet,
    /// A value this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// Query for listing shipment methods.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShipmentMethodsQuery {
    /// ISO code of the destination country to filter by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A shipment method Gelato offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentMethod {
    pub shipment_method_uid: String,
    #[serde(rename = "type")]
    pub method_type: ShipmentMethodType,
    pub name: String,
    /// Suitable for business addresses.
    #[serde(default)]
    pub is_business: bool,
    /// Suitable for residential addresses.
    #[serde(default)]
    pub is_private: bool,
    /// Shipped parcels get a tracking code and URL.
    #[serde(default)]
    pub has_tracking: bool,
    /// Destination country codes this method delivers to.
    #[serde(default)]
    pub supported_countries: Vec<String>,
}

/// Result of listing shipment methods.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentMethodsResponse {
    #[serde(default)]
    pub shipment_methods: Vec<ShipmentMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shipment_methods_response_deserializes() {
        let response: ShipmentMethodsResponse = serde_json::from_value(json!({
            "shipmentMethods": [{
                "shipmentMethodUid": "dhl_global_parcel",
                "type": "normal",
                "name": "DHL Global Parcel",
                "isBusiness": true,
                "isPrivate": true,
                "hasTracking": true,
                "supportedCountries": ["DE", "AT"]
            }, {
                "shipmentMethodUid": "drone",
                "type": "airborne",
                "name": "Drone"
            }]
        }))
        .unwrap();

        let first = &response.shipment_methods[0];
        assert_eq!(first.method_type, ShipmentMethodType::Normal);
        assert!(first.has_tracking);
        assert_eq!(first.supported_countries, vec!["DE", "AT"]);

        let second = &response.shipment_methods[1];
        assert_eq!(second.method_type, ShipmentMethodType::Unknown);
        assert!(second.supported_countries.is_empty());
    }
}
