//! URLs of the shipment API (`v1`).

use crate::urls::combine_urls;

/// Root of the shipment API.
pub const SHIPMENT_API_ROOT: &str = "https://shipment.gelatoapis.com/v1/";

/// `shipment-methods`
#[must_use]
pub fn shipment_methods_url() -> String {
    combine_urls(SHIPMENT_API_ROOT, "shipment-methods")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipment_methods_url() {
        assert_eq!(
            shipment_methods_url(),
            "https://shipment.gelatoapis.com/v1/shipment-methods"
        );
    }
}
