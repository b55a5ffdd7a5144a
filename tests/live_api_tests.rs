//! End-to-end tests against the real Gelato API.
//!
//! These tests are ignored by default. To run them, put a `GELATO_API_KEY`
//! into the environment or a `.env` file and run:
//!
//! ```text
//! cargo test --test live_api_tests -- --ignored
//! ```
//!
//! They only call read endpoints and never create orders.

use std::sync::Arc;

use gelato_api::services::products::{PriceQuery, ProductSearchFilter};
use gelato_api::services::shipment::ShipmentMethodsQuery;
use gelato_api::{ClientOptions, ClientRegistry, GelatoClient, HttpError};

fn live_client() -> Arc<GelatoClient> {
    dotenvy::dotenv().ok();
    ClientRegistry::new()
        .initialize_default_client(ClientOptions::default())
        .expect("GELATO_API_KEY must be set to run live tests")
}

#[tokio::test]
#[ignore = "requires GELATO_API_KEY"]
async fn test_live_catalog_and_product_lookup() {
    let products = live_client().products().unwrap();

    let catalogs = products.get_catalogs().await.unwrap();
    assert!(!catalogs.data.is_empty());

    let catalog_uid = catalogs.data[0].catalog_uid.clone();
    let catalog = products.get_catalog(&catalog_uid).await.unwrap();
    assert_eq!(catalog.catalog_uid, catalog_uid);

    let search = products
        .get_products(&catalog_uid, &ProductSearchFilter::default().limit(1))
        .await
        .unwrap();
    if let Some(product) = search.products.first() {
        let detail = products.get_product(&product.product_uid).await.unwrap();
        assert_eq!(detail.product.product_uid, product.product_uid);

        let query = PriceQuery {
            country: Some("US".to_string()),
            ..Default::default()
        };
        match products.get_product_prices(&product.product_uid, &query).await {
            Ok(_) | Err(HttpError::Response(_)) => {}
            Err(other) => panic!("Unexpected error: {other:?}"),
        }
    }
}

#[tokio::test]
#[ignore = "requires GELATO_API_KEY"]
async fn test_live_shipment_methods() {
    let response = live_client()
        .shipment()
        .unwrap()
        .get_shipment_methods(&ShipmentMethodsQuery {
            country: Some("US".to_string()),
        })
        .await
        .unwrap();

    assert!(!response.shipment_methods.is_empty());
}

#[tokio::test]
#[ignore = "requires GELATO_API_KEY"]
async fn test_live_unknown_order_is_not_found() {
    let error = live_client()
        .orders()
        .unwrap()
        .get_order("00000000-0000-0000-0000-000000000000")
        .await
        .unwrap_err();

    assert!(error.status().is_some());
}
