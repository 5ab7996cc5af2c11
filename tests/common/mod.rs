//! Shared fixtures for the wiremock-backed integration tests.
#![allow(dead_code)]

use std::time::Duration;

use product_store::dtos::product::ProductDraft;
use product_store::{Config, ProductClient, ProductStore};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn store_for(server: &MockServer) -> ProductStore {
    let config = Config::new(server.uri(), Duration::from_secs(5));
    let client = ProductClient::new(&config).expect("client should build");
    ProductStore::new(client)
}

pub fn draft(name: &str, price: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: price.to_string(),
        description: format!("{name} description"),
        image: format!("http://img.test/{name}.png"),
    }
}

pub fn product_json(id: &str, name: &str, price: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "price": price,
        "description": format!("{name} description"),
        "image": format!("http://img.test/{name}.png"),
    })
}

/// Mounts a one-shot GET response and refreshes the store with it.
pub async fn seed(server: &MockServer, store: &mut ProductStore, products: Value) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": products })))
        .up_to_n_times(1)
        .mount(server)
        .await;
    store.refresh().await.expect("seeding refresh should succeed");
}
