// src/client.rs
use reqwest::StatusCode;
use tracing::{error, instrument};

use crate::config::Config;
use crate::dtos::product::ProductDraft;
use crate::dtos::response::{DataEnvelope, StatusEnvelope};
use crate::error::ApiError;
use crate::models::product::Product;

/// HTTP wrapper for the four CRUD operations on the product collection.
///
/// One round trip per operation, each outcome normalized into a `Result`.
/// Holds no catalog state; that is the store's job.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    // GET /api/products - list the full collection
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ApiError> {
        let res = self.http.get(self.collection_url()).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = error_message(&body, "Failed to fetch products");
            error!(status = status.as_u16(), %message, "Failed to fetch products");
            return Err(ApiError::remote(status, message));
        }

        let envelope: DataEnvelope<Vec<Product>> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    // POST /api/products - create a product
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let payload = draft.validate()?;

        let res = self
            .http
            .post(self.collection_url())
            .json(&payload)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = error_message(&body, "Failed to create product");
            error!(status = status.as_u16(), %message, "Failed to create product");
            return Err(ApiError::remote(status, message));
        }

        let envelope: DataEnvelope<Product> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    // PUT /api/products/{id} - replace a product
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: &str, draft: &ProductDraft) -> Result<Product, ApiError> {
        // Same rules as the create path
        let payload = draft.validate()?;

        let res = self
            .http
            .put(self.item_url(id))
            .json(&payload)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;

        reported_failure(status, &body, "Failed to update product").map_err(|e| {
            error!(status = status.as_u16(), error = %e, "Failed to update product");
            e
        })?;

        let envelope: DataEnvelope<Product> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    // DELETE /api/products/{id}
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let res = self.http.delete(self.item_url(id)).send().await?;
        let status = res.status();
        let body = res.text().await?;

        reported_failure(status, &body, "Failed to delete product").map_err(|e| {
            error!(status = status.as_u16(), error = %e, "Failed to delete product");
            e
        })
    }
}

/// Best-effort extraction of the server's message from an error body.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<StatusEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| fallback.to_string())
}

/// Update and delete signal failure two ways: a non-2xx status, or a 2xx
/// body carrying `success: false`.
fn reported_failure(status: StatusCode, body: &str, fallback: &str) -> Result<(), ApiError> {
    if !status.is_success() {
        return Err(ApiError::remote(status, error_message(body, fallback)));
    }
    let envelope: StatusEnvelope = serde_json::from_str(body).unwrap_or_default();
    if envelope.success == Some(false) {
        let message = envelope.message.unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::remote(status, message));
    }
    Ok(())
}
