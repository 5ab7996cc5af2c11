// src/dtos/product.rs
use serde::Serialize;

use crate::error::ApiError;
use crate::models::product::Product;

/// User-entered product fields, kept as raw strings until validated.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

/// Wire payload for POST/PUT, produced by a successful validation.
#[derive(Debug, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}

impl ProductDraft {
    /// Every field must be filled in and the price must parse as a number.
    /// Runs before any request is issued.
    pub fn validate(&self) -> Result<ProductPayload, ApiError> {
        if self.name.trim().is_empty()
            || self.price.trim().is_empty()
            || self.description.trim().is_empty()
            || self.image.trim().is_empty()
        {
            return Err(ApiError::validation("Please fill in all fields"));
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ApiError::validation("Price must be a number"))?;

        Ok(ProductPayload {
            name: self.name.clone(),
            price,
            description: self.description.clone(),
            image: self.image.clone(),
        })
    }
}

// Pre-fill a draft from the current record for partial updates.
impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }
}
