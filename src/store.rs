// src/store.rs
use crate::client::ProductClient;
use crate::dtos::product::ProductDraft;
use crate::error::ApiError;
use crate::models::product::Product;

/// In-memory mirror of the remote product collection.
///
/// Every mutation runs the remote call first and touches the local sequence
/// only once the server has confirmed, so the view here is always the last
/// server-confirmed state. On any error the sequence is left as it was.
pub struct ProductStore {
    client: ProductClient,
    products: Vec<Product>,
}

impl ProductStore {
    /// Starts empty; call [`refresh`](Self::refresh) to populate.
    pub fn new(client: ProductClient) -> Self {
        Self {
            client,
            products: Vec::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replaces the whole local sequence with the server's, no merging.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let products = self.client.list_all().await?;
        self.products = products;
        Ok(())
    }

    /// Creates the product remotely, then appends it to the local sequence.
    pub async fn add(&mut self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let created = self.client.create(draft).await?;
        self.products.push(created.clone());
        Ok(created)
    }

    /// Deletes the product remotely, then filters it out locally. Removing
    /// an id the local view never held is a remote-confirmed no-op here.
    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.client.delete(id).await?;
        self.products.retain(|p| p.id != id);
        Ok(())
    }

    /// Updates the product remotely, then swaps the server's record into the
    /// same position locally.
    pub async fn replace(&mut self, id: &str, draft: &ProductDraft) -> Result<Product, ApiError> {
        let updated = self.client.update(id, draft).await?;
        for product in &mut self.products {
            if product.id == id {
                *product = updated.clone();
            }
        }
        Ok(updated)
    }
}
