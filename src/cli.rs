// src/cli.rs
use clap::{Parser, Subcommand};

use crate::dtos::product::ProductDraft;
use crate::error::ApiError;
use crate::models::product::Product;
use crate::store::ProductStore;

#[derive(Debug, Parser)]
#[command(
    name = "product-store",
    about = "Manage the product catalog over its REST API",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every product in the catalog
    List,
    /// Create a new product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        image: String,
    },
    /// Update a product; omitted fields keep their current value
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a product
    Delete { id: String },
}

pub async fn run(cli: Cli, store: &mut ProductStore) -> Result<(), ApiError> {
    match cli.command {
        Command::List => list(store).await,
        Command::Create {
            name,
            price,
            description,
            image,
        } => {
            let draft = ProductDraft {
                name,
                price,
                description,
                image,
            };
            let created = store.add(&draft).await?;
            print_product(&created);
            println!("Product created successfully");
            Ok(())
        }
        Command::Update {
            id,
            name,
            price,
            description,
            image,
        } => {
            // Fetch the current record first so omitted flags keep their value
            store.refresh().await?;
            let current = store
                .find(&id)
                .ok_or_else(|| ApiError::NotFound(format!("No product with id {id}")))?;

            let mut draft = ProductDraft::from(current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(price) = price {
                draft.price = price;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(image) = image {
                draft.image = image;
            }

            let updated = store.replace(&id, &draft).await?;
            print_product(&updated);
            println!("Product updated successfully");
            Ok(())
        }
        Command::Delete { id } => {
            store.remove(&id).await?;
            println!("Product deleted successfully");
            Ok(())
        }
    }
}

async fn list(store: &mut ProductStore) -> Result<(), ApiError> {
    store.refresh().await?;

    if store.products().is_empty() {
        println!("No products found. Create one with `product-store create`.");
        return Ok(());
    }
    for product in store.products() {
        print_product(product);
    }
    Ok(())
}

fn print_product(product: &Product) {
    println!("{}  {}  ${:.2}", product.id, product.name, product.price);
    println!("    {}", product.description);
    println!("    {}", product.image);
    if let Some(created_at) = product.created_at {
        println!("    created {}", created_at.to_rfc3339());
    }
}
