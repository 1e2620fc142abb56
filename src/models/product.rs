// src/models/product.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Product {
    pub id: i64,               // Unique ID for the product
    pub user_id: i64,          // ID of the user selling it
    pub name: String,          // Product name
    pub price: i64,            // Asking price in whole currency units
    pub description: String,   // Seller-written description
    pub image: Option<String>, // Optional image key, not populated yet
    pub created_at: String,    // RFC 3339 creation timestamp
}

/// Payload accepted by the product creation endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProductsResponse {
    pub ok: bool,
    pub products: Vec<Product>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProductResponse {
    pub ok: bool,
    pub product: Product,
}
