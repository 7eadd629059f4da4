//! # Wire DTOs
//!
//! Data transfer objects matching the catalog's JSON shape.
//!
//! ## Why DTOs?
//! - Decouples the wire contract from the domain model
//! - The catalog sends decimal prices; the domain holds integer cents
//! - camelCase field names stay an API detail, not a domain one
//!
//! ## Wire Shape
//! ```json
//! {
//!   "id": "7b0c…",
//!   "name": "Wireless Headphones",
//!   "brand": "Acme",
//!   "description": "Over-ear, noise cancelling",
//!   "price": 4999.00,
//!   "category": "Headphone",
//!   "stockQuantity": 12,
//!   "productAvailable": true,
//!   "imageData": "iVBORw0KGgo…"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use shopfront_core::{Category, Product};

/// One product as the catalog serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal price as served. Converted to cents on ingest; the domain
    /// never holds a float price.
    pub price: f64,
    pub category: Category,
    pub stock_quantity: u32,
    pub product_available: bool,
    #[serde(default)]
    pub image_data: Option<String>,
}

impl TryFrom<ProductDto> for Product {
    type Error = ApiError;

    /// Converts the wire shape into the domain product.
    ///
    /// The decimal price becomes integer cents, rounded. Rejects prices
    /// that are non-finite or whose cents value does not fit an `i64`
    /// instead of silently saturating on hostile wire data.
    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        let cents = (dto.price * 100.0).round();
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(ApiError::BadPrice {
                id: dto.id,
                price: dto.price,
            });
        }

        Ok(Product {
            id: dto.id,
            name: dto.name,
            brand: dto.brand,
            description: dto.description,
            price_cents: cents as i64,
            category: dto.category,
            stock_quantity: dto.stock_quantity,
            product_available: dto.product_available,
            image_data: dto.image_data,
        })
    }
}
