use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub image: Option<String>,
}

/// A product document as read back from the `product` collection.
///
/// Documents may have been written out-of-band, so everything except the
/// identifier tolerates being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The shape written on insert; the store assigns `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub image: Option<String>,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            description: doc.description,
            price: doc.price,
            category: doc.category,
            in_stock: doc.in_stock.unwrap_or(true),
            image: doc.image,
        }
    }
}

impl NewProduct {
    /// Attach a store-assigned identifier, producing the stored document.
    pub fn into_document(self, id: ObjectId) -> ProductDocument {
        ProductDocument {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: Some(self.in_stock),
            image: self.image,
        }
    }
}
