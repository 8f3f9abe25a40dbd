use mongodb::bson::{Document, doc};

/// Optional product predicates, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the title.
    pub text_query: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
}

impl ProductFilter {
    /// Build the MongoDB filter document. An empty filter matches everything.
    pub fn to_document(&self) -> Document {
        let mut doc = doc! {};

        if let Some(ref text) = self.text_query {
            doc.insert(
                "title",
                doc! { "$regex": regex::escape(text), "$options": "i" },
            );
        }

        if let Some(ref category) = self.category {
            doc.insert("category", category.as_str());
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let mut price_filter = doc! {};
            if let Some(min) = self.min_price {
                price_filter.insert("$gte", min);
            }
            if let Some(max) = self.max_price {
                price_filter.insert("$lte", max);
            }
            doc.insert("price", price_filter);
        }

        doc
    }
}
