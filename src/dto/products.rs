use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{error::AppError, models::NewProduct};

/// Field order used when reporting the first offending field.
const FIELD_ORDER: [&str; 6] = ["title", "description", "price", "category", "in_stock", "image"];

/// Required fields are optional here so a missing one is reported by the
/// validator, in field order, rather than by the JSON decoder.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must be a non-empty string")
    )]
    #[schema(required = true, value_type = String)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(
        required(message = "is required"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    #[schema(required = true, value_type = f64)]
    pub price: Option<f64>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must be a non-empty string")
    )]
    #[schema(required = true, value_type = String)]
    pub category: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl CreateProductRequest {
    /// Check field constraints and produce the document to insert.
    pub fn into_new_product(self) -> Result<NewProduct, AppError> {
        self.validate().map_err(first_offending_field)?;
        let (Some(title), Some(price), Some(category)) = (self.title, self.price, self.category)
        else {
            return Err(AppError::Validation {
                field: None,
                message: "title, price and category are required".to_string(),
            });
        };
        Ok(NewProduct {
            title,
            description: self.description,
            price,
            category,
            in_stock: self.in_stock,
            image: self.image,
        })
    }
}

fn first_offending_field(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let first = FIELD_ORDER
        .iter()
        .find_map(|field| {
            field_errors
                .get(*field)
                .map(|errs| (field.to_string(), errs.first()))
        })
        .or_else(|| {
            field_errors
                .iter()
                .next()
                .map(|(field, errs)| (field.to_string(), errs.first()))
        });

    match first {
        Some((field, err)) => {
            let message = err
                .and_then(|err| err.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            AppError::Validation {
                field: Some(field),
                message,
            }
        }
        None => AppError::Validation {
            field: None,
            message: errors.to_string(),
        },
    }
}
