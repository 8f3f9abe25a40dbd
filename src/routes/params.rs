use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    store::ProductFilter,
};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive title substring; takes precedence over `text_query`
    pub q: Option<String>,
    /// Same as `q`, used only when `q` is absent or empty
    pub text_query: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Inclusive minimum price, must be finite
    pub min_price: Option<f64>,
    /// Inclusive maximum price, must be finite
    pub max_price: Option<f64>,
}

impl ProductQuery {
    /// Empty text parameters count as absent. `NaN` and infinite bounds are
    /// rejected.
    pub fn into_filter(self) -> AppResult<ProductFilter> {
        let min_price = finite_bound("min_price", self.min_price)?;
        let max_price = finite_bound("max_price", self.max_price)?;
        let text_query = self
            .q
            .filter(|s| !s.is_empty())
            .or(self.text_query.filter(|s| !s.is_empty()));

        Ok(ProductFilter {
            text_query,
            category: self.category.filter(|s| !s.is_empty()),
            min_price,
            max_price,
        })
    }
}

fn finite_bound(name: &str, value: Option<f64>) -> AppResult<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() => Err(AppError::Validation {
            field: Some(name.to_string()),
            message: "must be a finite number".to_string(),
        }),
        other => Ok(other),
    }
}
