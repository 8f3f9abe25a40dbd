pub mod diagnostics_service;
pub mod product_service;
