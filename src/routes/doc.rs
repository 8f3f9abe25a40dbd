use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::CreateProductRequest,
    models::Product,
    response::{ErrorResponse, MessageResponse},
    routes::{categories, health, params, products},
    services::diagnostics_service::DiagnosticsReport,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Electronics Store API"),
    paths(
        health::health_check,
        health::root,
        health::hello,
        health::diagnostics,
        products::list_products,
        products::get_product,
        products::create_product,
        categories::list_categories
    ),
    components(
        schemas(
            Product,
            CreateProductRequest,
            params::ProductQuery,
            health::HealthData,
            DiagnosticsReport,
            MessageResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness and diagnostic endpoints"),
        (name = "Products", description = "Product catalogue endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
