mod category;
mod product;

use crate::state::AppState;
use anyhow::Result;
use axum::{Json, http::StatusCode, response::IntoResponse, routing::any};
use serde_json::json;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::category::category_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
        (name = "Category", description = "Category endpoints"),
    )
)]
struct ApiDoc;

/// Liveness answer on the bare root, any method. Touches no store.
pub async fn ping_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": true,
            "message": "Ping Successfully!",
        })),
    )
}

pub async fn url_not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": false,
            "message": "URL Not Found",
            "data": null,
        })),
    )
}

pub struct AppRouter;

impl AppRouter {
    /// Resource routes first, the root ping next, the catch-all last.
    pub fn build(app_state: AppState) -> axum::Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(product_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .route("/", any(ping_handler));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
            .fallback(url_not_found_handler)
            .method_not_allowed_fallback(url_not_found_handler)
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
