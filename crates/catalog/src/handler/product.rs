use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{
            api::{ApiResponse, ApiResponseList, MessageResponse},
            product::ProductResponse,
        },
    },
    middleware::{path::PathId, payload::Payload},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products with their count", body = ApiResponseList<Vec<ProductResponse>>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_all()
        .await
        .map_err(|err| HttpError::from_service(err, "Can't Fetch from Database"))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_by_id(id)
        .await
        .map_err(|err| HttpError::from_service(err, "Can't Fetch from Database"))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Payload(body): Payload<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .create_product(&body)
        .await
        .map_err(|err| HttpError::from_service(err, "Failed to create product"))?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    PathId(id): PathId,
    Payload(body): Payload<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .update_product(id, &body)
        .await
        .map_err(|err| HttpError::from_service(err, "Failed to update product"))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Unknown product", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .delete_product(id)
        .await
        .map_err(|err| HttpError::from_service(err, "Can't Fetch from Database"))?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/products", get(get_products))
        .route("/api/v1/products", post(create_product))
        .route("/api/v1/products/{id}", get(get_product))
        .route("/api/v1/products/{id}", patch(update_product))
        .route("/api/v1/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
