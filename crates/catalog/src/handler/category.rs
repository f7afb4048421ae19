use crate::{
    abstract_trait::category::service::{DynCategoryCommandService, DynCategoryQueryService},
    domain::{
        requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
        response::{
            api::{ApiResponse, ApiResponseList},
            category::CategoryResponse,
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
use serde_json::json;
use shared::errors::{ErrorResponse, HttpError, ServiceError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Category",
    responses(
        (status = 200, description = "All categories with their count", body = ApiResponseList<Vec<CategoryResponse>>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_all()
        .await
        .map_err(|err| HttpError::from_service(err, "Can't Fetch from Database"))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Unknown category", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryQueryService>,
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
    path = "/api/v1/category",
    tag = "Category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Payload(body): Payload<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .create_category(&body)
        .await
        .map_err(|err| HttpError::from_service(err, "Failed to Create Category"))?;

    Ok((StatusCode::CREATED, Json(response)))
}

// Update and delete answer with the string-status envelope
// (`status`/`isSuccess`) that existing category clients consume, so they
// build their bodies here instead of going through `HttpError`.

#[utoipa::path(
    patch,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = serde_json::Value),
        (status = 404, description = "Unknown category", body = serde_json::Value),
        (status = 500, description = "Store failure", body = serde_json::Value)
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryCommandService>,
    PathId(id): PathId,
    Payload(body): Payload<UpdateCategoryRequest>,
) -> impl IntoResponse {
    match service.update_category(id, &body).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(json!({
                "status": "Success",
                "message": "Category updated successfully!",
                "isSuccess": true,
                "data": updated,
            })),
        ),
        Err(ServiceError::NotFound(message)) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": "Failed",
                "message": message,
                "isSuccess": false,
            })),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "Error",
                "message": "Failed to update category!",
                "isSuccess": false,
                "error": err.to_string(),
            })),
        ),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = serde_json::Value),
        (status = 404, description = "Unknown category", body = serde_json::Value),
        (status = 500, description = "Store failure", body = serde_json::Value)
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryCommandService>,
    PathId(id): PathId,
) -> impl IntoResponse {
    match service.delete_category(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "Success",
                "message": "Category deleted successfully!",
                "isSuccess": true,
                "data": null,
            })),
        ),
        Err(ServiceError::NotFound(message)) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": "Failed",
                "message": message,
                "isSuccess": false,
            })),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "Error",
                "message": "Failed to delete category data!",
                "isSuccess": false,
                "error": err.to_string(),
            })),
        ),
    }
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/categories", get(get_categories))
        .route("/api/v1/category", post(create_category))
        .route("/api/v1/categories/{id}", get(get_category))
        .route("/api/v1/categories/{id}", patch(update_category))
        .route("/api/v1/categories/{id}", delete(delete_category))
        .layer(Extension(app_state.di_container.category_query.clone()))
        .layer(Extension(app_state.di_container.category_command.clone()))
}
