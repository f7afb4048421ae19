use crate::domain::{
    requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
    response::{api::ApiResponse, category::CategoryResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCategoryCommandService = Arc<dyn CategoryCommandServiceTrait + Send + Sync>;

/// Update and delete return bare values; their handlers own the
/// string-status envelope those routes answer with.
#[async_trait]
pub trait CategoryCommandServiceTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError>;
    async fn delete_category(&self, id: i32) -> Result<(), ServiceError>;
}
