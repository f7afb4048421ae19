use crate::{
    abstract_trait::category::{
        repository::{DynCategoryCommandRepository, DynCategoryQueryRepository},
        service::CategoryCommandServiceTrait,
    },
    domain::{
        requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
        response::{api::ApiResponse, category::CategoryResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::warn;

// Upstream clients match on this message, trailing space included.
const CATEGORY_FIELDS_REQUIRED: &str = "Category Name and Description required ";

#[derive(Clone)]
pub struct CategoryCommandService {
    query: DynCategoryQueryRepository,
    command: DynCategoryCommandRepository,
}

impl CategoryCommandService {
    pub fn new(query: DynCategoryQueryRepository, command: DynCategoryCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let Some((category_name, description)) = req.complete() else {
            warn!("⚠️ Rejected category creation with incomplete payload");
            return Err(ServiceError::Validation(
                CATEGORY_FIELDS_REQUIRED.to_string(),
            ));
        };

        let created = self
            .command
            .create_category(category_name, description)
            .await?;

        Ok(ApiResponse::ok(
            "Category Created Successfully!",
            CategoryResponse::from(created),
        ))
    }

    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        let Some(current) = self.query.find_by_id(id).await? else {
            return Err(ServiceError::NotFound("Category not found!".to_string()));
        };

        // Partial merge: body fields win only when non-empty.
        let category_name = req.category_name().unwrap_or(&current.category_name);
        let description = req.description().unwrap_or(&current.description);

        let updated = self
            .command
            .update_category(id, category_name, description)
            .await?;

        Ok(CategoryResponse::from(updated))
    }

    async fn delete_category(&self, id: i32) -> Result<(), ServiceError> {
        if self.query.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound("Category not found!".to_string()));
        }

        self.command.delete_category(id).await?;

        Ok(())
    }
}
