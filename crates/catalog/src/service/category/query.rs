use crate::{
    abstract_trait::category::{
        repository::DynCategoryQueryRepository, service::CategoryQueryServiceTrait,
    },
    domain::response::{
        api::{ApiResponse, ApiResponseList},
        category::CategoryResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

#[derive(Clone)]
pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(&self) -> Result<ApiResponseList<Vec<CategoryResponse>>, ServiceError> {
        let categories = self.query.find_all().await?;

        let total = categories.len() as i64;
        let data: Vec<CategoryResponse> = categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect();

        info!("✅ Fetched {total} category(ies)");

        Ok(ApiResponseList::ok(
            "get All Category Successfully!",
            total,
            data,
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category with ID: {id} not found")))?;

        Ok(ApiResponse::ok(
            format!("Category with ID: {id} fetched successfully!"),
            CategoryResponse::from(category),
        ))
    }
}
