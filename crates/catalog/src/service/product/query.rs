use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::{
        api::{ApiResponse, ApiResponseList},
        product::ProductResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponseList<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all().await?;

        let total = products.len() as i64;
        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Fetched {total} product(s)");

        Ok(ApiResponseList::ok(
            "get All Product Successfully!",
            total,
            data,
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product with ID: {id} not found")))?;

        Ok(ApiResponse::ok(
            format!("Product with ID: {id} fetched successfully!"),
            ProductResponse::from(product),
        ))
    }
}
