use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{
            api::{ApiResponse, MessageResponse},
            product::ProductResponse,
        },
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::warn;

const PRODUCT_FIELDS_REQUIRED: &str = "Name, Price, and Stock are required!";

#[derive(Clone)]
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let Some((name, price, stock)) = req.complete() else {
            warn!("⚠️ Rejected product creation with incomplete payload");
            return Err(ServiceError::Validation(PRODUCT_FIELDS_REQUIRED.to_string()));
        };

        let created = self.command.create_product(name, price, stock).await?;

        Ok(ApiResponse::ok(
            "Product Created Successfully!",
            ProductResponse::from(created),
        ))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        // Presence check first, existence check second, same as creation.
        let Some((name, price, stock)) = req.complete() else {
            warn!("⚠️ Rejected product update with incomplete payload");
            return Err(ServiceError::Validation(PRODUCT_FIELDS_REQUIRED.to_string()));
        };

        if self.query.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound("Product not found!".to_string()));
        }

        let updated = self.command.update_product(id, name, price, stock).await?;

        Ok(ApiResponse::ok(
            "Product Updated Successfully!",
            ProductResponse::from(updated),
        ))
    }

    async fn delete_product(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        let affected = self.command.delete_product(id).await?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Product Not Found!".to_string()));
        }

        Ok(MessageResponse::ok("Product Deleted Successfully!"))
    }
}
