use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        name: &str,
        price: i64,
        stock: i32,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        id: i32,
        name: &str,
        price: i64,
        stock: i32,
    ) -> Result<ProductModel, RepositoryError>;
    /// Returns the number of rows removed.
    async fn delete_product(&self, id: i32) -> Result<u64, RepositoryError>;
}
