use crate::model::category::Category as CategoryModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create_category(
        &self,
        category_name: &str,
        description: &str,
    ) -> Result<CategoryModel, RepositoryError>;
    async fn update_category(
        &self,
        id: i32,
        category_name: &str,
        description: &str,
    ) -> Result<CategoryModel, RepositoryError>;
    /// Returns the number of rows removed.
    async fn delete_category(&self, id: i32) -> Result<u64, RepositoryError>;
}
