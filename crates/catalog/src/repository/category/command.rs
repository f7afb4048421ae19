use crate::{
    abstract_trait::category::repository::CategoryCommandRepositoryTrait,
    model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(
        &self,
        category_name: &str,
        description: &str,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (category_name, description, created_at, updated_at)
            VALUES ($1, $2, current_timestamp, current_timestamp)
            RETURNING category_id, category_name, description, created_at, updated_at
            "#,
        )
        .bind(category_name)
        .bind(description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {category_name}: {err:?}");
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created category ID {} ({})",
            result.category_id, result.category_name
        );
        Ok(result)
    }

    async fn update_category(
        &self,
        id: i32,
        category_name: &str,
        description: &str,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categories
            SET category_name = $2,
                description = $3,
                updated_at = current_timestamp
            WHERE category_id = $1
            RETURNING category_id, category_name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(category_name)
        .bind(description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated category ID {}", result.category_id);
        Ok(result)
    }

    async fn delete_category(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete category ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        info!(
            "🗑️ Deleted category ID {id} ({} row(s))",
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
