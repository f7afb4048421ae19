use crate::{
    abstract_trait::{
        category::{
            repository::{DynCategoryCommandRepository, DynCategoryQueryRepository},
            service::{DynCategoryCommandService, DynCategoryQueryService},
        },
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
    },
    repository::{
        category::{CategoryCommandRepository, CategoryQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
    },
    service::{
        category::{CategoryCommandService, CategoryQueryService},
        product::{ProductCommandService, ProductQueryService},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub category_query: DynCategoryQueryService,
    pub category_command: DynCategoryCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("category_query", &"CategoryQueryService")
            .field("category_command", &"CategoryCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let category_query_repo: DynCategoryQueryRepository =
            Arc::new(CategoryQueryRepository::new(pool.clone()));
        let category_command_repo: DynCategoryCommandRepository =
            Arc::new(CategoryCommandRepository::new(pool));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo.clone()));
        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_query_repo,
            product_command_repo,
        ));
        let category_query: DynCategoryQueryService =
            Arc::new(CategoryQueryService::new(category_query_repo.clone()));
        let category_command: DynCategoryCommandService = Arc::new(CategoryCommandService::new(
            category_query_repo,
            category_command_repo,
        ));

        Self {
            product_query,
            product_command,
            category_query,
            category_command,
        }
    }
}
