#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use catalog::{
    abstract_trait::{
        category::{
            repository::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
            service::{DynCategoryCommandService, DynCategoryQueryService},
        },
        product::{
            repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
            service::{DynProductCommandService, DynProductQueryService},
        },
    },
    di::DependenciesInject,
    handler::AppRouter,
    model::{category::Category, product::Product},
    service::{
        category::{CategoryCommandService, CategoryQueryService},
        product::{ProductCommandService, ProductQueryService},
    },
    state::AppState,
};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::errors::RepositoryError;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI32, Ordering},
};
use tower::ServiceExt;

/// Product store living behind the repository traits. `failing` makes
/// every call surface a store error, for the 500 paths.
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
    next_id: AtomicI32,
    failing: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            failing: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            failing: true,
        })
    }

    pub fn seed(&self, name: &str, price: i64, stock: i32) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Product {
            product_id: id,
            name: name.to_string(),
            price,
            stock,
            created_at: None,
            updated_at: None,
        });
        id
    }

    fn guard(&self) -> Result<(), RepositoryError> {
        if self.failing {
            return Err(RepositoryError::Custom("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.guard()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        self.guard()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.product_id == id)
            .cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(
        &self,
        name: &str,
        price: i64,
        stock: i32,
    ) -> Result<Product, RepositoryError> {
        self.guard()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = Product {
            product_id: id,
            name: name.to_string(),
            price,
            stock,
            created_at: None,
            updated_at: None,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_product(
        &self,
        id: i32,
        name: &str,
        price: i64,
        stock: i32,
    ) -> Result<Product, RepositoryError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.product_id == id)
            .ok_or_else(|| RepositoryError::Custom("no rows returned".to_string()))?;
        row.name = name.to_string();
        row.price = price;
        row.stock = stock;
        Ok(row.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<u64, RepositoryError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.product_id != id);
        Ok((before - rows.len()) as u64)
    }
}

pub struct InMemoryCategoryRepository {
    rows: Mutex<Vec<Category>>,
    next_id: AtomicI32,
    failing: bool,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            failing: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            failing: true,
        })
    }

    pub fn seed(&self, category_name: &str, description: &str) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Category {
            category_id: id,
            category_name: category_name.to_string(),
            description: description.to_string(),
            created_at: None,
            updated_at: None,
        });
        id
    }

    fn guard(&self) -> Result<(), RepositoryError> {
        if self.failing {
            return Err(RepositoryError::Custom("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        self.guard()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        self.guard()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.category_id == id)
            .cloned())
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for InMemoryCategoryRepository {
    async fn create_category(
        &self,
        category_name: &str,
        description: &str,
    ) -> Result<Category, RepositoryError> {
        self.guard()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = Category {
            category_id: id,
            category_name: category_name.to_string(),
            description: description.to_string(),
            created_at: None,
            updated_at: None,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_category(
        &self,
        id: i32,
        category_name: &str,
        description: &str,
    ) -> Result<Category, RepositoryError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.category_id == id)
            .ok_or_else(|| RepositoryError::Custom("no rows returned".to_string()))?;
        row.category_name = category_name.to_string();
        row.description = description.to_string();
        Ok(row.clone())
    }

    async fn delete_category(&self, id: i32) -> Result<u64, RepositoryError> {
        self.guard()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.category_id != id);
        Ok((before - rows.len()) as u64)
    }
}

pub struct TestApp {
    pub router: Router,
    pub products: Arc<InMemoryProductRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
}

pub fn test_app() -> TestApp {
    build_app(
        InMemoryProductRepository::new(),
        InMemoryCategoryRepository::new(),
    )
}

pub fn failing_app() -> TestApp {
    build_app(
        InMemoryProductRepository::failing(),
        InMemoryCategoryRepository::failing(),
    )
}

fn build_app(
    products: Arc<InMemoryProductRepository>,
    categories: Arc<InMemoryCategoryRepository>,
) -> TestApp {
    let product_query: DynProductQueryService =
        Arc::new(ProductQueryService::new(products.clone()));
    let product_command: DynProductCommandService =
        Arc::new(ProductCommandService::new(products.clone(), products.clone()));
    let category_query: DynCategoryQueryService =
        Arc::new(CategoryQueryService::new(categories.clone()));
    let category_command: DynCategoryCommandService = Arc::new(CategoryCommandService::new(
        categories.clone(),
        categories.clone(),
    ));

    let di_container = DependenciesInject {
        product_query,
        product_command,
        category_query,
        category_command,
    };

    let router = AppRouter::build(AppState { di_container });

    TestApp {
        router,
        products,
        categories,
    }
}

pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

pub async fn send_form(
    router: &Router,
    method: &str,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
