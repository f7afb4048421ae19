use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for product creation. Fields deserialize permissively so that the
/// presence rules live in one place (`complete`) instead of the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Smartphone")]
    pub name: Option<String>,

    #[schema(example = 99999)]
    pub price: Option<i64>,

    #[schema(example = 100)]
    pub stock: Option<i32>,
}

impl CreateProductRequest {
    /// Returns the field values only when all three are present and truthy:
    /// a non-empty name and non-zero price and stock. Zero is rejected.
    pub fn complete(&self) -> Option<(&str, i64, i32)> {
        let name = self.name.as_deref().filter(|name| !name.is_empty())?;
        let price = self.price.filter(|price| *price != 0)?;
        let stock = self.stock.filter(|stock| *stock != 0)?;
        Some((name, price, stock))
    }
}

/// Body for the full-overwrite product update. Same presence rules as
/// creation: partial payloads are rejected, not merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(example = "Smartphone")]
    pub name: Option<String>,

    #[schema(example = 99999)]
    pub price: Option<i64>,

    #[schema(example = 100)]
    pub stock: Option<i32>,
}

impl UpdateProductRequest {
    pub fn complete(&self) -> Option<(&str, i64, i32)> {
        let name = self.name.as_deref().filter(|name| !name.is_empty())?;
        let price = self.price.filter(|price| *price != 0)?;
        let stock = self.stock.filter(|stock| *stock != 0)?;
        Some((name, price, stock))
    }
}
