use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Snacks")]
    pub category_name: Option<String>,

    #[schema(example = "Crunchy things")]
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    /// Both fields must be present and non-empty.
    pub fn complete(&self) -> Option<(&str, &str)> {
        let category_name = self
            .category_name
            .as_deref()
            .filter(|name| !name.is_empty())?;
        let description = self
            .description
            .as_deref()
            .filter(|description| !description.is_empty())?;
        Some((category_name, description))
    }
}

/// Body for the partial category update. Each field replaces the stored
/// value only when present and non-empty; absent or empty fields keep the
/// prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    #[schema(example = "Snacks")]
    pub category_name: Option<String>,

    #[schema(example = "Crunchy things")]
    pub description: Option<String>,
}

impl UpdateCategoryRequest {
    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
    }
}
