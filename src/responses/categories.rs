use serde::Serialize;

use crate::domain::category::Category;

/// Response representation of a category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRepr {
    pub id: i32,
    pub name: String,
}

impl From<&Category> for CategoryRepr {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}
