use serde::Serialize;

use crate::domain::tag::Tag;

/// Response representation of a tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagRepr {
    pub id: i32,
    pub name: String,
}

impl From<&Tag> for TagRepr {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
        }
    }
}
