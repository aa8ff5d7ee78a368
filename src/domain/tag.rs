use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a product tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable name of the tag.
    pub tag_name: String,
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone)]
pub struct NewTag {
    pub tag_name: String,
}

impl NewTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }
}

/// Patch data applied when updating an existing tag.
#[derive(Debug, Clone, Default)]
pub struct UpdateTag {
    pub tag_name: Option<String>,
}

impl UpdateTag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the tag name.
    pub fn tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    /// Returns `true` when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.tag_name.is_none()
    }
}

/// A tag together with the products it is attached to.
#[derive(Debug, Clone, Serialize)]
pub struct TagWithProducts {
    #[serde(flatten)]
    pub tag: Tag,
    pub products: Vec<Product>,
}
