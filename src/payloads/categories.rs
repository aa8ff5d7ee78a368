use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::payloads::NAME_MAX_LEN;

/// JSON body accepted by `POST /api/categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryPayload {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub category_name: String,
}

impl CreateCategoryPayload {
    /// Validates the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> Result<NewCategory, ValidationErrors> {
        self.validate()?;
        Ok(NewCategory::new(self.category_name))
    }
}

/// JSON body accepted by `PUT /api/categories/{id}`. Every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCategoryPayload {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub category_name: Option<String>,
}

impl UpdateCategoryPayload {
    /// Validates the payload into a domain `UpdateCategory` patch.
    pub fn into_update_category(self) -> Result<UpdateCategory, ValidationErrors> {
        self.validate()?;

        let mut updates = UpdateCategory::new();
        if let Some(category_name) = self.category_name {
            updates = updates.category_name(category_name);
        }

        Ok(updates)
    }
}
