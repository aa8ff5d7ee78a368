use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::{NewTag, UpdateTag};
use crate::payloads::NAME_MAX_LEN;

/// JSON body accepted by `POST /api/tags`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTagPayload {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub tag_name: String,
}

impl CreateTagPayload {
    /// Validates the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> Result<NewTag, ValidationErrors> {
        self.validate()?;
        Ok(NewTag::new(self.tag_name))
    }
}

/// JSON body accepted by `PUT /api/tags/{id}`. Every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTagPayload {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub tag_name: Option<String>,
}

impl UpdateTagPayload {
    /// Validates the payload into a domain `UpdateTag` patch.
    pub fn into_update_tag(self) -> Result<UpdateTag, ValidationErrors> {
        self.validate()?;

        let mut updates = UpdateTag::new();
        if let Some(tag_name) = self.tag_name {
            updates = updates.tag_name(tag_name);
        }

        Ok(updates)
    }
}
