//! User entity - global identity shared across workspaces

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    /// Display name, also the target of `@name` mentions
    pub name: String,
    pub image: Option<String>,
}

impl User {
    pub fn new(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Whether the user has a name that `@name` matching can use
    #[inline]
    pub fn has_display_name(&self) -> bool {
        !self.name.is_empty()
    }
}
