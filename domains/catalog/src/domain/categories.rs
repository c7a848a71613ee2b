//! Content categories

use chrono::{DateTime, Utc};
use mediahub_api::Resource;
use mediahub_auth::AuthContext;
use mediahub_common::Result;
use mediahub_db::Document;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Category {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    /// URL or path of the cover image
    #[validate(length(min = 1, max = 2048))]
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Category {
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 1000))]
    pub description: String,

    #[validate(length(min = 1, max = 2048))]
    pub cover_image: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 1000))]
    pub description: Option<String>,

    /// Absent keeps the current image, `null` removes it. Length is checked
    /// when the updated category is re-validated.
    #[serde(default, deserialize_with = "nullable")]
    pub cover_image: Option<Option<String>>,
}

/// Present-but-null becomes `Some(None)`; a missing key falls back to `None`
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Resource for Category {
    const NAME: &'static str = "Category";

    type Create = CreateCategoryRequest;
    type Update = UpdateCategoryRequest;
    type View = Category;

    fn create(input: CreateCategoryRequest, _actor: Option<&AuthContext>) -> Result<Self> {
        let now = Utc::now();
        Ok(Category {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            cover_image: input.cover_image,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, update: UpdateCategoryRequest) -> Result<()> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(cover_image) = update.cover_image {
            self.cover_image = cover_image;
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
