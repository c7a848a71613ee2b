//! Multimedia content items

use chrono::{DateTime, Utc};
use mediahub_api::Resource;
use mediahub_auth::AuthContext;
use mediahub_common::{Error, Result};
use mediahub_db::Document;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Kind of media a content item points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Image,
    Video,
    Text,
}

/// Content entity.
///
/// `category_id`, `theme_id` and `created_by` are stored as given; the
/// referenced documents are not required to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Content {
    pub id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    pub category_id: Uuid,
    pub theme_id: Uuid,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[validate(length(min = 1, max = 2048))]
    pub url: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Content {
    const COLLECTION: &'static str = "contents";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateContentRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    pub category_id: Uuid,

    pub theme_id: Uuid,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    #[validate(length(min = 1, max = 2048))]
    pub url: String,

    /// Defaults to the authenticated caller
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContentRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,

    pub category_id: Option<Uuid>,

    pub theme_id: Option<Uuid>,

    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,

    #[validate(length(min = 1, max = 2048))]
    pub url: Option<String>,

    pub created_by: Option<Uuid>,
}

impl Resource for Content {
    const NAME: &'static str = "Content";

    type Create = CreateContentRequest;
    type Update = UpdateContentRequest;
    type View = Content;

    fn create(input: CreateContentRequest, actor: Option<&AuthContext>) -> Result<Self> {
        let created_by = input
            .created_by
            .or_else(|| actor.map(|ctx| ctx.user_id))
            .ok_or_else(|| Error::Validation("created_by is required".to_string()))?;

        let now = Utc::now();
        Ok(Content {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            category_id: input.category_id,
            theme_id: input.theme_id,
            content_type: input.content_type,
            url: input.url,
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, update: UpdateContentRequest) -> Result<()> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(theme_id) = update.theme_id {
            self.theme_id = theme_id;
        }
        if let Some(content_type) = update.content_type {
            self.content_type = content_type;
        }
        if let Some(url) = update.url {
            self.url = url;
        }
        if let Some(created_by) = update.created_by {
            self.created_by = created_by;
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
