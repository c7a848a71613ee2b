//! Themes and the kinds of content each one accepts

use chrono::{DateTime, Utc};
use mediahub_api::Resource;
use mediahub_auth::AuthContext;
use mediahub_common::Result;
use mediahub_db::Document;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Content kinds a theme advertises; every flag defaults to `false`.
///
/// Informational only: content creation does not consult these flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedContent {
    #[serde(default)]
    pub images: bool,
    #[serde(default)]
    pub videos: bool,
    #[serde(default)]
    pub texts: bool,
}

/// Flags to change on an existing theme
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AllowedContentPatch {
    pub images: Option<bool>,
    pub videos: Option<bool>,
    pub texts: Option<bool>,
}

/// Theme entity; `name` is unique across themes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Theme {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub allowed_content: AllowedContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Theme {
    const COLLECTION: &'static str = "themes";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateThemeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[serde(default)]
    pub allowed_content: AllowedContent,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateThemeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub allowed_content: Option<AllowedContentPatch>,
}

impl Resource for Theme {
    const NAME: &'static str = "Theme";

    type Create = CreateThemeRequest;
    type Update = UpdateThemeRequest;
    type View = Theme;

    fn create(input: CreateThemeRequest, _actor: Option<&AuthContext>) -> Result<Self> {
        let now = Utc::now();
        Ok(Theme {
            id: Uuid::new_v4(),
            name: input.name,
            allowed_content: input.allowed_content,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, update: UpdateThemeRequest) -> Result<()> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(patch) = update.allowed_content {
            let flags = &mut self.allowed_content;
            flags.images = patch.images.unwrap_or(flags.images);
            flags.videos = patch.videos.unwrap_or(flags.videos);
            flags.texts = patch.texts.unwrap_or(flags.texts);
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
