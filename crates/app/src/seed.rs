//! Demo data for a fresh database
//!
//! Wipes every collection, then inserts three users (one per role), three
//! categories, three themes and one content item per category/theme pair,
//! all authored by `creador1`.

use anyhow::Result;
use mediahub_accounts::User;
use mediahub_api::Resource;
use mediahub_auth::{hash_password, Role};
use mediahub_catalog::{
    AllowedContent, Category, Content, ContentType, CreateCategoryRequest, CreateContentRequest,
    CreateThemeRequest, Theme,
};
use mediahub_db::{Collection, SqlitePool};

/// Password shared by every seeded account
pub const SEED_PASSWORD: &str = "password123";

const USERS: [(&str, &str, Role); 3] = [
    ("admin", "admin@example.com", Role::Admin),
    ("lector1", "lector1@example.com", Role::Lector),
    ("creador1", "creador1@example.com", Role::Creador),
];

const CATEGORIES: [(&str, &str, &str); 3] = [
    (
        "Imágenes",
        "Categoría para imágenes",
        "https://example.com/image-category.jpg",
    ),
    (
        "Videos",
        "Categoría para videos",
        "https://example.com/video-category.jpg",
    ),
    (
        "Textos",
        "Categoría para textos",
        "https://example.com/text-category.jpg",
    ),
];

const THEMES: [(&str, AllowedContent); 3] = [
    (
        "Ciencias",
        AllowedContent {
            images: true,
            videos: true,
            texts: true,
        },
    ),
    (
        "Matemáticas",
        AllowedContent {
            images: true,
            videos: false,
            texts: true,
        },
    ),
    (
        "Deportes",
        AllowedContent {
            images: true,
            videos: true,
            texts: false,
        },
    ),
];

const CONTENTS: [(&str, &str, ContentType, &str); 3] = [
    (
        "Imagen de Ciencia",
        "Una imagen relacionada con la ciencia.",
        ContentType::Image,
        "https://example.com/science-image.jpg",
    ),
    (
        "Video de Matemáticas",
        "Un video explicando conceptos matemáticos.",
        ContentType::Video,
        "https://www.youtube.com/watch?v=example",
    ),
    (
        "Texto de Deportes",
        "Un documento de texto sobre deportes.",
        ContentType::Text,
        "https://example.com/sports-text.txt",
    ),
];

/// Everything inserted by [`populate`]
#[derive(Debug)]
pub struct SeedSummary {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub themes: Vec<Theme>,
    pub contents: Vec<Content>,
}

/// Replace the database contents with the demo data set
pub async fn populate(pool: &SqlitePool) -> Result<SeedSummary> {
    let users = Collection::<User>::new(pool.clone());
    let categories = Collection::<Category>::new(pool.clone());
    let themes = Collection::<Theme>::new(pool.clone());
    let contents = Collection::<Content>::new(pool.clone());

    // Contents first so nothing is left pointing at a removed document
    let removed = contents.clear().await?
        + themes.clear().await?
        + categories.clear().await?
        + users.clear().await?;
    tracing::info!(removed, "Cleared existing collections");

    let mut seeded_users = Vec::with_capacity(USERS.len());
    for (username, email, role) in USERS {
        let user = User::new(
            username.to_string(),
            email.to_string(),
            hash_password(SEED_PASSWORD)?,
            role,
        );
        users.insert(&user).await?;
        seeded_users.push(user);
    }

    let mut seeded_categories = Vec::with_capacity(CATEGORIES.len());
    for (name, description, cover_image) in CATEGORIES {
        let category = Category::create(
            CreateCategoryRequest {
                name: name.to_string(),
                description: description.to_string(),
                cover_image: Some(cover_image.to_string()),
            },
            None,
        )?;
        categories.insert(&category).await?;
        seeded_categories.push(category);
    }

    let mut seeded_themes = Vec::with_capacity(THEMES.len());
    for (name, allowed_content) in THEMES {
        let theme = Theme::create(
            CreateThemeRequest {
                name: name.to_string(),
                allowed_content,
            },
            None,
        )?;
        themes.insert(&theme).await?;
        seeded_themes.push(theme);
    }

    let author = seeded_users
        .iter()
        .find(|user| user.role == Role::Creador)
        .map(|user| user.id)
        .ok_or_else(|| anyhow::anyhow!("seed data has no creador account"))?;

    let mut seeded_contents = Vec::with_capacity(CONTENTS.len());
    for ((title, description, content_type, url), (category, theme)) in CONTENTS
        .into_iter()
        .zip(seeded_categories.iter().zip(seeded_themes.iter()))
    {
        let content = Content::create(
            CreateContentRequest {
                title: title.to_string(),
                description: description.to_string(),
                category_id: category.id,
                theme_id: theme.id,
                content_type,
                url: url.to_string(),
                created_by: Some(author),
            },
            None,
        )?;
        contents.insert(&content).await?;
        seeded_contents.push(content);
    }

    tracing::info!(
        users = seeded_users.len(),
        categories = seeded_categories.len(),
        themes = seeded_themes.len(),
        contents = seeded_contents.len(),
        "Database seeded"
    );

    Ok(SeedSummary {
        users: seeded_users,
        categories: seeded_categories,
        themes: seeded_themes,
        contents: seeded_contents,
    })
}
