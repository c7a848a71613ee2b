//! Content integration tests
//!
//! Admins and creadores publish, only admins delete, every role reads.

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{TestApp, UserFixture};

fn content(title: &str, content_type: &str) -> Value {
    json!({
        "title": title,
        "description": "Una imagen relacionada con la ciencia.",
        "category_id": Uuid::new_v4(),
        "theme_id": Uuid::new_v4(),
        "type": content_type,
        "url": "https://example.com/science-image.jpg"
    })
}

mod test_content_permissions {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_lector_cannot_create_content() {
        let app = TestApp::new().await.unwrap();
        let lector = UserFixture::lector(&app).await.unwrap();

        let (status, _) = app
            .post(
                "/api/contents",
                lector.bearer(),
                content("Imagen de Ciencia", "image"),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // Nothing was stored
        let (_, listed) = app.get("/api/contents", lector.bearer()).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_creador_creates_and_updates_content() {
        let app = TestApp::new().await.unwrap();
        let creador = UserFixture::creador(&app).await.unwrap();

        let (status, created) = app
            .post(
                "/api/contents",
                creador.bearer(),
                content("Imagen de Ciencia", "image"),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["type"], "image");
        assert_eq!(created["created_by"], creador.user.id.to_string());

        let (status, updated) = app
            .put(
                &format!("/api/contents/{}", created["id"].as_str().unwrap()),
                creador.bearer(),
                json!({ "title": "Imagen de Física" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Imagen de Física");
        assert_eq!(updated["url"], created["url"]);
    }

    #[tokio::test]
    async fn test_only_admin_deletes_content() {
        let app = TestApp::new().await.unwrap();
        let admin = UserFixture::admin(&app).await.unwrap();
        let creador = UserFixture::creador(&app).await.unwrap();

        let (_, created) = app
            .post(
                "/api/contents",
                creador.bearer(),
                content("Texto de Deportes", "text"),
            )
            .await;
        let uri = format!("/api/contents/{}", created["id"].as_str().unwrap());

        let (status, _) = app.delete(&uri, creador.bearer()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = app.delete(&uri, admin.bearer()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Content deleted successfully.");

        let (status, _) = app.get(&uri, admin.bearer()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_every_role_reads_content() {
        let app = TestApp::new().await.unwrap();
        let admin = UserFixture::admin(&app).await.unwrap();
        let creador = UserFixture::creador(&app).await.unwrap();
        let lector = UserFixture::lector(&app).await.unwrap();

        let (_, created) = app
            .post(
                "/api/contents",
                admin.bearer(),
                content("Video de Matemáticas", "video"),
            )
            .await;
        let uri = format!("/api/contents/{}", created["id"].as_str().unwrap());

        for fixture in [&admin, &creador, &lector] {
            let (status, fetched) = app.get(&uri, fixture.bearer()).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(fetched["title"], "Video de Matemáticas");
        }

        let (status, _) = app.get(&uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

mod test_content_payloads {
    use super::*;

    #[tokio::test]
    async fn test_explicit_created_by_is_kept() {
        let app = TestApp::new().await.unwrap();
        let admin = UserFixture::admin(&app).await.unwrap();
        let author = Uuid::new_v4();

        let mut body = content("Imagen de Ciencia", "image");
        body["created_by"] = json!(author);
        let (status, created) = app.post("/api/contents", admin.bearer(), body).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["created_by"], author.to_string());
    }

    #[tokio::test]
    async fn test_update_reassigns_author() {
        let app = TestApp::new().await.unwrap();
        let admin = UserFixture::admin(&app).await.unwrap();
        let creador = UserFixture::creador(&app).await.unwrap();

        let (_, created) = app
            .post(
                "/api/contents",
                admin.bearer(),
                content("Imagen de Ciencia", "image"),
            )
            .await;
        assert_eq!(created["created_by"], admin.user.id.to_string());

        let (status, updated) = app
            .put(
                &format!("/api/contents/{}", created["id"].as_str().unwrap()),
                admin.bearer(),
                json!({ "created_by": creador.user.id }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["created_by"], creador.user.id.to_string());
        assert_eq!(updated["title"], "Imagen de Ciencia");
    }

    #[tokio::test]
    async fn test_theme_flags_do_not_restrict_content() {
        let app = TestApp::new().await.unwrap();
        let admin = UserFixture::admin(&app).await.unwrap();

        let (_, theme) = app
            .post(
                "/api/themes",
                admin.bearer(),
                json!({ "name": "Solo texto", "allowed_content": { "texts": true } }),
            )
            .await;

        let mut body = content("Video fuera de tema", "video");
        body["theme_id"] = theme["id"].clone();
        let (status, created) = app.post("/api/contents", admin.bearer(), body).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["theme_id"], theme["id"]);
    }

    #[tokio::test]
    async fn test_references_are_not_checked() {
        let app = TestApp::new().await.unwrap();
        let creador = UserFixture::creador(&app).await.unwrap();

        // Neither the category nor the theme exists
        let body = content("Huérfano", "text");
        let (status, created) = app.post("/api/contents", creador.bearer(), body.clone()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["category_id"], body["category_id"]);
        assert_eq!(created["theme_id"], body["theme_id"]);
    }

    #[tokio::test]
    async fn test_invalid_content_is_rejected() {
        let app = TestApp::new().await.unwrap();
        let creador = UserFixture::creador(&app).await.unwrap();

        let (status, _) = app
            .post("/api/contents", creador.bearer(), content("Podcast", "audio"))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut body = content("Sin categoría", "image");
        body["category_id"] = json!("not-a-uuid");
        let (status, _) = app.post("/api/contents", creador.bearer(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut body = content("", "image");
        body["title"] = json!("");
        let (status, _) = app.post("/api/contents", creador.bearer(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_changes_type() {
        let app = TestApp::new().await.unwrap();
        let creador = UserFixture::creador(&app).await.unwrap();

        let (_, created) = app
            .post(
                "/api/contents",
                creador.bearer(),
                content("Imagen de Ciencia", "image"),
            )
            .await;

        let (status, updated) = app
            .request(
                Method::PATCH,
                &format!("/api/contents/{}", created["id"].as_str().unwrap()),
                creador.bearer(),
                Some(json!({ "type": "video", "url": "https://www.youtube.com/watch?v=example" })),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["type"], "video");
        assert_eq!(updated["title"], "Imagen de Ciencia");
        assert_eq!(updated["created_by"], created["created_by"]);
    }
}

mod test_public_listing {
    use super::*;

    #[tokio::test]
    async fn test_public_listing_opens_reads_only() {
        let app = TestApp::with_public_content().await.unwrap();
        let creador = UserFixture::creador(&app).await.unwrap();

        let (_, created) = app
            .post(
                "/api/contents",
                creador.bearer(),
                content("Imagen de Ciencia", "image"),
            )
            .await;
        let uri = format!("/api/contents/{}", created["id"].as_str().unwrap());

        let (status, listed) = app.get("/api/contents", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, _) = app.get(&uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = app
            .post("/api/contents", None, content("Anónimo", "text"))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app.delete(&uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // Categories stay behind authentication
        let (status, _) = app.get("/api/categories", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
