//! Album endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{validate, Album, AlbumDraft, AlbumUpdate};

/// Confirmation body for writes that do not echo a record
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /albums - list every album
async fn list_albums(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state.albums.list_all().await?;
    Ok(Json(albums))
}

/// POST /albums - validate and insert a new album
async fn create_album(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<AlbumDraft>,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    let album = validate(draft)?;
    state.albums.insert(&album).await?;

    tracing::info!(id = %album.id, "album created");
    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /albums/{id} - get a single album
async fn get_album(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let album = state.albums.get_by_id(&id).await?;
    Ok(Json(album))
}

/// PUT /albums/{id} - overwrite title and price
///
/// Reports success even when no album has this id.
async fn update_album(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<AlbumUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .albums
        .update(&id, &update.title, update.price)
        .await?;

    Ok(Json(MessageResponse {
        message: "Album updated",
    }))
}

/// DELETE /albums/{id}
///
/// Reports success even when no album has this id.
async fn delete_album(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.albums.delete(&id).await?;

    Ok(Json(MessageResponse {
        message: "Album deleted",
    }))
}

/// Album routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route(
            "/albums/{id}",
            get(get_album).put(update_album).delete(delete_album),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{AlbumStore, DbError, MemoryAlbumStore};
    use crate::http::server::{build_router, ServerConfig};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(store: Arc<dyn AlbumStore>) -> Router {
        build_router(AppState::new(store), &ServerConfig::default())
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Store whose every call fails like a dropped connection.
    struct BrokenStore;

    #[async_trait]
    impl AlbumStore for BrokenStore {
        async fn list_all(&self) -> Result<Vec<Album>, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }
        async fn insert(&self, _album: &Album) -> Result<(), DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }
        async fn get_by_id(&self, _id: &str) -> Result<Album, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }
        async fn update(&self, _id: &str, _title: &str, _price: f64) -> Result<(), DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }
        async fn delete(&self, _id: &str) -> Result<(), DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty_array() {
        let app = app_with(Arc::new(MemoryAlbumStore::new()));

        let response = app.oneshot(empty_request("GET", "/albums")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn album_lifecycle() {
        let app = app_with(Arc::new(MemoryAlbumStore::new()));

        // Create
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/albums",
                r#"{"id":"9","title":"Test","price":5.5}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"id": "9", "title": "Test", "price": 5.5})
        );

        // Read back
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/albums/9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": "9", "title": "Test", "price": 5.5})
        );

        // Update
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/albums/9",
                r#"{"title":"Renamed","price":6}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"message": "Album updated"}));

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/albums/9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], "9");
        assert_eq!(body["title"], "Renamed");
        assert_eq!(body["price"].as_f64(), Some(6.0));

        // Delete
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/albums/9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"message": "Album deleted"}));

        let response = app
            .oneshot(empty_request("GET", "/albums/9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"message": "Album not found"}));
    }

    #[tokio::test]
    async fn negative_price_is_rejected_without_insert() {
        let store = Arc::new(MemoryAlbumStore::new());
        let app = app_with(store.clone());

        let response = app
            .oneshot(json_request(
                "POST",
                "/albums",
                r#"{"id":"9","title":"Test","price":-1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "price must be greater than or equal to 0"})
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn missing_price_is_a_validation_error() {
        let store = Arc::new(MemoryAlbumStore::new());
        let app = app_with(store.clone());

        let response = app
            .oneshot(json_request("POST", "/albums", r#"{"id":"9","title":"Test"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "price is required"}));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn zero_price_is_accepted() {
        let app = app_with(Arc::new(MemoryAlbumStore::new()));

        let response = app
            .oneshot(json_request(
                "POST",
                "/albums",
                r#"{"id":"free","title":"Sampler","price":0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_format() {
        let app = app_with(Arc::new(MemoryAlbumStore::new()));

        let response = app
            .oneshot(json_request("POST", "/albums", r#"{"id":"9","title":"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid JSON format"}));
    }

    #[tokio::test]
    async fn wrong_field_type_is_invalid_format() {
        let app = app_with(Arc::new(MemoryAlbumStore::new()));

        let response = app
            .oneshot(json_request(
                "PUT",
                "/albums/9",
                r#"{"title":"Renamed","price":"six"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid JSON format"}));
    }

    #[tokio::test]
    async fn body_is_decoded_regardless_of_content_type() {
        let store = Arc::new(MemoryAlbumStore::new());
        let app = app_with(store.clone());

        // curl -d sends form encoding by default
        let request = Request::builder()
            .method("POST")
            .uri("/albums")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(r#"{"id":"9","title":"Test","price":5.5}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"id": "9", "title": "Test", "price": 5.5})
        );

        // No header at all
        let request = Request::builder()
            .method("PUT")
            .uri("/albums/9")
            .body(Body::from(r#"{"title":"Renamed","price":6}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.get_by_id("9").await.unwrap(), Album::new("9", "Renamed", 6.0));
    }

    #[tokio::test]
    async fn empty_body_is_invalid_format() {
        let app = app_with(Arc::new(MemoryAlbumStore::new()));

        let response = app
            .oneshot(json_request("POST", "/albums", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid JSON format"}));
    }

    #[tokio::test]
    async fn duplicate_id_is_storage_error() {
        let app = app_with(Arc::new(MemoryAlbumStore::new()));
        let body = r#"{"id":"1","title":"Blue Train","price":56.99}"#;

        let response = app
            .clone()
            .oneshot(json_request("POST", "/albums", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_request("POST", "/albums", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "album already exists"}));
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_id_report_success() {
        let store = Arc::new(MemoryAlbumStore::new());
        let app = app_with(store.clone());

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/albums/ghost",
                r#"{"title":"Nothing","price":1}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"message": "Album updated"}));

        let response = app
            .oneshot(empty_request("DELETE", "/albums/ghost"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"message": "Album deleted"}));

        // Neither call creates a row
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_does_not_validate() {
        let store = Arc::new(MemoryAlbumStore::new());
        store.insert(&Album::new("9", "Test", 5.5)).await.unwrap();
        let app = app_with(store.clone());

        let response = app
            .oneshot(json_request("PUT", "/albums/9", r#"{"price":-2}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.get_by_id("9").await.unwrap(), Album::new("9", "", -2.0));
    }

    #[tokio::test]
    async fn list_returns_inserted_albums() {
        let store = Arc::new(MemoryAlbumStore::new());
        store.insert(&Album::new("1", "Blue Train", 56.99)).await.unwrap();
        store.insert(&Album::new("2", "Jeru", 17.99)).await.unwrap();
        let app = app_with(store);

        let response = app.oneshot(empty_request("GET", "/albums")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let mut albums: Vec<Album> = serde_json::from_value(body_json(response).await).unwrap();
        albums.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(
            albums,
            vec![Album::new("1", "Blue Train", 56.99), Album::new("2", "Jeru", 17.99)]
        );
    }

    #[tokio::test]
    async fn storage_failures_are_500_without_detail() {
        let app = app_with(Arc::new(BrokenStore));

        let requests = vec![
            empty_request("GET", "/albums"),
            json_request("POST", "/albums", r#"{"id":"9","title":"Test","price":5.5}"#),
            empty_request("GET", "/albums/9"),
            json_request("PUT", "/albums/9", r#"{"title":"Renamed","price":6}"#),
            empty_request("DELETE", "/albums/9"),
        ];

        for request in requests {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_json(response).await, json!({"error": "internal storage error"}));
        }
    }
}
