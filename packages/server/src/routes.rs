//! HTTP surface: maps the CRUD service onto REST endpoints.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/api/users` | 200, array of records |
//! | GET | `/api/users?field=value` | 200, first matching record |
//! | POST | `/api/users` | 201, created record |
//! | PUT | `/api/users/{id}` | 200, merged record |
//! | DELETE | `/api/users/{id}` | 200, `{"message": "User deleted successfully"}` |
//!
//! Handlers hold no cross-request state; failures are translated to status codes
//! by [`ApiError`]'s `IntoResponse`.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, put};
use axum::Router;
use uuid::Uuid;

use api::{Ack, NewUser, UserPatch, UserQuery, UserRecord};

use crate::error::ApiError;
use crate::models::User;
use crate::store::UserStore;
use crate::users;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", put(update_user).delete(delete_user))
        .with_state(state)
}

/// Without filter params this lists every record; with any of the five filter
/// fields it returns the single first match instead.
async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Response, ApiError> {
    if query.is_empty() {
        let users = users::list(state.store.as_ref()).await?;
        let records: Vec<UserRecord> = users.iter().map(User::to_record).collect();
        Ok(Json(records).into_response())
    } else {
        let user = users::find(state.store.as_ref(), &query).await?;
        Ok(Json(user.to_record()).into_response())
    }
}

async fn create_user(
    State(state): State<AppState>,
    Json(new): Json<NewUser>,
) -> Result<(StatusCode, Json<UserRecord>), ApiError> {
    let user = users::create(state.store.as_ref(), new).await?;
    Ok((StatusCode::CREATED, Json(user.to_record())))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<UserRecord>, ApiError> {
    let user = users::update(state.store.as_ref(), id, &patch).await?;
    Ok(Json(user.to_record()))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ack>, ApiError> {
    users::delete(state.store.as_ref(), id).await?;
    Ok(Json(Ack {
        message: "User deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemUserStore;

    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState {
            store: Arc::new(MemUserStore::new()),
        })
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn ann() -> Value {
        json!({"name": "Ann", "email": "ann@x.com", "age": 30})
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let app = app();
        let (status, body) = send(&app, get_request("/api/users")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let app = app();
        let (status, body) = send(&app, json_request("POST", "/api/users", ann())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Ann");
        assert_eq!(body["email"], "ann@x.com");
        assert_eq!(body["age"], 30);
        assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());
    }

    #[tokio::test]
    async fn duplicate_email_is_400_and_leaves_the_list_unchanged() {
        let app = app();
        send(&app, json_request("POST", "/api/users", ann())).await;

        let dup = json!({"name": "Another Ann", "email": "ann@x.com"});
        let (status, body) = send(&app, json_request("POST", "/api/users", dup)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User already exists");

        let (_, list) = send(&app, get_request("/api/users")).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_without_email_is_400() {
        let app = app();
        let (status, body) =
            send(&app, json_request("POST", "/api/users", json!({"name": "Ann", "email": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Email is required");
    }

    #[tokio::test]
    async fn field_query_returns_a_single_record_or_404() {
        let app = app();
        send(&app, json_request("POST", "/api/users", ann())).await;
        send(
            &app,
            json_request("POST", "/api/users", json!({"name": "Bob", "email": "bob@x.com"})),
        )
        .await;

        let (status, body) = send(&app, get_request("/api/users?name=Ann&age=30")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "ann@x.com");
        // A single object, not an array.
        assert!(body.is_object());

        let (status, body) = send(&app, get_request("/api/users?name=Carol")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn update_merges_partial_fields() {
        let app = app();
        let (_, created) = send(&app, json_request("POST", "/api/users", ann())).await;
        let id = created["id"].as_str().unwrap().to_string();

        let (status, body) =
            send(&app, json_request("PUT", &format!("/api/users/{id}"), json!({"age": 31}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["age"], 31);
        assert_eq!(body["name"], "Ann");
        assert_eq!(body["email"], "ann@x.com");
    }

    #[tokio::test]
    async fn update_unknown_id_is_404() {
        let app = app();
        let id = Uuid::new_v4();
        let (status, body) =
            send(&app, json_request("PUT", &format!("/api/users/{id}"), json!({"age": 1}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn delete_removes_and_repeat_delete_is_404() {
        let app = app();
        let (_, created) = send(&app, json_request("POST", "/api/users", ann())).await;
        let id = created["id"].as_str().unwrap().to_string();

        let delete = |uri: String| {
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        };

        let (status, body) = send(&app, delete(format!("/api/users/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User deleted successfully");

        let (_, list) = send(&app, get_request("/api/users")).await;
        assert_eq!(list, json!([]));

        let (status, _) = send(&app, delete(format!("/api/users/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
