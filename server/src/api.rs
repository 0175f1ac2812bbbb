use crate::config::ServerConfig;
use crate::wire::{CreateUserBody, NameFilter, UserBody};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use roster_registry::{RegistryError, UserRegistry};
use roster_types::UserId;
use std::sync::Arc;

type SharedRegistry = Arc<UserRegistry>;

/// Error returned by handlers. Rendered as a bare status code.
#[derive(Debug)]
pub struct ApiError(RegistryError);

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

async fn create_user(
    State(registry): State<SharedRegistry>,
    Json(body): Json<CreateUserBody>,
) -> Json<UserBody> {
    Json(registry.create(body.into()).await.into())
}

async fn list_users(State(registry): State<SharedRegistry>) -> Json<Vec<UserBody>> {
    Json(registry.list_all().await.into_iter().map(UserBody::from).collect())
}

async fn get_user(
    State(registry): State<SharedRegistry>,
    Path(id): Path<i64>,
) -> Result<Json<UserBody>, ApiError> {
    let user = registry.get_by_id(UserId::new(id)).await?;
    Ok(Json(user.into()))
}

async fn filter_users(
    State(registry): State<SharedRegistry>,
    Query(filter): Query<NameFilter>,
) -> Json<Vec<UserBody>> {
    let users = registry.filter_by_name(&filter.name).await;
    Json(users.into_iter().map(UserBody::from).collect())
}

async fn delete_user(
    State(registry): State<SharedRegistry>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    registry.delete_by_id(UserId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Build the HTTP API router around the given registry.
pub fn build_router(registry: SharedRegistry, config: &ServerConfig) -> Router {
    let users = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/filter", get(filter_users))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .with_state(registry);

    let base = config.base_path();
    if base.is_empty() {
        users
    } else {
        Router::new().nest(&base, users)
    }
}
