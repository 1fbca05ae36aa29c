use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::error::{ApiResult, Entity};
use crate::models::{CreateUser, UserResponse};
use crate::services::{parse_id, UserService};

pub fn user_routes(users: UserService) -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
        .with_state(users)
}

/// Register a new user
pub async fn create_user(
    State(users): State<UserService>,
    Json(request): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    info!("Creating user {}", request.email);

    let user = users.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Fetch a user with their practice stats
pub async fn get_user(
    State(users): State<UserService>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_id(&user_id, Entity::User)?;
    Ok(Json(users.get_user(user_id).await?))
}
