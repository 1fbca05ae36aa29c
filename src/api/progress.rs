use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::error::{ApiResult, Entity};
use crate::models::{CreateProgress, ProgressResponse};
use crate::services::{parse_id, ProgressService};

pub fn progress_routes(progress: ProgressService) -> Router {
    Router::new()
        .route("/", post(create_progress))
        .route("/:id", get(get_user_progress))
        .with_state(progress)
}

/// Record a progress photo and notes for a user
pub async fn create_progress(
    State(progress): State<ProgressService>,
    Json(request): Json<CreateProgress>,
) -> ApiResult<(StatusCode, Json<ProgressResponse>)> {
    let entry = progress.create_progress(request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// All progress entries of one user
pub async fn get_user_progress(
    State(progress): State<ProgressService>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<ProgressResponse>>> {
    let user_id = parse_id(&user_id, Entity::User)?;
    Ok(Json(progress.list_for_user(user_id).await?))
}
