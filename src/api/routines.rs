use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use tracing::info;

use crate::error::{ApiResult, Entity};
use crate::models::{CreateRoutine, RoutineResponse};
use crate::services::{parse_id, RoutineService};

// `:id` is a user id on the list route and a routine id on `complete`.
pub fn routine_routes(routines: RoutineService) -> Router {
    Router::new()
        .route("/", post(create_routine))
        .route("/:id", get(get_user_routines))
        .route("/:id/complete", put(complete_routine))
        .with_state(routines)
}

/// Create a routine from existing catalog exercises
pub async fn create_routine(
    State(routines): State<RoutineService>,
    Json(request): Json<CreateRoutine>,
) -> ApiResult<(StatusCode, Json<RoutineResponse>)> {
    let routine = routines.create_routine(request).await?;
    Ok((StatusCode::CREATED, Json(routine)))
}

/// All routines of one user
pub async fn get_user_routines(
    State(routines): State<RoutineService>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<RoutineResponse>>> {
    let user_id = parse_id(&user_id, Entity::User)?;
    Ok(Json(routines.list_for_user(user_id).await?))
}

/// Mark a routine as done and update the owner's streak and exercise count
pub async fn complete_routine(
    State(routines): State<RoutineService>,
    Path(routine_id): Path<String>,
) -> ApiResult<Json<RoutineResponse>> {
    info!("Completing routine {}", routine_id);

    let routine_id = parse_id(&routine_id, Entity::Routine)?;
    Ok(Json(routines.complete_routine(routine_id).await?))
}
