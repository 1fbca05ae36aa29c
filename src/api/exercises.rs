use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::error::{ApiResult, Entity};
use crate::models::{CreateExercise, ExerciseResponse};
use crate::services::{parse_id, ExerciseService};

pub fn exercise_routes(exercises: ExerciseService) -> Router {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route("/:id", get(get_exercise))
        .with_state(exercises)
}

/// Add an exercise to the catalog
pub async fn create_exercise(
    State(exercises): State<ExerciseService>,
    Json(request): Json<CreateExercise>,
) -> ApiResult<(StatusCode, Json<ExerciseResponse>)> {
    let exercise = exercises.create_exercise(request).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// List the whole catalog in the order it was created
pub async fn list_exercises(
    State(exercises): State<ExerciseService>,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    Ok(Json(exercises.list_exercises().await?))
}

/// Fetch one exercise by id
pub async fn get_exercise(
    State(exercises): State<ExerciseService>,
    Path(exercise_id): Path<String>,
) -> ApiResult<Json<ExerciseResponse>> {
    let exercise_id = parse_id(&exercise_id, Entity::Exercise)?;
    Ok(Json(exercises.get_exercise(exercise_id).await?))
}
