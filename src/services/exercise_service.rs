use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult, Entity};
use crate::models::{CreateExercise, Exercise, ExerciseResponse};
use crate::repository::ExerciseRepository;

#[derive(Clone)]
pub struct ExerciseService {
    exercises: Arc<dyn ExerciseRepository>,
}

impl ExerciseService {
    pub fn new(exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { exercises }
    }

    #[instrument(skip(self, exercise_data), fields(title = %exercise_data.title))]
    pub async fn create_exercise(&self, exercise_data: CreateExercise) -> ApiResult<ExerciseResponse> {
        let exercise = Exercise::from(exercise_data);
        self.exercises.insert_exercise(exercise.clone()).await?;

        info!(exercise_id = %exercise.id, "Added exercise to catalog");
        Ok(exercise.into())
    }

    /// All exercises, oldest first.
    pub async fn list_exercises(&self) -> ApiResult<Vec<ExerciseResponse>> {
        let exercises = self.exercises.list_exercises().await?;
        Ok(exercises.into_iter().map(ExerciseResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_exercise(&self, exercise_id: Uuid) -> ApiResult<ExerciseResponse> {
        self.exercises
            .find_exercise(exercise_id)
            .await?
            .map(ExerciseResponse::from)
            .ok_or_else(|| ApiError::not_found(Entity::Exercise))
    }

    /// Resolve routine exercise references in order, failing on the first one
    /// that is not in the catalog.
    pub async fn resolve_ids(&self, raw_ids: &[String]) -> ApiResult<Vec<Uuid>> {
        let mut ids = Vec::with_capacity(raw_ids.len());

        for raw in raw_ids {
            let missing = || ApiError::not_found_by_id(Entity::Exercise, raw.as_str());

            let id = Uuid::parse_str(raw).map_err(|_| missing())?;
            if !self.exercises.exercise_exists(id).await? {
                return Err(missing());
            }
            ids.push(id);
        }

        Ok(ids)
    }
}
