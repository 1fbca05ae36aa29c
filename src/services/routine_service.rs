use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{ExerciseService, UserService};
use crate::error::{ApiError, ApiResult, Entity};
use crate::models::{CreateRoutine, Routine, RoutineResponse};
use crate::repository::RoutineRepository;

#[derive(Clone)]
pub struct RoutineService {
    routines: Arc<dyn RoutineRepository>,
    users: UserService,
    exercises: ExerciseService,
}

impl RoutineService {
    pub fn new(routines: Arc<dyn RoutineRepository>, users: UserService, exercises: ExerciseService) -> Self {
        Self {
            routines,
            users,
            exercises,
        }
    }

    /// Create a routine. The owner is checked first, then each exercise in order;
    /// nothing is stored if any check fails.
    #[instrument(skip(self, routine_data), fields(user_id = %routine_data.user_id))]
    pub async fn create_routine(&self, routine_data: CreateRoutine) -> ApiResult<RoutineResponse> {
        let user_id = self.users.resolve_id(&routine_data.user_id).await?;
        let exercise_ids = self.exercises.resolve_ids(&routine_data.exercise_ids).await?;

        let routine = Routine::new(user_id, exercise_ids);
        self.routines.insert_routine(routine.clone()).await?;

        info!(routine_id = %routine.id, exercises = routine.exercises.len(), "Created routine");
        Ok(routine.into())
    }

    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: Uuid) -> ApiResult<Vec<RoutineResponse>> {
        self.users.ensure_exists(user_id).await?;

        let routines = self.routines.list_routines_for_user(user_id).await?;
        Ok(routines.into_iter().map(RoutineResponse::from).collect())
    }

    /// Mark a routine done and credit its owner: one streak day plus one
    /// finished exercise per entry. Completing twice credits only once.
    #[instrument(skip(self))]
    pub async fn complete_routine(&self, routine_id: Uuid) -> ApiResult<RoutineResponse> {
        let completion = self
            .routines
            .complete_routine(routine_id)
            .await?
            .ok_or_else(|| ApiError::not_found(Entity::Routine))?;

        if !completion.newly_completed {
            info!("Routine already completed, stats left unchanged");
        } else if let Some(user) = &completion.user {
            info!(
                user_id = %user.id,
                streak = user.streak,
                exercises_done = user.exercises_done,
                "Routine completed"
            );
        } else {
            warn!(user_id = %completion.routine.user_id, "Completed routine has no owner record");
        }

        Ok(completion.routine.into())
    }
}
