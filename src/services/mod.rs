// Business logic services

pub mod user_service;
pub mod exercise_service;
pub mod progress_service;
pub mod routine_service;
pub mod chat_service;

pub use user_service::UserService;
pub use exercise_service::ExerciseService;
pub use progress_service::ProgressService;
pub use routine_service::RoutineService;
pub use chat_service::{ChatService, CoachResponder, KeywordResponder};

use uuid::Uuid;

use crate::error::{ApiError, ApiResult, Entity};

/// Parse a client-supplied id. A malformed id cannot name a stored record,
/// so it is reported as missing rather than as bad input.
pub fn parse_id(raw: &str, entity: Entity) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(entity))
}
