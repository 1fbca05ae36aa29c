use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercises: Vec<Uuid>,
    pub completed: bool,
    pub date: DateTime<Utc>,
}

impl Routine {
    pub fn new(user_id: Uuid, exercises: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            exercises,
            completed: false,
            date: Utc::now(),
        }
    }
}

/// Result of marking a routine complete.
#[derive(Debug, Clone)]
pub struct RoutineCompletion {
    pub routine: Routine,
    /// Owner after stats were credited; `None` if the owner record is gone.
    pub user: Option<User>,
    /// False when the routine had already been completed and nothing changed.
    pub newly_completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRoutine {
    pub user_id: String,
    #[serde(default)]
    pub exercise_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercises: Vec<Uuid>,
    pub completed: bool,
    pub date: DateTime<Utc>,
}

impl From<Routine> for RoutineResponse {
    fn from(r: Routine) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            exercises: r.exercises,
            completed: r.completed,
            date: r.date,
        }
    }
}
