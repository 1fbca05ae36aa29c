//! Persistence ports used by the services.
//!
//! Services compute ids and timestamps; repositories only store and look up.
//! Every "list" operation returns rows in insertion order.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Exercise, Progress, Routine, RoutineCompletion, User};

pub use memory::InMemoryStore;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert_user(&self, user: User) -> anyhow::Result<()>;
    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn user_exists(&self, id: Uuid) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    async fn insert_exercise(&self, exercise: Exercise) -> anyhow::Result<()>;
    async fn find_exercise(&self, id: Uuid) -> anyhow::Result<Option<Exercise>>;
    async fn exercise_exists(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn list_exercises(&self) -> anyhow::Result<Vec<Exercise>>;
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn insert_progress(&self, entry: Progress) -> anyhow::Result<()>;
    async fn list_progress_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Progress>>;
}

#[async_trait]
pub trait RoutineRepository: Send + Sync {
    async fn insert_routine(&self, routine: Routine) -> anyhow::Result<()>;
    async fn list_routines_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Routine>>;

    /// Mark a routine completed and credit its owner in one step.
    ///
    /// Returns `None` if the routine does not exist. A routine that is already
    /// completed is returned unchanged with `newly_completed == false`.
    async fn complete_routine(&self, id: Uuid) -> anyhow::Result<Option<RoutineCompletion>>;
}
