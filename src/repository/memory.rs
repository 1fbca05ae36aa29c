use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ExerciseRepository, ProgressRepository, RoutineRepository, UserRepository};
use crate::models::{Exercise, Progress, Routine, RoutineCompletion, User};

/// Rows keyed by id, remembering the order they were inserted in.
#[derive(Debug)]
struct Table<T> {
    rows: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, id: Uuid, row: T) {
        if self.rows.insert(id, row).is_none() {
            self.order.push(id);
        }
    }

    fn get(&self, id: &Uuid) -> Option<&T> {
        self.rows.get(id)
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut T> {
        self.rows.get_mut(id)
    }

    fn contains(&self, id: &Uuid) -> bool {
        self.rows.contains_key(id)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }
}

#[derive(Debug)]
struct Tables {
    users: Table<User>,
    exercises: Table<Exercise>,
    progress: Table<Progress>,
    routines: Table<Routine>,
}

/// Volatile store shared by all services. One lock covers every table, so a
/// routine completion and the user credit it causes are applied together.
#[derive(Debug)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                users: Table::new(),
                exercises: Table::new(),
                progress: Table::new(),
                routines: Table::new(),
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_user(&self, user: User) -> anyhow::Result<()> {
        self.tables.write().await.users.insert(user.id, user);
        Ok(())
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn user_exists(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.tables.read().await.users.contains(&id))
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn insert_exercise(&self, exercise: Exercise) -> anyhow::Result<()> {
        self.tables.write().await.exercises.insert(exercise.id, exercise);
        Ok(())
    }

    async fn find_exercise(&self, id: Uuid) -> anyhow::Result<Option<Exercise>> {
        Ok(self.tables.read().await.exercises.get(&id).cloned())
    }

    async fn exercise_exists(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.tables.read().await.exercises.contains(&id))
    }

    async fn list_exercises(&self) -> anyhow::Result<Vec<Exercise>> {
        Ok(self.tables.read().await.exercises.iter().cloned().collect())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryStore {
    async fn insert_progress(&self, entry: Progress) -> anyhow::Result<()> {
        self.tables.write().await.progress.insert(entry.id, entry);
        Ok(())
    }

    async fn list_progress_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Progress>> {
        let tables = self.tables.read().await;
        Ok(tables
            .progress
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RoutineRepository for InMemoryStore {
    async fn insert_routine(&self, routine: Routine) -> anyhow::Result<()> {
        self.tables.write().await.routines.insert(routine.id, routine);
        Ok(())
    }

    async fn list_routines_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Routine>> {
        let tables = self.tables.read().await;
        Ok(tables
            .routines
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn complete_routine(&self, id: Uuid) -> anyhow::Result<Option<RoutineCompletion>> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        let Some(routine) = tables.routines.get_mut(&id) else {
            return Ok(None);
        };

        if routine.completed {
            let user = tables.users.get(&routine.user_id).cloned();
            return Ok(Some(RoutineCompletion {
                routine: routine.clone(),
                user,
                newly_completed: false,
            }));
        }

        routine.completed = true;
        let user = tables.users.get_mut(&routine.user_id).map(|user| {
            user.record_completed_routine(routine.exercises.len());
            user.clone()
        });

        Ok(Some(RoutineCompletion {
            routine: routine.clone(),
            user,
            newly_completed: true,
        }))
    }
}
