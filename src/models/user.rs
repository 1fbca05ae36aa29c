use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub streak: u32,
    pub exercises_done: u32,
    pub practice_time: f64,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            streak: 0,
            exercises_done: 0,
            practice_time: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Credit a finished routine of `exercise_count` exercises.
    pub fn record_completed_routine(&mut self, exercise_count: usize) {
        let count = u32::try_from(exercise_count).unwrap_or(u32::MAX);
        self.exercises_done = self.exercises_done.saturating_add(count);
        self.streak = self.streak.saturating_add(1);
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub streak: u32,
    pub exercises_done: u32,
    pub practice_time: f64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            streak: u.streak,
            exercises_done: u.exercises_done,
            practice_time: u.practice_time,
            created_at: u.created_at,
        }
    }
}
