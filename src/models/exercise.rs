use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub title: String,
    pub duration: String,
    pub target_area: String,
    pub description: String,
    pub image_url: String,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExercise {
    pub title: String,
    pub duration: String,
    pub target_area: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl From<CreateExercise> for Exercise {
    fn from(req: CreateExercise) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: req.title,
            duration: req.duration,
            target_area: req.target_area,
            description: req.description,
            image_url: req.image_url,
            instructions: req.instructions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub title: String,
    pub duration: String,
    pub target_area: String,
    pub description: String,
    pub image_url: String,
    pub instructions: Vec<String>,
}

impl From<Exercise> for ExerciseResponse {
    fn from(e: Exercise) -> Self {
        Self {
            id: e.id,
            title: e.title,
            duration: e.duration,
            target_area: e.target_area,
            description: e.description,
            image_url: e.image_url,
            instructions: e.instructions,
        }
    }
}
