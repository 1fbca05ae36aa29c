use anyhow::Result;

use crate::models::CreateExercise;
use crate::services::ExerciseService;

/// Fills an empty exercise catalog with a few starter exercises.
pub struct CatalogSeeder {
    exercises: ExerciseService,
}

impl CatalogSeeder {
    pub fn new(exercises: ExerciseService) -> Self {
        Self { exercises }
    }

    /// Returns the number of exercises added; zero if the catalog already had entries.
    pub async fn seed_all(&self) -> Result<usize> {
        if !self.exercises.list_exercises().await?.is_empty() {
            tracing::info!("Exercise catalog already populated, skipping seeding");
            return Ok(0);
        }

        tracing::info!("Seeding demo exercise catalog...");

        let demo_exercises = demo_exercises();
        let count = demo_exercises.len();
        for exercise in demo_exercises {
            let created = self.exercises.create_exercise(exercise).await?;
            tracing::debug!(exercise_id = %created.id, "Seeded exercise {}", created.title);
        }

        tracing::info!("Seeded {} exercises", count);
        Ok(count)
    }
}

fn demo_exercises() -> Vec<CreateExercise> {
    vec![
        CreateExercise {
            title: "Forehead Smoother".to_string(),
            duration: "3 minutes".to_string(),
            target_area: "Forehead".to_string(),
            description: "Releases tension held between the brows and across the forehead.".to_string(),
            image_url: "/images/exercises/forehead-smoother.jpg".to_string(),
            instructions: vec![
                "Place both hands flat on your forehead, fingers pointing inward.".to_string(),
                "Sweep your fingers outward toward the temples with light pressure.".to_string(),
                "Repeat slowly for the full duration, keeping the brows relaxed.".to_string(),
            ],
        },
        CreateExercise {
            title: "Cheek Lifter".to_string(),
            duration: "2 minutes".to_string(),
            target_area: "Cheeks".to_string(),
            description: "Tones the cheek muscles for a lifted look.".to_string(),
            image_url: "/images/exercises/cheek-lifter.jpg".to_string(),
            instructions: vec![
                "Open your mouth into an O shape, covering your teeth with your lips.".to_string(),
                "Smile with the corners of your mouth to lift the cheeks.".to_string(),
                "Hold for 30 seconds, release, and repeat.".to_string(),
            ],
        },
        CreateExercise {
            title: "Jawline Definer".to_string(),
            duration: "5 minutes".to_string(),
            target_area: "Jaw".to_string(),
            description: "Works the jaw and neck to sharpen the jawline.".to_string(),
            image_url: "/images/exercises/jawline-definer.jpg".to_string(),
            instructions: vec![
                "Tilt your head back and look at the ceiling.".to_string(),
                "Push your lower jaw forward and hold for ten seconds.".to_string(),
                "Return to neutral and repeat ten times.".to_string(),
            ],
        },
        CreateExercise {
            title: "Eye Brightener".to_string(),
            duration: "2 minutes".to_string(),
            target_area: "Eyes".to_string(),
            description: "Reduces puffiness and strengthens the muscles around the eyes.".to_string(),
            image_url: "/images/exercises/eye-brightener.jpg".to_string(),
            instructions: vec![
                "Form a V with your index and middle fingers around each eye.".to_string(),
                "Look up and squint the lower lids upward.".to_string(),
                "Relax and repeat six times.".to_string(),
            ],
        },
    ]
}
