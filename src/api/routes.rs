use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::chat::chat_routes;
use super::exercises::exercise_routes;
use super::health::health_check;
use super::progress::progress_routes;
use super::routines::routine_routes;
use super::users::user_routes;
use crate::repository::{ExerciseRepository, ProgressRepository, RoutineRepository, UserRepository};
use crate::services::{
    ChatService, CoachResponder, ExerciseService, KeywordResponder, ProgressService, RoutineService,
    UserService,
};

/// Build the application router over a single backing store.
pub fn create_routes<S>(store: Arc<S>) -> Router
where
    S: UserRepository + ExerciseRepository + ProgressRepository + RoutineRepository + 'static,
{
    create_routes_with_responder(store, Arc::new(KeywordResponder))
}

pub fn create_routes_with_responder<S>(store: Arc<S>, responder: Arc<dyn CoachResponder>) -> Router
where
    S: UserRepository + ExerciseRepository + ProgressRepository + RoutineRepository + 'static,
{
    let users = UserService::new(store.clone());
    let exercises = ExerciseService::new(store.clone());
    let progress = ProgressService::new(store.clone(), users.clone());
    let routines = RoutineService::new(store, users.clone(), exercises.clone());
    let chat = ChatService::new(users.clone(), responder);

    Router::new()
        .route("/health", get(health_check))
        .nest("/users", user_routes(users))
        .nest("/exercises", exercise_routes(exercises))
        .nest("/progress", progress_routes(progress))
        .nest("/routines", routine_routes(routines))
        .nest("/ai", chat_routes(chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Any origin, method and header is allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
