use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::UserService;
use crate::error::ApiResult;
use crate::models::{CreateProgress, Progress, ProgressResponse};
use crate::repository::ProgressRepository;

#[derive(Clone)]
pub struct ProgressService {
    progress: Arc<dyn ProgressRepository>,
    users: UserService,
}

impl ProgressService {
    pub fn new(progress: Arc<dyn ProgressRepository>, users: UserService) -> Self {
        Self { progress, users }
    }

    #[instrument(skip(self, progress_data), fields(user_id = %progress_data.user_id))]
    pub async fn create_progress(&self, progress_data: CreateProgress) -> ApiResult<ProgressResponse> {
        let user_id = self.users.resolve_id(&progress_data.user_id).await?;

        let entry = Progress::new(user_id, progress_data.image_url, progress_data.notes);
        self.progress.insert_progress(entry.clone()).await?;

        info!(progress_id = %entry.id, "Recorded progress entry");
        Ok(entry.into())
    }

    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: Uuid) -> ApiResult<Vec<ProgressResponse>> {
        self.users.ensure_exists(user_id).await?;

        let entries = self.progress.list_progress_for_user(user_id).await?;
        Ok(entries.into_iter().map(ProgressResponse::from).collect())
    }
}
