use crate::errors::AppError;
use crate::models::Task;
use crate::storage::persist_tasks;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tasks: Arc<Mutex<Vec<Task>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, tasks: Vec<Task>) -> Self {
        Self {
            data_path,
            tasks: Arc::new(Mutex::new(tasks)),
        }
    }

    /// Every change goes through here: apply under the lock, then rewrite
    /// the full collection to disk before returning.
    pub async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Vec<Task>) -> T,
    ) -> Result<T, AppError> {
        let mut tasks = self.tasks.lock().await;
        let outcome = apply(&mut tasks);
        persist_tasks(&self.data_path, &tasks).await?;
        Ok(outcome)
    }
}
