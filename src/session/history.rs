use parking_lot::Mutex;

use crate::{
    api::{ApiError, ToxiGuardClient},
    domain::{HistoryId, HistoryItem, HistoryStats},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    pub history: Vec<HistoryItem>,
    pub stats: Option<HistoryStats>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct HistorySession {
    client: ToxiGuardClient,
    state: Mutex<HistoryState>,
}

impl HistorySession {
    pub fn new(client: ToxiGuardClient) -> Self {
        Self {
            client,
            state: Mutex::new(HistoryState::default()),
        }
    }

    pub fn snapshot(&self) -> HistoryState {
        self.state.lock().clone()
    }

    /// Initial load: list and stats are fetched concurrently.
    pub async fn mount(&self) {
        futures::join!(self.load_history(), self.load_stats());
    }

    pub async fn load_history(&self) {
        {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
        }

        let outcome = self.client.fetch_history().await;

        let mut state = self.state.lock();
        match outcome {
            Ok(history) => state.history = history,
            Err(err) => {
                tracing::error!(target: "history", error = %err, "failed to load history");
                state.error = Some(describe_load_error(&err));
            }
        }
        state.loading = false;
    }

    /// Stats are auxiliary: failures are logged and never surface as `error`.
    pub async fn load_stats(&self) {
        match self.client.fetch_stats().await {
            Ok(stats) => self.state.lock().stats = Some(stats),
            Err(err) => {
                tracing::warn!(target: "history", error = %err, "failed to load history stats");
            }
        }
    }

    /// Deletes one item, then re-fetches list and stats from the backend.
    /// Returns whether the backend accepted the delete; a failed reload
    /// afterwards only shows up in `error`.
    pub async fn delete_item(&self, id: &HistoryId) -> bool {
        match self.client.delete_history_item(id).await {
            Ok(()) => {
                self.load_history().await;
                self.load_stats().await;
                true
            }
            Err(err) => {
                tracing::error!(target: "history", id = %id, error = %err, "failed to delete history item");
                self.state.lock().error = Some(format!("Error eliminando elemento: {err}"));
                false
            }
        }
    }

    /// Returns whether the backend accepted the bulk delete. An `error` left
    /// by an earlier operation is not touched.
    pub async fn clear_history(&self) -> bool {
        match self.client.clear_history().await {
            Ok(()) => {
                let mut state = self.state.lock();
                state.history.clear();
                state.stats = None;
                true
            }
            Err(err) => {
                tracing::error!(target: "history", error = %err, "failed to clear history");
                self.state.lock().error = Some(format!("Error limpiando historial: {err}"));
                false
            }
        }
    }
}

fn describe_load_error(err: &ApiError) -> String {
    match err {
        ApiError::Transport { .. } => {
            "No se pudo conectar al servidor para cargar el historial".to_string()
        }
        ApiError::Status { status, .. } => {
            format!("Error cargando historial: {}", status.as_u16())
        }
        other => other.to_string(),
    }
}
