use parking_lot::Mutex;

use crate::{
    api::{ApiError, ToxiGuardClient},
    domain::AnalyzeResult,
};

pub const EMPTY_INPUT_MESSAGE: &str = "Por favor ingresa un texto para analizar";

/// Lifecycle of the most recent analysis request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Success(AnalyzeResult),
    Error(String),
}

impl AnalysisStatus {
    pub fn result(&self) -> Option<&AnalyzeResult> {
        match self {
            AnalysisStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisStatus::Loading)
    }
}

#[derive(Debug, Default)]
struct Tracked {
    status: AnalysisStatus,
    /// Ticket of the latest call. Responses carrying an older ticket are stale.
    latest: u64,
}

pub struct AnalysisSession {
    client: ToxiGuardClient,
    state: Mutex<Tracked>,
}

impl AnalysisSession {
    pub fn new(client: ToxiGuardClient) -> Self {
        Self {
            client,
            state: Mutex::new(Tracked::default()),
        }
    }

    pub fn snapshot(&self) -> AnalysisStatus {
        self.state.lock().status.clone()
    }

    /// Runs one analysis and returns the status visible once it settles.
    ///
    /// Overlapping calls are allowed; only the most recently issued call may
    /// write its outcome, so an older response that arrives late is dropped.
    pub async fn analyze_text(&self, text: &str) -> AnalysisStatus {
        let trimmed = text.trim();
        let ticket = {
            let mut state = self.state.lock();
            state.latest += 1;
            if trimmed.is_empty() {
                state.status = AnalysisStatus::Error(EMPTY_INPUT_MESSAGE.to_string());
                return state.status.clone();
            }
            state.status = AnalysisStatus::Loading;
            state.latest
        };

        let outcome = self.client.analyze(trimmed).await;

        let mut state = self.state.lock();
        if state.latest != ticket {
            tracing::debug!(
                target: "analysis",
                ticket,
                latest = state.latest,
                "discarding stale analysis response"
            );
            return state.status.clone();
        }
        state.status = match outcome {
            Ok(result) => AnalysisStatus::Success(result),
            Err(err) => {
                tracing::warn!(target: "analysis", error = %err, "analysis failed");
                AnalysisStatus::Error(self.describe(&err))
            }
        };
        state.status.clone()
    }

    /// Drops the current result or error. An in-flight request keeps loading.
    pub fn clear_result(&self) {
        let mut state = self.state.lock();
        if !state.status.is_loading() {
            state.status = AnalysisStatus::Idle;
        }
    }

    fn describe(&self, err: &ApiError) -> String {
        match err {
            ApiError::Transport { .. } => match self.client.base_url() {
                Some(url) => format!(
                    "No se pudo conectar al servidor. Verifica que el backend esté ejecutándose en {}",
                    url.as_str().trim_end_matches('/')
                ),
                None => err.to_string(),
            },
            _ => err.to_string(),
        }
    }
}
