pub mod analysis;
pub mod history;

pub use analysis::{AnalysisSession, AnalysisStatus};
pub use history::{HistorySession, HistoryState};
