pub mod history;
pub mod types;

pub use history::{HistoryId, HistoryItem, HistoryStats};
pub use types::{AnalyzeRequest, AnalyzeResult, SeverityEntry};
