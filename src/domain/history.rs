use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::types::clamp_percentage;

/// History identifiers arrive either as JSON strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryId::Number(id) => write!(f, "{id}"),
            HistoryId::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for HistoryId {
    fn from(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(id) => HistoryId::Number(id),
            Err(_) => HistoryId::Text(value.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: HistoryId,
    pub text: String,
    #[serde(deserialize_with = "percentage")]
    pub toxicity_percentage: f64,
    /// Stored as NULL for clean texts.
    #[serde(default, deserialize_with = "nullable_string")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub timestamp: String,
    #[serde(default)]
    pub is_toxic: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    #[serde(default)]
    pub total_analyses: u64,
    #[serde(default)]
    pub toxic_count: u64,
    #[serde(default)]
    pub safe_count: u64,
    #[serde(default)]
    pub average_score: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryEnvelope {
    #[serde(default)]
    pub history: Vec<HistoryItem>,
}

fn percentage<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_percentage)
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
