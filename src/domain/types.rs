use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// Per-category severity figures reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityEntry {
    pub avg_severity: f64,
    pub match_count: u32,
    pub final_score: f64,
}

/// One classification as returned by `POST /analyze`.
///
/// Only `toxic`, `score`, `labels`, `text_length` and `keywords_found` are
/// guaranteed by the backend; everything else defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResult {
    pub toxic: bool,
    pub score: f64,
    pub toxicity_percentage: f64,
    pub category: Option<String>,
    pub labels: Vec<String>,
    pub text_length: u64,
    pub keywords_found: u64,
    pub response_time_ms: u64,
    pub timestamp: String,
    pub model_used: String,
    pub detected_categories: Vec<String>,
    pub explanations: BTreeMap<String, String>,
    pub severity_breakdown: BTreeMap<String, SeverityEntry>,
    pub classification_technique: Option<String>,
    pub toxicity_map: BTreeMap<String, f64>,
}

#[derive(Deserialize)]
struct RawAnalyzeResult {
    toxic: bool,
    score: f64,
    #[serde(default)]
    toxicity_percentage: Option<f64>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    text_length: u64,
    #[serde(default)]
    keywords_found: u64,
    #[serde(default)]
    response_time_ms: u64,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    model_used: String,
    #[serde(default)]
    detected_categories: Vec<String>,
    #[serde(default)]
    explanations: BTreeMap<String, String>,
    #[serde(default)]
    severity_breakdown: BTreeMap<String, SeverityEntry>,
    #[serde(default)]
    classification_technique: Option<String>,
    #[serde(default)]
    toxicity_map: BTreeMap<String, f64>,
}

impl<'de> Deserialize<'de> for AnalyzeResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAnalyzeResult::deserialize(deserializer)?;
        let percentage = raw
            .toxicity_percentage
            .unwrap_or(raw.score * 100.0);
        Ok(Self {
            toxic: raw.toxic,
            score: raw.score.clamp(0.0, 1.0),
            toxicity_percentage: clamp_percentage(percentage),
            category: raw.category.filter(|c| !c.trim().is_empty()),
            labels: raw.labels,
            text_length: raw.text_length,
            keywords_found: raw.keywords_found,
            response_time_ms: raw.response_time_ms,
            timestamp: raw.timestamp,
            model_used: raw.model_used,
            detected_categories: raw.detected_categories,
            explanations: raw.explanations,
            severity_breakdown: raw.severity_breakdown,
            classification_technique: raw.classification_technique,
            toxicity_map: raw.toxicity_map,
        })
    }
}

pub(crate) fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
