//! Terminal renderers. Every function here is a pure function of its inputs
//! and returns text; colouring goes through [`theme`].

pub mod badge;
pub mod boundary;
pub mod category;
pub mod chart;
pub mod colored_text;
pub mod details;
pub mod explanation;
pub mod gauge;
pub mod history_grid;
pub mod result;
pub mod severity;
pub mod severity_breakdown;
pub mod theme;
pub mod timefmt;

pub use boundary::ErrorBoundary;
pub use chart::{distribution, stats_pie};
pub use history_grid::render_history;
pub use result::{render_status, RenderContext};

/// Turns ANSI styling on or off for the whole process.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

#[cfg(test)]
pub(crate) fn plain() {
    set_color_enabled(false);
}

#[cfg(test)]
pub(crate) fn test_result(toxic: bool, percentage: f64) -> crate::domain::AnalyzeResult {
    crate::domain::AnalyzeResult {
        toxic,
        score: percentage / 100.0,
        toxicity_percentage: percentage,
        category: None,
        labels: Vec::new(),
        text_length: 11,
        keywords_found: 0,
        response_time_ms: 42,
        timestamp: "2024-01-01T00:00:00Z".to_string(),
        model_used: "demo".to_string(),
        detected_categories: Vec::new(),
        explanations: Default::default(),
        severity_breakdown: Default::default(),
        classification_technique: None,
        toxicity_map: Default::default(),
    }
}
