use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use colored::Colorize;

use super::{
    category, gauge,
    severity::{RiskCategory, UNKNOWN_RISK_ICON},
    theme::{self, size, spacing::INDENT},
    timefmt,
};
use crate::domain::AnalyzeResult;

fn truncate_technique(technique: &str) -> String {
    if technique.chars().count() > size::TECHNIQUE_MAX {
        let head: String = technique.chars().take(size::TECHNIQUE_MAX).collect();
        format!("{head}...")
    } else {
        technique.to_string()
    }
}

fn category_cell(result: &AnalyzeResult) -> String {
    match result.category.as_deref() {
        Some(raw) => match RiskCategory::parse(raw) {
            Some(risk) => {
                let label = raw.replace('_', " ");
                format!("{} {}", risk.icon(), label.as_str().color(risk.color()))
            }
            None => format!("{UNKNOWN_RISK_ICON} {}", category::display_name(raw)),
        },
        None => format!("{UNKNOWN_RISK_ICON} -"),
    }
}

/// Technical panel: score, category, latency, model and technique.
pub fn render_details(result: &AnalyzeResult, now: DateTime<Utc>, tz: Tz) -> String {
    let mut lines = vec![
        theme::heading("📊 Detalles del análisis").to_string(),
        format!(
            "{INDENT}Score {}   Categoría {}   Tiempo {}ms",
            gauge::percent_label(result.toxicity_percentage),
            category_cell(result),
            result.response_time_ms
        ),
        format!(
            "{INDENT}{} {}   {} {}",
            theme::muted("Caracteres:"),
            result.text_length,
            theme::muted("Palabras clave:"),
            result.keywords_found
        ),
    ];
    if !result.model_used.is_empty() {
        lines.push(format!("{INDENT}{} {}", theme::muted("Modelo:"), result.model_used));
    }
    if let Some(technique) = result.classification_technique.as_deref() {
        lines.push(format!(
            "{INDENT}{} {}",
            theme::muted("Técnica:"),
            truncate_technique(technique)
        ));
    }
    if !result.timestamp.is_empty() {
        lines.push(format!(
            "{INDENT}{} {}",
            theme::muted("Analizado:"),
            timefmt::relative_time(&result.timestamp, now, tz)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_result;

    #[test]
    fn long_technique_is_truncated() {
        assert_eq!(truncate_technique("hybrid"), "hybrid");
        assert_eq!(
            truncate_technique("contextual-hybrid-ensemble-with-rules"),
            "contextual-hybrid-ensembl..."
        );
    }

    #[test]
    fn risk_category_gets_icon() {
        crate::render::plain();
        let mut result = test_result(true, 75.0);
        result.category = Some("high_risk".into());
        assert!(category_cell(&result).starts_with("🟠 high risk"));

        result.category = Some("insulto".into());
        assert_eq!(category_cell(&result), "⚪ Insulto");
    }

    #[test]
    fn details_list_metrics() {
        crate::render::plain();
        let result = test_result(false, 10.0);
        let now = timefmt::parse_timestamp("2024-01-01T00:00:30Z").unwrap();
        let rendered = render_details(&result, now, chrono_tz::UTC);
        assert!(rendered.contains("Score 10%"));
        assert!(rendered.contains("Tiempo 42ms"));
        assert!(rendered.contains("Modelo: demo"));
        assert!(rendered.contains("Ahora mismo"));
    }
}
