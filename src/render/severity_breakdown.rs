use colored::Colorize;

use super::{
    category,
    severity::SeverityLevel,
    theme::{self, size, spacing::INDENT},
};
use crate::domain::{AnalyzeResult, SeverityEntry};

/// Categories to show, in the backend's detection order. When the backend
/// omits `detected_categories`, every breakdown entry is shown.
fn ordered_entries(result: &AnalyzeResult) -> Vec<(&str, &SeverityEntry)> {
    if result.detected_categories.is_empty() {
        return result
            .severity_breakdown
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
    }
    result
        .detected_categories
        .iter()
        .filter_map(|key| {
            result
                .severity_breakdown
                .get(key)
                .map(|entry| (key.as_str(), entry))
        })
        .collect()
}

/// `None` when the result carries no breakdown.
pub fn render_severity_breakdown(result: &AnalyzeResult) -> Option<String> {
    let entries = ordered_entries(result);
    if entries.is_empty() {
        return None;
    }

    let mut lines = vec![theme::heading("🚨 Análisis de severidad").to_string()];
    for (key, entry) in entries {
        let level = SeverityLevel::from_score(entry.avg_severity);
        lines.push(format!(
            "{INDENT}{} {}",
            format!("[{}]", level.label()).color(level.color()).bold(),
            category::display_name(key)
        ));
        lines.push(format!(
            "{INDENT}{INDENT}Severidad {:.0}%  Coincidencias {}  Puntuación final {:.3}",
            entry.avg_severity * 100.0,
            entry.match_count,
            entry.final_score
        ));
        lines.push(format!(
            "{INDENT}{INDENT}{}",
            theme::bar(
                theme::cells_for(entry.avg_severity * 100.0, size::SEVERITY_BAR_WIDTH),
                size::SEVERITY_BAR_WIDTH,
                level.color()
            )
        ));
    }
    lines.push(
        theme::muted("Cada palabra tiene un peso de severidad que influye en el resultado global")
            .to_string(),
    );
    Some(lines.join("\n"))
}
