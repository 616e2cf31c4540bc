use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use colored::Colorize;

use super::{
    colored_text::{colored_text, flagged_words},
    details::render_details,
    explanation::render_explanation,
    gauge::gauge,
    severity_breakdown::render_severity_breakdown,
    theme::{self, palette, spacing::INDENT},
};
use crate::{domain::AnalyzeResult, session::AnalysisStatus};

pub const SAFE_HEADLINE: &str = "CONTENIDO SEGURO";
pub const TOXIC_HEADLINE: &str = "CONTENIDO TÓXICO";
pub const LOADING_LINE: &str = "Analizando texto...";

/// Inputs shared by the result renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub analyzed_text: Option<&'a str>,
    pub now: DateTime<Utc>,
    pub timezone: Tz,
}

pub fn headline(result: &AnalyzeResult) -> String {
    if result.toxic {
        format!("🚨 {TOXIC_HEADLINE}").color(palette::TOXIC).bold().to_string()
    } else {
        format!("✅ {SAFE_HEADLINE}").color(palette::SAFE).bold().to_string()
    }
}

pub fn render_error(message: &str) -> String {
    format!(
        "{}\n{INDENT}{}",
        "✖ Error".color(palette::TOXIC).bold(),
        message.color(palette::TOXIC)
    )
}

pub fn render_result(result: &AnalyzeResult, ctx: &RenderContext<'_>) -> String {
    let mut sections = vec![
        format!("{}\n{}", headline(result), gauge(result.toxicity_percentage)),
        render_explanation(result),
    ];
    if let Some(breakdown) = render_severity_breakdown(result) {
        sections.push(breakdown);
    }
    if let Some(text) = ctx.analyzed_text {
        if !result.toxicity_map.is_empty() {
            sections.push(format!(
                "{}\n{INDENT}{}",
                theme::heading("Texto analizado"),
                colored_text(text, &result.toxicity_map)
            ));
            if let Some(words) = render_flagged_words(text, result) {
                sections.push(words);
            }
        }
    }
    sections.push(render_details(result, ctx.now, ctx.timezone));

    let rule = theme::rule().to_string();
    sections.join(&format!("\n{rule}\n"))
}

fn render_flagged_words(text: &str, result: &AnalyzeResult) -> Option<String> {
    let flagged = flagged_words(text, &result.toxicity_map);
    if flagged.is_empty() {
        return None;
    }
    let mut lines = vec![theme::heading("Palabras marcadas").color(palette::ACCENT).to_string()];
    lines.extend(flagged.into_iter().map(|(word, score)| {
        format!("{INDENT}• {} {}", word.bold(), theme::muted(&format!("{score:.0}%")))
    }));
    Some(lines.join("\n"))
}

/// The whole analysis area for the current lifecycle state. Idle renders as
/// an empty string.
pub fn render_status(status: &AnalysisStatus, ctx: &RenderContext<'_>) -> String {
    match status {
        AnalysisStatus::Idle => String::new(),
        AnalysisStatus::Loading => theme::muted(LOADING_LINE).italic().to_string(),
        AnalysisStatus::Error(message) => render_error(message),
        AnalysisStatus::Success(result) => render_result(result, ctx),
    }
}
