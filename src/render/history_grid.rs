use colored::Colorize;

use super::{
    badge::{Badge, BadgeVariant},
    category,
    gauge::mini_gauge,
    theme::{self, spacing::INDENT},
    timefmt,
};
use crate::{config::DisplayConfig, domain::HistoryItem, session::HistoryState};

pub const EMPTY_TITLE: &str = "No hay análisis previos";
pub const EMPTY_HINT: &str = "Realiza tu primer análisis para ver el historial aquí";

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{head}...")
}

fn render_card(item: &HistoryItem, display: &DisplayConfig) -> String {
    let status = if item.is_toxic {
        Badge::new("Tóxico", BadgeVariant::Error).with_icon("🚨")
    } else {
        Badge::new("Seguro", BadgeVariant::Success).with_icon("✅")
    };
    let mut header = format!(
        "{} {}  {}",
        format!("#{}", item.id).bold(),
        theme::muted(&timefmt::format_timestamp(&item.timestamp, display.timezone)),
        status.render()
    );
    if !item.category.is_empty() {
        let name = category::display_name(&item.category);
        header.push(' ');
        header.push_str(&Badge::new(&name, category::badge_variant(&item.category)).render());
    }
    format!(
        "{header}\n{INDENT}{}\n{INDENT}{}",
        mini_gauge(item.toxicity_percentage),
        truncate_text(&item.text, display.text_preview_len)
    )
}

/// Most recent items as cards, capped at `history_preview_limit`.
pub fn render_history(state: &HistoryState, display: &DisplayConfig) -> String {
    if state.loading {
        return theme::muted("Cargando historial...").to_string();
    }

    let mut blocks = Vec::new();
    if let Some(error) = &state.error {
        blocks.push(super::result::render_error(error));
    }

    if state.history.is_empty() {
        blocks.push(format!("{}\n{}", theme::heading(EMPTY_TITLE), theme::muted(EMPTY_HINT)));
        return blocks.join("\n\n");
    }

    let shown = state.history.len().min(display.history_preview_limit);
    blocks.extend(
        state
            .history
            .iter()
            .take(display.history_preview_limit)
            .map(|item| render_card(item, display)),
    );
    if state.history.len() > shown {
        blocks.push(
            theme::muted(&format!(
                "… {} análisis más no mostrados",
                state.history.len() - shown
            ))
            .to_string(),
        );
    }
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HistoryId;

    fn item(id: i64, text: &str, percentage: f64, category: &str) -> HistoryItem {
        HistoryItem {
            id: HistoryId::Number(id),
            text: text.to_string(),
            toxicity_percentage: percentage,
            category: category.to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            is_toxic: percentage > 60.0,
        }
    }

    fn display() -> DisplayConfig {
        DisplayConfig {
            timezone: chrono_tz::UTC,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn truncation_is_char_based() {
        assert_eq!(truncate_text("corto", 50), "corto");
        assert_eq!(truncate_text("ñandú ñandú", 5), "ñandú...");
    }

    #[test]
    fn empty_history_shows_hint() {
        crate::render::plain();
        let rendered = render_history(&HistoryState::default(), &display());
        assert!(rendered.contains(EMPTY_TITLE));
        assert!(rendered.contains(EMPTY_HINT));
    }

    #[test]
    fn loading_hides_items() {
        crate::render::plain();
        let state = HistoryState {
            history: vec![item(1, "hola", 5.0, "")],
            loading: true,
            ..HistoryState::default()
        };
        assert_eq!(render_history(&state, &display()), "Cargando historial...");
    }

    #[test]
    fn cards_are_capped_and_described() {
        crate::render::plain();
        let history: Vec<_> = (1..=8)
            .map(|id| item(id, &"x".repeat(60), 70.0, "insulto_severo"))
            .collect();
        let state = HistoryState {
            history,
            ..HistoryState::default()
        };
        let rendered = render_history(&state, &display());
        assert!(rendered.contains("#6 01/01/24 00:00"));
        assert!(!rendered.contains("#7 "));
        assert!(rendered.contains("[🚨 Tóxico] [Insulto severo]"));
        assert!(rendered.contains(&format!("{}...", "x".repeat(50))));
        assert!(rendered.contains("2 análisis más no mostrados"));
    }

    #[test]
    fn error_is_shown_above_items() {
        crate::render::plain();
        let state = HistoryState {
            history: vec![item(1, "hola", 5.0, "")],
            error: Some("Error eliminando elemento".into()),
            ..HistoryState::default()
        };
        let rendered = render_history(&state, &display());
        let error_at = rendered.find("Error eliminando elemento").unwrap();
        let card_at = rendered.find("#1").unwrap();
        assert!(error_at < card_at);
        assert!(rendered.contains("[✅ Seguro]"));
    }
}
