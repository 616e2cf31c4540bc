use colored::Colorize;

use super::theme::{self, palette, size};
use crate::domain::{HistoryItem, HistoryStats};

pub const DISTRIBUTION_BUCKETS: [&str; 5] = ["0-20%", "21-40%", "41-60%", "61-80%", "81-100%"];

/// Safe vs toxic split of the aggregate stats as a proportional bar.
pub fn stats_pie(stats: &HistoryStats) -> String {
    let total = stats.safe_count + stats.toxic_count;
    let mut out = String::new();
    out.push_str(&theme::heading("Distribución de Toxicidad").to_string());
    out.push('\n');

    if total == 0 {
        out.push_str(&theme::muted("sin datos").to_string());
        return out;
    }

    let safe_share = stats.safe_count as f64 / total as f64 * 100.0;
    let safe_cells = theme::cells_for(safe_share, size::CHART_WIDTH);
    out.push_str(&format!(
        "{}{}\n",
        theme::glyph::FILLED
            .to_string()
            .repeat(safe_cells)
            .color(palette::SAFE),
        theme::glyph::FILLED
            .to_string()
            .repeat(size::CHART_WIDTH - safe_cells)
            .color(palette::TOXIC),
    ));
    out.push_str(&format!(
        "{} Seguro {} ({:.0}%)   {} Tóxico {} ({:.0}%)\n",
        "●".color(palette::SAFE),
        stats.safe_count,
        safe_share,
        "●".color(palette::TOXIC),
        stats.toxic_count,
        100.0 - safe_share,
    ));
    out.push_str(&format!(
        "{} {}   {} {:.2}",
        theme::muted("Total:"),
        stats.total_analyses,
        theme::muted("Score medio:"),
        stats.average_score
    ));
    out
}

pub fn bucket_index(percentage: f64) -> usize {
    if percentage <= 20.0 {
        0
    } else if percentage <= 40.0 {
        1
    } else if percentage <= 60.0 {
        2
    } else if percentage <= 80.0 {
        3
    } else {
        4
    }
}

pub fn distribution_counts(history: &[HistoryItem]) -> [usize; 5] {
    let mut counts = [0; 5];
    for item in history {
        counts[bucket_index(item.toxicity_percentage)] += 1;
    }
    counts
}

/// Horizontal bar chart of history items per score range.
pub fn distribution(history: &[HistoryItem]) -> String {
    let counts = distribution_counts(history);
    let max = counts.iter().copied().max().unwrap_or(0);
    let colors = [
        palette::SAFE,
        palette::WARNING,
        palette::WARNING,
        palette::HIGH,
        palette::TOXIC,
    ];

    let mut lines = vec![theme::heading("Número de Análisis por rango").to_string()];
    for ((label, count), color) in DISTRIBUTION_BUCKETS.iter().zip(counts).zip(colors) {
        let cells = if max == 0 {
            0
        } else {
            theme::cells_for(count as f64 / max as f64 * 100.0, size::CHART_WIDTH / 2)
        };
        lines.push(format!(
            "{label:>8} {} {count}",
            theme::bar(cells, size::CHART_WIDTH / 2, color)
        ));
    }
    lines.join("\n")
}
