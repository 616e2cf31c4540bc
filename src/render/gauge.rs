use colored::Colorize;

use super::{
    severity::ToxicityBand,
    theme::{self, size},
};
use crate::domain::types::clamp_percentage;

/// Percentage as printed: one decimal, trailing `.0` dropped.
pub fn percent_label(percentage: f64) -> String {
    let shown = shown_percentage(percentage);
    if shown.fract() == 0.0 {
        format!("{shown:.0}%")
    } else {
        format!("{shown:.1}%")
    }
}

/// Bands are taken from the printed value so label and number agree.
fn shown_percentage(percentage: f64) -> f64 {
    (clamp_percentage(percentage) * 10.0).round() / 10.0
}

/// Full gauge: bar, percentage and band status, followed by the band summary
/// on a second line.
pub fn gauge(percentage: f64) -> String {
    let percentage = shown_percentage(percentage);
    let band = ToxicityBand::from_percentage(percentage);
    format!(
        "{} {} {}\n{}",
        theme::bar(theme::cells_for(percentage, size::GAUGE_WIDTH), size::GAUGE_WIDTH, band.color()),
        format!("{:>4}", percent_label(percentage)).color(band.color()).bold(),
        band.status().color(band.color()),
        theme::muted(band.summary())
    )
}

/// Single-line gauge used inside history cards.
pub fn mini_gauge(percentage: f64) -> String {
    let percentage = shown_percentage(percentage);
    let band = ToxicityBand::from_percentage(percentage);
    format!(
        "{} {} {}",
        theme::bar(
            theme::cells_for(percentage, size::MINI_GAUGE_WIDTH),
            size::MINI_GAUGE_WIDTH,
            band.color()
        ),
        format!("{:>4}", percent_label(percentage)).color(band.color()),
        theme::muted(band.label())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::glyph;

    #[test]
    fn gauge_shows_percentage_and_status() {
        crate::render::plain();
        let rendered = gauge(10.0);
        let first = rendered.lines().next().unwrap();
        assert!(first.ends_with(" 10% Seguro"));
        assert_eq!(first.chars().filter(|c| *c == glyph::FILLED).count(), 3);
        assert!(rendered.contains("El contenido es seguro y apropiado"));
    }

    #[test]
    fn mini_gauge_uses_band_label() {
        crate::render::plain();
        assert!(mini_gauge(61.0).ends_with(" 61% Alta"));
        assert!(mini_gauge(60.0).ends_with(" 60% Moderada"));
        assert!(mini_gauge(120.0).contains("100%"));
    }

    #[test]
    fn printed_value_and_band_agree_near_boundaries() {
        crate::render::plain();
        assert!(gauge(60.4).lines().next().unwrap().ends_with(" 60.4% Tóxico"));
        assert!(gauge(60.04).lines().next().unwrap().ends_with(" 60% Cuidado"));
        assert!(mini_gauge(30.06).ends_with(" 30.1% Moderada"));
        assert_eq!(percent_label(42.0), "42%");
        assert_eq!(percent_label(7.25), "7.3%");
    }
}
