use colored::Color;

use super::theme::palette;
use crate::domain::types::clamp_percentage;

/// Three-tier colour band for a 0-100 toxicity percentage.
///
/// Upper bounds are inclusive: 30 is safe, 60 is moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToxicityBand {
    Safe,
    Moderate,
    High,
}

impl ToxicityBand {
    pub fn from_percentage(percentage: f64) -> Self {
        let percentage = clamp_percentage(percentage);
        if percentage <= 30.0 {
            ToxicityBand::Safe
        } else if percentage <= 60.0 {
            ToxicityBand::Moderate
        } else {
            ToxicityBand::High
        }
    }

    pub fn color(self) -> Color {
        match self {
            ToxicityBand::Safe => palette::SAFE,
            ToxicityBand::Moderate => palette::WARNING,
            ToxicityBand::High => palette::TOXIC,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToxicityBand::Safe => "Baja",
            ToxicityBand::Moderate => "Moderada",
            ToxicityBand::High => "Alta",
        }
    }

    pub fn status(self) -> &'static str {
        match self {
            ToxicityBand::Safe => "Seguro",
            ToxicityBand::Moderate => "Cuidado",
            ToxicityBand::High => "Tóxico",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            ToxicityBand::Safe => "El contenido es seguro y apropiado",
            ToxicityBand::Moderate => "El contenido requiere atención moderada",
            ToxicityBand::High => "El contenido presenta niveles altos de toxicidad",
        }
    }
}

/// Per-category severity on the backend's 0-1 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl SeverityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            SeverityLevel::Critical
        } else if score >= 0.7 {
            SeverityLevel::High
        } else if score >= 0.5 {
            SeverityLevel::Moderate
        } else {
            SeverityLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Low => "LOW",
            SeverityLevel::Moderate => "MODERATE",
            SeverityLevel::High => "HIGH",
            SeverityLevel::Critical => "CRITICAL",
        }
    }

    pub fn color(self) -> Color {
        match self {
            SeverityLevel::Low => palette::SAFE,
            SeverityLevel::Moderate => palette::WARNING,
            SeverityLevel::High => palette::HIGH,
            SeverityLevel::Critical => palette::TOXIC,
        }
    }
}

/// Risk buckets some backends report in place of a content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCategory {
    Safe,
    Moderate,
    HighRisk,
    CriticalRisk,
}

impl RiskCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace(' ', "_").as_str() {
            "safe" => Some(RiskCategory::Safe),
            "moderate" => Some(RiskCategory::Moderate),
            "high_risk" => Some(RiskCategory::HighRisk),
            "critical_risk" => Some(RiskCategory::CriticalRisk),
            _ => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RiskCategory::Safe => "🟢",
            RiskCategory::Moderate => "🟡",
            RiskCategory::HighRisk => "🟠",
            RiskCategory::CriticalRisk => "🔴",
        }
    }

    pub fn color(self) -> Color {
        match self {
            RiskCategory::Safe => palette::SAFE,
            RiskCategory::Moderate => palette::WARNING,
            RiskCategory::HighRisk => palette::HIGH,
            RiskCategory::CriticalRisk => palette::TOXIC,
        }
    }
}

pub const UNKNOWN_RISK_ICON: &str = "⚪";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_upper() {
        assert_eq!(ToxicityBand::from_percentage(0.0), ToxicityBand::Safe);
        assert_eq!(ToxicityBand::from_percentage(30.0), ToxicityBand::Safe);
        assert_eq!(ToxicityBand::from_percentage(30.5), ToxicityBand::Moderate);
        assert_eq!(ToxicityBand::from_percentage(31.0), ToxicityBand::Moderate);
        assert_eq!(ToxicityBand::from_percentage(60.0), ToxicityBand::Moderate);
        assert_eq!(ToxicityBand::from_percentage(61.0), ToxicityBand::High);
        assert_eq!(ToxicityBand::from_percentage(100.0), ToxicityBand::High);
    }

    #[test]
    fn bands_never_step_back() {
        let rank = |band| match band {
            ToxicityBand::Safe => 0,
            ToxicityBand::Moderate => 1,
            ToxicityBand::High => 2,
        };
        let mut previous = 0;
        for tenth in 0..=1000 {
            let current = rank(ToxicityBand::from_percentage(f64::from(tenth) / 10.0));
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(ToxicityBand::from_percentage(f64::NAN), ToxicityBand::Safe);
    }

    #[test]
    fn severity_levels() {
        assert_eq!(SeverityLevel::from_score(0.2), SeverityLevel::Low);
        assert_eq!(SeverityLevel::from_score(0.5), SeverityLevel::Moderate);
        assert_eq!(SeverityLevel::from_score(0.7), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_score(0.95), SeverityLevel::Critical);
    }

    #[test]
    fn risk_category_accepts_spaces_and_case() {
        assert_eq!(RiskCategory::parse("High Risk"), Some(RiskCategory::HighRisk));
        assert_eq!(RiskCategory::parse("critical_risk"), Some(RiskCategory::CriticalRisk));
        assert_eq!(RiskCategory::parse("insulto"), None);
    }
}
