use super::{
    badge::{badge_row, BadgeVariant},
    category,
    theme::{self, spacing::INDENT},
};
use crate::domain::AnalyzeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explanation {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub fn explain(result: &AnalyzeResult) -> Explanation {
    if !result.toxic {
        return Explanation {
            title: "Texto Seguro ✅",
            description: "El análisis indica que este texto no contiene contenido tóxico significativo.",
            details: "Puede ser compartido de manera segura en la mayoría de contextos.",
        };
    }
    if result.toxicity_percentage >= 80.0 {
        Explanation {
            title: "Alto Nivel de Toxicidad ⚠️",
            description: "Este texto contiene múltiples elementos tóxicos que requieren atención inmediata.",
            details: "Se recomienda revisar y posiblemente moderar antes de publicar.",
        }
    } else if result.toxicity_percentage >= 50.0 {
        Explanation {
            title: "Nivel Moderado de Toxicidad ⚠️",
            description: "El texto muestra algunos signos de toxicidad que podrían ser problemáticos.",
            details: "Considera revisar el contenido antes de compartirlo.",
        }
    } else {
        Explanation {
            title: "Bajo Nivel de Toxicidad ⚠️",
            description: "Se detectaron algunos elementos que podrían ser considerados tóxicos.",
            details: "El texto es mayormente seguro, pero ten cuidado con ciertas frases.",
        }
    }
}

pub fn render_explanation(result: &AnalyzeResult) -> String {
    let explanation = explain(result);
    let mut lines = vec![
        theme::heading(explanation.title).to_string(),
        format!("{INDENT}{}", explanation.description),
        format!("{INDENT}{}", theme::muted(explanation.details)),
    ];

    if let Some(info) = result.category.as_deref().and_then(category::lookup) {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            info.icon,
            theme::heading(&format!("Categoría: {}", info.name))
        ));
        lines.push(format!("{INDENT}{}", theme::muted(info.description)));
    }

    if let Some(row) = badge_row(result.labels.iter().map(String::as_str), BadgeVariant::Info) {
        lines.push(String::new());
        lines.push(theme::muted("Elementos detectados:").to_string());
        lines.push(format!("{INDENT}{row}"));
    }

    if !result.explanations.is_empty() {
        lines.push(String::new());
        for (key, text) in &result.explanations {
            lines.push(format!("{INDENT}{}: {text}", category::display_name(key)));
        }
    }
    lines.join("\n")
}
