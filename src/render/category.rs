use std::borrow::Cow;

use super::badge::BadgeVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const CATEGORIES: &[(&str, CategoryInfo)] = &[
    (
        "insulto",
        CategoryInfo {
            name: "Insulto",
            description: "Contiene palabras o frases ofensivas dirigidas a personas o grupos.",
            icon: "💬",
        },
    ),
    (
        "acoso",
        CategoryInfo {
            name: "Acoso",
            description: "Incluye amenazas, intimidación o comportamiento hostil.",
            icon: "🚫",
        },
    ),
    (
        "discriminacion",
        CategoryInfo {
            name: "Discriminación",
            description: "Contiene prejuicios o comentarios discriminatorios.",
            icon: "⚠️",
        },
    ),
    (
        "spam",
        CategoryInfo {
            name: "Spam",
            description: "Contenido no deseado o comercial no solicitado.",
            icon: "📧",
        },
    ),
];

const SUBCATEGORY_NAMES: &[(&str, &str)] = &[
    ("insulto_leve", "Insulto leve"),
    ("insulto_moderado", "Insulto moderado"),
    ("insulto_severo", "Insulto severo"),
    ("acoso_directo", "Acoso directo"),
    ("discriminacion", "Discriminación"),
    ("amenazas", "Amenazas"),
    ("spam_toxico", "Spam tóxico"),
];

pub fn lookup(key: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, info)| info)
}

/// Human name for a category key; unknown keys fall back to the key with
/// underscores turned into spaces.
pub fn display_name(key: &str) -> Cow<'_, str> {
    if let Some((_, name)) = SUBCATEGORY_NAMES.iter().find(|(k, _)| *k == key) {
        return Cow::Borrowed(name);
    }
    if let Some(info) = lookup(key) {
        return Cow::Borrowed(info.name);
    }
    if key.contains('_') {
        Cow::Owned(key.replace('_', " "))
    } else {
        Cow::Borrowed(key)
    }
}

pub fn badge_variant(key: &str) -> BadgeVariant {
    match key {
        "insulto_leve" => BadgeVariant::Info,
        "insulto_moderado" => BadgeVariant::Warning,
        "insulto_severo" | "insulto" => BadgeVariant::Error,
        "acoso" | "acoso_directo" | "amenazas" => BadgeVariant::Secondary,
        "discriminacion" => BadgeVariant::Primary,
        _ => BadgeVariant::Default,
    }
}
