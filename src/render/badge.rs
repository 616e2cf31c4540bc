use colored::{Color, Colorize};

use super::theme::palette;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    fn color(self) -> Color {
        match self {
            BadgeVariant::Default => palette::NEUTRAL,
            BadgeVariant::Primary => palette::PRIMARY,
            BadgeVariant::Secondary => palette::SECONDARY,
            BadgeVariant::Success => palette::SAFE,
            BadgeVariant::Warning => palette::WARNING,
            BadgeVariant::Error => palette::TOXIC,
            BadgeVariant::Info => palette::INFO,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Badge<'a> {
    pub label: &'a str,
    pub variant: BadgeVariant,
    pub icon: Option<&'a str>,
}

impl<'a> Badge<'a> {
    pub fn new(label: &'a str, variant: BadgeVariant) -> Self {
        Self {
            label,
            variant,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn render(&self) -> String {
        let body = match self.icon {
            Some(icon) => format!("[{icon} {}]", self.label),
            None => format!("[{}]", self.label),
        };
        body.color(self.variant.color()).bold().to_string()
    }
}

/// Space-separated badges, or `None` when there is nothing to show.
pub fn badge_row<'a, I>(labels: I, variant: BadgeVariant) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let rendered: Vec<String> = labels
        .into_iter()
        .map(|label| Badge::new(label, variant).render())
        .collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join(" "))
    }
}
