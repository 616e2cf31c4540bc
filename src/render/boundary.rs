use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use colored::Colorize;

use super::theme::{self, palette, spacing::INDENT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub message: String,
}

impl RenderFailure {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "error desconocido".to_string()
        };
        Self { message }
    }
}

pub type ErrorReporter = Box<dyn Fn(&RenderFailure) + Send + Sync>;

/// Isolates a render closure: a panic inside it is caught, reported once and
/// replaced by a fallback view until the boundary is reset.
///
/// `K` identifies the props the view was rendered from. With
/// `reset_on_props_change`, a render with a different key clears a caught
/// failure and retries the view.
pub struct ErrorBoundary<K> {
    fallback: Option<String>,
    on_error: Option<ErrorReporter>,
    reset_on_props_change: bool,
    show_details: bool,
    failure: Option<RenderFailure>,
    last_key: Option<K>,
}

impl<K: PartialEq + Clone> Default for ErrorBoundary<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq + Clone> ErrorBoundary<K> {
    pub fn new() -> Self {
        Self {
            fallback: None,
            on_error: None,
            reset_on_props_change: false,
            show_details: false,
            failure: None,
            last_key: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn on_error(mut self, reporter: ErrorReporter) -> Self {
        self.on_error = Some(reporter);
        self
    }

    pub fn reset_on_props_change(mut self, enabled: bool) -> Self {
        self.reset_on_props_change = enabled;
        self
    }

    pub fn show_details(mut self, enabled: bool) -> Self {
        self.show_details = enabled;
        self
    }

    pub fn has_error(&self) -> bool {
        self.failure.is_some()
    }

    pub fn failure(&self) -> Option<&RenderFailure> {
        self.failure.as_ref()
    }

    pub fn reset(&mut self) {
        self.failure = None;
    }

    pub fn render<F>(&mut self, key: &K, view: F) -> String
    where
        F: FnOnce() -> String,
    {
        if self.reset_on_props_change
            && self.failure.is_some()
            && self.last_key.as_ref() != Some(key)
        {
            tracing::debug!(target: "render", "props changed; resetting error boundary");
            self.failure = None;
        }
        self.last_key = Some(key.clone());

        if let Some(failure) = &self.failure {
            return self.fallback_view(failure);
        }

        match panic::catch_unwind(AssertUnwindSafe(view)) {
            Ok(rendered) => rendered,
            Err(payload) => {
                let failure = RenderFailure::from_panic(payload);
                tracing::error!(target: "render", error = %failure.message, "render failed");
                if let Some(reporter) = &self.on_error {
                    reporter(&failure);
                }
                let rendered = self.fallback_view(&failure);
                self.failure = Some(failure);
                rendered
            }
        }
    }

    fn fallback_view(&self, failure: &RenderFailure) -> String {
        if let Some(fallback) = &self.fallback {
            return fallback.clone();
        }
        let mut lines = vec![
            "⚠️  Algo salió mal".color(palette::TOXIC).bold().to_string(),
            format!(
                "{INDENT}Ocurrió un error inesperado al mostrar este contenido."
            ),
            format!(
                "{INDENT}{}",
                theme::muted("Escribe :reset para reintentar o vuelve a ejecutar el análisis.")
            ),
        ];
        if self.show_details {
            lines.push(format!("{INDENT}{} {}", theme::muted("Detalle:"), failure.message));
        }
        lines.join("\n")
    }
}
