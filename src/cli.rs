use clap::{Parser, Subcommand};

use crate::domain::HistoryId;

#[derive(Debug, Parser)]
#[command(
    name = "toxiguard",
    version,
    about = "Cliente de terminal para el servicio de análisis de toxicidad ToxiGuard"
)]
pub struct Cli {
    /// Disable ANSI colours.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Backend base URL, overriding TOXIGUARD_API_URL.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive prompt (default).
    Interactive,
    /// Analyze one text and print the result.
    Analyze {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show recent analyses.
    History,
    /// Show aggregate statistics.
    Stats,
    /// Delete one history entry.
    Delete { id: String },
    /// Delete every history entry.
    Clear,
    /// Probe the backend health endpoint.
    Health,
}

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Analyze(String),
    History,
    Stats,
    Delete(HistoryId),
    Clear,
    Reset,
    Health,
    Help,
    Quit,
    Invalid(String),
}

impl PromptCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return PromptCommand::Analyze(line.to_string());
        };

        let mut parts = command.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match (name.as_str(), arg) {
            ("historial" | "history", None) => PromptCommand::History,
            ("stats" | "estadisticas", None) => PromptCommand::Stats,
            ("borrar" | "delete", Some(id)) => PromptCommand::Delete(HistoryId::from(id)),
            ("borrar" | "delete", None) => {
                PromptCommand::Invalid("uso: :borrar <id>".to_string())
            }
            ("limpiar" | "clear", None) => PromptCommand::Clear,
            ("reset", None) => PromptCommand::Reset,
            ("salud" | "health", None) => PromptCommand::Health,
            ("ayuda" | "help" | "?", None) => PromptCommand::Help,
            ("salir" | "quit" | "q", None) => PromptCommand::Quit,
            _ => PromptCommand::Invalid(format!("comando desconocido: {trimmed}")),
        }
    }
}

pub const PROMPT_HELP: &str = "\
Escribe un texto y pulsa Enter para analizarlo.
  :historial     últimos análisis
  :stats         estadísticas agregadas
  :borrar <id>   elimina un análisis
  :limpiar       elimina todo el historial
  :reset         limpia el resultado actual
  :salud         comprueba el backend
  :salir         termina";
