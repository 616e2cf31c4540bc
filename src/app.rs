use std::{
    io::{self, Write},
    process::ExitCode,
    sync::Arc,
};

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    api::ToxiGuardClient,
    cli::{Command, PromptCommand, PROMPT_HELP},
    config::AppConfig,
    domain::HistoryId,
    infrastructure::shutdown::Shutdown,
    render::{
        self, boundary::RenderFailure, result::LOADING_LINE, theme, ErrorBoundary, RenderContext,
    },
    session::{AnalysisSession, AnalysisStatus, HistorySession},
};

pub struct ToxiGuardApp {
    config: Arc<AppConfig>,
    client: ToxiGuardClient,
    analysis: AnalysisSession,
    history: HistorySession,
    /// Keyed by analysis generation so a new analysis retries a failed view.
    boundary: ErrorBoundary<u64>,
    generation: u64,
}

impl ToxiGuardApp {
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let config = Arc::new(config);
        let http_client = Client::builder()
            .user_agent(format!("toxiguard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        let client = ToxiGuardClient::new(http_client, config.api.clone());

        let boundary = ErrorBoundary::new()
            .reset_on_props_change(true)
            .show_details(true)
            .on_error(Box::new(|failure: &RenderFailure| {
                tracing::error!(target: "render", error = %failure.message, "result view crashed");
            }));

        Ok(Self {
            analysis: AnalysisSession::new(client.clone()),
            history: HistorySession::new(client.clone()),
            client,
            config,
            boundary,
            generation: 0,
        })
    }

    pub async fn run(mut self, command: Command, shutdown: &Shutdown) -> Result<ExitCode> {
        match command {
            Command::Interactive => self.interactive(shutdown).await,
            Command::Analyze { text } => {
                // No prompt to type :reset into.
                self.boundary = std::mem::take(&mut self.boundary).with_fallback(format!(
                    "{}\n{}",
                    "⚠️  No se pudo mostrar el resultado.".yellow(),
                    theme::muted("Vuelve a ejecutar el análisis o revisa los logs.")
                ));
                let ok = self.analyze(&text.join(" ")).await;
                Ok(exit_code(ok))
            }
            Command::History => {
                self.history.mount().await;
                Ok(exit_code(self.print_history()))
            }
            Command::Stats => {
                self.history.load_stats().await;
                self.print_stats();
                Ok(ExitCode::SUCCESS)
            }
            Command::Delete { id } => {
                let ok = self.delete(&HistoryId::from(id.as_str())).await;
                Ok(exit_code(ok))
            }
            Command::Clear => Ok(exit_code(self.clear().await)),
            Command::Health => Ok(exit_code(self.health().await)),
        }
    }

    async fn interactive(&mut self, shutdown: &Shutdown) -> Result<ExitCode> {
        let mut listener = shutdown.subscribe();
        println!("{}", theme::heading("ToxiGuard · análisis de toxicidad"));
        match self.client.base_url() {
            Some(url) => println!("{} {}", theme::muted("Backend:"), url),
            None => println!(
                "{}",
                "TOXIGUARD_API_URL no está configurada; los análisis fallarán.".yellow()
            ),
        }
        println!("{}\n", theme::muted(":ayuda para ver los comandos"));

        self.history.mount().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{} ", "›".bold());
            io::stdout().flush()?;

            let line = tokio::select! {
                _ = listener.notified() => break,
                line = lines.next_line() => line?,
            };
            let Some(line) = line else {
                break;
            };

            let keep_going = tokio::select! {
                _ = listener.notified() => false,
                keep_going = self.handle_prompt(PromptCommand::parse(&line)) => keep_going,
            };
            if !keep_going || listener.is_triggered() {
                break;
            }
        }

        println!("\n{}", theme::muted("Hasta luego."));
        Ok(ExitCode::SUCCESS)
    }

    /// Returns `false` when the prompt should close.
    async fn handle_prompt(&mut self, command: PromptCommand) -> bool {
        match command {
            PromptCommand::Analyze(text) => {
                self.analyze(&text).await;
            }
            PromptCommand::History => {
                self.history.mount().await;
                self.print_history();
            }
            PromptCommand::Stats => {
                self.history.load_stats().await;
                self.print_stats();
            }
            PromptCommand::Delete(id) => {
                self.delete(&id).await;
            }
            PromptCommand::Clear => {
                self.clear().await;
            }
            PromptCommand::Reset => {
                self.analysis.clear_result();
                if let Some(failure) = self.boundary.failure() {
                    tracing::info!(target: "render", error = %failure.message, "error boundary reset by user");
                }
                self.boundary.reset();
                println!("{}", theme::muted("Resultado borrado."));
            }
            PromptCommand::Health => {
                self.health().await;
            }
            PromptCommand::Help => println!("{PROMPT_HELP}"),
            PromptCommand::Quit => return false,
            PromptCommand::Invalid(message) => println!("{}", message.yellow()),
        }
        true
    }

    async fn analyze(&mut self, text: &str) -> bool {
        if !text.trim().is_empty() {
            println!("{}", theme::muted(LOADING_LINE));
        }
        let status = self.analysis.analyze_text(text).await;
        self.generation += 1;

        let ctx = RenderContext {
            analyzed_text: Some(text.trim()),
            now: Utc::now(),
            timezone: self.config.display.timezone,
        };
        let rendered = self
            .boundary
            .render(&self.generation, || render::render_status(&status, &ctx));
        println!("{rendered}\n");

        matches!(status, AnalysisStatus::Success(_)) && !self.boundary.has_error()
    }

    fn print_history(&self) -> bool {
        let state = self.history.snapshot();
        println!("{}\n", render::render_history(&state, &self.config.display));
        if !state.history.is_empty() {
            println!("{}\n", render::distribution(&state.history));
        }
        if let Some(stats) = &state.stats {
            println!("{}\n", render::stats_pie(stats));
        }
        state.error.is_none()
    }

    fn print_stats(&self) {
        match self.history.snapshot().stats {
            Some(stats) => println!("{}\n", render::stats_pie(&stats)),
            None => println!("{}\n", theme::muted("Estadísticas no disponibles.")),
        }
    }

    async fn delete(&mut self, id: &HistoryId) -> bool {
        let ok = self.history.delete_item(id).await;
        if ok {
            println!("{}", format!("Análisis {id} eliminado.").green());
        }
        self.print_history() && ok
    }

    async fn clear(&mut self) -> bool {
        if self.history.clear_history().await {
            println!("{}", "Historial eliminado.".green());
            return true;
        }
        if let Some(error) = self.history.snapshot().error {
            println!("{}", render::result::render_error(&error));
        }
        false
    }

    async fn health(&self) -> bool {
        let healthy = self.client.check_backend_health().await;
        if healthy {
            println!("{}", "Backend disponible.".green());
        } else {
            println!("{}", "Backend no disponible.".red());
        }
        healthy
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
