//! Interface de terminal do interviewer — spinner e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner "pensando" e `console` para
//! estilização com cores. O [`SessionUi`] desenha a conversa no terminal.

use std::io::{self, Write};
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::interview::{SessionSummary, Turn};

/// Desenha as falas do entrevistador e o prompt do candidato.
pub struct SessionUi {
    // Perguntas preparadas.
    cyan: Style,
    // Follow-ups.
    yellow: Style,
    // Encerramento.
    green: Style,
    dim: Style,
}

impl Default for SessionUi {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionUi {
    pub fn new() -> Self {
        Self {
            cyan: Style::new().cyan().bold(),
            yellow: Style::new().yellow(),
            green: Style::new().green().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Inicia o spinner exibido enquanto o entrevistador consulta o modelo.
    pub fn thinking(&self) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message("Interviewer is thinking…");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Exibe uma fala do entrevistador, com estilo conforme o tipo.
    pub fn interviewer(&self, turn: &Turn) {
        match turn {
            Turn::Question { index, text } => {
                println!();
                println!("{} {text}", self.cyan.apply_to(format!("Q{}.", index + 1)));
            }
            Turn::FollowUp { text, .. } => {
                println!("{} {text}", self.yellow.apply_to("  ↳"));
            }
            Turn::Closing(text) => {
                println!();
                println!("{}", self.green.apply_to(text));
            }
        }
    }

    /// Mostra o prompt do candidato.
    pub fn prompt(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", self.dim.apply_to(">"))?;
        stdout.flush()
    }

    /// Imprime o resumo da sessão.
    pub fn print_summary(&self, summary: &SessionSummary) {
        println!();
        println!("{}", self.dim.apply_to("─── Session ───"));
        println!(
            "{}",
            self.dim.apply_to(format!(
                "{} of {} questions, {} follow-ups, {}s",
                summary.questions_asked,
                summary.questions_total,
                summary.followups_asked,
                summary.duration_ms / 1000
            ))
        );
    }

    /// Imprime o roteiro numerado.
    pub fn print_questions(&self, questions: &[String]) {
        if questions.is_empty() {
            println!("{}", self.dim.apply_to("(no prepared questions)"));
        }
        for (i, q) in questions.iter().enumerate() {
            println!("{} {q}", self.cyan.apply_to(format!("Q{}.", i + 1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_reports_flush_result() {
        assert!(SessionUi::new().prompt().is_ok());
    }
}
