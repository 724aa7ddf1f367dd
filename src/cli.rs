//! Interface de linha de comando do interviewer baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (run, questions)
//! e flags globais (--config, --model, --temperature, --max-followups, --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{CONFIG_FILE, InterviewConfig};

/// interviewer — simulador de entrevista de emprego com follow-ups gerados por IA.
#[derive(Debug, Parser)]
#[command(name = "interviewer", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Caminho do arquivo de configuração.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Modelo a usar nesta sessão (ex.: gpt-4o-mini).
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Temperatura de amostragem.
    #[arg(long, global = true)]
    pub temperature: Option<f32>,

    /// Máximo de follow-ups por pergunta preparada.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max_followups: Option<i64>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Conduz uma entrevista interativa no terminal.
    Run {
        /// Arquivo com uma pergunta por linha, substituindo o roteiro.
        #[arg(long)]
        questions_file: Option<PathBuf>,

        /// Grava o resumo da sessão (JSON) neste caminho ao final.
        #[arg(long)]
        transcript: Option<PathBuf>,
    },

    /// Mostra o roteiro de perguntas que seria usado.
    Questions {
        /// Arquivo com uma pergunta por linha, substituindo o roteiro.
        #[arg(long)]
        questions_file: Option<PathBuf>,
    },
}

impl Cli {
    /// Aplica as flags da linha de comando sobre a configuração carregada.
    pub fn apply_overrides(&self, config: &mut InterviewConfig) {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(max) = self.max_followups {
            config.max_followups_per_question = max;
        }
    }
}
