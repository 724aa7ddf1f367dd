//! Configuração do interviewer carregada a partir de `interviewer.toml`.
//!
//! A struct [`InterviewConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `OPENAI_API_KEY` tem precedência sobre o arquivo.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::InterviewError;
use crate::interview::settings::{
    DEFAULT_MAX_FOLLOWUPS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, InterviewSettings, LlmSettings,
};
use crate::openai::client::API_URL;

/// Nome do arquivo de configuração procurado no diretório atual.
pub const CONFIG_FILE: &str = "interviewer.toml";

/// Configuração de nível superior carregada de `interviewer.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewConfig {
    /// Chave da API OpenAI.
    #[serde(default)]
    pub api_key: String,

    /// Endpoint de chat completions (OpenAI ou gateway compatível).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identificador do modelo usado pelo juiz e pelo gerador de follow-ups.
    #[serde(default = "default_model")]
    pub model: String,

    /// Temperatura de amostragem.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Máximo de follow-ups por pergunta preparada. Negativo é rejeitado
    /// na construção do entrevistador.
    #[serde(default = "default_max_followups")]
    pub max_followups_per_question: i64,

    /// Timeout de cada chamada ao serviço, em segundos.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Roteiro de perguntas. Ausente usa o roteiro padrão.
    #[serde(default)]
    pub questions: Option<Vec<String>>,
}

// Valor padrão para o endpoint: API pública da OpenAI.
fn default_base_url() -> String {
    API_URL.to_string()
}

// Valor padrão para o modelo: "gpt-4o-mini".
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

// Valor padrão para follow-ups por pergunta: 2.
fn default_max_followups() -> i64 {
    DEFAULT_MAX_FOLLOWUPS
}

// Valor padrão para o timeout: 60s.
fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_followups_per_question: default_max_followups(),
            request_timeout_secs: default_request_timeout_secs(),
            questions: None,
        }
    }
}

impl InterviewConfig {
    /// Carrega a configuração de `interviewer.toml` no diretório atual.
    pub fn load() -> Result<Self, InterviewError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Carrega a configuração do caminho dado.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load_from(path: &Path) -> Result<Self, InterviewError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<InterviewConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração para a chave API.
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Monta os parâmetros do entrevistador. `questions` (vindo da CLI) tem
    /// precedência sobre o roteiro do arquivo, que tem precedência sobre o padrão.
    pub fn interview_settings(&self, questions: Option<Vec<String>>) -> InterviewSettings {
        let questions = questions
            .or_else(|| self.questions.clone())
            .unwrap_or_else(|| InterviewSettings::default().questions);
        InterviewSettings {
            questions,
            max_followups_per_question: self.max_followups_per_question,
            llm: LlmSettings {
                model: self.model.clone(),
                temperature: self.temperature,
            },
        }
    }
}

/// Lê um roteiro de perguntas: uma por linha, ignorando linhas vazias e
/// comentários iniciados por `#`.
pub fn read_questions_file(path: &Path) -> Result<Vec<String>, InterviewError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_questions(&contents))
}

fn parse_questions(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
