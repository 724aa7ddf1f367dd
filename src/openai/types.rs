//! Tipos de dados para requisições e respostas do endpoint
//! `/v1/chat/completions` da OpenAI.
//!
//! Só os campos que o entrevistador lê ou escreve estão modelados; campos
//! desconhecidos na resposta são ignorados pelo serde.

use serde::{Deserialize, Serialize};

/// Corpo da requisição para o endpoint `/v1/chat/completions`.
///
/// Contém o modelo, a temperatura, o limite de tokens e as mensagens do prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Identificador do modelo (ex.: "gpt-4o-mini").
    pub model: String,
    /// Temperatura de amostragem.
    pub temperature: f32,
    /// Número máximo de tokens gerados. Omitido do JSON quando `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub messages: Vec<ChatMessage>,
}

/// Uma única mensagem do prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Papel do remetente: "system", "user" ou "assistant".
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Resposta retornada pelo endpoint `/v1/chat/completions`.
///
/// Contém o identificador, o modelo, as escolhas geradas e as estatísticas
/// de uso de tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Texto da primeira escolha. Conteúdo `null` é lido como string vazia.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    /// Motivo da parada (ex.: "stop", "length"). `None` durante streaming.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Mensagem do assistente dentro de uma [`Choice`]. `content` vem `null` em
/// recusas e chamadas de ferramenta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Estatísticas de consumo de tokens para uma chamada à API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
