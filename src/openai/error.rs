//! Tipos de erro para o cliente de chat completions.
//!
//! [`CompletionError`] cobre tudo que pode falhar numa chamada ao serviço de
//! completions. O entrevistador nunca mostra esses erros ao candidato: registra
//! o erro no log e usa um comportamento fixo de fallback.

use thiserror::Error;

/// Erros que podem ocorrer numa única requisição de chat completions.
///
/// - [`RateLimited`](CompletionError::RateLimited) — o servidor retornou HTTP 429
/// - [`ApiError`](CompletionError::ApiError) — qualquer outro status de erro (4xx/5xx)
/// - [`NetworkError`](CompletionError::NetworkError) — falha na camada de rede
/// - [`MalformedResponse`](CompletionError::MalformedResponse) — resposta 2xx inutilizável
#[derive(Debug, Error)]
pub enum CompletionError {
    /// O servidor retornou HTTP 429 (rate limit).
    /// `retry_after_ms` vem do cabeçalho `retry-after`.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Erro retornado pela API (ex.: 401 chave inválida, 500 erro interno).
    /// Contém o código de status HTTP e a mensagem do corpo da resposta.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout) ou corpo
    /// que não decodifica. Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Resposta 2xx sem nenhuma completion utilizável (ex.: `choices` vazio).
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
