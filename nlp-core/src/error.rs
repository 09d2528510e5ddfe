//! # Erros do núcleo
//!
//! Três tipos de falha atravessam o pipeline:
//!
//! | Variante           | Quando ocorre                                               |
//! |--------------------|-------------------------------------------------------------|
//! | `InvalidArgument`  | modo de tokenização/limpeza ou idioma desconhecido, texto vazio |
//! | `ModelUnavailable` | o modelo linguístico do idioma não pôde ser obtido          |
//! | `Storage`          | o registro montado não pôde ser persistido                  |
//!
//! `InvalidArgument` é sempre detectado antes de qualquer chamada externa.

use thiserror::Error;

use crate::language::Language;

/// Erros que podem ocorrer durante a análise e a persistência.
#[derive(Debug, Error)]
pub enum NlpError {
    #[error("Argumento inválido: {0}")]
    InvalidArgument(String),

    #[error("Modelo '{model}' indisponível para o idioma '{language}'")]
    ModelUnavailable { language: Language, model: String },

    #[error("Falha no armazenamento: {0}")]
    Storage(String),
}

impl NlpError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        NlpError::InvalidArgument(message.into())
    }
}

impl From<rusqlite::Error> for NlpError {
    fn from(err: rusqlite::Error) -> Self {
        NlpError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for NlpError {
    fn from(err: serde_json::Error) -> Self {
        NlpError::Storage(format!("documento inválido: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, NlpError>;
