//! # Esquema do documento de análise
//!
//! Os nomes dos campos serializados são contrato com os documentos já
//! persistidos na coleção `nlp_results`:
//!
//! ```text
//! {
//!   "_id": "...",                 // atribuído pelo armazenamento
//!   "raw_text": String,
//!   "language": "en" | "ru",
//!   "preprocessing": {
//!     "tokens_by_word": [String], "tokens_by_symbol": [String],
//!     "lowercased": String, "no_punct": String, "alnum_keep": String
//!   },
//!   "lemmas": [String],
//!   "entities": [{ "text": String, "label": String }],
//!   "pos_tags": [{ "text": String, "pos": String }],
//!   "created_at": DateTime (UTC, RFC 3339)
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::annotator::Annotations;
use crate::error::{NlpError, Result};
use crate::language::Language;

/// Entidade nomeada reconhecida pelo modelo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Trecho exato do texto reconhecido (ex: "Barack Obama").
    pub text: String,
    /// Categoria do vocabulário do modelo (ex: "PERSON", "LOC").
    pub label: String,
}

/// Classe gramatical de um token segundo o modelo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTag {
    pub text: String,
    pub pos: String,
}

/// As cinco visões normalizadas do texto de entrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preprocessing {
    pub tokens_by_word: Vec<String>,
    pub tokens_by_symbol: Vec<String>,
    pub lowercased: String,
    pub no_punct: String,
    pub alnum_keep: String,
}

/// Registro raiz de uma execução de análise.
///
/// Montado uma única vez, nunca alterado e persistido exatamente uma vez.
/// `lemmas` e `pos_tags` seguem a tokenização do modelo, que não precisa
/// coincidir com `preprocessing.tokens_by_word`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub raw_text: String,
    pub language: Language,
    pub preprocessing: Preprocessing,
    pub lemmas: Vec<String>,
    pub entities: Vec<Entity>,
    pub pos_tags: Vec<PosTag>,
    pub created_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Combina as saídas do pré-processamento e do anotador em um registro.
    ///
    /// Falha com [`NlpError::InvalidArgument`] se o texto for vazio após `trim`.
    pub fn assemble(
        raw_text: &str,
        language: Language,
        preprocessing: Preprocessing,
        annotations: Annotations,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        ensure_text(raw_text)?;
        Ok(Self {
            raw_text: raw_text.to_string(),
            language,
            preprocessing,
            lemmas: annotations.lemmas,
            entities: annotations.entities,
            pos_tags: annotations.pos_tags,
            created_at,
        })
    }
}

/// Rejeita texto vazio (ou só com espaços).
pub(crate) fn ensure_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(NlpError::invalid_argument("o texto não pode ser vazio"));
    }
    Ok(())
}

/// Identificador opaco atribuído pelo armazenamento após a inserção.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Gera um novo identificador (UUID v4).
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registro já persistido, com a identidade atribuída pelo armazenamento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub record: AnalysisResult,
}
