//! Configuração da execução: banco de resultados e modelos por idioma.
//!
//! Os valores vêm dos argumentos de linha de comando, com fallback para as
//! variáveis `NLP_DATABASE_PATH`, `NLP_MODEL_EN` e `NLP_MODEL_RU` (um `.env`
//! no diretório atual é carregado antes do parse).

use std::path::PathBuf;

use nlp_core::{Language, ModelRegistry};

/// Arquivo SQLite usado quando nada é configurado.
pub const DEFAULT_DATABASE: &str = "nlp_results.db";

/// Configurações da aplicação.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Caminho do banco SQLite com a coleção `nlp_results`.
    pub database_path: PathBuf,
    pub model_en: String,
    pub model_ru: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            model_en: Language::En.default_model().to_string(),
            model_ru: Language::Ru.default_model().to_string(),
        }
    }
}

impl Settings {
    /// Registro de modelos com os identificadores configurados.
    pub fn model_registry(&self) -> ModelRegistry {
        ModelRegistry::new()
            .with_model(Language::En, self.model_en.as_str())
            .with_model(Language::Ru, self.model_ru.as_str())
    }
}
