//! # Registro de modelos
//!
//! Mapeia cada idioma para o identificador do modelo configurado e mantém um
//! cache dos modelos já carregados. O primeiro pedido de um idioma constrói o
//! modelo; os seguintes reutilizam a mesma instância (`Arc`), inclusive entre
//! threads.
//!
//! O registro é passado explicitamente ao anotador via [`ModelProvider`], o que
//! permite trocar os modelos por dublês nos testes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::error::{NlpError, Result};
use crate::language::Language;
use crate::model::{LanguageModel, RuleBasedModel};

/// Fonte de modelos linguísticos por idioma.
pub trait ModelProvider: Send + Sync {
    /// Obtém (carregando na primeira vez) o modelo do idioma.
    fn get(&self, language: Language) -> Result<Arc<dyn LanguageModel>>;
}

pub struct ModelRegistry {
    model_ids: HashMap<Language, String>,
    loaded: Mutex<HashMap<Language, Arc<dyn LanguageModel>>>,
}

impl ModelRegistry {
    /// Registro com o modelo padrão de cada idioma.
    pub fn new() -> Self {
        Self {
            model_ids: Language::ALL
                .iter()
                .map(|l| (*l, l.default_model().to_string()))
                .collect(),
            loaded: Mutex::new(HashMap::new()),
        }
    }

    /// Substitui o identificador do modelo de um idioma.
    pub fn with_model(mut self, language: Language, model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        info!("📝 Modelo configurado: {} → {}", language, model_id);
        self.model_ids.insert(language, model_id);
        self
    }

    pub fn model_id(&self, language: Language) -> &str {
        self.model_ids
            .get(&language)
            .map(String::as_str)
            .unwrap_or_else(|| language.default_model())
    }

    /// Quantos idiomas já têm modelo carregado.
    pub fn loaded_count(&self) -> usize {
        self.loaded.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn load(&self, language: Language) -> Result<Arc<dyn LanguageModel>> {
        let model_id = self.model_id(language);
        match RuleBasedModel::builtin(language, model_id) {
            Some(model) => {
                info!("✅ Modelo carregado: {} ({})", model_id, language);
                Ok(Arc::new(model))
            }
            None => {
                warn!("⚠️ Modelo desconhecido: {} ({})", model_id, language);
                Err(NlpError::ModelUnavailable {
                    language,
                    model: model_id.to_string(),
                })
            }
        }
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelProvider for ModelRegistry {
    fn get(&self, language: Language) -> Result<Arc<dyn LanguageModel>> {
        // O lock fica retido durante o carregamento: dois pedidos simultâneos do
        // mesmo idioma não constroem o modelo duas vezes.
        let mut loaded = self.loaded.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(model) = loaded.get(&language) {
            debug!("Modelo em cache: {}", language);
            return Ok(Arc::clone(model));
        }
        let model = self.load(language)?;
        loaded.insert(language, Arc::clone(&model));
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let registry = ModelRegistry::new();
        assert_eq!(registry.model_id(Language::Ru), "ru_core_news_sm");
        assert_eq!(registry.model_id(Language::En), "en_core_web_sm");
    }

    #[test]
    fn test_model_is_loaded_once() {
        let registry = ModelRegistry::new();
        assert_eq!(registry.loaded_count(), 0);

        let first = registry.get(Language::Ru).unwrap();
        let second = registry.get(Language::Ru).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.loaded_count(), 1);

        registry.get(Language::En).unwrap();
        assert_eq!(registry.loaded_count(), 2);
    }

    #[test]
    fn test_loaded_model_matches_language() {
        let registry = ModelRegistry::new();
        let model = registry.get(Language::En).unwrap();
        assert_eq!(model.language(), Language::En);
        assert_eq!(model.name(), "en_core_web_sm");
    }

    #[test]
    fn test_unknown_model_is_unavailable() {
        let registry = ModelRegistry::new().with_model(Language::Ru, "ru_core_news_lg");
        match registry.get(Language::Ru) {
            Err(NlpError::ModelUnavailable { language, model }) => {
                assert_eq!(language, Language::Ru);
                assert_eq!(model, "ru_core_news_lg");
            }
            other => panic!("esperado ModelUnavailable, obtido {:?}", other.map(|m| m.name().to_string())),
        }
        assert_eq!(registry.loaded_count(), 0);
        assert!(registry.get(Language::En).is_ok());
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = Arc::new(ModelRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get(Language::Ru).map(|m| m.name().to_string()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "ru_core_news_sm");
        }
        assert_eq!(registry.loaded_count(), 1);
    }
}
