//! Idiomas suportados e o identificador do modelo padrão de cada um.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NlpError;

/// Idioma do texto analisado.
///
/// O conjunto é fechado: qualquer outra etiqueta é rejeitada por [`Language::from_str`]
/// com [`NlpError::InvalidArgument`], antes que qualquer modelo seja consultado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Inglês (`en`)
    En,
    /// Russo (`ru`)
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    /// Etiqueta ISO 639-1 usada no documento persistido.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Identificador do modelo usado quando a configuração não define outro.
    ///
    /// Russo usa o modelo de domínio jornalístico; inglês, o de domínio web.
    pub fn default_model(&self) -> &'static str {
        match self {
            Language::En => "en_core_web_sm",
            Language::Ru => "ru_core_news_sm",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = NlpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(NlpError::invalid_argument(format!(
                "idioma não suportado: '{other}' (use 'en' ou 'ru')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_languages() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Ru);
    }

    #[test]
    fn test_unknown_language_is_invalid_argument() {
        for tag in ["de", "", "EN", " ru", "english"] {
            let err = tag.parse::<Language>().unwrap_err();
            assert!(matches!(err, NlpError::InvalidArgument(_)), "tag {tag:?}");
        }
    }

    #[test]
    fn test_default_models() {
        assert_eq!(Language::Ru.default_model(), "ru_core_news_sm");
        assert_eq!(Language::En.default_model(), "en_core_web_sm");
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Ru).unwrap(), "\"ru\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
