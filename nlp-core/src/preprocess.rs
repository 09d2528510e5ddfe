//! # Pré-processamento
//!
//! Transformações puras e determinísticas sobre o texto de entrada. Cada campo de
//! [`Preprocessing`] é derivado **independentemente** do texto original: nenhuma
//! transformação consome a saída de outra.
//!
//! ## Modos
//!
//! | Função                | Modo        | Efeito                                                   |
//! |-----------------------|-------------|----------------------------------------------------------|
//! | [`tokenize`]          | `word`      | divide apenas no espaço literal `' '`                    |
//! | [`tokenize`]          | `symbol`    | cada caractere vira um token                             |
//! | [`strip_punctuation`] | `no_punct`  | remove tudo que não é caractere de palavra nem espaço    |
//! | [`strip_punctuation`] | `alnum_keep`| mantém latim, cirílico `а-яА-Я`, dígitos, espaços e `.,!?` |
//! | [`strip_punctuation`] | `none`      | identidade                                               |
//!
//! ## Exemplo
//!
//! ```rust
//! use nlp_core::preprocess::{tokenize, strip_punctuation, CleanMode, TokenizeMode};
//!
//! let words = tokenize("Кошка сидит на окне.", TokenizeMode::Word);
//! assert_eq!(words, vec!["Кошка", "сидит", "на", "окне."]);
//!
//! let clean = strip_punctuation("Кошка сидит на окне.", CleanMode::NoPunct);
//! assert_eq!(clean, "Кошка сидит на окне");
//! ```

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::NlpError;
use crate::schema::Preprocessing;

/// Estratégia de tokenização do pré-processamento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizeMode {
    /// Divide no caractere de espaço `' '` e **somente** nele.
    ///
    /// Tabulações e quebras de linha não são fronteiras, e espaços consecutivos
    /// produzem tokens vazios entre eles. Registros já persistidos dependem
    /// deste comportamento.
    Word,
    /// Cada caractere (inclusive espaços e pontuação) é um token de um caractere.
    Symbol,
}

impl FromStr for TokenizeMode {
    type Err = NlpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(TokenizeMode::Word),
            "symbol" => Ok(TokenizeMode::Symbol),
            other => Err(NlpError::invalid_argument(format!(
                "modo de tokenização desconhecido: '{other}'"
            ))),
        }
    }
}

/// Estratégia de remoção de pontuação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanMode {
    /// Remove todo caractere que não seja letra (`\p{L}`), número (`\p{N}`),
    /// `_` ou espaço.
    ///
    /// Marcas combinantes são removidas (`и\u{306}` vira `и`) e os separadores
    /// de controle `U+001C..U+001F` contam como espaço.
    NoPunct,
    /// Mantém apenas `a-zA-Z`, `а-яА-Я`, `0-9`, espaços (incluindo
    /// `U+001C..U+001F`) e `. , ! ?`.
    ///
    /// A faixa cirílica é literal: `Ё`/`ё` e letras cirílicas estendidas são removidas.
    AlnumKeep,
    /// Devolve o texto sem alterações.
    #[default]
    None,
}

impl FromStr for CleanMode {
    type Err = NlpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_punct" => Ok(CleanMode::NoPunct),
            "alnum_keep" => Ok(CleanMode::AlnumKeep),
            "none" => Ok(CleanMode::None),
            other => Err(NlpError::invalid_argument(format!(
                "modo de limpeza desconhecido: '{other}'"
            ))),
        }
    }
}

fn no_punct_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[^\p{L}\p{N}_\s\x{1C}-\x{1F}]").expect("padrão no_punct válido")
    })
}

fn alnum_keep_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[^a-zA-Zа-яА-Я0-9\s\x{1C}-\x{1F}.,!?]").expect("padrão alnum_keep válido")
    })
}

/// Divide `text` em tokens segundo `mode`.
pub fn tokenize(text: &str, mode: TokenizeMode) -> Vec<String> {
    match mode {
        TokenizeMode::Word => text.split(' ').map(str::to_string).collect(),
        TokenizeMode::Symbol => text.chars().map(|c| c.to_string()).collect(),
    }
}

/// Converte o texto para minúsculas com o mapeamento Unicode completo
/// (latim e cirílico, não apenas ASCII).
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Remove pontuação de `text` segundo `mode`.
pub fn strip_punctuation(text: &str, mode: CleanMode) -> String {
    match mode {
        CleanMode::NoPunct => no_punct_pattern().replace_all(text, "").into_owned(),
        CleanMode::AlnumKeep => alnum_keep_pattern().replace_all(text, "").into_owned(),
        CleanMode::None => text.to_string(),
    }
}

/// Constrói as cinco visões normalizadas do texto.
pub fn preprocess(text: &str) -> Preprocessing {
    Preprocessing {
        tokens_by_word: tokenize(text, TokenizeMode::Word),
        tokens_by_symbol: tokenize(text, TokenizeMode::Symbol),
        lowercased: to_lower(text),
        no_punct: strip_punctuation(text, CleanMode::NoPunct),
        alnum_keep: strip_punctuation(text, CleanMode::AlnumKeep),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn in_alnum_keep_set(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || ('а'..='я').contains(&c)
            || ('А'..='Я').contains(&c)
            || c.is_whitespace()
            || ('\u{1c}'..='\u{1f}').contains(&c)
            || matches!(c, '.' | ',' | '!' | '?')
    }

    #[test]
    fn test_word_split_is_space_only() {
        assert_eq!(tokenize("a\tb\nc d", TokenizeMode::Word), vec!["a\tb\nc", "d"]);
        assert_eq!(tokenize("a  b", TokenizeMode::Word), vec!["a", "", "b"]);
        assert_eq!(tokenize("", TokenizeMode::Word), vec![""]);
    }

    #[test]
    fn test_symbol_split_keeps_everything() {
        let tokens = tokenize("Ой, да!", TokenizeMode::Symbol);
        assert_eq!(tokens, vec!["О", "й", ",", " ", "д", "а", "!"]);
    }

    #[test]
    fn test_to_lower_cyrillic_and_latin() {
        assert_eq!(to_lower("ПРИВЕТ, World ЁЖ"), "привет, world ёж");
    }

    #[test]
    fn test_alnum_keep_drops_yo_and_symbols() {
        assert_eq!(
            strip_punctuation("Ёлка — 5€; ok?", CleanMode::AlnumKeep),
            "лка  5 ok?"
        );
    }

    #[test]
    fn test_no_punct_keeps_underscore_and_digits() {
        assert_eq!(
            strip_punctuation("snake_case, 42% «ёж»!", CleanMode::NoPunct),
            "snake_case 42 ёж"
        );
    }

    #[test]
    fn test_no_punct_drops_combining_marks() {
        assert_eq!(strip_punctuation("и\u{306}ог", CleanMode::NoPunct), "иог");
        assert_eq!(strip_punctuation("йог", CleanMode::NoPunct), "йог");
        assert_eq!(strip_punctuation("x² ½ ‿", CleanMode::NoPunct), "x² ½ ");
    }

    #[test]
    fn test_control_separators_count_as_space() {
        let text = "a\u{1c}b\u{1f}c";
        assert_eq!(strip_punctuation(text, CleanMode::NoPunct), text);
        assert_eq!(strip_punctuation(text, CleanMode::AlnumKeep), text);
    }

    #[test]
    fn test_unknown_modes_are_rejected() {
        assert!(matches!(
            "sentence".parse::<TokenizeMode>(),
            Err(NlpError::InvalidArgument(_))
        ));
        assert!(matches!(
            "strip".parse::<CleanMode>(),
            Err(NlpError::InvalidArgument(_))
        ));
        assert_eq!("alnum_keep".parse::<CleanMode>().unwrap(), CleanMode::AlnumKeep);
        assert_eq!("symbol".parse::<TokenizeMode>().unwrap(), TokenizeMode::Symbol);
    }

    #[test]
    fn test_preprocess_russian_sentence() {
        let p = preprocess("Кошка сидит на окне.");
        assert_eq!(p.tokens_by_word, vec!["Кошка", "сидит", "на", "окне."]);
        assert_eq!(p.no_punct, "Кошка сидит на окне");
        assert_eq!(p.lowercased, "кошка сидит на окне.");
        assert_eq!(p.alnum_keep, "Кошка сидит на окне.");
        assert_eq!(p.tokens_by_symbol.len(), 20);
    }

    #[test]
    fn test_preprocess_english_double_space() {
        let text = "Hello, World!  NLP is fun.";
        let p = preprocess(text);
        assert_eq!(
            p.tokens_by_word,
            vec!["Hello,", "World!", "", "NLP", "is", "fun."]
        );
        assert_eq!(p.alnum_keep, text);
        assert_eq!(p.no_punct, "Hello World  NLP is fun");
        assert_eq!(p.lowercased, "hello, world!  nlp is fun.");
    }

    proptest! {
        #[test]
        fn prop_symbol_tokens_rebuild_input(s in any::<String>()) {
            let tokens = tokenize(&s, TokenizeMode::Symbol);
            prop_assert_eq!(tokens.len(), s.chars().count());
            prop_assert!(tokens.iter().all(|t| t.chars().count() == 1));
            prop_assert_eq!(tokens.concat(), s);
        }

        #[test]
        fn prop_word_tokens_rebuild_input(s in any::<String>()) {
            prop_assert_eq!(tokenize(&s, TokenizeMode::Word).join(" "), s);
        }

        #[test]
        fn prop_to_lower_idempotent(s in any::<String>()) {
            let once = to_lower(&s);
            prop_assert_eq!(to_lower(&once), once);
        }

        #[test]
        fn prop_no_punct_output_is_clean_and_idempotent(s in any::<String>()) {
            let once = strip_punctuation(&s, CleanMode::NoPunct);
            prop_assert!(!no_punct_pattern().is_match(&once));
            prop_assert_eq!(strip_punctuation(&once, CleanMode::NoPunct), once);
        }

        #[test]
        fn prop_alnum_keep_output_in_allow_set(s in any::<String>()) {
            let once = strip_punctuation(&s, CleanMode::AlnumKeep);
            prop_assert!(once.chars().all(in_alnum_keep_set));
            prop_assert_eq!(strip_punctuation(&once, CleanMode::AlnumKeep), once);
        }

        #[test]
        fn prop_none_mode_is_identity(s in any::<String>()) {
            prop_assert_eq!(strip_punctuation(&s, CleanMode::None), s);
        }
    }
}
