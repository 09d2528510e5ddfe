//! # Etiquetagem morfossintática (POS)
//!
//! Usa o conjunto de etiquetas Universal Dependencies (UPOS). A decisão para cada
//! token segue uma cascata, da evidência mais forte para a mais fraca:
//!
//! 1. Palavras de classe fechada do léxico (artigos, preposições, auxiliares...).
//! 2. Números, pontuação e símbolos, pela forma do token.
//! 3. Palavras de classe aberta conhecidas.
//! 4. Maiúscula fora do início de frase, ou sigla → `PROPN`.
//! 5. Sufixos característicos (ex: `-ly` → `ADV`, `-ить` → `VERB`).
//! 6. `NOUN` como padrão.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::tokenizer::Token;

/// Etiquetas UPOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UPos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl UPos {
    pub fn as_str(&self) -> &'static str {
        match self {
            UPos::Adj => "ADJ",
            UPos::Adp => "ADP",
            UPos::Adv => "ADV",
            UPos::Aux => "AUX",
            UPos::Cconj => "CCONJ",
            UPos::Det => "DET",
            UPos::Intj => "INTJ",
            UPos::Noun => "NOUN",
            UPos::Num => "NUM",
            UPos::Part => "PART",
            UPos::Pron => "PRON",
            UPos::Propn => "PROPN",
            UPos::Punct => "PUNCT",
            UPos::Sconj => "SCONJ",
            UPos::Sym => "SYM",
            UPos::Verb => "VERB",
            UPos::X => "X",
        }
    }

    /// Classes cuja forma superficial já é o lema.
    pub fn is_invariant(&self) -> bool {
        matches!(self, UPos::Punct | UPos::Sym | UPos::Num | UPos::X)
    }
}

impl std::fmt::Display for UPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const SYMBOLS: &[char] = &[
    '$', '%', '&', '+', '<', '=', '>', '@', '^', '`', '|', '~', '#', '*', '/', '\\', '§', '©',
    '®', '°', '€', '£', '₽', '№', '±',
];

const SENTENCE_END: &[&str] = &[".", "!", "?", "…", "...", "\"", "«", "“"];

/// Etiquetador baseado em léxico e sufixos.
pub struct PosTagger {
    closed: HashMap<&'static str, UPos>,
    open: HashMap<&'static str, UPos>,
    /// Ordenados do sufixo mais longo para o mais curto.
    suffixes: Vec<(&'static str, UPos)>,
}

impl PosTagger {
    pub fn new(lexicon: &Lexicon) -> Self {
        let mut suffixes = lexicon.pos_suffixes.to_vec();
        suffixes.sort_by_key(|(suffix, _)| std::cmp::Reverse(suffix.chars().count()));
        Self {
            closed: lexicon.closed_class.iter().copied().collect(),
            open: lexicon.open_class.iter().copied().collect(),
            suffixes,
        }
    }

    /// Etiqueta todos os tokens de uma frase.
    pub fn tag(&self, tokens: &[Token]) -> Vec<UPos> {
        tokens.iter().map(|t| self.tag_token(tokens, t.index)).collect()
    }

    fn tag_token(&self, tokens: &[Token], i: usize) -> UPos {
        let token = &tokens[i];
        let lower = token.text.to_lowercase();

        if let Some(pos) = self.closed.get(lower.as_str()) {
            return *pos;
        }
        if let Some(pos) = shape_class(&token.text) {
            return pos;
        }
        if let Some(pos) = self.open.get(lower.as_str()) {
            return *pos;
        }

        let sentence_start = i == 0 || SENTENCE_END.contains(&tokens[i - 1].text.as_str());
        if token.is_all_caps() || (token.is_capitalized() && !sentence_start) {
            return UPos::Propn;
        }

        self.suffix_class(&lower).unwrap_or(UPos::Noun)
    }

    fn suffix_class(&self, lower: &str) -> Option<UPos> {
        let len = lower.chars().count();
        self.suffixes
            .iter()
            .find(|(suffix, _)| len >= suffix.chars().count() + 2 && lower.ends_with(suffix))
            .map(|(_, pos)| *pos)
    }
}

/// Classifica tokens pela forma: números, pontuação e símbolos.
fn shape_class(text: &str) -> Option<UPos> {
    if text.chars().any(|c| c.is_numeric())
        && text.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',' | '-' | '/'))
    {
        return Some(UPos::Num);
    }
    if text.chars().all(|c| !c.is_alphanumeric()) {
        if text.chars().all(|c| SYMBOLS.contains(&c)) {
            return Some(UPos::Sym);
        }
        return Some(UPos::Punct);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::tokenizer::tokenize;

    fn tag(language: Language, text: &str) -> Vec<&'static str> {
        let lexicon = Lexicon::for_language(language);
        let tokens = tokenize(text, lexicon.abbreviations, lexicon.clitics);
        PosTagger::new(lexicon)
            .tag(&tokens)
            .iter()
            .map(UPos::as_str)
            .collect()
    }

    #[test]
    fn test_russian_sentence() {
        assert_eq!(
            tag(Language::Ru, "Кошка сидит на окне."),
            vec!["NOUN", "VERB", "ADP", "NOUN", "PUNCT"]
        );
    }

    #[test]
    fn test_english_sentence() {
        assert_eq!(
            tag(Language::En, "Hello, World!  NLP is fun."),
            vec!["INTJ", "PUNCT", "PROPN", "PUNCT", "PROPN", "AUX", "NOUN", "PUNCT"]
        );
    }

    #[test]
    fn test_shape_classes() {
        assert_eq!(shape_class("2024"), Some(UPos::Num));
        assert_eq!(shape_class("3.14"), Some(UPos::Num));
        assert_eq!(shape_class("%"), Some(UPos::Sym));
        assert_eq!(shape_class("—"), Some(UPos::Punct));
        assert_eq!(shape_class("word"), None);
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(tag(Language::En, "they quickly left"), vec!["PRON", "ADV", "VERB"]);
        assert_eq!(tag(Language::Ru, "красивый"), vec!["ADJ"]);
    }
}
