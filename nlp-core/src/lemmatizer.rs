//! # Lematização por exceções e regras de sufixo
//!
//! Para cada token, já etiquetado com sua classe gramatical:
//!
//! 1. Pontuação, símbolos e números são o próprio lema.
//! 2. Formas irregulares do léxico (`went` → `go`, `людей` → `человек`).
//! 3. Nomes próprios: grafia original no inglês, minúsculas no russo.
//! 4. Primeira regra de sufixo da classe que casar, respeitando o radical mínimo.
//! 5. Sem regra aplicável, a forma em minúsculas.

use std::collections::HashMap;

use crate::lexicon::{Lexicon, SuffixRule};
use crate::pos::UPos;

pub struct Lemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
    rules: HashMap<UPos, Vec<SuffixRule>>,
    keep_proper_case: bool,
}

impl Lemmatizer {
    pub fn new(lexicon: &Lexicon) -> Self {
        let mut rules: HashMap<UPos, Vec<SuffixRule>> = HashMap::new();
        for rule in lexicon.lemma_rules {
            rules.entry(rule.pos).or_default().push(*rule);
        }
        Self {
            exceptions: lexicon.lemma_exceptions.iter().copied().collect(),
            rules,
            keep_proper_case: lexicon.keep_proper_case,
        }
    }

    /// Forma canônica de `word` dada sua classe.
    pub fn lemmatize(&self, word: &str, pos: UPos) -> String {
        if pos.is_invariant() {
            return word.to_string();
        }

        let lower = word.to_lowercase();
        if let Some(lemma) = self.exceptions.get(lower.as_str()) {
            return (*lemma).to_string();
        }

        if pos == UPos::Propn {
            return if self.keep_proper_case { word.to_string() } else { lower };
        }

        self.apply_rules(&lower, pos).unwrap_or(lower)
    }

    /// Lematiza uma sequência de (palavra, classe) de uma vez.
    pub fn lemmatize_all<'a>(
        &self,
        words: impl IntoIterator<Item = (&'a str, UPos)>,
    ) -> Vec<String> {
        words.into_iter().map(|(w, pos)| self.lemmatize(w, pos)).collect()
    }

    fn apply_rules(&self, lower: &str, pos: UPos) -> Option<String> {
        let rules = self.rules.get(&pos)?;
        rules.iter().find_map(|rule| {
            let stem = lower.strip_suffix(rule.suffix)?;
            if stem.chars().count() < rule.min_stem {
                return None;
            }
            Some(format!("{stem}{}", rule.replacement))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn lemmatizer(language: Language) -> Lemmatizer {
        Lemmatizer::new(Lexicon::for_language(language))
    }

    #[test]
    fn test_russian_exceptions_and_rules() {
        let lem = lemmatizer(Language::Ru);
        assert_eq!(lem.lemmatize("сидит", UPos::Verb), "сидеть");
        assert_eq!(lem.lemmatize("окне", UPos::Noun), "окно");
        assert_eq!(lem.lemmatize("посетил", UPos::Verb), "посетить");
        assert_eq!(lem.lemmatize("читает", UPos::Verb), "читать");
        assert_eq!(lem.lemmatize("красивая", UPos::Adj), "красивый");
        assert_eq!(lem.lemmatize("Кошка", UPos::Noun), "кошка");
    }

    #[test]
    fn test_russian_proper_nouns_are_lowercased() {
        let lem = lemmatizer(Language::Ru);
        assert_eq!(lem.lemmatize("Москву", UPos::Propn), "москва");
        assert_eq!(lem.lemmatize("Путин", UPos::Propn), "путин");
    }

    #[test]
    fn test_english_rules() {
        let lem = lemmatizer(Language::En);
        assert_eq!(lem.lemmatize("visited", UPos::Verb), "visit");
        assert_eq!(lem.lemmatize("cities", UPos::Noun), "city");
        assert_eq!(lem.lemmatize("boxes", UPos::Noun), "box");
        assert_eq!(lem.lemmatize("class", UPos::Noun), "class");
        assert_eq!(lem.lemmatize("is", UPos::Aux), "be");
    }

    #[test]
    fn test_english_proper_nouns_keep_case() {
        let lem = lemmatizer(Language::En);
        assert_eq!(lem.lemmatize("London", UPos::Propn), "London");
        assert_eq!(lem.lemmatize("NLP", UPos::Propn), "NLP");
    }

    #[test]
    fn test_min_stem_blocks_short_words() {
        let lem = lemmatizer(Language::En);
        // "bus" - "s" deixaria um radical de duas letras, mas "us" protege a forma
        assert_eq!(lem.lemmatize("bus", UPos::Noun), "bus");
        // "as" - "s" deixaria uma única letra
        assert_eq!(lem.lemmatize("as", UPos::Noun), "as");
    }

    #[test]
    fn test_invariant_classes_return_surface() {
        let lem = lemmatizer(Language::Ru);
        assert_eq!(lem.lemmatize(".", UPos::Punct), ".");
        assert_eq!(lem.lemmatize("2024", UPos::Num), "2024");
        assert_eq!(lem.lemmatize("%", UPos::Sym), "%");
    }

    #[test]
    fn test_lemmatize_all_preserves_order() {
        let lem = lemmatizer(Language::Ru);
        let lemmas = lem.lemmatize_all([
            ("Кошка", UPos::Noun),
            ("сидит", UPos::Verb),
            ("на", UPos::Adp),
            ("окне", UPos::Noun),
            (".", UPos::Punct),
        ]);
        assert_eq!(lemmas, vec!["кошка", "сидеть", "на", "окно", "."]);
    }
}
