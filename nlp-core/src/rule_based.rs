//! # Motor de Regras: Gazetteers e Padrões de Contexto
//!
//! O reconhecimento de entidades dos modelos embutidos é inteiramente baseado
//! em regras. Cada regra só marca tokens que nenhuma regra anterior marcou,
//! então a ordem abaixo é também a ordem de prioridade:
//!
//! | # | Regra                 | Exemplo                                   | Resultado    |
//! |---|-----------------------|-------------------------------------------|--------------|
//! | 1 | `gazetteer`           | "Barack Obama", "Москву"                  | categoria da lista |
//! | 2 | `title_pattern`       | "президент **Путин**", "Dr. **Smith**"   | PER          |
//! | 3 | `org_prefix_pattern`  | "ООО «**Ромашка**»"                       | ORG          |
//! | 4 | `org_suffix_pattern`  | "**Acme Inc.**"                           | ORG          |
//! | 5 | `acronym_pattern`     | "**NLP**", "**МЧС**"                      | ORG          |
//! | 6 | `proper_noun_run`     | dois ou mais nomes próprios seguidos      | PER          |
//!
//! O gazetteer compara tanto a forma do texto quanto o lema, o que cobre as
//! flexões de caso do russo que não estão listadas.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::pos::UPos;
use crate::tagger::{EntityCategory, Tag};
use crate::tokenizer::{tokenize, Token};

/// Uma correspondência de regra: qual token foi marcado e com qual tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMatch {
    pub token_index: usize,
    pub tag: Tag,
    pub rule_name: String,
}

/// Entrada do gazetteer já tokenizada (lowercase).
struct Phrase {
    words: Vec<String>,
    category: EntityCategory,
}

const OPENING_QUOTES: &[&str] = &["«", "\"", "“", "„", "'"];

/// Motor de regras com gazetteers e padrões de contexto
pub struct RuleEngine {
    /// Ordenadas da frase mais longa para a mais curta
    phrases: Vec<Phrase>,
    person_titles: Vec<String>,
    org_prefixes: Vec<String>,
    org_suffixes: Vec<String>,
}

impl RuleEngine {
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        let mut engine = Self {
            phrases: vec![],
            person_titles: owned(lexicon.person_titles),
            org_prefixes: owned(lexicon.org_prefixes),
            org_suffixes: owned(lexicon.org_suffixes),
        };
        for (name, category) in lexicon.gazetteer {
            engine.add_entity(name, *category, lexicon.abbreviations);
        }
        engine
    }

    /// Adiciona uma entidade ao gazetteer. O nome é tokenizado como o texto
    /// analisado será, para que "St. Petersburg" ou "Санкт-Петербург" casem
    /// token a token.
    pub fn add_entity(&mut self, name: &str, category: EntityCategory, abbreviations: &[&str]) {
        let words: Vec<String> = tokenize(name, abbreviations, &[])
            .into_iter()
            .map(|t| t.text.to_lowercase())
            .collect();
        if words.is_empty() {
            return;
        }
        let at = self
            .phrases
            .partition_point(|p| p.words.len() >= words.len());
        self.phrases.insert(at, Phrase { words, category });
    }

    /// Aplica todas as regras à sequência de tokens.
    ///
    /// `lemmas` e `pos` são paralelos a `tokens`. Retorna um vetor do mesmo
    /// tamanho com a correspondência de cada token, se houver.
    pub fn apply(&self, tokens: &[Token], lemmas: &[String], pos: &[UPos]) -> Vec<Option<RuleMatch>> {
        let mut result: Vec<Option<RuleMatch>> = vec![None; tokens.len()];

        // 1. Gazetteer (n-gramas, mais longos primeiro)
        let mut i = 0;
        while i < tokens.len() {
            let found = if result[i].is_none() && tokens[i].is_capitalized() {
                self.phrases
                    .iter()
                    .find(|phrase| self.phrase_matches(phrase, tokens, lemmas, &result, i))
            } else {
                None
            };
            match found {
                Some(phrase) => {
                    // "Иван Пушкин": nome e sobrenome listados separadamente
                    let continues_person = phrase.category == EntityCategory::Per
                        && i > 0
                        && result[i - 1].as_ref().is_some_and(|m| {
                            m.rule_name == "gazetteer"
                                && m.tag.category() == Some(EntityCategory::Per)
                        });
                    mark(&mut result, i, phrase.words.len(), phrase.category, "gazetteer");
                    if continues_person {
                        if let Some(m) = result[i].as_mut() {
                            m.tag = Tag::Inside(EntityCategory::Per);
                        }
                    }
                    i += phrase.words.len();
                }
                None => i += 1,
            }
        }

        // 2. Título seguido de nome: "President Obama", "господин Иванов"
        for i in 0..tokens.len().saturating_sub(1) {
            let lower = tokens[i].text.to_lowercase();
            if !self.person_titles.contains(&lower) {
                continue;
            }
            let len = name_run(tokens, pos, &result, i + 1);
            if len > 0 {
                mark(&mut result, i + 1, len, EntityCategory::Per, "title_pattern");
            }
        }

        // 3. Forma jurídica antes do nome: "ООО «Ромашка»"
        for i in 0..tokens.len() {
            let lower = tokens[i].text.to_lowercase();
            if !self.org_prefixes.contains(&lower) {
                continue;
            }
            let mut start = i + 1;
            while start < tokens.len() && OPENING_QUOTES.contains(&tokens[start].text.as_str()) {
                start += 1;
            }
            let len = name_run(tokens, pos, &result, start);
            if len > 0 {
                mark(&mut result, start, len, EntityCategory::Org, "org_prefix_pattern");
            }
        }

        // 4. Forma jurídica depois do nome: "Acme Corp.", "Harvard University"
        for i in 1..tokens.len() {
            let lower = tokens[i].text.to_lowercase();
            if result[i].is_some() || !self.org_suffixes.contains(&lower) {
                continue;
            }
            let mut start = i;
            while start > 0 && is_name_like(&tokens[start - 1], pos[start - 1]) && result[start - 1].is_none() {
                start -= 1;
            }
            if start < i {
                mark(&mut result, start, i - start + 1, EntityCategory::Org, "org_suffix_pattern");
            }
        }

        // 5. Siglas: "NLP", "МЧС"
        for (i, token) in tokens.iter().enumerate() {
            if result[i].is_some() || pos[i] != UPos::Propn || !token.is_all_caps() {
                continue;
            }
            let letters = token.text.chars().count();
            let lower = token.text.to_lowercase();
            if (2..=5).contains(&letters) && !self.org_prefixes.contains(&lower) {
                mark(&mut result, i, 1, EntityCategory::Org, "acronym_pattern");
            }
        }

        // 6. Sequência de nomes próprios sem outra explicação
        let mut i = 0;
        while i < tokens.len() {
            let len = tokens[i..]
                .iter()
                .zip(&pos[i..])
                .zip(&result[i..])
                .take_while(|((_, p), m)| **p == UPos::Propn && m.is_none())
                .count();
            if len >= 2 {
                mark(&mut result, i, len, EntityCategory::Per, "proper_noun_run");
            }
            i += len.max(1);
        }

        result
    }

    fn phrase_matches(
        &self,
        phrase: &Phrase,
        tokens: &[Token],
        lemmas: &[String],
        result: &[Option<RuleMatch>],
        start: usize,
    ) -> bool {
        if start + phrase.words.len() > tokens.len() {
            return false;
        }
        phrase.words.iter().enumerate().all(|(j, word)| {
            let k = start + j;
            result[k].is_none()
                && (tokens[k].text.to_lowercase() == *word
                    || lemmas.get(k).is_some_and(|l| l.to_lowercase() == *word))
        })
    }
}

/// Token que pode fazer parte de um nome: inicial maiúscula e classe nominal.
fn is_name_like(token: &Token, pos: UPos) -> bool {
    token.is_capitalized() && matches!(pos, UPos::Propn | UPos::Noun | UPos::Adj | UPos::X)
}

/// Comprimento da sequência de tokens com cara de nome, ainda não marcados,
/// a partir de `start`.
fn name_run(tokens: &[Token], pos: &[UPos], result: &[Option<RuleMatch>], start: usize) -> usize {
    (start..tokens.len())
        .take_while(|&k| result[k].is_none() && is_name_like(&tokens[k], pos[k]))
        .count()
}

/// Marca `len` tokens a partir de `start` como uma entidade (B seguido de I).
fn mark(
    result: &mut [Option<RuleMatch>],
    start: usize,
    len: usize,
    category: EntityCategory,
    rule_name: &str,
) {
    for k in start..start + len {
        let tag = if k == start {
            Tag::Begin(category)
        } else {
            Tag::Inside(category)
        };
        result[k] = Some(RuleMatch {
            token_index: k,
            tag,
            rule_name: rule_name.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::lemmatizer::Lemmatizer;
    use crate::pos::PosTagger;

    fn run(engine: &RuleEngine, language: Language, text: &str) -> Vec<Option<RuleMatch>> {
        let lexicon = Lexicon::for_language(language);
        let tokens = tokenize(text, lexicon.abbreviations, lexicon.clitics);
        let pos = PosTagger::new(lexicon).tag(&tokens);
        let lemmas = Lemmatizer::new(lexicon)
            .lemmatize_all(tokens.iter().map(|t| t.text.as_str()).zip(pos.iter().copied()));
        engine.apply(&tokens, &lemmas, &pos)
    }

    /// Motor sem gazetteer nem padrões: só siglas e sequências de nomes.
    fn empty_engine() -> RuleEngine {
        RuleEngine {
            phrases: vec![],
            person_titles: vec![],
            org_prefixes: vec![],
            org_suffixes: vec![],
        }
    }

    fn tags(matches: &[Option<RuleMatch>]) -> Vec<String> {
        matches
            .iter()
            .map(|m| match m.as_ref().map(|m| m.tag) {
                Some(Tag::Begin(c)) => format!("B-{}", c.name()),
                Some(Tag::Inside(c)) => format!("I-{}", c.name()),
                _ => "O".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_multiword_gazetteer() {
        let engine = RuleEngine::from_lexicon(Lexicon::for_language(Language::En));
        let matches = run(&engine, Language::En, "Barack Obama visited London.");
        assert_eq!(tags(&matches), vec!["B-PER", "I-PER", "O", "B-LOC", "O"]);
        assert_eq!(matches[0].as_ref().unwrap().rule_name, "gazetteer");
    }

    #[test]
    fn test_gazetteer_matches_inflected_forms() {
        let engine = RuleEngine::from_lexicon(Lexicon::for_language(Language::Ru));
        let matches = run(&engine, Language::Ru, "Владимир Путин посетил Москву.");
        assert_eq!(tags(&matches), vec!["B-PER", "I-PER", "O", "B-LOC", "O"]);
    }

    #[test]
    fn test_gazetteer_requires_capital() {
        let engine = RuleEngine::from_lexicon(Lexicon::for_language(Language::En));
        let matches = run(&engine, Language::En, "the apple fell");
        assert!(matches.iter().all(Option::is_none));
    }

    #[test]
    fn test_consecutive_person_entries_merge() {
        let mut engine = empty_engine();
        engine.add_entity("иван", EntityCategory::Per, &[]);
        engine.add_entity("пушкин", EntityCategory::Per, &[]);
        let matches = run(&engine, Language::Ru, "вчера Иван Пушкин пришёл");
        assert_eq!(tags(&matches), vec!["O", "B-PER", "I-PER", "O"]);
    }

    #[test]
    fn test_title_pattern() {
        let engine = RuleEngine::from_lexicon(Lexicon::for_language(Language::Ru));
        let matches = run(&engine, Language::Ru, "господин Иванов пришёл");
        assert_eq!(tags(&matches), vec!["O", "B-PER", "O"]);
        assert_eq!(matches[1].as_ref().unwrap().rule_name, "title_pattern");
    }

    #[test]
    fn test_org_prefix_skips_quotes() {
        let engine = RuleEngine::from_lexicon(Lexicon::for_language(Language::Ru));
        let matches = run(&engine, Language::Ru, "ООО «Ромашка» открылось");
        assert_eq!(tags(&matches), vec!["O", "O", "B-ORG", "O", "O"]);
    }

    #[test]
    fn test_org_suffix_pattern() {
        let engine = RuleEngine::from_lexicon(Lexicon::for_language(Language::En));
        let matches = run(&engine, Language::En, "he joined Zorblax Dynamics Inc. today");
        assert_eq!(tags(&matches), vec!["O", "O", "B-ORG", "I-ORG", "I-ORG", "O"]);
    }

    #[test]
    fn test_acronym_pattern() {
        let engine = RuleEngine::from_lexicon(Lexicon::for_language(Language::En));
        let matches = run(&engine, Language::En, "Hello, World!  NLP is fun.");
        assert_eq!(tags(&matches), vec!["O", "O", "O", "O", "B-ORG", "O", "O", "O"]);
        assert_eq!(matches[4].as_ref().unwrap().rule_name, "acronym_pattern");
    }

    #[test]
    fn test_proper_noun_run() {
        let engine = empty_engine();
        let matches = run(&engine, Language::En, "we met Zara Quill yesterday");
        assert_eq!(tags(&matches), vec!["O", "O", "B-PER", "I-PER", "O"]);
    }

    #[test]
    fn test_phrases_sorted_longest_first() {
        let mut engine = empty_engine();
        engine.add_entity("new", EntityCategory::Misc, &[]);
        engine.add_entity("new york city", EntityCategory::Loc, &[]);
        engine.add_entity("new york", EntityCategory::Loc, &[]);
        let lens: Vec<usize> = engine.phrases.iter().map(|p| p.words.len()).collect();
        assert_eq!(lens, vec![3, 2, 1]);
    }
}
