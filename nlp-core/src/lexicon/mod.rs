//! # Léxicos dos modelos embutidos
//!
//! Cada idioma é descrito por um [`Lexicon`] estático: palavras de classe
//! fechada, sufixos característicos, exceções e regras de lematização,
//! gazetteers de entidades e padrões de contexto (títulos, indicadores de
//! organização). O [`crate::model::RuleBasedModel`] compila esses dados em
//! tabelas de consulta no momento do carregamento.

mod english;
mod russian;

use crate::language::Language;
use crate::pos::UPos;
use crate::tagger::EntityCategory;

pub use english::ENGLISH;
pub use russian::RUSSIAN;

/// Regra de lematização por sufixo, restrita a uma classe gramatical.
///
/// `сидел` com `{ pos: Verb, suffix: "ел", replacement: "еть", min_stem: 2 }` → `сидеть`.
#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    pub pos: UPos,
    pub suffix: &'static str,
    pub replacement: &'static str,
    /// Número mínimo de caracteres que devem sobrar antes do sufixo.
    pub min_stem: usize,
}

pub(crate) const fn rule(
    pos: UPos,
    suffix: &'static str,
    replacement: &'static str,
    min_stem: usize,
) -> SuffixRule {
    SuffixRule { pos, suffix, replacement, min_stem }
}

/// Recursos linguísticos de um idioma.
#[derive(Debug)]
pub struct Lexicon {
    pub language: Language,
    /// Palavras funcionais (minúsculas) e sua classe.
    pub closed_class: &'static [(&'static str, UPos)],
    /// Palavras de classe aberta frequentes cuja classe os sufixos não capturam.
    pub open_class: &'static [(&'static str, UPos)],
    /// Sufixos característicos de classe (ex: "ly" → ADV).
    pub pos_suffixes: &'static [(&'static str, UPos)],
    /// Formas irregulares → lema (minúsculas).
    pub lemma_exceptions: &'static [(&'static str, &'static str)],
    /// Regras aplicadas em ordem; a primeira que casar vence.
    pub lemma_rules: &'static [SuffixRule],
    /// Se nomes próprios mantêm a grafia original como lema.
    pub keep_proper_case: bool,
    /// Abreviações que absorvem o ponto final (sem o ponto, minúsculas).
    pub abbreviations: &'static [&'static str],
    /// Clíticos separados do final das palavras.
    pub clitics: &'static [&'static str],
    /// Palavras que precedem nomes de pessoas ("president", "господин").
    pub person_titles: &'static [&'static str],
    /// Palavras que precedem nomes de organizações ("ооо", "компания").
    pub org_prefixes: &'static [&'static str],
    /// Palavras que seguem nomes de organizações ("inc", "corp").
    pub org_suffixes: &'static [&'static str],
    /// Entidades conhecidas (minúsculas, podem ter várias palavras).
    pub gazetteer: &'static [(&'static str, EntityCategory)],
}

impl Lexicon {
    pub fn for_language(language: Language) -> &'static Lexicon {
        match language {
            Language::En => &ENGLISH,
            Language::Ru => &RUSSIAN,
        }
    }
}
