//! # Tokenizador dos modelos linguísticos
//!
//! Diferente de [`crate::preprocess::tokenize`], que reproduz divisões ingênuas
//! para o documento, este tokenizador alimenta o anotador: separa palavras e
//! pontuação e preserva a posição de cada token no texto original (offset).
//!
//! ## Etapas
//!
//! 1. **Fronteiras de palavra** (UAX #29, via `unicode-segmentation`); segmentos
//!    compostos só de espaços são descartados.
//! 2. **Abreviações**: `"Dr" + "."` volta a ser um único token `"Dr."` quando a
//!    abreviação está no léxico do idioma.
//! 3. **Clíticos**: sufixos como `n't` e `'s` viram tokens próprios
//!    (`"don't"` → `"do"`, `"n't"`).
//!
//! ## Exemplo
//!
//! ```rust
//! use nlp_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("Dr. Smith isn't here.", &["dr"], &["n't"]);
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Dr.", "Smith", "is", "n't", "here", "."]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "Москву", ",", "n't").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista.
    pub index: usize,
}

impl Token {
    /// Verdadeiro se o primeiro caractere é maiúsculo.
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().map(char::is_uppercase).unwrap_or(false)
    }

    /// Verdadeiro para siglas como "NLP" ou "МГУ" (duas letras ou mais, todas maiúsculas).
    pub fn is_all_caps(&self) -> bool {
        let letters: Vec<char> = self.text.chars().filter(|c| c.is_alphabetic()).collect();
        letters.len() >= 2
            && letters.len() == self.text.chars().count()
            && letters.iter().all(|c| c.is_uppercase())
    }
}

/// Tokeniza `text` usando as abreviações e clíticos (em minúsculas) do idioma.
pub fn tokenize(text: &str, abbreviations: &[&str], clitics: &[&str]) -> Vec<Token> {
    let segments: Vec<(usize, &str)> = text
        .split_word_bound_indices()
        .filter(|(_, seg)| !seg.chars().all(char::is_whitespace))
        .collect();

    let mut tokens = Vec::with_capacity(segments.len());
    let mut i = 0;
    while i < segments.len() {
        let (start, seg) = segments[i];
        let end = start + seg.len();

        // Abreviação colada ao ponto seguinte (ex: "Dr.")
        if let Some(&(next_start, ".")) = segments.get(i + 1) {
            if next_start == end && abbreviations.contains(&seg.to_lowercase().as_str()) {
                push_token(&mut tokens, &text[start..end + 1], start);
                i += 2;
                continue;
            }
        }

        match split_clitic(seg, clitics) {
            Some(cut) => {
                push_token(&mut tokens, &seg[..cut], start);
                push_token(&mut tokens, &seg[cut..], start + cut);
            }
            None => push_token(&mut tokens, seg, start),
        }
        i += 1;
    }

    tokens
}

/// Retorna o índice de byte onde começa um clítico final, se houver.
fn split_clitic(word: &str, clitics: &[&str]) -> Option<usize> {
    clitics
        .iter()
        .filter(|clitic| word.len() > clitic.len())
        .filter_map(|clitic| {
            let cut = word.len() - clitic.len();
            let matches = word.is_char_boundary(cut)
                && word[cut..].eq_ignore_ascii_case(clitic);
            matches.then_some(cut)
        })
        .min()
}

fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize) {
    let index = tokens.len();
    tokens.push(Token {
        text: text.to_string(),
        start,
        end: start + text.len(),
        index,
    });
}
