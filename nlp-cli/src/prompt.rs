//! Leitura interativa da frase e do idioma.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use console::style;
use nlp_core::Language;

/// Lê uma frase. Falha se ela for vazia depois do `trim`.
pub fn read_sentence<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Введите предложение / Enter a sentence: ")?;
    output.flush()?;

    let line = read_line(input)?.context("entrada encerrada antes da frase")?;
    normalize_sentence(&line)
}

/// Frase sem espaços nas pontas; vazia é erro.
pub fn normalize_sentence(raw: &str) -> Result<String> {
    let sentence = raw.trim();
    if sentence.is_empty() {
        bail!("a frase não pode ser vazia");
    }
    Ok(sentence.to_string())
}

/// Lê o idioma, repetindo a pergunta até receber `ru` ou `en`.
///
/// A resposta é normalizada com `trim` e minúsculas antes da validação.
pub fn read_language<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Language> {
    loop {
        write!(output, "Язык / Language (ru/en): ")?;
        output.flush()?;

        let line = read_line(input)?.context("entrada encerrada antes do idioma")?;
        match line.trim().to_lowercase().parse::<Language>() {
            Ok(language) => return Ok(language),
            Err(_) => writeln!(
                output,
                "{} Поддерживаются только 'ru' и 'en' / Only 'ru' and 'en' are supported",
                style("!").yellow()
            )?,
        }
    }
}

/// Uma linha da entrada, ou `None` no fim do fluxo.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_sentence_is_trimmed() {
        let mut input = Cursor::new("  Кошка сидит на окне.  \n");
        let mut output = Vec::new();
        let sentence = read_sentence(&mut input, &mut output).unwrap();
        assert_eq!(sentence, "Кошка сидит на окне.");
    }

    #[test]
    fn test_blank_sentence_is_error() {
        let mut input = Cursor::new("   \n");
        let mut output = Vec::new();
        assert!(read_sentence(&mut input, &mut output).is_err());
    }

    #[test]
    fn test_normalize_sentence() {
        assert_eq!(normalize_sentence("\tHello world \n").unwrap(), "Hello world");
        assert!(normalize_sentence(" \t\n").is_err());
    }

    #[test]
    fn test_language_reprompts_until_valid() {
        let mut input = Cursor::new("de\n\n  EN \n");
        let mut output = Vec::new();
        let language = read_language(&mut input, &mut output).unwrap();
        assert_eq!(language, Language::En);

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Language (ru/en)").count(), 3);
    }

    #[test]
    fn test_language_eof_is_error() {
        let mut input = Cursor::new("fr\n");
        let mut output = Vec::new();
        assert!(read_language(&mut input, &mut output).is_err());
    }
}
