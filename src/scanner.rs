// src/scanner.rs
use crate::lexer::lex_source;
use crate::token::{Token, Verdict};
use logos::{Logos, SpannedIter};

/// A classified backtick. `index` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub index: usize,
    pub verdict: Verdict,
}

pub fn count_total(text: &str) -> usize {
    lex_source(text).count()
}

/// Naive count of the two-character sequence backslash + backtick.
/// A backtick after an escaped backslash (`\\` + backtick) is counted too.
pub fn count_escaped_substring(text: &str) -> usize {
    text.matches("\\`").count()
}

pub fn classify_each(text: &str) -> Classify<'_> {
    Classify::new(text)
}

/// Single left-to-right pass; not restartable.
pub struct Classify<'source> {
    source: &'source str,
    tokens: SpannedIter<'source, Token>,
    // Byte offset and character index of the last backtick seen.
    last_byte: usize,
    last_index: usize,
}

impl<'source> Classify<'source> {
    pub fn new(source: &'source str) -> Self {
        Classify {
            source,
            tokens: Token::lexer(source).spanned(),
            last_byte: 0,
            last_index: 0,
        }
    }

    fn char_index_of(&mut self, byte: usize) -> usize {
        self.last_index += self.source[self.last_byte..byte].chars().count();
        self.last_byte = byte;
        self.last_index
    }
}

/// Looks at no more than two characters before `byte`; longer backslash runs
/// are not followed.
fn verdict_at(source: &str, byte: usize) -> Verdict {
    let mut before = source[..byte].chars().rev();
    match (before.next(), before.next()) {
        (Some('\\'), Some('\\')) => Verdict::UnescapedAfterDoubleBackslash,
        (Some('\\'), _) => Verdict::Escaped,
        _ => Verdict::Unescaped,
    }
}

impl<'source> Iterator for Classify<'source> {
    type Item = Classified;

    fn next(&mut self) -> Option<Classified> {
        let span = loop {
            match self.tokens.next()? {
                (Ok(Token::Backtick), span) => break span,
                (Err(_), span) => log::warn!("unexpected lexer error at {:?}", span),
            }
        };
        let index = self.char_index_of(span.start);
        let verdict = verdict_at(self.source, span.start);
        log::debug!("backtick at index {} (byte {}): {:?}", index, span.start, verdict);
        Some(Classified { index, verdict })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_looks_back_two_characters_only() {
        assert_eq!(verdict_at("`", 0), Verdict::Unescaped);
        assert_eq!(verdict_at("\\`", 1), Verdict::Escaped);
        assert_eq!(verdict_at("\\\\`", 2), Verdict::UnescapedAfterDoubleBackslash);
        assert_eq!(verdict_at("\\\\\\`", 3), Verdict::UnescapedAfterDoubleBackslash);
        assert_eq!(verdict_at("a\\`", 2), Verdict::Escaped);
    }

    #[test]
    fn char_index_skips_multibyte_characters() {
        let indices: Vec<usize> = classify_each("é`ü`").map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 3]);
    }
}
