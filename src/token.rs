// src/token.rs
use logos::Logos;

/// Only backticks are tokens; every other run of characters is skipped.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[^`]+")]
pub enum Token {
    #[token("`")]
    Backtick,
}

// Judged from at most two preceding characters.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verdict {
    Unescaped,
    Escaped,
    /// Two backslashes right before it: the backslash is itself escaped.
    UnescapedAfterDoubleBackslash,
}

impl Verdict {
    pub fn is_reported(self) -> bool {
        !matches!(self, Verdict::Escaped)
    }
}
