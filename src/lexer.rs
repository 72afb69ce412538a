// src/lexer.rs
use crate::token::Token;
use logos::Logos;
use std::ops::Range;

/// Byte spans of every backtick in `source`, left to right.
pub fn lex_source(source: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    Token::lexer(source)
        .spanned()
        .filter_map(|(tok_res, span)| match tok_res {
            Ok(Token::Backtick) => Some(span),
            // The skip pattern covers everything that is not a backtick.
            Err(_) => {
                log::warn!("unexpected lexer error at {:?}", span);
                None
            }
        })
}
