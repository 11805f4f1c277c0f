//! logos-based selector tokenizer.
//!
//! The recognized grammar is deliberately small: `#` and `.` prefixes, `>`
//! separators, and letter-only names. Ids and classes must start with (and
//! consist of) letters; numeric-leading or symbol-only fragments never lex as
//! a [`Token::Name`] and so are never recognized as fragments. Anything that
//! fails to lex is dropped (lenient policy), matching the crate-wide rule
//! that malformed selector input is skipped rather than rejected.
//!
//! Byte spans are preserved because the parser distinguishes `#a.b` (one
//! step) from `#a .b` (two steps) by token adjacency.

use logos::Logos;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// `#` — id fragment prefix.
    #[token("#")]
    Hash,

    /// `.` — class fragment prefix.
    #[token(".")]
    Dot,

    /// `>` — step separator (descendant semantics, see the parser).
    #[token(">")]
    GreaterThan,

    /// Letter-only name following a `#` or `.` prefix.
    #[regex(r"[a-zA-Z]+")]
    Name,
}

/// A token with its source text and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    /// Byte offset where this token starts in the source.
    pub start: usize,
    /// Byte offset where this token ends in the source.
    pub end: usize,
}

/// Tokenize a selector string, dropping anything that fails to lex.
pub fn tokenize(input: &str) -> Vec<Lexeme> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| {
            result.ok().map(|token| Lexeme {
                token,
                text: input[span.clone()].to_string(),
                start: span.start,
                end: span.end,
            })
        })
        .collect()
}
