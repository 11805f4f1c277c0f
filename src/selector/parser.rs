//! Selector parser: token stream → ordered descendant steps.
//!
//! Uses span-based adjacency detection: `#a.b` (no gap) is one step, while
//! `#a .b` (whitespace gap) is two. A `>` also ends the current step but is
//! given descendant semantics, since only descendant relationships are
//! supported.
//!
//! The parser is lenient and infallible. Bare names (`div`), dangling `#`/`.`
//! prefixes, and characters the tokenizer drops are all ignored; a step left
//! with no recognized fragment is discarded rather than kept as a
//! match-anything step. An empty or fully unrecognized selector parses to an
//! empty step list, which matches nothing.
//!
//! Only whitespace and `>` end a step. Dropped characters leave a span gap
//! too, so gaps are checked against the source text: `#a@@@.b` stays one
//! compound step, while `#a .b` is two.

use tracing::trace;

use crate::selector::model::{Selector, Step};
use crate::selector::tokenizer::{tokenize, Lexeme, Token};

/// Parse a selector string into a [`Selector`].
pub fn parse_selector(input: &str) -> Selector {
    let lexemes = tokenize(input);
    let mut steps = Vec::new();
    let mut step = Step::new();
    let mut prev_end: Option<usize> = None;
    let mut i = 0;

    while i < lexemes.len() {
        let lex = &lexemes[i];

        // A whitespace gap before this token ends the current step. A gap
        // holding only dropped garbage does not.
        let gap_has_whitespace = prev_end.is_some_and(|end| {
            lex.start > end && input[end..lex.start].contains(char::is_whitespace)
        });
        if gap_has_whitespace && !step.is_empty() {
            steps.push(std::mem::take(&mut step));
        }

        match lex.token {
            Token::GreaterThan => {
                if !step.is_empty() {
                    steps.push(std::mem::take(&mut step));
                }
                prev_end = Some(lex.end);
                i += 1;
            }
            Token::Hash | Token::Dot => {
                match fragment_name(&lexemes, i) {
                    Some(name) => {
                        if lex.token == Token::Hash {
                            step.push_id(&name.text);
                        } else {
                            step.push_class(&name.text);
                        }
                        prev_end = Some(name.end);
                        i += 2;
                    }
                    None => {
                        // Dangling prefix, ignored.
                        prev_end = Some(lex.end);
                        i += 1;
                    }
                }
            }
            Token::Name => {
                // Bare name: tag selectors are not supported, ignored.
                prev_end = Some(lex.end);
                i += 1;
            }
        }
    }

    if !step.is_empty() {
        steps.push(step);
    }

    let selector = Selector { steps };
    trace!(input, steps = selector.steps.len(), parsed = %selector, "parsed selector");
    selector
}

/// The name immediately following the prefix at `i`, if directly adjacent.
fn fragment_name(lexemes: &[Lexeme], i: usize) -> Option<&Lexeme> {
    let prefix = &lexemes[i];
    lexemes
        .get(i + 1)
        .filter(|next| next.token == Token::Name && next.start == prefix.end)
}
