use std::fmt::{Display, Formatter};

use Token::*;

use crate::errors::{SResult, ShellError};

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub(super) mark: char,
    pub(super) content: String,
}

impl Display for Quote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.mark, self.content, self.mark)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word(String),
    StringLit(Quote),
}

/// Shows the token roughly as it was typed
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Word(s) => s.fmt(f),
            StringLit(q) => q.fmt(f),
        }
    }
}

/// Split a line into words and quoted strings.
/// Backslash escapes inside a quote stay as written, apart from an escaped
/// closing mark; they get resolved when the quote is turned into a string.
pub fn tokenize(s: &str) -> SResult<Vec<Token>> {
    let mut tokens: Vec<Token> = vec![];
    let mut word: String = String::new();
    let mut open: Option<Quote> = None;
    let mut after_backslash: bool = false;

    for char in s.chars() {
        let Some(mut quote) = open.take() else {
            // outside quotes: whitespace ends a word, a quote mark opens one
            if char == '\'' || char == '"' {
                push_word(&mut tokens, &mut word);
                open = Some(Quote {
                    mark: char,
                    content: String::new(),
                });
            } else if char.is_whitespace() {
                push_word(&mut tokens, &mut word);
            } else {
                word.push(char);
            }
            continue;
        };

        // inside quotes
        if after_backslash {
            if char != quote.mark {
                quote.content.push('\\');
            }
            quote.content.push(char);
            after_backslash = false;
        } else if char == '\\' {
            after_backslash = true;
        } else if char == quote.mark {
            tokens.push(StringLit(quote));
            continue;
        } else {
            quote.content.push(char);
        }
        open = Some(quote);
    }

    if let Some(quote) = open {
        return Err(ShellError::Syntax {
            expected: format!("a closing {} quote", quote.mark),
            actual: format!("{}{}", quote.mark, quote.content),
        });
    }
    push_word(&mut tokens, &mut word);

    Ok(tokens)
}

#[inline]
fn push_word(tokens: &mut Vec<Token>, word: &mut String) {
    if !word.is_empty() {
        tokens.push(Word(std::mem::take(word)));
    }
}
