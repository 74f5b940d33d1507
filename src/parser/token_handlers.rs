use lazy_static::lazy_static;
use litrs::StringLit;
use regex::Regex;

use super::tokenizer::{Quote, Token};
use crate::errors::{SResult, ShellError};

/// Turn an argument token into the text it stands for
pub fn parse_argument(t: &Token) -> SResult<String> {
    match t {
        Token::Word(s) => Ok(s.clone()),
        Token::StringLit(q) => parse_quote(q),
    }
}

/// Is this word shaped like a command name?
pub fn is_command_name(s: &str) -> bool {
    COMMAND_RE.is_match(s)
}

/// Unescape a quoted string the way rust unescapes a string literal.
/// Single quotes are treated the same as double quotes, so a bare `"`
/// inside a single-quoted string has to be escaped before handing it over.
fn parse_quote(quote: &Quote) -> SResult<String> {
    let mut lit = String::with_capacity(quote.content.len() + 2);
    let mut is_escaped = false;

    lit.push('"');
    for c in quote.content.chars() {
        if is_escaped {
            lit.push(c);
            is_escaped = false;
        } else if c == '\\' {
            lit.push(c);
            is_escaped = true;
        } else if c == '"' {
            lit.push_str("\\\"");
        } else {
            lit.push(c);
        }
    }
    lit.push('"');

    StringLit::parse(lit)
        .map(|sl| sl.value().to_string())
        .map_err(|err| {
            log::debug!("litrs rejected {quote}: {err}");
            ShellError::Syntax {
                expected: "a valid escape".to_string(),
                actual: quote.to_string(),
            }
        })
}

/***********\
|* Helpers *|
\***********/
lazy_static! {
    static ref COMMAND_RE: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z_\-]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(mark: char, content: &str) -> Token {
        Token::StringLit(Quote {
            mark,
            content: content.to_string(),
        })
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            parse_argument(&quote('\'', "hi'hi\\n")).unwrap(),
            "hi'hi\n"
        );
    }

    #[test]
    fn test_double_quote_in_single_quotes() {
        assert_eq!(
            parse_argument(&quote('\'', "say \"hi\"")).unwrap(),
            "say \"hi\""
        );
    }

    #[test]
    fn test_bad_escape() {
        let err = parse_argument(&quote('"', "\\q")).unwrap_err();
        assert!(matches!(
            &err,
            ShellError::Syntax { expected, actual }
                if expected == "a valid escape" && actual == "\"\\q\""
        ));
    }

    #[test]
    fn test_command_names() {
        assert!(is_command_name("lookup"));
        assert!(is_command_name("LIST"));
        assert!(!is_command_name("3add"));
        assert!(!is_command_name("add!"));
    }
}
