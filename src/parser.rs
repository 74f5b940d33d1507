mod token_handlers;
mod tokenizer;

use itertools::Itertools;

use crate::errors::{Arity, SResult, ShellError};
use crate::store::Entry;
use token_handlers::{is_command_name, parse_argument};
use tokenizer::{tokenize, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Entry),
    Lookup(String),
    List,
    Count,
    Help,
    Exit,
}

/// Parse one line of shell input. Blank lines parse to `None`.
pub fn parse_text(s: &str) -> SResult<Option<Command>> {
    let tokens = tokenize(s)?;
    let Some((head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let Token::Word(name) = head else {
        return Err(ShellError::Syntax {
            expected: "a command name".to_string(),
            actual: head.to_string(),
        });
    };
    if !is_command_name(name) {
        return Err(ShellError::Syntax {
            expected: "a command name".to_string(),
            actual: name.clone(),
        });
    }

    let args = rest
        .iter()
        .map(parse_argument)
        .collect::<SResult<Vec<String>>>()?;

    parse_command(&name.to_lowercase(), args).map(Some)
}

fn parse_command(name: &str, mut args: Vec<String>) -> SResult<Command> {
    match name {
        "add" => {
            check_arity(name, Arity::AtLeast(2), &args)?;
            let term = args.remove(0);
            Ok(Command::Add(Entry::new(term, args.iter().join(" "))))
        },
        "lookup" | "def" => {
            check_arity(name, Arity::Fixed(1), &args)?;
            Ok(Command::Lookup(args.remove(0)))
        },
        "list" | "count" | "help" => {
            check_arity(name, Arity::Fixed(0), &args)?;
            Ok(match name {
                "list" => Command::List,
                "count" => Command::Count,
                _ => Command::Help,
            })
        },
        // leaving never fails, whatever trails it
        "exit" | "quit" => Ok(Command::Exit),
        _ => Err(ShellError::UnknownCommand(name.to_string())),
    }
}

fn check_arity(name: &str, arity: Arity, args: &[String]) -> SResult<()> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(ShellError::Arity {
            command: name.to_string(),
            arity,
            num_args_provided: args.len(),
        })
    }
}
