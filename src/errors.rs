use std::fmt::{Display, Formatter};

use thiserror::Error;

/// How many arguments a shell command takes
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Arity {
    Fixed(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, n: usize) -> bool {
        match self {
            Arity::Fixed(expected) => n == *expected,
            Arity::AtLeast(min) => n >= *min,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("syntax error: expected {expected}, got {actual}")]
    Syntax { expected: String, actual: String },

    #[error("Unknown command '{0}' (try `help`)")]
    UnknownCommand(String),

    #[error(
        "Command {command} takes {arity} arguments but got {num_args_provided}"
    )]
    Arity {
        command: String,
        arity: Arity,
        num_args_provided: usize,
    },
}

pub type SResult<T> = Result<T, ShellError>;
