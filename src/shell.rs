use itertools::Itertools;

use crate::errors::SResult;
use crate::parser::{parse_text, Command};
use crate::store::TermStore;

pub const HELP: &str = "\
commands:
  add <term> <definition...>   define a term (the first definition sticks)
  lookup <term>                show a term's definition (alias: def)
  list                         show every term
  count                        show how many terms are defined
  help                         show this message
  exit                         leave (alias: quit)
quote terms or definitions containing spaces: add 'ice cream' cold";

/// What the caller should do after a line was evaluated
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Print(String),
    Silent,
    Exit,
}

/// A term store driven by lines of text
#[derive(Debug, Default)]
pub struct Shell {
    store: TermStore,
}

impl Shell {
    pub fn new() -> Self {
        Shell::default()
    }

    pub fn with_store(store: TermStore) -> Self {
        Shell { store }
    }

    pub fn store(&self) -> &TermStore {
        &self.store
    }

    /// Parse and evaluate one line of input
    pub fn eval_line(&mut self, line: &str) -> SResult<Reply> {
        match parse_text(line)? {
            Some(command) => Ok(self.eval(command)),
            None => Ok(Reply::Silent),
        }
    }

    /// Commands can't fail once parsed
    pub fn eval(&mut self, command: Command) -> Reply {
        match command {
            Command::Add(entry) => {
                let term = entry.term().to_string();
                if self.store.add(entry) {
                    Reply::Print(format!("added '{term}'"))
                } else {
                    let existing = self
                        .store
                        .lookup(&term)
                        .unwrap_or_default();
                    Reply::Print(format!(
                        "'{term}' is already defined as '{existing}'"
                    ))
                }
            },
            Command::Lookup(term) => {
                match self.store.lookup(&term) {
                    Some(definition) => {
                        Reply::Print(format!("{term}: {definition}"))
                    },
                    None => Reply::Print(format!("'{term}' is not defined")),
                }
            },
            Command::List => {
                if self.store.is_empty() {
                    return Reply::Print("(no entries)".to_string());
                }
                let lines = self
                    .store
                    .terms()
                    .into_iter()
                    .map(|term| {
                        format!(
                            "{term}: {}",
                            self.store
                                .lookup(term)
                                .unwrap_or_default()
                        )
                    })
                    .join("\n");
                Reply::Print(lines)
            },
            Command::Count => {
                let n = self.store.len();
                let noun = if n == 1 { "entry" } else { "entries" };
                Reply::Print(format!("{n} {noun}"))
            },
            Command::Help => Reply::Print(HELP.to_string()),
            Command::Exit => Reply::Exit,
        }
    }
}
