use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// A term and its definition, as submitted to a [`TermStore`].
///
/// The term is the identity of the entry and can't be changed once the
/// entry exists; the definition can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    term: String,
    definition: String,
}

impl Entry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Entry {
            term: term.into(),
            definition: definition.into(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn set_definition(&mut self, definition: impl Into<String>) {
        self.definition = definition.into();
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.term, self.definition)
    }
}

/// Maps terms to definitions. The first definition added for a term sticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermStore {
    words: HashMap<String, String>,
}

impl TermStore {
    pub fn new() -> Self {
        TermStore::default()
    }

    /// Store the entry unless its term is already present.
    /// Re-adding a known term leaves the existing definition alone; the
    /// return value only says whether anything was inserted.
    pub fn add(&mut self, entry: Entry) -> bool {
        if self.words.contains_key(&entry.term) {
            log::debug!("'{}' already defined, keeping it", entry.term);
            return false;
        }

        log::debug!("defining '{}'", entry.term);
        self.words
            .insert(entry.term, entry.definition);
        true
    }

    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.words
            .get(term)
            .map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// (term, definition) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .iter()
            .map(|(t, d)| (t.as_str(), d.as_str()))
    }

    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self
            .words
            .keys()
            .map(String::as_str)
            .collect();
        terms.sort_unstable();
        terms
    }
}
