use std::collections::HashMap;

/// String-keyed storage for any value type. Unlike [`crate::TermStore`],
/// setting an existing key replaces its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Storage<T> {
    items: HashMap<String, T>,
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Storage {
            items: HashMap::new(),
        }
    }
}

impl<T> Storage<T> {
    pub fn new() -> Self {
        Storage::default()
    }

    pub fn set(&mut self, key: &str, value: T) {
        self.items.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.items.remove(key)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut strings = Storage::new();
        strings.set("hello", "how are you".to_string());
        strings.set("hello", "hi".to_string());
        assert_eq!(strings.get("hello").map(String::as_str), Some("hi"));
        assert_eq!(strings.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut flags: Storage<bool> = Storage::new();
        assert_eq!(flags.get("key"), None);

        flags.set("hello", true);
        flags.set("bye", false);
        assert_eq!(flags.remove("hello"), Some(true));
        assert_eq!(flags.remove("hello"), None);

        flags.clear();
        assert!(flags.is_empty());
    }
}
