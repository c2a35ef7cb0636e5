use std::{cell::RefCell, collections::HashMap};

use crate::client::session::{CookieOptions, SessionError, SessionStore};

/// Session store kept in memory, used outside the browser and in tests.
///
/// Expiry options are ignored.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Self {
            values: RefCell::new(values),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str, _options: &CookieOptions) -> Result<(), SessionError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
