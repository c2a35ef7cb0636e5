//! Persisted session capability.
//!
//! The console keeps the bearer token and the signed-in user's profile in the
//! browser's cookies. Everything that reads or writes them goes through the
//! [`SessionStore`] trait so that guards and the shell can be exercised with an
//! in-memory store.

pub mod cookie;
pub mod error;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

pub use cookie::{CookieOptions, CookieStore};
pub use error::SessionError;
pub use memory::MemoryStore;

/// Cookie holding the bearer token attached to API requests.
pub const TOKEN_KEY: &str = "u_token";
/// Cookie holding the JSON encoded profile of the signed-in user.
pub const USER_INFO_KEY: &str = "u_info";

pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set(&self, key: &str, value: &str, options: &CookieOptions) -> Result<(), SessionError>;

    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// JSON helpers available on every store.
pub trait SessionStoreExt: SessionStore {
    /// Reads and parses a JSON value. Missing or empty values yield `Ok(None)`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        match self.get(key)? {
            Some(value) if !value.is_empty() => serde_json::from_str(&value)
                .map(Some)
                .map_err(|e| SessionError::Deserialize(key.to_string(), e.to_string())),
            _ => Ok(None),
        }
    }

    fn set_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        options: &CookieOptions,
    ) -> Result<(), SessionError> {
        let json = serde_json::to_string(value)
            .map_err(|e| SessionError::Serialize(key.to_string(), e.to_string()))?;

        self.set(key, &json, options)
    }
}

impl<S: SessionStore + ?Sized> SessionStoreExt for S {}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Profile {
        id: i64,
        username: String,
    }

    /// Tests storing and reading back a JSON value.
    ///
    /// Expected: Ok(Some(profile))
    #[test]
    fn stores_json_values() -> Result<(), SessionError> {
        let store = MemoryStore::new();
        let profile = Profile {
            id: 7,
            username: "admin".to_string(),
        };

        store.set_json(USER_INFO_KEY, &profile, &CookieOptions::default())?;

        assert_eq!(store.get_json::<Profile>(USER_INFO_KEY)?, Some(profile));

        Ok(())
    }

    /// Tests reading malformed JSON.
    ///
    /// Expected: Err(SessionError::Deserialize)
    #[test]
    fn rejects_malformed_json() -> Result<(), SessionError> {
        let store = MemoryStore::new();
        store.set(USER_INFO_KEY, "{not json", &CookieOptions::default())?;

        let result = store.get_json::<Profile>(USER_INFO_KEY);

        assert!(matches!(result, Err(SessionError::Deserialize(key, _)) if key == USER_INFO_KEY));

        Ok(())
    }

    /// Tests that missing and empty values read as absent.
    ///
    /// Expected: Ok(None) for both
    #[test]
    fn missing_json_is_none() -> Result<(), SessionError> {
        let store = MemoryStore::new();
        assert_eq!(store.get_json::<Profile>(USER_INFO_KEY)?, None);

        store.set(USER_INFO_KEY, "", &CookieOptions::default())?;
        assert_eq!(store.get_json::<Profile>(USER_INFO_KEY)?, None);

        Ok(())
    }

    /// Tests the JSON helpers through a trait object.
    ///
    /// Expected: Ok(Some(profile))
    #[test]
    fn json_helpers_work_on_trait_objects() -> Result<(), SessionError> {
        let store: Box<dyn SessionStore> = Box::new(MemoryStore::new());

        store.set_json(
            USER_INFO_KEY,
            &Profile {
                id: 1,
                username: "root".to_string(),
            },
            &CookieOptions::default(),
        )?;

        let profile = store.get_json::<Profile>(USER_INFO_KEY)?;
        assert_eq!(profile.map(|p| p.username), Some("root".to_string()));

        Ok(())
    }
}
