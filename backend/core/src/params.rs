//! In-memory session parameter store.
//!
//! Holds the client-wide query parameters a web session sends with every
//! request, plus values written by routes (such as `room_id`).

use std::collections::BTreeMap;

use dashmap::DashMap;

use crate::traits::SessionParameterStore;

/// Concurrent key/value map of session parameters.
///
/// Writes are not ordered across tasks: two routes setting the same key
/// concurrently race and the last write wins.
#[derive(Debug, Default)]
pub struct SessionParams {
    values: DashMap<String, String>,
}

impl SessionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store seeded with `defaults`.
    pub fn with_defaults<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = DashMap::new();
        for (k, v) in defaults {
            values.insert(k.into(), v.into());
        }
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted copy of every parameter, suitable for building a query string.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

impl SessionParameterStore for SessionParams {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|v| v.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}
