//! Typed JSON state on top of a string key-value backend.
//!
//! Reads fall back to a caller-supplied default when a key is absent or its
//! value no longer parses. Writes never fail from the caller's point of
//! view: backend and serialization errors are logged and the in-memory
//! value stays authoritative.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::database::Database;
use crate::daily::DailyRecord;

/// Keys of the persisted application state.
pub mod keys {
    pub const TRACK: &str = "aimers_track";
    pub const SALAT: &str = "aimers_salat";
    pub const STATS: &str = "aimers_stats";
    pub const TASKS: &str = "aimers_tasks";
    pub const EXAMS: &str = "aimers_exams";
    pub const TIMER: &str = "aimers_timer";
}

/// Raw string storage.
pub trait KeyValue {
    type Error: std::fmt::Display;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

impl KeyValue for Database {
    type Error = rusqlite::Error;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.kv_get(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.kv_set(key, value)
    }
}

pub struct StateStore<B: KeyValue = Database> {
    backend: B,
}

impl<B: KeyValue> StateStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Stored value for `key`, or `default` if absent or unreadable.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.backend.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = %e, "stored value is corrupt, using default");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored value, using default");
                default
            }
        }
    }

    /// Serialize and store `value`. Returns whether it was persisted.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to serialize value");
                return false;
            }
        };
        match self.backend.write(key, &raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to store value");
                false
            }
        }
    }

    /// Load a daily record, replacing (and persisting) it with a fresh one
    /// when it is absent or dated other than `today`.
    pub fn get_daily<T>(&self, key: &str, today: NaiveDate) -> T
    where
        T: DailyRecord + Serialize + DeserializeOwned,
    {
        let stored: Option<T> = self.get(key, None);
        match stored {
            Some(record) if record.is_current(today) => record,
            Some(record) => {
                let fresh = record.roll_over(today);
                self.set(key, &fresh);
                fresh
            }
            None => {
                let fresh = T::fresh(today);
                self.set(key, &fresh);
                fresh
            }
        }
    }
}
