use foldhash::{HashMap, HashMapExt};
use itertools::Itertools;

use crate::{Error, Result};

/// Lowercase keys mapped to the raw values scraped from command output.
#[derive(Clone, Debug, Default)]
pub(crate) struct KeyValues {
    map: HashMap<String, String>,
}

impl KeyValues {
    pub(crate) fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Stores a value under the lowercase form of `key`. A later value for the same key wins.
    pub(crate) fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.map.insert(key.to_lowercase(), value.into());
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// All keys in ascending order.
    pub(crate) fn keys(&self) -> Vec<String> {
        self.map.keys().sorted_unstable().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::MissingKey {
            key: key.to_string(),
        })
    }

    pub(crate) fn require_u32(&self, key: &str) -> Result<u32> {
        let value = self.require(key)?;

        value
            .trim()
            .parse()
            .ok()
            .ok_or_else(|| invalid_value(key, value))
    }

    pub(crate) fn require_u64(&self, key: &str) -> Result<u64> {
        let value = self.require(key)?;

        value
            .trim()
            .parse()
            .ok()
            .ok_or_else(|| invalid_value(key, value))
    }

    /// Parses a decimal value such as `1046.234` and returns its integer part.
    pub(crate) fn require_whole_number(&self, key: &str) -> Result<u32> {
        let value = self.require(key)?;

        let parsed = value
            .trim()
            .parse::<f64>()
            .ok()
            .ok_or_else(|| invalid_value(key, value))?;

        if !parsed.is_finite() || parsed < 0.0 || parsed >= f64::from(u32::MAX) {
            return Err(invalid_value(key, value));
        }

        #[expect(
            clippy::cast_sign_loss,
            clippy::cast_possible_truncation,
            reason = "range checked above, truncating the fraction is the intent"
        )]
        let whole = parsed.trunc() as u32;

        Ok(whole)
    }
}

pub(crate) fn invalid_value(key: &str, value: &str) -> Error {
    Error::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
