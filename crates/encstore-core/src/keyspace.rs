//! Key namespacing and pattern matching.
//!
//! With a prefix `p`, caller key `k` lives in the backend as `p:k`. Without a
//! prefix the key is used as-is.
//!
//! Non-exact pattern matching is plain substring containment on the full
//! backend key, prefix segment included. A pattern that happens to occur in
//! the prefix text matches every key under that prefix; callers are expected
//! to choose patterns specific enough for their key layout.

/// Separator between prefix and caller key.
pub const PREFIX_SEPARATOR: char = ':';

/// Namespacing rules for one engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Backend key for a caller key.
    pub fn namespaced(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}{}{}", self.prefix, PREFIX_SEPARATOR, key)
        }
    }

    /// Caller key for a backend key.
    ///
    /// Removes the first occurrence of `prefix:` wherever it appears, so a
    /// backend key that was not written through this key space may come back
    /// unchanged or partially rewritten.
    pub fn strip(&self, stored_key: &str) -> String {
        if self.prefix.is_empty() {
            return stored_key.to_string();
        }

        let marker = format!("{}{}", self.prefix, PREFIX_SEPARATOR);
        stored_key.replacen(&marker, "", 1)
    }

    /// Whether `stored_key` is selected by `pattern`.
    ///
    /// - `exact`: equal to the namespaced form of `pattern`
    /// - otherwise: contains `pattern`, and also contains the prefix text
    ///   when a prefix is configured
    pub fn matches(&self, stored_key: &str, pattern: &str, exact: bool) -> bool {
        if exact {
            return stored_key == self.namespaced(pattern);
        }

        if self.prefix.is_empty() {
            stored_key.contains(pattern)
        } else {
            stored_key.contains(pattern) && stored_key.contains(self.prefix.as_str())
        }
    }

    /// The subset of `keys` selected by `pattern`, order preserved.
    pub fn filter<'a, I>(&self, keys: I, pattern: &str, exact: bool) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        keys.into_iter()
            .filter(|key| self.matches(key, pattern, exact))
            .cloned()
            .collect()
    }
}
