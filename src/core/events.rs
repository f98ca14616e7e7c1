//! Story progression flags and the condition strings that gate content.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named boolean flags recording which events the player has seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventFlags(BTreeMap<String, bool>);

impl EventFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, flag: &str) {
        self.0.insert(flag.to_string(), true);
    }

    pub fn clear(&mut self, flag: &str) {
        self.0.insert(flag.to_string(), false);
    }

    pub fn is_set(&self, flag: &str) -> bool {
        self.0.get(flag).copied().unwrap_or(false)
    }

    pub fn all_set<'a>(&self, flags: impl IntoIterator<Item = &'a str>) -> bool {
        flags.into_iter().all(|flag| self.is_set(flag))
    }

    pub fn any_set<'a>(&self, flags: impl IntoIterator<Item = &'a str>) -> bool {
        flags.into_iter().any(|flag| self.is_set(flag))
    }

    pub fn set_flags(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, set)| **set)
            .map(|(flag, _)| flag.as_str())
            .collect()
    }

    /// Evaluates a content condition string:
    /// - `""` — always true
    /// - `"flag"` — flag must be set
    /// - `"!flag"` — flag must not be set
    /// - `"a & b"` — all listed flags set
    /// - `"a | b"` — at least one listed flag set
    pub fn check_condition(&self, condition: &str) -> bool {
        let condition = condition.trim();
        if condition.is_empty() {
            return true;
        }

        if let Some(flag) = condition.strip_prefix('!') {
            return !self.is_set(flag.trim());
        }

        if condition.contains('&') {
            return self.all_set(condition.split('&').map(str::trim));
        }

        if condition.contains('|') {
            return self.any_set(condition.split('|').map(str::trim));
        }

        self.is_set(condition)
    }
}
