//! Comparator configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Dictionary keys whose values are font identifiers.
pub const DEFAULT_FONT_NAME_KEYS: [&str; 3] = ["BaseFont", "FontName", "Name"];

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling structural comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqualOptions {
    /// Keys compared with subset tags stripped from both name values.
    pub font_name_keys: BTreeSet<String>,
    /// Maximum container nesting followed before failing.
    pub max_depth: usize,
}

impl Default for EqualOptions {
    fn default() -> Self {
        Self {
            font_name_keys: DEFAULT_FONT_NAME_KEYS
                .iter()
                .map(|key| (*key).to_owned())
                .collect(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EqualOptions {
    pub fn with_font_name_key(mut self, key: impl Into<String>) -> Self {
        self.font_name_keys.insert(key.into());
        self
    }

    /// Compares every key literally.
    pub fn without_font_name_normalization(mut self) -> Self {
        self.font_name_keys.clear();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_font_name_key(&self, key: &str) -> bool {
        self.font_name_keys.contains(key)
    }
}
