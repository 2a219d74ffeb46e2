use serde::{Deserialize, Serialize};

fn default_prefixes() -> Vec<String> {
    vec!["077".to_string(), "078".to_string()]
}

fn default_length() -> usize {
    10
}

/// Which mobile numbers are dialable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum PhoneRule {
    /// Any non-empty digit string.
    DigitsOnly,
    /// Fixed total length beginning with one of the operator prefixes.
    Prefixed {
        #[serde(default = "default_prefixes")]
        prefixes: Vec<String>,
        #[serde(default = "default_length")]
        length: usize,
    },
}

impl PhoneRule {
    pub fn prefixed() -> Self {
        Self::Prefixed {
            prefixes: default_prefixes(),
            length: default_length(),
        }
    }
}

impl Default for PhoneRule {
    fn default() -> Self {
        Self::prefixed()
    }
}
