use serde::{Deserialize, Serialize};

/// Digit-run length band shared by the strict and collapse policies.
pub const MIN_KEY_LEN: usize = 12;
pub const MAX_KEY_LEN: usize = 16;

fn default_target() -> usize {
    17
}

fn default_near() -> usize {
    2
}

/// How a recharge key is extracted from recognized text. A deployment picks
/// exactly one; the policies are never merged at runtime.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum KeyPolicy {
    /// First word-bounded 12-16 digit run, or none.
    Strict,
    /// Strip non-digits, then qualify the collapsed run against 12-16.
    Collapse,
    /// Confusion-corrected exact-length match with near-length tolerance.
    Fuzzy {
        #[serde(default = "default_target")]
        target: usize,
        /// Runs within `target ± near` are padded or truncated to `target`.
        #[serde(default = "default_near")]
        near: usize,
    },
}

impl KeyPolicy {
    pub fn fuzzy() -> Self {
        Self::Fuzzy {
            target: default_target(),
            near: default_near(),
        }
    }
}

impl Default for KeyPolicy {
    fn default() -> Self {
        KeyPolicy::Collapse
    }
}
