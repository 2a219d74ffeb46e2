use serde::{Deserialize, Serialize};

fn default_prefix() -> String {
    "121".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DialConfig {
    /// USSD service prefix. May arrive user-supplied; `*` and `#` are
    /// stripped before the dial string is assembled.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Consume the captured key once a dial string is handed over
    pub clear_key_after_dial: bool,
}

impl DialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix with dial-string control characters removed.
    pub fn sanitized_prefix(&self) -> String {
        self.prefix
            .chars()
            .filter(|c| *c != '*' && *c != '#')
            .collect()
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            clear_key_after_dial: false,
        }
    }
}
