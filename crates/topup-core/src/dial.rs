use std::fmt;

use topup_config::dial::DialConfig;

use crate::types::{MobileNumber, RechargeKey};

/// USSD dial string `*<prefix>*<key>*<number>#`.
///
/// Only constructible from an extracted key and a validated number; callers
/// gate on presence before building (see `ScanSession::build_dial`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialCode(String);

impl DialCode {
    pub fn build(config: &DialConfig, key: &RechargeKey, number: &MobileNumber) -> Self {
        Self(format!(
            "*{}*{}*{}#",
            config.sanitized_prefix(),
            key.as_str(),
            number.as_str()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
