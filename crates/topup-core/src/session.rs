use topup_config::dial::DialConfig;
use topup_config::phone::PhoneRule;

use crate::dial::DialCode;
use crate::error::SessionError;
use crate::types::RechargeKey;
use crate::validate::validate_number;

/// Per-session scan state: the single current-key slot plus the mobile
/// number input. Every dial attempt goes through `build_dial`, so a partial
/// or unvalidated pair can never produce a dial string.
#[derive(Debug, Default)]
pub struct ScanSession {
    key: Option<RechargeKey>,
    number_input: String,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly extracted key, discarding any stale one.
    pub fn set_key(&mut self, key: RechargeKey) {
        self.key = Some(key);
    }

    pub fn key(&self) -> Option<&RechargeKey> {
        self.key.as_ref()
    }

    pub fn clear_key(&mut self) {
        self.key = None;
    }

    pub fn set_number_input(&mut self, input: impl Into<String>) {
        self.number_input = input.into();
    }

    pub fn number_input(&self) -> &str {
        &self.number_input
    }

    pub fn clear_number(&mut self) {
        self.number_input.clear();
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.number_input.clear();
    }

    /// True when both a key and a non-empty number input are present.
    pub fn dial_ready(&self) -> bool {
        self.key.is_some() && !self.number_input.trim().is_empty()
    }

    /// Builds the dial code, re-validating the number against the active
    /// rule. Refuses when either part is missing or invalid.
    pub fn build_dial(
        &self,
        dial: &DialConfig,
        rule: &PhoneRule,
    ) -> Result<DialCode, SessionError> {
        let key = self.key.as_ref().ok_or(SessionError::NoKey)?;

        let input = self.number_input.trim();
        if input.is_empty() {
            return Err(SessionError::NoNumber);
        }

        let number = validate_number(input, rule)?;
        Ok(DialCode::build(dial, key, &number))
    }
}
