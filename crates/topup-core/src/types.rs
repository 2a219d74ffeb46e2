use std::fmt;

/// Digit string lifted from recognized text. Key extraction is the only
/// producer, so anything holding one has already passed the length policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargeKey(String);

impl RechargeKey {
    pub(crate) fn new(digits: String) -> Self {
        debug_assert!(digits.chars().all(|c| c.is_ascii_digit()));
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last four digits for status lines; the full key only appears in the
    /// dial string itself.
    pub fn preview(&self) -> String {
        let tail = &self.0[self.0.len().saturating_sub(4)..];
        format!("****{tail}")
    }
}

impl fmt::Display for RechargeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dialable mobile number. Validation is the only producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub(crate) fn new(digits: String) -> Self {
        debug_assert!(digits.chars().all(|c| c.is_ascii_digit()));
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
