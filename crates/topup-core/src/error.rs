use thiserror::Error;

/// Why a mobile number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mobile number is empty")]
    Empty,
    #[error("mobile number may contain digits only")]
    NonDigit,
    #[error("mobile number must be {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("mobile number must start with one of: {allowed}")]
    WrongPrefix { allowed: String },
}

/// Why a dial attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no recharge key captured yet")]
    NoKey,
    #[error("no mobile number entered")]
    NoNumber,
    #[error(transparent)]
    Number(#[from] ValidationError),
}
