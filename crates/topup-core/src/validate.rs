use topup_config::phone::PhoneRule;

use crate::error::ValidationError;
use crate::types::MobileNumber;

/// Validates a dialable mobile number against the deployment rule.
/// Leading and trailing whitespace is tolerated; nothing else is repaired.
pub fn validate_number(input: &str, rule: &PhoneRule) -> Result<MobileNumber, ValidationError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonDigit);
    }

    match rule {
        PhoneRule::DigitsOnly => {}
        PhoneRule::Prefixed { prefixes, length } => {
            if input.len() != *length {
                return Err(ValidationError::WrongLength {
                    expected: *length,
                    actual: input.len(),
                });
            }
            if !prefixes.iter().any(|p| input.starts_with(p.as_str())) {
                return Err(ValidationError::WrongPrefix {
                    allowed: prefixes.join(", "),
                });
            }
        }
    }

    Ok(MobileNumber::new(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_accepts_any_digit_string() {
        let number = validate_number("42", &PhoneRule::DigitsOnly).unwrap();
        assert_eq!(number.as_str(), "42");
    }

    #[test]
    fn digits_only_rejects_letters_and_empty() {
        assert_eq!(
            validate_number("077abc4567", &PhoneRule::DigitsOnly),
            Err(ValidationError::NonDigit)
        );
        assert_eq!(
            validate_number("   ", &PhoneRule::DigitsOnly),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn prefixed_accepts_both_operator_prefixes() {
        let rule = PhoneRule::prefixed();
        assert_eq!(
            validate_number("0771234567", &rule).unwrap().as_str(),
            "0771234567"
        );
        assert_eq!(
            validate_number("0781234567", &rule).unwrap().as_str(),
            "0781234567"
        );
    }

    #[test]
    fn prefixed_rejects_other_prefix() {
        assert_eq!(
            validate_number("0791234567", &PhoneRule::prefixed()),
            Err(ValidationError::WrongPrefix {
                allowed: "077, 078".to_string()
            })
        );
    }

    #[test]
    fn prefixed_rejects_correct_prefix_wrong_length() {
        let rule = PhoneRule::prefixed();
        assert_eq!(
            validate_number("077123456", &rule),
            Err(ValidationError::WrongLength {
                expected: 10,
                actual: 9
            })
        );
        assert_eq!(
            validate_number("07712345678", &rule),
            Err(ValidationError::WrongLength {
                expected: 10,
                actual: 11
            })
        );
    }

    #[test]
    fn input_is_trimmed_before_validation() {
        let number = validate_number(" 0771234567 ", &PhoneRule::prefixed()).unwrap();
        assert_eq!(number.as_str(), "0771234567");
    }
}
