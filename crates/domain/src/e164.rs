//! ENUM query names (RFC 6116 §2.4).
//!
//! `+1-555-123-4567` with suffix `1.itrs.us` becomes
//! `7.6.5.4.3.2.1.5.5.5.1.1.itrs.us`: every digit is a label, least
//! significant digit first, followed by the suffix.

use crate::errors::DomainError;
use std::fmt;

pub const DEFAULT_DOMAIN_SUFFIX: &str = "1.itrs.us";

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct E164Name {
    digits: String,
    name: String,
}

impl E164Name {
    pub fn from_phone_number(number: &str, suffix: &str) -> Result<Self, DomainError> {
        let digits = extract_digits(number)?;
        let suffix = normalize_suffix(suffix)?;

        let mut name = String::with_capacity(digits.len() * 2 + suffix.len());
        for digit in digits.chars().rev() {
            name.push(digit);
            name.push('.');
        }
        name.push_str(suffix);

        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidPhoneNumber(format!(
                "'{}' produces a {}-character name, limit is {}",
                number,
                name.len(),
                MAX_NAME_LEN
            )));
        }

        Ok(Self { digits, name })
    }

    /// The number in canonical `+<digits>` form.
    pub fn canonical(&self) -> String {
        format!("+{}", self.digits)
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The fully qualified query name, without a trailing dot.
    pub fn as_str(&self) -> &str {
        &self.name
    }

}

impl fmt::Display for E164Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Keeps the ASCII digits of `number`; everything else is formatting.
fn extract_digits(number: &str) -> Result<String, DomainError> {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Err(DomainError::InvalidPhoneNumber(format!(
            "'{}' contains no digits",
            number
        )));
    }

    Ok(digits)
}

/// Checks a domain suffix and returns it without its trailing dot.
pub fn normalize_suffix(suffix: &str) -> Result<&str, DomainError> {
    let trimmed = suffix.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain suffix is empty".to_string(),
        ));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "domain suffix '{}' has an empty label",
                suffix
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' in '{}' is longer than {} characters",
                label, suffix, MAX_LABEL_LEN
            )));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' in '{}' has characters outside [A-Za-z0-9_-]",
                label, suffix
            )));
        }
    }

    Ok(name)
}
