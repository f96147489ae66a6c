//! Phone number identity.
//!
//! A `PhoneNumber` can only be built from text that matches the
//! `ddd-ddd-dddd` layout, so everything downstream can treat it as
//! already validated.

use crate::error::PhoneNumberError;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Number of characters in a formatted phone number.
pub const PHONE_NUMBER_LEN: usize = 12;

/// Positions of the two separators in `ddd-ddd-dddd`.
const DASH_POSITIONS: [usize; 2] = [3, 7];

/// A validated phone number in `ddd-ddd-dddd` form.
///
/// Equality and hashing are exact string identity. `Borrow<str>` lets
/// maps keyed by `PhoneNumber` be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates `raw` and wraps it.
    pub fn parse(raw: &str) -> Result<Self, PhoneNumberError> {
        validate(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Returns the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Checks the `ddd-ddd-dddd` layout.
fn validate(raw: &str) -> Result<(), PhoneNumberError> {
    let len = raw.chars().count();
    if len != PHONE_NUMBER_LEN {
        return Err(PhoneNumberError::WrongLength {
            number: raw.to_string(),
            len,
        });
    }

    for (position, ch) in raw.chars().enumerate() {
        if DASH_POSITIONS.contains(&position) {
            if ch != '-' {
                return Err(PhoneNumberError::ExpectedDash {
                    number: raw.to_string(),
                    position,
                });
            }
        } else if !ch.is_ascii_digit() {
            return Err(PhoneNumberError::ExpectedDigit {
                number: raw.to_string(),
                position,
            });
        }
    }

    Ok(())
}

impl FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PhoneNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PhoneNumber::try_from(raw).map_err(serde::de::Error::custom)
    }
}
