//! Call records: one pair of phone numbers per input line.

use crate::error::{RecordError, Result};
use crate::phone::PhoneNumber;
use serde::{Deserialize, Serialize};

/// One call between two distinct phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    pub caller: PhoneNumber,
    pub callee: PhoneNumber,
}

impl CallRecord {
    /// Creates a record, rejecting a number paired with itself.
    pub fn new(caller: PhoneNumber, callee: PhoneNumber) -> Result<Self> {
        if caller == callee {
            return Err(RecordError::SameNumber(caller.to_string()));
        }
        Ok(Self { caller, callee })
    }

    /// Parses a line holding two whitespace-separated phone numbers.
    ///
    /// A blank line is missing both numbers.
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();

        let Some(first) = tokens.next() else {
            return Err(RecordError::MissingNumber { found: 0 });
        };
        let Some(second) = tokens.next() else {
            return Err(RecordError::MissingNumber { found: 1 });
        };

        let extra: Vec<&str> = tokens.collect();
        if !extra.is_empty() {
            return Err(RecordError::ExtraTokens {
                extra: extra.join(" "),
            });
        }

        let caller = PhoneNumber::parse(first)?;
        let callee = PhoneNumber::parse(second)?;
        Self::new(caller, callee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhoneNumberError;

    #[test]
    fn test_parse_two_numbers() {
        let record = CallRecord::parse_line("555-111-2222 555-333-4444\n").unwrap();
        assert_eq!(record.caller.as_str(), "555-111-2222");
        assert_eq!(record.callee.as_str(), "555-333-4444");
    }

    #[test]
    fn test_any_whitespace_separates() {
        let record = CallRecord::parse_line("  555-111-2222\t\t555-333-4444  ").unwrap();
        assert_eq!(record.callee.as_str(), "555-333-4444");
    }

    #[test]
    fn test_blank_line_is_missing_both_numbers() {
        assert!(matches!(
            CallRecord::parse_line(""),
            Err(RecordError::MissingNumber { found: 0 })
        ));
        assert!(matches!(
            CallRecord::parse_line("   \t\n"),
            Err(RecordError::MissingNumber { found: 0 })
        ));
    }

    #[test]
    fn test_single_number_is_rejected() {
        assert!(matches!(
            CallRecord::parse_line("555-111-2222"),
            Err(RecordError::MissingNumber { found: 1 })
        ));
    }

    #[test]
    fn test_extra_tokens_are_rejected() {
        match CallRecord::parse_line("555-111-2222 555-333-4444 555-555-6666 x") {
            Err(RecordError::ExtraTokens { extra }) => {
                assert_eq!(extra, "555-555-6666 x");
            }
            other => panic!("expected ExtraTokens, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_format_is_rejected() {
        assert!(matches!(
            CallRecord::parse_line("555-111-2222 5553334444"),
            Err(RecordError::InvalidNumber(PhoneNumberError::WrongLength { .. }))
        ));
        assert!(matches!(
            CallRecord::parse_line("555-111-22222 555-333-4444"),
            Err(RecordError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_self_call_is_rejected() {
        assert!(matches!(
            CallRecord::parse_line("555-111-2222 555-111-2222"),
            Err(RecordError::SameNumber(n)) if n == "555-111-2222"
        ));
    }
}
