//! Normalized free-text labels for income and expense types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BudgetError, BudgetResult};

/// Maximum length (in characters) of an income type label
pub const MAX_INCOME_TYPE_LEN: usize = 45;

/// A trimmed label with its first character upper-cased and the rest
/// lower-cased ("sALARY " becomes "Salary").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Normalize raw input into a label
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        let mut chars = lowered.chars();
        let normalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self(normalized)
    }

    /// Normalize raw input and reject labels longer than `max_len` characters
    pub fn parse_bounded(raw: &str, max_len: usize) -> BudgetResult<Self> {
        let label = Self::normalize(raw);
        if label.char_len() > max_len {
            return Err(BudgetError::validation(format!(
                "Income type must be within {} characters.",
                max_len
            )));
        }
        Ok(label)
    }

    /// Normalize an income type
    pub fn income_type(raw: &str) -> BudgetResult<Self> {
        Self::parse_bounded(raw, MAX_INCOME_TYPE_LEN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(Label::normalize("  sALARY ").as_str(), "Salary");
        assert_eq!(Label::normalize("side HUSTLE").as_str(), "Side hustle");
        assert_eq!(Label::normalize("").as_str(), "");
        assert_eq!(Label::normalize("élan").as_str(), "Élan");
    }

    #[test]
    fn test_income_type_length_limit() {
        let at_limit = "a".repeat(MAX_INCOME_TYPE_LEN);
        assert!(Label::income_type(&at_limit).is_ok());

        let over = "a".repeat(MAX_INCOME_TYPE_LEN + 1);
        let err = Label::income_type(&over).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_length_counts_after_trim() {
        let padded = format!("   {}   ", "b".repeat(MAX_INCOME_TYPE_LEN));
        assert!(Label::income_type(&padded).is_ok());
    }
}
