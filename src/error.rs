//! This module implements `CalendricalError`.

use alloc::borrow::Cow;
use core::fmt;

use crate::rule::RuleId;

/// `CalendricalError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// A value outside of a rule's absolute bounds.
    InvalidValue,
    /// Individually valid values that do not form a valid calendrical.
    InvalidCombination,
    /// An operation that a rule structurally cannot support.
    Unsupported,
    /// A required input or field is absent.
    Missing,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::InvalidValue => "InvalidValue",
            Self::InvalidCombination => "InvalidCombination",
            Self::Unsupported => "Unsupported",
            Self::Missing => "Missing",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `calendrical_rs`.
///
/// Errors raised by a rule carry the rule's identity, the offending value
/// and the bounds that were violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendricalError {
    kind: ErrorKind,
    rule: Option<RuleId>,
    value: Option<i64>,
    bounds: Option<(i64, i64)>,
    msg: Cow<'static, str>,
}

impl CalendricalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            rule: None,
            value: None,
            bounds: None,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Creates an invalid field value error for `rule`.
    #[inline]
    #[must_use]
    pub(crate) const fn invalid_value(
        rule: RuleId,
        value: i64,
        minimum: i64,
        maximum: i64,
    ) -> Self {
        Self {
            kind: ErrorKind::InvalidValue,
            rule: Some(rule),
            value: Some(value),
            bounds: Some((minimum, maximum)),
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates an invalid calendrical combination error for `rule`.
    #[inline]
    #[must_use]
    pub(crate) const fn invalid_combination(
        rule: RuleId,
        value: i64,
        minimum: i64,
        maximum: i64,
    ) -> Self {
        Self {
            kind: ErrorKind::InvalidCombination,
            rule: Some(rule),
            value: Some(value),
            bounds: Some((minimum, maximum)),
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates an invalid value error that carries no value or bounds.
    #[inline]
    #[must_use]
    pub const fn invalid() -> Self {
        Self::new(ErrorKind::InvalidValue)
    }

    /// Creates an unsupported operation error.
    #[inline]
    #[must_use]
    pub const fn unsupported() -> Self {
        Self::new(ErrorKind::Unsupported)
    }

    /// Creates a missing input error.
    #[inline]
    #[must_use]
    pub const fn missing() -> Self {
        Self::new(ErrorKind::Missing)
    }

    /// Creates an invalid combination error that is not tied to a rule.
    #[inline]
    #[must_use]
    pub const fn combination() -> Self {
        Self::new(ErrorKind::InvalidCombination)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches the identity of the rule the error concerns.
    #[inline]
    #[must_use]
    pub const fn with_rule(mut self, rule: RuleId) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the identity of the rule that raised the error, if any.
    #[inline]
    #[must_use]
    pub const fn rule(&self) -> Option<RuleId> {
        self.rule
    }

    /// Returns the rejected value, if any.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        self.value
    }

    /// Returns the `(minimum, maximum)` bounds that were violated, if any.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Option<(i64, i64)> {
        self.bounds
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for CalendricalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        match (self.rule, self.value, self.bounds) {
            (Some(rule), Some(value), Some((minimum, maximum))) => {
                write!(
                    f,
                    ": Invalid value for {rule}: {value} is not in the range {minimum} to {maximum}"
                )?;
            }
            (Some(rule), _, _) => write!(f, ": {rule}")?,
            _ => {}
        }

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for CalendricalError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{CalendricalError, ErrorKind};
    use crate::{chrono::ChronologyKind, rule::RuleId, Field};

    #[test]
    fn invalid_value_display() {
        let rule = RuleId::new(ChronologyKind::Coptic, Field::DayOfMonth);
        let err = CalendricalError::invalid_value(rule, 31, 1, 30);
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.rule(), Some(rule));
        assert_eq!(err.value(), Some(31));
        assert_eq!(err.bounds(), Some((1, 30)));
        assert_eq!(
            err.to_string(),
            "InvalidValue: Invalid value for DayOfMonth (Coptic): 31 is not in the range 1 to 30"
        );
    }

    #[test]
    fn message_display() {
        let err = CalendricalError::missing().with_message("year is required");
        assert_eq!(err.to_string(), "Missing: year is required");
        assert_eq!(err.message(), "year is required");
        assert!(err.rule().is_none());
    }
}
