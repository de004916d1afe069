//! Native implementation of the calendrical options.
//!
//! Options select how an operation treats values that fall outside of
//! a field's valid range, and name the periods that fields vary over.

use core::{fmt, str::FromStr};

// ==== Options enums and methods ====

/// The period unit that a field varies in, or the period range that
/// bounds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodUnit {
    /// The `Nanos` unit
    Nanos = 0,
    /// The `Seconds` unit
    Seconds,
    /// The `Minutes` unit
    Minutes,
    /// The `Hours` unit
    Hours,
    /// The `HalfDays` unit
    HalfDays,
    /// The `Days` unit
    Days,
    /// The `Weeks` unit
    Weeks,
    /// The `Months` unit
    Months,
    /// The `QuarterYears` unit
    QuarterYears,
    /// The `Years` unit
    Years,
    /// The `WeekBasedYears` unit
    WeekBasedYears,
    /// The `Eras` unit
    Eras,
    /// The `Forever` unit
    Forever,
}

impl PeriodUnit {
    /// Returns the nanosecond length of a fixed-length time unit.
    #[must_use]
    pub fn as_nanoseconds(&self) -> Option<i64> {
        use PeriodUnit::{Days, HalfDays, Hours, Minutes, Nanos, Seconds};
        match self {
            Nanos => Some(1),
            Seconds => Some(1_000_000_000),
            Minutes => Some(60_000_000_000),
            Hours => Some(3_600_000_000_000),
            HalfDays => Some(43_200_000_000_000),
            Days => Some(crate::NANOS_PER_DAY),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_date_unit(&self) -> bool {
        use PeriodUnit::{Days, Eras, Months, QuarterYears, WeekBasedYears, Weeks, Years};
        matches!(
            self,
            Days | Weeks | Months | QuarterYears | Years | WeekBasedYears | Eras
        )
    }

    #[inline]
    #[must_use]
    pub fn is_time_unit(&self) -> bool {
        use PeriodUnit::{HalfDays, Hours, Minutes, Nanos, Seconds};
        matches!(self, Nanos | Seconds | Minutes | Hours | HalfDays)
    }
}

/// A parsing error for `PeriodUnit`
#[derive(Debug, Clone, Copy)]
pub struct ParsePeriodUnitError;

impl fmt::Display for ParsePeriodUnitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid PeriodUnit")
    }
}

impl FromStr for PeriodUnit {
    type Err = ParsePeriodUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nanos" => Ok(Self::Nanos),
            "seconds" => Ok(Self::Seconds),
            "minutes" => Ok(Self::Minutes),
            "hours" => Ok(Self::Hours),
            "half-days" => Ok(Self::HalfDays),
            "days" => Ok(Self::Days),
            "weeks" => Ok(Self::Weeks),
            "months" => Ok(Self::Months),
            "quarter-years" => Ok(Self::QuarterYears),
            "years" => Ok(Self::Years),
            "week-based-years" => Ok(Self::WeekBasedYears),
            "eras" => Ok(Self::Eras),
            "forever" => Ok(Self::Forever),
            _ => Err(ParsePeriodUnitError),
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Nanos => "nanos",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::HalfDays => "half-days",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::QuarterYears => "quarter-years",
            Self::Years => "years",
            Self::WeekBasedYears => "week-based-years",
            Self::Eras => "eras",
            Self::Forever => "forever",
        }
        .fmt(f)
    }
}

/// `ArithmeticOverflow` selects how calendrical resolution treats field
/// values that are outside of their valid range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOverflow {
    /// Reject any out of range value.
    #[default]
    Reject,
    /// Clamp out of range months and days to the nearest valid value.
    Constrain,
    /// Carry out of range months and days into the next coarser field.
    Carry,
}

/// A parsing error for `ArithemeticOverflow`
#[derive(Debug, Clone, Copy)]
pub struct ParseArithmeticOverflowError;

impl fmt::Display for ParseArithmeticOverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

impl FromStr for ArithmeticOverflow {
    type Err = ParseArithmeticOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "constrain" => Ok(Self::Constrain),
            "carry" => Ok(Self::Carry),
            _ => Err(ParseArithmeticOverflowError),
        }
    }
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Reject => "reject",
            Self::Constrain => "constrain",
            Self::Carry => "carry",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::{ArithmeticOverflow, PeriodUnit};

    #[test]
    fn period_unit_kinds() {
        assert!(PeriodUnit::Days.is_date_unit());
        assert!(!PeriodUnit::Days.is_time_unit());
        assert!(PeriodUnit::HalfDays.is_time_unit());
        assert!(!PeriodUnit::Forever.is_date_unit());
        assert!(PeriodUnit::Seconds < PeriodUnit::Minutes);
        assert_eq!(PeriodUnit::Hours.as_nanoseconds(), Some(3_600_000_000_000));
        assert_eq!(PeriodUnit::Months.as_nanoseconds(), None);
    }

    #[test]
    fn parse_options() {
        assert_eq!(
            PeriodUnit::from_str("quarter-years").ok(),
            Some(PeriodUnit::QuarterYears)
        );
        assert!(PeriodUnit::from_str("fortnights").is_err());
        assert_eq!(ArithmeticOverflow::default(), ArithmeticOverflow::Reject);
        assert_eq!(
            ArithmeticOverflow::from_str("carry").ok(),
            Some(ArithmeticOverflow::Carry)
        );
        assert!(ArithmeticOverflow::from_str("wrap").is_err());
    }
}
