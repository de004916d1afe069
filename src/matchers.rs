//! Predicates over dates of any chronology.

use crate::{chrono::ChronoLocalDate, values::DayOfWeek, CalendricalError, CalendricalResult};

/// A predicate that a date either matches or does not.
///
/// ```rust
/// use calendrical_rs::{chrono::LocalDate, matchers::DateMatcher, DayOfWeek};
///
/// // 2012-10-29 is the last Monday of October 2012.
/// let date = LocalDate::try_new(2012, 10, 29).unwrap();
/// let fifth_monday = DateMatcher::day_of_week_in_month(5, DayOfWeek::Monday).unwrap();
/// assert!(fifth_monday.matches_date(&date));
/// assert!(!DateMatcher::FirstInMonth(DayOfWeek::Monday).matches_date(&date));
/// assert!(DateMatcher::LeapYear.matches_date(&date));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateMatcher {
    /// Matches every date in a leap year.
    LeapYear,
    /// Matches the leap day of a leap year.
    LeapDay,
    LastDayOfMonth,
    LastDayOfYear,
    /// Matches the `ordinal`th occurrence of a day of week within its month.
    DayOfWeekInMonth { ordinal: u8, day_of_week: DayOfWeek },
    /// Matches the first occurrence of a day of week within its month.
    FirstInMonth(DayOfWeek),
    WeekendDay,
    NonWeekendDay,
}

impl DateMatcher {
    /// Creates a matcher for the `ordinal`th `day_of_week` of a month.
    ///
    /// Fails unless `ordinal` is between 1 and 5.
    pub fn day_of_week_in_month(ordinal: i32, day_of_week: DayOfWeek) -> CalendricalResult<Self> {
        let ordinal = u8::try_from(ordinal)
            .ok()
            .filter(|ordinal| (1..=5).contains(ordinal))
            .ok_or_else(|| {
                CalendricalError::general(alloc::format!(
                    "Illegal value for ordinal, value {ordinal} is not in the range 1 to 5"
                ))
            })?;
        Ok(Self::DayOfWeekInMonth {
            ordinal,
            day_of_week,
        })
    }

    /// Returns whether `date` matches this predicate.
    #[must_use]
    pub fn matches_date(&self, date: &dyn ChronoLocalDate) -> bool {
        match *self {
            Self::LeapYear => date.is_leap_year(),
            Self::LeapDay => date.is_leap_day(),
            Self::LastDayOfMonth => date.day() == date.length_of_month(),
            Self::LastDayOfYear => date.day_of_year() == date.length_of_year(),
            Self::DayOfWeekInMonth {
                ordinal,
                day_of_week,
            } => {
                date.day_of_week() == day_of_week && (date.day() - 1) / 7 + 1 == ordinal
            }
            Self::FirstInMonth(day_of_week) => date.day_of_week() == day_of_week && date.day() <= 7,
            Self::WeekendDay => date.day_of_week().is_weekend(),
            Self::NonWeekendDay => !date.day_of_week().is_weekend(),
        }
    }
}
