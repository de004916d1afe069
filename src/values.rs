//! Immutable values of single calendrical fields.
//!
//! `DayOfWeek` and `AmPmOfDay` are plain enums. The integer-backed values are
//! interned: at most one instance of each value exists for the lifetime of
//! the process, so equality is identity.

use alloc::string::String;
use core::{fmt, hash::Hash, ptr};

use icu_locale::Locale;

use crate::{
    calendrical::Calendrical,
    chrono::{ChronoLocalDate, Iso, LocalDate},
    intern::InternCache,
    rule::DateTimeFieldRule,
    text::TextStyle,
    CalendricalResult, CalendricalUnwrap,
};

// ==== DayOfWeek ====

/// A day of the week, Monday (1) to Sunday (7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the day of week of `value`, validated by the ISO day-of-week
    /// rule.
    pub fn of(value: i32) -> CalendricalResult<Self> {
        let value = Iso::day_of_week_rule().check_value(value)?;
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the day of week of `epoch_day`, the number of days since
    /// 1970-01-01 ISO, which was a Thursday.
    #[must_use]
    pub fn from_epoch_day(epoch_day: i64) -> Self {
        Self::ALL[usize::from(date_equations::iso_day_of_week(epoch_day) - 1)]
    }

    /// Returns the day of week of `date` in any chronology.
    #[must_use]
    pub fn from_date(date: &dyn ChronoLocalDate) -> Self {
        Self::from_epoch_day(date.to_epoch_day())
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Returns the day of week `days` after this one.
    ///
    /// ```rust
    /// use calendrical_rs::DayOfWeek;
    ///
    /// assert_eq!(DayOfWeek::Sunday.plus(1), DayOfWeek::Monday);
    /// assert_eq!(DayOfWeek::Monday.plus(-8), DayOfWeek::Sunday);
    /// ```
    #[must_use]
    pub fn plus(self, days: i64) -> Self {
        let index = (i64::from(self.value()) - 1 + days.rem_euclid(7)).rem_euclid(7);
        Self::ALL[index as usize]
    }

    #[inline]
    #[must_use]
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    #[inline]
    #[must_use]
    pub fn rule() -> &'static DateTimeFieldRule {
        Iso::day_of_week_rule()
    }

    /// Returns the localized text of this day.
    #[must_use]
    pub fn text(self, locale: &Locale, style: TextStyle) -> String {
        Self::rule().text(self.value(), locale, style)
    }
}

impl Calendrical for DayOfWeek {
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
        (rule == Self::rule()).then_some(self.value())
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ==== AmPmOfDay ====

/// The half of a day, before or after midday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AmPmOfDay {
    Am = 0,
    Pm = 1,
}

impl AmPmOfDay {
    /// Returns the half of day of `value`, validated by the ISO am-pm rule.
    pub fn of(value: i32) -> CalendricalResult<Self> {
        match Iso::am_pm_of_day_rule().check_value(value)? {
            0 => Ok(Self::Am),
            _ => Ok(Self::Pm),
        }
    }

    /// Returns the half of day of `hour_of_day`.
    #[must_use]
    pub const fn from_hour(hour_of_day: u8) -> Self {
        if hour_of_day < 12 {
            Self::Am
        } else {
            Self::Pm
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    #[inline]
    #[must_use]
    pub fn rule() -> &'static DateTimeFieldRule {
        Iso::am_pm_of_day_rule()
    }

    #[must_use]
    pub fn text(self, locale: &Locale, style: TextStyle) -> String {
        Self::rule().text(self.value(), locale, style)
    }
}

impl Calendrical for AmPmOfDay {
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
        (rule == Self::rule()).then_some(self.value())
    }
}

// ==== Interned values ====

macro_rules! interned_value {
    ($(#[$meta:meta])* $name:ident, $rule:ident, $min:literal..=$max:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            value: i32,
        }

        impl $name {
            /// Returns the canonical instance of `value`.
            ///
            /// Fails if `value` is outside of the bounds of the field's rule.
            pub fn of(value: i32) -> CalendricalResult<&'static Self> {
                static CACHE: InternCache<$name, { $max - $min + 1 }> = InternCache::new();
                let value = Self::rule().check_value(value)?;
                CACHE
                    .get_or_insert((value - $min) as usize, || Self { value })
                    .calendrical_unwrap()
            }

            #[inline]
            #[must_use]
            pub const fn value(&self) -> i32 {
                self.value
            }

            /// Returns the rule of this field.
            #[inline]
            #[must_use]
            pub fn rule() -> &'static DateTimeFieldRule {
                Iso::$rule()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                ptr::eq(self, other)
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.value.cmp(&other.value)
            }
        }

        impl Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                self.value.hash(state);
            }
        }

        impl Calendrical for $name {
            fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
                (rule == Self::rule()).then_some(self.value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}={}", Self::rule().name(), self.value)
            }
        }
    };
}

interned_value!(
    /// A week of a week-based year, 1 to 53.
    ///
    /// ```rust
    /// use calendrical_rs::values::WeekOfWeekBasedYear;
    ///
    /// let week = WeekOfWeekBasedYear::of(53).unwrap();
    /// assert!(core::ptr::eq(week, WeekOfWeekBasedYear::of(53).unwrap()));
    /// assert!(week.is_valid(2004));
    /// assert!(!week.is_valid(2005));
    /// assert!(WeekOfWeekBasedYear::of(54).is_err());
    /// ```
    WeekOfWeekBasedYear,
    week_of_week_based_year_rule,
    1..=53
);
interned_value!(
    /// An hour of the day, 0 to 23.
    HourOfDay,
    hour_of_day_rule,
    0..=23
);
interned_value!(
    /// A minute of the hour, 0 to 59.
    MinuteOfHour,
    minute_of_hour_rule,
    0..=59
);
interned_value!(
    /// A second of the minute, 0 to 59.
    SecondOfMinute,
    second_of_minute_rule,
    0..=59
);
interned_value!(
    /// A day of the month, 1 to 31.
    DayOfMonth,
    day_of_month_rule,
    1..=31
);
interned_value!(
    /// A day of the year, 1 to 366.
    DayOfYear,
    day_of_year_rule,
    1..=366
);

impl WeekOfWeekBasedYear {
    /// Returns the week of the week-based year of `date`.
    pub fn from_date(date: &LocalDate) -> CalendricalResult<&'static Self> {
        Self::of(Iso::week_of_week_based_year(date).into())
    }

    /// Returns whether this week exists in `week_based_year`.
    #[must_use]
    pub fn is_valid(&self, week_based_year: i32) -> bool {
        self.value <= i32::from(Iso::weeks_in_week_based_year(week_based_year))
    }

    /// Returns whether `date` falls in this week.
    #[must_use]
    pub fn matches_date(&self, date: &LocalDate) -> bool {
        i32::from(Iso::week_of_week_based_year(date)) == self.value
    }
}

impl DayOfMonth {
    /// Returns whether `date` falls on this day of month.
    #[must_use]
    pub fn matches_date(&self, date: &dyn ChronoLocalDate) -> bool {
        i32::from(date.day()) == self.value
    }
}

impl DayOfYear {
    /// Returns whether this day exists in `year` of the ISO chronology.
    #[must_use]
    pub fn is_valid_year(&self, year: i32) -> bool {
        self.value <= i32::from(<Iso as crate::chrono::CalendarSystem>::days_in_year(year))
    }

    /// Returns whether `date` falls on this day of year.
    #[must_use]
    pub fn matches_date(&self, date: &dyn ChronoLocalDate) -> bool {
        i32::from(date.day_of_year()) == self.value
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::ptr;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn interned_values_are_identical() {
        let a = HourOfDay::of(13).unwrap();
        let b = HourOfDay::of(13).unwrap();
        assert!(ptr::eq(a, b));
        assert_eq!(a, b);
        assert_ne!(HourOfDay::of(12).unwrap(), a);
        assert!(HourOfDay::of(12).unwrap() < a);
        assert_eq!(a.to_string(), "HourOfDay=13");
    }

    #[test]
    fn out_of_range_values_fail() {
        let err = WeekOfWeekBasedYear::of(54).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.value(), Some(54));
        assert_eq!(err.bounds(), Some((1, 53)));
        assert!(WeekOfWeekBasedYear::of(0).is_err());
        assert!(MinuteOfHour::of(60).is_err());
        assert!(DayOfYear::of(367).is_err());
        assert!(DayOfYear::of(366).is_ok());
    }

    #[test]
    fn week_of_week_based_year_dates() {
        // 2008-12-29 is the Monday of week 1 of 2009.
        let date = LocalDate::try_new(2008, 12, 29).unwrap();
        let week = WeekOfWeekBasedYear::from_date(&date).unwrap();
        assert_eq!(week.value(), 1);
        assert!(week.matches_date(&date));
        // 2010-01-03 is the Sunday of week 53 of 2009.
        let date = LocalDate::try_new(2010, 1, 3).unwrap();
        assert_eq!(WeekOfWeekBasedYear::from_date(&date).unwrap().value(), 53);
        assert!(WeekOfWeekBasedYear::of(53).unwrap().is_valid(2009));
        assert!(!WeekOfWeekBasedYear::of(53).unwrap().is_valid(2010));
    }

    #[test]
    fn calendrical_answers_only_its_rule() {
        let hour = HourOfDay::of(5).unwrap();
        assert_eq!(hour.get(Iso::hour_of_day_rule()), Some(5));
        assert_eq!(hour.get(Iso::minute_of_hour_rule()), None);
        assert_eq!(DayOfWeek::Friday.get(Iso::day_of_week_rule()), Some(5));
        assert_eq!(AmPmOfDay::Pm.get(Iso::am_pm_of_day_rule()), Some(1));
    }

    #[test]
    fn day_of_week() {
        assert_eq!(DayOfWeek::from_epoch_day(0), DayOfWeek::Thursday);
        assert_eq!(DayOfWeek::from_epoch_day(-1), DayOfWeek::Wednesday);
        assert_eq!(DayOfWeek::of(7).unwrap(), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::of(0).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert_eq!(DayOfWeek::Saturday.plus(i64::MAX), DayOfWeek::Saturday.plus(i64::MAX % 7));
        assert!(DayOfWeek::Sunday.is_weekend());
        assert!(!DayOfWeek::Friday.is_weekend());
        let en = Locale::try_from_str("en").unwrap();
        assert_eq!(DayOfWeek::Monday.text(&en, TextStyle::Full), "Monday");
        assert_eq!(AmPmOfDay::from_hour(12), AmPmOfDay::Pm);
        assert_eq!(AmPmOfDay::of(0).unwrap(), AmPmOfDay::Am);
    }
}
