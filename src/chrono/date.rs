//! This module implements `ChronoDate`, the date of a chronology.

use core::{fmt, marker::PhantomData};

use writeable::Writeable;

use super::{AnyDate, CalendarSystem, ChronoLocalDate, Chronology, EraYear};
use crate::{
    calendrical::Calendrical, datetime::ChronoDateTime, period::Period, rule::DateTimeFieldRule,
    time::LocalTime, values::DayOfWeek, CalendricalResult,
};

/// A date without a time of day in the chronology `C`.
///
/// A `ChronoDate` always holds a valid year, month and day of its
/// chronology. Dates of one chronology are ordered chronologically; use
/// [`ChronoLocalDate::compare_to`] to order dates across chronologies.
///
/// ```rust
/// use calendrical_rs::chrono::CopticDate;
///
/// let leap_day = CopticDate::try_new(7, 13, 6).unwrap();
/// assert!(leap_day.is_leap_day());
///
/// // Changing the year clamps the day to the end of the month.
/// assert_eq!(leap_day.with_year(8).unwrap(), CopticDate::try_new(8, 13, 5).unwrap());
///
/// // Adding days rolls over into the next year.
/// let date = CopticDate::try_new(1234, 13, 1).unwrap();
/// assert_eq!(date.plus_days(5).unwrap(), CopticDate::try_new(1235, 1, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChronoDate<C: CalendarSystem> {
    year: i32,
    month: u8,
    day: u8,
    calendar: PhantomData<C>,
}

// ==== Private API ====

impl<C: CalendarSystem> ChronoDate<C> {
    /// Creates a date without validation.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            calendar: PhantomData,
        }
    }

    /// Creates a date from a valid year and month, clamping the day to the
    /// end of the month.
    fn new_clamped(year: i32, month: u8, day: u8) -> Self {
        Self::new_unchecked(year, month, day.min(C::days_in_month(year, month)))
    }

    /// Checks `day` against the length of `month` in `year`.
    fn check_day_in_month(year: i32, month: u8, day: i32) -> CalendricalResult<u8> {
        let rule = C::day_of_month_rule();
        let day = rule.check_value(day)?;
        let length = C::days_in_month(year, month);
        if day > i32::from(length) {
            return Err(rule.invalid_combination(day.into(), 1, length.into()));
        }
        // The static check bounds `day` to at most 31.
        Ok(day as u8)
    }
}

// ==== Public API ====

impl<C: CalendarSystem> ChronoDate<C> {
    /// Creates a new date.
    ///
    /// The year is validated first, then the month, then the day; the first
    /// failure is reported. A day outside of the day-of-month rule is an
    /// invalid value, while a day past the end of the month is an invalid
    /// combination.
    pub fn try_new(year: i32, month: i32, day: i32) -> CalendricalResult<Self> {
        let year = C::year_rule().check_value(year)?;
        let month = C::month_of_year_rule().check_value(month)? as u8;
        let day = Self::check_day_in_month(year, month, day)?;
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates the date on `epoch_day`, the number of days since 1970-01-01 ISO.
    pub fn from_epoch_day(epoch_day: i64) -> CalendricalResult<Self> {
        let (year, month, day) = C::ymd_from_epoch_day(epoch_day);
        let year = C::year_rule().check_value(year)?;
        crate::calendrical_assert!(
            (1..=C::MONTHS_IN_YEAR).contains(&month)
                && day >= 1
                && day <= C::days_in_month(year, month),
            "epoch day {epoch_day} produced an invalid date"
        );
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates the date on `day_of_year` of `year`.
    pub fn from_year_day(year: i32, day_of_year: i32) -> CalendricalResult<Self> {
        let year = C::year_rule().check_value(year)?;
        let rule = C::day_of_year_rule();
        let day_of_year = rule.check_value(day_of_year)?;
        let length = C::days_in_year(year);
        if day_of_year > i32::from(length) {
            return Err(rule.invalid_combination(day_of_year.into(), 1, length.into()));
        }
        let start = C::epoch_day_from_ymd(year, 1, 1);
        Self::from_epoch_day(start + i64::from(day_of_year) - 1)
    }

    /// Returns the number of days since 1970-01-01 ISO.
    #[inline]
    #[must_use]
    pub fn to_epoch_day(&self) -> i64 {
        C::epoch_day_from_ymd(self.year, self.month, self.day)
    }

    /// Converts this date to the chronology `D`.
    ///
    /// Fails if the date lies outside of the year range of `D`.
    pub fn to_chronology<D: CalendarSystem>(&self) -> CalendricalResult<ChronoDate<D>> {
        ChronoDate::<D>::from_epoch_day(self.to_epoch_day())
    }

    /// Converts this date into an [`AnyDate`].
    #[inline]
    #[must_use]
    pub fn to_any(&self) -> AnyDate {
        C::wrap(*self)
    }

    /// Returns the chronology of this date.
    #[inline]
    #[must_use]
    pub fn chronology(&self) -> &'static dyn Chronology {
        C::KIND.chronology()
    }

    // ==== Fields ====

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        C::day_of_year(self.year, self.month, self.day)
    }

    /// Returns the day of week, derived from the epoch day.
    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_epoch_day(self.to_epoch_day())
    }

    /// Returns the era and year of era, for chronologies with eras.
    #[inline]
    #[must_use]
    pub fn era_year(&self) -> Option<EraYear> {
        C::era_of(self.year)
    }

    /// Returns the value of the era field, for chronologies with eras.
    #[inline]
    #[must_use]
    pub fn era(&self) -> Option<i32> {
        self.era_year().map(|era| era.era)
    }

    #[inline]
    #[must_use]
    pub fn year_of_era(&self) -> Option<i32> {
        self.era_year().map(|era| era.year_of_era)
    }

    #[inline]
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        C::is_leap(self.year)
    }

    /// Returns whether this date is the leap day of its year.
    #[inline]
    #[must_use]
    pub fn is_leap_day(&self) -> bool {
        C::is_leap_day(self.month, self.day)
    }

    #[inline]
    #[must_use]
    pub fn length_of_month(&self) -> u8 {
        C::days_in_month(self.year, self.month)
    }

    #[inline]
    #[must_use]
    pub fn length_of_year(&self) -> u16 {
        C::days_in_year(self.year)
    }

    // ==== With ====

    /// Returns a copy with the year changed, clamping the day to the end of
    /// the month.
    pub fn with_year(&self, year: i32) -> CalendricalResult<Self> {
        let year = C::year_rule().check_value(year)?;
        Ok(Self::new_clamped(year, self.month, self.day))
    }

    /// Returns a copy with the month changed, clamping the day to the end of
    /// the month.
    pub fn with_month(&self, month: i32) -> CalendricalResult<Self> {
        let month = C::month_of_year_rule().check_value(month)? as u8;
        Ok(Self::new_clamped(self.year, month, self.day))
    }

    /// Returns a copy with the day of month changed.
    pub fn with_day(&self, day: i32) -> CalendricalResult<Self> {
        let day = Self::check_day_in_month(self.year, self.month, day)?;
        Ok(Self::new_unchecked(self.year, self.month, day))
    }

    /// Returns a copy with the day of year changed.
    pub fn with_day_of_year(&self, day_of_year: i32) -> CalendricalResult<Self> {
        Self::from_year_day(self.year, day_of_year)
    }

    /// Returns a copy on the last day of the month.
    #[must_use]
    pub fn with_last_day_of_month(&self) -> Self {
        Self::new_unchecked(self.year, self.month, self.length_of_month())
    }

    // ==== Arithmetic ====

    /// Adds `years`, clamping the day to the end of the month.
    pub fn plus_years(&self, years: i64) -> CalendricalResult<Self> {
        if years == 0 {
            return Ok(*self);
        }
        let year = C::year_rule().check_value(i64::from(self.year).saturating_add(years))?;
        Ok(Self::new_clamped(year, self.month, self.day))
    }

    /// Adds `months`, clamping the day to the end of the month.
    pub fn plus_months(&self, months: i64) -> CalendricalResult<Self> {
        if months == 0 {
            return Ok(*self);
        }
        let months_in_year = i64::from(C::MONTHS_IN_YEAR);
        let total = (i64::from(self.year) * months_in_year + i64::from(self.month) - 1)
            .saturating_add(months);
        let year = C::year_rule().check_value(total.div_euclid(months_in_year))?;
        let month = (total.rem_euclid(months_in_year) + 1) as u8;
        Ok(Self::new_clamped(year, month, self.day))
    }

    pub fn plus_weeks(&self, weeks: i64) -> CalendricalResult<Self> {
        self.plus_days(weeks.saturating_mul(7))
    }

    /// Adds `days`, rolling over into following months and years.
    pub fn plus_days(&self, days: i64) -> CalendricalResult<Self> {
        if days == 0 {
            return Ok(*self);
        }
        Self::from_epoch_day(self.to_epoch_day().saturating_add(days))
    }

    /// Adds the years, months and days of `period`, in that order.
    ///
    /// The time part of the period is ignored.
    pub fn plus_period(&self, period: &Period) -> CalendricalResult<Self> {
        self.plus_years(period.years())?
            .plus_months(period.months())?
            .plus_days(period.days())
    }

    pub fn minus_years(&self, years: i64) -> CalendricalResult<Self> {
        self.plus_years(years.saturating_neg())
    }

    pub fn minus_months(&self, months: i64) -> CalendricalResult<Self> {
        self.plus_months(months.saturating_neg())
    }

    pub fn minus_weeks(&self, weeks: i64) -> CalendricalResult<Self> {
        self.plus_weeks(weeks.saturating_neg())
    }

    pub fn minus_days(&self, days: i64) -> CalendricalResult<Self> {
        self.plus_days(days.saturating_neg())
    }

    /// Subtracts the years, months and days of `period`, in that order.
    pub fn minus_period(&self, period: &Period) -> CalendricalResult<Self> {
        self.minus_years(period.years())?
            .minus_months(period.months())?
            .minus_days(period.days())
    }

    // ==== Comparison ====

    /// Returns whether this date is after `other` in any chronology.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &dyn ChronoLocalDate) -> bool {
        ChronoLocalDate::is_after(self, other)
    }

    /// Returns whether this date is before `other` in any chronology.
    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &dyn ChronoLocalDate) -> bool {
        ChronoLocalDate::is_before(self, other)
    }

    /// Returns whether this date is on the same day as `other` in any chronology.
    #[inline]
    #[must_use]
    pub fn is_equal(&self, other: &dyn ChronoLocalDate) -> bool {
        ChronoLocalDate::is_equal(self, other)
    }

    /// Combines this date with a time of day.
    #[inline]
    #[must_use]
    pub const fn at_time(&self, time: LocalTime) -> ChronoDateTime<C> {
        ChronoDateTime::new(*self, time)
    }

    /// Combines this date with midnight.
    #[inline]
    #[must_use]
    pub const fn at_midnight(&self) -> ChronoDateTime<C> {
        ChronoDateTime::new(*self, LocalTime::MIDNIGHT)
    }
}

impl<C: CalendarSystem> ChronoLocalDate for ChronoDate<C> {
    fn chronology(&self) -> &'static dyn Chronology {
        C::KIND.chronology()
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> u8 {
        self.month
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn day_of_year(&self) -> u16 {
        ChronoDate::day_of_year(self)
    }

    fn day_of_week(&self) -> DayOfWeek {
        ChronoDate::day_of_week(self)
    }

    fn is_leap_year(&self) -> bool {
        ChronoDate::is_leap_year(self)
    }

    fn is_leap_day(&self) -> bool {
        ChronoDate::is_leap_day(self)
    }

    fn length_of_month(&self) -> u8 {
        ChronoDate::length_of_month(self)
    }

    fn length_of_year(&self) -> u16 {
        ChronoDate::length_of_year(self)
    }

    fn to_epoch_day(&self) -> i64 {
        ChronoDate::to_epoch_day(self)
    }
}

impl<C: CalendarSystem> Calendrical for ChronoDate<C> {
    /// Returns date fields of this chronology directly. Date fields of other
    /// chronologies are derived through the epoch day, and time fields are
    /// absent.
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
        if rule.chronology_kind() == C::KIND {
            return C::date_field(self, rule.field());
        }
        if rule.field().is_time_field() {
            return None;
        }
        rule.chronology()
            .date_from_epoch_day(self.to_epoch_day())
            .ok()?
            .get(rule)
    }
}

impl<C: CalendarSystem> Writeable for ChronoDate<C> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        C::write_date(self.year, self.month, self.day, sink)
    }
}

impl<C: CalendarSystem> fmt::Display for ChronoDate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
