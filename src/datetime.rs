//! This module implements `ChronoDateTime`, a date and time of day in a
//! chronology.

use core::fmt;

use writeable::Writeable;

use crate::{
    calendrical::Calendrical,
    chrono::{CalendarSystem, ChronoDate},
    period::Period,
    rule::DateTimeFieldRule,
    time::{LocalTime, TimeOverflow},
    CalendricalResult,
};

/// A date and time of day without a time zone.
///
/// Time arithmetic carries whole days into the date.
///
/// ```rust
/// use calendrical_rs::{chrono::LocalDate, LocalTime};
///
/// let date = LocalDate::try_new(2012, 12, 31).unwrap();
/// let date_time = date.at_time(LocalTime::of_hour_minute(23, 0).unwrap());
/// assert_eq!(date_time.to_string(), "2012-12-31T23:00");
///
/// let next = date_time.plus_hours(2).unwrap();
/// assert_eq!(next.to_string(), "2013-01-01T01:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChronoDateTime<C: CalendarSystem> {
    date: ChronoDate<C>,
    time: LocalTime,
}

impl<C: CalendarSystem> ChronoDateTime<C> {
    #[inline]
    #[must_use]
    pub const fn new(date: ChronoDate<C>, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Creates a new date-time from its fields.
    pub fn try_new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        nano: i32,
    ) -> CalendricalResult<Self> {
        let date = ChronoDate::try_new(year, month, day)?;
        let time = LocalTime::of_hms_nano(hour, minute, second, nano)?;
        Ok(Self::new(date, time))
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> ChronoDate<C> {
        self.date
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.time
    }

    #[inline]
    #[must_use]
    pub const fn with_date(&self, date: ChronoDate<C>) -> Self {
        Self::new(date, self.time)
    }

    #[inline]
    #[must_use]
    pub const fn with_time(&self, time: LocalTime) -> Self {
        Self::new(self.date, time)
    }

    /// Converts the date of this date-time to the chronology `D`.
    pub fn to_chronology<D: CalendarSystem>(&self) -> CalendricalResult<ChronoDateTime<D>> {
        Ok(ChronoDateTime::new(self.date.to_chronology()?, self.time))
    }

    fn with_overflow(&self, overflow: TimeOverflow) -> CalendricalResult<Self> {
        Ok(Self::new(self.date.plus_days(overflow.days)?, overflow.time))
    }

    // ==== Date arithmetic ====

    pub fn plus_years(&self, years: i64) -> CalendricalResult<Self> {
        Ok(self.with_date(self.date.plus_years(years)?))
    }

    pub fn plus_months(&self, months: i64) -> CalendricalResult<Self> {
        Ok(self.with_date(self.date.plus_months(months)?))
    }

    pub fn plus_weeks(&self, weeks: i64) -> CalendricalResult<Self> {
        Ok(self.with_date(self.date.plus_weeks(weeks)?))
    }

    pub fn plus_days(&self, days: i64) -> CalendricalResult<Self> {
        Ok(self.with_date(self.date.plus_days(days)?))
    }

    pub fn minus_years(&self, years: i64) -> CalendricalResult<Self> {
        Ok(self.with_date(self.date.minus_years(years)?))
    }

    pub fn minus_months(&self, months: i64) -> CalendricalResult<Self> {
        Ok(self.with_date(self.date.minus_months(months)?))
    }

    pub fn minus_weeks(&self, weeks: i64) -> CalendricalResult<Self> {
        Ok(self.with_date(self.date.minus_weeks(weeks)?))
    }

    pub fn minus_days(&self, days: i64) -> CalendricalResult<Self> {
        Ok(self.with_date(self.date.minus_days(days)?))
    }

    // ==== Time arithmetic ====

    pub fn plus_hours(&self, hours: i64) -> CalendricalResult<Self> {
        self.with_overflow(self.time.plus_hours_with_overflow(hours))
    }

    pub fn plus_minutes(&self, minutes: i64) -> CalendricalResult<Self> {
        self.with_overflow(self.time.plus_minutes_with_overflow(minutes))
    }

    pub fn plus_seconds(&self, seconds: i64) -> CalendricalResult<Self> {
        self.with_overflow(self.time.plus_seconds_with_overflow(seconds))
    }

    pub fn plus_nanos(&self, nanos: i64) -> CalendricalResult<Self> {
        self.with_overflow(self.time.plus_nanos_with_overflow(nanos))
    }

    pub fn minus_hours(&self, hours: i64) -> CalendricalResult<Self> {
        self.plus_hours(hours.saturating_neg())
    }

    pub fn minus_minutes(&self, minutes: i64) -> CalendricalResult<Self> {
        self.plus_minutes(minutes.saturating_neg())
    }

    pub fn minus_seconds(&self, seconds: i64) -> CalendricalResult<Self> {
        self.plus_seconds(seconds.saturating_neg())
    }

    pub fn minus_nanos(&self, nanos: i64) -> CalendricalResult<Self> {
        self.plus_nanos(nanos.saturating_neg())
    }

    /// Adds `period`: the date part to the date first, then the time part
    /// with any crossed days carried into the date.
    pub fn plus_period(&self, period: &Period) -> CalendricalResult<Self> {
        let date = self.date.plus_period(period)?;
        Self::new(date, self.time).with_overflow(self.time.plus_period_with_overflow(period))
    }

    pub fn minus_period(&self, period: &Period) -> CalendricalResult<Self> {
        self.plus_period(&period.negated()?)
    }
}

impl<C: CalendarSystem> Calendrical for ChronoDateTime<C> {
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
        if rule.field().is_time_field() {
            self.time.get(rule)
        } else {
            self.date.get(rule)
        }
    }
}

impl<C: CalendarSystem> Writeable for ChronoDateTime<C> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.date.write_to(sink)?;
        sink.write_char('T')?;
        self.time.write_to(sink)
    }
}

impl<C: CalendarSystem> fmt::Display for ChronoDateTime<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{
        chrono::{CopticDate, Iso, LocalDate, MinguoDate},
        Calendrical, ChronoDateTime, LocalTime, Period,
    };

    #[test]
    fn time_arithmetic_carries_days() {
        let date_time = ChronoDateTime::<crate::chrono::Coptic>::try_new(1234, 13, 5, 23, 0, 0, 0)
            .unwrap();
        let next = date_time.plus_hours(1).unwrap();
        assert_eq!(next.date(), CopticDate::try_new(1235, 1, 1).unwrap());
        assert_eq!(next.time(), LocalTime::MIDNIGHT);
        assert_eq!(next.minus_nanos(1).unwrap(), date_time.with_time(LocalTime::MAX));
    }

    #[test]
    fn period_applies_date_then_time() {
        let date_time = LocalDate::try_new(2011, 1, 31).unwrap().at_midnight();
        let next = date_time
            .plus_period(&Period::new(0, 1, 0, 25, 0, 0, 0))
            .unwrap();
        // 2011-01-31 plus a month clamps to 2011-02-28, then 25 hours.
        assert_eq!(next.to_string(), "2011-03-01T01:00");
        assert_eq!(
            next.minus_period(&Period::new(0, 1, 0, 25, 0, 0, 0)).unwrap().to_string(),
            "2011-01-31T00:00"
        );
    }

    #[test]
    fn fields_from_both_parts() {
        let date_time = MinguoDate::try_new(101, 10, 29)
            .unwrap()
            .at_time(LocalTime::of_hour_minute(14, 30).unwrap());
        assert_eq!(date_time.to_string(), "Minguo ROC 101-10-29T14:30");
        assert_eq!(date_time.get(Iso::hour_of_day_rule()), Some(14));
        assert_eq!(date_time.get(Iso::year_rule()), Some(2012));
        let iso = date_time.to_chronology::<Iso>().unwrap();
        assert_eq!(iso.to_string(), "2012-10-29T14:30");
    }
}
