//! This module implements `Period`, an amount of calendrical time.

use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{CalendricalError, CalendricalResult, NANOS_PER_SECOND};

/// An amount of time in years, months, days, hours, minutes, seconds and
/// nanoseconds.
///
/// The units are kept separately and are never normalized into each other,
/// as their relation depends on the date a period is applied to.
///
/// ```rust
/// use calendrical_rs::Period;
///
/// let period = Period::new(1, 2, 3, 4, 5, 6, 7);
/// assert_eq!(period.to_string(), "P1Y2M3DT4H5M6.000000007S");
/// assert_eq!(Period::ZERO.to_string(), "PT0S");
/// assert_eq!(Period::of_days(-2).to_string(), "P-2D");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    nanos: i64,
}

impl Period {
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    #[must_use]
    pub const fn new(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        nanos: i64,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            nanos,
        }
    }

    #[must_use]
    pub const fn of_years(years: i64) -> Self {
        Self::new(years, 0, 0, 0, 0, 0, 0)
    }

    #[must_use]
    pub const fn of_months(months: i64) -> Self {
        Self::new(0, months, 0, 0, 0, 0, 0)
    }

    #[must_use]
    pub const fn of_days(days: i64) -> Self {
        Self::new(0, 0, days, 0, 0, 0, 0)
    }

    #[must_use]
    pub const fn of_hours(hours: i64) -> Self {
        Self::new(0, 0, 0, hours, 0, 0, 0)
    }

    #[must_use]
    pub const fn of_minutes(minutes: i64) -> Self {
        Self::new(0, 0, 0, 0, minutes, 0, 0)
    }

    #[must_use]
    pub const fn of_seconds(seconds: i64) -> Self {
        Self::new(0, 0, 0, 0, 0, seconds, 0)
    }

    #[must_use]
    pub const fn of_nanos(nanos: i64) -> Self {
        Self::new(0, 0, 0, 0, 0, 0, nanos)
    }

    #[inline]
    #[must_use]
    pub const fn years(&self) -> i64 {
        self.years
    }

    #[inline]
    #[must_use]
    pub const fn months(&self) -> i64 {
        self.months
    }

    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    #[inline]
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    #[inline]
    #[must_use]
    pub const fn nanos(&self) -> i64 {
        self.nanos
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0 && !self.has_time()
    }

    /// Returns whether any of the time units is non-zero.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.nanos != 0
    }

    /// Returns the time part of this period in nanoseconds.
    #[must_use]
    pub(crate) fn time_as_nanos(&self) -> i128 {
        i128::from(self.hours) * 3_600 * i128::from(NANOS_PER_SECOND)
            + i128::from(self.minutes) * 60 * i128::from(NANOS_PER_SECOND)
            + i128::from(self.seconds) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.nanos)
    }

    /// Adds two periods unit by unit.
    pub fn plus(&self, other: &Self) -> CalendricalResult<Self> {
        let add = |a: i64, b: i64| {
            a.checked_add(b)
                .ok_or(CalendricalError::general("Period arithmetic overflowed"))
        };
        Ok(Self::new(
            add(self.years, other.years)?,
            add(self.months, other.months)?,
            add(self.days, other.days)?,
            add(self.hours, other.hours)?,
            add(self.minutes, other.minutes)?,
            add(self.seconds, other.seconds)?,
            add(self.nanos, other.nanos)?,
        ))
    }

    /// Returns this period with every unit negated.
    pub fn negated(&self) -> CalendricalResult<Self> {
        let negate = |a: i64| {
            a.checked_neg()
                .ok_or(CalendricalError::general("Period arithmetic overflowed"))
        };
        Ok(Self::new(
            negate(self.years)?,
            negate(self.months)?,
            negate(self.days)?,
            negate(self.hours)?,
            negate(self.minutes)?,
            negate(self.seconds)?,
            negate(self.nanos)?,
        ))
    }
}

impl Writeable for Period {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.is_zero() {
            return sink.write_str("PT0S");
        }
        sink.write_char('P')?;
        for (value, designator) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if value != 0 {
                value.write_to(sink)?;
                sink.write_char(designator)?;
            }
        }
        if !self.has_time() {
            return Ok(());
        }
        sink.write_char('T')?;
        for (value, designator) in [(self.hours, 'H'), (self.minutes, 'M')] {
            if value != 0 {
                value.write_to(sink)?;
                sink.write_char(designator)?;
            }
        }
        let total =
            i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos);
        if total == 0 {
            return Ok(());
        }
        if total < 0 {
            sink.write_char('-')?;
        }
        let total = total.unsigned_abs();
        let nanos_per_second = NANOS_PER_SECOND as u128;
        (total / nanos_per_second).write_to(sink)?;
        let fraction = (total % nanos_per_second) as u32;
        if fraction != 0 {
            sink.write_char('.')?;
            let (digits, precision) = crate::utils::u32_to_digits(fraction);
            for digit in digits.iter().take(precision) {
                digit.write_to(sink)?;
            }
        }
        sink.write_char('S')
    }
}

impl_display_with_writeable!(Period);
