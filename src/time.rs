//! This module implements `LocalTime`, a time of day without a date.

use core::fmt;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    calendrical::Calendrical,
    chrono::{ChronologyKind, Iso},
    period::Period,
    rule::{DateTimeFieldRule, Field},
    utils, CalendricalError, CalendricalResult, NANOS_PER_DAY, NANOS_PER_SECOND,
};

const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND as i128;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;

/// A time of day, from midnight to one nanosecond before the next midnight.
///
/// Arithmetic on `LocalTime` wraps around midnight. The `*_with_overflow`
/// forms additionally report the number of days that were crossed.
///
/// ```rust
/// use calendrical_rs::LocalTime;
///
/// let time = LocalTime::of_hms(23, 30, 0).unwrap();
/// assert_eq!(time.plus_hours(1), LocalTime::of_hour_minute(0, 30).unwrap());
///
/// let overflow = time.plus_minutes_with_overflow(90);
/// assert_eq!(overflow.time.to_string(), "01:00");
/// assert_eq!(overflow.days, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    hour: u8,
    minute: u8,
    second: u8,
    nano: u32,
}

/// A time of day together with the number of days an operation crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOverflow {
    /// The resulting time of day.
    pub time: LocalTime,
    /// The number of whole days crossed, negative when moving backwards.
    pub days: i64,
}

// ==== Private API ====

impl LocalTime {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nano: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nano,
        }
    }

    /// Splits a nanosecond of day known to be in range into its fields.
    const fn from_nano_of_day_unchecked(nano_of_day: i64) -> Self {
        let second_of_day = nano_of_day / NANOS_PER_SECOND;
        Self::new_unchecked(
            (second_of_day / 3600) as u8,
            (second_of_day / 60 % 60) as u8,
            (second_of_day % 60) as u8,
            (nano_of_day % NANOS_PER_SECOND) as u32,
        )
    }

    /// Adds `nanos` to this time, returning the wrapped time and the days
    /// crossed.
    pub(crate) fn add_nanos(&self, nanos: i128) -> TimeOverflow {
        let total = i128::from(self.to_nano_of_day()) + nanos;
        let nanos_per_day = i128::from(NANOS_PER_DAY);
        // Callers add at most a few multiples of i64::MAX hours, so the days fit an i64.
        let days = total.div_euclid(nanos_per_day) as i64;
        let nano_of_day = total.rem_euclid(nanos_per_day) as i64;
        TimeOverflow {
            time: Self::from_nano_of_day_unchecked(nano_of_day),
            days,
        }
    }
}

// ==== Public API ====

impl LocalTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: Self = Self::new_unchecked(0, 0, 0, 0);
    /// Midday, `12:00`.
    pub const MIDDAY: Self = Self::new_unchecked(12, 0, 0, 0);
    /// The earliest time of day.
    pub const MIN: Self = Self::MIDNIGHT;
    /// The latest time of day, `23:59:59.999999999`.
    pub const MAX: Self = Self::new_unchecked(23, 59, 59, 999_999_999);

    pub fn of_hour_minute(hour: i32, minute: i32) -> CalendricalResult<Self> {
        Self::of_hms_nano(hour, minute, 0, 0)
    }

    pub fn of_hms(hour: i32, minute: i32, second: i32) -> CalendricalResult<Self> {
        Self::of_hms_nano(hour, minute, second, 0)
    }

    /// Creates a new time, validating each field against its ISO rule.
    pub fn of_hms_nano(hour: i32, minute: i32, second: i32, nano: i32) -> CalendricalResult<Self> {
        let hour = Iso::hour_of_day_rule().check_value(hour)?;
        let minute = Iso::minute_of_hour_rule().check_value(minute)?;
        let second = Iso::second_of_minute_rule().check_value(second)?;
        let nano = Iso::nano_of_second_rule().check_value(nano)?;
        Ok(Self::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            nano as u32,
        ))
    }

    /// Creates the time `second_of_day` seconds after midnight.
    pub fn from_second_of_day(second_of_day: i64) -> CalendricalResult<Self> {
        let second_of_day = Iso::second_of_day_rule().check_value(second_of_day)?;
        Ok(Self::from_nano_of_day_unchecked(
            i64::from(second_of_day) * NANOS_PER_SECOND,
        ))
    }

    pub fn from_second_of_day_with_nanos(
        second_of_day: i64,
        nano_of_second: i64,
    ) -> CalendricalResult<Self> {
        let second_of_day = Iso::second_of_day_rule().check_value(second_of_day)?;
        let nano = Iso::nano_of_second_rule().check_value(nano_of_second)?;
        Ok(Self::from_nano_of_day_unchecked(
            i64::from(second_of_day) * NANOS_PER_SECOND + i64::from(nano),
        ))
    }

    /// Creates the time `nano_of_day` nanoseconds after midnight.
    pub fn from_nano_of_day(nano_of_day: i64) -> CalendricalResult<Self> {
        if !(0..NANOS_PER_DAY).contains(&nano_of_day) {
            return Err(CalendricalError::general(alloc::format!(
                "Nano of day {nano_of_day} is not in the range 0 to {}",
                NANOS_PER_DAY - 1
            )));
        }
        Ok(Self::from_nano_of_day_unchecked(nano_of_day))
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    #[must_use]
    pub const fn nano(&self) -> u32 {
        self.nano
    }

    #[must_use]
    pub const fn to_second_of_day(&self) -> i32 {
        self.hour as i32 * 3600 + self.minute as i32 * 60 + self.second as i32
    }

    #[must_use]
    pub const fn to_nano_of_day(&self) -> i64 {
        self.to_second_of_day() as i64 * NANOS_PER_SECOND + self.nano as i64
    }

    // ==== With ====

    pub fn with_hour(&self, hour: i32) -> CalendricalResult<Self> {
        let hour = Iso::hour_of_day_rule().check_value(hour)?;
        Ok(Self {
            hour: hour as u8,
            ..*self
        })
    }

    pub fn with_minute(&self, minute: i32) -> CalendricalResult<Self> {
        let minute = Iso::minute_of_hour_rule().check_value(minute)?;
        Ok(Self {
            minute: minute as u8,
            ..*self
        })
    }

    pub fn with_second(&self, second: i32) -> CalendricalResult<Self> {
        let second = Iso::second_of_minute_rule().check_value(second)?;
        Ok(Self {
            second: second as u8,
            ..*self
        })
    }

    pub fn with_nano(&self, nano: i32) -> CalendricalResult<Self> {
        let nano = Iso::nano_of_second_rule().check_value(nano)?;
        Ok(Self {
            nano: nano as u32,
            ..*self
        })
    }

    // ==== Arithmetic ====

    #[must_use]
    pub fn plus_hours_with_overflow(&self, hours: i64) -> TimeOverflow {
        self.add_nanos(i128::from(hours) * NANOS_PER_HOUR)
    }

    #[must_use]
    pub fn plus_minutes_with_overflow(&self, minutes: i64) -> TimeOverflow {
        self.add_nanos(i128::from(minutes) * NANOS_PER_MINUTE)
    }

    #[must_use]
    pub fn plus_seconds_with_overflow(&self, seconds: i64) -> TimeOverflow {
        self.add_nanos(i128::from(seconds) * i128::from(NANOS_PER_SECOND))
    }

    #[must_use]
    pub fn plus_nanos_with_overflow(&self, nanos: i64) -> TimeOverflow {
        self.add_nanos(nanos.into())
    }

    /// Adds the hours, minutes, seconds and nanoseconds of `period`,
    /// ignoring its date part.
    #[must_use]
    pub fn plus_period_with_overflow(&self, period: &Period) -> TimeOverflow {
        self.add_nanos(period.time_as_nanos())
    }

    #[must_use]
    pub fn plus_hours(&self, hours: i64) -> Self {
        self.plus_hours_with_overflow(hours).time
    }

    #[must_use]
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        self.plus_minutes_with_overflow(minutes).time
    }

    #[must_use]
    pub fn plus_seconds(&self, seconds: i64) -> Self {
        self.plus_seconds_with_overflow(seconds).time
    }

    #[must_use]
    pub fn plus_nanos(&self, nanos: i64) -> Self {
        self.plus_nanos_with_overflow(nanos).time
    }

    #[must_use]
    pub fn plus_period(&self, period: &Period) -> Self {
        self.plus_period_with_overflow(period).time
    }

    #[must_use]
    pub fn minus_hours(&self, hours: i64) -> Self {
        self.add_nanos(-i128::from(hours) * NANOS_PER_HOUR).time
    }

    #[must_use]
    pub fn minus_minutes(&self, minutes: i64) -> Self {
        self.add_nanos(-i128::from(minutes) * NANOS_PER_MINUTE).time
    }

    #[must_use]
    pub fn minus_seconds(&self, seconds: i64) -> Self {
        self.add_nanos(-i128::from(seconds) * i128::from(NANOS_PER_SECOND))
            .time
    }

    #[must_use]
    pub fn minus_nanos(&self, nanos: i64) -> Self {
        self.add_nanos(-i128::from(nanos)).time
    }

    #[must_use]
    pub fn minus_period(&self, period: &Period) -> Self {
        self.add_nanos(-period.time_as_nanos()).time
    }

    /// Returns whether this time is in the second half of the day.
    #[inline]
    #[must_use]
    pub const fn is_pm(&self) -> bool {
        self.hour >= 12
    }
}

impl Calendrical for LocalTime {
    /// Answers the ISO time-of-day rules.
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
        if rule.chronology_kind() != ChronologyKind::Iso {
            return None;
        }
        let value = match rule.field() {
            Field::HourOfDay => self.hour.into(),
            Field::MinuteOfHour => self.minute.into(),
            Field::SecondOfMinute => self.second.into(),
            Field::NanoOfSecond => self.nano as i32,
            Field::HourOfAmPm => i32::from(self.hour % 12),
            Field::AmPmOfDay => i32::from(self.is_pm()),
            Field::SecondOfDay => self.to_second_of_day(),
            Field::MinuteOfDay => self.to_second_of_day() / 60,
            _ => return None,
        };
        Some(value)
    }
}

impl Writeable for LocalTime {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        utils::write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        utils::write_padded_u8(self.minute, sink)?;
        if self.second == 0 && self.nano == 0 {
            return Ok(());
        }
        sink.write_char(':')?;
        utils::write_padded_u8(self.second, sink)?;
        if self.nano != 0 {
            sink.write_char('.')?;
            utils::write_nano_fraction(self.nano, sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match (self.second, self.nano) {
            (0, 0) => LengthHint::exact(5),
            (_, 0) => LengthHint::exact(8),
            _ => LengthHint::between(12, 18),
        }
    }
}

impl_display_with_writeable!(LocalTime);

impl TimeOverflow {
    /// Returns whether the operation stayed within the same day.
    #[inline]
    #[must_use]
    pub const fn is_same_day(&self) -> bool {
        self.days == 0
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{LocalTime, TimeOverflow};
    use crate::{chrono::Iso, error::ErrorKind, period::Period, Calendrical, NANOS_PER_DAY};

    fn time(hour: i32, minute: i32, second: i32, nano: i32) -> LocalTime {
        LocalTime::of_hms_nano(hour, minute, second, nano).unwrap()
    }

    #[test]
    fn display() {
        assert_eq!(LocalTime::MIDNIGHT.to_string(), "00:00");
        assert_eq!(time(12, 30, 0, 0).to_string(), "12:30");
        assert_eq!(time(0, 0, 1, 0).to_string(), "00:00:01");
        assert_eq!(time(0, 0, 0, 100_000_000).to_string(), "00:00:00.100");
        assert_eq!(time(0, 0, 0, 100_000).to_string(), "00:00:00.000100");
        assert_eq!(time(0, 0, 0, 1).to_string(), "00:00:00.000000001");
        assert_eq!(LocalTime::MAX.to_string(), "23:59:59.999999999");
    }

    #[test]
    fn construction_is_validated() {
        let err = LocalTime::of_hms(24, 0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.bounds(), Some((0, 23)));
        assert!(LocalTime::of_hms_nano(0, 0, 0, 1_000_000_000).is_err());
        assert!(LocalTime::from_second_of_day(86_400).is_err());
        assert!(LocalTime::from_nano_of_day(NANOS_PER_DAY).is_err());
        assert!(LocalTime::from_nano_of_day(-1).is_err());
        assert_eq!(
            LocalTime::from_second_of_day(3661).unwrap(),
            time(1, 1, 1, 0)
        );
        assert_eq!(
            LocalTime::from_nano_of_day(NANOS_PER_DAY - 1).unwrap(),
            LocalTime::MAX
        );
        assert_eq!(LocalTime::MAX.to_nano_of_day(), NANOS_PER_DAY - 1);
    }

    #[test]
    fn wrapping_arithmetic() {
        let t = time(23, 59, 59, 999_999_999);
        assert_eq!(
            t.plus_nanos_with_overflow(1),
            TimeOverflow {
                time: LocalTime::MIDNIGHT,
                days: 1
            }
        );
        assert_eq!(LocalTime::MIDNIGHT.minus_nanos(1), LocalTime::MAX);
        assert_eq!(LocalTime::MIDNIGHT.plus_hours_with_overflow(-25).days, -2);
        assert_eq!(
            LocalTime::MIDNIGHT.plus_hours_with_overflow(-25).time,
            time(23, 0, 0, 0)
        );
        assert_eq!(
            LocalTime::MIDDAY.plus_hours(i64::MAX),
            LocalTime::MIDDAY.plus_hours(i64::MAX % 24)
        );
        assert_eq!(
            LocalTime::MIDDAY.minus_minutes(i64::MIN),
            LocalTime::MIDDAY.plus_minutes(i64::MAX).plus_minutes(1)
        );
    }

    #[test]
    fn period_ignores_date_part() {
        let period = Period::new(1, 2, 3, 4, 5, 6, 7);
        let overflow = time(22, 0, 0, 0).plus_period_with_overflow(&period);
        assert_eq!(overflow.time, time(2, 5, 6, 7));
        assert_eq!(overflow.days, 1);
        assert_eq!(
            time(2, 5, 6, 7).minus_period(&period),
            time(22, 0, 0, 0)
        );
    }

    #[test]
    fn calendrical_fields() {
        let t = time(15, 4, 5, 6);
        assert_eq!(t.get(Iso::hour_of_day_rule()), Some(15));
        assert_eq!(t.get(Iso::hour_of_am_pm_rule()), Some(3));
        assert_eq!(t.get(Iso::am_pm_of_day_rule()), Some(1));
        assert_eq!(t.get(Iso::minute_of_day_rule()), Some(15 * 60 + 4));
        assert_eq!(t.get(Iso::nano_of_second_rule()), Some(6));
        assert_eq!(t.get(Iso::day_of_month_rule()), None);
    }
}
