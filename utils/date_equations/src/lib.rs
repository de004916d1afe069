//! # Date Equations
//!
//! Date Equations is a library focused on implementing
//! small calendar calculations that convert between a
//! calendar's year, month and day and a count of days
//! relative to the Unix epoch (1970-01-01 in the proleptic
//! Gregorian calendar).
//!
//! The Gregorian equations follow Howard Hinnant's
//! `days_from_civil` and `civil_from_days` algorithms,
//! computed with 128-bit intermediates so that any `i64`
//! epoch day can be converted without overflow.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! let date = gregorian::ymd_from_epoch_days(0);
//! assert_eq!(date, (1970, 1, 1));
//! assert_eq!(gregorian::epoch_days_from_ymd(284, 8, 29), -615_558);
//! ```
#![no_std]

pub mod gregorian;

/// Returns the ISO day of week for an epoch day, where Monday is 1 and
/// Sunday is 7.
///
/// 1970-01-01 was a Thursday.
#[inline]
pub const fn iso_day_of_week(epoch_days: i64) -> u8 {
    ((epoch_days as i128 + 3).rem_euclid(7) + 1) as u8
}

/// Saturates a 128-bit intermediate into the `i64` domain.
#[inline]
pub(crate) const fn saturate(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

#[cfg(test)]
mod tests {
    use super::iso_day_of_week;

    #[test]
    fn day_of_week_anchor() {
        assert_eq!(iso_day_of_week(0), 4);
        assert_eq!(iso_day_of_week(4), 1);
        assert_eq!(iso_day_of_week(-1), 3);
        assert_eq!(iso_day_of_week(-4), 7);
        assert!((1..=7).contains(&iso_day_of_week(i64::MAX)));
        assert!((1..=7).contains(&iso_day_of_week(i64::MIN)));
    }
}
