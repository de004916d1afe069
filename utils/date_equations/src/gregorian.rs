//! Proleptic Gregorian calendar calculations.
//!
//! Years are astronomical: year 0 is 1 BCE.

use crate::saturate;

/// The day number of 1970-01-01 counted from 0000-03-01.
const DAYS_FROM_0000_03_01_TO_EPOCH: i128 = 719_468;

const DAYS_IN_ERA: i128 = 146_097;

/// Returns whether `year` is a Gregorian leap year.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// Months outside of `1..=12` return 0.
#[inline]
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Returns the number of days in `year`.
#[inline]
pub const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the one based day of year.
pub const fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    const CUMULATIVE: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let mut doy = CUMULATIVE[(month as usize).saturating_sub(1) % 12] + day as u16;
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    doy
}

/// Returns the days since 1970-01-01 for a proleptic Gregorian date.
///
/// The month and day are not validated.
pub const fn epoch_days_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    let month = month as i128;
    let year = year as i128 - (month <= 2) as i128;
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i128 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    saturate(era * DAYS_IN_ERA + day_of_era - DAYS_FROM_0000_03_01_TO_EPOCH)
}

/// Returns the proleptic Gregorian `(year, month, day)` of an epoch day.
pub const fn ymd_from_epoch_days(epoch_days: i64) -> (i64, u8, u8) {
    let days = epoch_days as i128 + DAYS_FROM_0000_03_01_TO_EPOCH;
    let era = days.div_euclid(DAYS_IN_ERA);
    let day_of_era = days - era * DAYS_IN_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + (month <= 2) as i128;
    (saturate(year), month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch() {
        assert_eq!(epoch_days_from_ymd(1970, 1, 1), 0);
        assert_eq!(ymd_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(ymd_from_epoch_days(-1), (1969, 12, 31));
    }

    #[test]
    fn known_dates() {
        assert_eq!(epoch_days_from_ymd(2000, 3, 1), 11_017);
        assert_eq!(epoch_days_from_ymd(284, 8, 29), -615_558);
        assert_eq!(epoch_days_from_ymd(1945, 11, 12), -8_816);
        assert_eq!(ymd_from_epoch_days(-719_528), (0, 1, 1));
        assert_eq!(ymd_from_epoch_days(-719_529), (-1, 12, 31));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2012));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2011));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert_eq!(days_in_month(2012, 2), 29);
        assert_eq!(days_in_month(2011, 2), 28);
        assert_eq!(days_in_month(2011, 13), 0);
    }

    #[test]
    fn day_of_year_values() {
        assert_eq!(day_of_year(2011, 1, 1), 1);
        assert_eq!(day_of_year(2011, 3, 1), 60);
        assert_eq!(day_of_year(2012, 3, 1), 61);
        assert_eq!(day_of_year(2012, 12, 31), 366);
    }

    #[test]
    fn epoch_days_round_trip_across_eras() {
        let mut epoch_days = -1_000_000;
        while epoch_days < 1_000_000 {
            let (y, m, d) = ymd_from_epoch_days(epoch_days);
            assert_eq!(epoch_days_from_ymd(y, m, d), epoch_days);
            epoch_days += 97;
        }
    }

    #[test]
    fn extreme_epoch_days_do_not_overflow() {
        let (year, month, day) = ymd_from_epoch_days(i64::MAX);
        assert!(year > 1_000_000_000);
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
        let (year, _, _) = ymd_from_epoch_days(i64::MIN);
        assert!(year < -1_000_000_000);
    }
}
