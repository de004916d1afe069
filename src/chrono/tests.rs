use alloc::{string::ToString, vec, vec::Vec};
use core::cmp::Ordering;

use super::{
    AnyDate, ChronoLocalDate, ChronologyKind, Coptic, CopticDate, Iso, LocalDate, Minguo,
    MinguoDate,
};
use crate::{error::ErrorKind, Calendrical, DayOfWeek, Period};

fn iso(year: i32, month: i32, day: i32) -> LocalDate {
    LocalDate::try_new(year, month, day).unwrap()
}

fn coptic(year: i32, month: i32, day: i32) -> CopticDate {
    CopticDate::try_new(year, month, day).unwrap()
}

fn minguo(year: i32, month: i32, day: i32) -> MinguoDate {
    MinguoDate::try_new(year, month, day).unwrap()
}

// ==== Coptic ====

#[test]
fn coptic_epoch() {
    let first = coptic(1, 1, 1);
    assert_eq!(first.to_epoch_day(), -615_558);
    assert_eq!(first.to_chronology::<Iso>().unwrap(), iso(284, 8, 29));
    assert_eq!(first.to_string(), "0001-01-01 (Coptic)");
    assert!(first.minus_days(1).is_err());
}

#[test]
fn coptic_leap_years() {
    assert!(coptic(3, 1, 1).is_leap_year());
    assert!(coptic(7, 1, 1).is_leap_year());
    assert!(!coptic(8, 1, 1).is_leap_year());
    assert_eq!(coptic(7, 13, 1).length_of_month(), 6);
    assert_eq!(coptic(8, 13, 1).length_of_month(), 5);
    assert_eq!(coptic(7, 1, 1).length_of_year(), 366);
    assert!(coptic(7, 13, 6).is_leap_day());
    assert!(!coptic(7, 13, 5).is_leap_day());
}

#[test]
fn coptic_construction_errors() {
    let err = CopticDate::try_new(1, 1, 31).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.rule(), Some(Coptic::day_of_month_rule().id()));
    assert_eq!(err.bounds(), Some((1, 30)));

    let err = CopticDate::try_new(8, 13, 6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCombination);
    assert_eq!(err.value(), Some(6));
    assert_eq!(err.bounds(), Some((1, 5)));

    let err = CopticDate::try_new(1, 14, 1).unwrap_err();
    assert_eq!(err.rule(), Some(Coptic::month_of_year_rule().id()));

    // The year is reported before the month and day.
    let err = CopticDate::try_new(0, 14, 40).unwrap_err();
    assert_eq!(err.rule(), Some(Coptic::year_rule().id()));
    assert_eq!(err.value(), Some(0));
}

#[test]
fn coptic_with_and_plus() {
    assert_eq!(coptic(7, 13, 6).with_year(8).unwrap(), coptic(8, 13, 5));
    assert_eq!(coptic(1234, 13, 1).plus_days(5).unwrap(), coptic(1235, 1, 1));
    assert_eq!(coptic(1, 12, 30).with_month(13).unwrap(), coptic(1, 13, 5));
    assert_eq!(coptic(1, 1, 1).plus_months(13).unwrap(), coptic(2, 1, 1));
    assert_eq!(coptic(2, 1, 30).minus_months(1).unwrap(), coptic(1, 13, 5));
    assert_eq!(coptic(7, 13, 6).plus_years(4).unwrap(), coptic(11, 13, 6));
    assert_eq!(
        coptic(5, 5, 5).with_day_of_year(366).unwrap_err().kind(),
        ErrorKind::InvalidCombination
    );
    assert_eq!(coptic(7, 5, 5).with_day_of_year(366).unwrap(), coptic(7, 13, 6));
    assert_eq!(coptic(7, 13, 1).with_last_day_of_month(), coptic(7, 13, 6));
    assert_eq!(coptic(7, 5, 5).with_day(31).unwrap_err().kind(), ErrorKind::InvalidValue);
}

#[test]
fn plus_years_overflow_fails_with_year_rule() {
    let date = coptic(1, 1, 1);
    let err = date.plus_years(i64::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.rule(), Some(Coptic::year_rule().id()));
    assert!(date.plus_days(i64::MAX).is_err());
    assert!(date.minus_months(i64::MIN).is_err());
    assert!(iso(2012, 1, 1).plus_weeks(i64::MAX).is_err());
}

// ==== ISO ====

#[test]
fn iso_epoch_and_display() {
    assert_eq!(iso(1970, 1, 1).to_epoch_day(), 0);
    assert_eq!(LocalDate::from_epoch_day(-1).unwrap(), iso(1969, 12, 31));
    assert_eq!(iso(2012, 10, 29).to_string(), "2012-10-29");
    assert_eq!(iso(10_000, 1, 1).to_string(), "+10000-01-01");
    assert_eq!(iso(-1, 1, 1).to_string(), "-0001-01-01");
    assert_eq!(iso(0, 12, 31).to_string(), "0000-12-31");
}

#[test]
fn iso_month_arithmetic_clamps() {
    assert_eq!(iso(2011, 1, 31).plus_months(1).unwrap(), iso(2011, 2, 28));
    assert_eq!(iso(2012, 1, 31).plus_months(1).unwrap(), iso(2012, 2, 29));
    assert_eq!(iso(2012, 2, 29).plus_years(1).unwrap(), iso(2013, 2, 28));
    assert_eq!(iso(2012, 3, 31).minus_months(13).unwrap(), iso(2011, 2, 28));
    assert_eq!(
        iso(2012, 1, 31)
            .plus_period(&Period::new(1, 1, 1, 0, 0, 0, 0))
            .unwrap(),
        iso(2013, 3, 1)
    );
    assert_eq!(
        iso(2013, 3, 1)
            .minus_period(&Period::new(1, 1, 1, 0, 0, 0, 0))
            .unwrap(),
        iso(2012, 1, 31)
    );
}

#[test]
fn iso_year_bounds() {
    let max = iso(999_999_999, 12, 31);
    assert!(max.plus_days(1).is_err());
    assert!(LocalDate::try_new(1_000_000_000, 1, 1).is_err());
    let min = iso(-999_999_999, 1, 1);
    assert!(min.minus_days(1).is_err());
    assert_eq!(LocalDate::from_epoch_day(min.to_epoch_day()).unwrap(), min);
}

#[test]
fn iso_from_year_day() {
    assert_eq!(LocalDate::from_year_day(2012, 60).unwrap(), iso(2012, 2, 29));
    assert_eq!(LocalDate::from_year_day(2011, 60).unwrap(), iso(2011, 3, 1));
    let err = LocalDate::from_year_day(2011, 366).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCombination);
    assert_eq!(err.bounds(), Some((1, 365)));
}

#[test]
fn iso_week_fields() {
    let date = iso(2008, 12, 29);
    assert_eq!(date.get(Iso::week_based_year_rule()), Some(2009));
    assert_eq!(date.get(Iso::week_of_week_based_year_rule()), Some(1));
    let date = iso(2010, 1, 3);
    assert_eq!(date.get(Iso::week_based_year_rule()), Some(2009));
    assert_eq!(date.get(Iso::week_of_week_based_year_rule()), Some(53));
    assert_eq!(Iso::weeks_in_week_based_year(2009), 53);
    assert_eq!(Iso::weeks_in_week_based_year(2010), 52);
    // 1992 is a leap year starting on a Wednesday.
    assert_eq!(Iso::weeks_in_week_based_year(1992), 53);
    assert_eq!(Iso::date_from_week(2009, 53, 7).unwrap(), date);
    assert_eq!(
        Iso::week_of_week_based_year_rule().maximum_value_in(&iso(2010, 6, 1)),
        52
    );
}

#[test]
fn week_based_year_stays_in_range() {
    // -999999999-01-01 is a Sunday in the last week of the year before.
    assert_eq!(iso(-999_999_999, 1, 1).get(Iso::week_based_year_rule()), None);
    assert_eq!(
        iso(-999_999_999, 1, 2).get(Iso::week_based_year_rule()),
        Some(-999_999_999)
    );
    assert_eq!(
        iso(999_999_999, 12, 31).get(Iso::week_based_year_rule()),
        Some(999_999_999)
    );
}

#[test]
fn iso_fields() {
    let date = iso(1945, 11, 12);
    assert_eq!(date.get(Iso::year_rule()), Some(1945));
    assert_eq!(date.get(Iso::quarter_of_year_rule()), Some(4));
    assert_eq!(date.get(Iso::month_of_quarter_rule()), Some(2));
    assert_eq!(date.get(Iso::day_of_year_rule()), Some(316));
    assert_eq!(date.get(Iso::era_rule()), Some(1));
    assert_eq!(iso(0, 1, 1).get(Iso::era_rule()), Some(0));
    assert_eq!(iso(0, 1, 1).get(Iso::year_of_era_rule()), Some(1));
    assert_eq!(date.get(Iso::hour_of_day_rule()), None);
    assert_eq!(date.day_of_week(), DayOfWeek::Monday);
}

// ==== Minguo ====

#[test]
fn minguo_mapping() {
    assert_eq!(minguo(1, 1, 1).to_chronology::<Iso>().unwrap(), iso(1912, 1, 1));
    assert_eq!(minguo(101, 10, 29).to_chronology::<Iso>().unwrap(), iso(2012, 10, 29));
    assert_eq!(iso(1911, 12, 31).to_chronology::<Minguo>().unwrap(), minguo(0, 12, 31));
    assert!(minguo(89, 2, 29).is_leap_year());
    assert!(MinguoDate::try_new(90, 2, 29).is_err());
    assert_eq!(minguo(101, 2, 1).with_last_day_of_month(), minguo(101, 2, 29));
}

#[test]
fn minguo_eras() {
    let date = minguo(101, 10, 29);
    assert_eq!(date.era(), Some(1));
    assert_eq!(date.year_of_era(), Some(101));
    assert_eq!(date.get(Minguo::era_rule()), Some(1));
    assert_eq!(date.to_string(), "Minguo ROC 101-10-29");

    let before = minguo(0, 1, 1);
    assert_eq!(before.era(), Some(0));
    assert_eq!(before.year_of_era(), Some(1));
    assert_eq!(before.era_year().unwrap().code.as_str(), "roc-inverse");
    assert_eq!(before.to_string(), "Minguo BEFORE_ROC 1-01-01");
    assert_eq!(minguo(-10, 1, 1).year_of_era(), Some(11));
    assert_eq!(coptic(1, 1, 1).era(), None);
}

// ==== Cross-chronology ====

#[test]
fn cross_chronology_conversion() {
    let date = iso(1945, 11, 12);
    assert_eq!(date.to_chronology::<Coptic>().unwrap(), coptic(1662, 3, 3));
    assert_eq!(coptic(1662, 3, 3).to_epoch_day(), -8816);
    assert_eq!(date.get(Coptic::day_of_month_rule()), Some(3));
    assert_eq!(coptic(1662, 3, 3).get(Iso::year_rule()), Some(1945));
    assert_eq!(coptic(1662, 3, 3).get(Minguo::year_rule()), Some(34));
    // Dates before Coptic year 1 have no Coptic fields.
    assert_eq!(iso(100, 1, 1).get(Coptic::year_rule()), None);
}

#[test]
fn cross_chronology_ordering() {
    let iso_date = iso(1945, 11, 12);
    let coptic_date = coptic(1662, 3, 3);
    let minguo_date = iso_date.to_chronology::<Minguo>().unwrap();

    assert!(iso_date.is_equal(&coptic_date));
    assert!(!iso_date.is_after(&coptic_date));
    assert!(coptic_date.is_before(&iso(1945, 11, 13)));
    assert_eq!(iso_date.compare_to(&coptic_date), Ordering::Greater);
    assert_eq!(coptic_date.compare_to(&minguo_date), Ordering::Less);
    assert_eq!(iso_date.compare_to(&iso_date), Ordering::Equal);

    let mut dates: Vec<AnyDate> = vec![
        minguo_date.to_any(),
        iso(1945, 11, 11).to_any(),
        iso_date.to_any(),
        coptic_date.to_any(),
    ];
    dates.sort();
    let kinds: Vec<ChronologyKind> = dates.iter().map(|d| d.chronology().kind()).collect();
    assert_eq!(
        kinds,
        [
            ChronologyKind::Iso,
            ChronologyKind::Coptic,
            ChronologyKind::Iso,
            ChronologyKind::Minguo
        ]
    );
    assert_eq!(dates[0].to_iso(), Some(iso(1945, 11, 11)));
}

#[test]
fn equal_epoch_days_share_the_day_of_week() {
    for epoch_day in [-615_558, -8816, -1, 0, 1, 15_642, 2_932_896] {
        let iso_date = LocalDate::from_epoch_day(epoch_day).unwrap();
        let coptic_date = CopticDate::from_epoch_day(epoch_day).unwrap();
        let minguo_date = MinguoDate::from_epoch_day(epoch_day).unwrap();
        assert_eq!(iso_date.day_of_week(), coptic_date.day_of_week());
        assert_eq!(iso_date.day_of_week(), minguo_date.day_of_week());
        assert_eq!(
            iso_date.get(Iso::day_of_week_rule()),
            coptic_date.get(Coptic::day_of_week_rule())
        );
    }
}

#[test]
fn epoch_day_round_trips() {
    for epoch_day in (-615_558..-612_000).chain(-2000..2000).chain(2_930_000..2_933_000) {
        let coptic_date = CopticDate::from_epoch_day(epoch_day).unwrap();
        assert_eq!(coptic_date.to_epoch_day(), epoch_day);
        let iso_date = LocalDate::from_epoch_day(epoch_day).unwrap();
        assert_eq!(iso_date.to_epoch_day(), epoch_day);
        assert_eq!(iso_date.plus_days(1).unwrap().to_epoch_day(), epoch_day + 1);
        let minguo_date = MinguoDate::from_epoch_day(epoch_day).unwrap();
        assert_eq!(minguo_date.to_epoch_day(), epoch_day);
        assert_eq!(minguo_date.to_chronology::<Iso>().unwrap(), iso_date);
    }
}

#[test]
fn coptic_epoch_day_bounds() {
    let last = coptic(9999, 13, 6);
    assert_eq!(last.to_epoch_day(), 3_036_576);
    assert_eq!(CopticDate::from_epoch_day(3_036_576).unwrap(), last);
    assert_eq!(last.to_chronology::<Iso>().unwrap(), iso(10283, 11, 12));

    for epoch_day in [-615_559, 3_036_577, i64::MIN, i64::MAX] {
        let err = CopticDate::from_epoch_day(epoch_day).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.rule(), Some(Coptic::year_rule().id()));
    }
}

#[test]
fn year_arithmetic_round_trips() {
    let dates = [coptic(3, 13, 5), coptic(100, 6, 30), coptic(1234, 1, 1)];
    for date in dates {
        for years in [1, 4, 100, 1000] {
            assert_eq!(date.plus_years(years).unwrap().minus_years(years).unwrap(), date);
        }
    }
}

#[test]
fn chronology_objects() {
    let chronology = ChronologyKind::Coptic.chronology();
    assert_eq!(chronology.id().as_str(), "Coptic");
    assert_eq!(chronology.calendar_type().as_str(), "coptic");
    assert_eq!(chronology.months_in_year(), 13);
    assert!(chronology.is_leap_year(3));
    assert_eq!(chronology.length_of_month(3, 13), 6);
    assert_eq!(chronology.rule(crate::Field::DayOfMonth), Some(Coptic::day_of_month_rule()));
    assert!(chronology.rule(crate::Field::HourOfDay).is_none());
    let date = chronology.date(1662, 3, 3).unwrap();
    assert_eq!(date, AnyDate::Coptic(coptic(1662, 3, 3)));
    assert!(chronology.date(1662, 3, 31).is_err());

    assert_eq!("roc".parse::<ChronologyKind>().unwrap(), ChronologyKind::Minguo);
    assert_eq!("iso".parse::<ChronologyKind>().unwrap(), ChronologyKind::Iso);
    assert!("julian".parse::<ChronologyKind>().is_err());
    assert!(ChronologyKind::Coptic < ChronologyKind::Iso);
    assert!(ChronologyKind::Iso < ChronologyKind::Minguo);
}
