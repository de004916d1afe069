//! The Coptic chronology.
//!
//! The Coptic calendar has twelve months of 30 days followed by a thirteenth
//! month of five days, or six days in a leap year. Every fourth year is a leap
//! year, the year before a year divisible by four. Year 1 began on 0284-08-29
//! ISO.

use core::fmt;

use date_equations::gregorian;
use icu_calendar::{
    cal::{Coptic as CopticCalendar, Iso as IsoCalendar},
    Date,
};
use icu_locale::Locale;

use super::{AnyDate, CalendarSystem, ChronoDate, ChronologyKind};
use crate::{
    options::PeriodUnit,
    rule::{DateTimeFieldRule, Field, RuleSpec},
    text::TextStyle,
    utils,
};

/// A date in the Coptic chronology.
pub type CopticDate = ChronoDate<Coptic>;

/// The Coptic chronology.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coptic;

/// The epoch day of 0001-01-01 (Coptic).
const MIN_EPOCH_DAY: i64 = -615_558;
/// The epoch day of 9999-13-06 (Coptic).
const MAX_EPOCH_DAY: i64 = 3_036_576;

fn epoch_day_of(date: &Date<IsoCalendar>) -> i64 {
    gregorian::epoch_days_from_ymd(
        date.extended_year().into(),
        date.month().ordinal,
        date.day_of_month().0,
    )
}

static YEAR: DateTimeFieldRule = DateTimeFieldRule::new(RuleSpec::new(
    ChronologyKind::Coptic,
    Field::Year,
    PeriodUnit::Years,
    None,
    1,
    9999,
));
static MONTH_OF_YEAR: DateTimeFieldRule = DateTimeFieldRule::new(
    RuleSpec::new(
        ChronologyKind::Coptic,
        Field::MonthOfYear,
        PeriodUnit::Months,
        Some(PeriodUnit::Years),
        1,
        13,
    )
    .with_text(month_text),
);
static DAY_OF_MONTH: DateTimeFieldRule = DateTimeFieldRule::new(
    RuleSpec::new(
        ChronologyKind::Coptic,
        Field::DayOfMonth,
        PeriodUnit::Days,
        Some(PeriodUnit::Months),
        1,
        30,
    )
    .with_smallest_maximum(5),
);
static DAY_OF_YEAR: DateTimeFieldRule = DateTimeFieldRule::new(
    RuleSpec::new(
        ChronologyKind::Coptic,
        Field::DayOfYear,
        PeriodUnit::Days,
        Some(PeriodUnit::Years),
        1,
        366,
    )
    .with_smallest_maximum(365),
);
static DAY_OF_WEEK: DateTimeFieldRule = DateTimeFieldRule::new(RuleSpec::new(
    ChronologyKind::Coptic,
    Field::DayOfWeek,
    PeriodUnit::Days,
    Some(PeriodUnit::Weeks),
    1,
    7,
));

impl Coptic {
    #[inline]
    #[must_use]
    pub fn year_rule() -> &'static DateTimeFieldRule {
        &YEAR
    }

    /// The month of year, 1 to 13.
    #[inline]
    #[must_use]
    pub fn month_of_year_rule() -> &'static DateTimeFieldRule {
        &MONTH_OF_YEAR
    }

    /// The day of month, 1 to 30. The thirteenth month has 5 or 6 days.
    #[inline]
    #[must_use]
    pub fn day_of_month_rule() -> &'static DateTimeFieldRule {
        &DAY_OF_MONTH
    }

    #[inline]
    #[must_use]
    pub fn day_of_year_rule() -> &'static DateTimeFieldRule {
        &DAY_OF_YEAR
    }

    #[inline]
    #[must_use]
    pub fn day_of_week_rule() -> &'static DateTimeFieldRule {
        &DAY_OF_WEEK
    }
}

impl CalendarSystem for Coptic {
    const KIND: ChronologyKind = ChronologyKind::Coptic;
    const MIN_YEAR: i32 = 1;
    const MAX_YEAR: i32 = 9999;
    const MONTHS_IN_YEAR: u8 = 13;

    fn is_leap(year: i32) -> bool {
        Date::try_new_coptic(year, 13, 6).is_ok()
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        Date::try_new_coptic(year, month, 1).map_or(0, |date| date.days_in_month())
    }

    fn max_days_in_month(month: u8) -> u8 {
        match month {
            1..=12 => 30,
            13 => 6,
            _ => 0,
        }
    }

    fn day_of_year(_year: i32, month: u8, day: u8) -> u16 {
        u16::from(month.saturating_sub(1)) * 30 + u16::from(day)
    }

    fn is_leap_day(month: u8, day: u8) -> bool {
        month == 13 && day == 6
    }

    fn epoch_day_from_ymd(year: i32, month: u8, day: u8) -> i64 {
        // `ChronoDate` only holds valid dates.
        Date::try_new_coptic(year, month, day)
            .map_or(MIN_EPOCH_DAY, |date| epoch_day_of(&date.to_iso()))
    }

    fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
        // Years outside of 1..=9999 are only estimated, which is enough for
        // the year rule to reject them.
        if epoch_day < MIN_EPOCH_DAY {
            return (-((MIN_EPOCH_DAY - 1).saturating_sub(epoch_day) / 366), 1, 1);
        }
        if epoch_day > MAX_EPOCH_DAY {
            return (10_000 + epoch_day.saturating_sub(MAX_EPOCH_DAY + 1) / 366, 1, 1);
        }
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_day);
        // The ISO year of a Coptic date lies between 284 and 10283.
        let Ok(iso) = Date::try_new_iso(year as i32, month, day) else {
            return (year, 0, 0);
        };
        let date = iso.to_calendar(CopticCalendar);
        (
            date.extended_year().into(),
            date.month().ordinal,
            date.day_of_month().0,
        )
    }

    fn year_rule() -> &'static DateTimeFieldRule {
        &YEAR
    }

    fn month_of_year_rule() -> &'static DateTimeFieldRule {
        &MONTH_OF_YEAR
    }

    fn day_of_month_rule() -> &'static DateTimeFieldRule {
        &DAY_OF_MONTH
    }

    fn day_of_year_rule() -> &'static DateTimeFieldRule {
        &DAY_OF_YEAR
    }

    fn day_of_week_rule() -> &'static DateTimeFieldRule {
        &DAY_OF_WEEK
    }

    fn wrap(date: CopticDate) -> AnyDate {
        AnyDate::Coptic(date)
    }

    fn write_date<W: fmt::Write + ?Sized>(
        year: i32,
        month: u8,
        day: u8,
        sink: &mut W,
    ) -> fmt::Result {
        utils::write_year(year, sink)?;
        sink.write_char('-')?;
        utils::write_padded_u8(month, sink)?;
        sink.write_char('-')?;
        utils::write_padded_u8(day, sink)?;
        sink.write_str(" (Coptic)")
    }
}

fn month_text(locale: &Locale, style: TextStyle) -> Option<&'static [(i32, &'static str)]> {
    const MONTHS: &[(i32, &str)] = &[
        (1, "Tout"),
        (2, "Baba"),
        (3, "Hator"),
        (4, "Kiahk"),
        (5, "Toba"),
        (6, "Amshir"),
        (7, "Baramhat"),
        (8, "Baramouda"),
        (9, "Bashans"),
        (10, "Paona"),
        (11, "Epep"),
        (12, "Mesra"),
        (13, "Nasie"),
    ];
    match style {
        TextStyle::Full | TextStyle::Short if locale.id.language.as_str() == "en" => Some(MONTHS),
        _ => None,
    }
}
