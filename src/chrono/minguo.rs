//! The Minguo chronology, used in the Republic of China.
//!
//! Minguo dates share the months and leap years of the ISO chronology, with
//! years counted from 1912 ISO, the founding of the Republic. Year 1 is the
//! first year of the `ROC` era, and years before it belong to `BEFORE_ROC`.

use core::fmt;

use date_equations::gregorian;
use icu_locale::Locale;
use tinystr::tinystr;

use super::{AnyDate, CalendarSystem, ChronoDate, ChronologyKind, EraYear};
use crate::{
    options::PeriodUnit,
    rule::{DateTimeFieldRule, Field, RuleSpec},
    text::TextStyle,
    utils,
};

/// A date in the Minguo chronology.
pub type MinguoDate = ChronoDate<Minguo>;

/// The Minguo chronology.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minguo;

/// The offset between ISO and Minguo years.
const YEARS_DIFFERENCE: i32 = 1911;

const MIN_YEAR: i32 = -999_999_999 - YEARS_DIFFERENCE;
const MAX_YEAR: i32 = 999_999_999 - YEARS_DIFFERENCE;

/// The era of years before year 1.
pub const BEFORE_ROC: i32 = 0;
/// The era starting with year 1.
pub const ROC: i32 = 1;

const fn rule(
    field: Field,
    unit: PeriodUnit,
    range: Option<PeriodUnit>,
    minimum: i32,
    maximum: i32,
) -> RuleSpec {
    RuleSpec::new(ChronologyKind::Minguo, field, unit, range, minimum, maximum)
}

static ERA: DateTimeFieldRule = DateTimeFieldRule::new(
    rule(Field::Era, PeriodUnit::Eras, None, BEFORE_ROC, ROC).with_text(era_text),
);
static YEAR_OF_ERA: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::YearOfEra,
    PeriodUnit::Years,
    Some(PeriodUnit::Eras),
    1,
    1 - MIN_YEAR,
));
static YEAR: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::Year,
    PeriodUnit::Years,
    None,
    MIN_YEAR,
    MAX_YEAR,
));
static MONTH_OF_YEAR: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::MonthOfYear,
    PeriodUnit::Months,
    Some(PeriodUnit::Years),
    1,
    12,
));
static DAY_OF_MONTH: DateTimeFieldRule = DateTimeFieldRule::new(
    rule(
        Field::DayOfMonth,
        PeriodUnit::Days,
        Some(PeriodUnit::Months),
        1,
        31,
    )
    .with_smallest_maximum(28),
);
static DAY_OF_YEAR: DateTimeFieldRule = DateTimeFieldRule::new(
    rule(
        Field::DayOfYear,
        PeriodUnit::Days,
        Some(PeriodUnit::Years),
        1,
        366,
    )
    .with_smallest_maximum(365),
);
static DAY_OF_WEEK: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::DayOfWeek,
    PeriodUnit::Days,
    Some(PeriodUnit::Weeks),
    1,
    7,
));

impl Minguo {
    /// The era, `BEFORE_ROC` (0) or `ROC` (1).
    #[inline]
    #[must_use]
    pub fn era_rule() -> &'static DateTimeFieldRule {
        &ERA
    }

    #[inline]
    #[must_use]
    pub fn year_of_era_rule() -> &'static DateTimeFieldRule {
        &YEAR_OF_ERA
    }

    #[inline]
    #[must_use]
    pub fn year_rule() -> &'static DateTimeFieldRule {
        &YEAR
    }

    #[inline]
    #[must_use]
    pub fn month_of_year_rule() -> &'static DateTimeFieldRule {
        &MONTH_OF_YEAR
    }

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

    fn iso_year(year: i32) -> i64 {
        i64::from(year) + i64::from(YEARS_DIFFERENCE)
    }
}

impl CalendarSystem for Minguo {
    const KIND: ChronologyKind = ChronologyKind::Minguo;
    const MIN_YEAR: i32 = MIN_YEAR;
    const MAX_YEAR: i32 = MAX_YEAR;
    const MONTHS_IN_YEAR: u8 = 12;

    fn is_leap(year: i32) -> bool {
        gregorian::is_leap_year(Self::iso_year(year))
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        gregorian::days_in_month(Self::iso_year(year), month)
    }

    fn max_days_in_month(month: u8) -> u8 {
        gregorian::days_in_month(2000, month)
    }

    fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
        gregorian::day_of_year(Self::iso_year(year), month, day)
    }

    fn is_leap_day(month: u8, day: u8) -> bool {
        month == 2 && day == 29
    }

    fn epoch_day_from_ymd(year: i32, month: u8, day: u8) -> i64 {
        gregorian::epoch_days_from_ymd(Self::iso_year(year), month, day)
    }

    fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_day);
        (year - i64::from(YEARS_DIFFERENCE), month, day)
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

    fn field_rule(field: Field) -> Option<&'static DateTimeFieldRule> {
        let rule = match field {
            Field::Era => &ERA,
            Field::YearOfEra => &YEAR_OF_ERA,
            Field::Year => &YEAR,
            Field::MonthOfYear => &MONTH_OF_YEAR,
            Field::DayOfMonth => &DAY_OF_MONTH,
            Field::DayOfYear => &DAY_OF_YEAR,
            Field::DayOfWeek => &DAY_OF_WEEK,
            _ => return None,
        };
        Some(rule)
    }

    fn era_of(year: i32) -> Option<EraYear> {
        Some(if year >= 1 {
            EraYear {
                era: ROC,
                code: tinystr!(16, "roc"),
                year_of_era: year,
            }
        } else {
            EraYear {
                era: BEFORE_ROC,
                code: tinystr!(16, "roc-inverse"),
                year_of_era: 1 - year,
            }
        })
    }

    fn year_from_era(era: i32, year_of_era: i32) -> Option<i64> {
        match era {
            ROC => Some(year_of_era.into()),
            BEFORE_ROC => Some(1 - i64::from(year_of_era)),
            _ => None,
        }
    }

    fn wrap(date: MinguoDate) -> AnyDate {
        AnyDate::Minguo(date)
    }

    fn write_date<W: fmt::Write + ?Sized>(
        year: i32,
        month: u8,
        day: u8,
        sink: &mut W,
    ) -> fmt::Result {
        sink.write_str("Minguo ")?;
        let year_of_era = if year >= 1 {
            sink.write_str("ROC ")?;
            i64::from(year)
        } else {
            sink.write_str("BEFORE_ROC ")?;
            1 - i64::from(year)
        };
        write!(sink, "{year_of_era}-")?;
        utils::write_padded_u8(month, sink)?;
        sink.write_char('-')?;
        utils::write_padded_u8(day, sink)
    }
}

fn era_text(locale: &Locale, style: TextStyle) -> Option<&'static [(i32, &'static str)]> {
    const FULL: &[(i32, &str)] = &[(BEFORE_ROC, "Before R.O.C."), (ROC, "Minguo")];
    const SHORT: &[(i32, &str)] = &[(BEFORE_ROC, "B.R.O.C."), (ROC, "R.O.C.")];
    if locale.id.language.as_str() != "en" {
        return None;
    }
    Some(match style {
        TextStyle::Full => FULL,
        TextStyle::Short | TextStyle::Narrow => SHORT,
    })
}
