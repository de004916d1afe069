//! The ISO-8601 chronology, the proleptic Gregorian calendar.

use core::fmt;

use date_equations::gregorian;
use icu_locale::Locale;
use tinystr::tinystr;

use super::{
    common_context_maximum, common_date_field, AnyDate, CalendarSystem, ChronoDate,
    ChronologyKind, EraYear,
};
use crate::{
    calendrical::Calendrical,
    options::PeriodUnit,
    rule::{DateTimeFieldRule, Field, RuleSpec},
    text::TextStyle,
    utils, CalendricalResult,
};

/// A date in the ISO chronology.
pub type LocalDate = ChronoDate<Iso>;

/// The ISO-8601 chronology.
///
/// The ISO chronology also owns the time-of-day rules shared by every
/// chronology.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iso;

const MIN_YEAR: i32 = -999_999_999;
const MAX_YEAR: i32 = 999_999_999;

const fn rule(
    field: Field,
    unit: PeriodUnit,
    range: Option<PeriodUnit>,
    minimum: i32,
    maximum: i32,
) -> RuleSpec {
    RuleSpec::new(ChronologyKind::Iso, field, unit, range, minimum, maximum)
}

static ERA: DateTimeFieldRule = DateTimeFieldRule::new(
    rule(Field::Era, PeriodUnit::Eras, None, 0, 1).with_text(era_text),
);
static YEAR_OF_ERA: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::YearOfEra,
    PeriodUnit::Years,
    Some(PeriodUnit::Eras),
    1,
    MAX_YEAR + 1,
));
static YEAR: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::Year,
    PeriodUnit::Years,
    None,
    MIN_YEAR,
    MAX_YEAR,
));
static QUARTER_OF_YEAR: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::QuarterOfYear,
    PeriodUnit::QuarterYears,
    Some(PeriodUnit::Years),
    1,
    4,
));
static MONTH_OF_QUARTER: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::MonthOfQuarter,
    PeriodUnit::Months,
    Some(PeriodUnit::QuarterYears),
    1,
    3,
));
static MONTH_OF_YEAR: DateTimeFieldRule = DateTimeFieldRule::new(
    rule(
        Field::MonthOfYear,
        PeriodUnit::Months,
        Some(PeriodUnit::Years),
        1,
        12,
    )
    .with_text(month_text),
);
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
static DAY_OF_WEEK: DateTimeFieldRule = DateTimeFieldRule::new(
    rule(
        Field::DayOfWeek,
        PeriodUnit::Days,
        Some(PeriodUnit::Weeks),
        1,
        7,
    )
    .with_text(day_of_week_text),
);
static WEEK_BASED_YEAR: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::WeekBasedYear,
    PeriodUnit::WeekBasedYears,
    None,
    MIN_YEAR,
    MAX_YEAR,
));
static WEEK_OF_WEEK_BASED_YEAR: DateTimeFieldRule = DateTimeFieldRule::new(
    rule(
        Field::WeekOfWeekBasedYear,
        PeriodUnit::Weeks,
        Some(PeriodUnit::WeekBasedYears),
        1,
        53,
    )
    .with_smallest_maximum(52),
);
static AM_PM_OF_DAY: DateTimeFieldRule = DateTimeFieldRule::new(
    rule(
        Field::AmPmOfDay,
        PeriodUnit::HalfDays,
        Some(PeriodUnit::Days),
        0,
        1,
    )
    .with_text(am_pm_text),
);
static HOUR_OF_AM_PM: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::HourOfAmPm,
    PeriodUnit::Hours,
    Some(PeriodUnit::HalfDays),
    0,
    11,
));
static HOUR_OF_DAY: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::HourOfDay,
    PeriodUnit::Hours,
    Some(PeriodUnit::Days),
    0,
    23,
));
static MINUTE_OF_HOUR: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::MinuteOfHour,
    PeriodUnit::Minutes,
    Some(PeriodUnit::Hours),
    0,
    59,
));
static SECOND_OF_MINUTE: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::SecondOfMinute,
    PeriodUnit::Seconds,
    Some(PeriodUnit::Minutes),
    0,
    59,
));
static NANO_OF_SECOND: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::NanoOfSecond,
    PeriodUnit::Nanos,
    Some(PeriodUnit::Seconds),
    0,
    999_999_999,
));
static MINUTE_OF_DAY: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::MinuteOfDay,
    PeriodUnit::Minutes,
    Some(PeriodUnit::Days),
    0,
    24 * 60 - 1,
));
static SECOND_OF_DAY: DateTimeFieldRule = DateTimeFieldRule::new(rule(
    Field::SecondOfDay,
    PeriodUnit::Seconds,
    Some(PeriodUnit::Days),
    0,
    24 * 60 * 60 - 1,
));

macro_rules! rule_accessors {
    ($($(#[$meta:meta])* $name:ident => $rule:ident;)+) => {
        impl Iso {
            $(
                $(#[$meta])*
                #[inline]
                #[must_use]
                pub fn $name() -> &'static DateTimeFieldRule {
                    &$rule
                }
            )+
        }
    };
}

rule_accessors! {
    /// The era, 0 (BCE) or 1 (CE).
    era_rule => ERA;
    year_of_era_rule => YEAR_OF_ERA;
    /// The proleptic year.
    year_rule => YEAR;
    quarter_of_year_rule => QUARTER_OF_YEAR;
    month_of_quarter_rule => MONTH_OF_QUARTER;
    month_of_year_rule => MONTH_OF_YEAR;
    day_of_month_rule => DAY_OF_MONTH;
    day_of_year_rule => DAY_OF_YEAR;
    /// The day of week, Monday (1) to Sunday (7).
    day_of_week_rule => DAY_OF_WEEK;
    /// The year a week-based week belongs to.
    week_based_year_rule => WEEK_BASED_YEAR;
    /// The week of a week-based year. Week 1 is the week containing the
    /// first Thursday of the year.
    week_of_week_based_year_rule => WEEK_OF_WEEK_BASED_YEAR;
    /// AM (0) or PM (1).
    am_pm_of_day_rule => AM_PM_OF_DAY;
    hour_of_am_pm_rule => HOUR_OF_AM_PM;
    hour_of_day_rule => HOUR_OF_DAY;
    minute_of_hour_rule => MINUTE_OF_HOUR;
    second_of_minute_rule => SECOND_OF_MINUTE;
    nano_of_second_rule => NANO_OF_SECOND;
    minute_of_day_rule => MINUTE_OF_DAY;
    second_of_day_rule => SECOND_OF_DAY;
}

// ==== Week-based years ====

impl Iso {
    /// Returns the number of weeks in `week_based_year`, 52 or 53.
    #[must_use]
    pub fn weeks_in_week_based_year(week_based_year: i32) -> u8 {
        let jan_first = gregorian::epoch_days_from_ymd(week_based_year.into(), 1, 1);
        match date_equations::iso_day_of_week(jan_first) {
            4 => 53,
            3 if Self::is_leap(week_based_year) => 53,
            _ => 52,
        }
    }

    /// Returns the epoch day of the Thursday in the week of `epoch_day`.
    fn week_thursday(epoch_day: i64) -> i64 {
        let day_of_week = i64::from(date_equations::iso_day_of_week(epoch_day));
        epoch_day - day_of_week + 4
    }

    /// Returns the week-based year of `date`.
    #[must_use]
    pub fn week_based_year(date: &LocalDate) -> i32 {
        let (year, ..) = gregorian::ymd_from_epoch_days(Self::week_thursday(date.to_epoch_day()));
        utils::saturating_narrow(year)
    }

    /// Returns the week of the week-based year of `date`.
    #[must_use]
    pub fn week_of_week_based_year(date: &LocalDate) -> u8 {
        let (year, month, day) =
            gregorian::ymd_from_epoch_days(Self::week_thursday(date.to_epoch_day()));
        ((gregorian::day_of_year(year, month, day) - 1) / 7 + 1) as u8
    }

    /// Returns the date of `day_of_week` in `week` of `week_based_year`.
    ///
    /// Fails with an invalid combination if `week` is 53 and the year has
    /// only 52 weeks.
    pub fn date_from_week(
        week_based_year: i32,
        week: i32,
        day_of_week: i32,
    ) -> CalendricalResult<LocalDate> {
        let week_based_year = WEEK_BASED_YEAR.check_value(week_based_year)?;
        let week = WEEK_OF_WEEK_BASED_YEAR.check_value(week)?;
        let day_of_week = DAY_OF_WEEK.check_value(day_of_week)?;
        let weeks = Self::weeks_in_week_based_year(week_based_year);
        if week > i32::from(weeks) {
            return Err(WEEK_OF_WEEK_BASED_YEAR.invalid_combination(week.into(), 1, weeks.into()));
        }
        let jan_fourth = gregorian::epoch_days_from_ymd(week_based_year.into(), 1, 4);
        let first_monday =
            jan_fourth - i64::from(date_equations::iso_day_of_week(jan_fourth)) + 1;
        LocalDate::from_epoch_day(
            first_monday + i64::from(week - 1) * 7 + i64::from(day_of_week - 1),
        )
    }
}

impl CalendarSystem for Iso {
    const KIND: ChronologyKind = ChronologyKind::Iso;
    const MIN_YEAR: i32 = MIN_YEAR;
    const MAX_YEAR: i32 = MAX_YEAR;
    const MONTHS_IN_YEAR: u8 = 12;

    fn is_leap(year: i32) -> bool {
        gregorian::is_leap_year(year.into())
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        gregorian::days_in_month(year.into(), month)
    }

    fn max_days_in_month(month: u8) -> u8 {
        // A leap year has the longest month lengths.
        gregorian::days_in_month(2000, month)
    }

    fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
        gregorian::day_of_year(year.into(), month, day)
    }

    fn is_leap_day(month: u8, day: u8) -> bool {
        month == 2 && day == 29
    }

    fn epoch_day_from_ymd(year: i32, month: u8, day: u8) -> i64 {
        gregorian::epoch_days_from_ymd(year.into(), month, day)
    }

    fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
        gregorian::ymd_from_epoch_days(epoch_day)
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
            Field::QuarterOfYear => &QUARTER_OF_YEAR,
            Field::MonthOfQuarter => &MONTH_OF_QUARTER,
            Field::MonthOfYear => &MONTH_OF_YEAR,
            Field::DayOfMonth => &DAY_OF_MONTH,
            Field::DayOfYear => &DAY_OF_YEAR,
            Field::DayOfWeek => &DAY_OF_WEEK,
            Field::WeekBasedYear => &WEEK_BASED_YEAR,
            Field::WeekOfWeekBasedYear => &WEEK_OF_WEEK_BASED_YEAR,
            Field::AmPmOfDay => &AM_PM_OF_DAY,
            Field::HourOfAmPm => &HOUR_OF_AM_PM,
            Field::HourOfDay => &HOUR_OF_DAY,
            Field::MinuteOfHour => &MINUTE_OF_HOUR,
            Field::SecondOfMinute => &SECOND_OF_MINUTE,
            Field::NanoOfSecond => &NANO_OF_SECOND,
            Field::MinuteOfDay => &MINUTE_OF_DAY,
            Field::SecondOfDay => &SECOND_OF_DAY,
        };
        Some(rule)
    }

    fn era_of(year: i32) -> Option<EraYear> {
        Some(if year >= 1 {
            EraYear {
                era: 1,
                code: tinystr!(16, "ce"),
                year_of_era: year,
            }
        } else {
            EraYear {
                era: 0,
                code: tinystr!(16, "bce"),
                year_of_era: 1 - year,
            }
        })
    }

    fn year_from_era(era: i32, year_of_era: i32) -> Option<i64> {
        match era {
            1 => Some(year_of_era.into()),
            0 => Some(1 - i64::from(year_of_era)),
            _ => None,
        }
    }

    fn date_field(date: &LocalDate, field: Field) -> Option<i32> {
        match field {
            // The first days of MIN_YEAR can fall in the preceding week-based year.
            Field::WeekBasedYear => Some(Self::week_based_year(date))
                .filter(|year| WEEK_BASED_YEAR.is_valid_value(*year)),
            Field::WeekOfWeekBasedYear => Some(Self::week_of_week_based_year(date).into()),
            _ => common_date_field(date, field),
        }
    }

    fn context_maximum(field: Field, calendrical: &dyn Calendrical) -> Option<i32> {
        match field {
            Field::WeekOfWeekBasedYear => calendrical
                .get(&WEEK_BASED_YEAR)
                .map(|year| Self::weeks_in_week_based_year(year).into()),
            _ => common_context_maximum::<Self>(field, calendrical),
        }
    }

    fn wrap(date: LocalDate) -> AnyDate {
        AnyDate::Iso(date)
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
        utils::write_padded_u8(day, sink)
    }
}

// ==== Text ====

type TextPairs = &'static [(i32, &'static str)];

fn is_french(locale: &Locale) -> bool {
    locale.id.language.as_str() == "fr"
}

fn is_english(locale: &Locale) -> bool {
    locale.id.language.as_str() == "en"
}

fn month_text(locale: &Locale, style: TextStyle) -> Option<TextPairs> {
    const EN_FULL: TextPairs = &[
        (1, "January"),
        (2, "February"),
        (3, "March"),
        (4, "April"),
        (5, "May"),
        (6, "June"),
        (7, "July"),
        (8, "August"),
        (9, "September"),
        (10, "October"),
        (11, "November"),
        (12, "December"),
    ];
    const EN_SHORT: TextPairs = &[
        (1, "Jan"),
        (2, "Feb"),
        (3, "Mar"),
        (4, "Apr"),
        (5, "May"),
        (6, "Jun"),
        (7, "Jul"),
        (8, "Aug"),
        (9, "Sep"),
        (10, "Oct"),
        (11, "Nov"),
        (12, "Dec"),
    ];
    const FR_FULL: TextPairs = &[
        (1, "janvier"),
        (2, "février"),
        (3, "mars"),
        (4, "avril"),
        (5, "mai"),
        (6, "juin"),
        (7, "juillet"),
        (8, "août"),
        (9, "septembre"),
        (10, "octobre"),
        (11, "novembre"),
        (12, "décembre"),
    ];
    const FR_SHORT: TextPairs = &[
        (1, "janv."),
        (2, "févr."),
        (3, "mars"),
        (4, "avr."),
        (5, "mai"),
        (6, "juin"),
        (7, "juil."),
        (8, "août"),
        (9, "sept."),
        (10, "oct."),
        (11, "nov."),
        (12, "déc."),
    ];
    const NARROW: TextPairs = &[
        (1, "J"),
        (2, "F"),
        (3, "M"),
        (4, "A"),
        (5, "M"),
        (6, "J"),
        (7, "J"),
        (8, "A"),
        (9, "S"),
        (10, "O"),
        (11, "N"),
        (12, "D"),
    ];
    if is_english(locale) {
        Some(match style {
            TextStyle::Full => EN_FULL,
            TextStyle::Short => EN_SHORT,
            TextStyle::Narrow => NARROW,
        })
    } else if is_french(locale) {
        Some(match style {
            TextStyle::Full => FR_FULL,
            TextStyle::Short => FR_SHORT,
            TextStyle::Narrow => NARROW,
        })
    } else {
        None
    }
}

fn day_of_week_text(locale: &Locale, style: TextStyle) -> Option<TextPairs> {
    const EN_FULL: TextPairs = &[
        (1, "Monday"),
        (2, "Tuesday"),
        (3, "Wednesday"),
        (4, "Thursday"),
        (5, "Friday"),
        (6, "Saturday"),
        (7, "Sunday"),
    ];
    const EN_SHORT: TextPairs = &[
        (1, "Mon"),
        (2, "Tue"),
        (3, "Wed"),
        (4, "Thu"),
        (5, "Fri"),
        (6, "Sat"),
        (7, "Sun"),
    ];
    const EN_NARROW: TextPairs = &[
        (1, "M"),
        (2, "T"),
        (3, "W"),
        (4, "T"),
        (5, "F"),
        (6, "S"),
        (7, "S"),
    ];
    const FR_FULL: TextPairs = &[
        (1, "lundi"),
        (2, "mardi"),
        (3, "mercredi"),
        (4, "jeudi"),
        (5, "vendredi"),
        (6, "samedi"),
        (7, "dimanche"),
    ];
    const FR_SHORT: TextPairs = &[
        (1, "lun."),
        (2, "mar."),
        (3, "mer."),
        (4, "jeu."),
        (5, "ven."),
        (6, "sam."),
        (7, "dim."),
    ];
    const FR_NARROW: TextPairs = &[
        (1, "L"),
        (2, "M"),
        (3, "M"),
        (4, "J"),
        (5, "V"),
        (6, "S"),
        (7, "D"),
    ];
    if is_english(locale) {
        Some(match style {
            TextStyle::Full => EN_FULL,
            TextStyle::Short => EN_SHORT,
            TextStyle::Narrow => EN_NARROW,
        })
    } else if is_french(locale) {
        Some(match style {
            TextStyle::Full => FR_FULL,
            TextStyle::Short => FR_SHORT,
            TextStyle::Narrow => FR_NARROW,
        })
    } else {
        None
    }
}

fn am_pm_text(locale: &Locale, style: TextStyle) -> Option<TextPairs> {
    const FULL: TextPairs = &[(0, "AM"), (1, "PM")];
    const NARROW: TextPairs = &[(0, "a"), (1, "p")];
    if !is_english(locale) && !is_french(locale) {
        return None;
    }
    Some(match style {
        TextStyle::Full | TextStyle::Short => FULL,
        TextStyle::Narrow => NARROW,
    })
}

fn era_text(locale: &Locale, style: TextStyle) -> Option<TextPairs> {
    const FULL: TextPairs = &[(0, "Before Common Era"), (1, "Common Era")];
    const SHORT: TextPairs = &[(0, "BCE"), (1, "CE")];
    if !is_english(locale) {
        return None;
    }
    Some(match style {
        TextStyle::Full => FULL,
        TextStyle::Short | TextStyle::Narrow => SHORT,
    })
}
