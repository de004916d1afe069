use alloc::{string::ToString, vec::Vec};
use core::str::FromStr;

use icu_locale::Locale;

use super::{Field, RuleId};
use crate::{
    chrono::{ChronologyKind, Coptic, Iso, LocalDate, Minguo},
    error::ErrorKind,
    options::PeriodUnit,
    primitive::Fraction,
    text::{TextMatch, TextStyle},
    LocalTime,
};

fn locale(tag: &str) -> Locale {
    Locale::try_from_str(tag).unwrap()
}

#[test]
fn field_names() {
    assert_eq!(Field::WeekOfWeekBasedYear.to_string(), "WeekOfWeekBasedYear");
    assert_eq!(Field::from_str("dayofmonth").unwrap(), Field::DayOfMonth);
    assert!(Field::from_str("Fortnight").is_err());
    assert!(Field::HourOfAmPm.is_time_field());
    assert!(Field::WeekBasedYear.is_date_field());
}

#[test]
fn rule_identity() {
    let rule = Coptic::month_of_year_rule();
    assert_eq!(rule.id(), RuleId::new(ChronologyKind::Coptic, Field::MonthOfYear));
    assert_eq!(rule.id().to_string(), "MonthOfYear (Coptic)");
    assert_eq!(rule.chronology().kind(), ChronologyKind::Coptic);
    assert_ne!(rule, Iso::month_of_year_rule());
    assert_eq!(rule.period_unit(), PeriodUnit::Months);
    assert_eq!(rule.period_range(), Some(PeriodUnit::Years));
    assert_eq!(Iso::year_rule().period_range(), None);
}

#[test]
fn absolute_bounds() {
    let rule = Iso::day_of_month_rule();
    assert_eq!(
        (
            rule.minimum_value(),
            rule.largest_minimum_value(),
            rule.smallest_maximum_value(),
            rule.maximum_value()
        ),
        (1, 1, 28, 31)
    );
    assert!(!rule.is_fixed_value_set());
    assert!(rule.is_valid_value(31));
    assert!(!rule.is_valid_value(0));
    assert!(!rule.is_valid_value(i64::MAX));

    let err = rule.check_value(i64::from(i32::MAX) + 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.rule(), Some(rule.id()));
    assert_eq!(err.value(), Some(i64::from(i32::MAX) + 1));
    assert_eq!(err.bounds(), Some((1, 31)));

    assert_eq!(Minguo::year_rule().maximum_value(), 999_999_999 - 1911);
}

#[test]
fn contextual_bounds() {
    let february = LocalDate::try_new(2011, 2, 1).unwrap();
    let rule = Iso::day_of_month_rule();
    assert_eq!(rule.minimum_value_in(&february), 1);
    assert_eq!(rule.maximum_value_in(&february), 28);
    assert_eq!(rule.check_value_in(28, &february).unwrap(), 28);

    let err = rule.check_value_in(29, &february).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCombination);
    assert_eq!(err.bounds(), Some((1, 28)));
    let err = rule.check_value_in(32, &february).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    // Without a context the absolute bounds apply.
    let noon = LocalTime::MIDDAY;
    assert_eq!(rule.maximum_value_in(&noon), 31);
    assert_eq!(Iso::day_of_year_rule().maximum_value_in(&february), 365);
}

#[test]
fn values_from_calendricals() {
    let date = LocalDate::try_new(2012, 10, 29).unwrap();
    assert_eq!(Iso::month_of_year_rule().value_from(&date), Some(10));
    assert_eq!(Iso::hour_of_day_rule().value_from(&date), None);

    let err = Iso::hour_of_day_rule().value_from_checked(&date).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(err.rule(), Some(Iso::hour_of_day_rule().id()));
    assert_eq!(Coptic::year_rule().value_from_checked(&date).unwrap(), 1729);
}

#[test]
fn int_to_fraction() {
    let rule = Iso::second_of_minute_rule();
    assert_eq!(rule.convert_int_to_fraction(0).unwrap(), Fraction::ZERO);
    assert_eq!(rule.convert_int_to_fraction(30).unwrap().to_string(), "0.5");
    assert_eq!(
        rule.convert_int_to_fraction(1).unwrap().to_string(),
        "0.0166666666"
    );
    assert_eq!(
        Iso::hour_of_day_rule().convert_int_to_fraction(6).unwrap().to_string(),
        "0.25"
    );
    let err = rule.convert_int_to_fraction(60).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn fraction_to_int() {
    let rule = Iso::second_of_minute_rule();
    let half = Fraction::from_str("0.5").unwrap();
    assert_eq!(rule.convert_fraction_to_int(half).unwrap(), 30);

    // Inexact fractions are accepted when they are the floored form of a value.
    let sixtieth = Fraction::from_str("0.0166666666").unwrap();
    assert_eq!(rule.convert_fraction_to_int(sixtieth).unwrap(), 1);

    let err = rule
        .convert_fraction_to_int(Fraction::from_str("0.51").unwrap())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.rule(), Some(rule.id()));
    assert!(err.message().contains("invalid fractional value"));
}

const ALL_FIELDS: [Field; 19] = [
    Field::Era,
    Field::YearOfEra,
    Field::Year,
    Field::QuarterOfYear,
    Field::MonthOfQuarter,
    Field::MonthOfYear,
    Field::DayOfMonth,
    Field::DayOfYear,
    Field::DayOfWeek,
    Field::WeekBasedYear,
    Field::WeekOfWeekBasedYear,
    Field::AmPmOfDay,
    Field::HourOfAmPm,
    Field::HourOfDay,
    Field::MinuteOfHour,
    Field::SecondOfMinute,
    Field::NanoOfSecond,
    Field::MinuteOfDay,
    Field::SecondOfDay,
];

#[test]
fn fractions_round_trip() {
    let mut checked = Vec::new();
    for kind in [ChronologyKind::Coptic, ChronologyKind::Iso, ChronologyKind::Minguo] {
        for field in ALL_FIELDS {
            let Some(rule) = kind.chronology().rule(field) else {
                continue;
            };
            if !rule.is_fixed_value_set() || rule.minimum_value() != 0 {
                continue;
            }
            let max = rule.maximum_value();
            let values: Vec<i32> = if max < 100_000 {
                (0..=max).collect()
            } else {
                (0..10_000)
                    .chain((0..=max).step_by(7_919))
                    .chain(max - 10_000..=max)
                    .collect()
            };
            for value in values {
                let fraction = rule.convert_int_to_fraction(value).unwrap();
                assert_eq!(rule.convert_fraction_to_int(fraction).unwrap(), value, "{rule}");
            }
            checked.push(rule.id());
        }
    }
    for rule in [
        Iso::era_rule(),
        Iso::am_pm_of_day_rule(),
        Iso::hour_of_am_pm_rule(),
        Iso::hour_of_day_rule(),
        Iso::minute_of_hour_rule(),
        Iso::second_of_minute_rule(),
        Iso::nano_of_second_rule(),
        Iso::minute_of_day_rule(),
        Iso::second_of_day_rule(),
        Minguo::era_rule(),
    ] {
        assert!(checked.contains(&rule.id()), "{rule}");
    }
}

#[test]
fn fractions_need_a_fixed_zero_based_range() {
    let err = Iso::day_of_month_rule()
        .convert_int_to_fraction(1)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert!(err.message().contains("as the range is not fixed"));

    let err = Iso::day_of_week_rule()
        .convert_fraction_to_int(Fraction::ZERO)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert!(err.message().contains("as the minimum value is not zero"));
}

#[test]
fn localized_text() {
    let en = locale("en");
    let fr = locale("fr");
    let months = Iso::month_of_year_rule();
    assert_eq!(months.text(2, &en, TextStyle::Full), "February");
    assert_eq!(months.text(2, &en, TextStyle::Short), "Feb");
    assert_eq!(months.text(2, &fr, TextStyle::Full), "février");
    assert_eq!(months.text(2, &locale("de"), TextStyle::Full), "2");
    assert_eq!(Iso::am_pm_of_day_rule().text(1, &en, TextStyle::Short), "PM");

    // Fields without text fall back to the number.
    assert_eq!(Iso::hour_of_day_rule().text(7, &en, TextStyle::Full), "7");
    assert!(Iso::hour_of_day_rule().text_store(&en, TextStyle::Full).is_none());
}

#[test]
fn text_matching() {
    let en = locale("en");
    let months = Iso::month_of_year_rule();
    assert_eq!(
        months.match_text(&en, TextStyle::Full, false, "October 29"),
        TextMatch::Matched { length: 7, value: 10 }
    );
    assert_eq!(
        months.match_text(&en, TextStyle::Short, true, "oct"),
        TextMatch::Matched { length: 3, value: 10 }
    );
    assert_eq!(
        months.match_text(&en, TextStyle::Full, false, "Brumaire"),
        TextMatch::NoMatch
    );
    // Narrow month names repeat, so they can be printed but not parsed.
    assert_eq!(months.text(6, &en, TextStyle::Narrow), "J");
    assert_eq!(
        months.match_text(&en, TextStyle::Narrow, false, "J"),
        TextMatch::Unsupported
    );
    assert_eq!(
        Iso::year_rule().match_text(&en, TextStyle::Full, false, "2012"),
        TextMatch::Unsupported
    );
}

#[cfg(feature = "std")]
#[test]
fn text_stores_are_cached() {
    use alloc::sync::Arc;

    use super::{DateTimeFieldRule, RuleSpec};

    fn colour_text(locale: &Locale, style: TextStyle) -> Option<&'static [(i32, &'static str)]> {
        const COLOURS: &[(i32, &str)] = &[(0, "red"), (1, "green")];
        (locale.id.language.as_str() == "en" && style == TextStyle::Full).then_some(COLOURS)
    }

    static COLOUR: DateTimeFieldRule = DateTimeFieldRule::new(
        RuleSpec::new(
            ChronologyKind::Iso,
            Field::AmPmOfDay,
            PeriodUnit::HalfDays,
            Some(PeriodUnit::Days),
            0,
            1,
        )
        .with_text(colour_text),
    );

    let en = locale("en");
    let first = COLOUR.text_store(&en, TextStyle::Full).unwrap();
    let second = COLOUR.text_store(&en, TextStyle::Full).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(COLOUR.cached_text_stores(), 1);

    // Misses are cached too, up to the cache capacity.
    let tags = ["de", "es", "fr", "it", "ja", "nl", "pt", "sv", "zh"];
    let locales: Vec<Locale> = tags.iter().map(|tag| locale(tag)).collect();
    for locale in &locales {
        for style in [TextStyle::Full, TextStyle::Short, TextStyle::Narrow] {
            assert!(COLOUR.text_store(locale, style).is_none());
        }
    }
    assert_eq!(COLOUR.cached_text_stores(), 24);

    // The evicted store is rebuilt with the same content.
    let rebuilt = COLOUR.text_store(&en, TextStyle::Full).unwrap();
    assert_eq!(rebuilt.value_text(1), Some("green"));
    assert_eq!(COLOUR.cached_text_stores(), 24);
}
