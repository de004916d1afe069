//! This module implements `CalendricalFields`, a bag of field values and the
//! resolution of those values into dates and times.
//!
//! Date resolution picks the first strategy whose fields are all present:
//!
//! 1. year (or era and year of era), month of year and day of month,
//! 2. year and day of year,
//! 3. week-based year, week of week-based year and day of week.
//!
//! Every other date field in the bag is then checked against the resolved
//! date. Out of range values are handled according to an
//! [`ArithmeticOverflow`] policy.

use alloc::{format, vec::Vec};

use rustc_hash::FxHashMap;

use crate::{
    calendrical::Calendrical,
    chrono::{AnyDate, CalendarSystem, ChronoDate, ChronologyKind, Coptic, Iso, Minguo},
    options::ArithmeticOverflow,
    rule::{DateTimeFieldRule, Field, RuleId},
    time::{LocalTime, TimeOverflow},
    utils, CalendricalError, CalendricalResult, ChronoDateTime, NANOS_PER_SECOND,
};

/// A bag of field values keyed by their rule.
///
/// Values are stored unvalidated as `i64` so that out of range values can be
/// carried or constrained during resolution.
///
/// ```rust
/// use calendrical_rs::{
///     chrono::{Coptic, CopticDate},
///     fields::CalendricalFields,
///     options::ArithmeticOverflow,
/// };
///
/// let mut fields = CalendricalFields::new();
/// fields.set(Coptic::year_rule(), 1234).unwrap();
/// fields.set(Coptic::month_of_year_rule(), 13).unwrap();
/// fields.set(Coptic::day_of_month_rule(), 6).unwrap();
///
/// // 1234 is not a leap year, so the thirteenth month has five days.
/// assert!(fields.resolve_date::<Coptic>(ArithmeticOverflow::Reject).is_err());
/// assert_eq!(
///     fields.resolve_date::<Coptic>(ArithmeticOverflow::Carry).unwrap(),
///     CopticDate::try_new(1235, 1, 1).unwrap()
/// );
/// ```
#[derive(Debug, Default, Clone)]
pub struct CalendricalFields {
    values: FxHashMap<RuleId, (&'static DateTimeFieldRule, i64)>,
}

impl CalendricalFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sets the value of `rule`.
    ///
    /// Setting a rule again to the same value is allowed, while setting it to
    /// a different value fails with an invalid combination.
    pub fn set(
        &mut self,
        rule: &'static DateTimeFieldRule,
        value: impl Into<i64>,
    ) -> CalendricalResult<()> {
        let value = value.into();
        if let Some(&(_, existing)) = self.values.get(&rule.id()) {
            if existing != value {
                return Err(CalendricalError::combination()
                    .with_rule(rule.id())
                    .with_message(format!(
                        "{} is already set to {existing}, cannot set it to {value}",
                        rule.name()
                    )));
            }
            return Ok(());
        }
        let _ = self.values.insert(rule.id(), (rule, value));
        Ok(())
    }

    /// Returns a copy with the value of `rule` set.
    pub fn with(
        mut self,
        rule: &'static DateTimeFieldRule,
        value: impl Into<i64>,
    ) -> CalendricalResult<Self> {
        self.set(rule, value)?;
        Ok(self)
    }

    /// Returns the stored value of `rule`.
    #[must_use]
    pub fn value(&self, rule: &DateTimeFieldRule) -> Option<i64> {
        self.values.get(&rule.id()).map(|&(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, rule: &DateTimeFieldRule) -> bool {
        self.values.contains_key(&rule.id())
    }

    pub fn remove(&mut self, rule: &DateTimeFieldRule) -> Option<i64> {
        self.values.remove(&rule.id()).map(|(_, value)| value)
    }

    /// Returns the stored rules and values.
    pub fn iter(&self) -> impl Iterator<Item = (&'static DateTimeFieldRule, i64)> + '_ {
        self.values.values().copied()
    }

    fn field_of(&self, chronology: ChronologyKind, field: Field) -> Option<i64> {
        self.values
            .get(&RuleId::new(chronology, field))
            .map(|&(_, value)| value)
    }

    // ==== Date resolution ====

    /// Resolves the year from the year field, or from the era and year of
    /// era. Both forms must agree when both are present.
    fn resolve_year<C: CalendarSystem>(
        &self,
        consumed: &mut Vec<RuleId>,
    ) -> CalendricalResult<Option<i32>> {
        let year = self.field_of(C::KIND, Field::Year);
        let era_year = match (
            self.field_of(C::KIND, Field::Era),
            self.field_of(C::KIND, Field::YearOfEra),
            C::field_rule(Field::Era),
            C::field_rule(Field::YearOfEra),
        ) {
            (Some(era), Some(year_of_era), Some(era_rule), Some(year_of_era_rule)) => {
                let era = era_rule.check_value(era)?;
                let year_of_era = year_of_era_rule.check_value(year_of_era)?;
                consumed.extend([era_rule.id(), year_of_era_rule.id()]);
                C::year_from_era(era, year_of_era)
            }
            _ => None,
        };
        let year = match (year, era_year) {
            (Some(year), Some(era_year)) if year != era_year => {
                return Err(CalendricalError::combination()
                    .with_rule(C::year_rule().id())
                    .with_message(format!(
                        "Year {year} does not match the year {era_year} of the era"
                    )));
            }
            (Some(year), _) | (None, Some(year)) => year,
            (None, None) => return Ok(None),
        };
        consumed.push(C::year_rule().id());
        // The year is range-checked under every overflow policy.
        C::year_rule().check_value(year).map(Some)
    }

    fn resolve_month_day<C: CalendarSystem>(
        year: i32,
        month: i64,
        day: i64,
        overflow: ArithmeticOverflow,
    ) -> CalendricalResult<ChronoDate<C>> {
        match overflow {
            ArithmeticOverflow::Reject => {
                let month = C::month_of_year_rule().check_value(month)?;
                let day = C::day_of_month_rule().check_value(day)?;
                ChronoDate::try_new(year, month, day)
            }
            ArithmeticOverflow::Constrain => {
                let month = month.clamp(1, C::MONTHS_IN_YEAR.into()) as u8;
                let day = day.clamp(1, C::days_in_month(year, month).into()) as u8;
                Ok(ChronoDate::new_unchecked(year, month, day))
            }
            ArithmeticOverflow::Carry => {
                let start = ChronoDate::<C>::new_unchecked(year, 1, 1);
                start
                    .plus_months(month.saturating_sub(1))?
                    .plus_days(day.saturating_sub(1))
            }
        }
    }

    fn resolve_year_day<C: CalendarSystem>(
        year: i32,
        day_of_year: i64,
        overflow: ArithmeticOverflow,
    ) -> CalendricalResult<ChronoDate<C>> {
        match overflow {
            ArithmeticOverflow::Reject => {
                let day_of_year = C::day_of_year_rule().check_value(day_of_year)?;
                ChronoDate::from_year_day(year, day_of_year)
            }
            ArithmeticOverflow::Constrain => {
                let day_of_year = day_of_year.clamp(1, C::days_in_year(year).into()) as i32;
                ChronoDate::from_year_day(year, day_of_year)
            }
            ArithmeticOverflow::Carry => ChronoDate::<C>::new_unchecked(year, 1, 1)
                .plus_days(day_of_year.saturating_sub(1)),
        }
    }

    fn resolve_week_date<C: CalendarSystem>(
        week_based_year: i64,
        week: i64,
        day_of_week: i64,
        overflow: ArithmeticOverflow,
    ) -> CalendricalResult<ChronoDate<C>> {
        let week_based_year = Iso::week_based_year_rule().check_value(week_based_year)?;
        let date = match overflow {
            ArithmeticOverflow::Reject => Iso::date_from_week(
                week_based_year,
                Iso::week_of_week_based_year_rule().check_value(week)?,
                Iso::day_of_week_rule().check_value(day_of_week)?,
            )?,
            ArithmeticOverflow::Constrain => {
                let weeks = Iso::weeks_in_week_based_year(week_based_year);
                Iso::date_from_week(
                    week_based_year,
                    week.clamp(1, weeks.into()) as i32,
                    day_of_week.clamp(1, 7) as i32,
                )?
            }
            ArithmeticOverflow::Carry => Iso::date_from_week(week_based_year, 1, 1)?
                .plus_weeks(week.saturating_sub(1))?
                .plus_days(day_of_week.saturating_sub(1))?,
        };
        date.to_chronology()
    }

    /// Checks every date field that no strategy consumed against `date`.
    fn cross_check<C: CalendarSystem>(
        &self,
        date: &ChronoDate<C>,
        consumed: &[RuleId],
    ) -> CalendricalResult<()> {
        for (rule, value) in self.iter() {
            if rule.field().is_time_field() || consumed.contains(&rule.id()) {
                continue;
            }
            let actual = date.get(rule);
            if actual.map(i64::from) != Some(value) {
                return Err(CalendricalError::combination()
                    .with_rule(rule.id())
                    .with_message(format!(
                        "{} {value} does not match the resolved date {date}",
                        rule.name()
                    )));
            }
        }
        Ok(())
    }

    /// Resolves the fields into a date of the chronology `C`.
    ///
    /// Fails with a missing error when no strategy has all of its fields.
    pub fn resolve_date<C: CalendarSystem>(
        &self,
        overflow: ArithmeticOverflow,
    ) -> CalendricalResult<ChronoDate<C>> {
        let mut consumed = Vec::new();
        let year = self.resolve_year::<C>(&mut consumed)?;

        let month = self.field_of(C::KIND, Field::MonthOfYear);
        let day = self.field_of(C::KIND, Field::DayOfMonth);
        let day_of_year = self.field_of(C::KIND, Field::DayOfYear);
        let week_based_year = self.field_of(Iso::KIND, Field::WeekBasedYear);
        let week = self.field_of(Iso::KIND, Field::WeekOfWeekBasedYear);
        let day_of_week = self.field_of(Iso::KIND, Field::DayOfWeek);

        let date = match (year, month, day, day_of_year) {
            (Some(year), Some(month), Some(day), _) => {
                #[cfg(feature = "log")]
                log::trace!("resolving {} date from year, month and day", C::KIND);
                consumed.extend([C::month_of_year_rule().id(), C::day_of_month_rule().id()]);
                Self::resolve_month_day::<C>(year, month, day, overflow)?
            }
            (Some(year), _, _, Some(day_of_year)) => {
                #[cfg(feature = "log")]
                log::trace!("resolving {} date from year and day of year", C::KIND);
                consumed.push(C::day_of_year_rule().id());
                Self::resolve_year_day::<C>(year, day_of_year, overflow)?
            }
            _ => match (week_based_year, week, day_of_week) {
                (Some(week_based_year), Some(week), Some(day_of_week)) => {
                    #[cfg(feature = "log")]
                    log::trace!("resolving {} date from week-based fields", C::KIND);
                    consumed.extend([
                        Iso::week_based_year_rule().id(),
                        Iso::week_of_week_based_year_rule().id(),
                        Iso::day_of_week_rule().id(),
                    ]);
                    Self::resolve_week_date::<C>(week_based_year, week, day_of_week, overflow)?
                }
                _ => {
                    return Err(CalendricalError::missing()
                        .with_message("Too few fields are present to resolve a date"))
                }
            },
        };

        self.cross_check(&date, &consumed)?;
        Ok(date)
    }

    // ==== Time resolution ====

    /// Resolves the hour of day from the hour of day, or from the am-pm of
    /// day and hour of am-pm. Every present field must agree with the
    /// resolved hour, including a lone hour of am-pm.
    fn resolve_hour(&self, overflow: ArithmeticOverflow) -> CalendricalResult<i64> {
        let hour = self.value(Iso::hour_of_day_rule());
        let am_pm = self.value(Iso::am_pm_of_day_rule());
        let hour_of_am_pm = self.value(Iso::hour_of_am_pm_rule());

        let half_day_hour = match (am_pm, hour_of_am_pm) {
            (Some(am_pm), Some(hour_of_am_pm)) => {
                let am_pm = Iso::am_pm_of_day_rule().check_value(am_pm)?;
                let hour_of_am_pm = match overflow {
                    ArithmeticOverflow::Carry => hour_of_am_pm,
                    ArithmeticOverflow::Constrain => hour_of_am_pm.clamp(0, 11),
                    ArithmeticOverflow::Reject => {
                        Iso::hour_of_am_pm_rule().check_value(hour_of_am_pm)?.into()
                    }
                };
                Some(i64::from(am_pm) * 12 + hour_of_am_pm)
            }
            _ => None,
        };

        if let (Some(hour), None, Some(hour_of_am_pm)) = (hour, half_day_hour, hour_of_am_pm) {
            if hour.rem_euclid(12) != hour_of_am_pm {
                return Err(CalendricalError::combination()
                    .with_rule(Iso::hour_of_am_pm_rule().id())
                    .with_message(format!(
                        "HourOfAmPm {hour_of_am_pm} does not match HourOfDay {hour}"
                    )));
            }
        }

        match (hour, half_day_hour, am_pm) {
            (Some(hour), Some(derived), _) if hour != derived => {
                Err(CalendricalError::combination()
                    .with_rule(Iso::hour_of_day_rule().id())
                    .with_message(format!(
                        "HourOfDay {hour} does not match the am-pm hour {derived}"
                    )))
            }
            (Some(hour), None, Some(am_pm)) if hour.div_euclid(12) != am_pm => {
                Err(CalendricalError::combination()
                    .with_rule(Iso::am_pm_of_day_rule().id())
                    .with_message(format!("AmPmOfDay {am_pm} does not match HourOfDay {hour}")))
            }
            (Some(hour), ..) | (None, Some(hour), _) => Ok(hour),
            (None, None, _) => Err(CalendricalError::missing()
                .with_message("Too few fields are present to resolve a time")),
        }
    }

    /// Resolves the fields into a time of day.
    ///
    /// The minute, second and nanosecond default to zero. Only the `Carry`
    /// policy can return overflow days.
    pub fn resolve_time(&self, overflow: ArithmeticOverflow) -> CalendricalResult<TimeOverflow> {
        let hour = self.resolve_hour(overflow)?;
        let minute = self.value(Iso::minute_of_hour_rule()).unwrap_or(0);
        let second = self.value(Iso::second_of_minute_rule()).unwrap_or(0);
        let nano = self.value(Iso::nano_of_second_rule()).unwrap_or(0);

        let time = match overflow {
            ArithmeticOverflow::Reject => TimeOverflow {
                time: LocalTime::of_hms_nano(
                    Iso::hour_of_day_rule().check_value(hour)?,
                    Iso::minute_of_hour_rule().check_value(minute)?,
                    Iso::second_of_minute_rule().check_value(second)?,
                    Iso::nano_of_second_rule().check_value(nano)?,
                )?,
                days: 0,
            },
            ArithmeticOverflow::Constrain => TimeOverflow {
                time: LocalTime::new_unchecked(
                    hour.clamp(0, 23) as u8,
                    minute.clamp(0, 59) as u8,
                    second.clamp(0, 59) as u8,
                    nano.clamp(0, NANOS_PER_SECOND - 1) as u32,
                ),
                days: 0,
            },
            ArithmeticOverflow::Carry => {
                let nanos_per_second = i128::from(NANOS_PER_SECOND);
                LocalTime::MIDNIGHT.add_nanos(
                    i128::from(hour) * 3_600 * nanos_per_second
                        + i128::from(minute) * 60 * nanos_per_second
                        + i128::from(second) * nanos_per_second
                        + i128::from(nano),
                )
            }
        };

        for (rule, derived) in [
            (Iso::minute_of_day_rule(), time.time.to_second_of_day() / 60),
            (Iso::second_of_day_rule(), time.time.to_second_of_day()),
        ] {
            if let Some(value) = self.value(rule) {
                if value != i64::from(derived) {
                    return Err(CalendricalError::combination()
                        .with_rule(rule.id())
                        .with_message(format!(
                            "{} {value} does not match the resolved time {}",
                            rule.name(),
                            time.time
                        )));
                }
            }
        }
        Ok(time)
    }

    /// Resolves the fields into a date-time of the chronology `C`, adding the
    /// days the time carried into the date.
    pub fn resolve_date_time<C: CalendarSystem>(
        &self,
        overflow: ArithmeticOverflow,
    ) -> CalendricalResult<ChronoDateTime<C>> {
        let date = self.resolve_date::<C>(overflow)?;
        let TimeOverflow { time, days } = self.resolve_time(overflow)?;
        Ok(ChronoDateTime::new(date.plus_days(days)?, time))
    }

    /// Resolves a date in the first chronology whose fields resolve.
    fn resolve_any_date(&self) -> Option<AnyDate> {
        let overflow = ArithmeticOverflow::Reject;
        self.resolve_date::<Iso>(overflow)
            .map(|date| date.to_any())
            .or_else(|_| self.resolve_date::<Coptic>(overflow).map(|date| date.to_any()))
            .or_else(|_| self.resolve_date::<Minguo>(overflow).map(|date| date.to_any()))
            .ok()
    }
}

impl Calendrical for CalendricalFields {
    /// Returns the stored value of `rule`, or derives it from the date or
    /// time that the fields resolve to under the `Reject` policy.
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
        if let Some(value) = self.value(rule) {
            return utils::narrow(value);
        }
        if rule.field().is_time_field() {
            return self
                .resolve_time(ArithmeticOverflow::Reject)
                .ok()?
                .time
                .get(rule);
        }
        self.resolve_any_date()?.get(rule)
    }
}
