//! Chronologies and the dates they compose.
//!
//! A chronology is a complete calendar system: its epoch, leap-year rule,
//! month lengths and field rules. Each chronology is a zero-sized type that
//! implements [`CalendarSystem`], and [`ChronoDate`] composes year, month and
//! day into a date of that chronology. Every chronology maps its dates to and
//! from a shared epoch day (days since 1970-01-01 ISO), which is used for
//! conversion, cross-chronology ordering and the day of week.

use core::{cmp::Ordering, fmt, hash::Hash, str::FromStr};

use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    calendrical::Calendrical,
    rule::{DateTimeFieldRule, Field},
    values::DayOfWeek,
    CalendricalError, CalendricalResult,
};

mod any;
mod coptic;
mod date;
mod iso;
mod minguo;

#[cfg(test)]
mod tests;

pub use any::AnyDate;
pub use coptic::{Coptic, CopticDate};
pub use date::ChronoDate;
pub use iso::{Iso, LocalDate};
pub use minguo::{Minguo, MinguoDate};

// ==== ChronologyKind ====

/// The chronologies supported by `calendrical_rs`.
///
/// Variants are declared in the order of their ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChronologyKind {
    Coptic,
    Iso,
    Minguo,
}

impl ChronologyKind {
    /// Returns the chronology object of this kind.
    #[must_use]
    pub fn chronology(self) -> &'static dyn Chronology {
        match self {
            Self::Coptic => &Coptic,
            Self::Iso => &Iso,
            Self::Minguo => &Minguo,
        }
    }

    /// Returns the id of this chronology.
    #[must_use]
    pub const fn id(self) -> TinyAsciiStr<16> {
        match self {
            Self::Coptic => tinystr!(16, "Coptic"),
            Self::Iso => tinystr!(16, "ISO"),
            Self::Minguo => tinystr!(16, "Minguo"),
        }
    }

    /// Returns the CLDR calendar type of this chronology.
    #[must_use]
    pub const fn calendar_type(self) -> TinyAsciiStr<16> {
        match self {
            Self::Coptic => tinystr!(16, "coptic"),
            Self::Iso => tinystr!(16, "iso8601"),
            Self::Minguo => tinystr!(16, "roc"),
        }
    }
}

impl fmt::Display for ChronologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id().as_str())
    }
}

impl FromStr for ChronologyKind {
    type Err = CalendricalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Coptic, Self::Iso, Self::Minguo]
            .into_iter()
            .find(|kind| {
                kind.id().as_str().eq_ignore_ascii_case(s)
                    || kind.calendar_type().as_str().eq_ignore_ascii_case(s)
            })
            .ok_or(CalendricalError::general("Unknown chronology"))
    }
}

// ==== Era ====

/// The era of a year together with the year within that era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EraYear {
    /// The value of the era field.
    pub era: i32,
    /// The era code.
    pub code: TinyAsciiStr<16>,
    /// The year within the era.
    pub year_of_era: i32,
}

// ==== CalendarSystem ====

/// The static definition of a calendar system.
///
/// Implementors are zero-sized marker types. Every implementor is also a
/// [`Chronology`] through a blanket implementation.
pub trait CalendarSystem:
    Copy + Default + fmt::Debug + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static
{
    const KIND: ChronologyKind;
    const MIN_YEAR: i32;
    const MAX_YEAR: i32;
    const MONTHS_IN_YEAR: u8;

    fn is_leap(year: i32) -> bool;

    /// Returns the number of days in `month` of `year`.
    fn days_in_month(year: i32, month: u8) -> u8;

    /// Returns the number of days `month` has in its longest year.
    fn max_days_in_month(month: u8) -> u8;

    fn days_in_year(year: i32) -> u16 {
        if Self::is_leap(year) {
            366
        } else {
            365
        }
    }

    fn day_of_year(year: i32, month: u8, day: u8) -> u16;

    /// Returns whether `month` and `day` are the leap day of a leap year.
    fn is_leap_day(month: u8, day: u8) -> bool;

    fn epoch_day_from_ymd(year: i32, month: u8, day: u8) -> i64;

    /// Returns the `(year, month, day)` of an epoch day.
    ///
    /// The year is unchecked and may lie outside of `MIN_YEAR..=MAX_YEAR`.
    fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8);

    fn year_rule() -> &'static DateTimeFieldRule;
    fn month_of_year_rule() -> &'static DateTimeFieldRule;
    fn day_of_month_rule() -> &'static DateTimeFieldRule;
    fn day_of_year_rule() -> &'static DateTimeFieldRule;
    fn day_of_week_rule() -> &'static DateTimeFieldRule;

    /// Returns the rule of `field`, or `None` if this chronology does not
    /// define the field.
    fn field_rule(field: Field) -> Option<&'static DateTimeFieldRule> {
        match field {
            Field::Year => Some(Self::year_rule()),
            Field::MonthOfYear => Some(Self::month_of_year_rule()),
            Field::DayOfMonth => Some(Self::day_of_month_rule()),
            Field::DayOfYear => Some(Self::day_of_year_rule()),
            Field::DayOfWeek => Some(Self::day_of_week_rule()),
            _ => None,
        }
    }

    /// Returns the era of `year`, for chronologies with eras.
    fn era_of(_year: i32) -> Option<EraYear> {
        None
    }

    /// Returns the proleptic year of `year_of_era` in `era`.
    fn year_from_era(_era: i32, _year_of_era: i32) -> Option<i64> {
        None
    }

    /// Returns the value of `field` for `date`.
    ///
    /// Implementors override this to derive fields beyond the common set.
    fn date_field(date: &ChronoDate<Self>, field: Field) -> Option<i32> {
        common_date_field(date, field)
    }

    /// Returns the context-aware maximum of `field` in `calendrical`.
    fn context_maximum(field: Field, calendrical: &dyn Calendrical) -> Option<i32> {
        common_context_maximum::<Self>(field, calendrical)
    }

    /// Wraps a date of this chronology into an [`AnyDate`].
    fn wrap(date: ChronoDate<Self>) -> AnyDate;

    fn write_date<W: fmt::Write + ?Sized>(
        year: i32,
        month: u8,
        day: u8,
        sink: &mut W,
    ) -> fmt::Result;
}

/// Derives the fields every chronology shares.
pub(crate) fn common_date_field<C: CalendarSystem>(
    date: &ChronoDate<C>,
    field: Field,
) -> Option<i32> {
    C::field_rule(field)?;
    match field {
        Field::Year => Some(date.year()),
        Field::MonthOfYear => Some(date.month().into()),
        Field::DayOfMonth => Some(date.day().into()),
        Field::DayOfYear => Some(date.day_of_year().into()),
        Field::DayOfWeek => Some(date.day_of_week().value()),
        Field::QuarterOfYear => Some(i32::from(date.month() - 1) / 3 + 1),
        Field::MonthOfQuarter => Some(i32::from(date.month() - 1) % 3 + 1),
        Field::Era => C::era_of(date.year()).map(|era| era.era),
        Field::YearOfEra => C::era_of(date.year()).map(|era| era.year_of_era),
        _ => None,
    }
}

/// Narrows day-of-month by month and year, and day-of-year by year.
pub(crate) fn common_context_maximum<C: CalendarSystem>(
    field: Field,
    calendrical: &dyn Calendrical,
) -> Option<i32> {
    let year = calendrical.get(C::year_rule());
    match field {
        Field::DayOfMonth => {
            let month = calendrical
                .get(C::month_of_year_rule())
                .and_then(|month| u8::try_from(month).ok())
                .filter(|month| (1..=C::MONTHS_IN_YEAR).contains(month))?;
            Some(match year {
                Some(year) => C::days_in_month(year, month).into(),
                None => C::max_days_in_month(month).into(),
            })
        }
        Field::DayOfYear => year.map(|year| C::days_in_year(year).into()),
        _ => None,
    }
}

// ==== Chronology ====

/// The object-safe view of a calendar system.
pub trait Chronology: fmt::Debug + Send + Sync {
    fn kind(&self) -> ChronologyKind;

    /// Returns the id of this chronology, e.g. `Coptic`.
    fn id(&self) -> TinyAsciiStr<16> {
        self.kind().id()
    }

    /// Returns the CLDR calendar type, e.g. `coptic`.
    fn calendar_type(&self) -> TinyAsciiStr<16> {
        self.kind().calendar_type()
    }

    fn min_year(&self) -> i32;
    fn max_year(&self) -> i32;
    fn months_in_year(&self) -> u8;
    fn is_leap_year(&self, year: i32) -> bool;
    fn length_of_month(&self, year: i32, month: u8) -> u8;
    fn length_of_year(&self, year: i32) -> u16;

    /// Returns the rule of `field`, or `None` if this chronology does not
    /// define it.
    fn rule(&self, field: Field) -> Option<&'static DateTimeFieldRule>;

    /// Creates a date of this chronology.
    fn date(&self, year: i32, month: i32, day: i32) -> CalendricalResult<AnyDate>;

    /// Creates the date of this chronology on `epoch_day`.
    fn date_from_epoch_day(&self, epoch_day: i64) -> CalendricalResult<AnyDate>;

    /// Returns the minimum of `rule` in `calendrical`, if it depends on context.
    fn minimum_value_in(
        &self,
        _rule: &DateTimeFieldRule,
        _calendrical: &dyn Calendrical,
    ) -> Option<i32> {
        None
    }

    /// Returns the maximum of `rule` in `calendrical`, if it depends on context.
    fn maximum_value_in(
        &self,
        rule: &DateTimeFieldRule,
        calendrical: &dyn Calendrical,
    ) -> Option<i32>;
}

impl<C: CalendarSystem> Chronology for C {
    fn kind(&self) -> ChronologyKind {
        C::KIND
    }

    fn min_year(&self) -> i32 {
        C::MIN_YEAR
    }

    fn max_year(&self) -> i32 {
        C::MAX_YEAR
    }

    fn months_in_year(&self) -> u8 {
        C::MONTHS_IN_YEAR
    }

    fn is_leap_year(&self, year: i32) -> bool {
        C::is_leap(year)
    }

    fn length_of_month(&self, year: i32, month: u8) -> u8 {
        C::days_in_month(year, month)
    }

    fn length_of_year(&self, year: i32) -> u16 {
        C::days_in_year(year)
    }

    fn rule(&self, field: Field) -> Option<&'static DateTimeFieldRule> {
        C::field_rule(field)
    }

    fn date(&self, year: i32, month: i32, day: i32) -> CalendricalResult<AnyDate> {
        ChronoDate::<C>::try_new(year, month, day).map(C::wrap)
    }

    fn date_from_epoch_day(&self, epoch_day: i64) -> CalendricalResult<AnyDate> {
        ChronoDate::<C>::from_epoch_day(epoch_day).map(C::wrap)
    }

    fn maximum_value_in(
        &self,
        rule: &DateTimeFieldRule,
        calendrical: &dyn Calendrical,
    ) -> Option<i32> {
        if rule.chronology_kind() != C::KIND {
            return None;
        }
        C::context_maximum(rule.field(), calendrical)
    }
}

// ==== ChronoLocalDate ====

/// The object-safe view of a date in any chronology.
pub trait ChronoLocalDate: fmt::Debug {
    fn chronology(&self) -> &'static dyn Chronology;
    fn year(&self) -> i32;
    fn month(&self) -> u8;
    fn day(&self) -> u8;
    fn day_of_year(&self) -> u16;
    fn day_of_week(&self) -> DayOfWeek;
    fn is_leap_year(&self) -> bool;
    fn is_leap_day(&self) -> bool;
    fn length_of_month(&self) -> u8;
    fn length_of_year(&self) -> u16;
    fn to_epoch_day(&self) -> i64;

    /// Compares two dates of any chronologies.
    ///
    /// Dates are ordered by epoch day, and dates on the same epoch day by
    /// chronology id.
    fn compare_to(&self, other: &dyn ChronoLocalDate) -> Ordering {
        self.to_epoch_day()
            .cmp(&other.to_epoch_day())
            .then_with(|| self.chronology().kind().cmp(&other.chronology().kind()))
    }

    /// Returns whether this date is after `other`, ignoring the chronology.
    fn is_after(&self, other: &dyn ChronoLocalDate) -> bool {
        self.to_epoch_day() > other.to_epoch_day()
    }

    /// Returns whether this date is before `other`, ignoring the chronology.
    fn is_before(&self, other: &dyn ChronoLocalDate) -> bool {
        self.to_epoch_day() < other.to_epoch_day()
    }

    /// Returns whether this date is on the same day as `other`, ignoring the
    /// chronology.
    fn is_equal(&self, other: &dyn ChronoLocalDate) -> bool {
        self.to_epoch_day() == other.to_epoch_day()
    }
}
