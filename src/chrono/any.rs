//! This module implements `AnyDate`, a date of any supported chronology.

use core::{cmp::Ordering, fmt};

use writeable::Writeable;

use super::{ChronoLocalDate, Chronology, CopticDate, LocalDate, MinguoDate};
use crate::{calendrical::Calendrical, rule::DateTimeFieldRule, values::DayOfWeek};

/// A date of any supported chronology.
///
/// `AnyDate` is totally ordered by epoch day, and dates on the same epoch
/// day by chronology id.
///
/// ```rust
/// use calendrical_rs::chrono::{CopticDate, LocalDate};
///
/// let iso = LocalDate::try_new(1945, 11, 12).unwrap().to_any();
/// let coptic = CopticDate::try_new(1662, 3, 3).unwrap().to_any();
///
/// // Same day, so Coptic orders before ISO by id.
/// assert!(coptic < iso);
/// assert_eq!(iso.day_of_week(), coptic.day_of_week());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyDate {
    Iso(LocalDate),
    Coptic(CopticDate),
    Minguo(MinguoDate),
}

macro_rules! delegate {
    ($self:ident, $date:ident => $expr:expr) => {
        match $self {
            AnyDate::Iso($date) => $expr,
            AnyDate::Coptic($date) => $expr,
            AnyDate::Minguo($date) => $expr,
        }
    };
}

impl AnyDate {
    /// Returns the ISO date on the same day.
    #[must_use]
    pub fn to_iso(&self) -> Option<LocalDate> {
        match self {
            Self::Iso(date) => Some(*date),
            Self::Coptic(date) => date.to_chronology().ok(),
            Self::Minguo(date) => date.to_chronology().ok(),
        }
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        delegate!(self, date => date.year())
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        delegate!(self, date => date.month())
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        delegate!(self, date => date.day())
    }

    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        delegate!(self, date => date.day_of_week())
    }

    #[inline]
    #[must_use]
    pub fn to_epoch_day(&self) -> i64 {
        delegate!(self, date => date.to_epoch_day())
    }
}

impl ChronoLocalDate for AnyDate {
    fn chronology(&self) -> &'static dyn Chronology {
        delegate!(self, date => ChronoLocalDate::chronology(date))
    }

    fn year(&self) -> i32 {
        AnyDate::year(self)
    }

    fn month(&self) -> u8 {
        AnyDate::month(self)
    }

    fn day(&self) -> u8 {
        AnyDate::day(self)
    }

    fn day_of_year(&self) -> u16 {
        delegate!(self, date => date.day_of_year())
    }

    fn day_of_week(&self) -> DayOfWeek {
        AnyDate::day_of_week(self)
    }

    fn is_leap_year(&self) -> bool {
        delegate!(self, date => date.is_leap_year())
    }

    fn is_leap_day(&self) -> bool {
        delegate!(self, date => date.is_leap_day())
    }

    fn length_of_month(&self) -> u8 {
        delegate!(self, date => date.length_of_month())
    }

    fn length_of_year(&self) -> u16 {
        delegate!(self, date => date.length_of_year())
    }

    fn to_epoch_day(&self) -> i64 {
        AnyDate::to_epoch_day(self)
    }
}

impl Calendrical for AnyDate {
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
        delegate!(self, date => date.get(rule))
    }
}

impl PartialOrd for AnyDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnyDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl Writeable for AnyDate {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        delegate!(self, date => date.write_to(sink))
    }
}

writeable::impl_display_with_writeable!(AnyDate);
