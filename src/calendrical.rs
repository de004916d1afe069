//! The generic field lookup shared by every calendrical value.

use crate::rule::DateTimeFieldRule;

/// A value that can answer queries for the fields it carries or can derive.
///
/// ```rust
/// use calendrical_rs::{chrono::{Coptic, Iso, LocalDate}, Calendrical};
///
/// let date = LocalDate::try_new(1945, 11, 12).unwrap();
/// assert_eq!(date.get(Iso::month_of_year_rule()), Some(11));
/// // Fields of another chronology are derived through the epoch day.
/// assert_eq!(date.get(Coptic::month_of_year_rule()), Some(3));
/// // A date carries no time of day.
/// assert_eq!(date.get(Iso::hour_of_day_rule()), None);
/// ```
pub trait Calendrical {
    /// Returns the value of the field described by `rule`, or `None` if this
    /// calendrical neither carries nor can derive it.
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32>;
}

impl<T: Calendrical + ?Sized> Calendrical for &T {
    fn get(&self, rule: &DateTimeFieldRule) -> Option<i32> {
        (**self).get(rule)
    }
}
