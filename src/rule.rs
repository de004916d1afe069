//! This module implements `DateTimeFieldRule`, the descriptor of a single
//! calendrical field.
//!
//! A rule knows the absolute bounds of its field, the period unit the field
//! varies in and the period range that bounds it. Context-aware bounds are
//! delegated to the chronology that owns the rule, and localized text is
//! built lazily and cached per locale.

use alloc::{
    string::{String, ToString},
    sync::Arc,
};
use core::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use icu_locale::Locale;

use crate::{
    calendrical::Calendrical,
    chrono::{Chronology, ChronologyKind},
    options::PeriodUnit,
    primitive::Fraction,
    text::{TextCache, TextMatch, TextStore, TextStyle},
    utils, CalendricalError, CalendricalResult,
};

/// The number of significant digits used when converting a value to a fraction.
const FRACTION_DIGITS: u8 = 9;

// ==== Field ====

/// The fields that a chronology may define rules for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Era,
    YearOfEra,
    Year,
    QuarterOfYear,
    MonthOfQuarter,
    MonthOfYear,
    DayOfMonth,
    DayOfYear,
    DayOfWeek,
    WeekBasedYear,
    WeekOfWeekBasedYear,
    AmPmOfDay,
    HourOfAmPm,
    HourOfDay,
    MinuteOfHour,
    SecondOfMinute,
    NanoOfSecond,
    MinuteOfDay,
    SecondOfDay,
}

impl Field {
    /// Returns the name of this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Era => "Era",
            Self::YearOfEra => "YearOfEra",
            Self::Year => "Year",
            Self::QuarterOfYear => "QuarterOfYear",
            Self::MonthOfQuarter => "MonthOfQuarter",
            Self::MonthOfYear => "MonthOfYear",
            Self::DayOfMonth => "DayOfMonth",
            Self::DayOfYear => "DayOfYear",
            Self::DayOfWeek => "DayOfWeek",
            Self::WeekBasedYear => "WeekBasedYear",
            Self::WeekOfWeekBasedYear => "WeekOfWeekBasedYear",
            Self::AmPmOfDay => "AmPmOfDay",
            Self::HourOfAmPm => "HourOfAmPm",
            Self::HourOfDay => "HourOfDay",
            Self::MinuteOfHour => "MinuteOfHour",
            Self::SecondOfMinute => "SecondOfMinute",
            Self::NanoOfSecond => "NanoOfSecond",
            Self::MinuteOfDay => "MinuteOfDay",
            Self::SecondOfDay => "SecondOfDay",
        }
    }

    /// Returns whether this field describes the time of day.
    #[inline]
    #[must_use]
    pub const fn is_time_field(self) -> bool {
        matches!(
            self,
            Self::AmPmOfDay
                | Self::HourOfAmPm
                | Self::HourOfDay
                | Self::MinuteOfHour
                | Self::SecondOfMinute
                | Self::NanoOfSecond
                | Self::MinuteOfDay
                | Self::SecondOfDay
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_date_field(self) -> bool {
        !self.is_time_field()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = CalendricalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FIELDS: [Field; 19] = [
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
        FIELDS
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or(CalendricalError::general("Invalid field name"))
    }
}

// ==== RuleId ====

/// The identity of a rule: the field and the chronology that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId {
    chronology: ChronologyKind,
    field: Field,
}

impl RuleId {
    #[inline]
    #[must_use]
    pub const fn new(chronology: ChronologyKind, field: Field) -> Self {
        Self { chronology, field }
    }

    #[inline]
    #[must_use]
    pub const fn chronology(&self) -> ChronologyKind {
        self.chronology
    }

    #[inline]
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.field, self.chronology.id())
    }
}

// ==== RuleSpec ====

/// A provider of the text pairs of a rule for a locale and style.
pub type TextProvider = fn(&Locale, TextStyle) -> Option<&'static [(i32, &'static str)]>;

/// The static description of a rule.
///
/// `RuleSpec` is assembled in constant context and then handed to
/// [`DateTimeFieldRule::new`].
#[derive(Clone, Copy)]
pub struct RuleSpec {
    id: RuleId,
    unit: PeriodUnit,
    range: Option<PeriodUnit>,
    minimum: i32,
    largest_minimum: i32,
    smallest_maximum: i32,
    maximum: i32,
    text: Option<TextProvider>,
}

impl RuleSpec {
    /// Creates a spec whose range never varies.
    #[must_use]
    pub const fn new(
        chronology: ChronologyKind,
        field: Field,
        unit: PeriodUnit,
        range: Option<PeriodUnit>,
        minimum: i32,
        maximum: i32,
    ) -> Self {
        Self {
            id: RuleId::new(chronology, field),
            unit,
            range,
            minimum,
            largest_minimum: minimum,
            smallest_maximum: maximum,
            maximum,
            text: None,
        }
    }

    /// Sets the smallest value the contextual maximum can take.
    #[must_use]
    pub const fn with_smallest_maximum(mut self, value: i32) -> Self {
        self.smallest_maximum = value;
        self
    }

    /// Sets the largest value the contextual minimum can take.
    #[must_use]
    pub const fn with_largest_minimum(mut self, value: i32) -> Self {
        self.largest_minimum = value;
        self
    }

    #[must_use]
    pub const fn with_text(mut self, provider: TextProvider) -> Self {
        self.text = Some(provider);
        self
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSpec")
            .field("id", &self.id)
            .field("unit", &self.unit)
            .field("range", &self.range)
            .field("minimum", &self.minimum)
            .field("largest_minimum", &self.largest_minimum)
            .field("smallest_maximum", &self.smallest_maximum)
            .field("maximum", &self.maximum)
            .field("has_text", &self.text.is_some())
            .finish()
    }
}

// ==== DateTimeFieldRule ====

/// The rule of a single calendrical field.
///
/// Rules are immutable singletons owned by their chronology. The only state
/// a rule carries is its cache of localized text stores.
///
/// ```rust
/// use calendrical_rs::chrono::{Coptic, Iso};
///
/// let rule = Coptic::day_of_month_rule();
/// assert_eq!(rule.minimum_value(), 1);
/// assert_eq!(rule.maximum_value(), 30);
/// assert_eq!(rule.smallest_maximum_value(), 5);
/// assert!(!rule.is_fixed_value_set());
///
/// assert!(Iso::hour_of_day_rule().is_fixed_value_set());
/// assert_eq!(Iso::hour_of_day_rule().check_value(23).unwrap(), 23);
/// assert!(Iso::hour_of_day_rule().check_value(24).is_err());
/// ```
pub struct DateTimeFieldRule {
    spec: RuleSpec,
    texts: TextCache,
}

impl DateTimeFieldRule {
    /// Creates a new rule from its spec.
    #[must_use]
    pub const fn new(spec: RuleSpec) -> Self {
        Self {
            spec,
            texts: TextCache::new(),
        }
    }

    // ==== Identity ====

    #[inline]
    #[must_use]
    pub const fn id(&self) -> RuleId {
        self.spec.id
    }

    #[inline]
    #[must_use]
    pub const fn field(&self) -> Field {
        self.spec.id.field
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.id.field.name()
    }

    #[inline]
    #[must_use]
    pub const fn chronology_kind(&self) -> ChronologyKind {
        self.spec.id.chronology
    }

    /// Returns the chronology that owns this rule.
    #[inline]
    #[must_use]
    pub fn chronology(&self) -> &'static dyn Chronology {
        self.spec.id.chronology.chronology()
    }

    /// Returns the unit that this field varies in.
    #[inline]
    #[must_use]
    pub const fn period_unit(&self) -> PeriodUnit {
        self.spec.unit
    }

    /// Returns the range that bounds this field, or `None` if it is unbounded.
    #[inline]
    #[must_use]
    pub const fn period_range(&self) -> Option<PeriodUnit> {
        self.spec.range
    }

    // ==== Bounds ====

    /// Returns the absolute minimum value of this field.
    #[inline]
    #[must_use]
    pub const fn minimum_value(&self) -> i32 {
        self.spec.minimum
    }

    /// Returns the largest value the minimum can take in any context.
    #[inline]
    #[must_use]
    pub const fn largest_minimum_value(&self) -> i32 {
        self.spec.largest_minimum
    }

    /// Returns the smallest value the maximum can take in any context.
    #[inline]
    #[must_use]
    pub const fn smallest_maximum_value(&self) -> i32 {
        self.spec.smallest_maximum
    }

    /// Returns the absolute maximum value of this field.
    #[inline]
    #[must_use]
    pub const fn maximum_value(&self) -> i32 {
        self.spec.maximum
    }

    /// Returns the minimum value of this field given the values already
    /// present in `calendrical`.
    #[must_use]
    pub fn minimum_value_in(&self, calendrical: &dyn Calendrical) -> i32 {
        self.chronology()
            .minimum_value_in(self, calendrical)
            .map_or(self.spec.minimum, |min| {
                min.clamp(self.spec.minimum, self.spec.largest_minimum)
            })
    }

    /// Returns the maximum value of this field given the values already
    /// present in `calendrical`.
    ///
    /// ```rust
    /// use calendrical_rs::{chrono::LocalDate, Calendrical};
    /// use calendrical_rs::chrono::Iso;
    ///
    /// let february = LocalDate::try_new(2012, 2, 1).unwrap();
    /// assert_eq!(Iso::day_of_month_rule().maximum_value_in(&february), 29);
    /// ```
    #[must_use]
    pub fn maximum_value_in(&self, calendrical: &dyn Calendrical) -> i32 {
        self.chronology()
            .maximum_value_in(self, calendrical)
            .map_or(self.spec.maximum, |max| {
                max.clamp(self.spec.smallest_maximum, self.spec.maximum)
            })
    }

    /// Returns whether the range of this field never varies with context.
    #[inline]
    #[must_use]
    pub const fn is_fixed_value_set(&self) -> bool {
        self.spec.maximum == self.spec.smallest_maximum
            && self.spec.minimum == self.spec.largest_minimum
    }

    /// Returns whether `value` is within the absolute bounds of this field.
    #[inline]
    #[must_use]
    pub fn is_valid_value(&self, value: impl Into<i64>) -> bool {
        let value = value.into();
        i64::from(self.spec.minimum) <= value && value <= i64::from(self.spec.maximum)
    }

    /// Checks that `value` is within the absolute bounds of this field and
    /// returns it narrowed to an `i32`.
    pub fn check_value(&self, value: impl Into<i64>) -> CalendricalResult<i32> {
        let value = value.into();
        if !self.is_valid_value(value) {
            return Err(self.invalid_value(value));
        }
        utils::narrow(value).ok_or_else(|| self.invalid_value(value))
    }

    /// Checks that `value` is within the contextual bounds of this field in
    /// `calendrical`.
    ///
    /// Values outside of the absolute bounds are reported as invalid values,
    /// values outside of only the contextual bounds as invalid combinations.
    pub fn check_value_in(
        &self,
        value: impl Into<i64>,
        calendrical: &dyn Calendrical,
    ) -> CalendricalResult<i32> {
        let value = self.check_value(value)?;
        let minimum = self.minimum_value_in(calendrical);
        let maximum = self.maximum_value_in(calendrical);
        if !(minimum..=maximum).contains(&value) {
            return Err(self.invalid_combination(value.into(), minimum, maximum));
        }
        Ok(value)
    }

    pub(crate) fn invalid_value(&self, value: i64) -> CalendricalError {
        CalendricalError::invalid_value(
            self.id(),
            value,
            self.spec.minimum.into(),
            self.spec.maximum.into(),
        )
    }

    pub(crate) fn invalid_combination(
        &self,
        value: i64,
        minimum: i32,
        maximum: i32,
    ) -> CalendricalError {
        CalendricalError::invalid_combination(self.id(), value, minimum.into(), maximum.into())
    }

    // ==== Values ====

    /// Returns the value of this field in `calendrical`, or `None` if the
    /// calendrical does not carry it.
    #[inline]
    pub fn value_from(&self, calendrical: &dyn Calendrical) -> Option<i32> {
        calendrical.get(self)
    }

    /// Returns the value of this field in `calendrical`, failing if the
    /// calendrical does not carry it.
    pub fn value_from_checked(&self, calendrical: &dyn Calendrical) -> CalendricalResult<i32> {
        calendrical.get(self).ok_or_else(|| {
            CalendricalError::unsupported()
                .with_rule(self.id())
                .with_message("the field is not available in this calendrical")
        })
    }

    // ==== Fractions ====

    fn check_fraction_support(&self, action: &'static str) -> CalendricalResult<u64> {
        if !self.is_fixed_value_set() {
            return Err(CalendricalError::unsupported()
                .with_rule(self.id())
                .with_message(alloc::format!(
                    "The fractional value of {} {action} as the range is not fixed",
                    self.name()
                )));
        }
        if self.spec.minimum != 0 {
            return Err(CalendricalError::unsupported()
                .with_rule(self.id())
                .with_message(alloc::format!(
                    "The fractional value of {} {action} as the minimum value is not zero",
                    self.name()
                )));
        }
        // A zero minimum and a fixed range imply a non-negative maximum.
        Ok(u64::from(self.spec.maximum.unsigned_abs()) + 1)
    }

    /// Converts `value` to a fraction of this field's range.
    ///
    /// The fraction is `value / (maximum + 1)` floored to nine significant
    /// digits. Only fixed-range fields with a zero minimum support fractions.
    ///
    /// ```rust
    /// use calendrical_rs::chrono::Iso;
    ///
    /// let rule = Iso::second_of_minute_rule();
    /// assert_eq!(rule.convert_int_to_fraction(30).unwrap().to_string(), "0.5");
    /// assert!(Iso::day_of_month_rule().convert_int_to_fraction(1).is_err());
    /// ```
    pub fn convert_int_to_fraction(&self, value: i32) -> CalendricalResult<Fraction> {
        let range = self.check_fraction_support("cannot be obtained")?;
        let value = self.check_value(value)?;
        Ok(Fraction::from_ratio_floor(
            u64::from(value.unsigned_abs()),
            range,
            FRACTION_DIGITS,
        ))
    }

    /// Converts a fraction of this field's range back to a value.
    ///
    /// The fraction must either multiply out to an exact integer or be the
    /// fraction that [`Self::convert_int_to_fraction`] produces for some value.
    pub fn convert_fraction_to_int(&self, fraction: Fraction) -> CalendricalResult<i32> {
        let range = self.check_fraction_support("cannot be converted")?;
        let (floor, exact) = fraction.mul_floor(range);
        let value = if exact {
            floor
        } else {
            let ceiling = floor + 1;
            if ceiling >= range
                || Fraction::from_ratio_floor(ceiling, range, FRACTION_DIGITS) != fraction
            {
                return Err(CalendricalError::invalid()
                    .with_rule(self.id())
                    .with_message(alloc::format!(
                        "The fractional value {fraction} is an invalid fractional value for {}",
                        self.name()
                    )));
            }
            ceiling
        };
        self.check_value(i64::try_from(value).unwrap_or(i64::MAX))
    }

    // ==== Text ====

    /// Returns the text store of this field for `locale` and `style`, or
    /// `None` if the field has no text in that locale.
    pub fn text_store(&self, locale: &Locale, style: TextStyle) -> Option<Arc<TextStore>> {
        let provider = self.spec.text?;
        self.texts.get_or_build(locale, style, || {
            let pairs = provider(locale, style)?;
            TextStore::try_new(locale.clone(), pairs.iter().copied()).ok()
        })
    }

    /// Returns the text of `value`, falling back to its decimal form.
    ///
    /// ```rust
    /// use calendrical_rs::{chrono::Iso, text::TextStyle, Locale};
    ///
    /// let en = Locale::try_from_str("en").unwrap();
    /// let rule = Iso::month_of_year_rule();
    /// assert_eq!(rule.text(1, &en, TextStyle::Full), "January");
    /// assert_eq!(rule.text(13, &en, TextStyle::Full), "13");
    /// ```
    #[must_use]
    pub fn text(&self, value: i32, locale: &Locale, style: TextStyle) -> String {
        self.text_store(locale, style)
            .and_then(|store| store.value_text(value).map(ToString::to_string))
            .unwrap_or_else(|| value.to_string())
    }

    /// Matches the longest text of this field at the start of `input`.
    ///
    /// Fields without text for `locale` and `style` report
    /// [`TextMatch::Unsupported`].
    #[must_use]
    pub fn match_text(
        &self,
        locale: &Locale,
        style: TextStyle,
        ignore_case: bool,
        input: &str,
    ) -> TextMatch {
        match self.text_store(locale, style) {
            Some(store) => store.match_text(ignore_case, input),
            None => TextMatch::Unsupported,
        }
    }

    #[cfg(all(test, feature = "std"))]
    pub(crate) fn cached_text_stores(&self) -> usize {
        self.texts.len()
    }
}

impl PartialEq for DateTimeFieldRule {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for DateTimeFieldRule {}

impl Hash for DateTimeFieldRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for DateTimeFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTimeFieldRule")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for DateTimeFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
