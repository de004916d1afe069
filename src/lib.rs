//! The `calendrical_rs` crate provides immutable calendrical values, field
//! rules and chronologies in Rust.
//!
//! ```rust
//! use calendrical_rs::{chrono::{CopticDate, LocalDate, MinguoDate}, DayOfWeek};
//!
//! // Create a date in the ISO chronology
//! let iso = LocalDate::try_new(1945, 11, 12).unwrap();
//!
//! // Convert it to the Coptic chronology through the shared epoch day
//! let coptic = iso.to_chronology::<calendrical_rs::chrono::Coptic>().unwrap();
//! assert_eq!(coptic, CopticDate::try_new(1662, 3, 3).unwrap());
//! assert_eq!(coptic.day_of_week(), DayOfWeek::Monday);
//!
//! // Minguo years are counted from 1912
//! let minguo = MinguoDate::try_new(101, 10, 29).unwrap();
//! assert_eq!(minguo.to_string(), "Minguo ROC 101-10-29");
//! ```
//!
//! Every calendrical value answers generic field queries through the
//! [`Calendrical`] trait, and every field is described by a
//! [`DateTimeFieldRule`] that carries its bounds, period unit and range,
//! and its localized text.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod calendrical;
pub mod chrono;
pub mod error;
pub mod fields;
pub mod matchers;
pub mod options;
pub mod primitive;
pub mod rule;
pub mod text;
pub mod values;

mod datetime;
mod period;
mod time;

#[doc(hidden)]
pub(crate) mod intern;
#[doc(hidden)]
pub(crate) mod utils;

/// Re-export of `TinyAsciiStr` from `tinystr`.
pub use tinystr::TinyAsciiStr;

/// Re-export of `Locale` from `icu_locale`.
pub use icu_locale::Locale;

#[doc(inline)]
pub use error::CalendricalError;

/// The `calendrical_rs` result type
pub type CalendricalResult<T> = Result<T, CalendricalError>;

pub use crate::{
    calendrical::Calendrical,
    datetime::ChronoDateTime,
    period::Period,
    rule::{DateTimeFieldRule, Field},
    time::{LocalTime, TimeOverflow},
    values::{AmPmOfDay, DayOfWeek},
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait CalendricalUnwrap {
    type Output;

    /// `calendrical_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn calendrical_unwrap(self) -> CalendricalResult<Self::Output>;
}

impl<T> CalendricalUnwrap for Option<T> {
    type Output = T;

    fn calendrical_unwrap(self) -> CalendricalResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(CalendricalError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! calendrical_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendricalError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendricalError::assert());
        }
    };
}

// Relevant numeric constants
/// Seconds per day constant: 86,400
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
/// Nanoseconds per second constant: 1e+9
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds per day constant: 8.64e+13
pub const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * NANOS_PER_SECOND;
