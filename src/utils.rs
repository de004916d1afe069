//! Utility equations and writers for calendrical values

use core::fmt::Write;

use num_traits::ToPrimitive;
use writeable::Writeable;

/// Narrows an `i64` to an `i32` if it fits.
#[inline]
pub(crate) fn narrow(value: i64) -> Option<i32> {
    value.to_i32()
}

/// Narrows an `i64` to an `i32`, saturating at the `i32` bounds.
#[inline]
pub(crate) fn saturating_narrow(value: i64) -> i32 {
    value.to_i32().unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

// ==== Writers ====

pub(crate) fn write_padded_u8<W: Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Writes a year with at least four digits, prefixing years over 9999 with
/// `+` and negative years with `-`.
pub(crate) fn write_year<W: Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if year > 9999 {
        sink.write_char('+')?;
    } else if year < 0 {
        sink.write_char('-')?;
    }
    let abs = year.unsigned_abs();
    let mut divisor = 1000;
    while divisor > 1 && abs < divisor {
        sink.write_char('0')?;
        divisor /= 10;
    }
    abs.write_to(sink)
}

/// Writes a nanosecond fraction in groups of three digits, omitting
/// trailing groups that are zero.
pub(crate) fn write_nano_fraction<W: Write + ?Sized>(nano: u32, sink: &mut W) -> core::fmt::Result {
    let (digits, precision) = u32_to_digits(nano);
    let precision = precision.div_ceil(3) * 3;
    for digit in digits.iter().take(precision) {
        digit.write_to(sink)?;
    }
    Ok(())
}

/// Returns the nine digits of `value` and the index past the last non-zero digit.
pub(crate) fn u32_to_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}
