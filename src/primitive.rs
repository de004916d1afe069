//! Implementation of the `Fraction` primitive

use core::{cmp::Ordering, fmt, str::FromStr};

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{CalendricalError, CalendricalResult};

/// The largest scale a `Fraction` may carry.
const MAX_SCALE: u8 = 18;

const fn pow10(exp: u8) -> u128 {
    let mut result = 1u128;
    let mut i = 0;
    while i < exp {
        result *= 10;
        i += 1;
    }
    result
}

/// An exact decimal fraction in the range `[0, 1)`.
///
/// The value is `unscaled / 10^scale`. Trailing zeros are always stripped,
/// so two fractions are equal exactly when their values are equal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    unscaled: u64,
    scale: u8,
}

impl Fraction {
    /// The zero fraction.
    pub const ZERO: Self = Self {
        unscaled: 0,
        scale: 0,
    };

    /// Creates a new `Fraction` of `unscaled / 10^scale`.
    pub fn try_new(unscaled: u64, scale: u8) -> CalendricalResult<Self> {
        if scale > MAX_SCALE || u128::from(unscaled) >= pow10(scale) {
            return Err(CalendricalError::general(
                "fractional value must be in the range [0, 1)",
            ));
        }
        Ok(Self::normalized(unscaled, scale))
    }

    const fn normalized(mut unscaled: u64, mut scale: u8) -> Self {
        if unscaled == 0 {
            return Self::ZERO;
        }
        while scale > 0 && unscaled % 10 == 0 {
            unscaled /= 10;
            scale -= 1;
        }
        Self { unscaled, scale }
    }

    /// Returns `numerator / denominator` rounded toward negative infinity to
    /// `significant_digits` significant digits.
    ///
    /// `numerator` must be less than `denominator`.
    pub(crate) fn from_ratio_floor(
        numerator: u64,
        denominator: u64,
        significant_digits: u8,
    ) -> Self {
        if numerator == 0 || denominator == 0 || numerator >= denominator {
            return Self::ZERO;
        }
        let lower = pow10(significant_digits.saturating_sub(1));
        let mut scale = 0;
        let mut quotient = 0;
        while scale < MAX_SCALE {
            scale += 1;
            quotient = u128::from(numerator) * pow10(scale) / u128::from(denominator);
            if quotient >= lower {
                break;
            }
        }
        Self::normalized(quotient as u64, scale)
    }

    /// Multiplies this fraction by `factor`.
    ///
    /// Returns the floor of the product and whether the product is an exact integer.
    pub(crate) fn mul_floor(&self, factor: u64) -> (u64, bool) {
        let divisor = pow10(self.scale);
        let product = u128::from(self.unscaled) * u128::from(factor);
        ((product / divisor) as u64, product % divisor == 0)
    }

    /// Returns the unscaled digits of this fraction.
    #[inline]
    #[must_use]
    pub const fn unscaled(&self) -> u64 {
        self.unscaled
    }

    /// Returns the number of decimal places in this fraction.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.unscaled == 0
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.unscaled) * pow10(other.scale);
        let rhs = u128::from(other.unscaled) * pow10(self.scale);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Fraction {
    type Err = CalendricalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = match s.split_once('.') {
            Some(("0" | "", digits)) => digits,
            None if s == "0" => "",
            _ => {
                return Err(CalendricalError::general(
                    "fractional value must be in the range [0, 1)",
                ))
            }
        };
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalendricalError::general("fractional value is not a decimal"));
        }
        let digits = digits.trim_end_matches('0');
        let scale = u8::try_from(digits.len())
            .ok()
            .filter(|scale| *scale <= MAX_SCALE)
            .ok_or(CalendricalError::general("fractional value has too many digits"))?;
        let unscaled = if digits.is_empty() {
            0
        } else {
            digits
                .parse::<u64>()
                .map_err(|_| CalendricalError::general("fractional value is not a decimal"))?
        };
        Self::try_new(unscaled, scale)
    }
}

impl Writeable for Fraction {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_char('0')?;
        if self.scale == 0 {
            return Ok(());
        }
        sink.write_char('.')?;
        let mut divisor = pow10(self.scale - 1);
        let unscaled = u128::from(self.unscaled);
        while divisor > 0 {
            let digit = ((unscaled / divisor) % 10) as u8;
            digit.write_to(sink)?;
            divisor /= 10;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.scale == 0 {
            LengthHint::exact(1)
        } else {
            LengthHint::exact(2 + usize::from(self.scale))
        }
    }
}

impl_display_with_writeable!(Fraction);
