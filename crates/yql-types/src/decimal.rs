//! Fixed-point decimal values
//!
//! A decimal is stored the way the engine sends it: a 16-byte big-endian
//! two's-complement mantissa plus the precision and scale of its type. The
//! numeric value is `mantissa / 10^scale`.

use serde::{Deserialize, Serialize};
use std::fmt;
use yql_diagnostics::{Result, ValueError};

use crate::Type;

/// Largest precision the engine accepts for `Decimal(p,s)`
pub const MAX_PRECISION: u32 = 35;

/// Decimal runtime value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    bytes: [u8; 16],
    precision: u32,
    scale: u32,
}

impl DecimalValue {
    /// Create a decimal from its mantissa, checking digit limits
    pub fn from_i128(mantissa: i128, precision: u32, scale: u32) -> Result<Self> {
        check_parts(precision, scale)?;
        let digits = digit_count(mantissa);
        if digits > precision {
            return Err(ValueError::invalid_decimal(format!(
                "mantissa {} has {} digits, Decimal({},{}) allows {}",
                mantissa, digits, precision, scale, precision
            )));
        }
        Ok(Self::from_bytes(mantissa.to_be_bytes(), precision, scale))
    }

    /// Create a decimal from raw big-endian mantissa bytes.
    ///
    /// No limits are checked; decoders use this for data that already
    /// carries a declared `Decimal(p,s)` type.
    pub const fn from_bytes(bytes: [u8; 16], precision: u32, scale: u32) -> Self {
        Self {
            bytes,
            precision,
            scale,
        }
    }

    /// Parse decimal text such as `"-12.5"` into `Decimal(precision,scale)`.
    ///
    /// Fractional digits beyond `scale` are rejected unless they are zeros.
    /// The full `MAX_PRECISION` digit range is accepted.
    pub fn parse(text: &str, precision: u32, scale: u32) -> Result<Self> {
        check_parts(precision, scale)?;
        let malformed = || ValueError::invalid_decimal(format!("cannot parse '{}' as decimal", text));

        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(malformed());
        }

        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.len() > scale as usize {
            return Err(ValueError::invalid_decimal(format!(
                "'{}' has more than {} fractional digits",
                text, scale
            )));
        }

        let overflow = || {
            ValueError::invalid_decimal(format!(
                "'{}' does not fit Decimal({},{})",
                text, precision, scale
            ))
        };
        let padding = scale as usize - frac_part.len();
        let digits = int_part
            .bytes()
            .chain(frac_part.bytes())
            .chain(std::iter::repeat_n(b'0', padding));
        let mut mantissa: i128 = 0;
        for digit in digits {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit - b'0')))
                .ok_or_else(overflow)?;
        }
        if negative {
            mantissa = -mantissa;
        }
        Self::from_i128(mantissa, precision, scale)
    }

    /// Convert a `rust_decimal::Decimal` into `Decimal(precision,scale)`
    pub fn from_rust_decimal(
        value: rust_decimal::Decimal,
        precision: u32,
        scale: u32,
    ) -> Result<Self> {
        check_parts(precision, scale)?;
        let value = if value.scale() > scale {
            value.normalize()
        } else {
            value
        };
        if value.scale() > scale {
            return Err(ValueError::invalid_decimal(format!(
                "{} has more than {} fractional digits",
                value, scale
            )));
        }
        let mantissa = 10i128
            .checked_pow(scale - value.scale())
            .and_then(|factor| value.mantissa().checked_mul(factor))
            .ok_or_else(|| {
                ValueError::invalid_decimal(format!(
                    "{} does not fit Decimal({},{})",
                    value, precision, scale
                ))
            })?;
        Self::from_i128(mantissa, precision, scale)
    }

    /// Raw big-endian mantissa bytes
    pub fn bytes(&self) -> [u8; 16] {
        self.bytes
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Decoded mantissa
    pub fn mantissa(&self) -> i128 {
        i128::from_be_bytes(self.bytes)
    }

    /// The `Decimal(p,s)` type of this value
    pub fn decimal_type(&self) -> Type {
        Type::decimal(self.precision, self.scale)
    }

    /// Detached copy of the decimal parts
    pub fn snapshot(&self) -> Decimal {
        Decimal {
            bytes: self.bytes,
            precision: self.precision,
            scale: self.scale,
        }
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.mantissa(), self.scale)
    }
}

/// Snapshot of a decimal value's parts, as returned by
/// [`to_decimal`](crate::to_decimal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
    /// Big-endian two's-complement mantissa
    pub bytes: [u8; 16],
    /// Total number of digits
    pub precision: u32,
    /// Number of fractional digits
    pub scale: u32,
}

impl Decimal {
    /// Decoded mantissa
    pub fn to_i128(&self) -> i128 {
        i128::from_be_bytes(self.bytes)
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Fails when the mantissa exceeds 96 bits or the scale exceeds 28.
    pub fn to_rust_decimal(&self) -> Result<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.to_i128(), self.scale).map_err(|e| {
            ValueError::cast_incompatible(format!(
                "decimal {} does not fit rust_decimal::Decimal: {}",
                self, e
            ))
        })
    }
}

impl From<Decimal> for DecimalValue {
    fn from(decimal: Decimal) -> Self {
        Self::from_bytes(decimal.bytes, decimal.precision, decimal.scale)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.to_i128(), self.scale)
    }
}

fn check_parts(precision: u32, scale: u32) -> Result<()> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(ValueError::invalid_decimal(format!(
            "precision {} out of range 1..={}",
            precision, MAX_PRECISION
        )));
    }
    if scale > precision {
        return Err(ValueError::invalid_decimal(format!(
            "scale {} exceeds precision {}",
            scale, precision
        )));
    }
    Ok(())
}

/// Number of decimal digits in the magnitude (zero counts as one digit)
pub(crate) fn digit_count(mantissa: i128) -> u32 {
    mantissa
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log + 1)
}

fn write_fixed(f: &mut fmt::Formatter<'_>, mantissa: i128, scale: u32) -> fmt::Result {
    let digits = mantissa.unsigned_abs().to_string();
    if mantissa < 0 {
        write!(f, "-")?;
    }
    let scale = scale as usize;
    if scale == 0 {
        return write!(f, "{}", digits);
    }
    let padded = format!("{:0>width$}", digits, width = scale + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    write!(f, "{}.{}", int_part, frac_part)
}
