use std::fmt;

/// Money is represented as integer cents to avoid floating-point drift.
/// 1 unit = 100 cents, so 1000.00 = 100000 cents.
pub type Cents = i64;

/// Format cents as a two-decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// A decimal amount as entered by the user.
///
/// Keeps enough of the digits beyond the cent to compare exactly against a
/// balance and to round half-up, so "1000.001" is larger than 1000.00 and
/// "0.001" is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    negative: bool,
    /// Magnitude truncated to whole cents.
    cents: Cents,
    /// First digit after the cents.
    next_digit: u8,
    /// Whether any digit after the cents is non-zero.
    has_remainder: bool,
}

impl Amount {
    /// Parse a decimal string. Example: "50", "12.5", ".50", "1.999"
    pub fn parse(input: &str) -> Result<Self, ParseCentsError> {
        let input = input.trim();
        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let (units_str, decimal_str) = match digits.split_once('.') {
            Some((units, decimal)) => (units, decimal),
            None => (digits, ""),
        };

        if units_str.is_empty() && decimal_str.is_empty() {
            return Err(ParseCentsError::InvalidFormat);
        }
        if !is_digits(units_str) || !is_digits(decimal_str) {
            return Err(ParseCentsError::InvalidFormat);
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| ParseCentsError::Overflow)?
        };

        let fraction = decimal_str.as_bytes();
        let digit = |i: usize| fraction.get(i).map_or(0, |b| (b - b'0') as i64);
        let decimal_cents = digit(0) * 10 + digit(1);
        let rest = fraction.get(2..).unwrap_or(&[]);

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(decimal_cents))
            .ok_or(ParseCentsError::Overflow)?;

        Ok(Self {
            negative,
            cents,
            next_digit: rest.first().map_or(0, |b| b - b'0'),
            has_remainder: rest.iter().any(|b| *b != b'0'),
        })
    }

    pub fn from_cents(cents: Cents) -> Self {
        Self {
            negative: cents < 0,
            cents: cents.checked_abs().unwrap_or(i64::MAX),
            next_digit: 0,
            has_remainder: false,
        }
    }

    /// Strictly greater than zero, counting digits beyond the cent.
    pub fn is_positive(&self) -> bool {
        !self.negative && (self.cents > 0 || self.has_remainder)
    }

    /// Whether the exact amount is larger than `balance`.
    pub fn exceeds(&self, balance: Cents) -> bool {
        if self.negative {
            // -(cents + r) > balance  <=>  cents < -balance, for 0 <= r < 1
            (self.cents as i128) < -(balance as i128)
        } else {
            self.cents > balance || (self.cents == balance && self.has_remainder)
        }
    }

    /// Round to the nearest cent, halves away from zero.
    pub fn to_cents(&self) -> Result<Cents, ParseCentsError> {
        let magnitude = if self.next_digit >= 5 {
            self.cents.checked_add(1).ok_or(ParseCentsError::Overflow)?
        } else {
            self.cents
        };
        Ok(if self.negative { -magnitude } else { magnitude })
    }
}

/// Parse a decimal string into cents, rounding half-up past two digits.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "1.999" -> 200
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    Amount::parse(input)?.to_cents()
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a stored JSON number (whole units) into cents, rounding to the
/// nearest cent. Returns `None` for values that do not fit.
pub fn cents_from_units(units: f64) -> Option<Cents> {
    let cents = (units * 100.0).round();
    if cents.is_finite() && cents >= i64::MIN as f64 && cents <= i64::MAX as f64 {
        Some(cents as Cents)
    } else {
        None
    }
}

/// Convert cents into whole units for storage as a JSON number.
pub fn cents_to_units(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Overflow,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::Overflow => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
