use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseError;

/// Tokens the API sends in place of a missing monetary value.
const MISSING_TOKENS: [&str; 3] = ["", "None", "nil"];

/// Content of the quoted JSON string `"null"`, also read as zero.
const NULL_JSON_STRING: &str = "null";

const FRACTION_DIGITS: usize = 4;

/// Fixed-point decimal with exactly four fractional digits.
///
/// The stored integer is the decimal value multiplied by [`Money::SCALE`], so
/// `"0.1234"` is held as `1234` and `"-1.0"` as `-10000`. Values are only ever
/// created from wire strings or literal scaled integers; no arithmetic is
/// offered and no rounding is ever applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const SCALE: i64 = 10_000;
    pub const ZERO: Self = Self(0);

    pub const fn from_scaled(scaled: i64) -> Self {
        Self(scaled)
    }

    pub const fn scaled(self) -> i64 {
        self.0
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_money(input)
    }
}

/// Parse a decimal wire string with at most four fractional digits.
///
/// `""`, `"None"` and `"nil"` are read as zero. Anything with more than one
/// `.`, more than four fractional digits, or non-digit content is an error.
pub fn parse_money(input: &str) -> Result<Money, ParseError> {
    if MISSING_TOKENS.contains(&input) {
        return Ok(Money::ZERO);
    }

    let (whole, fraction) = match input.split_once('.') {
        Some((_, fraction)) if fraction.contains('.') => {
            return Err(invalid(input, "too many '.' separators"));
        }
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };

    let fraction = normalize_fraction(fraction).map_err(|reason| invalid(input, reason))?;

    format!("{whole}{fraction}")
        .parse::<i64>()
        .map(Money)
        .map_err(|_| invalid(input, "not a decimal number"))
}

/// Parse the content of a JSON string field.
///
/// Same as [`parse_money`], except that the string `null` is also read as
/// zero: the API quotes it as `"null"` for missing figures.
pub fn parse_money_field(input: &str) -> Result<Money, ParseError> {
    if input == NULL_JSON_STRING {
        return Ok(Money::ZERO);
    }
    parse_money(input)
}

/// Render the canonical `<int>.<4 digits>` form, e.g. `-1.0000`.
pub fn format_money(value: Money) -> String {
    value.to_string()
}

/// Right-pad the fractional digits with zeros up to exactly four characters.
///
/// The sign belongs to the integer part only, so the fraction must be bare
/// digits.
fn normalize_fraction(fraction: &str) -> Result<String, &'static str> {
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err("fractional part must be digits only");
    }
    if fraction.len() > FRACTION_DIGITS {
        return Err("more than 4 fractional digits");
    }
    Ok(format!("{fraction:0<width$}", width = FRACTION_DIGITS))
}

fn invalid(input: &str, reason: &'static str) -> ParseError {
    ParseError::Money {
        value: input.to_owned(),
        reason,
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = Self::SCALE.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / scale,
            magnitude % scale,
            width = FRACTION_DIGITS
        )
    }
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_money(s)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_money_field(&value).map_err(D::Error::custom)
    }
}
