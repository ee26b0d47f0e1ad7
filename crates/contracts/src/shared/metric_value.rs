//! Display values of dashboard metrics: `+32%`, `$4.2K`, `18 days`, `1234`.
//!
//! Each form has exactly one parse rule (`FromStr`) and one format rule
//! (`Display`), and formatting a parsed value reproduces the canonical text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyUnit {
    One,
    Thousands,
    Millions,
}

impl CurrencyUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            CurrencyUnit::One => "",
            CurrencyUnit::Thousands => "K",
            CurrencyUnit::Millions => "M",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Days,
    Hours,
    Minutes,
}

impl DurationUnit {
    /// Suffix for a rounded amount: `1 day`, `2 days`, `30min`, `1h`.
    pub fn suffix(&self, rounded: i64) -> &'static str {
        match self {
            DurationUnit::Days if rounded.abs() == 1 => " day",
            DurationUnit::Days => " days",
            DurationUnit::Hours => "h",
            DurationUnit::Minutes => "min",
        }
    }
}

// Порядок важен: "days" проверяется раньше "day", "min" раньше "h"
const DURATION_SUFFIXES: &[(&str, DurationUnit)] = &[
    ("days", DurationUnit::Days),
    ("day", DurationUnit::Days),
    ("min", DurationUnit::Minutes),
    ("h", DurationUnit::Hours),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricParseError {
    #[error("empty metric value")]
    Empty,
    #[error("no number in metric value `{0}`")]
    MissingNumber(String),
    #[error("invalid number `{0}` in metric value")]
    InvalidNumber(String),
}

/// A numeric quantity paired with the rule used to display it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    Percent(f64),
    Currency { amount: f64, unit: CurrencyUnit },
    Duration { amount: f64, unit: DurationUnit },
    Plain(f64),
}

impl MetricValue {
    pub fn dollars(amount: f64, unit: CurrencyUnit) -> Self {
        MetricValue::Currency { amount, unit }
    }

    pub fn days(amount: f64) -> Self {
        MetricValue::Duration {
            amount,
            unit: DurationUnit::Days,
        }
    }

    /// Numeric magnitude with every decoration stripped.
    pub fn magnitude(&self) -> f64 {
        match *self {
            MetricValue::Percent(v) | MetricValue::Plain(v) => v,
            MetricValue::Currency { amount, .. } | MetricValue::Duration { amount, .. } => amount,
        }
    }

    /// Same variant and unit, new magnitude. Used for animation frames.
    pub fn with_magnitude(&self, value: f64) -> Self {
        match *self {
            MetricValue::Percent(_) => MetricValue::Percent(value),
            MetricValue::Plain(_) => MetricValue::Plain(value),
            MetricValue::Currency { unit, .. } => MetricValue::Currency {
                amount: value,
                unit,
            },
            MetricValue::Duration { unit, .. } => MetricValue::Duration {
                amount: value,
                unit,
            },
        }
    }

    /// Parses any display string without failing.
    ///
    /// Falls back to the digits/sign/dot characters of the input when no
    /// known form matches, and to `0` when there are no digits at all.
    pub fn parse_lenient(s: &str) -> Self {
        if let Ok(value) = s.parse::<MetricValue>() {
            return value;
        }

        let numeric: String = s
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
            .collect();
        if !numeric.chars().any(|c| c.is_ascii_digit()) {
            return MetricValue::Plain(0.0);
        }
        MetricValue::Plain(longest_numeric_prefix(&numeric))
    }

    /// Change badge text: positive values get an explicit `+`.
    pub fn format_signed(&self) -> String {
        let text = self.to_string();
        if self.magnitude().round() > 0.0 {
            format!("+{}", text)
        } else {
            text
        }
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Plain(0.0)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricValue::Percent(v) => write!(f, "{}%", round_to_i64(v)),
            MetricValue::Plain(v) => write!(f, "{}", round_to_i64(v)),
            MetricValue::Duration { amount, unit } => {
                let rounded = round_to_i64(amount);
                write!(f, "{}{}", rounded, unit.suffix(rounded))
            }
            MetricValue::Currency { amount, unit } => {
                let sign = if amount < 0.0 { "-" } else { "" };
                match unit {
                    CurrencyUnit::One => {
                        write!(f, "{}${}", sign, format_thousands(round_to_i64(amount.abs())))
                    }
                    CurrencyUnit::Thousands | CurrencyUnit::Millions => {
                        write!(f, "{}${:.1}{}", sign, amount.abs(), unit.suffix())
                    }
                }
            }
        }
    }
}

impl FromStr for MetricValue {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MetricParseError::Empty);
        }

        // `~32%`, `32% YoY`: the number before the first `%`
        if let Some((body, _)) = s.split_once('%') {
            return parse_percent(s, body);
        }

        if s.contains('$') {
            return parse_currency(s);
        }

        let lower = s.to_lowercase();
        for (suffix, unit) in DURATION_SUFFIXES {
            if let Some(body) = lower.strip_suffix(suffix) {
                let amount = parse_number(body)?;
                // only whole durations survive a display round-trip
                if amount.fract() != 0.0 {
                    return Err(MetricParseError::InvalidNumber(body.trim().to_string()));
                }
                return Ok(MetricValue::Duration {
                    amount,
                    unit: *unit,
                });
            }
        }

        parse_number(s).map(MetricValue::Plain)
    }
}

fn parse_percent(s: &str, body: &str) -> Result<MetricValue, MetricParseError> {
    let numeric: String = body
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        .collect();
    if !numeric.chars().any(|c| c.is_ascii_digit()) {
        return Err(MetricParseError::MissingNumber(s.to_string()));
    }
    Ok(MetricValue::Percent(longest_numeric_prefix(&numeric)))
}

fn parse_currency(s: &str) -> Result<MetricValue, MetricParseError> {
    let negative = s.starts_with('-');
    let body = s.trim_start_matches(|c: char| c == '-' || c == '+');
    let body = body
        .strip_prefix('$')
        .ok_or_else(|| MetricParseError::InvalidNumber(s.to_string()))?;

    let (body, unit) = if let Some(b) = body.strip_suffix(|c: char| c == 'K' || c == 'k') {
        (b, CurrencyUnit::Thousands)
    } else if let Some(b) = body.strip_suffix(|c: char| c == 'M' || c == 'm') {
        (b, CurrencyUnit::Millions)
    } else {
        (body, CurrencyUnit::One)
    };

    let amount = parse_number(body)?;
    Ok(MetricValue::Currency {
        amount: if negative { -amount } else { amount },
        unit,
    })
}

fn parse_number(body: &str) -> Result<f64, MetricParseError> {
    let cleaned: String = body
        .trim()
        .trim_start_matches('+')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err(MetricParseError::MissingNumber(body.to_string()));
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(MetricParseError::InvalidNumber(cleaned)),
    }
}

/// Longest prefix of an ASCII numeric string that parses as a finite float.
fn longest_numeric_prefix(s: &str) -> f64 {
    (1..=s.len())
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok().filter(|v| v.is_finite()))
        .unwrap_or(0.0)
}

fn round_to_i64(v: f64) -> i64 {
    v.round() as i64
}

/// `4200` → `4,200`
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reformat(s: &str) -> String {
        s.parse::<MetricValue>().unwrap().to_string()
    }

    #[test]
    fn test_canonical_forms() {
        assert_eq!(reformat("+32%"), "32%");
        assert_eq!(reformat("$4.2K"), "$4.2K");
        assert_eq!(reformat("18 days"), "18 days");
        assert_eq!(reformat("189%"), "189%");
        assert_eq!(reformat("$4,200"), "$4,200");
        assert_eq!(reformat("$120,000"), "$120,000");
        assert_eq!(reformat("$84.5K"), "$84.5K");
        assert_eq!(reformat("30min"), "30min");
        assert_eq!(reformat("1h"), "1h");
        assert_eq!(reformat("1234"), "1234");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("+32%".parse(), Ok(MetricValue::Percent(32.0)));
        assert_eq!("-2%".parse(), Ok(MetricValue::Percent(-2.0)));
        assert_eq!(
            "$4.2K".parse(),
            Ok(MetricValue::dollars(4.2, CurrencyUnit::Thousands))
        );
        assert_eq!("18 days".parse(), Ok(MetricValue::days(18.0)));
        assert_eq!("1 day".parse(), Ok(MetricValue::days(1.0)));
        assert_eq!("245".parse(), Ok(MetricValue::Plain(245.0)));
        assert_eq!(
            "-$1.5M".parse(),
            Ok(MetricValue::dollars(-1.5, CurrencyUnit::Millions))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<MetricValue>(), Err(MetricParseError::Empty));
        assert_eq!("   ".parse::<MetricValue>(), Err(MetricParseError::Empty));
        assert!(matches!(
            "%".parse::<MetricValue>(),
            Err(MetricParseError::MissingNumber(_))
        ));
        assert!(matches!(
            "abc".parse::<MetricValue>(),
            Err(MetricParseError::InvalidNumber(_))
        ));
        assert!("inf".parse::<MetricValue>().is_err());
    }

    #[test]
    fn test_lenient_fallback() {
        assert_eq!(MetricValue::parse_lenient("+32%"), MetricValue::Percent(32.0));
        assert_eq!(MetricValue::parse_lenient("~12 pts"), MetricValue::Plain(12.0));
        assert_eq!(MetricValue::parse_lenient("1.2.3x"), MetricValue::Plain(1.2));
        assert_eq!(MetricValue::parse_lenient("n/a"), MetricValue::Plain(0.0));
        assert_eq!(MetricValue::parse_lenient(""), MetricValue::Plain(0.0));
        assert_eq!(MetricValue::parse_lenient("-"), MetricValue::Plain(0.0));
    }

    #[test]
    fn test_format_rules() {
        assert_eq!(MetricValue::Percent(31.6).to_string(), "32%");
        assert_eq!(MetricValue::Plain(0.4).to_string(), "0");
        assert_eq!(
            MetricValue::dollars(4.24, CurrencyUnit::Thousands).to_string(),
            "$4.2K"
        );
        assert_eq!(
            MetricValue::dollars(-4200.0, CurrencyUnit::One).to_string(),
            "-$4,200"
        );
        assert_eq!(MetricValue::days(17.6).to_string(), "18 days");
        assert_eq!(MetricValue::days(1.0).to_string(), "1 day");
        assert_eq!(MetricValue::days(-1.2).to_string(), "-1 day");
        assert_eq!(MetricValue::days(0.0).to_string(), "0 days");
    }

    #[test]
    fn test_percent_sign_anywhere() {
        for text in ["~32%", "32% YoY", "≈ +32%", "+32 %"] {
            let value: MetricValue = text.parse().unwrap();
            assert_eq!(value, MetricValue::Percent(32.0), "{text}");
            assert_eq!(value.to_string(), "32%");
        }
        assert_eq!("-2.5% MoM".parse(), Ok(MetricValue::Percent(-2.5)));
        assert!(matches!(
            "n/a %".parse::<MetricValue>(),
            Err(MetricParseError::MissingNumber(_))
        ));
    }

    #[test]
    fn test_duration_suffixes_round_trip() {
        for (suffix, unit) in DURATION_SUFFIXES {
            let canonical = match *suffix {
                "days" => "18 days",
                "day" => "1 day",
                "min" => "30min",
                _ => "1h",
            };
            let value: MetricValue = canonical.parse().unwrap();
            assert!(
                matches!(value, MetricValue::Duration { unit: u, .. } if u == *unit),
                "{canonical}"
            );
            assert_eq!(value.to_string(), canonical);
        }
    }

    #[test]
    fn test_fractional_duration_rejected() {
        assert!(matches!(
            "1.5h".parse::<MetricValue>(),
            Err(MetricParseError::InvalidNumber(_))
        ));
        assert!("2.5 days".parse::<MetricValue>().is_err());
        assert_eq!(MetricValue::parse_lenient("1.5h"), MetricValue::Plain(1.5));
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(MetricValue::Percent(12.0).format_signed(), "+12%");
        assert_eq!(MetricValue::Percent(-2.0).format_signed(), "-2%");
        assert_eq!(MetricValue::Percent(0.0).format_signed(), "0%");
    }

    #[test]
    fn test_with_magnitude_keeps_unit() {
        let target = MetricValue::dollars(84.5, CurrencyUnit::Thousands);
        let frame = target.with_magnitude(40.0);
        assert_eq!(frame, MetricValue::dollars(40.0, CurrencyUnit::Thousands));
        assert_eq!(frame.magnitude(), 40.0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-4200), "-4,200");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&MetricValue::Percent(32.0)).unwrap();
        assert_eq!(json, r#"{"kind":"percent","value":32.0}"#);
        let back: MetricValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MetricValue::Percent(32.0));
    }
}
