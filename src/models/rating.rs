use serde_json::Value;

/// A rating as handed over by a caller, before classification.
///
/// Callers pass whatever they hold (a number, an optional number, the raw
/// string from a form field, a JSON field from a profile record) and the
/// conversion below normalizes it the way a browser's numeric conversion
/// would. `Missing` stands for null, undefined or an absent field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingInput {
    Missing,
    Number(f64),
}

impl RatingInput {
    /// Numeric value used for tier resolution. Missing input has no number.
    pub fn coerce(&self) -> f64 {
        match self {
            RatingInput::Missing => f64::NAN,
            RatingInput::Number(value) => *value,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RatingInput::Missing)
    }

    /// Finite numeric value, if there is one.
    pub fn finite(&self) -> Option<f64> {
        match self {
            RatingInput::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }
}

/// Browser-style string to number conversion.
///
/// Whitespace is trimmed, an empty string is zero, `0x`/`0o`/`0b`
/// prefixes select a radix and `Infinity` is accepted. Anything else that
/// is not a plain decimal literal is NaN.
pub fn coerce_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = trimmed.get(2..).unwrap_or("");
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        // Accumulate in f64 so literals wider than 64 bits stay finite
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit));
    }

    // Rust's float grammar also accepts "inf" and "nan" spellings, which a
    // browser would reject.
    let is_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl From<f64> for RatingInput {
    fn from(value: f64) -> Self {
        RatingInput::Number(value)
    }
}

impl From<f32> for RatingInput {
    fn from(value: f32) -> Self {
        RatingInput::Number(f64::from(value))
    }
}

macro_rules! rating_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RatingInput {
                fn from(value: $ty) -> Self {
                    RatingInput::Number(value as f64)
                }
            }
        )*
    };
}

rating_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T: Into<RatingInput>> From<Option<T>> for RatingInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RatingInput::Missing)
    }
}

impl From<&str> for RatingInput {
    fn from(value: &str) -> Self {
        RatingInput::Number(coerce_str(value))
    }
}

impl From<String> for RatingInput {
    fn from(value: String) -> Self {
        RatingInput::from(value.as_str())
    }
}

impl From<&String> for RatingInput {
    fn from(value: &String) -> Self {
        RatingInput::from(value.as_str())
    }
}

impl From<bool> for RatingInput {
    fn from(value: bool) -> Self {
        RatingInput::Number(if value { 1.0 } else { 0.0 })
    }
}

impl From<&Value> for RatingInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RatingInput::Missing,
            Value::Bool(flag) => RatingInput::from(*flag),
            Value::Number(number) => RatingInput::Number(number.as_f64().unwrap_or(f64::NAN)),
            Value::String(text) => RatingInput::from(text.as_str()),
            Value::Array(_) | Value::Object(_) => RatingInput::Number(f64::NAN),
        }
    }
}

impl From<Value> for RatingInput {
    fn from(value: Value) -> Self {
        RatingInput::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_coercion() {
        assert_eq!(coerce_str("1450"), 1450.0);
        assert_eq!(coerce_str("  799.5 \n"), 799.5);
        assert_eq!(coerce_str("1e3"), 1000.0);
        assert_eq!(coerce_str("+12"), 12.0);
        assert_eq!(coerce_str(""), 0.0);
        assert_eq!(coerce_str("   "), 0.0);
        assert_eq!(coerce_str("0x1F"), 31.0);
        assert_eq!(coerce_str("0b101"), 5.0);
        assert_eq!(coerce_str("0o17"), 15.0);
        assert_eq!(coerce_str("0x10000000000000000"), 18446744073709551616.0);
        assert_eq!(coerce_str("Infinity"), f64::INFINITY);
        assert_eq!(coerce_str("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_non_numeric_strings_are_nan() {
        assert!(coerce_str("abc").is_nan());
        assert!(coerce_str("12abc").is_nan());
        assert!(coerce_str("inf").is_nan());
        assert!(coerce_str("NaN").is_nan());
        assert!(coerce_str("0xZZ").is_nan());
        assert!(coerce_str("0x+1f").is_nan());
        assert!(coerce_str("0x-1f").is_nan());
        assert!(coerce_str("0x").is_nan());
        assert!(coerce_str("0b102").is_nan());
        assert!(coerce_str("1.2.3").is_nan());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RatingInput::from(None::<f64>), RatingInput::Missing);
        assert_eq!(RatingInput::from(Some(1200)), RatingInput::Number(1200.0));
        assert!(RatingInput::Missing.coerce().is_nan());
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(RatingInput::from(&json!(null)), RatingInput::Missing);
        assert_eq!(RatingInput::from(&json!(1650)), RatingInput::Number(1650.0));
        assert_eq!(RatingInput::from(&json!("2100")), RatingInput::Number(2100.0));
        assert_eq!(RatingInput::from(&json!(true)), RatingInput::Number(1.0));
        assert!(RatingInput::from(&json!([1, 2])).coerce().is_nan());
        assert!(RatingInput::from(&json!({"value": 3})).coerce().is_nan());
    }

    #[test]
    fn test_finite_accessor() {
        assert_eq!(RatingInput::from(1500).finite(), Some(1500.0));
        assert_eq!(RatingInput::from(f64::INFINITY).finite(), None);
        assert_eq!(RatingInput::from("oops").finite(), None);
        assert_eq!(RatingInput::Missing.finite(), None);
    }
}
