use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

/// One validated, labeled data point of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub text: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
}

impl Category {
    #[must_use]
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
            color: None,
            font_color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_font_color(mut self, font_color: impl Into<String>) -> Self {
        self.font_color = Some(font_color.into());
        self
    }

    /// Screen-reader line for this category: `"<text>: <value>"`.
    #[must_use]
    pub fn aria_line(&self) -> String {
        format!("{}: {}", self.text, format_value(self.value))
    }
}

/// Unvalidated data-set entry exactly as the host supplied it.
///
/// JSON `null` deserializes to `None` and is treated like a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<Value>,
}

/// Why an entry was removed by [`filter_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingField,
    EmptyText,
    NotANumber,
    NotFinite,
}

impl RawCategory {
    #[must_use]
    pub fn new(text: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            text: Some(text.into()),
            value: Some(value.into()),
            color: None,
            font_color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(Value::String(color.into()));
        self
    }

    #[must_use]
    pub fn with_font_color(mut self, font_color: impl Into<String>) -> Self {
        self.font_color = Some(Value::String(font_color.into()));
        self
    }

    /// Parses a JSON array of entries. Entries that are not objects become
    /// empty entries so filtering drops them as missing fields.
    ///
    /// Returns `None` when `value` is not an array.
    #[must_use]
    pub fn list_from_value(value: &Value) -> Option<Vec<Self>> {
        let entries = value.as_array()?;
        Some(
            entries
                .iter()
                .map(|entry| {
                    if entry.is_object() {
                        Self::deserialize(entry).unwrap_or_default()
                    } else {
                        Self::default()
                    }
                })
                .collect(),
        )
    }

    /// Validates one entry. Field presence is checked before any coercion.
    pub fn normalize(&self) -> Result<Category, RejectReason> {
        let (Some(text), Some(value)) = (self.text.as_ref(), self.value.as_ref()) else {
            return Err(RejectReason::MissingField);
        };

        let text = coerce_text(text).ok_or(RejectReason::EmptyText)?;
        if text.is_empty() {
            return Err(RejectReason::EmptyText);
        }

        let value = coerce_value(value);
        if value.is_nan() {
            return Err(RejectReason::NotANumber);
        }
        if !value.is_finite() {
            return Err(RejectReason::NotFinite);
        }

        Ok(Category {
            text,
            value,
            color: opaque_string(self.color.as_ref()),
            font_color: opaque_string(self.font_color.as_ref()),
        })
    }
}

impl From<Category> for RawCategory {
    fn from(category: Category) -> Self {
        Self {
            text: Some(Value::String(category.text)),
            value: serde_json::Number::from_f64(category.value).map(Value::Number),
            color: category.color.map(Value::String),
            font_color: category.font_color.map(Value::String),
        }
    }
}

/// Keeps only entries with a non-empty trimmed label and a finite value,
/// preserving their relative order.
///
/// The pass is idempotent: feeding the result back (via `RawCategory::from`)
/// yields the same categories.
#[must_use]
pub fn filter_data(data_set: &[RawCategory]) -> Vec<Category> {
    let kept: Vec<Category> = data_set
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry.normalize() {
            Ok(category) => Some(category),
            Err(reason) => {
                trace!(index, ?reason, "dropping invalid category");
                None
            }
        })
        .collect();
    debug!(
        original_count = data_set.len(),
        kept_count = kept.len(),
        "filtered data set"
    );
    kept
}

/// Example data set shown when the host supplies no usable categories.
#[must_use]
pub fn default_data_set() -> Vec<Category> {
    vec![
        Category::new("Cat", 4.0)
            .with_color("#fbb033")
            .with_font_color("#000"),
        Category::new("Dog", 2.0)
            .with_color("#ADD8E6")
            .with_font_color("#000"),
        Category::new("Mouse", 3.0)
            .with_color("#90EE90")
            .with_font_color("#000"),
    ]
}

/// Shortest round-trip form of a value as ECMAScript prints numbers:
/// plain decimals for magnitudes in `[1e-6, 1e21)`, exponent form such as
/// `1e+21` or `1.5e-7` outside it, and negative zero shown as `0`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

/// Parses the longest numeric prefix of `input` after leading whitespace,
/// in the manner of ECMAScript `parseFloat`.
///
/// Returns NaN when no numeric prefix exists. `"3abc"` parses as `3`.
#[must_use]
pub fn parse_loose_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(
            text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .to_owned(),
        ),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_loose_float(text),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn opaque_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::{format_value, parse_loose_float};

    #[test]
    fn loose_float_takes_longest_numeric_prefix() {
        assert_eq!(parse_loose_float("3"), 3.0);
        assert_eq!(parse_loose_float("  -2.5kg"), -2.5);
        assert_eq!(parse_loose_float("3abc"), 3.0);
        assert_eq!(parse_loose_float(".5e1x"), 5.0);
        assert_eq!(parse_loose_float("7."), 7.0);
        assert_eq!(parse_loose_float("1e"), 1.0);
        assert_eq!(parse_loose_float("1e+"), 1.0);
        assert_eq!(parse_loose_float("+4E-1"), 0.4);
    }

    #[test]
    fn loose_float_without_prefix_is_nan() {
        assert!(parse_loose_float("").is_nan());
        assert!(parse_loose_float("abc").is_nan());
        assert!(parse_loose_float(".").is_nan());
        assert!(parse_loose_float("-").is_nan());
        assert!(parse_loose_float("e5").is_nan());
    }

    #[test]
    fn loose_float_recognizes_infinity_keyword() {
        assert_eq!(parse_loose_float("Infinity and beyond"), f64::INFINITY);
        assert_eq!(parse_loose_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn value_format_is_shortest_and_hides_negative_zero() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_value(1e21), "1e+21");
        assert_eq!(format_value(-1.5e300), "-1.5e+300");
        assert_eq!(format_value(1e-7), "1e-7");
        assert_eq!(format_value(2.5e-8), "2.5e-8");
        assert_eq!(format_value(1e20), "100000000000000000000");
        assert_eq!(format_value(0.000001), "0.000001");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
    }
}
