//! Args - transform argument kinds and their coercion rules
//!
//! - `Number` is always parsed as a float, falling back to 0
//! - `Length` passes text through, bare numbers become pixels
//! - `Angle` passes text through, bare numbers become degrees

/// Declared kind of one positional transform argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Number,
    Length,
    Angle,
}

impl ArgKind {
    /// Unit appended to bare numbers, if any
    pub const fn default_unit(&self) -> &'static str {
        match self {
            Self::Number => "",
            Self::Length => "px",
            Self::Angle => "deg",
        }
    }

    /// Render one argument as CSS text. A missing argument counts as `0`.
    pub fn coerce(&self, arg: Option<&Arg>) -> String {
        let arg = arg.unwrap_or(&Arg::Number(0.0));
        match (self, arg) {
            (Self::Number, Arg::Number(n)) => format_number(zero_if_nan(*n)),
            (Self::Number, Arg::Text(s)) => format_number(zero_if_nan(parse_float(s))),
            (_, Arg::Text(s)) => s.clone(),
            (kind, Arg::Number(n)) => format!("{}{}", format_number(*n), kind.default_unit()),
        }
    }
}

/// A caller-supplied transform argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Number(f64),
    Text(String),
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<u32> for Arg {
    fn from(v: u32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for Arg {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

fn zero_if_nan(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v }
}

/// Longest leading float in `s`, NaN when there is none.
///
/// Mirrors how browsers read numbers out of strings like `"4em"` or `" .5"`.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse().unwrap_or(f64::NAN)
}

/// Format a number the way it reads in CSS source: `2`, `0.5`, `-10`.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if v == 0.0 {
        // collapses -0
        "0".to_string()
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_numbers_get_default_units() {
        assert_eq!(ArgKind::Length.coerce(Some(&Arg::from(10))), "10px");
        assert_eq!(ArgKind::Angle.coerce(Some(&Arg::from(45))), "45deg");
        assert_eq!(ArgKind::Number.coerce(Some(&Arg::from(2))), "2");
        assert_eq!(ArgKind::Length.coerce(Some(&Arg::from(-2.5))), "-2.5px");
    }

    #[test]
    fn strings_pass_through_unchanged() {
        assert_eq!(ArgKind::Length.coerce(Some(&Arg::from("4em"))), "4em");
        assert_eq!(ArgKind::Angle.coerce(Some(&Arg::from("1.5rad"))), "1.5rad");
        assert_eq!(ArgKind::Length.coerce(Some(&Arg::from("calc(100% - 4px)"))), "calc(100% - 4px)");
    }

    #[test]
    fn numeric_kind_parses_strings() {
        assert_eq!(ArgKind::Number.coerce(Some(&Arg::from("1.5"))), "1.5");
        assert_eq!(ArgKind::Number.coerce(Some(&Arg::from("3px"))), "3");
    }

    #[test]
    fn non_numeric_values_coerce_to_zero() {
        assert_eq!(ArgKind::Number.coerce(Some(&Arg::from("abc"))), "0");
        assert_eq!(ArgKind::Number.coerce(Some(&Arg::from(""))), "0");
        assert_eq!(ArgKind::Number.coerce(Some(&Arg::Number(f64::NAN))), "0");
    }

    #[test]
    fn missing_arguments_are_zero() {
        assert_eq!(ArgKind::Number.coerce(None), "0");
        assert_eq!(ArgKind::Length.coerce(None), "0px");
        assert_eq!(ArgKind::Angle.coerce(None), "0deg");
    }

    #[test]
    fn parse_float_takes_leading_number() {
        assert_eq!(parse_float("  42.5abc"), 42.5);
        assert_eq!(parse_float("-.5"), -0.5);
        assert_eq!(parse_float("1e3x"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("7."), 7.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float(".").is_nan());
        assert!(parse_float("px").is_nan());
    }

    #[test]
    fn format_number_drops_trailing_zero() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }
}
