//! Turning the meter value into the readout string.

use std::fmt;
use std::str::FromStr;

/// How the readout formats the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Whole amps, zero padded to three digits: `007`.
    Integer,
    /// One decimal, single leading digit: `7.0`. Values above 9.9 show 9.9.
    #[default]
    Decimal1,
    /// One decimal, zero padded to four characters: `07.3`.
    Decimal2,
}

impl FormatMode {
    pub const ALL: [FormatMode; 3] = [FormatMode::Integer, FormatMode::Decimal1, FormatMode::Decimal2];

    pub const fn as_str(self) -> &'static str {
        match self {
            FormatMode::Integer => "integer",
            FormatMode::Decimal1 => "decimal1",
            FormatMode::Decimal2 => "decimal2",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format mode `{0}` (expected integer, decimal1 or decimal2)")]
pub struct ParseFormatModeError(String);

impl FromStr for FormatMode {
    type Err = ParseFormatModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFormatModeError(s.to_string()))
    }
}

/// The literal string the seven-segment display shows for `value`.
///
/// Never empty.
pub fn display_text(value: f64, mode: FormatMode) -> String {
    match mode {
        FormatMode::Integer => {
            let whole = value.round().clamp(0.0, 99.0) as u32;
            format!("{whole:03}")
        }
        FormatMode::Decimal1 => format!("{:.1}", value.clamp(0.0, 9.9)),
        FormatMode::Decimal2 => {
            let text = format!("{value:.1}");
            format!("{text:0>4}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_pads_to_three() {
        assert_eq!(display_text(7.0, FormatMode::Integer), "007");
        assert_eq!(display_text(42.4, FormatMode::Integer), "042");
        assert_eq!(display_text(0.0, FormatMode::Integer), "000");
    }

    #[test]
    fn integer_rounds_half_up_and_caps_at_99() {
        assert_eq!(display_text(6.5, FormatMode::Integer), "007");
        assert_eq!(display_text(99.9, FormatMode::Integer), "099");
    }

    #[test]
    fn decimal1_single_leading_digit() {
        assert_eq!(display_text(7.0, FormatMode::Decimal1), "7.0");
        assert_eq!(display_text(0.0, FormatMode::Decimal1), "0.0");
        assert_eq!(display_text(42.0, FormatMode::Decimal1), "9.9");
    }

    #[test]
    fn decimal2_pads_to_four() {
        assert_eq!(display_text(7.3, FormatMode::Decimal2), "07.3");
        assert_eq!(display_text(99.9, FormatMode::Decimal2), "99.9");
        assert_eq!(display_text(0.0, FormatMode::Decimal2), "00.0");
    }

    #[test]
    fn default_is_decimal1() {
        assert_eq!(FormatMode::default(), FormatMode::Decimal1);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Integer".parse(), Ok(FormatMode::Integer));
        assert_eq!(" decimal2 ".parse(), Ok(FormatMode::Decimal2));
        assert!("decimal3".parse::<FormatMode>().is_err());
    }
}
