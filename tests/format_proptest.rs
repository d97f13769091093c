//! Property tests for value bounding and readout formatting.

use ammeter::meter::bound_value;
use ammeter::{display_text, segment_on, FormatMode};

proptest::proptest! {
    /// Any finite or infinite input lands inside the meter range.
    #[test]
    fn bound_value_stays_in_range(v in proptest::num::f64::ANY) {
        let bounded = bound_value(v);
        assert!((0.0..=99.9).contains(&bounded), "{v} -> {bounded}");
    }

    /// In-range values are stored untouched.
    #[test]
    fn bound_value_keeps_in_range_values(v in 0.0f64..=99.9) {
        assert_eq!(bound_value(v), v);
    }

    /// Integer readouts are always three digits.
    #[test]
    fn integer_readout_is_three_digits(v in 0.0f64..=99.9) {
        let text = display_text(v, FormatMode::Integer);
        assert_eq!(text.len(), 3, "{v} -> {text}");
        assert!(text.chars().all(|c| c.is_ascii_digit()));
    }

    /// Decimal1 shows one digit, a point and one digit.
    #[test]
    fn decimal1_readout_shape(v in 0.0f64..=99.9) {
        let text = display_text(v, FormatMode::Decimal1);
        let bytes = text.as_bytes();
        assert_eq!(bytes.len(), 3, "{v} -> {text}");
        assert_eq!(bytes[1], b'.');
        assert!(bytes[0].is_ascii_digit() && bytes[2].is_ascii_digit());
    }

    /// Decimal2 pads to four characters with a single fractional digit.
    #[test]
    fn decimal2_readout_shape(v in 0.0f64..=99.9) {
        let text = display_text(v, FormatMode::Decimal2);
        assert_eq!(text.len(), 4, "{v} -> {text}");
        assert_eq!(text.find('.'), Some(2));
        let parsed: f64 = text.parse().expect("readout parses back");
        assert!((parsed - v).abs() <= 0.05 + 1e-9);
    }

    /// No mode ever produces an empty readout.
    #[test]
    fn readout_never_empty(v in proptest::num::f64::ANY, mode_index in 0usize..3) {
        let mode = FormatMode::ALL[mode_index];
        assert!(!display_text(bound_value(v), mode).is_empty());
    }

    /// Out-of-range glyph lookups are dark.
    #[test]
    fn out_of_range_lookups_are_unlit(digit in proptest::prelude::any::<i32>(), segment in proptest::prelude::any::<i32>()) {
        if !(0..=9).contains(&digit) || !(0..7).contains(&segment) {
            assert!(!segment_on(digit, segment));
        }
    }
}
