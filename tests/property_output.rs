// tests/property_output.rs

use std::time::Duration;

use proptest::prelude::*;
use regex::Regex;
use runrelay::relay::{format_finished, strip_carriage_returns};

proptest! {
    #[test]
    fn stripping_removes_every_carriage_return(text in ".*") {
        let stripped = strip_carriage_returns(&text);
        prop_assert!(!stripped.contains('\r'));
    }

    #[test]
    fn stripping_preserves_everything_else(text in ".*") {
        let stripped = strip_carriage_returns(&text).into_owned();
        let expected: String = text.chars().filter(|&c| c != '\r').collect();
        prop_assert_eq!(stripped, expected);
    }

    #[test]
    fn finished_line_always_matches_the_display_format(millis in 0u64..u64::MAX / 2) {
        let line = format_finished(Duration::from_millis(millis));
        let re = Regex::new(r"^\[Finished in \d+\.\d{2}s\]$").unwrap();
        prop_assert!(re.is_match(&line));
    }
}

#[test]
fn stripping_leaves_plain_lines_borrowed() {
    assert!(matches!(
        strip_carriage_returns("plain line\n"),
        std::borrow::Cow::Borrowed(_)
    ));
}

#[test]
fn finished_line_rounds_to_hundredths() {
    assert_eq!(
        format_finished(Duration::from_millis(1234)),
        "[Finished in 1.23s]"
    );
    assert_eq!(format_finished(Duration::ZERO), "[Finished in 0.00s]");
}
