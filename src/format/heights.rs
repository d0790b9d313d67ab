// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Height, HeightSequence};

/// Message shown whenever typed heights cannot be accepted.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid input. Example: 3,0,2,0,4";

const HEIGHTS_PATTERN: &str = r"^(?:[0-9]+,)*[0-9]*$";

/// Raw text that is not a comma-separated list of non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputFormat {
    input: String,
}

impl InvalidInputFormat {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The trimmed text that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidInputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INVALID_INPUT_MESSAGE)
    }
}

impl std::error::Error for InvalidInputFormat {}

fn heights_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(HEIGHTS_PATTERN).expect("static heights pattern compiles"))
}

/// Parses typed text such as `3,0,2,0,4` into a height sequence.
///
/// Surrounding whitespace is ignored. The empty string is valid and yields no blocks. A trailing
/// comma adds a zero-height column, as a number not yet typed counts as `0`. Numbers that do not
/// fit a [`Height`] are rejected like any other malformed input.
pub fn parse_heights(input: &str) -> Result<HeightSequence, InvalidInputFormat> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(HeightSequence::empty());
    }

    if !heights_regex().is_match(trimmed) {
        return Err(InvalidInputFormat::new(trimmed));
    }

    let mut heights = Vec::<Height>::new();
    for fragment in trimmed.split(',') {
        if fragment.is_empty() {
            // Only the final fragment can be empty once the pattern matched.
            heights.push(0);
            continue;
        }
        let height = fragment
            .parse::<Height>()
            .map_err(|_| InvalidInputFormat::new(trimmed))?;
        heights.push(height);
    }

    Ok(HeightSequence::new(heights))
}

/// Canonical text form accepted back by [`parse_heights`].
pub fn export_heights(heights: &HeightSequence) -> String {
    heights.to_string()
}

impl FromStr for HeightSequence {
    type Err = InvalidInputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_heights(s)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{export_heights, parse_heights, InvalidInputFormat, INVALID_INPUT_MESSAGE};
    use crate::model::HeightSequence;

    #[rstest]
    #[case("", &[])]
    #[case("   ", &[])]
    #[case("7", &[7])]
    #[case("3,0,2,0,4", &[3, 0, 2, 0, 4])]
    #[case("  5,4,1,2\n", &[5, 4, 1, 2])]
    #[case("3,0,", &[3, 0, 0])]
    #[case("0,", &[0, 0])]
    #[case("007,10", &[7, 10])]
    #[case("4294967295", &[u32::MAX])]
    fn parses_valid_input(#[case] input: &str, #[case] expected: &[u32]) {
        let heights = parse_heights(input).expect("valid heights");
        assert_eq!(heights.as_slice(), expected);
    }

    #[rstest]
    #[case("3,a,2")]
    #[case("3, 0")]
    #[case(",3")]
    #[case("3,,2")]
    #[case("-1")]
    #[case("1.5")]
    #[case("4294967296")]
    #[case("٣")]
    fn rejects_malformed_input(#[case] input: &str) {
        let err = parse_heights(input).unwrap_err();
        assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        assert_eq!(err.input(), input.trim());
    }

    #[test]
    fn trailing_comma_keeps_totals_and_adds_a_dry_column() {
        let open = parse_heights("3,0,2,0,4,").expect("valid heights");
        let closed = parse_heights("3,0,2,0,4").expect("valid heights");
        assert_eq!(open.len(), closed.len() + 1);
        assert_eq!(open.get(5), Some(0));
        assert_eq!(
            crate::water::evaluate(open.as_slice()).total(),
            crate::water::evaluate(closed.as_slice()).total()
        );
    }

    #[test]
    fn error_message_matches_user_facing_text() {
        let err: InvalidInputFormat = "x".parse::<HeightSequence>().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid input. Example: 3,0,2,0,4");
    }

    #[test]
    fn export_round_trips_through_parse() {
        let heights = HeightSequence::new(vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]);
        let text = export_heights(&heights);
        assert_eq!(text, "0,1,0,2,1,0,1,3,2,1,2,1");
        assert_eq!(parse_heights(&text).expect("round trip"), heights);
    }
}
