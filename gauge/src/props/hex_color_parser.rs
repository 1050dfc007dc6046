// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for hex color strings in `#RRGGBB` or `#RGB` form. The short form expands
//! each digit, so `#f40` equals `#ff4400`.

use nom::{branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map, map_res},
          IResult, Parser};

use crate::RgbColor;

fn is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |it: &str| {
        u8::from_str_radix(it, 16)
    })
    .parse(input)
}

fn hex_single(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, is_hex_digit), |it: &str| {
        // Expand the single digit: `f` -> `ff`.
        u8::from_str_radix(it, 16).map(|value| value * 17)
    })
    .parse(input)
}

fn six_digit_form(input: &str) -> IResult<&str, RgbColor> {
    map((hex_pair, hex_pair, hex_pair), |(red, green, blue)| {
        RgbColor { red, green, blue }
    })
    .parse(input)
}

fn three_digit_form(input: &str) -> IResult<&str, RgbColor> {
    map((hex_single, hex_single, hex_single), |(red, green, blue)| {
        RgbColor { red, green, blue }
    })
    .parse(input)
}

/// Parse a complete hex color string. Trailing input is an error, so truncated
/// strings like `#ff000` fail instead of silently decoding the short form.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    all_consuming(map(
        (tag("#"), alt((six_digit_form, three_digit_form))),
        |(_, color)| color,
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("#000000", (0, 0, 0))]
    #[test_case("#ff0000", (255, 0, 0))]
    #[test_case("#00C0FF", (0, 192, 255); "mixed case")]
    #[test_case("#f4f4f4", (244, 244, 244))]
    fn test_parses_six_digit_form(input: &str, (red, green, blue): (u8, u8, u8)) {
        let (rem, color) = parse_hex_color(input).unwrap();
        assert_eq!(rem, "");
        assert_eq!(color, RgbColor { red, green, blue });
    }

    #[test_case("#fff", (255, 255, 255))]
    #[test_case("#f40", (255, 68, 0))]
    fn test_parses_three_digit_form(input: &str, (red, green, blue): (u8, u8, u8)) {
        let (_, color) = parse_hex_color(input).unwrap();
        assert_eq!(color, RgbColor { red, green, blue });
    }

    #[test_case("#ff000"; "five digits")]
    #[test_case("#ff00001"; "seven digits")]
    #[test_case("ff0000"; "missing hash")]
    #[test_case("#zzzzzz"; "non hex digits")]
    #[test_case("#"; "hash only")]
    fn test_rejects_malformed_input(input: &str) {
        assert!(parse_hex_color(input).is_err());
    }
}
