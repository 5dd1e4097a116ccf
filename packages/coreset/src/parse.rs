use itertools::Itertools;
use num_bigint::BigUint;

use crate::{Error, Item, Result};

/// Parses a core set description and returns the core ids in ascending order, removing
/// duplicates.
///
/// The description is a comma-separated list of tokens, each either a single integer (`7`) or
/// an inclusive range (`2-4`). A range may be written in either direction: `20-18` is the same
/// as `18-20`. Leading and trailing whitespace of the whole input is ignored, whitespace
/// anywhere else is an error.
///
/// An empty string is valid input and returns an empty result. Nothing is returned unless the
/// whole description is valid.
pub(crate) fn parse_description(description: &str) -> Result<Vec<Item>> {
    let description = description.trim();

    if description.is_empty() {
        return Ok(vec![]);
    }

    let item_ranges: Result<Vec<Vec<Item>>> = description.split(',').map(parse_token).collect();

    item_ranges.map(|x| x.into_iter().flatten().sorted_unstable().dedup().collect())
}

/// Parses a string that must contain exactly one core id.
pub(crate) fn parse_single(single: &str) -> Result<Item> {
    parse_id(
        single,
        "expected a single core id made of decimal digits only",
    )
}

/// Parses a decimal mask string, e.g. `270` for cores 1, 2, 3 and 8.
pub(crate) fn parse_decimal_mask(decimal: &str) -> Result<BigUint> {
    parse_mask_digits(decimal, decimal.trim(), 10, "expected a non-negative decimal integer")
}

/// Parses a hexadecimal mask string with an optional `0x` prefix.
pub(crate) fn parse_hex_mask(hex: &str) -> Result<BigUint> {
    let digits = strip_radix_prefix(hex.trim(), "0x", "0X");

    parse_mask_digits(hex, digits, 16, "expected hexadecimal digits with optional 0x prefix")
}

/// Parses a binary mask string with an optional `0b` prefix.
pub(crate) fn parse_bin_mask(bin: &str) -> Result<BigUint> {
    let digits = strip_radix_prefix(bin.trim(), "0b", "0B");

    parse_mask_digits(bin, digits, 2, "expected binary digits with optional 0b prefix")
}

fn strip_radix_prefix<'a>(value: &'a str, lower: &str, upper: &str) -> &'a str {
    value
        .strip_prefix(lower)
        .or_else(|| value.strip_prefix(upper))
        .unwrap_or(value)
}

fn parse_mask_digits(original: &str, digits: &str, radix: u32, problem: &str) -> Result<BigUint> {
    // BigUint::parse_bytes tolerates '_' separators, which we do not want to accept.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::new(original, problem));
    }

    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| Error::new(original, problem))
}

fn parse_token(token: &str) -> Result<Vec<Item>> {
    if token.is_empty() {
        return Err(Error::new(
            token,
            "empty token - every comma must separate two ids or ranges",
        ));
    }

    if let Some((range_start, range_end_inc)) = token.split_once('-') {
        parse_range(range_start, range_end_inc)
    } else {
        parse_id(
            token,
            "token was not a range but could not be parsed as a core id either",
        )
        .map(|item| vec![item])
    }
}

fn parse_range(range_start: &str, range_end_inc: &str) -> Result<Vec<Item>> {
    let start = parse_id(
        range_start,
        "range start could not be parsed as a core id",
    )?;

    // A second hyphen ("1-2-3") ends up here and is rejected as a non-digit character.
    let end = parse_id(range_end_inc, "range end could not be parsed as a core id")?;

    let (low, high) = if end < start {
        (end, start)
    } else {
        (start, end)
    };

    Ok((low..=high).collect())
}

fn parse_id(value: &str, problem: &str) -> Result<Item> {
    // `str::parse` would accept a leading '+', so we check the characters ourselves first.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::new(value, problem));
    }

    value
        .parse::<Item>()
        .map_err(|inner| Error::caused_by(value, problem, inner))
}
