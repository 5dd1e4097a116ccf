use std::fmt::{self, Display};
use std::iter::Copied;
use std::slice;
use std::str::FromStr;
use std::vec;

use itertools::Itertools;
use num_bigint::BigUint;

use crate::mask::{items_from_mask, mask_from_items};
use crate::parse::{
    parse_bin_mask, parse_decimal_mask, parse_description, parse_hex_mask, parse_single,
};
use crate::{CoreId, Error, RangeStyle, Result};

/// A set of processor core ids, convertible between bitmasks, id lists and range strings.
///
/// A `CoreSet` is built once from one of the supported input forms and is read-only
/// afterwards. Every textual output renders the ids in ascending order and depends only on
/// which ids are in the set, never on how the set was constructed.
///
/// | Input                                     | Output                          |
/// |-------------------------------------------|---------------------------------|
/// | [`from_mask()`][Self::from_mask]          | [`to_mask()`][Self::to_mask]    |
/// | [`from_hex()`][Self::from_hex]            | [`to_hex()`][Self::to_hex]      |
/// | [`from_bin()`][Self::from_bin]            | [`to_list()`][Self::to_list]    |
/// | [`from_description()`][Self::from_description] | [`to_range_string()`][Self::to_range_string] |
/// | [`from_single()`][Self::from_single]      | [`iter()`][Self::iter]          |
/// | [`from_decimal()`][Self::from_decimal]    |                                 |
///
/// # Example
///
/// ```
/// use coreset::CoreSet;
///
/// let cores = CoreSet::from_description("50,21,0,10-12,15,16,20-18").unwrap();
///
/// assert_eq!(cores.to_range_string(), "0,10-12,15-16,18-21,50");
/// assert_eq!(cores.len(), 11);
/// assert!(cores.contains(19));
///
/// let from_mask = CoreSet::from_mask(0x70F_u32);
/// assert_eq!(from_mask.to_list(), "0,1,2,3,8,9,10");
/// assert_eq!(from_mask.to_range_string(), "0-3,8-10");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CoreSet {
    // Sorted ascending, no duplicates.
    ids: Vec<CoreId>,
}

impl CoreSet {
    /// Creates an empty core set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Creates a core set with core id `i` for every bit `i` set in the mask.
    ///
    /// Any unsigned primitive integer or a [`BigUint`] of arbitrary width is accepted.
    #[must_use]
    pub fn from_mask(mask: impl Into<BigUint>) -> Self {
        Self {
            ids: items_from_mask(&mask.into()),
        }
    }

    /// Creates a core set from a mask written as a decimal integer, such as `270`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the string is not a non-negative decimal integer.
    pub fn from_decimal(decimal: &str) -> Result<Self> {
        parse_decimal_mask(decimal).map(Self::from_mask)
    }

    /// Creates a core set from a hexadecimal mask string such as `0x10e` or `FFFF00`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the string is not a hexadecimal number with an optional
    /// `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self> {
        parse_hex_mask(hex).map(Self::from_mask)
    }

    /// Creates a core set from a binary mask string such as `0b100001110` or `1110`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the string is not a binary number with an optional `0b`
    /// prefix.
    pub fn from_bin(bin: &str) -> Result<Self> {
        parse_bin_mask(bin).map(Self::from_mask)
    }

    /// Creates a core set from a description such as `0,10-12,15,20-18`.
    ///
    /// The description is a comma-separated list of single ids and inclusive ranges. Ranges
    /// written high-to-low are accepted and mean the same as low-to-high. Duplicates collapse.
    /// An empty description is the empty set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] naming the offending part of the input if the description does
    /// not follow this grammar. No partially populated set is ever returned.
    pub fn from_description(description: &str) -> Result<Self> {
        parse_description(description).map(|ids| Self { ids })
    }

    /// Creates a core set containing the single core id in `single`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the string is not exactly one decimal integer.
    pub fn from_single(single: &str) -> Result<Self> {
        parse_single(single).map(|id| Self { ids: vec![id] })
    }

    /// Returns the bitmask with bit `i` set for every core id `i` in the set.
    #[must_use]
    pub fn to_mask(&self) -> BigUint {
        mask_from_items(&self.ids)
    }

    /// Returns the bitmask as a lowercase hexadecimal string with a `0x` prefix.
    ///
    /// The empty set is rendered as `0x0`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.to_mask())
    }

    /// Returns the core ids in ascending order, separated by commas, e.g. `0,1,2,3,8`.
    #[must_use]
    pub fn to_list(&self) -> String {
        crate::emit::emit_list(&self.ids)
    }

    /// Returns the core ids as a compressed range string, e.g. `0,10-12,15-16,18-21,50`.
    ///
    /// Uses [`RangeStyle::Hyphenated`], so two consecutive ids also become a range.
    #[must_use]
    pub fn to_range_string(&self) -> String {
        self.to_range_string_with(RangeStyle::Hyphenated)
    }

    /// Returns the core ids as a compressed range string, rendering runs of exactly two
    /// consecutive ids as specified by `style`.
    #[must_use]
    pub fn to_range_string_with(&self, style: RangeStyle) -> String {
        crate::emit::emit_ranges(&self.ids, style)
    }

    /// Returns an iterator over the core ids in ascending order.
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'_, CoreId>> {
        self.ids.iter().copied()
    }

    /// Returns the number of core ids in the set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the set contains no core ids.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns `true` if the set contains the given core id.
    #[must_use]
    pub fn contains(&self, id: CoreId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Returns the lowest core id in the set, if any.
    #[must_use]
    pub fn lowest(&self) -> Option<CoreId> {
        self.ids.first().copied()
    }

    /// Returns the highest core id in the set, if any.
    #[must_use]
    pub fn highest(&self) -> Option<CoreId> {
        self.ids.last().copied()
    }
}

impl Display for CoreSet {
    /// Formats the set as a compressed range string, see [`CoreSet::to_range_string()`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_range_string())
    }
}

impl FromStr for CoreSet {
    type Err = Error;

    /// Parses a description, see [`CoreSet::from_description()`].
    fn from_str(s: &str) -> Result<Self> {
        Self::from_description(s)
    }
}

impl FromIterator<CoreId> for CoreSet {
    fn from_iter<T: IntoIterator<Item = CoreId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().sorted_unstable().dedup().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CoreSet {
    type IntoIter = Copied<slice::Iter<'a, CoreId>>;
    type Item = CoreId;

    /// Returns an iterator over the core ids in ascending order.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for CoreSet {
    type IntoIter = vec::IntoIter<CoreId>;
    type Item = CoreId;

    /// Consumes the set and returns an iterator over the core ids in ascending order.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}
