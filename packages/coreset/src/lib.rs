#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Conversions between the different ways of writing down a set of processor cores: integer
//! bitmasks, hexadecimal and binary mask strings, plain id lists and compressed range strings.
//!
//! Example range string: `0,10-12,15-16,18-21,50`
//!
//! # Format
//!
//! A core set description is a comma-separated list of zero or more items, where each item is
//! either:
//!
//! * a single core id (e.g. `7`)
//! * an inclusive range of core ids (e.g. `2-4`), which may also be written high-to-low
//!   (`4-2` means the same as `2-4`)
//!
//! Whitespace is allowed only around the whole description, never inside it.
//!
//! Core ids are of size `u32`. Masks have no width limit.
//!
//! # Example
//!
//! Converting a description to the other forms:
//!
//! ```
//! use coreset::{BigUint, CoreSet};
//!
//! let cores = CoreSet::from_description("1,2,3,8").unwrap();
//!
//! assert_eq!(cores.to_mask(), BigUint::from(0x10E_u32));
//! assert_eq!(cores.to_hex(), "0x10e");
//! assert_eq!(cores.to_list(), "1,2,3,8");
//! assert_eq!(cores.to_range_string(), "1-3,8");
//! ```
//!
//! Two consecutive ids are written as a range by default. This can be changed:
//!
//! ```
//! use coreset::{CoreSet, RangeStyle};
//!
//! let cores = CoreSet::from_mask(0x300_u32);
//!
//! assert_eq!(cores.to_range_string(), "8-9");
//! assert_eq!(cores.to_range_string_with(RangeStyle::PairAsList), "8,9");
//! ```

mod core_set;
mod emit;
mod error;
mod mask;
mod parse;

pub use core_set::*;
pub use emit::RangeStyle;
pub use error::*;
pub use num_bigint::BigUint;

/// Identifies one processor core.
pub type CoreId = u32;

pub(crate) type Item = CoreId;
