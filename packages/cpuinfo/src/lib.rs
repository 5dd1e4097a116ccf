#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Reads processor topology and feature information from the text that platform tools print:
//! `lscpu` on Linux, `sysctl hw` on macOS and `wmic cpu get` on Windows.
//!
//! This crate never runs those commands. Capture their output yourself (or load a saved copy
//! from a file) and let [`CpuInfo`] pick the matching reader:
//!
//! ```
//! use cpuinfo::{CpuInfo, Platform, Summary, TopologyReader};
//!
//! let lscpu = "\
//! CPU(s):              8
//! Core(s) per socket:  4
//! Socket(s):           1
//! NUMA node(s):        1
//! CPU MHz:             1046.410
//! Flags:               sse2 avx2
//! ";
//!
//! let info = CpuInfo::parse(Platform::Linux, lscpu).unwrap();
//!
//! assert_eq!(info.socket_count().unwrap(), 1);
//! assert_eq!(info.frequency_mhz().unwrap(), 1046);
//! assert!(info.has_feature("avx2"));
//!
//! println!("{}", Summary::from_reader(&info));
//! ```
//!
//! All keys are lowercase. Values are kept as raw strings and converted by the accessors of
//! [`TopologyReader`].

mod cpu_info;
mod error;
mod platform;
mod reader;
mod readers;
mod summary;
mod values;

#[cfg(test)]
mod test_data;

pub use cpu_info::*;
pub use error::*;
pub use platform::*;
pub use reader::*;
pub use readers::*;
pub use summary::*;
