#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Command line tools over the [`coreset`] and [`cpuinfo`] packages.
//!
//! * `cores` converts a core set given as a description, decimal mask, hex mask or binary mask
//!   into a list, one id per line, a range string or a hex mask.
//! * `cpu-info` summarizes saved `lscpu`, `sysctl hw` or `wmic cpu get` output.
//!
//! The binaries only parse arguments and print; the work happens in [`run_cores()`] and
//! [`run_cpu_info()`] so it can be tested without spawning processes.

mod cores;
mod cpu_info;
mod error;
mod logging;

pub use cores::*;
pub use cpu_info::*;
pub use error::*;
pub use logging::*;
