//! One [`TopologyReader`][crate::TopologyReader] implementation per platform command.

mod linux;
mod macos;
mod windows;

pub use linux::*;
pub use macos::*;
pub use windows::*;
