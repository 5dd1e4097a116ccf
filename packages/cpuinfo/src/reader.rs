use std::fmt::Debug;

use crate::Result;

/// Answers questions about the processors of a system, based on text captured from a
/// platform-specific command.
///
/// There is one implementation per platform ([`LinuxCpuInfo`][crate::LinuxCpuInfo],
/// [`MacCpuInfo`][crate::MacCpuInfo], [`WindowsCpuInfo`][crate::WindowsCpuInfo]) and the
/// [`CpuInfo`][crate::CpuInfo] enum that selects between them at runtime. Code that only needs
/// the answers should accept `&impl TopologyReader` so it can be tested with a mock.
///
/// Keys are always lowercase. Accessors return an error if the underlying value is absent or
/// not a number, or if the platform does not report that kind of information at all.
#[cfg_attr(test, mockall::automock)]
pub trait TopologyReader: Debug + Send + Sync {
    /// Returns the raw value stored under the lowercase `key`, if present.
    fn value(&self, key: &str) -> Option<String>;

    /// Returns all keys, in ascending order.
    fn keys(&self) -> Vec<String>;

    /// Number of processor packages (sockets).
    fn socket_count(&self) -> Result<u32>;

    /// Number of NUMA nodes.
    fn node_count(&self) -> Result<u32>;

    /// Number of physical cores across all sockets.
    fn core_count(&self) -> Result<u32>;

    /// Number of logical processors across all sockets.
    fn cpu_count(&self) -> Result<u32>;

    /// Current clock frequency in MHz, fraction discarded.
    fn frequency_mhz(&self) -> Result<u32>;

    /// Minimum and maximum clock frequency in MHz, fraction discarded.
    fn frequency_range_mhz(&self) -> Result<(u32, u32)>;

    /// Lowercase names of the instruction set features the processor reports.
    fn features(&self) -> Vec<String>;

    /// Whether the processor reports the named feature. The name is compared case-insensitively.
    fn has_feature(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.features().iter().any(|feature| *feature == name)
    }
}
