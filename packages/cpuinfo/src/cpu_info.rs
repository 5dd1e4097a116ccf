use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{
    Error, LinuxCpuInfo, MacCpuInfo, Platform, Result, TopologyReader, WindowsCpuInfo,
};

/// CPU information read with whichever platform reader matches the captured output.
///
/// The platform is chosen once, when the value is created, and every question is then answered
/// by that platform's reader.
///
/// # Example
///
/// ```
/// use cpuinfo::{CpuInfo, Platform, TopologyReader};
///
/// let output = "CPU(s): 8\nSocket(s): 1\nCore(s) per socket: 4\nFlags: sse2 avx2\n";
/// let info = CpuInfo::parse(Platform::Linux, output).unwrap();
///
/// assert_eq!(info.cpu_count().unwrap(), 8);
/// assert_eq!(info.core_count().unwrap(), 4);
/// assert!(info.has_feature("AVX2"));
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum CpuInfo {
    /// Parsed from `lscpu` output.
    Linux(LinuxCpuInfo),

    /// Parsed from `sysctl hw` output.
    MacOs(MacCpuInfo),

    /// Parsed from `wmic cpu get` output.
    Windows(WindowsCpuInfo),
}

impl CpuInfo {
    /// Parses the output of [`Platform::source_command()`] for the given platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the output is not shaped the way the platform's command formats it.
    /// Missing individual keys are not an error here; they are reported by the accessors.
    pub fn parse(platform: Platform, output: &str) -> Result<Self> {
        debug!(%platform, bytes = output.len(), "parsing CPU information");

        Ok(match platform {
            Platform::Linux => Self::Linux(LinuxCpuInfo::parse(output)),
            Platform::MacOs => Self::MacOs(MacCpuInfo::parse(output)),
            Platform::Windows => Self::Windows(WindowsCpuInfo::parse(output)?),
        })
    }

    /// Reads a file containing saved command output and parses it as [`CpuInfo::parse()`] does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read as UTF-8 text, or any error that
    /// [`CpuInfo::parse()`] returns.
    pub fn from_file(platform: Platform, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let output = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(platform, &output)
    }

    /// The platform whose reader answers the questions.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        match self {
            Self::Linux(_) => Platform::Linux,
            Self::MacOs(_) => Platform::MacOs,
            Self::Windows(_) => Platform::Windows,
        }
    }
}

impl TopologyReader for CpuInfo {
    fn value(&self, key: &str) -> Option<String> {
        match self {
            Self::Linux(reader) => reader.value(key),
            Self::MacOs(reader) => reader.value(key),
            Self::Windows(reader) => reader.value(key),
        }
    }

    fn keys(&self) -> Vec<String> {
        match self {
            Self::Linux(reader) => reader.keys(),
            Self::MacOs(reader) => reader.keys(),
            Self::Windows(reader) => reader.keys(),
        }
    }

    fn socket_count(&self) -> Result<u32> {
        match self {
            Self::Linux(reader) => reader.socket_count(),
            Self::MacOs(reader) => reader.socket_count(),
            Self::Windows(reader) => reader.socket_count(),
        }
    }

    fn node_count(&self) -> Result<u32> {
        match self {
            Self::Linux(reader) => reader.node_count(),
            Self::MacOs(reader) => reader.node_count(),
            Self::Windows(reader) => reader.node_count(),
        }
    }

    fn core_count(&self) -> Result<u32> {
        match self {
            Self::Linux(reader) => reader.core_count(),
            Self::MacOs(reader) => reader.core_count(),
            Self::Windows(reader) => reader.core_count(),
        }
    }

    fn cpu_count(&self) -> Result<u32> {
        match self {
            Self::Linux(reader) => reader.cpu_count(),
            Self::MacOs(reader) => reader.cpu_count(),
            Self::Windows(reader) => reader.cpu_count(),
        }
    }

    fn frequency_mhz(&self) -> Result<u32> {
        match self {
            Self::Linux(reader) => reader.frequency_mhz(),
            Self::MacOs(reader) => reader.frequency_mhz(),
            Self::Windows(reader) => reader.frequency_mhz(),
        }
    }

    fn frequency_range_mhz(&self) -> Result<(u32, u32)> {
        match self {
            Self::Linux(reader) => reader.frequency_range_mhz(),
            Self::MacOs(reader) => reader.frequency_range_mhz(),
            Self::Windows(reader) => reader.frequency_range_mhz(),
        }
    }

    fn features(&self) -> Vec<String> {
        match self {
            Self::Linux(reader) => reader.features(),
            Self::MacOs(reader) => reader.features(),
            Self::Windows(reader) => reader.features(),
        }
    }
}
