use std::fmt::{self, Display};
use std::str::FromStr;

use crate::Error;

/// The operating system family whose command output is being read.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Platform {
    /// Output of `lscpu`.
    Linux,

    /// Output of `sysctl hw`.
    MacOs,

    /// Output of `wmic cpu get`.
    Windows,
}

impl Platform {
    /// The platform the current build targets, if it is one we know how to read.
    #[must_use]
    pub const fn current() -> Option<Self> {
        if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(windows) {
            Some(Self::Windows)
        } else {
            None
        }
    }

    /// The command whose output the reader for this platform understands.
    ///
    /// This crate never runs the command itself. Capture its output and hand it to
    /// [`CpuInfo::parse()`][crate::CpuInfo::parse] or save it to a file for
    /// [`CpuInfo::from_file()`][crate::CpuInfo::from_file].
    #[must_use]
    pub const fn source_command(self) -> &'static str {
        match self {
            // English output is required because we match on the key names.
            Self::Linux => "LANGUAGE=en_US:en lscpu",
            Self::MacOs => "sysctl hw",
            Self::Windows => "wmic cpu get",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linux => "linux",
            Self::MacOs => "darwin",
            Self::Windows => "win32",
        };

        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = Error;

    /// Accepts `linux`, `darwin`/`macos` and `win32`/`windows`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "darwin" | "macos" => Ok(Self::MacOs),
            "win32" | "windows" => Ok(Self::Windows),
            _ => Err(Error::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
