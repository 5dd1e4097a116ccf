use tracing::debug;

use crate::values::{KeyValues, invalid_value};
use crate::{Result, TopologyReader};

const NODES: &str = "numa node(s)";
const SOCKETS: &str = "socket(s)";
const CORES_PER_SOCKET: &str = "core(s) per socket";
const CPUS: &str = "cpu(s)";
const MHZ: &str = "cpu mhz";
const MIN_MHZ: &str = "cpu min mhz";
const MAX_MHZ: &str = "cpu max mhz";
const FLAGS: &str = "flags";

/// CPU information parsed from the output of `lscpu` on Linux.
///
/// The output must be in English (run with `LANGUAGE=en_US:en`) because the key names are
/// matched literally.
#[derive(Clone, Debug)]
pub struct LinuxCpuInfo {
    values: KeyValues,
    features: Vec<String>,
}

impl LinuxCpuInfo {
    /// Parses `lscpu` output.
    ///
    /// Each line is a "key:   value" pair split at the first colon. Keys and values are
    /// lowercased and trimmed. Lines without a colon carry no information and are skipped.
    #[must_use]
    pub fn parse(lscpu_output: &str) -> Self {
        let mut values = KeyValues::new();

        for line in lscpu_output.lines() {
            // The value may itself contain colons (e.g. "Vendor ID: ...:..."), so only the
            // first one separates key from value.
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            values.insert(key.trim(), value.trim().to_lowercase());
        }

        let features = values
            .get(FLAGS)
            .map(|flags| flags.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        let result = Self { values, features };

        debug!(
            keys = result.values.len(),
            features = result.features.len(),
            "parsed lscpu output"
        );

        result
    }
}

impl TopologyReader for LinuxCpuInfo {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).map(str::to_string)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys()
    }

    fn socket_count(&self) -> Result<u32> {
        self.values.require_u32(SOCKETS)
    }

    fn node_count(&self) -> Result<u32> {
        self.values.require_u32(NODES)
    }

    fn core_count(&self) -> Result<u32> {
        let sockets = self.socket_count()?;
        let per_socket = self.values.require_u32(CORES_PER_SOCKET)?;

        sockets
            .checked_mul(per_socket)
            .ok_or_else(|| invalid_value(CORES_PER_SOCKET, &per_socket.to_string()))
    }

    fn cpu_count(&self) -> Result<u32> {
        self.values.require_u32(CPUS)
    }

    fn frequency_mhz(&self) -> Result<u32> {
        self.values.require_whole_number(MHZ)
    }

    fn frequency_range_mhz(&self) -> Result<(u32, u32)> {
        Ok((
            self.values.require_whole_number(MIN_MHZ)?,
            self.values.require_whole_number(MAX_MHZ)?,
        ))
    }

    fn features(&self) -> Vec<String> {
        self.features.clone()
    }
}
