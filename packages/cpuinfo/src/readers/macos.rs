use tracing::{debug, trace};

use crate::values::{KeyValues, invalid_value};
use crate::{Result, TopologyReader};

const PACKAGES: &str = "packages";
const LOGICAL_CPUS: &str = "logicalcpu_max";
const PHYSICAL_CPUS: &str = "physicalcpu";
const FREQUENCY: &str = "cpufrequency";
const MIN_FREQUENCY: &str = "cpufrequency_min";
const MAX_FREQUENCY: &str = "cpufrequency_max";

const HZ_PER_MHZ: u64 = 1_000_000;

/// CPU information parsed from the output of `sysctl hw` on macOS.
#[derive(Clone, Debug)]
pub struct MacCpuInfo {
    values: KeyValues,
    features: Vec<String>,
}

impl MacCpuInfo {
    /// Parses `sysctl hw` output.
    ///
    /// Each line is a `hw.key: value` pair. The `hw.` prefix is dropped. Lines of the form
    /// `hw.optional.name: 1` are not stored as values but mark `name` as a supported feature.
    #[must_use]
    pub fn parse(sysctl_output: &str) -> Self {
        let mut values = KeyValues::new();
        let mut features = Vec::new();

        for line in sysctl_output.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let key = key.trim();
            let key = key.strip_prefix("hw.").unwrap_or(key);
            let value = value.trim();

            if let Some(feature) = key.strip_prefix("optional.") {
                if value == "1" {
                    features.push(feature.to_lowercase());
                } else {
                    trace!(feature, value, "feature not available");
                }
            } else {
                values.insert(key, value);
            }
        }

        debug!(
            keys = values.len(),
            features = features.len(),
            "parsed sysctl hw output"
        );

        Self { values, features }
    }

    fn require_mhz(&self, key: &str) -> Result<u32> {
        let hz = self.values.require_u64(key)?;

        #[expect(clippy::integer_division, reason = "fractions of a MHz are discarded")]
        let mhz = hz / HZ_PER_MHZ;

        u32::try_from(mhz)
            .ok()
            .ok_or_else(|| invalid_value(key, &hz.to_string()))
    }
}

impl TopologyReader for MacCpuInfo {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).map(str::to_string)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys()
    }

    fn socket_count(&self) -> Result<u32> {
        self.values.require_u32(PACKAGES)
    }

    // macOS does not expose NUMA nodes, every package is treated as one node.
    fn node_count(&self) -> Result<u32> {
        self.socket_count()
    }

    fn core_count(&self) -> Result<u32> {
        self.values.require_u32(PHYSICAL_CPUS)
    }

    fn cpu_count(&self) -> Result<u32> {
        self.values.require_u32(LOGICAL_CPUS)
    }

    fn frequency_mhz(&self) -> Result<u32> {
        self.require_mhz(FREQUENCY)
    }

    fn frequency_range_mhz(&self) -> Result<(u32, u32)> {
        Ok((
            self.require_mhz(MIN_FREQUENCY)?,
            self.require_mhz(MAX_FREQUENCY)?,
        ))
    }

    fn features(&self) -> Vec<String> {
        self.features.clone()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Error;
    use crate::test_data::SYSCTL_HW_OUTPUT;

    #[test]
    fn parse_smoke_test() {
        let info = MacCpuInfo::parse(SYSCTL_HW_OUTPUT);

        assert_eq!(info.socket_count().unwrap(), 1);
        assert_eq!(info.node_count().unwrap(), 1);
        assert_eq!(info.core_count().unwrap(), 4);
        assert_eq!(info.cpu_count().unwrap(), 8);

        assert_eq!(info.frequency_mhz().unwrap(), 2300);
        assert_eq!(info.frequency_range_mhz().unwrap(), (2300, 2300));

        assert!(info.has_feature("avx2_0"));
        assert!(info.has_feature("SSE4_2"));
        assert!(!info.has_feature("avx512f"));
    }

    #[test]
    fn hw_prefix_is_stripped() {
        let info = MacCpuInfo::parse(SYSCTL_HW_OUTPUT);

        assert_eq!(info.value("ncpu").as_deref(), Some("8"));
        assert_eq!(info.value("hw.ncpu"), None);
        assert!(!info.keys().iter().any(|key| key.starts_with("optional")));
    }

    #[test]
    fn apple_silicon_has_no_frequency() {
        let info = MacCpuInfo::parse("hw.packages: 1\nhw.optional.arm.FEAT_AES: 1\n");

        assert!(matches!(info.frequency_mhz(), Err(Error::MissingKey { .. })));
        assert!(info.has_feature("arm.feat_aes"));
    }
}
