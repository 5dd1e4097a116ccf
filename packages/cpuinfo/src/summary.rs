use std::fmt::{self, Display};

use tracing::debug;

use crate::TopologyReader;

/// Every derived value a [`TopologyReader`] can answer, with unanswerable ones left as `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct Summary {
    /// Number of processor packages.
    pub sockets: Option<u32>,

    /// Number of NUMA nodes.
    pub nodes: Option<u32>,

    /// Number of physical cores.
    pub cores: Option<u32>,

    /// Number of logical processors.
    pub cpus: Option<u32>,

    /// Current clock frequency in MHz.
    pub frequency_mhz: Option<u32>,

    /// Minimum and maximum clock frequency in MHz.
    pub frequency_range_mhz: Option<(u32, u32)>,

    /// Number of reported instruction set features.
    pub feature_count: usize,
}

impl Summary {
    /// Asks the reader every question, recording failures as `None`.
    #[must_use]
    pub fn from_reader(reader: &impl TopologyReader) -> Self {
        Self {
            sockets: answer("sockets", reader.socket_count()),
            nodes: answer("nodes", reader.node_count()),
            cores: answer("cores", reader.core_count()),
            cpus: answer("cpus", reader.cpu_count()),
            frequency_mhz: answer("frequency", reader.frequency_mhz()),
            frequency_range_mhz: answer("frequency range", reader.frequency_range_mhz()),
            feature_count: reader.features().len(),
        }
    }
}

fn answer<T>(what: &str, result: crate::Result<T>) -> Option<T> {
    result
        .inspect_err(|error| debug!(what, %error, "value not available"))
        .ok()
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn line(f: &mut fmt::Formatter<'_>, label: &str, value: Option<u32>) -> fmt::Result {
            match value {
                Some(value) => writeln!(f, "{label:<16}{value}"),
                None => writeln!(f, "{label:<16}n/a"),
            }
        }

        line(f, "sockets:", self.sockets)?;
        line(f, "nodes:", self.nodes)?;
        line(f, "cores:", self.cores)?;
        line(f, "cpus:", self.cpus)?;
        line(f, "frequency MHz:", self.frequency_mhz)?;

        match self.frequency_range_mhz {
            Some((min, max)) => writeln!(f, "{:<16}{min}-{max}", "range MHz:")?,
            None => writeln!(f, "{:<16}n/a", "range MHz:")?,
        }

        write!(f, "{:<16}{}", "features:", self.feature_count)
    }
}
