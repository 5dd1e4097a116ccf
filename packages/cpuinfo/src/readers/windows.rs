use tracing::debug;

use crate::values::KeyValues;
use crate::{Error, Result, TopologyReader};

const CORES: &str = "numberofcores";
const LOGICAL_PROCESSORS: &str = "numberoflogicalprocessors";
const CURRENT_CLOCK_SPEED: &str = "currentclockspeed";
const MAX_CLOCK_SPEED: &str = "maxclockspeed";

/// CPU information parsed from the output of `wmic cpu get` on Windows.
///
/// This source does not report socket or NUMA node counts, nor instruction set features.
#[derive(Clone, Debug)]
pub struct WindowsCpuInfo {
    values: KeyValues,
}

impl WindowsCpuInfo {
    /// Parses `wmic cpu get` output.
    ///
    /// The output is a table: a header line of column names followed by a line of values, each
    /// value starting at the same position as its column name. Blank lines are skipped. A column
    /// runs from the start of its name up to the start of the next name. Columns with an empty
    /// value are not stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] if the output does not contain both a header line and a
    /// value line.
    pub fn parse(wmic_output: &str) -> Result<Self> {
        let mut lines = wmic_output
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty());

        let header = lines.next().ok_or_else(|| Error::Malformed {
            problem: "wmic output has no header line".to_string(),
        })?;

        let row = lines.next().ok_or_else(|| Error::Malformed {
            problem: "wmic output has a header line but no values".to_string(),
        })?;

        let mut values = KeyValues::new();

        for (name, value) in columns(header, row) {
            if !name.is_empty() && !value.is_empty() {
                values.insert(name, value);
            }
        }

        debug!(keys = values.len(), "parsed wmic cpu output");

        Ok(Self { values })
    }
}

/// Slices `row` into the columns laid out by `header`, returning trimmed (name, value) pairs.
fn columns<'a>(header: &'a str, row: &'a str) -> Vec<(&'a str, &'a str)> {
    // A column starts wherever a non-space character follows a space (or the line start).
    let starts: Vec<usize> = header
        .char_indices()
        .scan(true, |previous_was_space, (index, c)| {
            let is_start = *previous_was_space && !c.is_whitespace();
            *previous_was_space = c.is_whitespace();
            Some((index, is_start))
        })
        .filter_map(|(index, is_start)| is_start.then_some(index))
        .collect();

    let ends = starts.iter().skip(1).copied().map(Some).chain([None]);

    starts
        .iter()
        .copied()
        .zip(ends)
        .map(|(start, end)| {
            let name = slice(header, start, end);
            let value = slice(row, start, end);
            (name.trim(), value.trim())
        })
        .collect()
}

/// `text[start..end]`, clamped to the text and empty if the bounds do not fall on characters.
fn slice(text: &str, start: usize, end: Option<usize>) -> &str {
    let end = end.unwrap_or(text.len()).min(text.len());
    let start = start.min(end);

    text.get(start..end).unwrap_or_default()
}

impl TopologyReader for WindowsCpuInfo {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).map(str::to_string)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys()
    }

    fn socket_count(&self) -> Result<u32> {
        Err(Error::NotReported {
            what: "socket count",
        })
    }

    fn node_count(&self) -> Result<u32> {
        Err(Error::NotReported { what: "node count" })
    }

    fn core_count(&self) -> Result<u32> {
        self.values.require_u32(CORES)
    }

    fn cpu_count(&self) -> Result<u32> {
        self.values.require_u32(LOGICAL_PROCESSORS)
    }

    fn frequency_mhz(&self) -> Result<u32> {
        self.values.require_u32(CURRENT_CLOCK_SPEED)
    }

    // Only the maximum is reported, the minimum is given as zero.
    fn frequency_range_mhz(&self) -> Result<(u32, u32)> {
        Ok((0, self.values.require_u32(MAX_CLOCK_SPEED)?))
    }

    fn features(&self) -> Vec<String> {
        Vec::new()
    }
}
