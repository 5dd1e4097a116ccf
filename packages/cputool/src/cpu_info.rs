use std::io::Read;
use std::iter;
use std::path::PathBuf;

use argh::FromArgs;
use cpuinfo::{CpuInfo, Platform, Summary, TopologyReader};
use itertools::Itertools;
use tracing::debug;

use crate::{Error, Result};

/// Summarize CPU topology and features from saved `lscpu`, `sysctl hw` or `wmic cpu get` output.
#[derive(Debug, FromArgs)]
#[non_exhaustive]
pub struct CpuInfoArgs {
    /// platform that produced the output: linux, darwin or win32 (default: this platform)
    #[argh(option, short = 'p')]
    pub platform: Option<Platform>,

    /// file holding the command output (default: standard input)
    #[argh(option, short = 'f')]
    pub file: Option<PathBuf>,

    /// print every key with its raw value instead of the summary
    #[argh(switch)]
    pub raw: bool,

    /// report whether the named feature is present, may be repeated
    #[argh(option)]
    pub feature: Vec<String>,
}

/// Reads the command output named by the arguments (or `stdin` if no file is given) and renders
/// a summary, a raw key/value dump and any requested feature checks.
///
/// # Errors
///
/// Returns [`Error::Usage`] if no platform is given and the current one is not supported,
/// [`Error::Stdin`] if standard input cannot be read and [`Error::CpuInfo`] if the output
/// cannot be read or parsed.
pub fn run_cpu_info(args: &CpuInfoArgs, mut stdin: impl Read) -> Result<String> {
    let platform = args.platform.or_else(Platform::current).ok_or_else(|| {
        Error::Usage("this platform is not supported, pass --platform explicitly".to_string())
    })?;

    let info = if let Some(path) = &args.file {
        debug!(%platform, path = %path.display(), "reading CPU information from file");
        CpuInfo::from_file(platform, path)?
    } else {
        debug!(%platform, "reading CPU information from standard input");

        let mut output = String::new();
        stdin.read_to_string(&mut output).map_err(Error::Stdin)?;

        CpuInfo::parse(platform, &output)?
    };

    Ok(render(&info, args))
}

fn render(reader: &impl TopologyReader, args: &CpuInfoArgs) -> String {
    let body = if args.raw {
        reader
            .keys()
            .into_iter()
            .map(|key| {
                let value = reader.value(&key).unwrap_or_default();
                format!("{key}: {value}")
            })
            .join("\n")
    } else {
        Summary::from_reader(reader).to_string()
    };

    let feature_lines = args.feature.iter().map(|feature| {
        let answer = if reader.has_feature(feature) {
            "yes"
        } else {
            "no"
        };

        format!("{feature}: {answer}")
    });

    iter::once(body).chain(feature_lines).join("\n")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    const LSCPU: &str = "\
CPU(s):              8
Core(s) per socket:  4
Socket(s):           1
NUMA node(s):        1
CPU MHz:             1046.410
CPU max MHz:         4000.0000
CPU min MHz:         800.0000
Flags:               sse2 avx2
";

    fn run(args: &[&str], stdin: &str) -> Result<String> {
        let args = CpuInfoArgs::from_args(&["cpu-info"], args).unwrap();
        run_cpu_info(&args, Cursor::new(stdin.to_string()))
    }

    #[test]
    fn summary_from_stdin() {
        let text = run(&["--platform", "linux"], LSCPU).unwrap();

        assert!(text.contains("cores:          4"));
        assert!(text.contains("cpus:           8"));
        assert!(text.contains("range MHz:      800-4000"));
    }

    #[test]
    fn features_are_reported() {
        let text = run(
            &["-p", "linux", "--feature", "AVX2", "--feature", "avx512"],
            LSCPU,
        )
        .unwrap();

        assert!(text.contains("\nAVX2: yes"));
        assert!(text.ends_with("\navx512: no"));
    }

    #[test]
    fn raw_dump_is_sorted() {
        let text = run(&["-p", "linux", "--raw"], LSCPU).unwrap();

        let first_line = text.lines().next().unwrap();
        assert_eq!(first_line, "core(s) per socket: 4");
        assert!(text.contains("flags: sse2 avx2"));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LSCPU.as_bytes()).unwrap();

        let path = file.path().to_str().unwrap();
        let text = run(&["--platform", "linux", "--file", path], "").unwrap();

        assert!(text.contains("sockets:        1"));
    }

    #[test]
    fn windows_without_sockets() {
        let wmic = "NumberOfCores  NumberOfLogicalProcessors\r\n\r\n4              8\r\n";
        let text = run(&["--platform", "win32"], wmic).unwrap();

        assert!(text.contains("sockets:        n/a"));
        assert!(text.contains("cpus:           8"));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        CpuInfoArgs::from_args(&["cpu-info"], &["--platform", "beos"]).unwrap_err();
    }

    #[test]
    fn bad_windows_output_is_error() {
        assert!(matches!(
            run(&["--platform", "windows"], ""),
            Err(Error::CpuInfo(_))
        ));
    }
}
