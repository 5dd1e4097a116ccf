use argh::FromArgs;
use coreset::{CoreSet, RangeStyle};
use itertools::Itertools;
use tracing::debug;

use crate::{Error, Result};

/// Convert a CPU core set between masks, id lists and range strings.
#[derive(Debug, FromArgs)]
#[non_exhaustive]
pub struct CoresArgs {
    /// core set description, e.g. 0,10-12,20-18
    #[argh(option, short = 'd')]
    pub desc: Option<String>,

    /// core mask as a decimal integer, e.g. 270
    #[argh(option, short = 'm')]
    pub mask: Option<String>,

    /// core mask in hexadecimal, e.g. 0x10e
    #[argh(option, short = 'x')]
    pub hex: Option<String>,

    /// core mask in binary, e.g. 100001110
    #[argh(option, short = 'b')]
    pub bin: Option<String>,

    /// print one core id per line
    #[argh(switch, short = 'l')]
    pub line: bool,

    /// print a compressed range string such as 1-3,8
    #[argh(switch, short = 'r')]
    pub range: bool,

    /// with --range, print two consecutive ids as a,b instead of a-b
    #[argh(switch)]
    pub pair_as_list: bool,

    /// print the core mask in hexadecimal
    #[argh(switch)]
    pub to_hex: bool,
}

type ParseFn = fn(&str) -> std::result::Result<CoreSet, coreset::Error>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OutputMode {
    List,
    Lines,
    Range(RangeStyle),
    Hex,
}

impl CoresArgs {
    fn core_set(&self) -> Result<CoreSet> {
        let inputs: [(&str, Option<&str>, ParseFn); 4] = [
            ("desc", self.desc.as_deref(), CoreSet::from_description),
            ("mask", self.mask.as_deref(), CoreSet::from_decimal),
            ("hex", self.hex.as_deref(), CoreSet::from_hex),
            ("bin", self.bin.as_deref(), CoreSet::from_bin),
        ];

        let Ok((kind, value, parse)) = inputs
            .into_iter()
            .filter_map(|(kind, value, parse)| value.map(|value| (kind, value, parse)))
            .exactly_one()
        else {
            return Err(Error::Usage(
                "exactly one of --desc, --mask, --hex or --bin is required".to_string(),
            ));
        };

        debug!(kind, value, "parsing core set");

        Ok(parse(value)?)
    }

    fn output_mode(&self) -> Result<OutputMode> {
        if self.pair_as_list && !self.range {
            return Err(Error::Usage(
                "--pair-as-list only applies together with --range".to_string(),
            ));
        }

        let style = if self.pair_as_list {
            RangeStyle::PairAsList
        } else {
            RangeStyle::Hyphenated
        };

        match (self.line, self.range, self.to_hex) {
            (false, false, false) => Ok(OutputMode::List),
            (true, false, false) => Ok(OutputMode::Lines),
            (false, true, false) => Ok(OutputMode::Range(style)),
            (false, false, true) => Ok(OutputMode::Hex),
            _ => Err(Error::Usage(
                "--line, --range and --to-hex cannot be combined".to_string(),
            )),
        }
    }
}

/// Parses the core set selected by the arguments and renders it in the requested form.
///
/// # Errors
///
/// Returns [`Error::Usage`] if the arguments select no input, several inputs or several output
/// forms, and [`Error::CoreSet`] if the input is malformed.
pub fn run_cores(args: &CoresArgs) -> Result<String> {
    let mode = args.output_mode()?;
    let cores = args.core_set()?;

    debug!(%cores, count = cores.len(), ?mode, "rendering core set");

    Ok(match mode {
        OutputMode::List => cores.to_list(),
        OutputMode::Lines => cores.iter().join("\n"),
        OutputMode::Range(style) => cores.to_range_string_with(style),
        OutputMode::Hex => cores.to_hex(),
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let args = CoresArgs::from_args(&["cores"], args).unwrap();
        run_cores(&args)
    }

    #[test]
    fn description_to_list_by_default() {
        assert_eq!(run(&["--desc", "12,11"]).unwrap(), "11,12");
        assert_eq!(run(&["-d", "1-3,8"]).unwrap(), "1,2,3,8");
    }

    #[test]
    fn every_input_form() {
        assert_eq!(run(&["--mask", "270", "--range"]).unwrap(), "1-3,8");
        assert_eq!(run(&["--hex", "0x10e", "--range"]).unwrap(), "1-3,8");
        assert_eq!(run(&["--bin", "100001110", "--range"]).unwrap(), "1-3,8");
        assert_eq!(run(&["-x", "FFFF00", "-r"]).unwrap(), "8-23");
    }

    #[test]
    fn every_output_form() {
        assert_eq!(run(&["--desc", "15,16,3", "--line"]).unwrap(), "3\n15\n16");
        assert_eq!(run(&["--desc", "15,16,3", "--range"]).unwrap(), "3,15-16");
        assert_eq!(
            run(&["--desc", "15,16,3", "--range", "--pair-as-list"]).unwrap(),
            "3,15,16"
        );
        assert_eq!(run(&["--desc", "1,2,3,8", "--to-hex"]).unwrap(), "0x10e");
    }

    #[test]
    fn empty_set_is_empty_output() {
        assert_eq!(run(&["--mask", "0"]).unwrap(), "");
        assert_eq!(run(&["--mask", "0", "--to-hex"]).unwrap(), "0x0");
    }

    #[test]
    fn input_count_must_be_one() {
        assert!(matches!(run(&[]), Err(Error::Usage(_))));
        assert!(matches!(
            run(&["--desc", "1", "--hex", "0x2"]),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn output_modes_are_exclusive() {
        assert!(matches!(
            run(&["--desc", "1", "--line", "--range"]),
            Err(Error::Usage(_))
        ));
        assert!(matches!(
            run(&["--desc", "1", "--pair-as-list"]),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn malformed_input_is_core_set_error() {
        assert!(matches!(
            run(&["--desc", "1-2-3"]),
            Err(Error::CoreSet(_))
        ));
        assert!(matches!(run(&["--hex", "0xq"]), Err(Error::CoreSet(_))));
        assert!(matches!(run(&["--mask", "1.5"]), Err(Error::CoreSet(_))));
    }
}
