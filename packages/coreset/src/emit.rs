use itertools::Itertools;

use crate::Item;

/// How a run of exactly two consecutive core ids is rendered in a range string.
///
/// Runs of three or more ids are always rendered as a hyphenated range and single ids are
/// always rendered on their own. Only the two-element case is ambiguous.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum RangeStyle {
    /// `{15, 16}` is rendered as `15-16`.
    #[default]
    Hyphenated,

    /// `{15, 16}` is rendered as `15,16`.
    PairAsList,
}

/// Renders the ids as a plain comma-separated list, e.g. `0,1,2,3,8`.
///
/// The items must already be sorted and free of duplicates.
pub(crate) fn emit_list(items: &[Item]) -> String {
    items.iter().join(",")
}

/// Renders the ids as a compressed range string, e.g. `0,10-12,15-16,18-21,50`.
///
/// The items must already be sorted and free of duplicates.
pub(crate) fn emit_ranges(items: &[Item], style: RangeStyle) -> String {
    runs(items)
        .into_iter()
        .map(|(start, end)| emit_run(start, end, style))
        .join(",")
}

/// Groups sorted ids into maximal runs of consecutive ids, as inclusive `(start, end)` pairs.
fn runs(items: &[Item]) -> Vec<(Item, Item)> {
    let mut runs = Vec::new();
    let mut current: Option<(Item, Item)> = None;

    for &item in items {
        current = match current {
            Some((start, end)) if end.checked_add(1) == Some(item) => Some((start, item)),
            Some(finished) => {
                runs.push(finished);
                Some((item, item))
            }
            None => Some((item, item)),
        };
    }

    runs.extend(current);
    runs
}

fn emit_run(start: Item, end: Item, style: RangeStyle) -> String {
    if start == end {
        return start.to_string();
    }

    let is_pair = start.checked_add(1) == Some(end);

    match style {
        RangeStyle::PairAsList if is_pair => format!("{start},{end}"),
        RangeStyle::Hyphenated | RangeStyle::PairAsList => format!("{start}-{end}"),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn emit_ranges_smoke_test() {
        let h = RangeStyle::Hyphenated;

        assert_eq!(emit_ranges(&[], h), "");

        assert_eq!(emit_ranges(&[555], h), "555");

        assert_eq!(emit_ranges(&[555, 666], h), "555,666");

        assert_eq!(emit_ranges(&[8, 9], h), "8-9");

        assert_eq!(emit_ranges(&[0, 1, 2, 3], h), "0-3");

        assert_eq!(
            emit_ranges(&[0, 1, 2, 3, 6, 7, 8, 11, 12, 13], h),
            "0-3,6-8,11-13"
        );

        assert_eq!(emit_ranges(&[0, 1, 3], h), "0-1,3");

        assert_eq!(
            emit_ranges(&[0, 10, 11, 12, 15, 16, 18, 19, 20, 21, 50], h),
            "0,10-12,15-16,18-21,50"
        );
    }

    #[test]
    fn pair_as_list_only_affects_pairs() {
        let p = RangeStyle::PairAsList;

        assert_eq!(emit_ranges(&[8, 9], p), "8,9");
        assert_eq!(emit_ranges(&[7], p), "7");
        assert_eq!(emit_ranges(&[1, 2, 3], p), "1-3");

        assert_eq!(
            emit_ranges(&[0, 10, 11, 12, 15, 16, 18, 19, 20, 21, 50], p),
            "0,10-12,15,16,18-21,50"
        );
    }

    #[test]
    fn run_ending_at_max_id() {
        assert_eq!(
            emit_ranges(&[Item::MAX - 1, Item::MAX], RangeStyle::Hyphenated),
            format!("{}-{}", Item::MAX - 1, Item::MAX)
        );
    }

    #[test]
    fn emit_list_smoke_test() {
        assert_eq!(emit_list(&[]), "");
        assert_eq!(emit_list(&[11]), "11");
        assert_eq!(emit_list(&[0, 1, 2, 3, 8, 9, 10]), "0,1,2,3,8,9,10");
    }
}
