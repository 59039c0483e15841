//! Column width resolution.
//!
//! Every column starts at the widest its content needs. Ratio columns in an
//! expanding table then share the space left by the other columns. When the
//! total is too wide, wrappable columns shrink toward their minimums and, as
//! a last resort, all columns shrink evenly. An expanding table finally
//! spreads any leftover space in proportion to the current widths.

use crate::measure::Measurement;

/// Width requirements of one column, padding included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpan {
    pub measurement: Measurement,
    /// Share of the flexible space when the table expands.
    pub ratio: Option<usize>,
    /// False for fixed-width and no-wrap columns.
    pub shrinkable: bool,
}

/// Resolves the width of every column so the total fits `max_width`.
pub fn resolve_widths(spans: &[ColumnSpan], max_width: usize, expand: bool) -> Vec<usize> {
    if spans.is_empty() {
        return Vec::new();
    }

    let mut widths: Vec<usize> = spans.iter().map(|s| s.measurement.maximum.max(1)).collect();

    if expand && spans.iter().any(|s| s.ratio.unwrap_or(0) > 0) {
        let fixed: usize = spans
            .iter()
            .zip(&widths)
            .filter(|(span, _)| span.ratio.is_none())
            .map(|(_, width)| width)
            .sum();
        let flexible: Vec<usize> = (0..spans.len())
            .filter(|i| spans[*i].ratio.is_some())
            .collect();
        let ratios: Vec<usize> = flexible
            .iter()
            .map(|i| spans[*i].ratio.unwrap_or(0))
            .collect();
        let minimums: Vec<usize> = flexible
            .iter()
            .map(|i| spans[*i].measurement.minimum.max(1))
            .collect();
        let shares = ratio_distribute(max_width.saturating_sub(fixed), &ratios, &minimums);
        for (index, share) in flexible.into_iter().zip(shares) {
            widths[index] = share;
        }
    }

    let mut total: usize = widths.iter().sum();
    if total > max_width {
        let slack: Vec<usize> = spans
            .iter()
            .zip(&widths)
            .map(|(span, width)| {
                if span.shrinkable {
                    width.saturating_sub(span.measurement.minimum)
                } else {
                    0
                }
            })
            .collect();
        widths = ratio_reduce(total - max_width, &slack, &slack, &widths);
        total = widths.iter().sum();

        while total > max_width {
            let even: Vec<usize> = widths.iter().map(|w| usize::from(*w > 0)).collect();
            widths = ratio_reduce(total - max_width, &even, &widths, &widths);
            let reduced: usize = widths.iter().sum();
            if reduced == total {
                break;
            }
            total = reduced;
        }
    }

    if expand && total < max_width {
        let pads = ratio_distribute(max_width - total, &widths, &vec![0; widths.len()]);
        for (width, pad) in widths.iter_mut().zip(pads) {
            *width += pad;
        }
    }

    widths
}

/// Splits `total` in proportion to `ratios`, giving each share at least its
/// minimum. The last share with a non-zero ratio absorbs rounding.
pub fn ratio_distribute(total: usize, ratios: &[usize], minimums: &[usize]) -> Vec<usize> {
    let mut total_ratio: usize = ratios.iter().sum();
    let mut remaining = total;
    let mut out = Vec::with_capacity(ratios.len());

    for (ratio, minimum) in ratios.iter().zip(minimums) {
        let share = if total_ratio > 0 {
            (ratio * remaining).div_ceil(total_ratio).max(*minimum)
        } else {
            remaining
        };
        out.push(share);
        total_ratio -= ratio;
        remaining = remaining.saturating_sub(share);
    }
    out
}

/// Subtracts `total` from `values` in proportion to `ratios`, never taking
/// more than `maximums[i]` from value `i`.
pub fn ratio_reduce(
    total: usize,
    ratios: &[usize],
    maximums: &[usize],
    values: &[usize],
) -> Vec<usize> {
    let ratios: Vec<usize> = ratios
        .iter()
        .zip(maximums)
        .map(|(ratio, max)| if *max > 0 { *ratio } else { 0 })
        .collect();
    let mut total_ratio: usize = ratios.iter().sum();
    if total_ratio == 0 {
        return values.to_vec();
    }

    let mut remaining = total;
    let mut out = Vec::with_capacity(values.len());
    for ((ratio, maximum), value) in ratios.iter().zip(maximums).zip(values) {
        if *ratio > 0 && total_ratio > 0 {
            // Rounded share of what is left.
            let share = (2 * ratio * remaining + total_ratio) / (2 * total_ratio);
            let taken = share.min(*maximum).min(*value);
            out.push(value - taken);
            remaining = remaining.saturating_sub(taken);
            total_ratio -= ratio;
        } else {
            out.push(*value);
        }
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn spans_strategy() -> impl Strategy<Value = Vec<ColumnSpan>> {
        prop::collection::vec(
            (0usize..30, 0usize..60, prop::option::of(1usize..5), any::<bool>()).prop_map(
                |(minimum, maximum, ratio, shrinkable)| ColumnSpan {
                    measurement: Measurement::new(minimum, maximum),
                    ratio,
                    shrinkable,
                },
            ),
            1..8,
        )
    }

    proptest! {
        #[test]
        fn widths_never_exceed_available_space(
            spans in spans_strategy(),
            max_width in 0usize..200,
        ) {
            let widths = resolve_widths(&spans, max_width, false);
            prop_assert_eq!(widths.len(), spans.len());
            prop_assert!(widths.iter().sum::<usize>() <= max_width);
        }

        #[test]
        fn expanded_widths_fill_available_space(
            spans in spans_strategy(),
            max_width in 0usize..200,
        ) {
            let widths = resolve_widths(&spans, max_width, true);
            prop_assert_eq!(widths.iter().sum::<usize>(), max_width);
        }

        #[test]
        fn distribute_hands_out_everything(
            total in 0usize..500,
            ratios in prop::collection::vec(0usize..10, 1..8),
        ) {
            let minimums = vec![0; ratios.len()];
            let shares = ratio_distribute(total, &ratios, &minimums);
            prop_assert_eq!(shares.iter().sum::<usize>(), total);
        }
    }
}
