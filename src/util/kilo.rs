//! Distance arithmetic for ridden segments.
//!
//! A segment is ridden between two kilo positions on one line. The total counts every ride,
//! the unique distance counts each stretch of a line once no matter how often it was ridden.

use std::collections::BTreeMap;

use sea_orm::prelude::Decimal;

/// A ridden segment resolved to kilo positions on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiddenSegment {
    pub line_id: i32,
    pub start_kilo: Decimal,
    pub end_kilo: Decimal,
}

impl RiddenSegment {
    pub fn new(line_id: i32, start_kilo: Decimal, end_kilo: Decimal) -> Self {
        Self {
            line_id,
            start_kilo,
            end_kilo,
        }
    }

    /// Distance ridden, independent of direction.
    pub fn distance(&self) -> Decimal {
        (self.end_kilo - self.start_kilo).abs()
    }

    fn interval(&self) -> (Decimal, Decimal) {
        if self.start_kilo <= self.end_kilo {
            (self.start_kilo, self.end_kilo)
        } else {
            (self.end_kilo, self.start_kilo)
        }
    }
}

/// Sum of all ridden distances, `None` when nothing was ridden.
pub fn total_kilo(segments: &[RiddenSegment]) -> Option<Decimal> {
    if segments.is_empty() {
        return None;
    }

    Some(segments.iter().map(RiddenSegment::distance).sum())
}

/// Length of the union of ridden intervals per line, summed over lines.
///
/// Intervals that touch or overlap are merged before measuring, so riding A-B and B-C
/// counts the same as riding A-C once.
pub fn unique_kilo(segments: &[RiddenSegment]) -> Option<Decimal> {
    if segments.is_empty() {
        return None;
    }

    let mut by_line: BTreeMap<i32, Vec<(Decimal, Decimal)>> = BTreeMap::new();
    for segment in segments {
        by_line
            .entry(segment.line_id)
            .or_default()
            .push(segment.interval());
    }

    let mut total = Decimal::ZERO;
    for intervals in by_line.values_mut() {
        intervals.sort();

        let mut merged: Option<(Decimal, Decimal)> = None;
        for &(low, high) in intervals.iter() {
            merged = match merged {
                Some((cur_low, cur_high)) if low <= cur_high => Some((cur_low, cur_high.max(high))),
                Some((cur_low, cur_high)) => {
                    total += cur_high - cur_low;
                    Some((low, high))
                }
                None => Some((low, high)),
            };
        }

        if let Some((low, high)) = merged {
            total += high - low;
        }
    }

    Some(total)
}

#[cfg(test)]
mod tests {
    use sea_orm::prelude::Decimal;

    use super::*;

    fn km(tenths: i64) -> Decimal {
        Decimal::new(tenths, 1)
    }

    fn segment(line_id: i32, start: i64, end: i64) -> RiddenSegment {
        RiddenSegment::new(line_id, km(start), km(end))
    }

    #[test]
    fn nothing_ridden_has_no_totals() {
        assert_eq!(total_kilo(&[]), None);
        assert_eq!(unique_kilo(&[]), None);
    }

    #[test]
    fn distance_ignores_direction() {
        assert_eq!(segment(1, 1000, 250).distance(), km(750));
        assert_eq!(segment(1, 250, 1000).distance(), km(750));
    }

    #[test]
    fn total_counts_every_ride() {
        let segments = [segment(1, 0, 100), segment(1, 100, 0), segment(2, 50, 75)];

        assert_eq!(total_kilo(&segments), Some(km(225)));
    }

    #[test]
    fn unique_counts_repeated_stretch_once() {
        let segments = [segment(1, 0, 100), segment(1, 100, 0)];

        assert_eq!(unique_kilo(&segments), Some(km(100)));
    }

    #[test]
    fn unique_merges_touching_and_overlapping_intervals() {
        let segments = [
            segment(1, 0, 100),
            segment(1, 100, 150),
            segment(1, 120, 80),
            segment(1, 300, 400),
        ];

        assert_eq!(unique_kilo(&segments), Some(km(250)));
    }

    #[test]
    fn unique_keeps_lines_apart() {
        let segments = [segment(1, 0, 100), segment(2, 0, 100)];

        assert_eq!(unique_kilo(&segments), Some(km(200)));
    }
}
