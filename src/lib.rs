//! Merge half-open time ranges `[start, end)` which overlap or are separated
//! by a gap of at most a threshold.
//!
//! Timestamps are plain numbers (e.g. milliseconds since an epoch). Any
//! primitive integer or float implements [`Timestamp`].
//!
//! ```
//! use time_range_merge::{merge_time_ranges, TimeRange};
//!
//! assert_eq!(
//!     vec![TimeRange::new(1, 10)],
//!     merge_time_ranges([[1, 5], [6, 10]], 1)
//! );
//! ```
mod merger;
pub mod range;

pub use merger::*;
pub use range::{InvertedRangeError, TimeRange, Timestamp};

/// Sorted, non-overlapping ranges covering `ranges`, with neighbours whose
/// gap is at most `threshold` merged into one.
///
/// The input is not modified. See [`RangeMerger::merge`].
pub fn merge_time_ranges<T: Timestamp, R: Into<TimeRange<T>>>(
    ranges: impl IntoIterator<Item = R>,
    threshold: T,
) -> Vec<TimeRange<T>> {
    RangeMerger::new(threshold).merge(ranges)
}

/// [`merge_time_ranges`] with a zero threshold: only overlapping and
/// touching ranges are merged.
pub fn merge_overlapping<T: Timestamp, R: Into<TimeRange<T>>>(
    ranges: impl IntoIterator<Item = R>,
) -> Vec<TimeRange<T>> {
    RangeMerger::default().merge(ranges)
}
