use itertools::Itertools;

use crate::range::{MergeWithinThresholdIter, TimeRange, Timestamp};

/// Merges unordered time ranges which overlap or are separated by at most
/// `threshold`.
///
/// ```
/// use time_range_merge::{RangeMerger, TimeRange};
///
/// let merged = RangeMerger::new(2).merge([[20, 25], [1, 5], [6, 8], [30, 40]]);
/// assert_eq!(
///     vec![TimeRange::new(1, 8), TimeRange::new(20, 25), TimeRange::new(30, 40)],
///     merged
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMerger<T> {
    threshold: T,
}

impl<T: Timestamp> Default for RangeMerger<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: Timestamp> RangeMerger<T> {
    /// A negative `threshold` only merges ranges overlapping by more than its magnitude
    pub fn new(threshold: T) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Sorted, maximally merged copy of `ranges`.
    ///
    /// Inverted ranges and NaN endpoints are not rejected here and produce
    /// unspecified output. Use [`RangeMerger::try_merge`] to reject them.
    pub fn merge<R: Into<TimeRange<T>>>(
        &self,
        ranges: impl IntoIterator<Item = R>,
    ) -> Vec<TimeRange<T>> {
        let sorted = ranges
            .into_iter()
            .map(Into::into)
            .sorted_by(|a: &TimeRange<T>, b| a.start.total_cmp(&b.start));
        let input_len = sorted.len();
        let merged = MergeWithinThresholdIter::new(sorted, self.threshold).collect_vec();
        tracing::trace!(
            input = input_len,
            output = merged.len(),
            threshold = ?self.threshold,
            "Merged time ranges"
        );
        merged
    }

    /// Like [`RangeMerger::merge`], but rejects a NaN threshold, NaN
    /// endpoints and ranges ending before they start.
    pub fn try_merge<R: Into<TimeRange<T>>>(
        &self,
        ranges: impl IntoIterator<Item = R>,
    ) -> Result<Vec<TimeRange<T>>, MergeError<T>> {
        if !self.threshold.is_comparable() {
            tracing::debug!("Rejecting threshold {:?}", self.threshold);
            return Err(MergeError::UnorderedThreshold(self.threshold));
        }
        let ranges: Vec<TimeRange<T>> = ranges.into_iter().map(Into::into).collect_vec();
        for (index, &range) in ranges.iter().enumerate() {
            let error = if !range.start.is_comparable() || !range.end.is_comparable() {
                MergeError::UnorderedEndpoint { index, range }
            } else if range.is_inverted() {
                MergeError::InvertedRange { index, range }
            } else {
                continue;
            };
            tracing::debug!("Rejecting time ranges: {error}");
            return Err(error);
        }
        Ok(self.merge(ranges))
    }

    /// Whether `ranges` is sorted by start and no neighbours are within
    /// `threshold`, meaning [`RangeMerger::merge`] returns it unchanged.
    pub fn is_merged(&self, ranges: &[TimeRange<T>]) -> bool {
        ranges.iter().tuple_windows().all(|(prev, next)| {
            prev.start.total_cmp(&next.start).is_le() && !prev.is_within(next, self.threshold)
        })
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MergeError<T> {
    #[error("threshold {0:?} is not a number")]
    UnorderedThreshold(T),
    #[error("range #{index} ({range:?}) has an endpoint which is not a number")]
    UnorderedEndpoint { index: usize, range: TimeRange<T> },
    #[error("range #{index} ({range:?}) ends before it starts")]
    InvertedRange { index: usize, range: TimeRange<T> },
}
