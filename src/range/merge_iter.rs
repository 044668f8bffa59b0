use std::iter::FusedIterator;

use super::{DebugAssertSortedIter, TimeRange, Timestamp};

///
/// Merges ranges which overlap or lie within `threshold` of each other.
/// Input has to be sorted by start
///
pub(crate) struct MergeWithinThresholdIter<TIter, T> {
    iter: std::iter::Fuse<DebugAssertSortedIter<TIter, T>>,
    // Grows until the next input starts too far behind its end
    current: Option<TimeRange<T>>,
    threshold: T,
}

impl<TIter, T> MergeWithinThresholdIter<TIter, T>
where
    TIter: Iterator<Item = TimeRange<T>>,
    T: Timestamp,
{
    pub(crate) fn new(iter: TIter, threshold: T) -> Self {
        Self {
            iter: DebugAssertSortedIter::new(iter).fuse(),
            current: None,
            threshold,
        }
    }
}

impl<TIter, T> Iterator for MergeWithinThresholdIter<TIter, T>
where
    TIter: Iterator<Item = TimeRange<T>>,
    T: Timestamp,
{
    type Item = TimeRange<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = match self.current.take() {
            Some(current) => current,
            None => self.iter.next()?,
        };

        for next in &mut self.iter {
            if current.is_within(&next, self.threshold) {
                if next.end > current.end {
                    current.end = next.end;
                }
            } else {
                self.current = Some(next);
                break;
            }
        }
        Some(current)
    }
}

impl<TIter, T> FusedIterator for MergeWithinThresholdIter<TIter, T>
where
    TIter: Iterator<Item = TimeRange<T>>,
    T: Timestamp,
{
}
