use std::fmt::Debug;
use std::ops::Range;

use super::Timestamp;

/// Half-open interval `[start, end)` on a time axis.
///
/// `start <= end` is expected but not enforced, so inverted ranges can be
/// represented. Use [`TimeRange::try_new`] to reject them.
///
/// Exists, because std::ops::Range is not Copy
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
pub struct TimeRange<T> {
    pub start: T,
    pub end: T,
}

impl<T: Debug> Debug for TimeRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}..{:?}", self.start, self.end))
    }
}

impl<T> TimeRange<T> {
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: Timestamp> TimeRange<T> {
    pub fn try_new(start: T, end: T) -> Result<Self, InvertedRangeError<T>> {
        if start > end {
            Err(InvertedRangeError(start..end))
        } else {
            Ok(Self::new(start, end))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// `None` for inverted ranges and lengths which don't fit into `T`
    pub fn len(&self) -> Option<T> {
        if self.is_inverted() {
            return None;
        }
        self.end.checked_distance_from(self.start)
    }

    pub fn contains(&self, point: T) -> bool {
        self.start <= point && point < self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `next` starts no later than `threshold` after `self` ends.
    /// Assumes `next` does not start before `self`.
    pub fn is_within(&self, next: &Self, threshold: T) -> bool {
        next.start <= self.end.offset_by(threshold)
    }
}

impl<T> From<TimeRange<T>> for Range<T> {
    fn from(value: TimeRange<T>) -> Self {
        value.start..value.end
    }
}

impl<T> From<TimeRange<T>> for (T, T) {
    fn from(value: TimeRange<T>) -> Self {
        (value.start, value.end)
    }
}

impl<T> From<TimeRange<T>> for [T; 2] {
    fn from(value: TimeRange<T>) -> Self {
        [value.start, value.end]
    }
}

impl<T> From<Range<T>> for TimeRange<T> {
    fn from(value: Range<T>) -> Self {
        Self::new(value.start, value.end)
    }
}

impl<T> From<(T, T)> for TimeRange<T> {
    fn from((start, end): (T, T)) -> Self {
        Self::new(start, end)
    }
}

impl<T> From<[T; 2]> for TimeRange<T> {
    fn from([start, end]: [T; 2]) -> Self {
        Self::new(start, end)
    }
}

impl<T: Copy> From<&TimeRange<T>> for TimeRange<T> {
    fn from(value: &TimeRange<T>) -> Self {
        *value
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0:?} ends before it starts")]
pub struct InvertedRangeError<T>(pub Range<T>);
