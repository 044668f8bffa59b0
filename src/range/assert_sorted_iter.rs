use super::{TimeRange, Timestamp};

/// Panics in debug builds if the start of a range precedes the previous one.
/// Passes items through untouched in release builds.
pub struct DebugAssertSortedIter<TIter, T>(TIter, Option<T>);

impl<TIter, T> DebugAssertSortedIter<TIter, T> {
    pub fn new(iter: TIter) -> Self {
        Self(iter, None)
    }
}

impl<TIter: Iterator<Item = TimeRange<T>>, T: Timestamp> Iterator
    for DebugAssertSortedIter<TIter, T>
{
    type Item = TimeRange<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.0.next()?;
        #[cfg(debug_assertions)]
        {
            if let Some(last_start) = self.1.take() {
                assert!(
                    value.start.total_cmp(&last_start) != std::cmp::Ordering::Less,
                    "{:?}>={:?}",
                    value.start,
                    last_start
                );
            }
            self.1 = Some(value.start);
        }

        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn passes_sorted_starts() {
        let ranges = vec![
            TimeRange::new(1, 9),
            TimeRange::new(1, 2),
            TimeRange::new(4, 5),
        ];
        assert_eq!(
            ranges,
            DebugAssertSortedIter::new(ranges.clone().into_iter()).collect_vec()
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "1>=4")]
    fn panics_on_descending_start() {
        DebugAssertSortedIter::new([TimeRange::new(4, 5), TimeRange::new(1, 2)].into_iter())
            .for_each(drop);
    }
}
