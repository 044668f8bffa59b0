use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{CheckedSub, Zero};

/// Numeric point on a time axis, e.g. milliseconds since an epoch.
///
/// Implemented for all primitive integers and floats.
pub trait Timestamp: Copy + PartialOrd + Debug + Zero {
    /// Total order used for sorting. Never panics, even for NaN.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// `self + threshold`. Integers saturate at their bounds.
    fn offset_by(self, threshold: Self) -> Self;

    /// `self - earlier`, `None` if integers overflow
    fn checked_distance_from(self, earlier: Self) -> Option<Self>;

    /// False if the value has no place in the partial order (NaN)
    fn is_comparable(&self) -> bool {
        true
    }
}

macro_rules! impl_timestamp_int {
    ($($t:ty),*) => {
        $(
            impl Timestamp for $t {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn offset_by(self, threshold: Self) -> Self {
                    self.saturating_add(threshold)
                }

                fn checked_distance_from(self, earlier: Self) -> Option<Self> {
                    CheckedSub::checked_sub(&self, &earlier)
                }
            }
        )*
    };
}

macro_rules! impl_timestamp_float {
    ($($t:ty),*) => {
        $(
            impl Timestamp for $t {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                fn offset_by(self, threshold: Self) -> Self {
                    self + threshold
                }

                fn checked_distance_from(self, earlier: Self) -> Option<Self> {
                    Some(self - earlier)
                }

                fn is_comparable(&self) -> bool {
                    !self.is_nan()
                }
            }
        )*
    };
}

impl_timestamp_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_timestamp_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_offset_saturates() {
        assert_eq!(i64::MAX, (i64::MAX - 1).offset_by(10));
        assert_eq!(u8::MAX, 250u8.offset_by(10));
        assert_eq!(-5, 5i32.offset_by(-10));
    }

    #[test]
    fn integer_distance_is_checked() {
        assert_eq!(Some(4), 5u32.checked_distance_from(1));
        assert_eq!(None, 1u32.checked_distance_from(5));
        assert_eq!(None, i64::MAX.checked_distance_from(i64::MIN));
        assert_eq!(Some(-4.0), 1.0f64.checked_distance_from(5.0));
    }

    #[test]
    fn float_order_is_total() {
        let mut values = vec![3.0, f64::NAN, -1.0, f64::INFINITY, 0.5];
        values.sort_by(Timestamp::total_cmp);
        assert_eq!(&[-1.0, 0.5, 3.0, f64::INFINITY], &values[..4]);
        assert!(values[4].is_nan());
    }

    #[test]
    fn only_nan_is_incomparable() {
        assert!(f64::NAN.offset_by(1.0).is_nan());
        assert!(!Timestamp::is_comparable(&f32::NAN));
        assert!(Timestamp::is_comparable(&f64::NEG_INFINITY));
        assert!(Timestamp::is_comparable(&0u16));
    }
}
