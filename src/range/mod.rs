///
/// Time ranges and merging sorted streams of them
///
mod assert_sorted_iter;
mod merge_iter;
mod time_range;
mod timestamp;

pub(crate) use assert_sorted_iter::*;
pub(crate) use merge_iter::*;
pub use time_range::*;
pub use timestamp::*;
