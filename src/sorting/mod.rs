//! In-memory sorting tasks. Each routine works on already-typed values; reading and validating
//! text is left to the caller.
//!
//! # Examples
//!
//! ```
//! use bst_set::sorting::{self, Time};
//!
//! let mut times = [Time::new(13, 15, 19), Time::new(7, 26, 57), Time::new(0, 40, 31)];
//! sorting::sort_times(&mut times);
//!
//! let formatted: Vec<_> = times.iter().map(Time::to_string).collect();
//! assert_eq!(formatted, ["00:40:31", "07:26:57", "13:15:19"]);
//! ```

mod addresses;
mod merge;
mod sequence;
mod temperatures;
mod times;

pub use addresses::{group_addresses, Household, Resident};
pub use merge::merge_arrays;
pub use sequence::sort_sequence;
pub use temperatures::{sort_temperatures, Temperature};
pub use times::{sort_times, Time};

/// Sorts `values` in place by insertion. Equal values keep their relative order.
///
/// Runs in `O(n^2)` time, which is fine for the short inputs it is used on.
///
/// # Examples
///
/// ```
/// use bst_set::sorting::insertion_sort;
///
/// let mut values = [3, 1, 2];
/// insertion_sort(&mut values);
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn insertion_sort<T>(values: &mut [T])
where
    T: Ord,
{
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}
