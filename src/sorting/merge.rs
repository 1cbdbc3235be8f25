use crate::error::SortError;

/// Merges the sorted `first` into `second`, leaving `second` sorted and fully occupied.
///
/// `second` must start with exactly `first.len()` empty slots followed by sorted values. If it
/// doesn't, nothing is moved and [`SortError::MergeShape`] names the first offending slot. Values
/// from `first` go before equal values from `second`.
///
/// # Examples
///
/// ```
/// use bst_set::sorting::merge_arrays;
///
/// let first = vec![4, 9, 15, 20, 28];
/// let mut second = [None, None, None, None, None, Some(1), Some(3), Some(9), Some(13)];
///
/// merge_arrays(first, &mut second).unwrap();
/// assert_eq!(
///     second.map(Option::unwrap),
///     [1, 3, 4, 9, 9, 13, 15, 20, 28]
/// );
/// ```
pub fn merge_arrays<T>(first: Vec<T>, second: &mut [Option<T>]) -> Result<(), SortError>
where
    T: Ord,
{
    let free = first.len();
    let len = second.len();
    let shape = |index| SortError::MergeShape { free, len, index };

    if len < free {
        return Err(shape(len));
    }
    if let Some(index) = second[..free].iter().position(Option::is_some) {
        return Err(shape(index));
    }
    if let Some(index) = second[free..].iter().position(Option::is_none) {
        return Err(shape(free + index));
    }
    if let Some(index) = second[free..].windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(shape(free + index + 1));
    }

    // `write` never passes `right`, so no value of `second` is overwritten before it is read.
    let mut left = first.into_iter().peekable();
    let mut right = free;
    for write in 0..len {
        let from_first = match (left.peek(), second.get(right).and_then(Option::as_ref)) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            // The rest of `second` is already in place.
            (None, _) => break,
        };
        let value = if from_first {
            left.next()
        } else {
            right += 1;
            second[right - 1].take()
        };
        second[write] = value;
    }

    Ok(())
}
