use std::collections::HashMap;
use std::hash::Hash;

/// Finds the value that occurs most often in `values` (the smallest one if several are tied) and
/// moves every occurrence of it to the end. The other values keep their relative order.
///
/// # Examples
///
/// ```
/// use bst_set::sorting::sort_sequence;
///
/// let mut values = [1, 2, 3, 2, 3, 1, 2];
/// sort_sequence(&mut values);
/// assert_eq!(values, [1, 3, 3, 1, 2, 2, 2]);
/// ```
pub fn sort_sequence<T>(values: &mut [T])
where
    T: Copy + Ord + Hash,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for &value in values.iter() {
        *counts.entry(value).or_default() += 1;
    }

    let Some(target) = counts
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then(b.cmp(a)))
        .map(|(value, _)| value)
    else {
        return;
    };

    let mut write = 0;
    for read in 0..values.len() {
        if values[read] != target {
            values[write] = values[read];
            write += 1;
        }
    }
    values[write..].fill(target);
}
