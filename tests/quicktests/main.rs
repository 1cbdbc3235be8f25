use quickcheck::{Arbitrary, Gen};

mod sorting;
mod tree;

/// An enum for the various kinds of "things" to do to
/// a set in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the set
    Insert(T),
    /// Remove the value from the set
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
