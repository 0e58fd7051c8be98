//! Three-way quicksort with a middle index pivot.
//!
//! A sequence is split around the element at `len / 2` into the elements less than, equal to and
//! greater than it, each group keeping its relative order. Only the outer groups are sorted
//! further: `sort(s) = sort(low) ++ mid ++ sort(high)`.
//!
//! The crate root exposes the [`stacked`] strategy, [`recursive`] computes the same result with
//! plain recursion.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }

            #[inline]
            fn sorted<T>(v: Vec<T>) -> Vec<T>
            where
                T: Ord,
            {
                sorted(v)
            }
        }
    };
}

pub mod partition;
pub mod permutation;
pub mod recursive;
pub mod scenarios;
pub mod stacked;

pub use stacked::{sort, sort_by, sorted, sorted_by};
