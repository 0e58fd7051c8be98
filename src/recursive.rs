//! Recursive three-way quicksort, `sort(low) ++ mid ++ sort(high)` taken literally.
//!
//! Call depth grows with the number of partition levels, which is `O(n)` for inputs such as pipe
//! organs. See [`crate::stacked`] for the same algorithm without that limit.

use std::cmp::Ordering;

use crate::partition::{self, Partition};
use crate::permutation;

sort_impl!("three_way_recursive");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    permutation::sort_via_indices(v, compare, |order, compare_idx| {
        sorted_by(order, compare_idx)
    });
}

#[inline]
pub fn sorted<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    sorted_by(v, |a, b| a.cmp(b))
}

pub fn sorted_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(v.len());
    quicksort(v, &mut compare, &mut out);

    out
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Appends the sorted `v` to `out`.
fn quicksort<T, F>(v: Vec<T>, compare: &mut F, out: &mut Vec<T>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        out.extend(v);
        return;
    }

    let Partition { low, mid, high } = partition::partition_by(v, compare);

    quicksort(low, compare, out);
    out.extend(mid);
    quicksort(high, compare, out);
}
