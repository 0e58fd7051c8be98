//! Three-way quicksort driven by an explicit work stack.
//!
//! Produces exactly the sequence [`crate::recursive`] produces. Pending groups live on the heap,
//! so the call depth stays constant no matter how unbalanced the partitions get.

use std::cmp::Ordering;

use crate::partition::{self, Partition};
use crate::permutation;

sort_impl!("three_way_stacked");

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
    quicksort(v, &mut compare)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

enum Work<T> {
    /// Still has to be partitioned.
    Sort(Vec<T>),
    /// Already in final order, goes straight to the output.
    Emit(Vec<T>),
}

fn quicksort<T, F>(v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(v.len());

    // Popped from the back, so groups are pushed in reverse output order.
    let mut stack = vec![Work::Sort(v)];
    let mut max_stack_len = stack.len();

    while let Some(work) = stack.pop() {
        match work {
            Work::Sort(v) if v.len() < 2 => out.extend(v),
            Work::Sort(v) => {
                let Partition { low, mid, high } = partition::partition_by(v, compare);

                if !high.is_empty() {
                    stack.push(Work::Sort(high));
                }
                stack.push(Work::Emit(mid));
                if !low.is_empty() {
                    stack.push(Work::Sort(low));
                }

                max_stack_len = max_stack_len.max(stack.len());
            }
            Work::Emit(mid) => out.extend(mid),
        }
    }

    tracing::trace!(len = out.len(), max_stack_len, "stacked quicksort done");

    out
}
