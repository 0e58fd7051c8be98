//! Three-way partition around the middle element of a sequence.

use std::cmp::Ordering;

/// The three groups a sequence splits into relative to its pivot. Each group keeps the relative
/// order its elements had in the partitioned sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<T> {
    /// Elements strictly less than the pivot.
    pub low: Vec<T>,
    /// The pivot and every element equal to it.
    pub mid: Vec<T>,
    /// Elements strictly greater than the pivot.
    pub high: Vec<T>,
}

impl<T> Partition<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.low.len() + self.mid.len() + self.high.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        (self.low, self.mid, self.high)
    }
}

/// Position of the pivot in a sequence of `len` elements.
///
/// `len` must be at least 1.
#[inline]
pub fn pivot_index(len: usize) -> usize {
    debug_assert!(len != 0, "pivot_index on an empty sequence");

    len / 2
}

/// Splits `v` into the elements less than, equal to and greater than `v[pivot_index(len)]`.
///
/// Every element except the pivot is compared with the pivot exactly once. The pivot itself goes
/// into `mid` without being compared, so `low` and `high` are always shorter than `v`, even if
/// `compare` is not a total order.
///
/// All calls to `compare` happen before any element is moved. If `compare` panics, `v` is dropped
/// as is.
pub fn partition_by<T, F>(v: Vec<T>, compare: &mut F) -> Partition<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.is_empty() {
        return Partition {
            low: Vec::new(),
            mid: Vec::new(),
            high: Vec::new(),
        };
    }

    let pivot_pos = pivot_index(v.len());
    let pivot = &v[pivot_pos];

    let placement = v
        .iter()
        .enumerate()
        .map(|(i, elem)| {
            if i == pivot_pos {
                Ordering::Equal
            } else {
                compare(elem, pivot)
            }
        })
        .collect::<Vec<_>>();

    let mut low = Vec::new();
    let mut mid = Vec::new();
    let mut high = Vec::new();

    for (elem, ord) in v.into_iter().zip(placement) {
        match ord {
            Ordering::Less => low.push(elem),
            Ordering::Equal => mid.push(elem),
            Ordering::Greater => high.push(elem),
        }
    }

    tracing::trace!(
        len = low.len() + mid.len() + high.len(),
        pivot_pos,
        low = low.len(),
        mid = mid.len(),
        high = high.len(),
        "partition"
    );

    Partition { low, mid, high }
}

/// `low ++ mid ++ high`, reusing the allocation of `low`.
pub fn concat<T>(mut low: Vec<T>, mid: Vec<T>, high: Vec<T>) -> Vec<T> {
    low.reserve(mid.len() + high.len());
    low.extend(mid);
    low.extend(high);

    low
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition(v: Vec<i32>) -> Partition<i32> {
        partition_by(v, &mut |a: &i32, b: &i32| a.cmp(b))
    }

    #[test]
    fn pivot_is_middle_index() {
        assert_eq!(pivot_index(1), 0);
        assert_eq!(pivot_index(2), 1);
        assert_eq!(pivot_index(3), 1);
        assert_eq!(pivot_index(10), 5);
    }

    #[test]
    fn three_way_keeps_relative_order() {
        // Pivot is v[5] == 3.
        let p = partition(vec![5, 1, 67, 5, 2, 3, 1, 1, 1, 322]);

        assert_eq!(p.low, vec![1, 2, 1, 1, 1]);
        assert_eq!(p.mid, vec![3]);
        assert_eq!(p.high, vec![5, 67, 5, 322]);
        assert_eq!(p.len(), 10);
    }

    #[test]
    fn equal_elements_captured_in_mid() {
        let p = partition(vec![7, 2, 7, 9, 7]);

        assert_eq!(p.low, vec![2]);
        assert_eq!(p.mid, vec![7, 7, 7]);
        assert_eq!(p.high, vec![9]);
    }

    #[test]
    fn empty_and_single() {
        assert!(partition(Vec::new()).is_empty());

        let p = partition(vec![-4]);
        assert_eq!(p.into_parts(), (vec![], vec![-4], vec![]));
    }

    #[test]
    fn compares_each_non_pivot_once() {
        let mut comp_count = 0;
        let _ = partition_by((0..40).rev().collect::<Vec<i32>>(), &mut |a: &i32, b: &i32| {
            comp_count += 1;
            a.cmp(b)
        });

        assert_eq!(comp_count, 39);
    }

    #[test]
    fn pivot_never_compared_with_itself() {
        // A comparator that claims everything is less still leaves the pivot in mid.
        let p = partition_by(vec![1, 2, 3, 4], &mut |_: &i32, _: &i32| Ordering::Less);

        assert_eq!(p.low, vec![1, 2, 4]);
        assert_eq!(p.mid, vec![3]);
        assert!(p.high.is_empty());
    }

    #[test]
    fn concat_groups() {
        assert_eq!(concat(vec![1, 2], vec![3, 3], vec![9]), vec![1, 2, 3, 3, 9]);
        assert_eq!(concat(Vec::<i32>::new(), vec![], vec![]), Vec::<i32>::new());
    }
}
