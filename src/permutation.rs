//! Applies a precomputed ordering to a slice in place.

/// Rearranges `v` so that afterwards `v[k]` holds the element that was at `order[k]`.
///
/// `order` has to be a permutation of `0..v.len()`. Each cycle of the permutation is walked once
/// with swaps, no element is cloned.
pub fn apply<T>(v: &mut [T], mut order: Vec<usize>) {
    assert_eq!(v.len(), order.len());

    for cycle_start in 0..order.len() {
        let mut dst = cycle_start;

        loop {
            let src = order[dst];
            // Mark as placed, a visited slot reads as a fixed point.
            order[dst] = dst;

            if src == cycle_start {
                break;
            }

            debug_assert!(src < v.len());
            v.swap(dst, src);
            dst = src;
        }
    }
}

/// Sorts `v` in place by sorting the indices `0..v.len()` with `sorted_by` and applying the
/// resulting order.
///
/// Every call to `compare` happens before the slice is modified.
#[inline]
pub fn sort_via_indices<T, F, S>(v: &mut [T], mut compare: F, sorted_by: S)
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
    S: FnOnce(Vec<usize>, &mut dyn FnMut(&usize, &usize) -> std::cmp::Ordering) -> Vec<usize>,
{
    if v.len() < 2 {
        return;
    }

    let order = {
        let v_ref: &[T] = v;
        let mut compare_idx = |a: &usize, b: &usize| compare(&v_ref[*a], &v_ref[*b]);
        sorted_by((0..v_ref.len()).collect(), &mut compare_idx)
    };

    apply(v, order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        let mut v = vec!['a', 'b', 'c'];
        apply(&mut v, vec![0, 1, 2]);
        assert_eq!(v, vec!['a', 'b', 'c']);
    }

    #[test]
    fn single_cycle() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        apply(&mut v, vec![3, 0, 1, 2]);
        assert_eq!(v, vec!['d', 'a', 'b', 'c']);
    }

    #[test]
    fn disjoint_cycles() {
        let mut v = vec![10, 20, 30, 40, 50];
        apply(&mut v, vec![1, 0, 4, 3, 2]);
        assert_eq!(v, vec![20, 10, 50, 40, 30]);
    }

    #[test]
    fn non_copy_elements() {
        let mut v = vec![String::from("x"), String::from("y"), String::from("z")];
        apply(&mut v, vec![2, 0, 1]);
        assert_eq!(v, vec!["z", "x", "y"]);
    }

    #[test]
    fn empty() {
        let mut v: Vec<u8> = Vec::new();
        apply(&mut v, Vec::new());
        assert!(v.is_empty());
    }
}
