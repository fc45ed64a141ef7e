//! Enumeration of all tuples over a finite alphabet.

/// Iterator over all `base^length` tuples of `{0, .., base-1}`.
///
/// Tuples come in lexicographic order: position 0 varies slowest, the last
/// position fastest. A clone continues from the same position; call
/// [`multinary_permutations`] again for a fresh pass.
#[derive(Clone, Debug)]
pub struct MultinaryPermutations {
    base: usize,
    length: usize,
    next: usize,
    total: usize,
}

/// All tuples of `length` symbols drawn from `0..base`.
///
/// `length == 0` yields a single empty tuple; `base == 0` with a positive
/// length yields nothing.
pub fn multinary_permutations(base: usize, length: usize) -> MultinaryPermutations {
    let total = (0..length).fold(1usize, |acc, _| acc.saturating_mul(base));
    MultinaryPermutations {
        base,
        length,
        next: 0,
        total,
    }
}

impl Iterator for MultinaryPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.next >= self.total {
            return None;
        }
        let mut digits = vec![0usize; self.length];
        let mut rest = self.next;
        for d in digits.iter_mut().rev() {
            *d = rest % self.base;
            rest /= self.base;
        }
        self.next += 1;
        Some(digits)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for MultinaryPermutations {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_length_two() {
        let all: Vec<_> = multinary_permutations(2, 2).collect();
        assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn ternary_count_and_order() {
        let it = multinary_permutations(3, 3);
        assert_eq!(it.len(), 27);
        let all: Vec<_> = it.collect();
        assert_eq!(all[1], vec![0, 0, 1]);
        assert_eq!(all[3], vec![0, 1, 0]);
        assert_eq!(all[26], vec![2, 2, 2]);
    }

    #[test]
    fn empty_length_yields_one_empty_tuple() {
        let all: Vec<_> = multinary_permutations(2, 0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn fresh_iterators_restart() {
        let mut a = multinary_permutations(2, 3);
        a.next();
        a.next();
        let b = multinary_permutations(2, 3);
        assert_eq!(a.len(), 6);
        assert_eq!(b.len(), 8);
    }
}
