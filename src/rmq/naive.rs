/// A brute-force reference answering every query with a linear scan. Used to cross-check the
/// real data structures in tests. Ties resolve to the leftmost index, which the fast structures
/// are expected to match.
pub(crate) struct NaiveRmq<'a, T> {
    data: &'a [T],
}

impl<'a, T: PartialOrd> NaiveRmq<'a, T> {
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    pub(crate) fn range_min(&self, i: usize, j: usize) -> (usize, &'a T) {
        let (i, j) = if i <= j { (i, j) } else { (j, i) };
        let mut best = i;
        for k in i + 1..=j {
            if self.data[k] < self.data[best] {
                best = k;
            }
        }
        (best, &self.data[best])
    }
}

#[cfg(test)]
mod tests {
    use super::NaiveRmq;

    #[test]
    fn naive_rmq_test() {
        let data = [9, 6, 10, 4, 0, 8, 3, 7, 1, 2, 5];
        let rmq = NaiveRmq::new(&data);

        assert_eq!(rmq.range_min(0, 0), (0, &9));
        assert_eq!(rmq.range_min(0, 1), (1, &6));
        assert_eq!(rmq.range_min(0, 2), (1, &6));
        assert_eq!(rmq.range_min(0, 3), (3, &4));
        assert_eq!(rmq.range_min(5, 8), (8, &1));
        assert_eq!(rmq.range_min(9, 5), (8, &1));
    }

    #[test]
    fn naive_rmq_leftmost_tie() {
        let data = [3, 1, 2, 1];
        let rmq = NaiveRmq::new(&data);
        assert_eq!(rmq.range_min(0, 3), (1, &1));
        assert_eq!(rmq.range_min(2, 3), (3, &1));
    }
}
