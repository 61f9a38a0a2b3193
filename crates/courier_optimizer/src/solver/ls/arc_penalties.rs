use crate::problem::node::NodeIdx;

/// How many times each arc was penalized by guided local search.
/// Row-major storage: `index = from * num_nodes + to`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcPenalties {
    data: Vec<u32>,
    num_nodes: usize,
}

impl ArcPenalties {
    pub fn new(num_nodes: usize) -> Self {
        ArcPenalties {
            data: vec![0; num_nodes * num_nodes],
            num_nodes,
        }
    }

    #[inline(always)]
    fn index(&self, from: NodeIdx, to: NodeIdx) -> usize {
        debug_assert!(from.get() < self.num_nodes && to.get() < self.num_nodes);
        from.get() * self.num_nodes + to.get()
    }

    #[inline(always)]
    pub fn get(&self, from: NodeIdx, to: NodeIdx) -> u32 {
        self.data[self.index(from, to)]
    }

    #[inline]
    pub fn increment(&mut self, from: NodeIdx, to: NodeIdx) {
        let index = self.index(from, to);
        self.data[index] = self.data[index].saturating_add(1);
    }

    /// Penalties along `first -> middle... -> last`. Self arcs are never penalized.
    pub fn path_penalty<I>(&self, first: NodeIdx, middle: I, last: NodeIdx) -> u64
    where
        I: IntoIterator<Item = NodeIdx>,
    {
        let mut total = 0u64;
        let mut previous = first;

        for node in middle.into_iter().chain(std::iter::once(last)) {
            if previous != node {
                total += self.get(previous, node) as u64;
            }
            previous = node;
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeIdx {
        NodeIdx::new(i)
    }

    #[test]
    fn test_increment_and_path() {
        let mut penalties = ArcPenalties::new(3);
        penalties.increment(n(0), n(1));
        penalties.increment(n(0), n(1));
        penalties.increment(n(1), n(2));

        assert_eq!(penalties.get(n(0), n(1)), 2);
        assert_eq!(penalties.get(n(1), n(0)), 0);
        assert_eq!(penalties.path_penalty(n(0), [n(1), n(2)], n(0)), 3);
        assert_eq!(penalties.path_penalty(n(0), std::iter::empty(), n(0)), 0);
    }
}
