//! Connected-component tracking for a growing graph.
//!
//! [`ComponentSets`] is a union-find over vertex indices with path
//! compression and union by size. Edges are only ever added, so the number of
//! components can be maintained incrementally and read in O(1).

/// Union-find over the vertices of a graph that only grows.
#[derive(Clone, Debug, Default)]
pub struct ComponentSets {
    parent: Vec<u32>,
    size: Vec<u32>,
    count: usize,
}

impl ComponentSets {
    /// `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Add one singleton component and return its index.
    pub fn push(&mut self) -> usize {
        let idx = self.parent.len();
        self.parent.push(idx as u32);
        self.size.push(1);
        self.count += 1;
        idx
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Root of the set containing `idx`, compressing the path on the way.
    pub fn find(&mut self, idx: usize) -> usize {
        let mut root = idx;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }
        let mut cur = idx;
        while cur != root {
            let next = self.parent[cur] as usize;
            self.parent[cur] = root as u32;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns `true` if they were distinct.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (small, big) = if self.size[ra] < self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big as u32;
        self.size[big] += self.size[small];
        self.count -= 1;
        true
    }

    /// True if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
