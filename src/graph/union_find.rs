//! Disjoint-set forest over vertex indices.

/// Union-find with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<u8>,
}

impl DisjointSet {
	/// Creates `n` singleton sets.
	pub fn new(n: usize) -> Self {
		Self {
			parent: (0..n).collect(),
			rank: vec![0; n],
		}
	}

	/// Representative of the set containing `node`.
	pub fn find(&mut self, mut node: usize) -> usize {
		let mut root = node;
		while self.parent[root] != root {
			root = self.parent[root];
		}

		while self.parent[node] != node {
			let parent = self.parent[node];
			self.parent[node] = root;
			node = parent;
		}

		root
	}

	/// Merges the sets containing `left` and `right`.
	///
	/// Returns `false` when they were already in the same set.
	pub fn union(&mut self, left: usize, right: usize) -> bool {
		let mut left = self.find(left);
		let mut right = self.find(right);
		if left == right {
			return false;
		}
		if self.rank[left] < self.rank[right] {
			std::mem::swap(&mut left, &mut right);
		}
		self.parent[right] = left;
		if self.rank[left] == self.rank[right] {
			self.rank[left] = self.rank[left].saturating_add(1);
		}
		true
	}

	/// Number of disjoint sets.
	pub fn set_count(&mut self) -> usize {
		(0..self.parent.len()).filter(|&i| self.find(i) == i).count()
	}
}
