/// Disjoint-set (union-find) over arbitrary labels, used for cycle detection in Kruskal
///
/// Elements are registered lazily on their first `find`. Only path compression is
/// applied; there is no union-by-rank, so adversarial union orders can build long
/// chains before compression flattens them.
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    parent: HashMap<T, T>,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        DisjointSet {
            parent: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the root of `item` with path compression, registering it as its own root if unseen
    pub fn find(&mut self, item: &T) -> T {
        if !self.parent.contains_key(item) {
            self.parent.insert(item.clone(), item.clone());
            return item.clone();
        }

        // Walk up to the root, remembering the path
        let mut path = Vec::new();
        let mut current = item.clone();
        loop {
            let parent = &self.parent[&current];
            if *parent == current {
                break;
            }
            let next = parent.clone();
            path.push(std::mem::replace(&mut current, next));
        }

        // Point every visited node directly at the root
        for node in path {
            self.parent.insert(node, current.clone());
        }

        current
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The root of `a` is always attached under the root of `b`. Returns false if
    /// both were already in the same set.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        self.parent.insert(root_a, root_b);
        true
    }

    /// Check if two elements are in the same set
    pub fn same_set(&mut self, a: &T, b: &T) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of distinct sets among registered elements
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|(item, parent)| item == parent).count()
    }

    /// Get all sets as groups of elements
    #[cfg(test)]
    fn sets(&mut self) -> Vec<Vec<T>> {
        let items: Vec<T> = self.parent.keys().cloned().collect();
        let mut root_to_group: HashMap<T, Vec<T>> = HashMap::new();

        for item in items {
            let root = self.find(&item);
            root_to_group.entry(root).or_default().push(item);
        }

        root_to_group.into_values().collect()
    }

    #[cfg(test)]
    fn parent_of(&self, item: &T) -> Option<&T> {
        self.parent.get(item)
    }
}
