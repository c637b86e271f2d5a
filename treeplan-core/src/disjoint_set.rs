//! Union-find keyed by arbitrary values.
//!
//! The optimizer grows components one vertex at a time without knowing the
//! universe up front, so keys are registered explicitly and mapped to dense
//! indices as they arrive. Roots are found with full path compression and
//! unions attach the smaller tree below the larger one.

use std::{collections::HashMap, hash::Hash};

/// Incremental disjoint-set structure over keys of type `T`.
///
/// # Examples
/// ```
/// use treeplan_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// assert!(set.add("a"));
/// assert!(set.add("b"));
/// assert_eq!(set.component_count(), 2);
/// assert_eq!(set.union(&"a", &"b"), Some(true));
/// assert!(set.are_connected(&"a", &"b"));
/// assert_eq!(set.component_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    indices: HashMap<T, usize>,
    keys: Vec<T>,
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            indices: HashMap::new(),
            keys: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
            components: 0,
        }
    }
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty structure with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Registers `key` as a new singleton component.
    ///
    /// Returns `false` and leaves the structure untouched when `key` is
    /// already registered.
    pub fn add(&mut self, key: T) -> bool {
        if self.indices.contains_key(&key) {
            return false;
        }
        let index = self.keys.len();
        self.indices.insert(key.clone(), index);
        self.keys.push(key);
        self.parent.push(index);
        self.size.push(1);
        self.components += 1;
        true
    }

    /// Returns `true` when `key` has been registered.
    #[must_use]
    pub fn is_registered(&self, key: &T) -> bool {
        self.indices.contains_key(key)
    }

    /// Returns the root index of the component containing `key`.
    ///
    /// Every node visited on the way is retargeted at the root. Returns
    /// `None` for unregistered keys.
    pub fn find(&mut self, key: &T) -> Option<usize> {
        let start = *self.indices.get(key)?;
        Some(self.find_index(start))
    }

    fn find_index(&mut self, start: usize) -> usize {
        let mut root = start;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = start;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `Some(true)` when two components were merged, `Some(false)`
    /// when they were already joined, and `None` when either key is
    /// unregistered.
    pub fn union(&mut self, left: &T, right: &T) -> Option<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Some(false);
        }

        let (parent, child) = if self.size[left_root] < self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
        Some(true)
    }

    /// Returns `true` when both keys are registered and share a component.
    pub fn are_connected(&mut self, left: &T, right: &T) -> bool {
        match (self.find(left), self.find(right)) {
            (Some(left_root), Some(right_root)) => left_root == right_root,
            _ => false,
        }
    }

    /// Returns the number of keys in the component containing `key`.
    pub fn component_size(&mut self, key: &T) -> Option<usize> {
        let root = self.find(key)?;
        Some(self.size[root])
    }

    /// Returns the number of distinct components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the number of registered keys.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.keys.len() }

    /// Returns `true` when no key has been registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    /// Iterates over the registered keys in registration order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &T> {
        self.keys.iter()
    }
}
