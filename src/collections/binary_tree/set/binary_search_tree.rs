use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, Node};
use crate::collections::contiguous::Vector;

/// An ordered set of unique values, stored as an unbalanced binary search tree.
///
/// Every node exclusively owns its children, so the root transitively owns the
/// whole graph and teardown (children before parents) is handled by ownership
/// rather than a manual delete routine. No rebalancing is performed: the shape
/// of the tree is entirely determined by insertion order, and a sorted insertion
/// sequence degrades it to a linked list.
///
/// # Time Complexity
/// For this analysis of time complexity, `h` is the height of the tree: between
/// `log2 n` and `n` depending on how lopsided insertion order has made it.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `get` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `height` | `O(n)` |
/// | `depth` | `O(n)` |
/// | traversals | `O(n)` |
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<u8> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a value, keeping the ordering invariant: the descent takes the
    /// left branch for smaller values and the right for larger ones, and the new
    /// node is linked where a null branch is reached. Inserting a value equal to
    /// one already present is a no-op: the tree holds no duplicates and the
    /// length doesn't change.
    ///
    /// Returns whether the value was actually inserted.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `value` from the tree, returning the stored value if it was
    /// present. A node with two children is replaced by its in-order successor
    /// (the leftmost value of its right subtree), which is removed from its
    /// original position; the resulting tree still satisfies the ordering
    /// invariant.
    ///
    /// Removing an absent value is a normal "not found" result, and the length
    /// only decrements when something was actually removed.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::binary_tree::BinarySearchTree;
    /// let mut tree: BinarySearchTree<_> = [50, 20, 70].into_iter().collect();
    /// assert_eq!(tree.remove(&20), Some(20));
    /// assert_eq!(tree.remove(&20), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.root.remove(value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Searches for `value`, returning a reference to the stored value if
    /// present.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get(value)
    }

    /// Returns true if the tree holds a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.contains(value)
    }

    /// Returns a reference to the smallest value, or [`None`] for an empty tree.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Removes and returns the smallest value, or [`None`] for an empty tree.
    pub fn take_first(&mut self) -> Option<T> {
        let taken = self.root.take_first();
        if taken.is_some() {
            self.len -= 1;
        }
        taken
    }

    /// The height of the tree: 1 + the taller subtree's height per node, 0 for
    /// an empty tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// `height(root) - height(node)` for the node holding `value`, or [`None`]
    /// if the value is absent.
    ///
    /// Note that this is the node's distance from the deepest leaf beneath the
    /// root, not the textbook "distance from the root": a leaf on a short branch
    /// reports a smaller depth than a leaf at the bottom of the tree. The
    /// formula is kept deliberately.
    pub fn depth<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root
            .node(value)
            .map(|node| self.height() - (1 + node.left.height().max(node.right.height())))
    }

    /// Drops every node in the tree and resets the length to 0.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Borrowed in-order iteration, ascending.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> {
    /// Materializes the preorder traversal: each node before either of its
    /// subtrees, left before right.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [50, 20, 70].into_iter().collect();
    /// assert_eq!(&*tree.preorder(), &[50, 20, 70]);
    /// ```
    pub fn preorder(&self) -> Vector<T> {
        let mut order = Vector::with_cap(self.len);
        self.root.preorder(&mut order);
        order
    }

    /// Materializes the inorder traversal: left subtree, node, right subtree.
    /// For any tree upholding the ordering invariant this is the values in
    /// ascending order.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [50, 20, 70].into_iter().collect();
    /// assert_eq!(&*tree.inorder(), &[20, 50, 70]);
    /// ```
    pub fn inorder(&self) -> Vector<T> {
        let mut order = Vector::with_cap(self.len);
        self.root.inorder(&mut order);
        order
    }

    /// Materializes the postorder traversal: both subtrees before the node,
    /// left before right.
    pub fn postorder(&self) -> Vector<T> {
        let mut order = Vector::with_cap(self.len);
        self.root.postorder(&mut order);
        order
    }

    /// Materializes the breadth-first traversal, grouped by depth: one inner
    /// Vector per level, the root's level first, nodes left-to-right within each
    /// level. A FIFO queue of pending nodes drives the walk; everything queued
    /// at the start of a pass belongs to the current level, and children are
    /// enqueued left-then-right for the next.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [50, 20, 70, 25, 80, 65].into_iter().collect();
    /// let levels = tree.level_order();
    /// assert_eq!(&*levels[0], &[50]);
    /// assert_eq!(&*levels[1], &[20, 70]);
    /// assert_eq!(&*levels[2], &[25, 65, 80]);
    /// ```
    pub fn level_order(&self) -> Vector<Vector<T>> {
        let mut order = Vector::new();

        let mut queue: Vector<&Node<T>> = Vector::new();
        let mut head = 0;
        if let Some(root) = &self.root.0 {
            queue.push(root.as_ref());
        }

        while head < queue.len() {
            let remaining = queue.len() - head;
            let mut level = Vector::with_cap(remaining);

            for _ in 0..remaining {
                let node = queue[head];
                head += 1;

                level.push(node.value.clone());
                if let Some(left) = &node.left.0 {
                    queue.push(left.as_ref());
                }
                if let Some(right) = &node.right.0 {
                    queue.push(right.as_ref());
                }
            }

            order.push(level);
        }

        order
    }

    /// The same traversal under its other common name; delegates to
    /// [`level_order`](BinarySearchTree::level_order).
    pub fn breadth_first(&self) -> Vector<Vector<T>> {
        self.level_order()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter.into_iter() {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "BinarySearchTree (len {}):", self.len)?;
        write!(f, "{:?}", self.root)
    }
}

impl<T: Ord + Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
