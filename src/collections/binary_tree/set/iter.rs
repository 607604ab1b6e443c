use std::iter::FusedIterator;

use super::{BinarySearchTree, Branch, Node};
use crate::collections::contiguous::Vector;

impl<T: Ord> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned, ascending iterator over a [`BinarySearchTree`]. Each step takes the
/// current smallest value out of the tree, so this is `O(h)` per item rather
/// than amortized `O(1)`; the upside is that no separate state has to outlive
/// the tree.
pub struct IntoIter<T: Ord>(BinarySearchTree<T>);

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vector::new(),
            remaining: self.len(),
        };
        iter.push_left(&self.root);
        iter
    }
}

/// A borrowed, ascending iterator over a [`BinarySearchTree`]. An explicit stack
/// of not-yet-visited ancestors stands in for the recursion of the inorder
/// traversal.
pub struct Iter<'a, T: Ord> {
    stack: Vector<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    /// Pushes the chain of left descendants starting at `branch`; the deepest
    /// one is the next value in order.
    fn push_left(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = &branch.0 {
            self.stack.push(node.as_ref());
            branch = &node.left;
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: Ord> FusedIterator for Iter<'_, T> {}
