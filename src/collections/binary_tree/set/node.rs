use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::contiguous::Vector;

/// A possibly-empty edge in the tree. Wrapping the option lets the recursive
/// algorithms live on the edge rather than the node, so an empty tree and an
/// absent child are handled by the same code.
pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Branch<T> {
    /// Descends by comparison and links a new node where a null branch is
    /// reached. Returns false without changing anything when an equal value is
    /// found on the way down.
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: Branch(None),
                    right: Branch(None),
                    value,
                }));
                true
            },
        }
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.node(value).map(|node| &node.value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.node(value).is_some()
    }

    /// The node holding `value`, found by the same descent as a search.
    pub fn node<Q>(&self, value: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.node(value),
                Ordering::Greater => node.right.node(value),
                Ordering::Equal => Some(node),
            },
            None => None,
        }
    }

    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &mut self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.remove(value),
                Ordering::Greater => node.right.remove(value),
                Ordering::Equal => Some(self.remove_root()),
            },
            None => None,
        }
    }

    /// Unlinks this branch's own node. A childless node just detaches, a single
    /// child is promoted into its place, and a node with two children takes its
    /// in-order successor's value (the leftmost of the right subtree, removed
    /// from its original position) and stays put.
    fn remove_root(&mut self) -> T {
        // SAFETY: Only called after the caller has matched self.0 as a Some, but
        // we need to take ownership of the node here.
        let mut node = unsafe { mem::take(&mut self.0).unwrap_unchecked() };

        match (node.left.0.take(), node.right.0.take()) {
            (None, None) => node.value,
            (Some(child), None) | (None, Some(child)) => {
                self.0 = Some(child);
                node.value
            },
            (Some(left), Some(right)) => {
                node.left = Branch(Some(left));
                node.right = Branch(Some(right));

                // SAFETY: The right subtree is non-empty, so it has a leftmost
                // value to promote.
                let successor = unsafe { node.right.take_first().unwrap_unchecked() };
                let removed = mem::replace(&mut node.value, successor);

                self.0 = Some(node);
                removed
            },
        }
    }

    pub fn first(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.left.first() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    /// Removes and returns the smallest value. The leftmost node's right child
    /// (if any) is relinked into the vacated position.
    pub fn take_first(&mut self) -> Option<T> {
        match &mut self.0 {
            Some(node) => match node.left.take_first() {
                Some(value) => Some(value),
                None => {
                    // SAFETY: We've already matched self.0 as a Some, but we
                    // need to take ownership of the node here.
                    let node = unsafe { mem::take(&mut self.0).unwrap_unchecked() };
                    self.0 = node.right.0;
                    Some(node.value)
                },
            },
            None => None,
        }
    }

    /// 1 + the taller child's height; 0 for an empty branch.
    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + cmp::max(node.left.height(), node.right.height()),
            None => 0,
        }
    }

    pub fn preorder(&self, order: &mut Vector<T>)
    where
        T: Clone,
    {
        if let Some(node) = &self.0 {
            order.push(node.value.clone());
            node.left.preorder(order);
            node.right.preorder(order);
        }
    }

    pub fn inorder(&self, order: &mut Vector<T>)
    where
        T: Clone,
    {
        if let Some(node) = &self.0 {
            node.left.inorder(order);
            order.push(node.value.clone());
            node.right.inorder(order);
        }
    }

    pub fn postorder(&self, order: &mut Vector<T>)
    where
        T: Clone,
    {
        if let Some(node) = &self.0 {
            node.left.postorder(order);
            node.right.postorder(order);
            order.push(node.value.clone());
        }
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vector<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
