//! An ordered binary tree, deliberately left unbalanced. Namely
//! [`BinarySearchTree`], a set of unique values ordered by [`Ord`].

pub mod set;

#[doc(inline)]
pub use set::BinarySearchTree;
