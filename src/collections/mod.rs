//! The collection types themselves.
//!
//! # Purpose
//! I wrote these types to learn about the data structures, but also the concepts
//! underneath them: pointers, allocations, amortized growth and recursive
//! ownership.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements
//! [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which saves writing
//! some of the more repetitive slice functionality by hand.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
