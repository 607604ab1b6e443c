//! A small, handwritten corner of a standard library: a growable contiguous
//! container and an (intentionally unbalanced) binary search tree.
//!
//! # Purpose
//! This crate exists to practice implementing data structures, not to be used in
//! production. Writing a vector and a search tree by hand - raw allocations,
//! placement writes, recursive ownership - is the whole point; reaching for
//! [`Vec`] or `BTreeMap` would defeat it. In fact, this library doesn't use
//! [`Vec`] at all.
//!
//! # Method
//! Both containers manage their own memory. [`Vector`](collections::contiguous::Vector)
//! owns a raw buffer and only ever constructs the elements it was actually given,
//! leaving spare capacity uninitialized.
//! [`BinarySearchTree`](collections::binary_tree::BinarySearchTree) owns its node
//! graph through plain single-ownership [`Box`]es, so teardown order (children
//! before parents) falls out of the ownership structure rather than a manual
//! delete routine.
//!
//! # Error Handling
//! Precondition violations (out-of-bounds indexing, capacity overflow) fail fast
//! at the call site; each also has an explicit fallible variant returning a
//! strongly typed error. "Not found" and "empty" are ordinary [`Option`] /
//! [`bool`] results, never errors. The error types are enums and structs with
//! static dispatch, built with `derive_more` to avoid the repetitive impls.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
