//! Error types for checked access to contiguous collections.
//!
//! "Empty" is not represented here: methods like [`pop`](super::Vector::pop) and
//! [`front`](super::Vector::front) signal emptiness through [`Option`] instead,
//! because an empty container is a normal state, not a failure.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A checked index landed at or beyond the collection's length.
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time of the access.
    pub len: usize,
}

/// The requested capacity would need a memory layout larger than [`isize::MAX`]
/// bytes, which the allocator cannot provide.
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Either failure mode of a fallible positional insert: the position may be out
/// of bounds, or making room for the element may overflow the capacity.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}
