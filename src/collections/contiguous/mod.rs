//! Contiguous collection types. Namely [`Vector`], a contiguous collection that
//! varies in size at runtime, and its access errors.

pub mod error;
pub mod vector;

#[doc(inline)]
pub use error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
#[doc(inline)]
pub use vector::Vector;
