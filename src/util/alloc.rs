//! Allocation-related helpers for unit tests: a shared drop counter and a
//! zero-sized type with a unit value.

use std::cell::Cell;
use std::rc::Rc;

#[allow(unused)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A value that increments a shared counter every time a clone of it is
/// dropped, for asserting that containers drop exactly the elements they should.
#[allow(unused)]
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    #[allow(unused)]
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// The number of drops observed so far. The counting handle held by the
    /// test itself hasn't been dropped yet and isn't included.
    #[allow(unused)]
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
