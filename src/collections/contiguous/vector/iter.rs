use std::alloc;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use super::Vector;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let result = IntoIter {
            ptr: self.ptr,
            cap: self.cap,
            start: 0,
            end: self.len,
            _phantom: PhantomData,
        };
        // The iterator has taken over the buffer; don't let the Vector's Drop
        // free it.
        mem::forget(self);
        result
    }
}

/// An owned iterator over a [`Vector`]. See [`Vector::into_iter`].
///
/// The iterator takes ownership of the Vector's buffer: elements still inside it
/// when it is dropped are dropped too, and the buffer itself is freed.
pub struct IntoIter<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Slots in [start, end) hold initialized values that haven't
            // been yielded. The pointer is nonnull, properly aligned and valid
            // for both reads and writes.
            unsafe { ptr::drop_in_place(self.ptr.add(i).as_ptr()) }
        }

        let layout = Vector::<T>::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: The buffer was allocated by the originating Vector in the
            // global allocator with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the slot holds an initialized value.
            // Incrementing start afterwards means the value is effectively moved
            // out and never touched again.
            let value = unsafe { self.ptr.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end was just decremented into the initialized range, so
            // the slot holds a value that hasn't been yielded from either end.
            Some(unsafe { self.ptr.add(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// Borrowed iteration comes from the iter and iter_mut definitions provided by
// Deref<Target = [T]>.
