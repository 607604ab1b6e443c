use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::contiguous::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};

/// The capacity a Vector starts with, and the smallest capacity growth will ever
/// produce.
const MIN_CAP: usize = 2;
const MAX_BYTES: usize = isize::MAX as usize;

/// While the Vector holds fewer elements than this, growth doubles the capacity.
/// From here on it triples instead, trading a few extra reallocations early for
/// fewer large ones once the Vector is established.
const GROWTH_THRESHOLD: usize = 5;

/// A variable size contiguous collection backed by a manually managed buffer.
///
/// The buffer holds `cap` slots but only the first `len` are ever initialized;
/// spare capacity is raw memory that no element has been constructed in. Pushing
/// writes the new element directly into the next slot, popping reads it back out
/// and the slot returns to being uninitialized.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push`
/// will take `O(n)`.
///
/// \** If the Vector already has capacity `min_cap`, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Vector<T> {
    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let vec: Vector<_> = (1_u8..=3).collect();
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector. The capacity is exactly the
    /// value produced by the last allocation, never silently rounded up.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Creates a new Vector with length 0 and a small default capacity, so the
    /// first couple of pushes don't reallocate.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn new() -> Vector<T> {
        Self::with_cap(MIN_CAP)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value,
    /// allowing that many values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        let layout = Self::make_layout(cap);

        Vector {
            ptr: Self::make_ptr(layout),
            len: 0,
            cap,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Vector holding `count` clones of `item`, with capacity
    /// exactly `count`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let vec = Vector::repeat_item(5_u8, 3);
    /// assert_eq!(&*vec, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        let mut vec = Self::with_cap(count);

        for i in 0..count {
            // SAFETY: i < count == cap, so the write lands inside the freshly
            // allocated buffer.
            unsafe {
                vec.ptr.add(i).write(item.clone());
            }
            vec.len += 1;
        }

        vec
    }

    /// Pushes the provided value onto the end of the Vector, growing the
    /// capacity first if required, and returns a reference to the element in its
    /// new slot.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) -> &mut T {
        // Checked before constructing the element, never after.
        if self.len >= self.cap {
            self.grow();
        }

        // SAFETY: The capacity has just been adjusted to support the addition of
        // the new item, and slot len is uninitialized so nothing is overwritten.
        unsafe {
            self.ptr.add(self.len).write(value);
            self.len += 1;
            self.ptr.add(self.len - 1).as_mut()
        }
    }

    /// Pops the last value off the end of the Vector, returning an owned value
    /// if the Vector has length greater than 0. Popping an empty Vector is a
    /// defined no-op, not an error.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so the slot is no longer considered
            // live.
            self.len -= 1;

            // SAFETY: len has just been decremented, so the slot holds an
            // initialized value. Reading it out bitwise and treating the slot as
            // uninitialized afterwards is as close as we get to moving a value
            // off of the heap.
            Some(unsafe { self.ptr.add(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, growing and shifting the
    /// tail one slot rightward as necessary. Inserting at `len` (including into
    /// an empty Vector) degrades to a plain push.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "index {} out of bounds for insertion into collection with {} elements",
            index,
            self.len
        );

        if self.len >= self.cap {
            self.grow();
        }

        // SAFETY: index <= len < cap after growing, so both the tail shift and
        // the write stay inside the buffer. ptr::copy handles the overlap.
        unsafe {
            ptr::copy(
                self.ptr.add(index).as_ptr(),
                self.ptr.add(index + 1).as_ptr(),
                self.len - index,
            );
            self.ptr.add(index).write(value);
        }

        self.len += 1;
    }

    /// Fallible form of [`insert`](Vector::insert): returns an error instead of
    /// panicking, for either an out-of-bounds index or a growth step that would
    /// overflow the maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// assert!(vec.try_insert(3, 100).is_ok());
    /// assert!(vec.try_insert(7, 200).unwrap_err().is_index_out_of_bounds());
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            }
            .into());
        }

        if self.len >= self.cap {
            let new_cap = self.growth_cap();
            Self::check_cap(new_cap)?;
            self.realloc(new_cap);
        }

        self.insert(index, value);
        Ok(())
    }

    /// Checked access to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] when `index >= len`. For access where the
    /// caller already guarantees the bound, see
    /// [`get_unchecked`](Vector::get_unchecked).
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let vec: Vector<_> = (0..3).collect();
    /// assert_eq!(vec.get(2), Ok(&2));
    /// assert!(vec.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        if index < self.len {
            // SAFETY: index < len, so the slot is initialized and in bounds.
            Ok(unsafe { self.ptr.add(index).as_ref() })
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] when `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        if index < self.len {
            // SAFETY: index < len, so the slot is initialized and in bounds.
            Ok(unsafe { self.ptr.add(index).as_mut() })
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Unchecked access to the element at `index`.
    ///
    /// # Safety
    /// The caller must guarantee `index < len`. The bound is a precondition, not
    /// something this method verifies in any build mode.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees index < len.
        unsafe { self.ptr.add(index).as_ref() }
    }

    /// Unchecked mutable access to the element at `index`.
    ///
    /// # Safety
    /// The caller must guarantee `index < len`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees index < len.
        unsafe { self.ptr.add(index).as_mut() }
    }

    /// Returns a reference to the first element, or [`None`] if the Vector is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a reference to the last element, or [`None`] if the Vector is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Grows the backing storage to hold at least `min_cap` elements, without
    /// changing the length. Existing elements are moved into the new buffer. A
    /// `min_cap` at or below the current capacity does nothing.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub fn reserve(&mut self, min_cap: usize) {
        if min_cap > self.cap {
            self.realloc(min_cap);
        }
    }

    /// Fallible form of [`reserve`](Vector::reserve).
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] when the requested layout would exceed
    /// [`isize::MAX`] bytes, instead of panicking.
    pub fn try_reserve(&mut self, min_cap: usize) -> Result<(), CapacityOverflow> {
        if min_cap > self.cap {
            Self::check_cap(min_cap)?;
            self.realloc(min_cap);
        }
        Ok(())
    }

    /// Reallocates the backing storage to hold exactly `new_cap` elements.
    /// Shrinking below the current length drops the excess elements and
    /// truncates the length to match; that data loss is accepted behavior, not
    /// an error.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// vec.resize(3);
    /// assert_eq!(&*vec, &[0, 1, 2]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn resize(&mut self, new_cap: usize) {
        self.realloc(new_cap);
    }

    /// Reallocates the backing storage to capacity exactly equal to the current
    /// length.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(10);
    /// vec.extend(0..3);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.realloc(self.len);
    }

    /// Drops all live elements and sets the length to 0. The capacity is
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use toy_stl::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn clear(&mut self) {
        for i in 0..self.len {
            // SAFETY: i < len, so the slot holds an initialized value, properly
            // aligned and ready to drop.
            unsafe {
                ptr::drop_in_place(self.ptr.add(i).as_ptr());
            }
        }

        self.len = 0;
    }
}

impl<T> Vector<T> {
    /// A helper to create a [`Layout`] for `cap` elements of `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("Capacity overflow!")
    }

    /// A helper to allocate for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout, so zero-sized types and zero capacities
    /// never touch the allocator.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls
    /// [`alloc::handle_alloc_error`] as recommended, to avoid new allocations
    /// rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() },
            )
            .unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    pub(crate) fn check_cap(cap: usize) -> Result<(), CapacityOverflow> {
        match Layout::array::<T>(cap) {
            Ok(_) => Ok(()),
            Err(_) => Err(CapacityOverflow),
        }
    }

    /// The capacity the next growth step produces: doubling while the Vector
    /// holds fewer than [`GROWTH_THRESHOLD`] elements, tripling afterwards.
    pub(crate) fn growth_cap(&self) -> usize {
        let new_cap = if self.len < GROWTH_THRESHOLD {
            self.cap * 2
        } else {
            self.cap + self.cap * 2
        };

        cmp::max(new_cap, MIN_CAP)
    }

    pub(crate) fn grow(&mut self) {
        let mut new_cap = self.growth_cap();

        // If growth would overshoot the maximum layout, fall back to the largest
        // capacity that still fits, provided that still represents growth.
        if size_of::<T>() > 0 && new_cap > MAX_BYTES / size_of::<T>() {
            let max_cap = MAX_BYTES / size_of::<T>();
            if max_cap > self.cap {
                new_cap = max_cap;
            }
        }

        self.realloc(new_cap);
    }

    /// Reallocates to exactly `new_cap`: allocate the new block, move each live
    /// element across in index order, free the old block, adopt the new pointer
    /// and capacity. Shrinking below `len` drops the elements that won't survive
    /// first.
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        if new_cap == self.cap {
            return;
        }

        if new_cap < self.len {
            for i in new_cap..self.len {
                // SAFETY: i < len, so the slot holds an initialized value,
                // properly aligned and ready to drop.
                unsafe {
                    ptr::drop_in_place(self.ptr.add(i).as_ptr());
                }
            }
            self.len = new_cap;
        }

        if size_of::<T>() == 0 {
            // Zero-sized types are never actually allocated, only the
            // bookkeeping changes.
            self.cap = new_cap;
            return;
        }

        let old_layout = Self::make_layout(self.cap);

        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            let new_ptr = Self::make_ptr(Self::make_layout(new_cap));

            // SAFETY: Both buffers hold at least len slots and are distinct
            // allocations. The bitwise copy moves each element; the old slots
            // are treated as uninitialized from here on, so nothing is dropped
            // twice.
            unsafe {
                ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            }

            new_ptr
        };

        if old_layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with old_layout.
            // Zero-sized layouts were never allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), old_layout);
            }
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place, then free the buffer itself.
        self.clear();

        let layout = Self::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact
            // layout. Zero-sized layouts were never allocated.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The buffer uses Layout::array and is therefore valid and
        // properly aligned for len initialized elements, with a total size no
        // greater than isize::MAX. The safe API doesn't leak raw pointers, so
        // the borrow checker prevents mutation for the borrow's lifetime.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref; the mutable borrow of self guarantees exclusive
        // access for the borrow's lifetime.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors rely on a unique pointer to data they exclusively own, and are
// therefore safe to Send when T is.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no
// interior mutability occurs. This means that Vector<T> can safely implement
// Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap);

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
