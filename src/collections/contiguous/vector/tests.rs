#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::{CapacityOverflow, IndexOutOfBounds};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_growth_policy() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 2, "A fresh Vector should start with capacity 2.");

    let mut caps = Vector::new();
    for i in 0..25 {
        vec.push(i);
        assert!(
            vec.len() <= vec.cap(),
            "len <= cap should hold after every push."
        );
        caps.push(vec.cap());
    }

    assert_eq!(caps[1], 2, "No growth while within the initial capacity.");
    assert_eq!(caps[2], 4, "First growth below the threshold should double.");
    assert_eq!(caps[4], 8, "Second growth below the threshold should double.");
    assert_eq!(caps[8], 24, "Growth at size 8 should triple.");
    assert_eq!(caps[24], 72, "Growth at size 24 should triple.");

    let mut vec: Vector<u8> = Vector::with_cap(0);
    vec.push(1);
    assert_eq!(
        vec.cap(),
        2,
        "Growing from capacity 0 should produce the minimum capacity."
    );
}

#[test]
fn test_push_pop() {
    let mut vec = Vector::new();
    for i in 0..5 {
        let slot = vec.push(i);
        *slot += 10;
    }
    assert_eq!(
        &*vec,
        &[10, 11, 12, 13, 14],
        "push should return a usable reference to the new element."
    );

    for i in (0..5).rev() {
        assert_eq!(vec.pop(), Some(i + 10));
    }
    assert_eq!(vec.pop(), None, "Popping an empty Vector should be a no-op.");
    assert_eq!(vec.pop(), None);
}

#[test]
fn test_insert() {
    let mut vec = Vector::new();
    vec.push(1);
    vec.push(3);
    vec.insert(1, 2);
    assert_eq!(&*vec, &[1, 2, 3]);
    assert_eq!(vec.len(), 3);

    let mut vec = Vector::new();
    vec.insert(0, 9);
    assert_eq!(
        &*vec,
        &[9],
        "Inserting into an empty Vector should degrade to a push."
    );

    vec.insert(0, 8);
    vec.insert(2, 7);
    assert_eq!(&*vec, &[8, 9, 7]);

    assert_panics!({
        let mut vec: Vector<_> = (0..3).collect();
        vec.insert(4, 100);
    });

    let mut vec: Vector<_> = (0..3).collect();
    assert!(
        vec.try_insert(7, 100)
            .unwrap_err()
            .is_index_out_of_bounds(),
        "try_insert past the end should report the index error."
    );
    assert_eq!(&*vec, &[0, 1, 2], "A failed insert should change nothing.");
    assert!(vec.try_insert(3, 3).is_ok());
    assert_eq!(&*vec, &[0, 1, 2, 3]);
}

#[test]
fn test_checked_access() {
    let mut vec: Vector<_> = (0..3).collect();

    assert_eq!(vec.get(0), Ok(&0));
    assert_eq!(vec.get(2), Ok(&2));
    assert_eq!(
        vec.get(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Checked access at len should fail."
    );

    *vec.get_mut(1).expect("index 1 is in bounds") = 10;
    assert_eq!(&*vec, &[0, 10, 2]);

    // SAFETY: 2 < len.
    assert_eq!(unsafe { vec.get_unchecked(2) }, &2);
    // SAFETY: 0 < len.
    unsafe { *vec.get_unchecked_mut(0) = 5 };
    assert_eq!(&*vec, &[5, 10, 2]);

    assert_eq!(vec.front(), Some(&5));
    assert_eq!(vec.back(), Some(&2));

    let empty: Vector<u8> = Vector::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
    assert_eq!(empty.get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_reserve_and_resize() {
    let mut vec: Vector<_> = (0..3).collect();
    vec.reserve(10);
    assert_eq!(vec.cap(), 10);
    assert_eq!(&*vec, &[0, 1, 2], "reserve should preserve the elements.");

    vec.reserve(4);
    assert_eq!(
        vec.cap(),
        10,
        "reserve below the current capacity should do nothing."
    );

    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    vec.resize(4);
    assert_eq!(
        counter.count(),
        6,
        "Shrinking below len should drop exactly the excess elements."
    );
    assert_eq!(vec.len(), 4);
    assert_eq!(vec.cap(), 4);

    vec.resize(8);
    assert_eq!(vec.len(), 4, "Growing again should not resurrect anything.");
    assert_eq!(counter.count(), 6);
}

#[test]
fn test_shrink_to_fit() {
    let mut vec = Vector::with_cap(32);
    vec.extend(0..5);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), vec.len());
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), vec.len(), "shrink_to_fit should be idempotent.");
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "No data loss on repeated shrink.");
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let cap = vec.cap();

    vec.clear();
    assert_eq!(counter.count(), 10, "clear should drop every live element.");
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "clear should leave the capacity untouched.");

    vec.push(counter.clone());
    drop(vec);
    assert_eq!(
        counter.count(),
        11,
        "Dropping the Vector should drop its remaining element."
    );
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        let mut vec: Vector<u32> = Vector::new();
        vec.reserve(isize::MAX as usize);
    });

    let mut vec: Vector<u32> = Vector::new();
    assert_eq!(
        vec.try_reserve(isize::MAX as usize),
        Err(CapacityOverflow),
        "try_reserve should surface layout overflow instead of panicking."
    );
    assert!(
        vec.try_insert(0, 1).is_ok(),
        "The Vector should remain usable after a failed reservation."
    );
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 10);
    assert_eq!(vec[0], ZeroSizedType);
    assert_eq!(vec[9], ZeroSizedType);

    let old_ptr = vec.ptr;
    vec.reserve(100);
    assert_eq!(
        vec.ptr, old_ptr,
        "Pointer shouldn't change when reallocating for a ZST."
    );

    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.len(), 9);
    assert_eq!(vec.iter().count(), 9);
}

#[test]
fn test_iterators() {
    let mut vec: Vector<usize> = (0..5).collect();
    for i in vec.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*vec, [0, 2, 4, 6, 8]);

    assert_eq!(
        vec,
        vec.clone(),
        "A cloned Vector should compare equal to the original."
    );

    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    iter.next();
    iter.next_back();
    drop(iter);
    assert_eq!(
        counter.count(),
        10,
        "Dropping a partially consumed owned iterator should drop everything."
    );
}
