// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A fixed-capacity circular buffer. The capacity `N` is a const generic and the backing
//! storage is chosen with the `S` type parameter (see [`super::BufferStorage`]).
//!
//! Index bookkeeping:
//! - `head` is the slot holding the oldest element.
//! - `tail` is the slot holding the most recently written element.
//! - `write_cursor` is the slot the next insert writes to.
//! - `count` is the number of valid elements.
//!
//! When `count > 0`, `tail == (write_cursor - 1) mod N` and
//! `head == (write_cursor - count) mod N`. Slots outside `[head, head + count)` hold
//! stale or default values.

use std::marker::PhantomData;

use super::BufferStorage;
use crate::{CircularBufferError, CircularBufferResult, InlineVec};

/// Circular buffer whose slots live inline in a `[T; N]` array.
pub type CircularBufferStack<T, const N: usize> = CircularBuffer<T, N, [T; N]>;

/// Circular buffer whose slots live in a `Box<[T]>`, allocated once in
/// [`CircularBuffer::new`].
pub type CircularBufferHeap<T, const N: usize> = CircularBuffer<T, N, Box<[T]>>;

#[derive(Clone, Debug)]
pub struct CircularBuffer<T, const N: usize, S = [T; N]> {
    internal_storage: S,
    head: usize,
    tail: usize,
    write_cursor: usize,
    count: usize,
    _phantom: PhantomData<T>,
}

impl<T, const N: usize, S: BufferStorage<T, N>> Default for CircularBuffer<T, N, S> {
    fn default() -> Self { Self::new() }
}

impl<T, const N: usize, S: BufferStorage<T, N>> CircularBuffer<T, N, S> {
    /// Create an empty buffer. Every slot is filled with `T::default()` up front, and
    /// the storage is never resized after this. A capacity of zero fails to compile.
    ///
    /// # Panics
    ///
    /// In debug builds, if `S` breaks the [`BufferStorage`] contract by providing a
    /// number of slots other than `N`.
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N > 0, "CircularBuffer capacity must be greater than zero") }
        let internal_storage = S::new_filled();
        debug_assert_eq!(
            internal_storage.slots().len(),
            N,
            "BufferStorage must provide exactly N slots"
        );
        Self {
            internal_storage,
            head: 0,
            tail: 0,
            write_cursor: 0,
            count: 0,
            _phantom: PhantomData,
        }
    }

    fn next_index(index: usize) -> usize { (index + 1) % N }

    /// The element in the head slot (the oldest one). This does not check for
    /// emptiness: on an empty buffer you get whatever stale or default value occupies
    /// that slot. Use [`Self::first`] if you need the check.
    #[must_use]
    pub fn head(&self) -> &T { &self.internal_storage.slots()[self.head] }

    /// The element in the tail slot (the newest one). Like [`Self::head`], this does not
    /// check for emptiness. Use [`Self::last`] if you need the check.
    #[must_use]
    pub fn tail(&self) -> &T { &self.internal_storage.slots()[self.tail] }

    /// The oldest element, or [`None`] if the buffer is empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> { (!self.is_empty()).then(|| self.head()) }

    /// The newest element, or [`None`] if the buffer is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> { (!self.is_empty()).then(|| self.tail()) }

    /// Insert at the write cursor. This never fails. If the buffer is already full, the
    /// oldest element is evicted and returned, and the length stays at `N`.
    pub fn overwrite_insert(&mut self, value: T) -> Option<T> {
        let was_full = self.is_full();

        // When full, the write cursor and the head point at the same slot.
        let slot = &mut self.internal_storage.slots_mut()[self.write_cursor];
        let previous = std::mem::replace(slot, value);

        self.tail = self.write_cursor;
        self.write_cursor = Self::next_index(self.write_cursor);

        if was_full {
            self.head = Self::next_index(self.head);
            tracing::trace!(
                message = "circular buffer evicted its oldest element",
                capacity = N,
                head = self.head,
            );
            Some(previous)
        } else {
            self.count += 1;
            None
        }
    }

    /// Insert at the write cursor, without ever evicting.
    ///
    /// # Errors
    ///
    /// Returns [`CircularBufferError::Overflow`] if the buffer is full. In that case the
    /// buffer is not modified and `value` is dropped.
    pub fn guarded_insert(&mut self, value: T) -> CircularBufferResult<()> {
        if self.is_full() {
            tracing::debug!(
                message = "circular buffer rejected guarded insert",
                capacity = N,
            );
            return Err(CircularBufferError::Overflow { capacity: N });
        }

        let evicted = self.overwrite_insert(value);
        debug_assert!(evicted.is_none());
        Ok(())
    }

    /// Remove the oldest element and return a copy of it. The vacated slot keeps its
    /// value until a later insert overwrites it.
    ///
    /// # Errors
    ///
    /// Returns [`CircularBufferError::Underflow`] if the buffer is empty. In that case
    /// the buffer is not modified.
    pub fn remove_front(&mut self) -> CircularBufferResult<T>
    where
        T: Clone,
    {
        if self.is_empty() {
            tracing::debug!(message = "circular buffer rejected remove front");
            return Err(CircularBufferError::Underflow);
        }

        let value = self.head().clone();
        self.head = Self::next_index(self.head);
        self.count -= 1;
        Ok(value)
    }

    /// Forget every element. The slots are not cleared, they just become stale.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.write_cursor = 0;
        self.count = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize { self.count }

    /// Always `N`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn capacity(&self) -> usize { N }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.count == 0 }

    #[must_use]
    pub fn is_full(&self) -> bool { self.count == N }

    /// Returns a view of the underlying internal storage: all `N` slots in physical
    /// order, including the stale ones.
    #[must_use]
    pub fn as_slice_raw(&self) -> &[T] { self.internal_storage.slots() }

    /// Collect references to the valid elements, oldest to newest.
    /// - Even though `T` is not cloned, the collection has to be allocated and moved to
    ///   the caller, via return. A slice can't be returned because the valid elements
    ///   may wrap around the end of the storage.
    #[must_use]
    pub fn as_slice(&self) -> InlineVec<&T> { self.iter().collect() }

    pub(super) fn head_index(&self) -> usize { self.head }

    pub(super) fn write_cursor_index(&self) -> usize { self.write_cursor }

    pub(super) fn slot(&self, index: usize) -> &T { &self.internal_storage.slots()[index] }
}

/// Two buffers are equal when their valid elements are equal, in order. Stale slots and
/// physical offsets don't matter.
impl<T: PartialEq, const N: usize, S: BufferStorage<T, N>> PartialEq
    for CircularBuffer<T, N, S>
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize, S: BufferStorage<T, N>> Eq for CircularBuffer<T, N, S> {}

/// Extending uses [`CircularBuffer::overwrite_insert`], so only the last `N` items
/// survive.
impl<T, const N: usize, S: BufferStorage<T, N>> Extend<T> for CircularBuffer<T, N, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _evicted = self.overwrite_insert(value);
        }
    }
}

impl<T, const N: usize, S: BufferStorage<T, N>> FromIterator<T>
    for CircularBuffer<T, N, S>
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}
