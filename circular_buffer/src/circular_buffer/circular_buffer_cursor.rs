// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Begin / end style cursors over a [`CircularBuffer`]. A cursor is an index into the
//! buffer's storage paired with a shared borrow of the buffer; the element is looked up
//! again on every [`CircularBufferCursor::get`]. Holding a cursor keeps the buffer
//! borrowed, so it can't be mutated mid traversal.
//!
//! A cursor visits exactly [`CircularBuffer::len`] elements, oldest to newest, and then
//! flags itself done. On a full buffer that is the same as walking one complete lap and
//! returning to the start position. Stale slots are never visited.

use std::fmt::{Debug, Formatter, Result};

use super::{BufferStorage, CircularBuffer};

pub struct CircularBufferCursor<'a, T, const N: usize, S> {
    ring_buffer: &'a CircularBuffer<T, N, S>,
    start: usize,
    position: usize,
    remaining: usize,
    done: bool,
}

impl<T, const N: usize, S: BufferStorage<T, N>> CircularBuffer<T, N, S> {
    /// Cursor at the head (oldest element). If the buffer is empty, the cursor is
    /// already done, so it compares equal to [`Self::end`].
    #[must_use]
    pub fn begin(&self) -> CircularBufferCursor<'_, T, N, S> {
        CircularBufferCursor {
            ring_buffer: self,
            start: self.head_index(),
            position: self.head_index(),
            remaining: self.len(),
            done: self.is_empty(),
        }
    }

    /// The done sentinel. Every cursor that has visited all of its elements compares
    /// equal to this.
    #[must_use]
    pub fn end(&self) -> CircularBufferCursor<'_, T, N, S> {
        CircularBufferCursor {
            ring_buffer: self,
            start: self.write_cursor_index(),
            position: self.write_cursor_index(),
            remaining: 0,
            done: true,
        }
    }
}

impl<'a, T, const N: usize, S: BufferStorage<T, N>> CircularBufferCursor<'a, T, N, S> {
    /// The element under the cursor, or [`None`] once the cursor is done.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        if self.done {
            return None;
        }
        Some(self.ring_buffer.slot(self.position))
    }

    /// Move to the next slot, wrapping around the end of the storage. Advancing a done
    /// cursor does nothing.
    pub fn advance(&mut self) {
        if self.done {
            return;
        }

        self.position = (self.position + 1) % N;
        self.remaining -= 1;

        // Complete ring, or every valid element visited.
        self.done = self.remaining == 0 || self.position == self.start;
    }

    #[must_use]
    pub fn is_done(&self) -> bool { self.done }

    /// Physical slot index the cursor points at.
    #[must_use]
    pub fn position(&self) -> usize { self.position }

    /// How many more elements [`Self::get`] will yield, counting the current one.
    #[must_use]
    pub fn remaining(&self) -> usize { self.remaining }
}

/// Both done, or neither done and pointing at the same slot.
impl<T, const N: usize, S> PartialEq for CircularBufferCursor<'_, T, N, S> {
    fn eq(&self, other: &Self) -> bool {
        match (self.done, other.done) {
            (true, true) => true,
            (false, false) => self.position == other.position,
            _ => false,
        }
    }
}

impl<T, const N: usize, S> Clone for CircularBufferCursor<'_, T, N, S> {
    fn clone(&self) -> Self { *self }
}

impl<T, const N: usize, S> Copy for CircularBufferCursor<'_, T, N, S> {}

impl<T, const N: usize, S> Debug for CircularBufferCursor<'_, T, N, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("CircularBufferCursor")
            .field("start", &self.start)
            .field("position", &self.position)
            .field("remaining", &self.remaining)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
