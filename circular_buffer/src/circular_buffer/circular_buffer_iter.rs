// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use super::{BufferStorage, CircularBuffer, CircularBufferCursor};

impl<T, const N: usize, S: BufferStorage<T, N>> CircularBuffer<T, N, S> {
    /// Oldest to newest. Each call starts a fresh traversal from the buffer's current
    /// state.
    #[must_use]
    pub fn iter(&self) -> CircularBufferIter<'_, T, N, S> {
        CircularBufferIter {
            cursor: self.begin(),
        }
    }
}

/// This implementation allows the circular buffer to be used in a for loop directly.
impl<'a, T, const N: usize, S: BufferStorage<T, N>> IntoIterator
    for &'a CircularBuffer<T, N, S>
{
    type Item = &'a T;
    type IntoIter = CircularBufferIter<'a, T, N, S>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// [`Iterator`] adapter over a [`CircularBufferCursor`].
#[derive(Debug)]
pub struct CircularBufferIter<'a, T, const N: usize, S> {
    cursor: CircularBufferCursor<'a, T, N, S>,
}

impl<T, const N: usize, S> Clone for CircularBufferIter<'_, T, N, S> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
        }
    }
}

impl<'a, T, const N: usize, S: BufferStorage<T, N>> Iterator
    for CircularBufferIter<'a, T, N, S>
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let it = self.cursor.get()?;
        self.cursor.advance();
        Some(it)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize, S: BufferStorage<T, N>> ExactSizeIterator
    for CircularBufferIter<'_, T, N, S>
{
}

impl<T, const N: usize, S: BufferStorage<T, N>> FusedIterator
    for CircularBufferIter<'_, T, N, S>
{
}
