// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The fixed-size block of slots that backs a [`super::CircularBuffer`]. There are two
//! implementations of [`BufferStorage`]:
//! - `[T; N]` which keeps the slots inline (on the stack, if the buffer itself is on the
//!   stack). Be careful of the size of the buffer, since if it is too large, you might
//!   get a stack overflow error.
//! - `Box<[T]>` which keeps the slots on the heap. The allocation happens once, in
//!   [`BufferStorage::new_filled`], and is never resized.

/// Exactly `N` slots of `T`. Every slot holds a value at all times; slots that are not
/// part of the buffer's logical window hold stale or default values.
///
/// Implementors must return exactly `N` slots from both [`BufferStorage::slots`] and
/// [`BufferStorage::slots_mut`], and that length must never change. The buffer indexes
/// into them with `index % N` and does no bounds recovery, so a shorter slice panics on
/// the first out of range access. [`super::CircularBuffer::new`] checks the length in
/// debug builds.
pub trait BufferStorage<T, const N: usize> {
    /// Allocate the storage with every slot set to [`Default::default`].
    fn new_filled() -> Self;

    /// All `N` slots, in physical order.
    fn slots(&self) -> &[T];

    /// All `N` slots, in physical order. Must have the same length as
    /// [`BufferStorage::slots`].
    fn slots_mut(&mut self) -> &mut [T];
}

impl<T: Default, const N: usize> BufferStorage<T, N> for [T; N] {
    fn new_filled() -> Self { std::array::from_fn(|_| T::default()) }

    fn slots(&self) -> &[T] { self }

    fn slots_mut(&mut self) -> &mut [T] { self }
}

impl<T: Default, const N: usize> BufferStorage<T, N> for Box<[T]> {
    fn new_filled() -> Self {
        std::iter::repeat_with(T::default).take(N).collect()
    }

    fn slots(&self) -> &[T] { self }

    fn slots_mut(&mut self) -> &mut [T] { self }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stack_storage_is_filled_with_defaults() {
        let storage = <[u8; 4] as BufferStorage<u8, 4>>::new_filled();
        assert_eq!(storage.slots(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_heap_storage_is_filled_with_defaults() {
        let storage = <Box<[String]> as BufferStorage<String, 3>>::new_filled();
        let slots = BufferStorage::<String, 3>::slots(&storage);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(String::is_empty));
    }

    #[test]
    fn test_slots_mut_writes_through() {
        let mut storage = <Box<[i32]> as BufferStorage<i32, 2>>::new_filled();
        BufferStorage::<i32, 2>::slots_mut(&mut storage)[1] = 42;
        assert_eq!(BufferStorage::<i32, 2>::slots(&storage), &[0, 42]);
    }
}
