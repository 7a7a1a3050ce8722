// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_circular_buffer
//!
//! A fixed-capacity FIFO container that reuses a single contiguous block of storage by
//! wrapping its indices modulo the capacity. The capacity `N` is a const generic, so it
//! is fixed at compile time and no operation ever reallocates.
//!
//! There are two ways to insert, and they are deliberately separate methods:
//! 1. [`CircularBuffer::overwrite_insert`] never fails. When the buffer is full, the
//!    oldest element is evicted (and handed back to you).
//! 2. [`CircularBuffer::guarded_insert`] never evicts. When the buffer is full, it
//!    returns [`CircularBufferError::Overflow`] and leaves the buffer untouched.
//!
//! Removal from the front is done by [`CircularBuffer::remove_front`], which returns
//! [`CircularBufferError::Underflow`] when the buffer is empty.
//!
//! The backing storage is pluggable via [`BufferStorage`]:
//! - [`CircularBufferStack`] keeps its slots inline in a `[T; N]` array.
//! - [`CircularBufferHeap`] keeps its slots in a `Box<[T]>`, allocated once.
//!
//! # Example
//!
//! ```
//! use r3bl_circular_buffer::{CircularBufferError, CircularBufferStack};
//!
//! let mut buffer = CircularBufferStack::<u32, 3>::new();
//! for it in 1..=4 {
//!     buffer.overwrite_insert(it);
//! }
//! assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
//! assert_eq!(*buffer.head(), 2);
//! assert_eq!(*buffer.tail(), 4);
//!
//! assert_eq!(
//!     buffer.guarded_insert(5),
//!     Err(CircularBufferError::Overflow { capacity: 3 })
//! );
//! assert_eq!(buffer.remove_front(), Ok(2));
//! ```
//!
//! # Traversal
//!
//! [`CircularBuffer::begin`] and [`CircularBuffer::end`] give you C++ style cursors
//! ([`CircularBufferCursor`]), and [`CircularBuffer::iter`] wraps the same cursor in a
//! regular Rust [`Iterator`]. Either way, exactly [`CircularBuffer::len`] elements are
//! visited, oldest to newest. Cursors borrow the buffer, so the borrow checker rules out
//! mutating it mid traversal.
//!
//! # Logging
//!
//! Evictions are reported with [`tracing::trace!`] and rejected operations with
//! [`tracing::debug!`]. Nothing is emitted unless a subscriber is installed; use
//! [`init_tracing()`] with a [`TracingConfig`] to install one.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod circular_buffer;
pub mod common;
pub mod log;

// Re-export.
pub use circular_buffer::*;
pub use common::*;
pub use log::*;
