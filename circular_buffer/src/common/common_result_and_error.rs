// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers. This is used by fallible setup code (eg:
/// [`crate::init_tracing`]). Buffer operations use [`CircularBufferResult`] instead, so
/// callers can match on the concrete [`CircularBufferError`].
pub type CommonResult<T> = miette::Result<T>;

/// Result of a fallible [`crate::CircularBuffer`] operation.
pub type CircularBufferResult<T> = Result<T, CircularBufferError>;

/// Failures reported by [`crate::CircularBuffer`]. Both are local and synchronous. When
/// one of these is returned, the buffer has not been modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum CircularBufferError {
    /// [`crate::CircularBuffer::guarded_insert`] was called on a full buffer.
    #[error("guarded insert on a full buffer (capacity: {capacity})")]
    #[diagnostic(
        code(r3bl_circular_buffer::overflow),
        help(
            "Remove an element with `remove_front()` first, or use `overwrite_insert()` \
             to evict the oldest element"
        )
    )]
    Overflow { capacity: usize },

    /// [`crate::CircularBuffer::remove_front`] was called on an empty buffer.
    #[error("remove front on an empty buffer")]
    #[diagnostic(
        code(r3bl_circular_buffer::underflow),
        help("Check `is_empty()` before removing")
    )]
    Underflow,
}
