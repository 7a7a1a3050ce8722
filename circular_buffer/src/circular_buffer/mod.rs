// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod buffer_storage;
pub mod circular_buffer_cursor;
pub mod circular_buffer_impl;
pub mod circular_buffer_iter;

// Re-export.
pub use buffer_storage::*;
pub use circular_buffer_cursor::*;
pub use circular_buffer_impl::*;
pub use circular_buffer_iter::*;
