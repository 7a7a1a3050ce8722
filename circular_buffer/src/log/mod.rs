// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod captured_logs;
pub mod file_appender_impl;
pub mod init_tracing;
pub mod tracing_config;

// Re-export.
pub use captured_logs::*;
pub use file_appender_impl::*;
pub use init_tracing::*;
pub use tracing_config::*;
