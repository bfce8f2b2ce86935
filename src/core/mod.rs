//! Core module containing fundamental types for the trainer
//!
//! This module provides the building blocks used throughout the crate:
//! address handling, offset chains, process information, and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, MemoryError, MemoryResult, ModuleInfo, OffsetChain, ProcessInfo};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
