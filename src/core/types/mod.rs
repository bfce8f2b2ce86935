//! Fundamental types shared across the crate

pub mod address;
pub mod error;
pub mod offsets;
pub mod process_info;

pub use address::Address;
pub use error::{MemoryError, MemoryResult};
pub use offsets::OffsetChain;
pub use process_info::{ModuleInfo, ProcessInfo};

/// Process identifier type
pub type ProcessId = u32;
