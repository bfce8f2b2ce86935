//! External memory patching toolkit for Minecraft: Bedrock Edition
//!
//! The crate locates a running game process, resolves multi-level pointer
//! chains inside its address space, and applies reversible byte-level
//! patches. The OS-facing pieces (process/module snapshots, cross-process
//! I/O) are Windows-only; the resolver, patch engine, and the emulated
//! target used for testing are portable and generic over the
//! [`memory::ProcessMemory`] capability.

pub mod config;
pub mod core;
pub mod memory;
#[cfg(windows)]
pub mod process;
#[cfg(windows)]
pub mod windows;

// Re-export main types from the core module
pub use crate::core::types::{
    Address, MemoryError, MemoryResult, ModuleInfo, OffsetChain, ProcessId, ProcessInfo,
};

// Re-export the memory capability and its realizations
pub use crate::memory::{
    resolve_chain, AppliedPatch, EmulatedProcess, LocalMemory, PatchEngine, PatchSet,
    ProcessMemory, NOP_OPCODE,
};

#[cfg(windows)]
pub use crate::process::{ProcessHandle, TargetProcess};
