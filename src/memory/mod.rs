//! Memory access capability and its realizations
//!
//! This module defines the single abstraction the rest of the crate is built
//! on: [`ProcessMemory`], the capability to read and write a specific
//! address space. Three realizations exist:
//! - [`LocalMemory`] — the calling process's own address space
//! - `process::ProcessHandle` — another process, via OS-mediated
//!   cross-process I/O (Windows only)
//! - [`EmulatedProcess`] — an in-process buffer standing in for another
//!   process, used by tests and benches
//!
//! The pointer-chain resolver and the patch engine are generic over the
//! capability, so the same walking and patching logic serves every
//! realization.

pub mod emulated;
pub mod local;
pub mod patch;
pub mod resolver;

pub use emulated::EmulatedProcess;
pub use local::LocalMemory;
pub use patch::{AppliedPatch, PatchEngine, PatchSet, NOP_OPCODE};
pub use resolver::{resolve_chain, resolve_local};

use crate::core::types::{Address, MemoryResult};
use std::mem;

/// Capability to read and write one process's address space.
///
/// Exact-length semantics: `read_bytes` fills the whole buffer or fails,
/// and `write_bytes` transfers all of `data` or fails. A short transfer is
/// an error ([`MemoryError::PartialTransfer`](crate::MemoryError)), never a
/// partial success, so a caller can trust that a returned `Ok(())` means
/// the destination holds exactly the requested bytes.
pub trait ProcessMemory {
    /// Read exactly `buffer.len()` bytes starting at `address`
    fn read_bytes(&self, address: Address, buffer: &mut [u8]) -> MemoryResult<()>;

    /// Write all of `data` starting at `address`
    fn write_bytes(&self, address: Address, data: &[u8]) -> MemoryResult<()>;

    /// Read a pointer-sized little-endian value at `address`
    fn read_pointer(&self, address: Address) -> MemoryResult<Address> {
        let mut buffer = [0u8; mem::size_of::<usize>()];
        self.read_bytes(address, &mut buffer)?;
        Ok(Address::new(usize::from_le_bytes(buffer)))
    }
}
