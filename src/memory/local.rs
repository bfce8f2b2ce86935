//! Own-address-space realization of the memory capability

use super::ProcessMemory;
use crate::core::types::{Address, MemoryResult};
use std::ptr;

/// Memory access within the calling process's own address space.
///
/// Reads and writes are plain pointer copies with no OS mediation, so there
/// is no recoverable failure path: an invalid address is an access
/// violation, not an `Err`. Construction is therefore `unsafe` — the caller
/// vouches that every address later passed to [`ProcessMemory`] methods on
/// this value is valid for the access performed, and writable for writes
/// (this layer never adjusts page protection).
#[derive(Debug, Clone, Copy)]
pub struct LocalMemory {
    _priv: (),
}

impl LocalMemory {
    /// Creates a local-memory accessor.
    ///
    /// # Safety
    ///
    /// Every address passed to `read_bytes`/`write_bytes`/`read_pointer` on
    /// the returned value must be valid for the requested length, and
    /// mapped writable for writes.
    pub const unsafe fn new() -> Self {
        LocalMemory { _priv: () }
    }
}

impl ProcessMemory for LocalMemory {
    fn read_bytes(&self, address: Address, buffer: &mut [u8]) -> MemoryResult<()> {
        if buffer.is_empty() {
            return Ok(());
        }
        unsafe {
            ptr::copy_nonoverlapping(address.as_ptr::<u8>(), buffer.as_mut_ptr(), buffer.len());
        }
        Ok(())
    }

    fn write_bytes(&self, address: Address, data: &[u8]) -> MemoryResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        unsafe {
            ptr::copy_nonoverlapping(data.as_ptr(), address.as_mut_ptr::<u8>(), data.len());
        }
        Ok(())
    }
}
