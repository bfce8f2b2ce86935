//! In-process stand-in for another process's memory
//!
//! An [`EmulatedProcess`] models a single mapped region `[base, base+size)`
//! of a foreign address space, backed by an in-process buffer. Out-of-range
//! accesses fail the way an unmapped page does in the real cross-process
//! path, which lets the resolver and patch engine be exercised end to end
//! without a live target process.

use super::ProcessMemory;
use crate::core::types::{Address, MemoryError, MemoryResult};
use std::ops::Range;
use std::sync::Mutex;

/// A fake target process exposing one mapped memory region
pub struct EmulatedProcess {
    base: Address,
    size: usize,
    bytes: Mutex<Vec<u8>>,
}

impl EmulatedProcess {
    /// Creates a zero-filled region of `size` bytes mapped at `base`
    pub fn new(base: Address, size: usize) -> Self {
        EmulatedProcess {
            base,
            size,
            bytes: Mutex::new(vec![0u8; size]),
        }
    }

    /// Creates a region mapped at `base` with the given initial contents
    pub fn with_bytes(base: Address, bytes: Vec<u8>) -> Self {
        EmulatedProcess {
            base,
            size: bytes.len(),
            bytes: Mutex::new(bytes),
        }
    }

    /// Base address of the mapped region
    pub fn base(&self) -> Address {
        self.base
    }

    /// Size of the mapped region in bytes
    pub fn size(&self) -> usize {
        self.size
    }

    /// One past the last mapped address
    pub fn end(&self) -> Address {
        self.base.add(self.size)
    }

    /// Stores a pointer-sized little-endian value at `at`, pointing to
    /// `destination`. Used to lay out pointer-chain fixtures.
    pub fn plant_pointer(&self, at: Address, destination: Address) -> MemoryResult<()> {
        self.write_bytes(at, &destination.as_usize().to_le_bytes())
    }

    /// Copies out the full region contents
    pub fn snapshot(&self) -> Vec<u8> {
        self.bytes.lock().unwrap().clone()
    }

    fn mapped_range(&self, address: Address, len: usize) -> Option<Range<usize>> {
        let start = address.as_usize().checked_sub(self.base.as_usize())?;
        let end = start.checked_add(len)?;
        if end > self.size {
            return None;
        }
        Some(start..end)
    }
}

impl ProcessMemory for EmulatedProcess {
    fn read_bytes(&self, address: Address, buffer: &mut [u8]) -> MemoryResult<()> {
        let range = self.mapped_range(address, buffer.len()).ok_or_else(|| {
            MemoryError::read_failed(address, "address is not mapped in the emulated target")
        })?;
        buffer.copy_from_slice(&self.bytes.lock().unwrap()[range]);
        Ok(())
    }

    fn write_bytes(&self, address: Address, data: &[u8]) -> MemoryResult<()> {
        let range = self.mapped_range(address, data.len()).ok_or_else(|| {
            MemoryError::write_failed(address, "address is not mapped in the emulated target")
        })?;
        self.bytes.lock().unwrap()[range].copy_from_slice(data);
        Ok(())
    }
}
