//! Byte-level patching of a target address space
//!
//! The engine is stateless between calls — it keeps no history of what it
//! wrote. Undo is the caller's concern: [`PatchEngine::apply`] captures the
//! original bytes before overwriting and hands them back as an
//! [`AppliedPatch`], which [`PatchEngine::revert`] writes back verbatim.
//! [`PatchSet`] collects applied patches so a shutdown path can restore
//! them in reverse order.
//!
//! All operations share one invariant: the number of bytes written equals
//! the requested size exactly. The underlying [`ProcessMemory`] capability
//! turns short transfers into errors, so a reported success means the full
//! replacement landed.

use super::ProcessMemory;
use crate::core::types::{Address, MemoryResult};
use tracing::debug;

/// Single-byte x86/x64 no-op instruction
pub const NOP_OPCODE: u8 = 0x90;

/// Patch application over one address space
pub struct PatchEngine<'a, M: ProcessMemory + ?Sized> {
    memory: &'a M,
}

impl<'a, M: ProcessMemory + ?Sized> PatchEngine<'a, M> {
    /// Creates a patch engine over the given memory capability
    pub fn new(memory: &'a M) -> Self {
        PatchEngine { memory }
    }

    /// Overwrites `bytes.len()` bytes at `destination`.
    ///
    /// The destination must already be writable in the target address
    /// space; this layer never adjusts page protection.
    pub fn patch(&self, destination: Address, bytes: &[u8]) -> MemoryResult<()> {
        self.memory.write_bytes(destination, bytes)?;
        debug!(destination = %destination, len = bytes.len(), "patched bytes");
        Ok(())
    }

    /// Overwrites `size` bytes at `destination` with the no-op opcode,
    /// neutralizing a fixed-size instruction in place
    pub fn nop(&self, destination: Address, size: usize) -> MemoryResult<()> {
        self.patch(destination, &vec![NOP_OPCODE; size])
    }

    /// Reads the current bytes at `destination`, as a caller would before
    /// patching to make the overwrite reversible
    pub fn read_original(&self, destination: Address, len: usize) -> MemoryResult<Vec<u8>> {
        let mut original = vec![0u8; len];
        self.memory.read_bytes(destination, &mut original)?;
        Ok(original)
    }

    /// Captures the original bytes at `destination`, then patches.
    ///
    /// Nothing is written if the capture fails, so an `Err` here means the
    /// target is untouched.
    pub fn apply(&self, destination: Address, bytes: &[u8]) -> MemoryResult<AppliedPatch> {
        let original = self.read_original(destination, bytes.len())?;
        self.patch(destination, bytes)?;
        Ok(AppliedPatch {
            address: destination,
            original,
        })
    }

    /// Captures the original bytes, then no-ops `size` bytes
    pub fn apply_nop(&self, destination: Address, size: usize) -> MemoryResult<AppliedPatch> {
        self.apply(destination, &vec![NOP_OPCODE; size])
    }

    /// Writes an applied patch's original bytes back
    pub fn revert(&self, patch: &AppliedPatch) -> MemoryResult<()> {
        self.memory.write_bytes(patch.address, &patch.original)?;
        debug!(destination = %patch.address, len = patch.original.len(), "reverted patch");
        Ok(())
    }
}

/// Original bytes captured from a patched address, sufficient to undo the
/// patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedPatch {
    address: Address,
    original: Vec<u8>,
}

impl AppliedPatch {
    /// Address the patch was written to
    pub fn address(&self) -> Address {
        self.address
    }

    /// The bytes the destination held before the patch
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// Number of patched bytes
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Whether the patch covered zero bytes
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

/// Ordered collection of applied patches for bulk restoration
#[derive(Debug, Default)]
pub struct PatchSet {
    patches: Vec<AppliedPatch>,
}

impl PatchSet {
    /// Creates an empty set
    pub fn new() -> Self {
        PatchSet::default()
    }

    /// Records an applied patch
    pub fn push(&mut self, patch: AppliedPatch) {
        self.patches.push(patch);
    }

    /// Number of recorded patches
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Iterates over recorded patches in application order
    pub fn iter(&self) -> std::slice::Iter<'_, AppliedPatch> {
        self.patches.iter()
    }

    /// Reverts all recorded patches, newest first, and clears the set.
    ///
    /// Stops at the first failed write; the unreverted patches stay
    /// recorded so a caller can retry.
    pub fn revert_all<M: ProcessMemory + ?Sized>(
        &mut self,
        engine: &PatchEngine<'_, M>,
    ) -> MemoryResult<()> {
        while let Some(patch) = self.patches.last() {
            engine.revert(patch)?;
            self.patches.pop();
        }
        Ok(())
    }
}
