//! Pointer-chain resolution
//!
//! A chain `[o1, o2, o3]` over base `B` resolves as: read the pointer at
//! `B + o1`, read the pointer at that value `+ o2`, and return the second
//! value `+ o3`. The final offset is added without a dereference — it names
//! an addressable target, not a pointer to follow. An empty chain resolves
//! to the base unchanged.
//!
//! One implementation serves every address space by being generic over
//! [`ProcessMemory`]; local and cross-process resolution differ only in the
//! capability value passed in. Offsets are trusted as supplied — no bounds
//! or plausibility checks happen here (caller contract; the config
//! validator offers an opt-in strict mode for chains coming from files).

use super::{LocalMemory, ProcessMemory};
use crate::core::types::{Address, MemoryError, MemoryResult, OffsetChain};
use tracing::trace;

/// Walks an offset chain from `base` through `memory`'s address space.
///
/// Every failed intermediate read aborts the walk with
/// [`MemoryError::PointerChainBroken`] carrying the zero-based level of the
/// offset being applied; the walk never continues past a bad read.
pub fn resolve_chain<M: ProcessMemory + ?Sized>(
    memory: &M,
    base: Address,
    offsets: &OffsetChain,
) -> MemoryResult<Address> {
    let Some((last, walk)) = offsets.split_last() else {
        return Ok(base);
    };

    let mut current = base;
    for (level, &offset) in walk.iter().enumerate() {
        let slot = current.add(offset);
        current = memory.read_pointer(slot).map_err(|err| {
            MemoryError::pointer_chain_broken(level, format!("reading pointer at {slot}: {err}"))
        })?;
    }

    let resolved = current.add(last);
    trace!(base = %base, chain = %offsets, resolved = %resolved, "resolved pointer chain");
    Ok(resolved)
}

/// Walks an offset chain entirely within the calling process.
///
/// # Safety
///
/// Every intermediate slot the chain touches (`base + o1`, then each
/// followed pointer plus its offset) must be a valid, readable address in
/// this process. An invalid slot is an access violation, not an `Err`.
pub unsafe fn resolve_local(base: Address, offsets: &OffsetChain) -> MemoryResult<Address> {
    resolve_chain(&LocalMemory::new(), base, offsets)
}
