//! Attached-target context
//!
//! [`TargetProcess`] is the one piece of long-lived state in the crate: the
//! process handle, pid, and module base resolved once by an explicit
//! [`TargetProcess::attach`] call and passed around by reference afterwards.
//! There is no global or load-time initialization; construction either
//! yields a fully usable context or an error, and the handle is released
//! when the context drops — including when a later stage of `attach`
//! fails.

use super::enumerator::find_process_id;
use super::handle::ProcessHandle;
use super::modules::find_module;
use crate::core::types::{Address, MemoryResult, OffsetChain, ProcessId};
use crate::memory::{resolve_chain, PatchEngine};
use tracing::info;

/// An attached target process with its primary module resolved
pub struct TargetProcess {
    handle: ProcessHandle,
    module_name: String,
    module_base: Address,
}

impl TargetProcess {
    /// Locates `process_name`, opens it for read/write, and resolves the
    /// base address of `module_name` inside it.
    ///
    /// Each stage short-circuits on failure: no pid means no handle is
    /// opened, and a failed module lookup drops the already-open handle on
    /// the way out.
    pub fn attach(process_name: &str, module_name: &str) -> MemoryResult<Self> {
        let pid = find_process_id(process_name)?;
        let handle = ProcessHandle::open_for_read_write(pid)?;
        let module = find_module(pid, module_name)?;

        info!(
            pid,
            module = %module.name,
            base = %module.base_address,
            "attached to target process"
        );

        Ok(TargetProcess {
            handle,
            module_name: module.name,
            module_base: module.base_address,
        })
    }

    /// Process identifier of the attached target
    pub fn pid(&self) -> ProcessId {
        self.handle.pid()
    }

    /// Name of the resolved module
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Base load address of the resolved module
    pub fn module_base(&self) -> Address {
        self.module_base
    }

    /// The target's memory capability
    pub fn memory(&self) -> &ProcessHandle {
        &self.handle
    }

    /// A patch engine over the target's memory
    pub fn patch_engine(&self) -> PatchEngine<'_, ProcessHandle> {
        PatchEngine::new(&self.handle)
    }

    /// Resolves an offset chain seeded at the module base
    pub fn resolve(&self, offsets: &OffsetChain) -> MemoryResult<Address> {
        resolve_chain(&self.handle, self.module_base, offsets)
    }

    /// Resolves an offset chain from an arbitrary base in the target
    pub fn resolve_from(&self, base: Address, offsets: &OffsetChain) -> MemoryResult<Address> {
        resolve_chain(&self.handle, base, offsets)
    }
}
