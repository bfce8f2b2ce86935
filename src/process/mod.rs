//! Process discovery and attachment for Windows targets
//!
//! Locating a process by name, locating a module inside it, and holding the
//! opened handle all live here. The handle implements the crate's
//! [`crate::memory::ProcessMemory`] capability, so everything downstream of
//! attachment is OS-agnostic.

pub mod enumerator;
pub mod handle;
pub mod modules;
pub mod target;

pub use enumerator::{enumerate_processes, find_process, find_process_id, ProcessEnumerator};
pub use handle::{ProcessAccess, ProcessHandle};
pub use modules::{enumerate_modules, find_module, find_module_base, ModuleEnumerator};
pub use target::TargetProcess;
