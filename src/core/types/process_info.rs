//! Process and module information types

use super::{Address, ProcessId};
use serde::{Deserialize, Serialize};

/// Information about a running process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub pid: ProcessId,
    pub name: String,
    pub parent_pid: Option<ProcessId>,
    pub thread_count: u32,
}

impl ProcessInfo {
    /// Creates a new ProcessInfo with minimal information
    pub fn new(pid: ProcessId, name: String) -> Self {
        ProcessInfo {
            pid,
            name,
            parent_pid: None,
            thread_count: 0,
        }
    }

    /// Creates a ProcessInfo from a full enumeration entry
    pub fn with_details(
        pid: ProcessId,
        name: String,
        parent_pid: Option<ProcessId>,
        thread_count: u32,
    ) -> Self {
        ProcessInfo {
            pid,
            name,
            parent_pid,
            thread_count,
        }
    }

    /// Checks if this is a system process
    pub fn is_system_process(&self) -> bool {
        self.pid == 0 || self.pid == 4
    }
}

/// Information about a loaded module in a process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub base_address: Address,
    pub size: usize,
}

impl ModuleInfo {
    /// Creates a new ModuleInfo
    pub fn new(name: String, base_address: Address, size: usize) -> Self {
        ModuleInfo {
            name,
            base_address,
            size,
        }
    }

    /// Gets the end address of the module
    pub fn end_address(&self) -> Address {
        self.base_address.add(self.size)
    }

    /// Checks if an address is within this module
    pub fn contains_address(&self, address: Address) -> bool {
        address >= self.base_address && address < self.end_address()
    }
}
