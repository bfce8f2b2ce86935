//! Safe process handle wrapper with RAII semantics

use crate::core::types::{Address, MemoryError, MemoryResult, ProcessId};
use crate::memory::ProcessMemory;
use crate::windows::bindings::kernel32;
use crate::windows::types::Handle;
use std::fmt;

/// Access rights for process handles
#[derive(Debug, Clone, Copy)]
pub struct ProcessAccess {
    value: u32,
}

impl ProcessAccess {
    /// All possible access rights
    pub const ALL_ACCESS: Self = Self { value: 0x1FFFFF };
    /// Query information access
    pub const QUERY_INFORMATION: Self = Self { value: 0x0400 };
    /// Read memory access
    pub const VM_READ: Self = Self { value: 0x0010 };
    /// Write memory access
    pub const VM_WRITE: Self = Self { value: 0x0020 };
    /// Execute operations
    pub const VM_OPERATION: Self = Self { value: 0x0008 };

    /// Combine access rights
    pub fn combine(rights: &[Self]) -> Self {
        let mut value = 0;
        for right in rights {
            value |= right.value;
        }
        Self { value }
    }

    /// Get raw value
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Safe wrapper around a Windows process handle.
///
/// The handle is owned exclusively and closed when this wrapper drops,
/// including when initialization of a larger context fails partway.
pub struct ProcessHandle {
    handle: Handle,
    pid: ProcessId,
    access: ProcessAccess,
}

impl ProcessHandle {
    /// Open a process with specified access rights
    pub fn open(pid: ProcessId, access: ProcessAccess) -> MemoryResult<Self> {
        let raw_handle = kernel32::open_process(pid, access.value())?;
        Ok(ProcessHandle {
            handle: Handle::new(raw_handle),
            pid,
            access,
        })
    }

    /// Open a process with all access rights
    pub fn open_all_access(pid: ProcessId) -> MemoryResult<Self> {
        Self::open(pid, ProcessAccess::ALL_ACCESS)
    }

    /// Open a process for reading memory
    pub fn open_for_read(pid: ProcessId) -> MemoryResult<Self> {
        Self::open(
            pid,
            ProcessAccess::combine(&[ProcessAccess::QUERY_INFORMATION, ProcessAccess::VM_READ]),
        )
    }

    /// Open a process for reading and writing memory
    pub fn open_for_read_write(pid: ProcessId) -> MemoryResult<Self> {
        Self::open(
            pid,
            ProcessAccess::combine(&[
                ProcessAccess::QUERY_INFORMATION,
                ProcessAccess::VM_READ,
                ProcessAccess::VM_WRITE,
                ProcessAccess::VM_OPERATION,
            ]),
        )
    }

    /// Get the process ID
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Get the access rights
    pub fn access(&self) -> ProcessAccess {
        self.access
    }

    /// Check if handle is valid
    pub fn is_valid(&self) -> bool {
        !self.handle.is_null()
    }

    fn ensure_valid(&self) -> MemoryResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(MemoryError::InvalidHandle(
                "Process handle is null".to_string(),
            ))
        }
    }
}

impl ProcessMemory for ProcessHandle {
    /// Read exactly `buffer.len()` bytes from the target process
    fn read_bytes(&self, address: Address, buffer: &mut [u8]) -> MemoryResult<()> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.ensure_valid()?;

        let transferred = unsafe {
            kernel32::read_process_memory(self.handle.raw(), address.as_usize(), buffer)?
        };
        if transferred != buffer.len() {
            return Err(MemoryError::partial_transfer(
                address,
                buffer.len(),
                transferred,
            ));
        }
        Ok(())
    }

    /// Write all of `data` into the target process
    fn write_bytes(&self, address: Address, data: &[u8]) -> MemoryResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        self.ensure_valid()?;

        let transferred = unsafe {
            kernel32::write_process_memory(self.handle.raw(), address.as_usize(), data)?
        };
        if transferred != data.len() {
            return Err(MemoryError::partial_transfer(
                address,
                data.len(),
                transferred,
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("valid", &self.is_valid())
            .field("access", &format!("0x{:X}", self.access.value()))
            .finish()
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProcessHandle(pid={}, valid={})",
            self.pid,
            self.is_valid()
        )
    }
}
