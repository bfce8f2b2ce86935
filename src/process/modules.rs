//! Module enumeration using the Windows ToolHelp32 API

use crate::core::types::{Address, MemoryError, MemoryResult, ModuleInfo, ProcessId};
use crate::windows::utils::string_conv::wide_to_string;
use std::mem;
use winapi::shared::minwindef::FALSE;
use winapi::shared::winerror::ERROR_ACCESS_DENIED;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
use winapi::um::tlhelp32::{
    CreateToolhelp32Snapshot, Module32FirstW, Module32NextW, MODULEENTRY32W, TH32CS_SNAPMODULE,
    TH32CS_SNAPMODULE32,
};
use winapi::um::winnt::HANDLE;

/// Iterator over the modules loaded in one process.
///
/// Holds a ToolHelp32 module snapshot; the snapshot handle is released on
/// drop, on every exit path.
pub struct ModuleEnumerator {
    snapshot: HANDLE,
    first_called: bool,
}

impl ModuleEnumerator {
    /// Take a module snapshot of the process identified by `pid`
    pub fn new(pid: ProcessId) -> MemoryResult<Self> {
        unsafe {
            let snapshot =
                CreateToolhelp32Snapshot(TH32CS_SNAPMODULE | TH32CS_SNAPMODULE32, pid);
            if snapshot.is_null() || snapshot == INVALID_HANDLE_VALUE {
                if GetLastError() == ERROR_ACCESS_DENIED {
                    return Err(MemoryError::access_denied(
                        pid,
                        "module snapshot refused",
                    ));
                }
                return Err(MemoryError::WindowsApi(format!(
                    "Failed to create module snapshot for PID {}",
                    pid
                )));
            }
            Ok(ModuleEnumerator {
                snapshot,
                first_called: false,
            })
        }
    }

    fn next_module(&mut self) -> Option<ModuleInfo> {
        unsafe {
            let mut entry: MODULEENTRY32W = mem::zeroed();
            entry.dwSize = mem::size_of::<MODULEENTRY32W>() as u32;

            let success = if !self.first_called {
                self.first_called = true;
                Module32FirstW(self.snapshot, &mut entry)
            } else {
                Module32NextW(self.snapshot, &mut entry)
            };

            if success == FALSE {
                return None;
            }

            Some(ModuleInfo::new(
                wide_to_string(&entry.szModule),
                Address::from(entry.modBaseAddr as *const u8),
                entry.modBaseSize as usize,
            ))
        }
    }
}

impl Drop for ModuleEnumerator {
    fn drop(&mut self) {
        if !self.snapshot.is_null() && self.snapshot != INVALID_HANDLE_VALUE {
            unsafe {
                let _ = CloseHandle(self.snapshot);
            }
        }
    }
}

impl Iterator for ModuleEnumerator {
    type Item = ModuleInfo;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_module()
    }
}

/// Enumerate all modules loaded in a process
pub fn enumerate_modules(pid: ProcessId) -> MemoryResult<Vec<ModuleInfo>> {
    let mut modules = Vec::new();
    let mut enumerator = ModuleEnumerator::new(pid)?;

    while let Some(module) = enumerator.next_module() {
        modules.push(module);
    }

    Ok(modules)
}

/// Find a loaded module by name.
///
/// Matching is case-SENSITIVE and exact, like process lookup.
pub fn find_module(pid: ProcessId, name: &str) -> MemoryResult<ModuleInfo> {
    let mut enumerator = ModuleEnumerator::new(pid)?;
    enumerator
        .find(|m| m.name == name)
        .ok_or_else(|| MemoryError::ModuleNotFound(name.to_string()))
}

/// Find the base load address of a named module in a process
pub fn find_module_base(pid: ProcessId, name: &str) -> MemoryResult<Address> {
    find_module(pid, name).map(|m| m.base_address)
}
