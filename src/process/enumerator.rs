//! Process enumeration using the Windows ToolHelp32 API

use crate::core::types::{MemoryError, MemoryResult, ProcessId, ProcessInfo};
use crate::windows::utils::string_conv::wide_to_string;
use std::mem;
use winapi::shared::minwindef::FALSE;
use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
use winapi::um::tlhelp32::{
    CreateToolhelp32Snapshot, Process32FirstW, Process32NextW, PROCESSENTRY32W,
    TH32CS_SNAPPROCESS,
};
use winapi::um::winnt::HANDLE;

/// Iterator over a system-wide process snapshot.
///
/// The snapshot handle is released when the enumerator drops, on every exit
/// path — including an early return after the first match.
pub struct ProcessEnumerator {
    snapshot: HANDLE,
    first_called: bool,
}

impl ProcessEnumerator {
    /// Take a new system-wide process snapshot
    pub fn new() -> MemoryResult<Self> {
        unsafe {
            let snapshot = CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0);
            if snapshot.is_null() || snapshot == INVALID_HANDLE_VALUE {
                return Err(MemoryError::WindowsApi(
                    "Failed to create process snapshot".to_string(),
                ));
            }
            Ok(ProcessEnumerator {
                snapshot,
                first_called: false,
            })
        }
    }

    fn next_process(&mut self) -> Option<ProcessInfo> {
        unsafe {
            let mut entry: PROCESSENTRY32W = mem::zeroed();
            entry.dwSize = mem::size_of::<PROCESSENTRY32W>() as u32;

            let success = if !self.first_called {
                self.first_called = true;
                Process32FirstW(self.snapshot, &mut entry)
            } else {
                Process32NextW(self.snapshot, &mut entry)
            };

            if success == FALSE {
                return None;
            }

            Some(ProcessInfo::with_details(
                entry.th32ProcessID,
                wide_to_string(&entry.szExeFile),
                Some(entry.th32ParentProcessID),
                entry.cntThreads,
            ))
        }
    }
}

impl Drop for ProcessEnumerator {
    fn drop(&mut self) {
        if !self.snapshot.is_null() && self.snapshot != INVALID_HANDLE_VALUE {
            unsafe {
                let _ = CloseHandle(self.snapshot);
            }
        }
    }
}

impl Iterator for ProcessEnumerator {
    type Item = ProcessInfo;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_process()
    }
}

/// Enumerate all running processes
pub fn enumerate_processes() -> MemoryResult<Vec<ProcessInfo>> {
    let mut processes = Vec::new();
    let mut enumerator = ProcessEnumerator::new()?;

    while let Some(process) = enumerator.next_process() {
        processes.push(process);
    }

    Ok(processes)
}

/// Find a running process by image name.
///
/// Matching is case-SENSITIVE and exact; `minecraft.windows.exe` does not
/// match `Minecraft.Windows.exe`. If several processes share the name, the
/// first one in OS enumeration order wins.
pub fn find_process(name: &str) -> MemoryResult<ProcessInfo> {
    let mut enumerator = ProcessEnumerator::new()?;
    enumerator
        .find(|p| p.name == name)
        .ok_or_else(|| MemoryError::ProcessNotFound(name.to_string()))
}

/// Find a running process's identifier by image name
pub fn find_process_id(name: &str) -> MemoryResult<ProcessId> {
    find_process(name).map(|p| p.pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_enumerator_new() {
        let enumerator = ProcessEnumerator::new();
        assert!(enumerator.is_ok());
    }

    #[test]
    fn test_enumerate_processes() {
        let processes = enumerate_processes().unwrap();

        // Should have at least System and System Idle Process
        assert!(processes.len() >= 2);

        // Check for System process (PID 4)
        let system_process = processes.iter().find(|p| p.pid == 4);
        assert!(system_process.is_some());
    }

    #[test]
    fn test_process_enumerator_iterator() {
        let enumerator = ProcessEnumerator::new().unwrap();
        let count = enumerator.take(5).count();
        assert!(count > 0);
    }

    #[test]
    fn test_current_process_in_enumeration() {
        let current_pid = std::process::id();

        let processes = enumerate_processes().unwrap();
        let current_process = processes.iter().find(|p| p.pid == current_pid);
        assert!(current_process.is_some());
    }

    #[test]
    fn test_find_process_not_found() {
        let result = find_process("NonExistentProcess123456.exe");
        assert!(matches!(
            result.unwrap_err(),
            MemoryError::ProcessNotFound(_)
        ));
    }

    #[test]
    fn test_find_process_id_is_case_sensitive() {
        let current_pid = std::process::id();
        let processes = enumerate_processes().unwrap();
        let me = processes.iter().find(|p| p.pid == current_pid).unwrap();

        assert!(find_process_id(&me.name).unwrap() > 0);

        // A case-flipped name must not match
        let flipped: String = me
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        if flipped != me.name {
            assert!(find_process_id(&flipped).is_err());
        }
    }

    #[test]
    fn test_process_enumerator_drop() {
        // Test that drop doesn't leak or crash
        {
            let _enumerator = ProcessEnumerator::new().unwrap();
        }
    }
}
