//! Win32 function wrappers

pub mod kernel32;
