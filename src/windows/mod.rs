//! Thin safe layer over the Win32 APIs the trainer needs
//!
//! Only three OS facilities are touched: process enumeration, module
//! enumeration, and cross-process memory read/write. Everything else in the
//! crate goes through the [`crate::memory::ProcessMemory`] capability, so
//! this module is the whole vendor-specific surface.

pub mod bindings;
pub mod types;
pub mod utils;
