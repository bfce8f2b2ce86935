//! Safe wrappers around raw Win32 types

pub mod handle;

pub use handle::Handle;
