//! Win32 import declarations, one module per system DLL.

pub mod kernel32;
pub mod user32;
