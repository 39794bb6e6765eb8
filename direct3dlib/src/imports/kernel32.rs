use crate::ffi::*;

#[link(name = "kernel32")]
unsafe extern "system" {
    pub fn GetModuleHandleW(module_name: LPCWSTR) -> HINSTANCE;
    pub fn GetLastError() -> DWORD;
}
