use crate::ffi::*;
use std::ffi::c_void;

#[link(name = "user32")]
unsafe extern "system" {
    pub fn RegisterClassExW(class: *const WNDCLASSEXW) -> ATOM;
    pub fn UnregisterClassW(class_name: LPCWSTR, instance: HINSTANCE) -> BOOL;
    pub fn CreateWindowExW(
        ex_style: DWORD,
        class_name: LPCWSTR,
        window_name: LPCWSTR,
        style: DWORD,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        parent: HWND,
        menu: HMENU,
        instance: HINSTANCE,
        param: *mut c_void,
    ) -> HWND;
    pub fn DestroyWindow(hwnd: HWND) -> BOOL;
    pub fn DefWindowProcW(hwnd: HWND, msg: UINT, wparam: WPARAM, lparam: LPARAM) -> LRESULT;
}
