//! Hidden helper window used as a device-creation anchor.
//!
//! Direct3D 9 device creation wants a focus window even when nothing will
//! ever be rendered to the screen. The window created here is never shown:
//! plain overlapped style without `WS_VISIBLE`, default geometry, default
//! window procedure.
//!
//! All windows share one window-class registration. The registration is
//! reference-counted so that destroying one window does not pull the class
//! out from under another still-live window; the last destroy unregisters.

#[cfg(windows)]
mod imp {
    use crate::ffi::*;
    use crate::imports::kernel32::{GetLastError, GetModuleHandleW};
    use crate::imports::user32::{
        CreateWindowExW, DefWindowProcW, DestroyWindow, RegisterClassExW, UnregisterClassW,
    };
    use crate::{Direct3DLibError, Result};
    use std::mem;
    use std::ptr;
    use std::sync::Mutex;

    const CLASS_NAME: &str = "Direct3DLibHiddenWindow";

    // Live windows sharing the class registration.
    static REGISTRATIONS: Mutex<usize> = Mutex::new(0);

    fn class_name_wide() -> Vec<u16> {
        CLASS_NAME.encode_utf16().chain(Some(0)).collect()
    }

    pub fn create_hidden_window() -> Result<HWND> {
        let class_name = class_name_wide();
        let mut registrations = REGISTRATIONS.lock().unwrap();
        unsafe {
            let instance = GetModuleHandleW(ptr::null());

            if *registrations == 0 {
                let class = WNDCLASSEXW {
                    cbSize: mem::size_of::<WNDCLASSEXW>() as UINT,
                    style: 0,
                    lpfnWndProc: Some(DefWindowProcW),
                    cbClsExtra: 0,
                    cbWndExtra: 0,
                    hInstance: instance,
                    hIcon: ptr::null_mut(),
                    hCursor: ptr::null_mut(),
                    hbrBackground: ptr::null_mut(),
                    lpszMenuName: ptr::null(),
                    lpszClassName: class_name.as_ptr(),
                    hIconSm: ptr::null_mut(),
                };
                if RegisterClassExW(&class) == 0 {
                    let code = GetLastError();
                    if code != ERROR_CLASS_ALREADY_EXISTS {
                        return Err(Direct3DLibError::RegisterClass(code));
                    }
                }
            }

            let hwnd = CreateWindowExW(
                0,
                class_name.as_ptr(),
                ptr::null(),
                WS_OVERLAPPED,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                ptr::null_mut(),
                ptr::null_mut(),
                instance,
                ptr::null_mut(),
            );
            if hwnd.is_null() {
                let code = GetLastError();
                if *registrations == 0 {
                    UnregisterClassW(class_name.as_ptr(), instance);
                }
                return Err(Direct3DLibError::CreateWindow(code));
            }

            *registrations += 1;
            Ok(hwnd)
        }
    }

    pub fn destroy_hidden_window(hwnd: HWND) {
        let class_name = class_name_wide();
        let mut registrations = REGISTRATIONS.lock().unwrap();
        unsafe {
            DestroyWindow(hwnd);
            if *registrations > 0 {
                *registrations -= 1;
                if *registrations == 0 {
                    UnregisterClassW(class_name.as_ptr(), GetModuleHandleW(std::ptr::null()));
                }
            }
        }
    }
}

#[cfg(not(windows))]
mod imp {
    use crate::ffi::HWND;
    use crate::{Direct3DLibError, Result};

    pub fn create_hidden_window() -> Result<HWND> {
        Err(Direct3DLibError::Unsupported)
    }

    pub fn destroy_hidden_window(_hwnd: HWND) {}
}

pub(crate) use imp::{create_hidden_window, destroy_hidden_window};
