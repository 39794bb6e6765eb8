//! Direct3D 9 helper DLL
//!
//! This crate builds the `Direct3DLib` dynamic library: four thin utilities
//! over the Direct3D 9 API (loading precompiled vertex/pixel shader blobs
//! from disk, binding shaders to a device) plus creation and destruction of
//! an invisible helper window used as a device-creation anchor.
//!
//! Every export is a synchronous pass-through to one or two native calls.
//! The device's HRESULTs are returned to the caller unchanged; the only
//! locally produced failures are argument screening (`D3DERR_INVALIDCALL`)
//! and file I/O (`HRESULT_FROM_WIN32`).

#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(clippy::missing_safety_doc)]
#![allow(unsafe_op_in_unsafe_fn)]

mod ffi;
#[cfg(windows)]
mod imports;
mod shader_file;
mod window;

pub use ffi::*;

use std::ptr;
use thiserror::Error;

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug-logs")]
        eprintln!($($arg)*)
    };
}

macro_rules! debug_log_return {
    ($tag:literal, $fmt:literal, $expr:expr) => {{
        #[cfg(feature = "debug-logs")]
        {
            let result = $expr;
            eprintln!(concat!($tag, " -> ", $fmt), result);
            result
        }
        #[cfg(not(feature = "debug-logs"))]
        {
            $expr
        }
    }};
}

#[derive(Error, Debug)]
pub enum Direct3DLibError {
    #[error("window class registration failed (error {0})")]
    RegisterClass(u32),
    #[error("window creation failed (error {0})")]
    CreateWindow(u32),
    #[error("hidden windows are not supported on this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Direct3DLibError>;

/// Loads a compiled vertex shader blob from `filename` and creates the
/// shader on `device`.
///
/// On success `*shader` holds one reference the caller must `Release`. On
/// failure `*shader` is null and the returned HRESULT is either the device's
/// own status or a file/argument error.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn LoadVertexShaderFromFile(
    device: *mut IDirect3DDevice9,
    filename: LPCWSTR,
    shader: *mut *mut IDirect3DVertexShader9,
) -> HRESULT {
    debug_log!("[EXPORT] LoadVertexShaderFromFile(device={device:?})");
    if shader.is_null() {
        return D3DERR_INVALIDCALL;
    }
    *shader = ptr::null_mut();
    if device.is_null() {
        return D3DERR_INVALIDCALL;
    }
    let function = match shader_file::read_shader_function(filename) {
        Ok(tokens) => tokens,
        Err(hr) => return hr,
    };
    // The token buffer is dropped on return; the device copies the function.
    debug_log_return!(
        "[EXPORT] LoadVertexShaderFromFile",
        "0x{:08x}",
        ((*(*device).vtable).CreateVertexShader)(device, function.as_ptr(), shader)
    )
}

/// Loads a compiled pixel shader blob from `filename` and creates the shader
/// on `device`. Same contract as [`LoadVertexShaderFromFile`].
#[unsafe(no_mangle)]
pub unsafe extern "system" fn LoadPixelShaderFromFile(
    device: *mut IDirect3DDevice9,
    filename: LPCWSTR,
    shader: *mut *mut IDirect3DPixelShader9,
) -> HRESULT {
    debug_log!("[EXPORT] LoadPixelShaderFromFile(device={device:?})");
    if shader.is_null() {
        return D3DERR_INVALIDCALL;
    }
    *shader = ptr::null_mut();
    if device.is_null() {
        return D3DERR_INVALIDCALL;
    }
    let function = match shader_file::read_shader_function(filename) {
        Ok(tokens) => tokens,
        Err(hr) => return hr,
    };
    debug_log_return!(
        "[EXPORT] LoadPixelShaderFromFile",
        "0x{:08x}",
        ((*(*device).vtable).CreatePixelShader)(device, function.as_ptr(), shader)
    )
}

/// Binds `shader` to the device's vertex stage. A null `shader` unbinds the
/// stage; the device's HRESULT is returned unchanged.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn SetVertexShader(
    device: *mut IDirect3DDevice9,
    shader: *mut IDirect3DVertexShader9,
) -> HRESULT {
    if device.is_null() {
        return D3DERR_INVALIDCALL;
    }
    debug_log_return!(
        "[EXPORT] SetVertexShader",
        "0x{:08x}",
        ((*(*device).vtable).SetVertexShader)(device, shader)
    )
}

/// Binds `shader` to the device's pixel stage. A null `shader` unbinds the
/// stage; the device's HRESULT is returned unchanged.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn SetPixelShader(
    device: *mut IDirect3DDevice9,
    shader: *mut IDirect3DPixelShader9,
) -> HRESULT {
    if device.is_null() {
        return D3DERR_INVALIDCALL;
    }
    debug_log_return!(
        "[EXPORT] SetPixelShader",
        "0x{:08x}",
        ((*(*device).vtable).SetPixelShader)(device, shader)
    )
}

/// Creates an invisible helper window suitable as a Direct3D device-creation
/// anchor. Returns null on failure.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn CreateDummyWindow() -> HWND {
    match window::create_hidden_window() {
        Ok(hwnd) => {
            debug_log!("[EXPORT] CreateDummyWindow -> {hwnd:?}");
            hwnd
        }
        Err(_err) => {
            debug_log!("[EXPORT] CreateDummyWindow failed: {_err}");
            ptr::null_mut()
        }
    }
}

/// Destroys a window created by [`CreateDummyWindow`] and releases the
/// window-class registration once the last window is gone. A null handle is
/// a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn DestroyDummyWindow(hwnd: HWND) {
    debug_log!("[EXPORT] DestroyDummyWindow({hwnd:?})");
    if hwnd.is_null() {
        return;
    }
    window::destroy_hidden_window(hwnd);
}
