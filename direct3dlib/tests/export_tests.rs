//! Contract tests for the exported entry points.
//!
//! Argument screening and file handling are exercised everywhere; tests that
//! need a live window manager are gated to Windows. Device-dependent success
//! paths need a real Direct3D 9 device and are covered by the consumer.

#![allow(unsafe_op_in_unsafe_fn)]

use direct3dlib::*;
use std::path::PathBuf;
use std::ptr::{self, NonNull};

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(Some(0)).collect()
}

fn temp_blob(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("direct3dlib_export_{}_{}", std::process::id(), name));
    std::fs::write(&path, bytes).unwrap();
    path
}

/// A device pointer that is valid to pass but must never be dereferenced.
/// Used to prove failures happen before the device is touched.
fn untouched_device() -> *mut IDirect3DDevice9 {
    NonNull::<IDirect3DDevice9>::dangling().as_ptr()
}

#[test]
fn test_load_vertex_shader_null_arguments() {
    let filename = wide("anything.vso");
    let mut shader: *mut IDirect3DVertexShader9 = ptr::null_mut();
    unsafe {
        assert_eq!(
            LoadVertexShaderFromFile(ptr::null_mut(), filename.as_ptr(), &mut shader),
            D3DERR_INVALIDCALL
        );
        assert!(shader.is_null());

        assert_eq!(
            LoadVertexShaderFromFile(untouched_device(), filename.as_ptr(), ptr::null_mut()),
            D3DERR_INVALIDCALL
        );

        assert_eq!(
            LoadVertexShaderFromFile(untouched_device(), ptr::null(), &mut shader),
            D3DERR_INVALIDCALL
        );
        assert!(shader.is_null());
    }
}

#[test]
fn test_load_pixel_shader_null_arguments() {
    let filename = wide("anything.pso");
    let mut shader: *mut IDirect3DPixelShader9 = ptr::null_mut();
    unsafe {
        assert_eq!(
            LoadPixelShaderFromFile(ptr::null_mut(), filename.as_ptr(), &mut shader),
            D3DERR_INVALIDCALL
        );
        assert!(shader.is_null());

        assert_eq!(
            LoadPixelShaderFromFile(untouched_device(), filename.as_ptr(), ptr::null_mut()),
            D3DERR_INVALIDCALL
        );
    }
}

#[test]
fn test_load_missing_file_clears_out_pointer() {
    let filename = wide("direct3dlib_export_no_such_file.vso");
    // Poison the out pointer to prove the export clears it on failure.
    let mut shader: *mut IDirect3DVertexShader9 = NonNull::dangling().as_ptr();
    let result = unsafe {
        LoadVertexShaderFromFile(untouched_device(), filename.as_ptr(), &mut shader)
    };
    assert_eq!(result as u32, 0x8007_0002);
    assert!(shader.is_null());
}

#[test]
fn test_load_misaligned_blob_rejected_before_device_call() {
    let path = temp_blob("misaligned.vso", &[0x00, 0x02, 0xFE]);
    let filename = wide(path.to_str().unwrap());
    let mut shader: *mut IDirect3DVertexShader9 = ptr::null_mut();
    let result = unsafe {
        LoadVertexShaderFromFile(untouched_device(), filename.as_ptr(), &mut shader)
    };
    assert_eq!(result, D3DERR_INVALIDCALL);
    assert!(shader.is_null());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_set_shader_null_device() {
    unsafe {
        assert_eq!(SetVertexShader(ptr::null_mut(), ptr::null_mut()), D3DERR_INVALIDCALL);
        assert_eq!(SetPixelShader(ptr::null_mut(), ptr::null_mut()), D3DERR_INVALIDCALL);
    }
}

#[test]
fn test_destroy_null_window_is_noop() {
    unsafe {
        DestroyDummyWindow(ptr::null_mut());
        DestroyDummyWindow(ptr::null_mut());
    }
}

#[cfg(windows)]
#[test]
fn test_dummy_window_round_trip() {
    unsafe {
        let hwnd = CreateDummyWindow();
        assert!(!hwnd.is_null());
        DestroyDummyWindow(hwnd);

        // The class registration must survive repeated cycles.
        let hwnd = CreateDummyWindow();
        assert!(!hwnd.is_null());
        DestroyDummyWindow(hwnd);
    }
}

#[cfg(windows)]
#[test]
fn test_concurrent_dummy_windows() {
    unsafe {
        let first = CreateDummyWindow();
        let second = CreateDummyWindow();
        assert!(!first.is_null());
        assert!(!second.is_null());
        assert_ne!(first, second);

        // Destroying one window must not break the other's class.
        DestroyDummyWindow(first);
        let third = CreateDummyWindow();
        assert!(!third.is_null());
        DestroyDummyWindow(third);
        DestroyDummyWindow(second);
    }
}

#[cfg(not(windows))]
#[test]
fn test_dummy_window_unavailable_off_windows() {
    unsafe {
        assert!(CreateDummyWindow().is_null());
    }
}
